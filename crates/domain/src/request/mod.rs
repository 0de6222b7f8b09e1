//! HTTP request domain types

mod body;
mod header;
mod method;
mod record;
mod spec;

pub use body::{RequestBody, RequestBodyKind};
pub use header::{Header, Headers};
pub use method::HttpMethod;
pub use record::RequestRecord;
pub use spec::RequestSpec;
