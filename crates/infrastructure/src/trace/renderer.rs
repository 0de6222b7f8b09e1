//! Renders one completed exchange into a human-readable trace.

use apiprobe_domain::{LogDetail, RequestRecord, ResponseSpec, TraceStyle};

/// Stateless renderer for request/response traces.
///
/// Rendering never alters or rejects content: bodies that parse as
/// JSON are pretty-printed, everything else is passed through
/// verbatim, and what cannot be read is simply omitted.
#[derive(Debug, Clone, Copy)]
pub struct TraceRenderer {
    style: TraceStyle,
}

impl TraceRenderer {
    /// Creates a renderer for the given template.
    #[must_use]
    pub const fn new(style: TraceStyle) -> Self {
        Self { style }
    }

    /// Renders the exchange at the given detail level.
    ///
    /// Returns an empty string for [`LogDetail::None`].
    #[must_use]
    pub fn render(
        &self,
        request: &RequestRecord,
        response: &ResponseSpec,
        detail: LogDetail,
    ) -> String {
        if detail == LogDetail::None {
            return String::new();
        }
        match self.style {
            TraceStyle::Plain => Self::render_plain(request, response, detail),
            TraceStyle::Boxed => Self::render_boxed(request, response, detail),
        }
    }

    fn render_plain(request: &RequestRecord, response: &ResponseSpec, detail: LogDetail) -> String {
        let mut out = String::new();

        if detail.logs_status() {
            out.push_str(&format!("> {} {}\n", request.method(), request.url()));
        }
        if detail.logs_headers() {
            for header in request.headers() {
                out.push_str(&format!("> {}: {}\n", header.name, header.value));
            }
        }
        if detail.logs_body() && !request.body().is_empty() {
            for line in display_body(&request.body().content).lines() {
                out.push_str(&format!("> {line}\n"));
            }
        }

        if detail.logs_status() {
            out.push_str(&format!(
                "< {} ({}, {})\n",
                response.status_code(),
                response.duration_display(),
                response.size_display()
            ));
        }
        if detail.logs_headers() {
            let mut names: Vec<_> = response.headers.iter().collect();
            names.sort_by(|a, b| a.0.cmp(b.0));
            for (name, value) in names {
                out.push_str(&format!("< {name}: {value}\n"));
            }
        }
        if detail.logs_body() && !response.body.is_empty() {
            for line in display_body(&response.body).lines() {
                out.push_str(&format!("< {line}\n"));
            }
        }

        out
    }

    fn render_boxed(request: &RequestRecord, response: &ResponseSpec, detail: LogDetail) -> String {
        let mut out = String::new();

        if detail.logs_status() {
            out.push_str(&format!(
                "┌─ REQUEST ── {} {}\n",
                request.method(),
                request.url()
            ));
        } else {
            out.push_str("┌─ REQUEST\n");
        }
        if detail.logs_headers() {
            for header in request.headers() {
                out.push_str(&format!("│ {}: {}\n", header.name, header.value));
            }
        }
        if detail.logs_body() && !request.body().is_empty() {
            for line in display_body(&request.body().content).lines() {
                out.push_str(&format!("│ {line}\n"));
            }
        }

        if detail.logs_status() {
            out.push_str(&format!(
                "├─ RESPONSE ─ {} ({}, {})\n",
                response.status_code(),
                response.duration_display(),
                response.size_display()
            ));
        } else {
            out.push_str("├─ RESPONSE\n");
        }
        if detail.logs_headers() {
            let mut names: Vec<_> = response.headers.iter().collect();
            names.sort_by(|a, b| a.0.cmp(b.0));
            for (name, value) in names {
                out.push_str(&format!("│ {name}: {value}\n"));
            }
        }
        if detail.logs_body() && !response.body.is_empty() {
            for line in display_body(&response.body).lines() {
                out.push_str(&format!("│ {line}\n"));
            }
        }
        out.push_str("└─\n");

        out
    }
}

/// Pretty-prints JSON bodies; passes everything else through.
fn display_body(raw: &str) -> String {
    serde_json::from_str::<serde_json::Value>(raw)
        .and_then(|v| serde_json::to_string_pretty(&v))
        .unwrap_or_else(|_| raw.to_string())
}
