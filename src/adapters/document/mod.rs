//! Document adapters - Implementations of the ReportRenderer port.
//!
//! - `TemplateReportRenderer` - Markdown narrative, JSON structured document
//!   and Markdown issue body from assembled report content

mod template_renderer;

pub use template_renderer::TemplateReportRenderer;
