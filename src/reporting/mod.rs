pub mod formatter;
pub mod html;

pub use formatter::{format_gb, format_report_text};
pub use html::render_dashboard;
