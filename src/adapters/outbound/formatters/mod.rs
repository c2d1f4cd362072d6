/// Formatter adapters for rendering the assembled report
mod html_formatter;
mod json_formatter;

pub use html_formatter::HtmlReportFormatter;
pub use json_formatter::JsonReportFormatter;
