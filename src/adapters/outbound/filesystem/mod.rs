/// Filesystem adapters for report output
mod file_writer;
mod text_report_writer;

pub use file_writer::{FileSystemWriter, StdoutPresenter};
pub use text_report_writer::{text_files_dir, TextReportWriter};
