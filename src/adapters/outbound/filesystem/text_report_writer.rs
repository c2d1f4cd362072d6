use crate::notice_generation::domain::ComponentRecord;
use crate::shared::error::NoticeError;
use crate::shared::Result;
use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

const SECTION_SEPARATOR: &str =
    "==========================================================================";

/// TextReportWriter adapter for per-component notice text files
///
/// Writes one `<name>_<version>.txt` file per included component into
/// the output directory, with file path, copyright and license text
/// sections. The path and copyright sections can be switched off in
/// configuration.
pub struct TextReportWriter {
    output_dir: PathBuf,
    show_file_paths: bool,
    show_copyrights: bool,
}

impl TextReportWriter {
    pub fn new(output_dir: PathBuf, show_file_paths: bool, show_copyrights: bool) -> Self {
        Self {
            output_dir,
            show_file_paths,
            show_copyrights,
        }
    }

    /// Writes all component text files, returning the created paths.
    pub fn write(&self, components: &BTreeMap<String, ComponentRecord>) -> Result<Vec<PathBuf>> {
        fs::create_dir_all(&self.output_dir).map_err(|e| NoticeError::FileWriteError {
            path: self.output_dir.clone(),
            details: e.to_string(),
        })?;

        let mut written = Vec::new();
        for component in components.values() {
            let file_name = format!(
                "{}_{}.txt",
                sanitize_file_name(component.name()),
                sanitize_file_name(component.version())
            );
            let path = self.output_dir.join(file_name);

            let content = self.render_component(component);
            fs::write(&path, content).map_err(|e| NoticeError::FileWriteError {
                path: path.clone(),
                details: e.to_string(),
            })?;
            written.push(path);
        }

        Ok(written)
    }

    fn render_component(&self, component: &ComponentRecord) -> String {
        let mut out = String::new();

        if self.show_file_paths {
            let _ = writeln!(out, "file paths ({})", component.file_paths().len());
            for path in component.file_paths() {
                let _ = writeln!(out, "{}", path);
            }
        }

        if self.show_copyrights {
            let _ = writeln!(out);
            let _ = writeln!(out, "copyrights ({})", component.copyrights().len());
            for copyright in component.copyrights() {
                let _ = writeln!(out, "{}", copyright);
            }
        }

        let _ = writeln!(out);
        let _ = writeln!(out, "License texts ({})", component.licenses().len());
        for (idx, license) in component.licenses().iter().enumerate() {
            let license_name = match license.name() {
                Some(name) => format!("{}(Taken from KnowledgeBase)", name),
                None => format!("license_{}(Taken from scanned file)", idx),
            };
            let _ = writeln!(out);
            let _ = writeln!(out, "{}", SECTION_SEPARATOR);
            let _ = writeln!(out, "{}", license_name);
            let _ = write!(out, "{}", license.text());
        }

        out
    }
}

/// Keeps component names usable as file names.
fn sanitize_file_name(raw: &str) -> String {
    raw.replace(['/', '\\', ':'], "_")
}

/// Conventional directory name for an application's text notices.
pub fn text_files_dir(application_name: &str, base: &Path) -> PathBuf {
    base.join(format!("{}_text_files", sanitize_file_name(application_name)))
}
