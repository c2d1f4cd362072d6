use crate::notice_generation::domain::{AttributeRecord, LicenseRecord};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// ComponentRecord - one third-party software unit in the report
///
/// Identity within a report run is the `(name, version)` pair; the map
/// key form is `"name:version"`. The attribute map holds at most one
/// record per attribute name; later insertion overwrites earlier, so
/// component-level attributes take precedence over request-level ones
/// when inserted last.
#[derive(Debug, Clone, Serialize)]
pub struct ComponentRecord {
    id: String,
    name: String,
    version: String,
    homepage: Option<String>,
    licenses: Vec<LicenseRecord>,
    file_paths: BTreeSet<String>,
    copyrights: BTreeSet<String>,
    attributes: BTreeMap<String, AttributeRecord>,
    include_in_report: bool,
}

impl ComponentRecord {
    pub fn new(id: String, name: String, version: String, homepage: Option<String>) -> Self {
        Self {
            id,
            name,
            version,
            homepage,
            licenses: Vec::new(),
            file_paths: BTreeSet::new(),
            copyrights: BTreeSet::new(),
            attributes: BTreeMap::new(),
            include_in_report: true,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn homepage(&self) -> Option<&str> {
        self.homepage.as_deref()
    }

    /// Map key used in the final report: `"name:version"`.
    pub fn key(&self) -> String {
        format!("{}:{}", self.name, self.version)
    }

    pub fn licenses(&self) -> &[LicenseRecord] {
        &self.licenses
    }

    pub fn add_license(&mut self, license: LicenseRecord) {
        self.licenses.push(license);
    }

    pub fn file_paths(&self) -> &BTreeSet<String> {
        &self.file_paths
    }

    pub fn add_file_path(&mut self, path: String) {
        self.file_paths.insert(path);
    }

    pub fn copyrights(&self) -> &BTreeSet<String> {
        &self.copyrights
    }

    pub fn add_copyright(&mut self, copyright: String) {
        self.copyrights.insert(copyright);
    }

    pub fn attributes(&self) -> &BTreeMap<String, AttributeRecord> {
        &self.attributes
    }

    /// Inserts an attribute record keyed by its resolved name.
    /// Last write wins on name collision.
    pub fn insert_attribute(&mut self, record: AttributeRecord) {
        self.attributes.insert(record.name().to_string(), record);
    }

    pub fn attribute(&self, name: &str) -> Option<&AttributeRecord> {
        self.attributes.get(name)
    }

    pub fn include_in_report(&self) -> bool {
        self.include_in_report
    }

    pub fn exclude_from_report(&mut self) {
        self.include_in_report = false;
    }

    /// Replaces the first license in place with override text.
    ///
    /// Removes the front of the license list, rewrites it via
    /// [`LicenseRecord::apply_override`], and re-appends it at the end.
    /// Returns the rewritten license's name, or `None` when the list is
    /// empty (the caller must treat that as a skipped override, not an
    /// error).
    pub fn override_first_license(&mut self, new_text: &str) -> Option<String> {
        if self.licenses.is_empty() {
            return None;
        }
        let mut license = self.licenses.remove(0);
        license.apply_override(new_text);
        let name = license.name().map(str::to_string);
        self.licenses.push(license);
        name
    }
}
