use crate::notice_generation::domain::{ComponentRecord, ReportMetadata};
use crate::shared::Result;
use std::collections::BTreeMap;

/// ReportFormatter port for rendering the assembled component map
///
/// Implementations turn the final `"name:version"` keyed component map
/// into a complete output document (HTML page, JSON document).
/// `export_properties` are user-configured key/value pairs displayed
/// alongside the component data.
pub trait ReportFormatter {
    fn format(
        &self,
        components: &BTreeMap<String, ComponentRecord>,
        metadata: &ReportMetadata,
        export_properties: &BTreeMap<String, String>,
    ) -> Result<String>;
}
