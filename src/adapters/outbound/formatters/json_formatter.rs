use crate::notice_generation::domain::{ComponentRecord, ReportMetadata};
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Serialize)]
struct JsonReport<'a> {
    metadata: &'a ReportMetadata,
    properties: &'a BTreeMap<String, String>,
    components: &'a BTreeMap<String, ComponentRecord>,
}

/// JsonReportFormatter adapter for machine-readable report output
///
/// Emits the same data the HTML report embeds, as one pretty-printed
/// JSON document.
pub struct JsonReportFormatter;

impl JsonReportFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonReportFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for JsonReportFormatter {
    fn format(
        &self,
        components: &BTreeMap<String, ComponentRecord>,
        metadata: &ReportMetadata,
        export_properties: &BTreeMap<String, String>,
    ) -> Result<String> {
        let report = JsonReport {
            metadata,
            properties: export_properties,
            components,
        };
        Ok(serde_json::to_string_pretty(&report)?)
    }
}
