use crate::notice_generation::domain::{ComponentRecord, ReportMetadata};
use crate::ports::outbound::ReportFormatter;
use crate::shared::error::NoticeError;
use crate::shared::Result;
use std::collections::BTreeMap;

/// Class of the div element the report data is injected into.
const JSON_DATA_BLOCK_CLASS: &str = "notice-json-data";

/// Built-in report template. A custom template only needs to carry the
/// same empty data block div; everything else is free-form.
const DEFAULT_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Open Source Notice Report</title>
<style>
body { font-family: sans-serif; margin: 2em; color: #222; }
h1 { border-bottom: 2px solid #444; padding-bottom: 0.3em; }
table { border-collapse: collapse; width: 100%; margin-top: 1em; }
th, td { border: 1px solid #ccc; padding: 0.4em 0.7em; text-align: left; vertical-align: top; }
th { background: #f0f0f0; }
pre.license { white-space: pre-wrap; max-height: 18em; overflow-y: auto; background: #fafafa; padding: 0.5em; }
dl.props dt { font-weight: bold; }
p.meta { color: #666; font-size: 0.9em; }
</style>
</head>
<body>
<h1>Open Source Notice Report</h1>
<p class="meta" id="report-meta"></p>
<dl class="props" id="property-list"></dl>
<div id="component-table"></div>
<div class="notice-json-data"></div>
<script>
function renderReport() {
  var components = compList[0];
  var properties = propList[0];
  var meta = reportInfo[0];

  document.getElementById("report-meta").textContent =
    meta.application_name + ":" + meta.application_version +
    " — generated " + meta.timestamp + " by " + meta.tool_name + " " + meta.tool_version;

  var props = document.getElementById("property-list");
  Object.keys(properties).forEach(function (key) {
    var dt = document.createElement("dt");
    dt.textContent = key;
    var dd = document.createElement("dd");
    dd.textContent = properties[key];
    props.appendChild(dt);
    props.appendChild(dd);
  });

  var table = document.createElement("table");
  var header = table.insertRow();
  ["Component", "Version", "Homepage", "Licenses"].forEach(function (title) {
    var th = document.createElement("th");
    th.textContent = title;
    header.appendChild(th);
  });
  Object.keys(components).forEach(function (key) {
    var component = components[key];
    var row = table.insertRow();
    row.insertCell().textContent = component.name;
    row.insertCell().textContent = component.version;
    row.insertCell().textContent = component.homepage || "";
    var cell = row.insertCell();
    component.licenses.forEach(function (license) {
      var title = document.createElement("div");
      title.textContent = license.name || "(unnamed license)";
      var pre = document.createElement("pre");
      pre.className = "license";
      pre.textContent = license.text;
      cell.appendChild(title);
      cell.appendChild(pre);
    });
  });
  document.getElementById("component-table").appendChild(table);
}
renderReport();
</script>
</body>
</html>
"#;

/// HtmlReportFormatter adapter for the HTML notice report
///
/// Renders the component map as a self-contained HTML page by
/// serializing the data to JSON and injecting it as script variables
/// into the template's empty data block div. Any stale content inside
/// the block is discarded, so a previously generated report can be
/// reused as a template.
pub struct HtmlReportFormatter {
    template: String,
}

impl HtmlReportFormatter {
    pub fn new() -> Self {
        Self {
            template: DEFAULT_TEMPLATE.to_string(),
        }
    }

    /// Uses a caller-supplied template instead of the built-in one.
    pub fn with_template(template: String) -> Self {
        Self { template }
    }

    /// Serializes a value for embedding inside a script element.
    ///
    /// `</` is escaped so license texts containing closing tags cannot
    /// terminate the surrounding script element.
    fn to_embedded_json<T: serde::Serialize>(value: &T) -> Result<String> {
        let json = serde_json::to_string_pretty(value)?;
        Ok(json.replace("</", "<\\/"))
    }

    /// Replaces the content of the data block div with the given scripts.
    fn inject_into_data_block(&self, scripts: &str) -> Result<String> {
        let marker = format!("class=\"{}\"", JSON_DATA_BLOCK_CLASS);
        let missing = || NoticeError::TemplateMarkerMissing {
            marker: JSON_DATA_BLOCK_CLASS.to_string(),
        };

        let class_pos = self.template.find(&marker).ok_or_else(missing)?;
        let open_end = self.template[class_pos..]
            .find('>')
            .map(|i| class_pos + i + 1)
            .ok_or_else(missing)?;
        let close_pos = self.template[open_end..]
            .find("</div>")
            .map(|i| open_end + i)
            .ok_or_else(missing)?;

        let mut output = String::with_capacity(self.template.len() + scripts.len());
        output.push_str(&self.template[..open_end]);
        output.push_str(scripts);
        output.push_str(&self.template[close_pos..]);
        Ok(output)
    }
}

impl Default for HtmlReportFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for HtmlReportFormatter {
    fn format(
        &self,
        components: &BTreeMap<String, ComponentRecord>,
        metadata: &ReportMetadata,
        export_properties: &BTreeMap<String, String>,
    ) -> Result<String> {
        let component_json = Self::to_embedded_json(components)?;
        let property_json = Self::to_embedded_json(export_properties)?;
        let metadata_json = Self::to_embedded_json(metadata)?;

        let scripts = format!(
            "<script>var compList=[{}]</script>\n<script>var propList=[{}]</script>\n<script>var reportInfo=[{}]</script>",
            component_json, property_json, metadata_json
        );

        self.inject_into_data_block(&scripts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notice_generation::domain::LicenseRecord;

    fn metadata() -> ReportMetadata {
        ReportMetadata::new(
            "my-app".to_string(),
            "2.4".to_string(),
            "2026-01-01T00:00:00Z".to_string(),
            "notice-report".to_string(),
            "1.0.0".to_string(),
            "urn:uuid:test".to_string(),
        )
    }

    fn components() -> BTreeMap<String, ComponentRecord> {
        let mut component = ComponentRecord::new(
            "comp-1".to_string(),
            "libfoo".to_string(),
            "1.2".to_string(),
            None,
        );
        component.add_license(LicenseRecord::new(
            "lic-1".to_string(),
            Some("MIT".to_string()),
            "mit text".to_string(),
        ));
        let mut map = BTreeMap::new();
        map.insert(component.key(), component);
        map
    }

    #[test]
    fn test_injects_component_and_property_scripts() {
        let formatter = HtmlReportFormatter::new();
        let mut properties = BTreeMap::new();
        properties.insert("Business-Unit".to_string(), "payments".to_string());

        let html = formatter
            .format(&components(), &metadata(), &properties)
            .unwrap();

        assert!(html.contains("var compList=["));
        assert!(html.contains("var propList=["));
        assert!(html.contains("var reportInfo=["));
        assert!(html.contains("libfoo"));
        assert!(html.contains("Business-Unit"));
    }

    #[test]
    fn test_stale_data_block_content_is_discarded() {
        let template = format!(
            "<html><body><div class=\"{}\"><script>var compList=[1]</script></div></body></html>",
            JSON_DATA_BLOCK_CLASS
        );
        let formatter = HtmlReportFormatter::with_template(template);

        let html = formatter
            .format(&BTreeMap::new(), &metadata(), &BTreeMap::new())
            .unwrap();

        assert!(!html.contains("var compList=[1]"));
        assert!(html.contains("var compList=[{}]"));
    }

    #[test]
    fn test_missing_marker_is_an_error() {
        let formatter = HtmlReportFormatter::with_template("<html><body></body></html>".to_string());

        let result = formatter.format(&BTreeMap::new(), &metadata(), &BTreeMap::new());

        assert!(result.is_err());
        assert!(format!("{}", result.unwrap_err()).contains("notice-json-data"));
    }

    #[test]
    fn test_closing_script_tags_in_license_text_are_escaped() {
        let mut component = ComponentRecord::new(
            "comp-1".to_string(),
            "libfoo".to_string(),
            "1.2".to_string(),
            None,
        );
        component.add_license(LicenseRecord::new(
            "lic-1".to_string(),
            Some("MIT".to_string()),
            "evil </script> text".to_string(),
        ));
        let mut map = BTreeMap::new();
        map.insert(component.key(), component);

        let formatter = HtmlReportFormatter::new();
        let html = formatter.format(&map, &metadata(), &BTreeMap::new()).unwrap();

        assert!(!html.contains("evil </script> text"));
        assert!(html.contains("evil <\\/script> text"));
    }
}
