use serde::Serialize;

/// ReportMetadata value object - identifying data for one report run
#[derive(Debug, Clone, Serialize)]
pub struct ReportMetadata {
    application_name: String,
    application_version: String,
    timestamp: String,
    tool_name: String,
    tool_version: String,
    run_id: String,
}

impl ReportMetadata {
    pub fn new(
        application_name: String,
        application_version: String,
        timestamp: String,
        tool_name: String,
        tool_version: String,
        run_id: String,
    ) -> Self {
        Self {
            application_name,
            application_version,
            timestamp,
            tool_name,
            tool_version,
            run_id,
        }
    }

    /// Generates metadata for the current run with a fresh timestamp
    /// and run identifier.
    pub fn generate(application_name: &str, application_version: &str) -> Self {
        Self::new(
            application_name.to_string(),
            application_version.to_string(),
            chrono::Utc::now().to_rfc3339(),
            "notice-report".to_string(),
            env!("CARGO_PKG_VERSION").to_string(),
            format!("urn:uuid:{}", uuid::Uuid::new_v4()),
        )
    }

    pub fn application_name(&self) -> &str {
        &self.application_name
    }

    pub fn application_version(&self) -> &str {
        &self.application_version
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    pub fn tool_name(&self) -> &str {
        &self.tool_name
    }

    pub fn tool_version(&self) -> &str {
        &self.tool_version
    }

    pub fn run_id(&self) -> &str {
        &self.run_id
    }
}
