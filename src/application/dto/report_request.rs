/// ReportRequest - Internal request DTO for the report assembly use case
///
/// Identifies the application whose notice report is being built.
#[derive(Debug, Clone)]
pub struct ReportRequest {
    /// Application name as registered on the catalog server
    pub application_name: String,
    /// Application version as registered on the catalog server
    pub application_version: String,
}

impl ReportRequest {
    pub fn new(application_name: String, application_version: String) -> Self {
        Self {
            application_name,
            application_version,
        }
    }
}
