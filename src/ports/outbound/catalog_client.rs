use crate::shared::Result;
use async_trait::async_trait;

/// An application registered on the compliance catalog server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Application {
    pub id: String,
    pub name: String,
    pub version: String,
}

/// Summary of a component request attached to an application.
///
/// A request is the approval record through which a component entered
/// the application; it carries its own attribute values in addition to
/// the component's.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestSummary {
    pub id: String,
    pub component_id: String,
}

/// Reference to a declared license, as listed on a component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LicenseSummary {
    pub id: String,
    pub name: String,
}

/// A raw attribute value as stored on the server: an opaque attribute
/// reference plus the answer values entered by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawAttributeValue {
    pub attribute_id: String,
    pub values: Vec<String>,
}

/// Full component record as returned by the catalog server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentDetail {
    pub id: String,
    pub name: String,
    pub version: String,
    pub homepage: Option<String>,
    pub declared_licenses: Vec<LicenseSummary>,
    pub attribute_values: Vec<RawAttributeValue>,
}

/// Full license record with text, fetched per declared license.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteLicense {
    pub id: String,
    pub name: String,
    pub text: String,
}

/// Resolved metadata for a custom attribute definition.
///
/// `question` is the human-readable label under which the attribute
/// appears in reports and rule configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeMeta {
    pub id: String,
    pub question: String,
    pub description: String,
}

/// CatalogClient port for talking to the license-compliance catalog server
///
/// This port abstracts the remote server holding applications, component
/// requests, license texts and custom attribute definitions. The wire
/// protocol is an adapter concern; the core only sees these records.
///
/// # Errors
/// Every method returns an error when the remote call fails. Callers in
/// the core treat such failures as recoverable: the affected unit (one
/// attribute, one license, one component) is reported and skipped, and
/// processing continues.
#[async_trait]
pub trait CatalogClient: Send + Sync {
    /// Looks up an application by its registered name and version.
    async fn get_application(&self, name: &str, version: &str) -> Result<Application>;

    /// Lists the component requests attached to an application.
    async fn get_requests_for_application(
        &self,
        application_id: &str,
    ) -> Result<Vec<RequestSummary>>;

    /// Fetches the full component record behind a request.
    async fn get_component(&self, component_id: &str) -> Result<ComponentDetail>;

    /// Fetches the full license text for a declared license.
    async fn get_license(&self, license_id: &str) -> Result<RemoteLicense>;

    /// Fetches the attribute values entered on a request.
    async fn get_request_attribute_values(
        &self,
        request_id: &str,
    ) -> Result<Vec<RawAttributeValue>>;

    /// Resolves an attribute reference to its definition metadata.
    async fn resolve_attribute(&self, token: &str) -> Result<AttributeMeta>;
}
