use async_trait::async_trait;
use notice_report::prelude::*;
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Builder-style mock catalog server for integration tests
///
/// Holds one application plus its component requests; every fetch can
/// be made to fail per id/token to exercise the partial-failure paths.
#[derive(Default)]
pub struct MockCatalogClient {
    application: Option<Application>,
    requests: Vec<RequestSummary>,
    components: HashMap<String, ComponentDetail>,
    licenses: HashMap<String, RemoteLicense>,
    request_attributes: HashMap<String, Vec<RawAttributeValue>>,
    attributes: HashMap<String, AttributeMeta>,
    failing_tokens: HashSet<String>,
    failing_components: HashSet<String>,
    resolve_calls: Arc<AtomicUsize>,
}

impl MockCatalogClient {
    pub fn new(application_name: &str, application_version: &str) -> Self {
        Self {
            application: Some(Application {
                id: "app-1".to_string(),
                name: application_name.to_string(),
                version: application_version.to_string(),
            }),
            ..Self::default()
        }
    }

    /// A server that knows no applications at all.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_component(mut self, request_id: &str, detail: ComponentDetail) -> Self {
        self.requests.push(RequestSummary {
            id: request_id.to_string(),
            component_id: detail.id.clone(),
        });
        self.components.insert(detail.id.clone(), detail);
        self
    }

    pub fn with_license(mut self, id: &str, name: &str, text: &str) -> Self {
        self.licenses.insert(
            id.to_string(),
            RemoteLicense {
                id: id.to_string(),
                name: name.to_string(),
                text: text.to_string(),
            },
        );
        self
    }

    pub fn with_attribute(mut self, token: &str, question: &str) -> Self {
        self.attributes.insert(
            token.to_string(),
            AttributeMeta {
                id: token.to_string(),
                question: question.to_string(),
                description: String::new(),
            },
        );
        self
    }

    pub fn with_request_attributes(
        mut self,
        request_id: &str,
        values: Vec<RawAttributeValue>,
    ) -> Self {
        self.request_attributes
            .insert(request_id.to_string(), values);
        self
    }

    pub fn with_failing_token(mut self, token: &str) -> Self {
        self.failing_tokens.insert(token.to_string());
        self
    }

    pub fn with_failing_component(mut self, component_id: &str) -> Self {
        self.failing_components.insert(component_id.to_string());
        self
    }

    /// Shared handle onto the resolve call counter, kept by tests after
    /// the client moves into the use case.
    pub fn resolve_call_counter(&self) -> Arc<AtomicUsize> {
        self.resolve_calls.clone()
    }
}

#[async_trait]
impl CatalogClient for MockCatalogClient {
    async fn get_application(&self, name: &str, version: &str) -> Result<Application> {
        match &self.application {
            Some(app) if app.name == name && app.version == version => Ok(app.clone()),
            _ => anyhow::bail!("no application named {}:{}", name, version),
        }
    }

    async fn get_requests_for_application(
        &self,
        _application_id: &str,
    ) -> Result<Vec<RequestSummary>> {
        Ok(self.requests.clone())
    }

    async fn get_component(&self, component_id: &str) -> Result<ComponentDetail> {
        if self.failing_components.contains(component_id) {
            anyhow::bail!("component {} unreachable", component_id);
        }
        self.components
            .get(component_id)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("unknown component {}", component_id))
    }

    async fn get_license(&self, license_id: &str) -> Result<RemoteLicense> {
        self.licenses
            .get(license_id)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("unknown license {}", license_id))
    }

    async fn get_request_attribute_values(
        &self,
        request_id: &str,
    ) -> Result<Vec<RawAttributeValue>> {
        Ok(self
            .request_attributes
            .get(request_id)
            .cloned()
            .unwrap_or_default())
    }

    async fn resolve_attribute(&self, token: &str) -> Result<AttributeMeta> {
        self.resolve_calls.fetch_add(1, Ordering::SeqCst);
        if self.failing_tokens.contains(token) {
            anyhow::bail!("attribute service unavailable");
        }
        self.attributes
            .get(token)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("unknown attribute {}", token))
    }
}
