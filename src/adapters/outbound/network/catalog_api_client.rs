use crate::ports::outbound::{
    Application, AttributeMeta, CatalogClient, ComponentDetail, LicenseSummary, RawAttributeValue,
    RemoteLicense, RequestSummary,
};
use crate::shared::Result;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Deserialize)]
struct ApplicationDto {
    id: String,
    name: String,
    version: String,
}

#[derive(Debug, Deserialize)]
struct RequestDto {
    id: String,
    #[serde(rename = "componentId")]
    component_id: String,
}

#[derive(Debug, Deserialize)]
struct LicenseSummaryDto {
    id: String,
    #[serde(default)]
    name: String,
}

#[derive(Debug, Deserialize)]
struct AttributeValueDto {
    #[serde(rename = "attributeId", default)]
    attribute_id: String,
    #[serde(default)]
    values: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct ComponentDto {
    id: String,
    name: String,
    version: String,
    #[serde(default)]
    homepage: Option<String>,
    #[serde(rename = "declaredLicenses", default)]
    declared_licenses: Vec<LicenseSummaryDto>,
    #[serde(rename = "attributeValues", default)]
    attribute_values: Vec<AttributeValueDto>,
}

#[derive(Debug, Deserialize)]
struct LicenseDto {
    id: String,
    #[serde(default)]
    name: String,
    #[serde(default)]
    text: String,
}

#[derive(Debug, Deserialize)]
struct AttributeDto {
    id: String,
    #[serde(default)]
    question: String,
    #[serde(default)]
    description: String,
}

/// CatalogApiClient adapter for the compliance catalog server JSON API
///
/// Implements the CatalogClient port over the server's REST endpoints.
/// Requests carry an optional bearer token and are retried with a short
/// backoff before a failure is handed to the core, where it degrades to
/// a skipped unit rather than a fatal error.
pub struct CatalogApiClient {
    client: reqwest::Client,
    base_url: String,
    api_token: Option<String>,
    max_retries: u32,
}

impl CatalogApiClient {
    /// Creates a new catalog client for the given server base URL
    pub fn new(base_url: &str, api_token: Option<String>) -> Result<Self> {
        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("notice-report/{}", version);
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_token,
            max_retries: 3,
        })
    }

    /// Validates an identifier before it is interpolated into a URL path
    fn validate_url_component(component: &str, component_type: &str) -> Result<()> {
        if component.is_empty() {
            anyhow::bail!("{} must not be empty", component_type);
        }

        if component.contains('/') || component.contains('\\') {
            anyhow::bail!(
                "Security: {} contains path separators which are not allowed",
                component_type
            );
        }

        if component.contains("..") {
            anyhow::bail!(
                "Security: {} contains '..' which is not allowed",
                component_type
            );
        }

        if component.contains('#') || component.contains('?') {
            anyhow::bail!(
                "Security: {} contains URL-unsafe characters",
                component_type
            );
        }

        Ok(())
    }

    /// Fetches a JSON document with retry and a short backoff
    async fn get_json_with_retry<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let mut last_error = None;

        for attempt in 1..=self.max_retries {
            match self.get_json(url).await {
                Ok(result) => return Ok(result),
                Err(e) => {
                    last_error = Some(e);
                    if attempt < self.max_retries {
                        tokio::time::sleep(Duration::from_millis(100 * attempt as u64)).await;
                    }
                }
            }
        }

        Err(last_error.unwrap())
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let mut request = self.client.get(url);
        if let Some(token) = &self.api_token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        if !response.status().is_success() {
            anyhow::bail!("catalog server returned status code {}", response.status());
        }

        Ok(response.json().await?)
    }
}

#[async_trait]
impl CatalogClient for CatalogApiClient {
    async fn get_application(&self, name: &str, version: &str) -> Result<Application> {
        let url = format!(
            "{}/api/applications?name={}&version={}",
            self.base_url,
            urlencoding::encode(name),
            urlencoding::encode(version)
        );
        let dto: ApplicationDto = self.get_json_with_retry(&url).await?;
        Ok(Application {
            id: dto.id,
            name: dto.name,
            version: dto.version,
        })
    }

    async fn get_requests_for_application(
        &self,
        application_id: &str,
    ) -> Result<Vec<RequestSummary>> {
        Self::validate_url_component(application_id, "Application id")?;
        let url = format!(
            "{}/api/applications/{}/requests",
            self.base_url,
            urlencoding::encode(application_id)
        );
        let dtos: Vec<RequestDto> = self.get_json_with_retry(&url).await?;
        Ok(dtos
            .into_iter()
            .map(|dto| RequestSummary {
                id: dto.id,
                component_id: dto.component_id,
            })
            .collect())
    }

    async fn get_component(&self, component_id: &str) -> Result<ComponentDetail> {
        Self::validate_url_component(component_id, "Component id")?;
        let url = format!(
            "{}/api/components/{}",
            self.base_url,
            urlencoding::encode(component_id)
        );
        let dto: ComponentDto = self.get_json_with_retry(&url).await?;
        Ok(ComponentDetail {
            id: dto.id,
            name: dto.name,
            version: dto.version,
            homepage: dto.homepage,
            declared_licenses: dto
                .declared_licenses
                .into_iter()
                .map(|lic| LicenseSummary {
                    id: lic.id,
                    name: lic.name,
                })
                .collect(),
            attribute_values: dto
                .attribute_values
                .into_iter()
                .map(|value| RawAttributeValue {
                    attribute_id: value.attribute_id,
                    values: value.values,
                })
                .collect(),
        })
    }

    async fn get_license(&self, license_id: &str) -> Result<RemoteLicense> {
        Self::validate_url_component(license_id, "License id")?;
        let url = format!(
            "{}/api/licenses/{}",
            self.base_url,
            urlencoding::encode(license_id)
        );
        let dto: LicenseDto = self.get_json_with_retry(&url).await?;
        Ok(RemoteLicense {
            id: dto.id,
            name: dto.name,
            text: dto.text,
        })
    }

    async fn get_request_attribute_values(
        &self,
        request_id: &str,
    ) -> Result<Vec<RawAttributeValue>> {
        Self::validate_url_component(request_id, "Request id")?;
        let url = format!(
            "{}/api/requests/{}/attribute-values",
            self.base_url,
            urlencoding::encode(request_id)
        );
        let dtos: Vec<AttributeValueDto> = self.get_json_with_retry(&url).await?;
        Ok(dtos
            .into_iter()
            .map(|dto| RawAttributeValue {
                attribute_id: dto.attribute_id,
                values: dto.values,
            })
            .collect())
    }

    async fn resolve_attribute(&self, token: &str) -> Result<AttributeMeta> {
        Self::validate_url_component(token, "Attribute reference")?;
        let url = format!(
            "{}/api/attributes/{}",
            self.base_url,
            urlencoding::encode(token)
        );
        let dto: AttributeDto = self.get_json_with_retry(&url).await?;
        Ok(AttributeMeta {
            id: dto.id,
            question: dto.question,
            description: dto.description,
        })
    }
}
