use crate::notice_generation::domain::AttributeRecord;
use crate::notice_generation::services::CachingAttributeResolver;
use crate::ports::outbound::{CatalogClient, RawAttributeValue};

/// Attribute records plus the warnings produced while collecting them.
pub type CollectedAttributes = (Vec<AttributeRecord>, Vec<String>);

/// AttributeCollector - normalizes raw attribute values into records
///
/// Walks the raw attribute-value entries attached to a component and to
/// its originating request, resolves each attribute reference through
/// the caching resolver and builds one [`AttributeRecord`] per usable
/// entry. Multi-valued attributes are not supported; only the first
/// value is taken. Entries with no value, an empty first value, or an
/// empty reference token produce no record.
pub struct AttributeCollector<'a, C> {
    resolver: &'a CachingAttributeResolver<'a, C>,
}

impl<'a, C: CatalogClient> AttributeCollector<'a, C> {
    pub fn new(resolver: &'a CachingAttributeResolver<'a, C>) -> Self {
        Self { resolver }
    }

    /// Collects the attribute records for one component.
    ///
    /// Request-level entries come first in the returned list, component
    /// entries after them; inserting the records into a name-keyed map
    /// in order therefore gives component attributes precedence on name
    /// collision.
    pub async fn collect_for_component(
        &self,
        component_values: &[RawAttributeValue],
        request_values: &[RawAttributeValue],
    ) -> CollectedAttributes {
        let mut records = Vec::new();
        let mut warnings = Vec::new();

        self.collect_values(request_values, &mut records, &mut warnings)
            .await;
        self.collect_values(component_values, &mut records, &mut warnings)
            .await;

        (records, warnings)
    }

    async fn collect_values(
        &self,
        values: &[RawAttributeValue],
        records: &mut Vec<AttributeRecord>,
        warnings: &mut Vec<String>,
    ) {
        for entry in values {
            let Some(first_value) = entry.values.first() else {
                continue;
            };
            if first_value.is_empty() || entry.attribute_id.is_empty() {
                continue;
            }

            match self.resolver.resolve(&entry.attribute_id).await {
                Ok(meta) => {
                    records.push(AttributeRecord::from_meta(&meta, first_value.clone()));
                }
                Err(e) => {
                    warnings.push(format!(
                        "failed to resolve attribute {}: {}",
                        entry.attribute_id, e
                    ));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::outbound::{
        Application, AttributeMeta, CatalogClient, ComponentDetail, RemoteLicense, RequestSummary,
    };
    use crate::shared::Result;
    use async_trait::async_trait;
    use std::collections::HashSet;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Mock catalog client resolving any token except the configured
    /// failing ones
    struct MockCatalogClient {
        failing_tokens: HashSet<String>,
        resolve_calls: AtomicUsize,
    }

    impl MockCatalogClient {
        fn new() -> Self {
            Self {
                failing_tokens: HashSet::new(),
                resolve_calls: AtomicUsize::new(0),
            }
        }

        fn with_failing_token(mut self, token: &str) -> Self {
            self.failing_tokens.insert(token.to_string());
            self
        }
    }

    #[async_trait]
    impl CatalogClient for MockCatalogClient {
        async fn get_application(&self, _name: &str, _version: &str) -> Result<Application> {
            anyhow::bail!("not used in collector tests");
        }

        async fn get_requests_for_application(
            &self,
            _application_id: &str,
        ) -> Result<Vec<RequestSummary>> {
            anyhow::bail!("not used in collector tests");
        }

        async fn get_component(&self, _component_id: &str) -> Result<ComponentDetail> {
            anyhow::bail!("not used in collector tests");
        }

        async fn get_license(&self, _license_id: &str) -> Result<RemoteLicense> {
            anyhow::bail!("not used in collector tests");
        }

        async fn get_request_attribute_values(
            &self,
            _request_id: &str,
        ) -> Result<Vec<RawAttributeValue>> {
            anyhow::bail!("not used in collector tests");
        }

        async fn resolve_attribute(&self, token: &str) -> Result<AttributeMeta> {
            self.resolve_calls.fetch_add(1, Ordering::SeqCst);
            if self.failing_tokens.contains(token) {
                anyhow::bail!("attribute service unavailable");
            }
            Ok(AttributeMeta {
                id: token.to_string(),
                question: format!("{}-name", token),
                description: String::new(),
            })
        }
    }

    fn raw(token: &str, values: &[&str]) -> RawAttributeValue {
        RawAttributeValue {
            attribute_id: token.to_string(),
            values: values.iter().map(|v| v.to_string()).collect(),
        }
    }

    #[tokio::test]
    async fn test_entries_without_values_produce_no_record() {
        let client = MockCatalogClient::new();
        let resolver = CachingAttributeResolver::new(&client);
        let collector = AttributeCollector::new(&resolver);

        let component_values = vec![raw("attr-1", &[]), raw("attr-2", &[""]), raw("", &["x"])];
        let (records, warnings) = collector.collect_for_component(&component_values, &[]).await;

        assert!(records.is_empty());
        assert!(warnings.is_empty());
    }

    #[tokio::test]
    async fn test_only_first_value_is_taken() {
        let client = MockCatalogClient::new();
        let resolver = CachingAttributeResolver::new(&client);
        let collector = AttributeCollector::new(&resolver);

        let component_values = vec![raw("attr-1", &["first", "second", "third"])];
        let (records, _) = collector.collect_for_component(&component_values, &[]).await;

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].value(), "first");
        assert_eq!(records[0].name(), "attr-1-name");
    }

    #[tokio::test]
    async fn test_request_entries_come_before_component_entries() {
        let client = MockCatalogClient::new();
        let resolver = CachingAttributeResolver::new(&client);
        let collector = AttributeCollector::new(&resolver);

        let component_values = vec![raw("attr-1", &["component value"])];
        let request_values = vec![raw("attr-1", &["request value"])];
        let (records, _) = collector
            .collect_for_component(&component_values, &request_values)
            .await;

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].value(), "request value");
        assert_eq!(records[1].value(), "component value");
    }

    #[tokio::test]
    async fn test_failed_resolution_skips_entry_with_warning() {
        let client = MockCatalogClient::new().with_failing_token("attr-bad");
        let resolver = CachingAttributeResolver::new(&client);
        let collector = AttributeCollector::new(&resolver);

        let component_values = vec![raw("attr-bad", &["x"]), raw("attr-good", &["y"])];
        let (records, warnings) = collector.collect_for_component(&component_values, &[]).await;

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].value(), "y");
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("attr-bad"));
    }

    #[tokio::test]
    async fn test_repeated_token_resolved_once() {
        let client = MockCatalogClient::new();
        let resolver = CachingAttributeResolver::new(&client);
        let collector = AttributeCollector::new(&resolver);

        let component_values = vec![raw("attr-1", &["a"])];
        let request_values = vec![raw("attr-1", &["b"])];
        collector
            .collect_for_component(&component_values, &request_values)
            .await;

        assert_eq!(client.resolve_calls.load(Ordering::SeqCst), 1);
    }
}
