use crate::application::dto::{ReportRequest, ReportResponse};
use crate::notice_generation::domain::{ComponentRecord, LicenseRecord, ReportMetadata};
use crate::notice_generation::services::{AttributeCollector, CachingAttributeResolver, RuleEngine};
use crate::ports::outbound::{CatalogClient, ProgressReporter, RequestSummary, RuleProvider};
use crate::shared::error::NoticeError;
use crate::shared::Result;
use anyhow::Context;
use std::collections::BTreeMap;

/// AssembleReportUseCase - Core use case for notice report assembly
///
/// Drives the full pipeline for one application: fetch its component
/// requests from the catalog server, collect and resolve the custom
/// attributes of every component, apply the configured filter and
/// override rules, and produce the final `"name:version"` keyed map of
/// included components.
///
/// Components are processed one at a time; the attribute resolution
/// cache lives for exactly one `execute` call, so every run starts
/// cold and issues at most one remote resolve per distinct attribute
/// reference.
///
/// # Type Parameters
/// * `C` - CatalogClient implementation
/// * `R` - RuleProvider implementation
/// * `P` - ProgressReporter implementation
pub struct AssembleReportUseCase<C, R, P> {
    catalog_client: C,
    rule_provider: R,
    progress_reporter: P,
}

impl<C, R, P> AssembleReportUseCase<C, R, P>
where
    C: CatalogClient,
    R: RuleProvider,
    P: ProgressReporter,
{
    /// Creates a new AssembleReportUseCase with injected dependencies
    pub fn new(catalog_client: C, rule_provider: R, progress_reporter: P) -> Self {
        Self {
            catalog_client,
            rule_provider,
            progress_reporter,
        }
    }

    /// Executes the report assembly use case
    ///
    /// # Errors
    /// Fails only when the application itself cannot be found or its
    /// request list cannot be fetched. Failures on individual
    /// components, licenses or attributes are reported as warnings and
    /// the affected unit is skipped.
    pub async fn execute(&self, request: ReportRequest) -> Result<ReportResponse> {
        self.progress_reporter.report(&format!(
            "🔍 Looking up application {}:{}",
            request.application_name, request.application_version
        ));

        let application = self
            .catalog_client
            .get_application(&request.application_name, &request.application_version)
            .await
            .map_err(|e| NoticeError::ApplicationNotFound {
                name: request.application_name.clone(),
                version: request.application_version.clone(),
                details: e.to_string(),
            })?;

        let requests = self
            .catalog_client
            .get_requests_for_application(&application.id)
            .await
            .with_context(|| {
                format!(
                    "failed to list component requests for application {}",
                    application.id
                )
            })?;

        self.progress_reporter
            .report(&format!("✅ Found {} component request(s)", requests.len()));

        let resolver = CachingAttributeResolver::new(&self.catalog_client);
        let collector = AttributeCollector::new(&resolver);

        let mut components = Vec::new();
        let total = requests.len();
        for (idx, summary) in requests.iter().enumerate() {
            self.progress_reporter
                .report_progress(idx + 1, total, Some("Fetching component data..."));

            match self.gather_component(&collector, summary).await {
                Ok((component, warnings)) => {
                    self.report_warnings(&warnings);
                    components.push(component);
                }
                Err(e) => self.progress_reporter.report_error(&format!(
                    "⚠️  Warning: skipping component for request {}: {}",
                    summary.id, e
                )),
            }
        }

        let engine = RuleEngine::new(
            self.rule_provider.filter_rules(),
            self.rule_provider.override_rules(),
        );
        self.report_warnings(&engine.apply(&mut components));

        let mut included = BTreeMap::new();
        let mut excluded = 0usize;
        for component in components {
            if component.include_in_report() {
                included.insert(component.key(), component);
            } else {
                excluded += 1;
            }
        }

        self.progress_reporter.report_completion(&format!(
            "✅ Report assembly complete: {} component(s) included, {} excluded",
            included.len(),
            excluded
        ));

        let metadata =
            ReportMetadata::generate(&request.application_name, &request.application_version);
        Ok(ReportResponse::new(included, metadata))
    }

    /// Builds one component record: component data, license texts,
    /// request attributes and the resolved attribute map.
    ///
    /// A failure fetching the component itself is an error (the caller
    /// skips the component); failures on single licenses or the request
    /// attribute list degrade to warnings.
    async fn gather_component(
        &self,
        collector: &AttributeCollector<'_, C>,
        summary: &RequestSummary,
    ) -> Result<(ComponentRecord, Vec<String>)> {
        let detail = self.catalog_client.get_component(&summary.component_id).await?;

        let mut warnings = Vec::new();
        let mut component = ComponentRecord::new(
            detail.id.clone(),
            detail.name.clone(),
            detail.version.clone(),
            detail.homepage.clone(),
        );

        for license_summary in &detail.declared_licenses {
            match self.catalog_client.get_license(&license_summary.id).await {
                Ok(license) => {
                    let name = if license.name.is_empty() {
                        None
                    } else {
                        Some(license.name)
                    };
                    component.add_license(LicenseRecord::new(license.id, name, license.text));
                }
                Err(e) => warnings.push(format!(
                    "failed to fetch license {} for component {}: {}",
                    license_summary.id,
                    component.key(),
                    e
                )),
            }
        }

        let request_values = match self
            .catalog_client
            .get_request_attribute_values(&summary.id)
            .await
        {
            Ok(values) => values,
            Err(e) => {
                warnings.push(format!(
                    "unable to get request attributes for request {}: {}",
                    summary.id, e
                ));
                Vec::new()
            }
        };

        let (records, attribute_warnings) = collector
            .collect_for_component(&detail.attribute_values, &request_values)
            .await;
        warnings.extend(attribute_warnings);

        for record in records {
            component.insert_attribute(record);
        }

        Ok((component, warnings))
    }

    fn report_warnings(&self, warnings: &[String]) {
        for warning in warnings {
            self.progress_reporter
                .report_error(&format!("⚠️  Warning: {}", warning));
        }
    }
}
