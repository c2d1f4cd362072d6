//! notice-report - Open-source notice report generator
//!
//! This library aggregates license/notice metadata for an application
//! from a license-compliance catalog server, applies user-configurable
//! filter and override rules, and renders the result as an HTML report
//! with embedded JSON plus optional per-component text files.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`notice_generation`): Pure business logic and domain models
//! - **Application Layer** (`application`): Use cases and application services
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use notice_report::prelude::*;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<()> {
//! // Create adapters
//! let catalog_client = CatalogApiClient::new("https://compliance.example.com", None)?;
//! let rules = RuleConfig::default();
//! let progress_reporter = StderrProgressReporter::new();
//!
//! // Create use case
//! let use_case = AssembleReportUseCase::new(catalog_client, rules, progress_reporter);
//!
//! // Execute
//! let request = ReportRequest::new("my-app".to_string(), "2.4".to_string());
//! let response = use_case.execute(request).await?;
//!
//! // Format output
//! let formatter = HtmlReportFormatter::new();
//! let html = formatter.format(
//!     &response.components,
//!     &response.metadata,
//!     &Default::default(),
//! )?;
//! println!("{}", html);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod cli;
pub mod config;
pub mod notice_generation;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemWriter, StdoutPresenter, TextReportWriter,
    };
    pub use crate::adapters::outbound::formatters::{HtmlReportFormatter, JsonReportFormatter};
    pub use crate::adapters::outbound::network::CatalogApiClient;
    pub use crate::application::dto::{ReportRequest, ReportResponse};
    pub use crate::application::use_cases::AssembleReportUseCase;
    pub use crate::config::{
        discover_config, load_config_from_path, ConfigFile, RuleConfig, RuleEntry,
    };
    pub use crate::notice_generation::domain::{
        AttributeRecord, ComponentRecord, FilterRule, LicenseRecord, OverrideKind, OverrideRule,
        ReportMetadata,
    };
    pub use crate::notice_generation::services::{
        AttributeCollector, CachingAttributeResolver, RuleEngine,
    };
    pub use crate::ports::outbound::{
        Application, AttributeMeta, CatalogClient, ComponentDetail, LicenseSummary,
        OutputPresenter, ProgressReporter, RawAttributeValue, RemoteLicense, ReportFormatter,
        RequestSummary, RuleProvider,
    };
    pub use crate::shared::Result;
}
