mod mock_catalog_client;
mod mock_progress_reporter;

pub use mock_catalog_client::MockCatalogClient;
pub use mock_progress_reporter::MockProgressReporter;
