/// Network adapters for the compliance catalog server API
mod catalog_api_client;

pub use catalog_api_client::CatalogApiClient;
