pub mod http_catalog_client;

pub use http_catalog_client::HttpCatalogClient;
