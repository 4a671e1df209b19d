mod catalog_source_port;

pub use catalog_source_port::CatalogSource;

#[cfg(test)]
pub mod mocks {
    pub use super::catalog_source_port::mock::MockCatalogSource;
}
