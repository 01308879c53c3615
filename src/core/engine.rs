use crate::core::loader::CatalogLoader;
use crate::core::path::resource_link;
use crate::core::ranking;
use crate::core::{Catalog, CatalogSource, PackageRecord, RankedResult};

/// Owns the loaded catalog and the page prefix used to build links.
#[derive(Debug, Clone)]
pub struct SearchEngine {
    catalog: Catalog,
    prefix: String,
}

impl SearchEngine {
    pub fn new(catalog: Catalog, prefix: impl Into<String>) -> Self {
        Self {
            catalog,
            prefix: prefix.into(),
        }
    }

    /// Loads the catalog once. A failed load leaves an engine that finds nothing.
    pub async fn bootstrap<S: CatalogSource>(loader: &CatalogLoader<S>) -> Self {
        let catalog = loader.load().await;
        Self::new(catalog, loader.prefix())
    }

    pub fn search(&self, query: &str) -> Vec<RankedResult> {
        let results = ranking::search(query, &self.catalog);
        tracing::debug!("Query {:?} matched {} packages", query, results.len());
        results
    }

    /// PDF location for a package, relative to the current page.
    pub fn pdf_link(&self, package: &PackageRecord) -> String {
        resource_link(&self.prefix, &package.folder, &package.filename)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }
}
