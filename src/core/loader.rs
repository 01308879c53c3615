use crate::core::path::resolve_prefix;
use crate::core::{Catalog, CatalogSource};
use crate::utils::error::Result;

pub const DEFAULT_CATALOG_FILE: &str = "packages.json";

/// Fetches and parses the package catalog relative to the current page.
pub struct CatalogLoader<S: CatalogSource> {
    source: S,
    anchor: String,
    catalog_file: String,
}

impl<S: CatalogSource> CatalogLoader<S> {
    pub fn new(source: S, anchor: impl Into<String>) -> Self {
        Self {
            source,
            anchor: anchor.into(),
            catalog_file: DEFAULT_CATALOG_FILE.to_string(),
        }
    }

    pub fn with_catalog_file(mut self, catalog_file: impl Into<String>) -> Self {
        self.catalog_file = catalog_file.into();
        self
    }

    /// Relative prefix for the current page.
    pub fn prefix(&self) -> &'static str {
        resolve_prefix(self.source.page_path(), &self.anchor)
    }

    /// `<prefix><catalog_file>`
    pub fn catalog_location(&self) -> String {
        format!("{}{}", self.prefix(), self.catalog_file)
    }

    pub async fn try_load(&self) -> Result<Catalog> {
        let location = self.catalog_location();
        tracing::debug!("Fetching catalog from: {}", location);

        let bytes = self.source.fetch(&location).await?;
        tracing::debug!("Catalog response: {} bytes", bytes.len());

        let catalog = Catalog::from_json_slice(&bytes)?;
        Ok(catalog)
    }

    /// Loads the catalog, falling back to an empty one on any failure.
    pub async fn load(&self) -> Catalog {
        match self.try_load().await {
            Ok(catalog) => {
                tracing::info!("📦 Loaded {} packages", catalog.len());
                catalog
            }
            Err(e) => {
                tracing::error!(
                    "❌ Error loading packages: {} (Category: {:?})",
                    e,
                    e.category()
                );
                tracing::error!("💡 {}", e.recovery_suggestion());
                Catalog::empty()
            }
        }
    }
}
