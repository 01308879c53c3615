use crate::domain::model::RankedResult;
use crate::render::OutputFormat;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::time::Duration;

/// Where the catalog comes from. Locations are relative to the current page.
pub trait CatalogSource: Send + Sync {
    /// Path component of the current page, used to work out nesting depth.
    fn page_path(&self) -> &str;

    fn fetch(&self, relative: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn page(&self) -> &str;
    fn anchor(&self) -> &str;
    fn catalog_file(&self) -> &str;
    fn debounce(&self) -> Duration;
    fn request_timeout(&self) -> Duration;
    fn headers(&self) -> HashMap<String, String>;
    fn output_format(&self) -> OutputFormat;
}

/// The display side of a search session.
#[async_trait]
pub trait ResultView: Send + Sync {
    /// Shows the results for `query`, or an empty state when there are none.
    async fn show(&self, query: &str, results: &[RankedResult]) -> Result<()>;

    async fn dismiss(&self) -> Result<()>;
}
