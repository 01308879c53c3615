// Adapters layer: concrete catalog sources and result views.

pub mod console;
pub mod http;
pub mod local;

use crate::core::{CatalogSource, ConfigProvider};
use crate::utils::error::Result;
use crate::utils::validation::is_remote_location;

pub use console::ConsoleView;
pub use http::HttpSource;
pub use local::LocalSource;

/// A page reached either over http(s) or from disk.
#[derive(Debug, Clone)]
pub enum PageSource {
    Http(HttpSource),
    Local(LocalSource),
}

impl PageSource {
    /// Picks the source for the configured page location.
    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        let page = config.page();
        if is_remote_location(page) {
            let source = HttpSource::new(page)?
                .with_timeout(config.request_timeout())?
                .with_headers(&config.headers());
            Ok(PageSource::Http(source))
        } else {
            Ok(PageSource::Local(LocalSource::new(page)))
        }
    }
}

impl CatalogSource for PageSource {
    fn page_path(&self) -> &str {
        match self {
            PageSource::Http(source) => source.page_path(),
            PageSource::Local(source) => source.page_path(),
        }
    }

    async fn fetch(&self, relative: &str) -> Result<Vec<u8>> {
        match self {
            PageSource::Http(source) => source.fetch(relative).await,
            PageSource::Local(source) => source.fetch(relative).await,
        }
    }
}
