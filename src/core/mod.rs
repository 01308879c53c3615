pub mod debounce;
pub mod engine;
pub mod loader;
pub mod path;
pub mod ranking;

pub use crate::domain::model::{Catalog, MatchedField, PackageRecord, RankedResult};
pub use crate::domain::ports::{CatalogSource, ConfigProvider, ResultView};
pub use crate::utils::error::Result;
