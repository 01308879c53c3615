pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod render;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::toml_config::TomlConfig;
pub use self::core::{
    debounce::Debouncer, engine::SearchEngine, loader::CatalogLoader, ranking::search,
};
pub use domain::model::{Catalog, MatchedField, PackageRecord, RankedResult};
pub use utils::error::{Result, SearchError};
