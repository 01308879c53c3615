pub mod toml_config;

#[cfg(feature = "cli")]
pub use self::cli_config::CliConfig;

#[cfg(feature = "cli")]
mod cli_config {
    use crate::core::loader::DEFAULT_CATALOG_FILE;
    use crate::core::path::DEFAULT_ANCHOR;
    use crate::core::ConfigProvider;
    use crate::render::OutputFormat;
    use crate::utils::error::Result;
    use crate::utils::validation::{self, Validate};
    use clap::Parser;
    use serde::{Deserialize, Serialize};
    use std::collections::HashMap;
    use std::time::Duration;

    #[derive(Debug, Clone, Serialize, Deserialize, Parser)]
    #[command(name = "fit-search")]
    #[command(about = "Search the FIT package catalog from any page of the site")]
    pub struct CliConfig {
        /// Page URL or local file path the search runs from
        #[arg(long, default_value = "./FITGlobal/index.html")]
        pub page: String,

        /// Directory name that marks the site root
        #[arg(long, default_value = DEFAULT_ANCHOR)]
        pub anchor: String,

        #[arg(long, default_value = DEFAULT_CATALOG_FILE)]
        pub catalog_file: String,

        /// Run a single query; reads queries from stdin when omitted
        #[arg(short, long)]
        pub query: Option<String>,

        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        pub format: OutputFormat,

        #[arg(long, default_value = "300")]
        pub debounce_ms: u64,

        #[arg(long, default_value = "10")]
        pub timeout_seconds: u64,

        #[arg(long, help = "Enable verbose output")]
        pub verbose: bool,

        #[arg(long, help = "Emit logs as JSON")]
        pub json_logs: bool,
    }

    impl ConfigProvider for CliConfig {
        fn page(&self) -> &str {
            &self.page
        }

        fn anchor(&self) -> &str {
            &self.anchor
        }

        fn catalog_file(&self) -> &str {
            &self.catalog_file
        }

        fn debounce(&self) -> Duration {
            Duration::from_millis(self.debounce_ms)
        }

        fn request_timeout(&self) -> Duration {
            Duration::from_secs(self.timeout_seconds)
        }

        fn headers(&self) -> HashMap<String, String> {
            HashMap::new()
        }

        fn output_format(&self) -> OutputFormat {
            self.format
        }
    }

    impl Validate for CliConfig {
        fn validate(&self) -> Result<()> {
            validation::validate_page_location("page", &self.page)?;
            validation::validate_segment("anchor", &self.anchor)?;
            validation::validate_path("catalog_file", &self.catalog_file)?;
            validation::validate_range("debounce_ms", self.debounce_ms, 0, 10_000)?;
            validation::validate_positive_number("timeout_seconds", self.timeout_seconds, 1)?;
            Ok(())
        }
    }

}
