use crate::core::debounce::DEFAULT_DEBOUNCE;
use crate::core::loader::DEFAULT_CATALOG_FILE;
use crate::core::path::DEFAULT_ANCHOR;
use crate::core::ConfigProvider;
use crate::render::OutputFormat;
use crate::utils::error::{Result, SearchError};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use std::sync::OnceLock;
use std::time::Duration;

const DEFAULT_TIMEOUT_SECONDS: u64 = 10;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub site: SiteConfig,
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    pub page: Option<String>,
    pub anchor: Option<String>,
    pub catalog_file: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SourceConfig {
    pub timeout_seconds: Option<u64>,
    pub headers: Option<HashMap<String, String>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchConfig {
    pub debounce_ms: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: Option<OutputFormat>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub verbose: Option<bool>,
    pub json: Option<bool>,
}

fn env_var_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\$\{([^}]+)\}").expect("valid env var pattern"))
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| SearchError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${SITE_URL})，未設定的保持原樣
    fn substitute_env_vars(content: &str) -> String {
        env_var_pattern()
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn verbose(&self) -> bool {
        self.logging.verbose.unwrap_or(false)
    }

    pub fn json_logs(&self) -> bool {
        self.logging.json.unwrap_or(false)
    }
}

impl ConfigProvider for TomlConfig {
    fn page(&self) -> &str {
        self.site.page.as_deref().unwrap_or_default()
    }

    fn anchor(&self) -> &str {
        self.site.anchor.as_deref().unwrap_or(DEFAULT_ANCHOR)
    }

    fn catalog_file(&self) -> &str {
        self.site.catalog_file.as_deref().unwrap_or(DEFAULT_CATALOG_FILE)
    }

    fn debounce(&self) -> Duration {
        self.search
            .debounce_ms
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_DEBOUNCE)
    }

    fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.source.timeout_seconds.unwrap_or(DEFAULT_TIMEOUT_SECONDS))
    }

    fn headers(&self) -> HashMap<String, String> {
        self.source.headers.clone().unwrap_or_default()
    }

    fn output_format(&self) -> OutputFormat {
        self.output.format.unwrap_or_default()
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        let page = validation::validate_required_field("site.page", &self.site.page)?;
        validation::validate_page_location("site.page", page)?;
        validation::validate_segment("site.anchor", self.anchor())?;
        validation::validate_path("site.catalog_file", self.catalog_file())?;

        if let Some(debounce_ms) = self.search.debounce_ms {
            validation::validate_range("search.debounce_ms", debounce_ms, 0, 10_000)?;
        }

        if let Some(timeout) = self.source.timeout_seconds {
            validation::validate_positive_number("source.timeout_seconds", timeout, 1)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[site]
page = "https://example.com/FITGlobal/europe/italy/index.html"
anchor = "FITGlobal"
catalog_file = "catalog.json"

[source]
timeout_seconds = 5

[source.headers]
User-Agent = "fit-search"

[search]
debounce_ms = 200

[output]
format = "html"

[logging]
verbose = true
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.anchor(), "FITGlobal");
        assert_eq!(config.catalog_file(), "catalog.json");
        assert_eq!(config.request_timeout(), Duration::from_secs(5));
        assert_eq!(config.debounce(), Duration::from_millis(200));
        assert_eq!(config.output_format(), OutputFormat::Html);
        assert_eq!(config.headers()["User-Agent"], "fit-search");
        assert!(config.verbose());
        assert!(!config.json_logs());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_minimal_config_uses_defaults() {
        let config = TomlConfig::from_toml_str("[site]\npage = \"./site/FITGlobal/index.html\"\n").unwrap();

        assert_eq!(config.anchor(), "FITGlobal");
        assert_eq!(config.catalog_file(), "packages.json");
        assert_eq!(config.debounce(), Duration::from_millis(300));
        assert_eq!(config.output_format(), OutputFormat::Text);
        assert!(config.headers().is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("FIT_SEARCH_TEST_SITE", "https://test.example.com");

        let toml_content = r#"
[site]
page = "${FIT_SEARCH_TEST_SITE}/FITGlobal/index.html"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.page(), "https://test.example.com/FITGlobal/index.html");

        std::env::remove_var("FIT_SEARCH_TEST_SITE");
    }

    #[test]
    fn test_unset_env_var_is_kept() {
        let config = TomlConfig::from_toml_str("[site]\npage = \"${FIT_SEARCH_UNSET_VAR}/x.html\"\n").unwrap();
        assert_eq!(config.page(), "${FIT_SEARCH_UNSET_VAR}/x.html");
    }

    #[test]
    fn test_config_validation() {
        let config = TomlConfig::from_toml_str(
            r#"
[site]
page = "https://example.com/FITGlobal/"

[search]
debounce_ms = 60000
"#,
        )
        .unwrap();
        assert!(config.validate().is_err());

        let config = TomlConfig::from_toml_str("[site]\npage = \"ftp://example.com/\"\n").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_missing_page_is_reported() {
        let config = TomlConfig::from_toml_str("[site]\nanchor = \"FITGlobal\"\n").unwrap();
        assert_eq!(config.page(), "");

        let err = config.validate().unwrap_err();
        assert!(matches!(err, SearchError::MissingConfigError { ref field } if field == "site.page"));
        assert_eq!(err.severity(), crate::utils::error::ErrorSeverity::High);
    }

    #[test]
    fn test_missing_site_section() {
        let err = TomlConfig::from_toml_str("[search]\ndebounce_ms = 100\n").unwrap_err();
        assert!(matches!(err, SearchError::ConfigValidationError { .. }));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[site]\npage = \"https://example.com/FITGlobal/index.html\"\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.page(), "https://example.com/FITGlobal/index.html");
    }
}
