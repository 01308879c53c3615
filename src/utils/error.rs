use thiserror::Error;

#[derive(Error, Debug)]
pub enum SearchError {
    #[error("Catalog request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    UrlError(#[from] url::ParseError),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Io,
    Data,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
}

impl SearchError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            SearchError::ApiError(_) => ErrorCategory::Network,
            SearchError::IoError(_) => ErrorCategory::Io,
            SearchError::SerializationError(_) => ErrorCategory::Data,
            SearchError::UrlError(_)
            | SearchError::ConfigValidationError { .. }
            | SearchError::InvalidConfigValueError { .. }
            | SearchError::MissingConfigError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            // 目錄載入失敗只會讓搜尋沒有結果
            ErrorCategory::Network | ErrorCategory::Data => ErrorSeverity::Low,
            ErrorCategory::Io => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            SearchError::ApiError(_) => {
                "Check that the site is reachable and packages.json is published next to the anchor page"
            }
            SearchError::IoError(_) => "Check that the page path exists and the catalog file is readable",
            SearchError::SerializationError(_) => {
                "Make sure the catalog is a JSON object with a \"packages\" array"
            }
            SearchError::UrlError(_) => "Pass a full page URL such as https://example.com/FITGlobal/index.html",
            SearchError::ConfigValidationError { .. } => "Review the configuration file for syntax errors",
            SearchError::InvalidConfigValueError { .. } => "Correct the highlighted configuration value",
            SearchError::MissingConfigError { .. } => "Add the missing setting to the configuration",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            SearchError::ApiError(e) => format!("Could not download the package catalog: {}", e),
            SearchError::IoError(e) => format!("Could not read the package catalog: {}", e),
            SearchError::SerializationError(e) => format!("The package catalog is not valid: {}", e),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, SearchError>;
