use crate::core::CatalogSource;
use crate::utils::error::Result;
use std::path::{Path, PathBuf};

/// Reads resources relative to a page on the local filesystem, e.g. a
/// checked-out copy of the static site.
#[derive(Debug, Clone)]
pub struct LocalSource {
    page_file: PathBuf,
    page_path: String,
}

impl LocalSource {
    pub fn new(page_file: impl Into<PathBuf>) -> Self {
        let page_file = page_file.into();
        // 統一使用 '/' 並補上開頭的 '/'，讓相對路徑的第一段也能對上錨點
        let mut page_path = page_file.to_string_lossy().replace('\\', "/");
        if !page_path.starts_with('/') {
            page_path.insert(0, '/');
        }
        Self {
            page_file,
            page_path,
        }
    }

    pub fn resolve(&self, relative: &str) -> PathBuf {
        let dir = self.page_file.parent().unwrap_or_else(|| Path::new("."));
        dir.join(relative)
    }
}

impl CatalogSource for LocalSource {
    fn page_path(&self) -> &str {
        &self.page_path
    }

    async fn fetch(&self, relative: &str) -> Result<Vec<u8>> {
        let full_path = self.resolve(relative);
        tracing::debug!("Reading file: {}", full_path.display());
        let data = tokio::fs::read(full_path).await?;
        Ok(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::loader::CatalogLoader;
    use crate::core::path::{resolve_prefix, DEFAULT_ANCHOR};
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_fetch_relative_to_page() {
        let site = TempDir::new().unwrap();
        let root = site.path().join("FITGlobal");
        std::fs::create_dir_all(root.join("europe")).unwrap();
        std::fs::write(root.join("packages.json"), br#"{"packages": []}"#).unwrap();

        let source = LocalSource::new(root.join("europe").join("index.html"));
        assert!(source.page_path().ends_with("/FITGlobal/europe/index.html"));

        let data = source.fetch("../packages.json").await.unwrap();
        assert_eq!(data, br#"{"packages": []}"#);
    }

    #[test]
    fn test_relative_page_path_finds_anchor() {
        let source = LocalSource::new("FITGlobal/europe/index.html");
        assert_eq!(source.page_path(), "/FITGlobal/europe/index.html");
        assert_eq!(resolve_prefix(source.page_path(), DEFAULT_ANCHOR), "../");
        assert_eq!(
            source.resolve("../packages.json"),
            Path::new("FITGlobal/europe/../packages.json")
        );

        let loader = CatalogLoader::new(source, DEFAULT_ANCHOR);
        assert_eq!(loader.catalog_location(), "../packages.json");

        let dotted = LocalSource::new("./FITGlobal/europe/italy/index.html");
        assert_eq!(resolve_prefix(dotted.page_path(), DEFAULT_ANCHOR), "../../");
    }

    #[tokio::test]
    async fn test_missing_file() {
        let site = TempDir::new().unwrap();
        let source = LocalSource::new(site.path().join("index.html"));
        tokio_test::assert_err!(source.fetch("./packages.json").await);
    }
}
