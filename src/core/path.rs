//! Relative prefix resolution for pages nested under an anchor directory.

pub const DEFAULT_ANCHOR: &str = "FITGlobal";

pub const SAME_DIR: &str = "./";

// Depths past the last entry reuse it.
const PREFIXES: [&str; 4] = [SAME_DIR, "../", "../../", "../../../"];

/// Number of `/` separators after the `/<anchor>/` marker, or `None` when the
/// marker is absent.
pub fn page_depth(path: &str, anchor: &str) -> Option<usize> {
    let marker = format!("/{}/", anchor);
    let start = path.find(&marker)?;
    let rest = &path[start + marker.len()..];
    Some(rest.matches('/').count())
}

/// Prefix that leads from the page at `path` back to the anchor directory.
///
/// Pages outside the anchor get [`SAME_DIR`]. Depth is capped at three levels.
pub fn resolve_prefix(path: &str, anchor: &str) -> &'static str {
    match page_depth(path, anchor) {
        Some(depth) => PREFIXES[depth.min(PREFIXES.len() - 1)],
        None => SAME_DIR,
    }
}

/// `<prefix><folder>/<filename>`
pub fn resource_link(prefix: &str, folder: &str, filename: &str) -> String {
    format!("{}{}/{}", prefix, folder, filename)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_by_depth() {
        assert_eq!(resolve_prefix("/FITGlobal/packages.json", DEFAULT_ANCHOR), "./");
        assert_eq!(resolve_prefix("/FITGlobal/europe/x.html", DEFAULT_ANCHOR), "../");
        assert_eq!(resolve_prefix("/FITGlobal/europe/italy/x.html", DEFAULT_ANCHOR), "../../");
        assert_eq!(resolve_prefix("/FITGlobal/a/b/c/x.html", DEFAULT_ANCHOR), "../../../");
    }

    #[test]
    fn test_depth_is_capped() {
        assert_eq!(page_depth("/FITGlobal/a/b/c/d/e/x.html", DEFAULT_ANCHOR), Some(5));
        assert_eq!(resolve_prefix("/FITGlobal/a/b/c/d/e/x.html", DEFAULT_ANCHOR), "../../../");
    }

    #[test]
    fn test_missing_anchor_fails_open() {
        assert_eq!(resolve_prefix("/other/x.html", DEFAULT_ANCHOR), "./");
        assert_eq!(resolve_prefix("", DEFAULT_ANCHOR), "./");
        // 必須是完整的路徑段
        assert_eq!(resolve_prefix("/FITGlobal", DEFAULT_ANCHOR), "./");
        assert_eq!(resolve_prefix("/MyFITGlobalSite/a/x.html", DEFAULT_ANCHOR), "./");
    }

    #[test]
    fn test_anchor_after_site_prefix() {
        assert_eq!(resolve_prefix("/sites/FITGlobal/asia/x.html", DEFAULT_ANCHOR), "../");
        assert_eq!(resolve_prefix("/docs/x.html", "docs"), "./");
    }

    #[test]
    fn test_resource_link() {
        assert_eq!(resource_link("../", "italy", "rome.pdf"), "../italy/rome.pdf");
        assert_eq!(resource_link(SAME_DIR, "alps", "tour.pdf"), "./alps/tour.pdf");
    }
}
