//! Input-URI classification and output-name derivation.
//!
//! URIs arrive as `scheme://path` or as bare filesystem paths. The scheme
//! is preserved when deriving the parent directory for the logical output
//! URI; everything after it is treated as a plain path.

use std::path::{Path, PathBuf};

use uuid::Uuid;

/// Splits a URI into its scheme (if any) and path part.
fn split_scheme(uri: &str) -> (Option<&str>, &str) {
    match uri.split_once("://") {
        Some((scheme, rest)) => (Some(scheme), rest),
        None => (None, uri),
    }
}

/// Returns true when the URI names a PDF document.
pub fn is_pdf(uri: &str) -> bool {
    let (_, path) = split_scheme(uri);
    Path::new(path)
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"))
}

/// Extracts the filesystem path of a URI, dropping the scheme prefix.
pub fn local_path(uri: &str) -> PathBuf {
    let (_, path) = split_scheme(uri);
    PathBuf::from(path)
}

/// Derives the parent directory of a URI, keeping its scheme.
///
/// `s3://bucket/scans/card.png` becomes `s3://bucket/scans/`; a bare path
/// keeps no scheme. Used to place the logical masked-output URI next to
/// the input.
pub fn parent_dir(uri: &str) -> String {
    let (scheme, path) = split_scheme(uri);
    let parent = Path::new(path)
        .parent()
        .map(|p| p.to_string_lossy().into_owned())
        .unwrap_or_default();

    match scheme {
        Some(scheme) => format!("{}://{}/", scheme, parent),
        None if parent.is_empty() => String::new(),
        None => format!("{}/", parent),
    }
}

/// Builds a fresh output file name for a masked page.
///
/// Shape: `masked_<input stem>_<8 hex chars>.png`. The random suffix keeps
/// repeated maskings of the same document from colliding.
pub fn masked_file_name(page: &Path) -> String {
    let stem = page
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "page".to_string());
    let suffix = Uuid::new_v4().simple().to_string();
    format!("masked_{}_{}.png", stem, &suffix[..8])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_pdf() {
        assert!(is_pdf("file:///scans/statement.pdf"));
        assert!(is_pdf("statement.PDF"));
        assert!(!is_pdf("file:///scans/card.png"));
        assert!(!is_pdf("file:///scans/statement.pdf.png"));
    }

    #[test]
    fn test_local_path_strips_scheme() {
        assert_eq!(
            local_path("file:///scans/card.png"),
            PathBuf::from("/scans/card.png")
        );
        assert_eq!(local_path("card.png"), PathBuf::from("card.png"));
    }

    #[test]
    fn test_parent_dir_keeps_scheme() {
        assert_eq!(parent_dir("s3://bucket/scans/card.png"), "s3://bucket/scans/");
        assert_eq!(parent_dir("/scans/card.png"), "/scans/");
        assert_eq!(parent_dir("card.png"), "");
    }

    #[test]
    fn test_masked_file_name_shape() {
        let name = masked_file_name(Path::new("/scans/card_page_1.png"));
        assert!(name.starts_with("masked_card_page_1_"));
        assert!(name.ends_with(".png"));
        // stem + underscore + 8 hex chars + extension
        assert_eq!(name.len(), "masked_card_page_1_".len() + 8 + ".png".len());
    }

    #[test]
    fn test_masked_file_names_do_not_collide() {
        let page = Path::new("card.png");
        assert_ne!(masked_file_name(page), masked_file_name(page));
    }
}
