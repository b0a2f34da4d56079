//! Static assets for the guide.
//!
//! The stylesheet and the architecture diagram are compiled into the binary
//! via `rust-embed`, so the server and the static exporter need no files on
//! disk.

use std::borrow::Cow;

#[derive(rust_embed::RustEmbed)]
#[folder = "assets"]
#[prefix = ""]
struct Assets;

/// Get an asset by path (relative to the assets root, e.g. `styles.css`).
///
/// Returns the file contents if the asset exists, `None` otherwise.
pub fn get(path: &str) -> Option<Cow<'static, [u8]>> {
    Assets::get(path.trim_start_matches('/')).map(|f| f.data)
}

/// Iterate all asset paths.
pub fn iter() -> impl Iterator<Item = Cow<'static, str>> {
    Assets::iter()
}

/// Return the MIME type for the given file path.
pub fn mime_for(path: &str) -> &'static str {
    mime_guess::from_path(path)
        .first_raw()
        .unwrap_or("application/octet-stream")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mime_for_known_types() {
        assert_eq!(mime_for("styles.css"), "text/css");
        assert_eq!(mime_for("images/microservices-logical.svg"), "image/svg+xml");
        assert_eq!(mime_for("index.html"), "text/html");
    }

    #[test]
    fn test_mime_for_unknown_type() {
        assert_eq!(mime_for("file.unknown_ext_xyz"), "application/octet-stream");
    }

    #[test]
    fn test_get_stylesheet() {
        let css = get("styles.css").unwrap();
        assert!(std::str::from_utf8(&css).unwrap().contains(".sidebar"));
    }

    #[test]
    fn test_get_accepts_leading_slash() {
        assert!(get("/images/microservices-logical.svg").is_some());
    }

    #[test]
    fn test_get_nonexistent_asset() {
        assert!(get("nonexistent_file_that_does_not_exist.txt").is_none());
    }

    #[test]
    fn test_iter_lists_all_assets() {
        let mut paths: Vec<_> = iter().map(Cow::into_owned).collect();
        paths.sort();
        assert_eq!(paths, ["images/microservices-logical.svg", "styles.css"]);
    }
}
