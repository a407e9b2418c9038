//! Static assets for the Bootnode site.
//!
//! The stylesheet and client script live in `static/` and are compiled into
//! the binary via `rust-embed`. Debug builds read them from disk unless the
//! `debug-embed` feature is on, so edits show up without a rebuild.

use std::borrow::Cow;

#[derive(rust_embed::RustEmbed)]
#[folder = "static/"]
struct Assets;

/// Stylesheet linked from every page.
pub const STYLESHEET: &str = "site.css";

/// Script loaded by every page.
pub const SCRIPT: &str = "site.js";

/// Get an asset by path relative to `static/`.
pub fn get(path: &str) -> Option<Cow<'static, [u8]>> {
    Assets::get(path).map(|f| f.data)
}

/// SHA-256 of an asset as hex, suitable as a strong `ETag`.
pub fn digest(path: &str) -> Option<String> {
    Assets::get(path).map(|f| hex::encode(f.metadata.sha256_hash()))
}

/// Iterate all asset paths.
pub fn iter() -> impl Iterator<Item = Cow<'static, str>> {
    Assets::iter()
}

/// MIME type for the given file path.
pub fn mime_for(path: &str) -> String {
    mime_guess::from_path(path)
        .first_or_octet_stream()
        .essence_str()
        .to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mime_for_known_types() {
        assert_eq!(mime_for("site.css"), "text/css");
        assert_eq!(mime_for("site.js"), "text/javascript");
        assert_eq!(mime_for("logo.png"), "image/png");
    }

    #[test]
    fn test_mime_for_unknown_type() {
        assert_eq!(mime_for("file.unknown_ext_xyz"), "application/octet-stream");
    }

    #[test]
    fn test_builtin_assets_present() {
        let css = get(STYLESHEET).unwrap();
        assert!(std::str::from_utf8(&css).unwrap().contains(".docs-sidebar"));

        let js = get(SCRIPT).unwrap();
        assert!(std::str::from_utf8(&js).unwrap().contains("/ws/viewport"));

        let mut paths: Vec<_> = iter().collect();
        paths.sort();
        assert_eq!(paths, vec!["site.css", "site.js"]);
    }

    #[test]
    fn test_digest_is_stable_hex() {
        let first = digest(STYLESHEET).unwrap();
        assert_eq!(first.len(), 64);
        assert_eq!(digest(STYLESHEET), Some(first));
        assert!(digest("missing.css").is_none());
    }

    #[test]
    fn test_get_nonexistent_asset() {
        assert!(get("nonexistent_file_that_does_not_exist.txt").is_none());
    }
}
