//! External links and static assets

use std::path::Path;

/// Open a URL in the default browser
pub fn open_url(url: &str) {
    tracing::debug!(url, "Opening link");

    #[cfg(not(target_arch = "wasm32"))]
    {
        if let Err(e) = open::that(url) {
            tracing::warn!("Failed to open URL: {}", e);
        }
    }

    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.open_with_url_and_target(url, "_blank") {
                tracing::warn!("Failed to open URL: {:?}", e);
            }
        }
    }
}

/// Resolve a site-relative asset path such as `/resume.pdf`
///
/// Absolute URLs pass through. In the browser the path is served by the
/// host page. Natively it is looked up under `root` and `None` is returned
/// when no such file exists.
pub fn resolve_asset(path: &str, root: Option<&Path>) -> Option<String> {
    if path.contains("://") || path.starts_with("mailto:") {
        return Some(path.to_string());
    }

    if cfg!(target_arch = "wasm32") {
        return Some(path.to_string());
    }

    let file = root?.join(path.trim_start_matches('/'));
    if !file.is_file() {
        tracing::debug!(path = %file.display(), "Asset not found");
        return None;
    }
    Some(file.to_string_lossy().into_owned())
}
