//! Platform glue: blocking alerts, page reloads and file downloads.
//!
//! Web builds talk to the DOM through `web-sys`; desktop builds run inside the
//! Dioxus webview and reach the page through `document::eval`, writing files
//! to the user's download directory.

use thiserror::Error;
use tracing::{info, warn};

#[derive(Debug, Error)]
pub enum PlatformError {
    /// An element or browser object the code relies on is absent.
    #[error("missing page element: {0}")]
    MissingTarget(&'static str),
    #[error("browser call failed: {0}")]
    Js(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Shows a blocking alert dialog.
pub fn alert(message: &str) {
    warn!(%message, "alerting user");

    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let quoted = serde_json::to_string(message).unwrap_or_else(|_| "\"\"".into());
        let _ = dioxus::prelude::document::eval(&format!("window.alert({quoted});"));
    }
}

/// Full page reload (used by "reset assessment").
pub fn reload_page() {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().reload();
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = dioxus::prelude::document::eval("window.location.reload();");
    }
}

/// Origin of the hosting page (`https://host:port`), web only.
pub fn page_origin() -> Option<String> {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window().and_then(|w| w.location().origin().ok())
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}

/// Scrolls the element with `id` to its bottom.
pub async fn scroll_to_bottom(id: &str) {
    let script = format!(
        "const el = document.getElementById('{id}'); if (el) {{ el.scrollTop = el.scrollHeight; }}"
    );
    let _ = dioxus::prelude::document::eval(&script).await;
}

/// Hands `bytes` to the user as a file named `filename`.
///
/// Web: a temporary object URL is clicked through a hidden anchor, then
/// revoked. Returns `None` there (the browser owns the destination). Desktop:
/// returns the path written.
pub fn save_download(
    filename: &str,
    mime: &str,
    bytes: &[u8],
) -> Result<Option<String>, PlatformError> {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

        let array = js_sys::Uint8Array::from(bytes);
        let parts = js_sys::Array::new();
        parts.push(&array.buffer());

        let opts = BlobPropertyBag::new();
        opts.set_type(mime);
        let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &opts)
            .map_err(|_| PlatformError::Js("failed to create blob".into()))?;
        let url = Url::create_object_url_with_blob(&blob)
            .map_err(|_| PlatformError::Js("unable to create object URL".into()))?;

        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or(PlatformError::MissingTarget("document"))?;
        let anchor: HtmlAnchorElement = document
            .create_element("a")
            .map_err(|_| PlatformError::Js("unable to create anchor".into()))?
            .dyn_into()
            .map_err(|_| PlatformError::Js("anchor cast failed".into()))?;
        anchor.set_href(&url);
        anchor.set_download(filename);
        anchor.style().set_property("display", "none").ok();

        let body = document.body().ok_or(PlatformError::MissingTarget("body"))?;
        body.append_child(&anchor).ok();
        anchor.click();
        anchor.remove();
        Url::revoke_object_url(&url).ok();

        info!(filename, "download handed to browser");
        Ok(None)
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = mime;
        let dir = download_dir()?;
        std::fs::create_dir_all(&dir)?;
        let path = dir.join(filename);
        std::fs::write(&path, bytes)?;
        let shown = path.to_string_lossy().to_string();
        info!(path = %shown, "download written");
        Ok(Some(shown))
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn download_dir() -> Result<std::path::PathBuf, PlatformError> {
    let downloads = directories::UserDirs::new()
        .and_then(|dirs| dirs.download_dir().map(|d| d.to_path_buf()));
    if let Some(dir) = downloads {
        return Ok(dir);
    }
    let dirs = directories::ProjectDirs::from("com", "CardioCare", "CardioCare")
        .ok_or(PlatformError::MissingTarget("download directory"))?;
    Ok(dirs.data_dir().join("reports"))
}
