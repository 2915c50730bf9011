//! Clipboard utilities for copying text to clipboard
//!
//! Uses the async Web Clipboard API.

use wasm_bindgen_futures::spawn_local;

/// Copy text to the system clipboard and report the outcome
///
/// # Example
/// ```rust,ignore
/// copy_to_clipboard(&url, move |result| match result {
///     Ok(()) => alerts.show("URL copied to clipboard", Severity::Success),
///     Err(e) => log::warn!("copy failed: {e}"),
/// });
/// ```
pub fn copy_to_clipboard<F>(text: &str, on_done: F)
where
    F: FnOnce(Result<(), String>) + 'static,
{
    let text = text.to_owned();
    spawn_local(async move {
        let Some(window) = web_sys::window() else {
            on_done(Err("No window object".to_string()));
            return;
        };
        let clipboard = window.navigator().clipboard();
        let result = wasm_bindgen_futures::JsFuture::from(clipboard.write_text(&text))
            .await
            .map(|_| ())
            .map_err(|e| format!("{:?}", e));
        on_done(result);
    });
}
