//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs with proper error handling.

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlInputElement, Window};

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Get the document of the current window.
#[inline]
pub fn document() -> Option<Document> {
    window()?.document()
}

/// Set the document title and the `<meta name="description">` content.
///
/// A missing meta tag is left alone; `index.html` is expected to carry it.
pub fn apply_document_metadata(title: &str, description: &str) {
    let Some(document) = document() else { return };
    document.set_title(title);

    if let Some(meta) = document
        .query_selector(r#"meta[name="description"]"#)
        .ok()
        .flatten()
    {
        let _ = meta.set_attribute("content", description);
    }
}

/// First file selected in the `<input type="file">` that fired `ev`.
pub fn selected_file(ev: &web_sys::Event) -> Option<web_sys::File> {
    let input = ev.target()?.dyn_into::<HtmlInputElement>().ok()?;
    input.files()?.get(0)
}
