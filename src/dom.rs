//! Thin DOM access helpers shared by the effects

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, Window};

pub fn window() -> Option<Window> {
    web_sys::window()
}

pub fn document() -> Option<Document> {
    web_sys::window().and_then(|w| w.document())
}

/// All elements matching `selector`, downcast to `HtmlElement`.
/// An invalid selector yields an empty list.
pub fn query_all(doc: &Document, selector: &str) -> Vec<HtmlElement> {
    let mut out = Vec::new();
    let Ok(list) = doc.query_selector_all(selector) else {
        return out;
    };
    for i in 0..list.length() {
        if let Some(el) = list.get(i).and_then(|n| n.dyn_into::<HtmlElement>().ok()) {
            out.push(el);
        }
    }
    out
}

/// First element matching `selector`, downcast to `HtmlElement`.
pub fn query_one(doc: &Document, selector: &str) -> Option<HtmlElement> {
    doc.query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

/// Append a `<style>` element holding `css` to `<head>`, returning it so
/// the caller can remove it on teardown.
pub fn inject_stylesheet(doc: &Document, css: &str) -> Result<Element, JsValue> {
    let head = doc
        .head()
        .ok_or_else(|| JsValue::from_str("document has no head"))?;
    let style = doc.create_element("style")?;
    style.set_text_content(Some(css));
    head.append_child(&style)?;
    Ok(style)
}
