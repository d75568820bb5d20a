/// Clipboard access for the generated link
use js_sys::{Function, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{HtmlTextAreaElement, Window};

/// Write `text` to the system clipboard. Prefers the async clipboard API;
/// falls back to an off-screen text field and the `copy` editing command
/// when the host page does not expose `navigator.clipboard`. Returns
/// whether the copy actually happened.
pub async fn write_clipboard_text(text: &str) -> Result<bool, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("window is unavailable"))?;

    let navigator = window.navigator();
    let has_clipboard = Reflect::has(&navigator, &JsValue::from_str("clipboard")).unwrap_or(false);
    if has_clipboard {
        let promise = navigator.clipboard().write_text(text);
        if JsFuture::from(promise).await.is_ok() {
            return Ok(true);
        }
    }

    copy_via_hidden_field(&window, text)
}

// execCommand path: a transient off-screen textarea holds the text while
// the copy command runs, then is removed again.
fn copy_via_hidden_field(window: &Window, text: &str) -> Result<bool, JsValue> {
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("document is unavailable"))?;
    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("document body is unavailable"))?;

    let field = document
        .create_element("textarea")?
        .dyn_into::<HtmlTextAreaElement>()?;
    field.set_value(text);
    field.set_attribute("readonly", "")?;
    field.style().set_property("position", "absolute")?;
    field.style().set_property("left", "-9999px")?;
    body.append_child(&field)?;
    let _ = field.focus();
    field.select();

    let exec = Reflect::get(document.as_ref(), &JsValue::from_str("execCommand"))?;
    let copied = if exec.is_function() {
        let exec: Function = exec.dyn_into()?;
        exec.call1(document.as_ref(), &JsValue::from_str("copy"))?
            .as_bool()
            .unwrap_or(false)
    } else {
        false
    };

    field.remove();
    Ok(copied)
}
