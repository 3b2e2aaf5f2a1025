use js_sys::{Function, Promise, Reflect};
use proxypool_core::{ProxyPoolError, Result};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

const UNSUPPORTED: &str = "The browser does not support copying to the clipboard";

/// Writes `text` to the system clipboard via `navigator.clipboard.writeText`.
///
/// Insecure contexts and older browsers have no `navigator.clipboard`; that
/// case is reported as an error instead of throwing.
pub async fn copy_text(text: &str) -> Result<()> {
    let window = web_sys::window().ok_or_else(|| ProxyPoolError::Clipboard(UNSUPPORTED.to_string()))?;
    let navigator = window.navigator();

    let clipboard = Reflect::get(navigator.as_ref(), &JsValue::from_str("clipboard"))
        .ok()
        .filter(|c| !c.is_undefined() && !c.is_null())
        .ok_or_else(|| ProxyPoolError::Clipboard(UNSUPPORTED.to_string()))?;

    let write_text = Reflect::get(&clipboard, &JsValue::from_str("writeText"))
        .ok()
        .and_then(|f| f.dyn_into::<Function>().ok())
        .ok_or_else(|| ProxyPoolError::Clipboard(UNSUPPORTED.to_string()))?;

    let promise = write_text
        .call1(&clipboard, &JsValue::from_str(text))
        .map_err(js_error)?
        .dyn_into::<Promise>()
        .map_err(js_error)?;

    JsFuture::from(promise).await.map_err(js_error)?;
    Ok(())
}

fn js_error(value: JsValue) -> ProxyPoolError {
    let message = value
        .dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| value.as_string())
        .unwrap_or_else(|| "copy failed".to_string());
    ProxyPoolError::Clipboard(message)
}
