use gloo_net::http::Request;
use proxypool_core::{Proxy, ProxyListResponse, ProxyPoolError, Result};

pub async fn fetch_proxies(path: &str) -> Result<Vec<Proxy>> {
    let resp = Request::get(path)
        .send()
        .await
        .map_err(|e| ProxyPoolError::Http(e.to_string()))?;

    if !resp.ok() {
        return Err(ProxyPoolError::Status(resp.status()));
    }

    let body: ProxyListResponse = resp
        .json()
        .await
        .map_err(|e| ProxyPoolError::Http(e.to_string()))?;
    Ok(body.proxies)
}

/// `window.location.origin`, or an empty string outside a browser
pub fn page_origin() -> String {
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default()
}
