#![cfg(target_arch = "wasm32")]

use proxypool_core::{Category, OneProxyRequest, SpeedBucket};
use proxypool_web::api;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn one_proxy_url_uses_page_origin() {
    let origin = api::page_origin();
    assert!(!origin.is_empty());

    let url = OneProxyRequest::new(Some(Category::Https), Some(SpeedBucket::Medium)).url(&origin);
    assert_eq!(url, format!("{}/proxies/one?category=https&spped=1", origin));
}
