use crate::api;
use crate::components::notification::use_notifier;
use crate::components::one_proxy_selector::OneProxySelector;
use crate::components::proxy_table::ProxyTableView;
use leptos::prelude::*;
use proxypool_core::{ProxyPoolConfig, ProxyTable};

#[component]
pub fn ProxyListPage() -> impl IntoView {
    let config = use_context::<ProxyPoolConfig>().unwrap_or_default();
    let notifier = use_notifier();
    let table = RwSignal::new(ProxyTable::new(&config.table));

    // Fetch proxies on mount
    let list_path = config.api.list_path.clone();
    Effect::new(move || {
        let list_path = list_path.clone();
        table.update(|t| t.start_loading());
        wasm_bindgen_futures::spawn_local(async move {
            let result = api::fetch_proxies(&list_path).await;
            let mut failure = None;
            table.update(|t| failure = t.settle(result).err());
            if let Some(e) = failure {
                web_sys::console::error_1(&format!("Failed to load proxies: {}", e).into());
                notifier.error(e.to_string());
            }
        });
    });

    let loading = move || table.with(|t| t.is_loading());
    let one_path = config.api.one_path.clone();
    let page_size_options = config.table.page_size_options.clone();

    view! {
        <div class="page proxy-list-page">
            {move || loading().then(|| view! {
                <div class="loading"><span class="spinner"></span>" Loading..."</div>
            })}
            <div class="content-wrapper">
                <Show when=move || !loading()>
                    <OneProxySelector one_path=one_path.clone() />
                    <ProxyTableView table=table page_size_options=page_size_options.clone() />
                </Show>
            </div>
        </div>
    }
}
