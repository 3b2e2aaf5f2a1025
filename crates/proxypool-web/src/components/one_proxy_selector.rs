use crate::api;
use crate::clipboard;
use crate::components::notification::use_notifier;
use leptos::prelude::*;
use proxypool_core::{Category, OneProxyRequest, SpeedBucket};

/// "Get available proxy" card: builds the `/proxies/one` URL and copies it.
#[component]
pub fn OneProxySelector(#[prop(into)] one_path: String) -> impl IntoView {
    let notifier = use_notifier();
    let (category, set_category) = signal(None::<Category>);
    let (speed, set_speed) = signal(None::<SpeedBucket>);

    let origin = api::page_origin();
    let request_url = Memo::new(move |_| {
        OneProxyRequest::new(category.get(), speed.get()).url_with_path(&origin, &one_path)
    });

    let copy_url = move |_| {
        let url = request_url.get_untracked();
        wasm_bindgen_futures::spawn_local(async move {
            match clipboard::copy_text(&url).await {
                Ok(()) => notifier.info("The URL was copied successfully."),
                Err(e) => notifier.error(e.to_string()),
            }
        });
    };

    view! {
        <div class="card proxy-selector">
            <div class="card-title">"Get available proxy"</div>
            <p>"Select category and speed to generate the request."</p>
            <div class="selector-row">
                <button class="url-btn" title="Copy to clipboard" on:click=copy_url>
                    <span>{move || request_url.get()}</span>
                </button>
                <select on:change=move |ev| set_category.set(Category::from_str(&event_target_value(&ev)))>
                    <option value="">"http(s)"</option>
                    {Category::all().iter().map(|c| {
                        view! { <option value=c.as_str()>{c.as_str()}</option> }
                    }).collect::<Vec<_>>()}
                </select>
                <select on:change=move |ev| set_speed.set(SpeedBucket::from_param(&event_target_value(&ev)))>
                    <option value="">"all"</option>
                    {SpeedBucket::all().iter().map(|s| {
                        view! { <option value=s.as_param()>{s.label()}</option> }
                    }).collect::<Vec<_>>()}
                </select>
            </div>
        </div>
    }
}
