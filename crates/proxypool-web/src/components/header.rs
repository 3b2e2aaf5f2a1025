use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <span class="header-icon">"⇄"</span>
            <h1>"Free Proxy"</h1>
        </header>
    }
}
