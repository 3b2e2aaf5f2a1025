use leptos::prelude::*;
use leptos_router::components::*;
use leptos_router::path;
use proxypool_core::ProxyPoolConfig;
use std::time::Duration;

use crate::components::header::Header;
use crate::components::notification::{NotificationArea, Notifier};
use crate::pages::proxy_list::ProxyListPage;

#[component]
pub fn App() -> impl IntoView {
    let config = ProxyPoolConfig::default();
    provide_context(Notifier::new(Duration::from_millis(config.notify.duration_ms)));
    provide_context(config);

    view! {
        <Router>
            <div class="app">
                <Header />
                <NotificationArea />
                <main class="content">
                    <Routes fallback=|| view! { <p>"Page not found"</p> }>
                        <Route path=path!("/") view=ProxyListPage />
                    </Routes>
                </main>
            </div>
        </Router>
    }
}
