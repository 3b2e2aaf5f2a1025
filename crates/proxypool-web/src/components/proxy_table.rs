use leptos::prelude::*;
use proxypool_core::{Category, ProxyTable, SortField, SortOrder, Sorter};

/// Arrow shown next to a sortable column title
pub fn sort_indicator(sorter: Option<Sorter>, field: SortField) -> &'static str {
    match sorter {
        Some(s) if s.field == field => match s.order {
            SortOrder::Ascend => " ▲",
            SortOrder::Descend => " ▼",
        },
        _ => " ↕",
    }
}

/// Local date and time, like `Date.toLocaleDateString() + toLocaleTimeString()`
fn local_time(epoch_secs: i64) -> String {
    let date = js_sys::Date::new(&wasm_bindgen::JsValue::from_f64(epoch_secs as f64 * 1000.0));
    format!(
        "{} {}",
        String::from(date.to_locale_date_string("default", &wasm_bindgen::JsValue::UNDEFINED)),
        String::from(date.to_locale_time_string("default")),
    )
}

#[component]
pub fn ProxyTableView(table: RwSignal<ProxyTable>, page_size_options: Vec<usize>) -> impl IntoView {
    let sortable_header = move |field: SortField| {
        view! {
            <th class="sortable" on:click=move |_| table.update(|t| t.toggle_sort(field))>
                {field.label()}
                <span class="sort-indicator">{move || sort_indicator(table.with(|t| t.sorter()), field)}</span>
            </th>
        }
    };

    let category_filter = move |category: Category| {
        view! {
            <label class="filter-option">
                <input
                    type="checkbox"
                    prop:checked=move || table.with(|t| t.filters().category.contains(&category))
                    on:change=move |_| table.update(|t| {
                        let mut filters = t.filters().clone();
                        filters.toggle_category(category);
                        t.apply(filters, t.sorter());
                    })
                />
                {category.as_str()}
            </label>
        }
    };

    view! {
        <table class="proxy-table">
            <thead>
                <tr>
                    <th>"IP"</th>
                    <th>"Port"</th>
                    {sortable_header(SortField::Speed)}
                    <th>
                        "Type"
                        <div class="column-filter">
                            {Category::all().iter().map(|c| category_filter(*c)).collect::<Vec<_>>()}
                        </div>
                    </th>
                    <th>"Anonymous"</th>
                    {sortable_header(SortField::DetectedAt)}
                </tr>
            </thead>
            <tbody>
                {move || table.with(|t| {
                    if t.page_items().is_empty() {
                        return view! {
                            <tr><td colspan="6" class="placeholder">"No data"</td></tr>
                        }.into_any();
                    }
                    t.page_items().iter().map(|p| view! {
                        <tr>
                            <td>{p.ip.clone()}</td>
                            <td>{p.port.to_string()}</td>
                            <td>{p.speed.to_string()}</td>
                            <td>{p.category.to_string()}</td>
                            <td>{p.anonymous_label()}</td>
                            <td>{local_time(p.detected_at)}</td>
                        </tr>
                    }).collect::<Vec<_>>().into_any()
                })}
            </tbody>
        </table>

        <div class="pagination">
            <button
                disabled=move || table.with(|t| t.page() == 0)
                on:click=move |_| table.update(|t| t.set_page(t.page().saturating_sub(1)))
            >
                "‹"
            </button>
            <span class="page-info">
                {move || table.with(|t| format!("{} / {} ({} total)", t.page() + 1, t.page_count(), t.total()))}
            </span>
            <button
                disabled=move || table.with(|t| t.page() + 1 >= t.page_count())
                on:click=move |_| table.update(|t| t.set_page(t.page() + 1))
            >
                "›"
            </button>
            <select
                prop:value=move || table.with(|t| t.page_size().to_string())
                on:change=move |ev| {
                    if let Ok(size) = event_target_value(&ev).parse() {
                        table.update(|t| t.set_page_size(size));
                    }
                }
            >
                {page_size_options.into_iter().map(|n| view! {
                    <option value=n.to_string()>{format!("{} / page", n)}</option>
                }).collect::<Vec<_>>()}
            </select>
        </div>
    }
}
