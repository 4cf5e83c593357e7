use crate::shared::icons::icon;
use leptos::prelude::*;

/// Collapsible search panel used above list tables.
///
/// The header shows how many filters are active and hosts the pager; the body
/// holds the filter inputs.
#[component]
pub fn FilterPanel(
    is_expanded: RwSignal<bool>,
    #[prop(into)] active_filters_count: Signal<usize>,
    #[prop(optional, into)] title: Option<String>,
    #[prop(optional, into)] header_extra: Option<ViewFn>,
    children: ChildrenFn,
) -> impl IntoView {
    let title = title.unwrap_or_else(|| "Search".to_string());

    view! {
        <div class="filter-panel">
            <div class="filter-panel-header">
                <div
                    class="filter-panel-header__left"
                    on:click=move |_| is_expanded.update(|e| *e = !*e)
                >
                    <span class=move || {
                        if is_expanded.get() {
                            "filter-panel__chevron filter-panel__chevron--expanded"
                        } else {
                            "filter-panel__chevron"
                        }
                    }>{icon("chevron-down")}</span>
                    {icon("filter")}
                    <span class="filter-panel__title">{title}</span>
                    {move || {
                        let count = active_filters_count.get();
                        (count > 0).then(|| view! { <span class="badge badge--primary">{count}</span> })
                    }}
                </div>
                <div class="filter-panel-header__center">
                    {header_extra.as_ref().map(|extra| extra.run())}
                </div>
            </div>
            <Show when=move || is_expanded.get()>
                <div class="filter-panel-content">{children()}</div>
            </Show>
        </div>
    }
}
