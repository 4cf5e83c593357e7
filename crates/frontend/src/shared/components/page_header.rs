use leptos::prelude::*;

/// Title row of a page; children are the action buttons on the right.
#[component]
pub fn PageHeader(
    #[prop(into)] title: String,
    #[prop(optional, into)] subtitle: MaybeProp<String>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    view! {
        <div class="page__header">
            <div class="page__header-left">
                <h1 class="page__title">{title}</h1>
                {move || subtitle.get().map(|s| view! { <span class="page__subtitle">{s}</span> })}
            </div>
            <div class="page__header-right">{children.map(|c| c())}</div>
        </div>
    }
}
