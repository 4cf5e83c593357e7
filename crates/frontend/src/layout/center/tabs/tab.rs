use crate::layout::global_context::{AppGlobalContext, Tab as TabData};
use crate::layout::tabs::tab_labels::HOME;
use crate::shared::icons::icon;
use leptos::ev;
use leptos::prelude::*;

/// Tab header. The home tab cannot be closed.
#[component]
pub fn Tab(tab: TabData) -> impl IntoView {
    let tabs_store = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    let key = StoredValue::new(tab.key.clone());
    let is_active = Memo::new(move |_| {
        key.with_value(|k| tabs_store.active.get().as_deref() == Some(k.as_str()))
    });
    let closable = tab.key != HOME;

    let on_close = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
        key.with_value(|k| tabs_store.close_tab(k));
    };

    view! {
        <div
            class="tab"
            class:active=is_active
            on:click=move |_| key.with_value(|k| tabs_store.activate_tab(k))
        >
            <span>{tab.title}</span>
            {closable.then(|| view! {
                <button class="tab-close" on:click=on_close>{icon("x")}</button>
            })}
        </div>
    }
}
