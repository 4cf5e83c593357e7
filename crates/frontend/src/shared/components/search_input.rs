use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use crate::shared::config::SEARCH_DEBOUNCE_MS;
use crate::shared::icons::icon;

/// Search box that reports its text after typing pauses, with a clear button.
#[component]
pub fn SearchInput(
    #[prop(into)] on_change: Callback<String>,
    #[prop(optional, into)] placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search...".to_string()
    } else {
        placeholder
    };
    let (text, set_text) = signal(String::new());
    // Dropping a pending Timeout cancels it.
    let pending = StoredValue::new_local(None::<Timeout>);

    let on_input = move |value: String| {
        set_text.set(value.clone());
        let timeout = Timeout::new(SEARCH_DEBOUNCE_MS, move || on_change.run(value));
        pending.set_value(Some(timeout));
    };

    let clear = move |_| {
        pending.set_value(None);
        set_text.set(String::new());
        on_change.run(String::new());
    };

    view! {
        <div class="search-input">
            <input
                type="text"
                class="form__input"
                placeholder=placeholder
                prop:value=move || text.get()
                on:input=move |ev| on_input(event_target_value(&ev))
            />
            <Show when=move || !text.with(String::is_empty)>
                <button type="button" class="search-input__clear" title="Clear" on:click=clear>
                    {icon("x")}
                </button>
            </Show>
        </div>
    }
}
