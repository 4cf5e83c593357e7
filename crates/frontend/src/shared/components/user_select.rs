use contracts::system::users::User;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::notification::use_notifications;
use crate::system::users::api::fetch_users;

/// Dropdown of all users; reports the chosen id (or `None` for the placeholder).
#[component]
pub fn UserSelect(
    selected: RwSignal<Option<i64>>,
    #[prop(optional)] on_change: Option<Callback<Option<i64>>>,
    #[prop(optional)] id: &'static str,
) -> impl IntoView {
    let notifications = use_notifications();
    let (users, set_users) = signal(Vec::<User>::new());
    let (loading, set_loading) = signal(true);
    let id = if id.is_empty() { "user-select" } else { id };

    spawn_local(async move {
        match fetch_users().await {
            Ok(list) => set_users.set(list),
            Err(e) => notifications.api_error("Failed to load users", &e),
        }
        set_loading.set(false);
    });

    view! {
        <div class="form__group">
            <label for=id>"User"</label>
            <select
                id=id
                class="form__select"
                disabled=move || loading.get()
                prop:value=move || selected.get().map(|v| v.to_string()).unwrap_or_default()
                on:change=move |ev| {
                    let value = event_target_value(&ev).parse::<i64>().ok();
                    selected.set(value);
                    if let Some(cb) = on_change {
                        cb.run(value);
                    }
                }
            >
                <option value="">
                    {move || if loading.get() { "Loading..." } else { "Select a user" }}
                </option>
                <For
                    each=move || users.get()
                    key=|u| u.id
                    children=move |user| view! {
                        <option value=user.id.to_string()>{user.display_name()}</option>
                    }
                />
            </select>
        </div>
    }
}
