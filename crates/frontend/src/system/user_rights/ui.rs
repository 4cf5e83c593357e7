//! Permission tree editor: sections → modules → CRUD actions.

use contracts::system::permissions::{
    CheckState, PermissionAction, PermissionModule, PermissionSection, RightsTree,
};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::api;
use crate::shared::components::user_select::UserSelect;
use crate::shared::notification::use_notifications;
use crate::system::auth::context::use_capabilities;

#[component]
fn TriStateCheckbox(
    #[prop(into)] state: Signal<CheckState>,
    on_toggle: Callback<bool>,
    #[prop(into)] label: String,
) -> impl IntoView {
    view! {
        <label class="rights-tree__label">
            <input
                type="checkbox"
                prop:checked=move || state.get().is_checked()
                prop:indeterminate=move || state.get().is_indeterminate()
                on:change=move |ev| on_toggle.run(event_target_checked(&ev))
            />
            <span>{label}</span>
        </label>
    }
}

#[component]
fn ModuleRow(module: PermissionModule, tree: RwSignal<RightsTree>) -> impl IntoView {
    view! {
        <div class="rights-tree__module">
            <TriStateCheckbox
                state=Signal::derive(move || tree.with(|t| t.module_state(module)))
                on_toggle=Callback::new(move |on| tree.update(|t| t.toggle_module(module, on)))
                label=module.label()
            />
            <div class="rights-tree__actions">
                {std::iter::once(PermissionAction::Access)
                    .chain(PermissionAction::CRUD)
                    .map(|action| view! {
                        <label class="rights-tree__label">
                            <input
                                type="checkbox"
                                prop:checked=move || tree.with(|t| t.action_checked(module, action))
                                on:change=move |ev| {
                                    let on = event_target_checked(&ev);
                                    tree.update(|t| t.toggle_action(module, action, on));
                                }
                            />
                            <span>{action.label()}</span>
                        </label>
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
pub fn UserRightsPage() -> impl IntoView {
    let notifications = use_notifications();
    let capabilities = use_capabilities(PermissionModule::UserRights);
    let user = RwSignal::new(None::<i64>);
    let tree = RwSignal::new(RightsTree::default());
    let (loading, set_loading) = signal(false);
    let (saving, set_saving) = signal(false);

    let load_rights = move |user_id: Option<i64>| {
        tree.set(RightsTree::default());
        let Some(user_id) = user_id else {
            return;
        };
        set_loading.set(true);
        spawn_local(async move {
            match api::fetch_user_permissions(user_id).await {
                // Ignore a response for a user that is no longer selected.
                Ok(granted) if user.get_untracked() == Some(user_id) => {
                    tree.set(RightsTree::new(granted))
                }
                Ok(_) => {}
                Err(e) => notifications.api_error("Failed to load permissions", &e),
            }
            set_loading.set(false);
        });
    };

    let save = move |_| {
        let Some(user_id) = user.get_untracked() else {
            notifications.error("Please select a user");
            return;
        };
        let granted = tree.with_untracked(|t| t.granted().clone());
        set_saving.set(true);
        spawn_local(async move {
            match api::save_user_rights(user_id, &granted).await {
                Ok(()) => notifications.success("User rights saved successfully"),
                Err(e) => notifications.api_error("Failed to save user rights", &e),
            }
            set_saving.set(false);
        });
    };

    view! {
        <div class="page">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"User Rights"</h1>
                </div>
                <div class="page__header-right">
                    <Show when=move || capabilities.get().can_update>
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=save
                            disabled=Signal::derive(move || saving.get() || user.get().is_none())
                        >
                            {move || if saving.get() { "Saving..." } else { "Save" }}
                        </Button>
                    </Show>
                </div>
            </div>
            <div class="page__content">
                <UserSelect selected=user on_change=Callback::new(load_rights) />

                <Show when=move || user.get().is_some()>
                    <Show
                        when=move || !loading.get()
                        fallback=|| view! { <div class="text-muted">"Loading permissions..."</div> }
                    >
                        <div class="rights-tree">
                            <label class="rights-tree__label rights-tree__all">
                                <input
                                    type="checkbox"
                                    prop:checked=move || tree.with(|t| t.all_selected())
                                    on:change=move |ev| {
                                        let on = event_target_checked(&ev);
                                        tree.update(|t| t.select_all(on));
                                    }
                                />
                                <span>"Select all"</span>
                            </label>
                            {PermissionSection::ALL.into_iter().map(|section| view! {
                                <div class="rights-tree__section">
                                    <TriStateCheckbox
                                        state=Signal::derive(move || tree.with(|t| t.section_state(section)))
                                        on_toggle=Callback::new(move |on| tree.update(|t| t.toggle_section(section, on)))
                                        label=section.label()
                                    />
                                    {section.modules().into_iter()
                                        .map(|module| view! { <ModuleRow module=module tree=tree /> })
                                        .collect_view()}
                                </div>
                            }).collect_view()}
                        </div>
                    </Show>
                </Show>
            </div>
        </div>
    }
}
