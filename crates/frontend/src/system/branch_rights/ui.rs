//! Which branches, departments and sub-departments a user may work with.

use contracts::system::branch_rights::{Assignment, BranchRightsResponse, BranchRightsSelection};
use contracts::system::permissions::PermissionModule;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::api;
use crate::shared::components::user_select::UserSelect;
use crate::shared::notification::use_notifications;
use crate::system::auth::context::use_capabilities;

#[component]
pub fn BranchRightsPage() -> impl IntoView {
    let notifications = use_notifications();
    let capabilities = use_capabilities(PermissionModule::UserRights);
    let user = RwSignal::new(None::<i64>);
    let tree = RwSignal::new(BranchRightsResponse::default());
    let selection = RwSignal::new(BranchRightsSelection::default());
    let (loading, set_loading) = signal(false);
    let (saving, set_saving) = signal(false);

    let load = move |user_id: Option<i64>| {
        tree.set(BranchRightsResponse::default());
        selection.set(BranchRightsSelection::default());
        let Some(user_id) = user_id else {
            return;
        };
        set_loading.set(true);
        spawn_local(async move {
            match api::fetch_branch_rights(user_id).await {
                Ok(response) if user.get_untracked() == Some(user_id) => {
                    selection.set(BranchRightsSelection::from_response(&response));
                    tree.set(response);
                }
                Ok(_) => {}
                Err(e) => notifications.api_error("Failed to load branch rights", &e),
            }
            set_loading.set(false);
        });
    };

    let save = move |_| {
        let Some(user_id) = user.get_untracked() else {
            notifications.error("Please select a user");
            return;
        };
        let request = selection.with_untracked(|s| s.to_request());
        set_saving.set(true);
        spawn_local(async move {
            match api::save_branch_rights(user_id, &request).await {
                Ok(()) => notifications.success("Branch rights saved successfully"),
                Err(e) => notifications.api_error("Failed to save branch rights", &e),
            }
            set_saving.set(false);
        });
    };

    view! {
        <div class="page">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Branch Rights"</h1>
                    <Show when=move || user.get().is_some()>
                        <Badge>{move || format!("{} selected", selection.with(|s| s.len()))}</Badge>
                    </Show>
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
                <UserSelect selected=user on_change=Callback::new(load) id="branch-rights-user" />

                <Show
                    when=move || !loading.get()
                    fallback=|| view! { <div class="text-muted">"Loading..."</div> }
                >
                    <div class="rights-tree">
                        {move || tree.get().branches.into_iter().map(|branch| view! {
                            <div class="rights-tree__section">
                                <div class="rights-tree__title">{branch.name.clone()}</div>
                                {branch.departments.into_iter().map(|department| view! {
                                    <div class="rights-tree__module">
                                        <div class="rights-tree__subtitle">{department.name.clone()}</div>
                                        <div class="rights-tree__actions">
                                            {department.subdepartments.into_iter().map(|sub| {
                                                let assignment = Assignment {
                                                    branch_id: branch.id,
                                                    department_id: department.id,
                                                    subdepartment_id: sub.id,
                                                };
                                                view! {
                                                    <label class="rights-tree__label">
                                                        <input
                                                            type="checkbox"
                                                            prop:checked=move || selection.with(|s| s.is_selected(&assignment))
                                                            on:change=move |ev| {
                                                                let on = event_target_checked(&ev);
                                                                selection.update(|s| s.toggle(assignment, on));
                                                            }
                                                        />
                                                        <span>{sub.name}</span>
                                                    </label>
                                                }
                                            }).collect_view()}
                                        </div>
                                    </div>
                                }).collect_view()}
                            </div>
                        }).collect_view()}
                    </div>
                </Show>
            </div>
        </div>
    }
}
