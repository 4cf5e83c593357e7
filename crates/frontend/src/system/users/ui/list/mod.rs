pub mod state;

use contracts::shared::capabilities::{Capabilities, RowAction};
use contracts::shared::load_state::LoadState;
use contracts::system::permissions::PermissionModule;
use contracts::system::users::{User, UserStatus};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::details::UserFormModal;
use crate::shared::components::confirm_dialog::ConfirmDialog;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::row_actions::RowActions;
use crate::shared::date_utils::format_datetime_or;
use crate::shared::icons::icon;
use crate::shared::notification::use_notifications;
use crate::system::auth::context::use_capabilities;
use crate::system::users::api;
use state::{create_state, UserForm};

const COLUMNS: usize = 7;

/// Row actions come from the flags the backend puts on each user.
fn row_capabilities(user: &User) -> Capabilities {
    Capabilities {
        can_view: false,
        can_create: false,
        can_update: user.can_update_users,
        can_delete: user.can_delete_users,
    }
}

#[component]
pub fn UsersListPage() -> impl IntoView {
    let state = create_state();
    let notifications = use_notifications();
    let capabilities = use_capabilities(PermissionModule::Users);

    let load_data = move || {
        state.update(|s| s.load = LoadState::Loading);
        spawn_local(async move {
            let result = api::fetch_users().await;
            state.update(|s| s.load.finish(&result));
            match result {
                Ok(users) => state.update(|s| s.set_users(users)),
                Err(e) => notifications.api_error("Failed to load users", &e),
            }
        });
    };

    load_data();

    let confirm_delete = move || {
        let Some(user) = state.try_update(|s| s.pending_delete.confirm()).flatten() else {
            return;
        };
        spawn_local(async move {
            match api::delete_user(user.id).await {
                Ok(()) => {
                    notifications.success("User deleted successfully");
                    load_data();
                }
                Err(e) => notifications.api_error("Failed to delete user", &e),
            }
        });
    };

    let on_action = move |user: User, action: RowAction| match action {
        RowAction::Edit => state.update(|s| s.form = Some(UserForm::Edit(user))),
        RowAction::Delete => state.update(|s| s.pending_delete.request(user)),
        RowAction::View => {}
    };

    let loading = Signal::derive(move || state.with(|s| s.load.is_loading()));
    let form = Memo::new(move |_| state.with(|s| s.form.clone()));
    let deleting = Memo::new(move |_| state.with(|s| s.pending_delete.is_open()));

    view! {
        <div class="page">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Users"</h1>
                    <Badge>{move || state.with(|s| s.all.len()).to_string()}</Badge>
                </div>
                <div class="page__header-right">
                    <Show when=move || capabilities.get().can_create>
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=move |_| state.update(|s| s.form = Some(UserForm::Create))
                        >
                            {icon("plus")}
                            " Add User"
                        </Button>
                    </Show>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| load_data()
                        disabled=loading
                    >
                        {icon("refresh")}
                        {move || if loading.get() { " Loading..." } else { " Refresh" }}
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"Username"</TableHeaderCell>
                                <TableHeaderCell>"Name"</TableHeaderCell>
                                <TableHeaderCell>"Email"</TableHeaderCell>
                                <TableHeaderCell>"Mobile"</TableHeaderCell>
                                <TableHeaderCell>"Status"</TableHeaderCell>
                                <TableHeaderCell>"Last login"</TableHeaderCell>
                                <TableHeaderCell>"Actions"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <Show when=move || state.with(|s| s.load.is_loaded() && s.all.is_empty())>
                                <TableRow>
                                    <TableCell attr:colspan=COLUMNS.to_string()>"No users found"</TableCell>
                                </TableRow>
                            </Show>
                            <For
                                each=move || state.with(|s| s.page_items())
                                key=|u| (u.id, u.username.clone(), u.email.clone(), u.status.as_str())
                                children=move |user| {
                                    let caps = row_capabilities(&user);
                                    let for_action = user.clone();
                                    let status_class = match user.status {
                                        UserStatus::Active => "badge badge--success",
                                        UserStatus::Inactive => "badge badge--error",
                                    };
                                    let status_label = user.status.label();
                                    let username = user.username.clone();
                                    let full_name = user.full_name();
                                    let email = user.email.clone();
                                    let mobile = user.mobile_number.clone().unwrap_or_default();
                                    let last_login = format_datetime_or(user.last_login.as_deref(), "Never");
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    <span style="font-weight: 500;">{username}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{full_name}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{email}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{mobile}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <span class=status_class>{status_label}</span>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    {last_login}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <RowActions
                                                    capabilities=caps
                                                    on_action=Callback::new(move |action| on_action(for_action.clone(), action))
                                                />
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                </div>

                <PaginationControls
                    current_page=Signal::derive(move || state.with(|s| s.page))
                    total_pages=Signal::derive(move || state.with(|s| s.total_pages()))
                    on_page_change=Callback::new(move |page| state.update(|s| s.page = page))
                />

                {move || form.get().map(|form| view! {
                    <UserFormModal
                        form=form
                        on_close=move || state.update(|s| s.form = None)
                        on_saved=move || {
                            state.update(|s| s.form = None);
                            load_data();
                        }
                    />
                })}

                {move || deleting.get().then(|| view! {
                    <ConfirmDialog
                        message="Are you sure you want to delete this user?"
                        on_confirm=Callback::new(move |_| confirm_delete())
                        on_cancel=Callback::new(move |_| state.update(|s| s.pending_delete.cancel()))
                    />
                })}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_capabilities_from_flags() {
        let user: User = serde_json::from_value(serde_json::json!({
            "id": 1, "username": "a", "can_update_users": true
        }))
        .unwrap();
        assert_eq!(row_capabilities(&user).row_actions(), vec![RowAction::Edit]);
    }
}
