use contracts::domain::a001_division_branch::DivisionBranch;
use contracts::domain::a004_branch_department_link::BranchDepartmentLink;
use contracts::shared::load_state::LoadState;
use contracts::shared::pending_delete::PendingDelete;
use contracts::system::permissions::PermissionModule;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::link_modal::AddLinksModal;
use crate::domain::a001_division_branch::api as branch_api;
use crate::domain::a004_branch_department_link::api;
use crate::shared::components::confirm_dialog::ConfirmDialog;
use crate::shared::components::page_header::PageHeader;
use crate::shared::icons::icon;
use crate::shared::notification::use_notifications;
use crate::system::auth::context::use_capabilities;

const COLUMNS: usize = 5;

#[derive(Clone, Debug, Default)]
struct LinkListState {
    links: Vec<BranchDepartmentLink>,
    /// Branch chosen in the filter; `None` lists every link.
    branch: Option<i64>,
    load: LoadState,
    adding: bool,
    pending_delete: PendingDelete<BranchDepartmentLink>,
}

fn status_badge(link: &BranchDepartmentLink) -> (&'static str, &'static str) {
    if link.is_active {
        ("badge badge--success", "Active")
    } else {
        ("badge badge--error", "Inactive")
    }
}

fn or_placeholder(value: &str, placeholder: &str) -> String {
    if value.is_empty() {
        placeholder.to_string()
    } else {
        value.to_string()
    }
}

#[component]
pub fn BranchDepartmentLinkList() -> impl IntoView {
    let state = RwSignal::new(LinkListState::default());
    let branches = RwSignal::new(Vec::<DivisionBranch>::new());
    let notifications = use_notifications();
    let capabilities = use_capabilities(PermissionModule::BranchDepLink);

    spawn_local(async move {
        match branch_api::fetch_all().await {
            Ok(list) => {
                if list.is_empty() {
                    notifications.error("No branches found. Please add branches first.");
                }
                branches.set(list);
            }
            Err(e) => notifications.api_error("Failed to load branches", &e),
        }
    });

    let load = move || {
        let branch = state.with_untracked(|s| s.branch);
        state.update(|s| s.load = LoadState::Loading);
        spawn_local(async move {
            let result = api::fetch_links(branch).await;
            state.update(|s| s.load.finish(&result));
            match result {
                Ok(links) => state.update(|s| s.links = links),
                Err(e) => notifications.api_error("Failed to load branch department links", &e),
            }
        });
    };
    load();

    let confirm_delete = move || {
        let Some(link) = state.try_update(|s| s.pending_delete.confirm()).flatten() else {
            return;
        };
        spawn_local(async move {
            match api::delete_link(link.id).await {
                Ok(()) => {
                    notifications.success("Link deleted successfully");
                    load();
                }
                Err(e) => notifications.api_error("Failed to delete link", &e),
            }
        });
    };

    let adding = Memo::new(move |_| state.with(|s| s.adding));
    let deleting = Memo::new(move |_| state.with(|s| s.pending_delete.is_open()));

    view! {
        <div class="page">
            <PageHeader title="Branch Department Links">
                <select
                    class="form__select"
                    on:change=move |ev| {
                        let branch = event_target_value(&ev).parse().ok();
                        state.update(|s| s.branch = branch);
                        load();
                    }
                >
                    <option value="">"All Branches"</option>
                    {move || branches.with(|list| list.iter().map(|b| view! {
                        <option value=b.id.to_string()>{format!("{} (ID: {})", b.name, b.id)}</option>
                    }).collect_view())}
                </select>
                <Show when=move || capabilities.get().can_create>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| state.update(|s| s.adding = true)
                    >
                        {icon("plus")}
                        " Add Links"
                    </Button>
                </Show>
            </PageHeader>

            <div class="page__content">
                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"Branch"</TableHeaderCell>
                                <TableHeaderCell>"Department"</TableHeaderCell>
                                <TableHeaderCell>"Sub-Department"</TableHeaderCell>
                                <TableHeaderCell>"Status"</TableHeaderCell>
                                <TableHeaderCell>"Actions"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <Show when=move || state.with(|s| s.load.is_loaded() && s.links.is_empty())>
                                <TableRow>
                                    <TableCell attr:colspan=COLUMNS.to_string()>"No links found"</TableCell>
                                </TableRow>
                            </Show>
                            <For
                                each=move || state.with(|s| s.links.clone())
                                key=|l| (l.id, l.is_active)
                                children=move |link| {
                                    let (badge_class, badge_label) = status_badge(&link);
                                    let for_delete = link.clone();
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{or_placeholder(&link.branch_name, "N/A")}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{or_placeholder(&link.department_name, "N/A")}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {link.sub_department_name.clone().unwrap_or_else(|| "-".to_string())}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <span class=badge_class>{badge_label}</span>
                                            </TableCell>
                                            <TableCell>
                                                <Show when=move || capabilities.get().can_delete>
                                                    <Button
                                                        appearance=ButtonAppearance::Subtle
                                                        attr:title="Delete"
                                                        on_click={
                                                            let link = for_delete.clone();
                                                            move |_| state.update(|s| s.pending_delete.request(link.clone()))
                                                        }
                                                    >
                                                        {icon("trash")}
                                                    </Button>
                                                </Show>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                </div>

                <Show when=move || adding.get()>
                    <AddLinksModal
                        branches=branches
                        on_close=Callback::new(move |_| state.update(|s| s.adding = false))
                        on_saved=Callback::new(move |_| {
                            state.update(|s| s.adding = false);
                            load();
                        })
                    />
                </Show>

                {move || deleting.get().then(|| view! {
                    <ConfirmDialog
                        message="Are you sure you want to delete this link?"
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
    fn test_status_and_placeholders() {
        let link: BranchDepartmentLink = serde_json::from_value(serde_json::json!({
            "id": 1, "branch": 2, "department": 3, "is_active": false
        }))
        .unwrap();
        assert_eq!(status_badge(&link).1, "Inactive");
        assert_eq!(or_placeholder(&link.branch_name, "N/A"), "N/A");
        assert!(link.sub_department.is_none());
    }
}
