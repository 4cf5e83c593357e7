use contracts::domain::a001_division_branch::DivisionBranch;
use contracts::system::permissions::PermissionModule;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a001_division_branch::api;
use crate::domain::a001_division_branch::ui::details::{DivisionBranchFormModal, DivisionBranchViewModal};
use crate::shared::components::confirm_dialog::ConfirmDialog;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::row_actions::RowActions;
use crate::shared::icons::icon;
use crate::shared::notification::use_notifications;
use crate::shared::paged_list::{PagedList, RowModal};
use crate::system::auth::context::use_capabilities;

const COLUMNS: usize = 4;

#[component]
pub fn DivisionBranchList() -> impl IntoView {
    let state = RwSignal::new(PagedList::<DivisionBranch>::default());
    let adding = RwSignal::new(false);
    let notifications = use_notifications();
    let capabilities = use_capabilities(PermissionModule::DivisionBranch);

    let load = move |page: usize| {
        state.update(|s| s.begin(page));
        spawn_local(async move {
            let result = api::fetch_page(page).await;
            if let Some(e) = state.try_update(|s| s.finish(result)).flatten() {
                notifications.api_error("Failed to load division/branches", &e);
            }
        });
    };
    load(1);

    let confirm_delete = move || {
        let Some((record, page)) = state
            .try_update(|s| {
                let page = s.page_after_delete();
                s.pending_delete.confirm().map(|r| (r, page))
            })
            .flatten()
        else {
            return;
        };
        spawn_local(async move {
            match api::delete(record.id).await {
                Ok(()) => {
                    notifications.success("Division/Branch deleted successfully");
                    load(page);
                }
                Err(e) => notifications.api_error("Failed to delete division/branch", &e),
            }
        });
    };

    let close = Callback::new(move |_| {
        adding.set(false);
        state.update(|s| s.close_modal());
    });
    let saved = Callback::new(move |_| {
        let page = if adding.get_untracked() {
            1
        } else {
            state.with_untracked(|s| s.page)
        };
        close.run(());
        load(page);
    });
    let modal = Memo::new(move |_| state.with(|s| s.modal.clone()));
    let deleting = Memo::new(move |_| state.with(|s| s.pending_delete.is_open()));

    view! {
        <div class="page">
            <PageHeader title="Division / Branch">
                <Show when=move || capabilities.get().can_create>
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| adding.set(true)>
                        {icon("plus")}
                        " Add Division/Branch"
                    </Button>
                </Show>
            </PageHeader>

            <div class="page__content">
                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"Division ID"</TableHeaderCell>
                                <TableHeaderCell>"Name"</TableHeaderCell>
                                <TableHeaderCell>"Address"</TableHeaderCell>
                                <TableHeaderCell>"Actions"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <Show when=move || state.with(|s| s.is_empty_result())>
                                <TableRow>
                                    <TableCell attr:colspan=COLUMNS.to_string()>"No division/branches found"</TableCell>
                                </TableRow>
                            </Show>
                            <For
                                each=move || state.with(|s| s.items.clone())
                                key=|r| (r.id, r.division_id, r.name.clone(), r.address.clone())
                                children=move |record| {
                                    let for_action = record.clone();
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout>{record.division_id}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{record.name.clone()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{record.address.clone()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <RowActions
                                                    capabilities=record.capabilities
                                                    on_action=Callback::new(move |action| {
                                                        state.update(|s| s.dispatch(action, for_action.clone()))
                                                    })
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
                    total_pages=Signal::derive(move || state.with(|s| s.total_pages))
                    on_page_change=Callback::new(load)
                />

                <Show when=move || adding.get()>
                    <DivisionBranchFormModal record=None on_close=close on_saved=saved />
                </Show>

                {move || modal.get().map(|modal| match modal {
                    RowModal::View(record) => view! {
                        <DivisionBranchViewModal record=record on_close=close />
                    }.into_any(),
                    RowModal::Edit(record) => view! {
                        <DivisionBranchFormModal record=Some(record) on_close=close on_saved=saved />
                    }.into_any(),
                })}

                {move || deleting.get().then(|| view! {
                    <ConfirmDialog
                        message="Are you sure you want to delete this division/branch?"
                        on_confirm=Callback::new(move |_| confirm_delete())
                        on_cancel=Callback::new(move |_| state.update(|s| s.pending_delete.cancel()))
                    />
                })}
            </div>
        </div>
    }
}
