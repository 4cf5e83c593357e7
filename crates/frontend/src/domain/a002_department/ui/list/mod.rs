use contracts::domain::a002_department::Department;
use contracts::system::permissions::PermissionModule;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a002_department::api;
use crate::domain::a002_department::ui::details::{
    DepartmentCreateForm, DepartmentEditModal, DepartmentViewModal,
};
use crate::shared::components::confirm_dialog::ConfirmDialog;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::row_actions::RowActions;
use crate::shared::date_utils::format_datetime_or;
use crate::shared::icons::icon;
use crate::shared::notification::use_notifications;
use crate::shared::paged_list::{PagedList, RowModal};
use crate::system::auth::context::use_capabilities;

const COLUMNS: usize = 4;

#[component]
pub fn DepartmentList() -> impl IntoView {
    let state = RwSignal::new(PagedList::<Department>::default());
    let notifications = use_notifications();
    let capabilities = use_capabilities(PermissionModule::Department);

    let load = move |page: usize| {
        state.update(|s| s.begin(page));
        spawn_local(async move {
            let result = api::fetch_page(page).await;
            if let Some(e) = state.try_update(|s| s.finish(result)).flatten() {
                notifications.api_error("Failed to load departments", &e);
            }
        });
    };
    load(1);

    let reload = Callback::new(move |_| load(state.with_untracked(|s| s.page)));

    let confirm_delete = move || {
        let Some((department, page)) = state
            .try_update(|s| {
                let page = s.page_after_delete();
                s.pending_delete.confirm().map(|d| (d, page))
            })
            .flatten()
        else {
            return;
        };
        spawn_local(async move {
            match api::delete_department(department.id).await {
                Ok(()) => {
                    notifications.success("Department deleted successfully");
                    load(page);
                }
                Err(e) => notifications.api_error("Failed to delete department", &e),
            }
        });
    };

    let close_modal = Callback::new(move |_| state.update(|s| s.close_modal()));
    let loading = Signal::derive(move || state.with(|s| s.load.is_loading()));
    let modal = Memo::new(move |_| state.with(|s| s.modal.clone()));
    let deleting = Memo::new(move |_| state.with(|s| s.pending_delete.is_open()));

    view! {
        <div class="page">
            <PageHeader title="Departments">
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| reload.run(())
                    disabled=loading
                >
                    {icon("refresh")}
                    " Refresh"
                </Button>
            </PageHeader>

            <div class="page__content">
                <Show when=move || capabilities.get().can_create>
                    <DepartmentCreateForm on_saved=Callback::new(move |_| load(1)) />
                </Show>

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"Department ID"</TableHeaderCell>
                                <TableHeaderCell>"Name"</TableHeaderCell>
                                <TableHeaderCell>"Created"</TableHeaderCell>
                                <TableHeaderCell>"Actions"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <Show when=move || state.with(|s| s.is_empty_result())>
                                <TableRow>
                                    <TableCell attr:colspan=COLUMNS.to_string()>"No departments found"</TableCell>
                                </TableRow>
                            </Show>
                            <For
                                each=move || state.with(|s| s.items.clone())
                                key=|d| (d.id, d.department_id.clone(), d.name.clone())
                                children=move |department| {
                                    let for_action = department.clone();
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout>{department.department_id.clone()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{department.name.clone()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    {format_datetime_or(department.created_at.as_deref(), "-")}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <RowActions
                                                    capabilities=department.capabilities
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

                {move || modal.get().map(|modal| match modal {
                    RowModal::View(department) => view! {
                        <DepartmentViewModal department=department on_close=close_modal />
                    }.into_any(),
                    RowModal::Edit(department) => view! {
                        <DepartmentEditModal
                            department=department
                            on_close=close_modal
                            on_saved=Callback::new(move |_| {
                                state.update(|s| s.close_modal());
                                reload.run(());
                            })
                        />
                    }.into_any(),
                })}

                {move || deleting.get().then(|| view! {
                    <ConfirmDialog
                        message="Are you sure you want to delete this department?"
                        on_confirm=Callback::new(move |_| confirm_delete())
                        on_cancel=Callback::new(move |_| state.update(|s| s.pending_delete.cancel()))
                    />
                })}
            </div>
        </div>
    }
}
