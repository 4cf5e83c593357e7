pub mod state;

use contracts::domain::a002_department::Department;
use contracts::system::permissions::PermissionModule;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a002_department::api as department_api;
use crate::domain::a003_sub_department::api;
use crate::domain::a003_sub_department::ui::details::{SubDepartmentFormModal, SubDepartmentViewModal};
use crate::shared::components::confirm_dialog::ConfirmDialog;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::row_actions::RowActions;
use crate::shared::components::search_input::SearchInput;
use crate::shared::icons::icon;
use crate::shared::notification::use_notifications;
use crate::shared::paged_list::RowModal;
use crate::system::auth::context::use_capabilities;
use state::{create_state, fields_summary};

const COLUMNS: usize = 5;

#[component]
pub fn SubDepartmentList() -> impl IntoView {
    let state = create_state();
    let departments = RwSignal::new(Vec::<Department>::new());
    let notifications = use_notifications();
    let capabilities = use_capabilities(PermissionModule::SubDepartment);

    spawn_local(async move {
        match department_api::fetch_all().await {
            Ok(list) => {
                if list.is_empty() {
                    notifications.info("No departments available");
                }
                departments.set(list);
            }
            Err(e) => notifications.api_error("Failed to load departments", &e),
        }
    });

    let load = move |page: usize| {
        let search = state.with_untracked(|s| s.search.clone());
        state.update(|s| s.list.begin(page));
        spawn_local(async move {
            let result = api::fetch_page(page, &search).await;
            if let Some(e) = state.try_update(|s| s.list.finish(result)).flatten() {
                notifications.api_error("Failed to load sub-departments", &e);
            }
        });
    };
    load(1);

    let on_search = Callback::new(move |text: String| {
        if state.try_update(|s| s.set_search(text)).unwrap_or(false) {
            load(1);
        }
    });

    let confirm_delete = move || {
        let Some((record, page)) = state
            .try_update(|s| {
                let page = s.list.page_after_delete();
                s.list.pending_delete.confirm().map(|r| (r, page))
            })
            .flatten()
        else {
            return;
        };
        spawn_local(async move {
            match api::delete(record.id).await {
                Ok(()) => {
                    notifications.success("Sub-department deleted successfully");
                    load(page);
                }
                Err(e) => notifications.api_error("Failed to delete sub-department", &e),
            }
        });
    };

    let close = Callback::new(move |_| {
        state.update(|s| {
            s.adding = false;
            s.list.close_modal();
        })
    });
    let saved = Callback::new(move |_| {
        let page = state.with_untracked(|s| if s.adding { 1 } else { s.list.page });
        close.run(());
        load(page);
    });
    let adding = Memo::new(move |_| state.with(|s| s.adding));
    let modal = Memo::new(move |_| state.with(|s| s.list.modal.clone()));
    let deleting = Memo::new(move |_| state.with(|s| s.list.pending_delete.is_open()));

    view! {
        <div class="page">
            <PageHeader title="Sub-Departments">
                <SearchInput on_change=on_search placeholder="Search sub-departments..." />
                <Show when=move || capabilities.get().can_create>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| state.update(|s| s.adding = true)
                    >
                        {icon("plus")}
                        " Add Sub-Department"
                    </Button>
                </Show>
            </PageHeader>

            <div class="page__content">
                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"Department"</TableHeaderCell>
                                <TableHeaderCell>"Sub-Department ID"</TableHeaderCell>
                                <TableHeaderCell>"Title"</TableHeaderCell>
                                <TableHeaderCell>"Fields"</TableHeaderCell>
                                <TableHeaderCell>"Actions"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <Show when=move || state.with(|s| s.list.is_empty_result())>
                                <TableRow>
                                    <TableCell attr:colspan=COLUMNS.to_string()>"No sub-departments found"</TableCell>
                                </TableRow>
                            </Show>
                            <For
                                each=move || state.with(|s| s.list.items.clone())
                                key=|r| (r.id, r.name.clone(), r.sub_department_id.clone(), r.fields.len())
                                children=move |record| {
                                    let for_action = record.clone();
                                    let capabilities = record.capabilities;
                                    let department_name = record.department_name.clone().unwrap_or_default();
                                    let code = record.sub_department_id.clone();
                                    let name = record.name.clone();
                                    let summary = fields_summary(&record);
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {department_name}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{code}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{name}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{summary}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <RowActions
                                                    capabilities=capabilities
                                                    on_action=Callback::new(move |action| {
                                                        state.update(|s| s.list.dispatch(action, for_action.clone()))
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
                    current_page=Signal::derive(move || state.with(|s| s.list.page))
                    total_pages=Signal::derive(move || state.with(|s| s.list.total_pages))
                    on_page_change=Callback::new(load)
                />

                <Show when=move || adding.get()>
                    <SubDepartmentFormModal
                        record=None
                        departments=departments
                        on_close=close
                        on_saved=saved
                    />
                </Show>

                {move || modal.get().map(|modal| match modal {
                    RowModal::View(record) => view! {
                        <SubDepartmentViewModal record=record on_close=close />
                    }.into_any(),
                    RowModal::Edit(record) => view! {
                        <SubDepartmentFormModal
                            record=Some(record)
                            departments=departments
                            on_close=close
                            on_saved=saved
                        />
                    }.into_any(),
                })}

                {move || deleting.get().then(|| view! {
                    <ConfirmDialog
                        message="Are you sure you want to delete this sub-department?"
                        on_confirm=Callback::new(move |_| confirm_delete())
                        on_cancel=Callback::new(move |_| state.update(|s| s.list.pending_delete.cancel()))
                    />
                })}
            </div>
        </div>
    }
}
