mod edit_modal;
pub mod state;

use std::collections::BTreeMap;

use contracts::domain::a005_data_entry::DataEntry;
use contracts::shared::capabilities::RowAction;
use contracts::shared::fields::FieldValues;
use contracts::shared::format::format_file_size;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a005_data_entry::api;
use crate::shared::components::confirm_dialog::ConfirmDialog;
use crate::shared::components::dynamic_fields::FilterFields;
use crate::shared::components::filter_panel::FilterPanel;
use crate::shared::components::hierarchy_select::{CascadeController, HierarchySelector};
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::date_utils::format_datetime_or;
use crate::shared::files::save_download;
use crate::shared::icons::icon;
use crate::shared::modal::Modal;
use crate::shared::notification::use_notifications;
use crate::shared::paged_list::RowModal;
use edit_modal::DataEditModal;
use state::{field_rows, DataEditState, SearchCriteria};

const COLUMNS: usize = 8;

#[component]
fn FieldsModal(entry: DataEntry, on_close: Callback<()>) -> impl IntoView {
    let rows = field_rows(&entry);
    view! {
        <Modal title=String::from("Field Values") on_close=on_close>
            {if rows.is_empty() {
                view! { <p class="text-muted">"No field values"</p> }.into_any()
            } else {
                view! {
                    <dl class="details-list">
                        {rows.into_iter().map(|(name, value)| view! {
                            <dt>{name}</dt>
                            <dd>{value}</dd>
                        }).collect_view()}
                    </dl>
                }.into_any()
            }}
        </Modal>
    }
}

#[component]
fn FileDetailsModal(entry: DataEntry, on_close: Callback<()>) -> impl IntoView {
    let file = entry.first_file().cloned();
    view! {
        <Modal title=String::from("File Details") on_close=on_close>
            <h3 class="modal-section-title">"Record"</h3>
            <dl class="details-list">
                <dt>"Record ID"</dt>
                <dd>{entry.id}</dd>
                <dt>"Branch"</dt>
                <dd>{entry.branch_name.clone()}</dd>
                <dt>"Department"</dt>
                <dd>{entry.department_name.clone()}</dd>
                <dt>"Sub Department"</dt>
                <dd>{entry.sub_department_name.clone()}</dd>
                <dt>"Created At"</dt>
                <dd>{format_datetime_or(entry.created_at.as_deref(), "N/A")}</dd>
                <dt>"Created By"</dt>
                <dd>{entry.created_by.clone().unwrap_or_else(|| "N/A".to_string())}</dd>
            </dl>
            <h3 class="modal-section-title">"File"</h3>
            {match file {
                Some(file) => view! {
                    <dl class="details-list">
                        <dt>"File Name"</dt>
                        <dd>{file.file_name.clone()}</dd>
                        <dt>"File Type"</dt>
                        <dd>{file.file_type.clone()}</dd>
                        <dt>"File Size"</dt>
                        <dd>{format_file_size(file.file_size)}</dd>
                        <dt>"Uploaded At"</dt>
                        <dd>{format_datetime_or(file.uploaded_at.as_deref(), "N/A")}</dd>
                    </dl>
                }.into_any(),
                None => view! { <p class="text-muted">"No file information available"</p> }.into_any(),
            }}
        </Modal>
    }
}

/// Search existing records by hierarchy and field values, then view, edit,
/// download or delete them.
#[component]
pub fn DataEditList() -> impl IntoView {
    let notifications = use_notifications();
    let state = RwSignal::new(DataEditState::default());
    let cascade = CascadeController::new();
    cascade.load_divisions();
    let filters = RwSignal::new(FieldValues::new());
    let is_expanded = RwSignal::new(true);

    let fields = Memo::new(move |_| cascade.state.with(|c| c.fields.clone()));
    Effect::new(move |_| {
        fields.track();
        filters.set(FieldValues::new());
    });

    let run = move |query: BTreeMap<String, String>, page: usize| {
        state.update(|s| s.list.begin(page));
        spawn_local(async move {
            let result = api::search(&query).await;
            if let Some(e) = state.try_update(|s| s.list.finish(result)).flatten() {
                notifications.api_error("Failed to search entries", &e);
            }
        });
    };

    let on_search = move |_| {
        let criteria = SearchCriteria {
            selection: cascade.state.with_untracked(|c| c.selection()),
            filters: filters.get_untracked(),
        };
        match state.try_update(|s| s.start_search(criteria)) {
            Some(Ok(query)) => run(query, 1),
            Some(Err(message)) => notifications.error(message),
            None => {}
        }
    };

    let on_clear = move |_| {
        cascade.reset();
        filters.set(FieldValues::new());
        state.update(|s| s.clear());
    };

    let load_page = move |page: usize| {
        if let Some(query) = state.with_untracked(|s| s.page_query(page)) {
            run(query, page);
        }
    };

    let download = move |entry_id: i64| {
        spawn_local(async move {
            match api::download_file(entry_id).await {
                Ok(download) => {
                    if let Err(e) = save_download(&download) {
                        log::error!("download of entry {} failed: {}", entry_id, e);
                        notifications.error("Failed to download document");
                    }
                }
                Err(e) => notifications.api_error("Failed to download document", &e),
            }
        });
    };

    let confirm_delete = move || {
        let Some((entry, page)) = state
            .try_update(|s| {
                let page = s.list.page_after_delete();
                s.list.pending_delete.confirm().map(|r| (r, page))
            })
            .flatten()
        else {
            return;
        };
        spawn_local(async move {
            match api::delete_entry(entry.id).await {
                Ok(()) => {
                    notifications.success("Entry deleted successfully");
                    load_page(page);
                }
                Err(e) => notifications.api_error("Failed to delete entry", &e),
            }
        });
    };

    let close = Callback::new(move |_| {
        state.update(|s| {
            s.list.close_modal();
            s.file_details = None;
        })
    });
    let saved = Callback::new(move |_| {
        close.run(());
        load_page(state.with_untracked(|s| s.list.page));
    });
    let modal = Memo::new(move |_| state.with(|s| s.list.modal.clone()));
    let file_details = Memo::new(move |_| state.with(|s| s.file_details.clone()));
    let deleting = Memo::new(move |_| state.with(|s| s.list.pending_delete.is_open()));
    let active_filters = Signal::derive(move || {
        state.with(|s| s.criteria.as_ref().map(SearchCriteria::active_count).unwrap_or(0))
    });

    view! {
        <div class="page">
            <PageHeader title="Data Edit">
                {move || state.with(|s| s.results_label()).map(|label| view! {
                    <span class="page__meta">{label}</span>
                })}
            </PageHeader>

            <div class="page__content">
                <FilterPanel is_expanded=is_expanded active_filters_count=active_filters>
                    <HierarchySelector controller=cascade id_prefix="filter-" required=true />
                    <FilterFields fields=fields values=filters id_prefix="filter-field-" />
                    <div class="form__actions">
                        <Button appearance=ButtonAppearance::Secondary on_click=on_clear>
                            "Clear"
                        </Button>
                        <Button appearance=ButtonAppearance::Primary on_click=on_search>
                            {icon("search")}
                            " Search"
                        </Button>
                    </div>
                </FilterPanel>

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"ID"</TableHeaderCell>
                                <TableHeaderCell>"Branch"</TableHeaderCell>
                                <TableHeaderCell>"Department"</TableHeaderCell>
                                <TableHeaderCell>"Sub Department"</TableHeaderCell>
                                <TableHeaderCell>"Created"</TableHeaderCell>
                                <TableHeaderCell>"File"</TableHeaderCell>
                                <TableHeaderCell>"Fields"</TableHeaderCell>
                                <TableHeaderCell>"Actions"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <Show when=move || state.with(|s| s.list.is_empty_result())>
                                <TableRow>
                                    <TableCell attr:colspan=COLUMNS.to_string()>"No entries found"</TableCell>
                                </TableRow>
                            </Show>
                            <For
                                each=move || state.with(|s| s.list.items.clone())
                                key=|e| (e.id, e.field_values.len(), e.files.len())
                                children=move |entry| {
                                    let entry_id = entry.id;
                                    let caps = entry.capabilities;
                                    let has_file = entry.first_file().is_some();
                                    let file_name = entry.first_file().map(|f| f.file_name.clone());
                                    let for_view = entry.clone();
                                    let for_edit = entry.clone();
                                    let for_delete = entry.clone();
                                    let for_details = entry.clone();
                                    let branch_name = entry.branch_name.clone();
                                    let department_name = entry.department_name.clone();
                                    let sub_department_name = entry.sub_department_name.clone();
                                    let created = entry.created_date();
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout>{entry_id}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{branch_name}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{department_name}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{sub_department_name}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{created}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {match file_name {
                                                        Some(name) => view! { <span>{name}</span> }.into_any(),
                                                        None => view! { <span class="text-muted">"No file"</span> }.into_any(),
                                                    }}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                {if caps.can_view {
                                                    view! {
                                                        <Button
                                                            appearance=ButtonAppearance::Secondary
                                                            on_click=move |_| state.update(|s| s.list.dispatch(RowAction::View, for_view.clone()))
                                                        >
                                                            {icon("list")}
                                                            " View Fields"
                                                        </Button>
                                                    }.into_any()
                                                } else {
                                                    view! { <span class="text-muted">"No access"</span> }.into_any()
                                                }}
                                            </TableCell>
                                            <TableCell>
                                                <div class="row-actions">
                                                    {caps.can_update.then(|| view! {
                                                        <Button
                                                            appearance=ButtonAppearance::Subtle
                                                            attr:title="Edit"
                                                            on_click=move |_| state.update(|s| s.list.dispatch(RowAction::Edit, for_edit.clone()))
                                                        >
                                                            {icon("edit")}
                                                        </Button>
                                                    })}
                                                    {caps.can_delete.then(|| view! {
                                                        <Button
                                                            appearance=ButtonAppearance::Subtle
                                                            attr:title="Delete"
                                                            on_click=move |_| state.update(|s| s.list.dispatch(RowAction::Delete, for_delete.clone()))
                                                        >
                                                            {icon("trash")}
                                                        </Button>
                                                    })}
                                                    {has_file.then(|| view! {
                                                        <Button
                                                            appearance=ButtonAppearance::Subtle
                                                            attr:title="Download"
                                                            on_click=move |_| download(entry_id)
                                                        >
                                                            {icon("download")}
                                                        </Button>
                                                        <Button
                                                            appearance=ButtonAppearance::Subtle
                                                            attr:title="View Details"
                                                            on_click=move |_| state.update(|s| s.file_details = Some(for_details.clone()))
                                                        >
                                                            {icon("info")}
                                                        </Button>
                                                    })}
                                                </div>
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
                    on_page_change=Callback::new(load_page)
                />

                {move || modal.get().map(|modal| match modal {
                    RowModal::View(entry) => view! { <FieldsModal entry=entry on_close=close /> }.into_any(),
                    RowModal::Edit(entry) => view! {
                        <DataEditModal entry_id=entry.id on_close=close on_saved=saved />
                    }.into_any(),
                })}

                {move || file_details.get().map(|entry| view! {
                    <FileDetailsModal entry=entry on_close=close />
                })}

                {move || deleting.get().then(|| view! {
                    <ConfirmDialog
                        message="Are you sure you want to delete this entry?"
                        on_confirm=Callback::new(move |_| confirm_delete())
                        on_cancel=Callback::new(move |_| state.update(|s| s.list.pending_delete.cancel()))
                    />
                })}
            </div>
        </div>
    }
}
