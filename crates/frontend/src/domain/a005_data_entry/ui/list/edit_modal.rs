//! Edit form for one record: the cascade is walked down to the stored
//! selection, the generated inputs start from the stored values, and the
//! attached document can be kept, removed or replaced.

use std::collections::BTreeMap;

use contracts::domain::a005_data_entry::{DataEntry, DataEntryEdit, FileChange, SEARCH_SELECTION_REQUIRED};
use contracts::shared::fields::{validate_inputs, FieldValues};
use contracts::shared::format::format_file_size;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a005_data_entry::api;
use crate::shared::components::dynamic_fields::{errors_by_field, DynamicFields};
use crate::shared::components::file_list::{new_file_queue, FileDropZone};
use crate::shared::components::hierarchy_select::{CascadeController, HierarchySelector};
use crate::shared::modal::Modal;
use crate::shared::notification::use_notifications;

const FILE_CHOICES: [(FileChange, &str); 3] = [
    (FileChange::Keep, "Keep current file"),
    (FileChange::Remove, "Remove file"),
    (FileChange::Replace, "Replace file"),
];

#[component]
pub fn DataEditModal(entry_id: i64, on_close: Callback<()>, on_saved: Callback<()>) -> impl IntoView {
    let notifications = use_notifications();
    let cascade = CascadeController::new();
    let entry = RwSignal::new(None::<DataEntry>);
    let values = RwSignal::new(FieldValues::new());
    let errors = RwSignal::new(BTreeMap::<String, String>::new());
    let file_change = RwSignal::new(FileChange::Keep);
    let queue = new_file_queue();
    let (saving, set_saving) = signal(false);

    spawn_local(async move {
        match api::fetch_entry(entry_id).await {
            Ok(record) => {
                values.set(record.text_values());
                let (branch, department, sub_department) =
                    (record.branch, record.department, record.sub_department);
                entry.set(Some(record));
                cascade.preset(branch, department, sub_department).await;
            }
            Err(e) => {
                notifications.api_error("Failed to load entry for editing", &e);
                on_close.run(());
            }
        }
    });

    let fields = Signal::derive(move || cascade.state.with(|c| c.fields.clone()));
    let fields_loading = Signal::derive(move || cascade.state.with(|c| c.fields_loading));

    let on_save = move |_| {
        let (selection, descriptors) =
            cascade.state.with_untracked(|c| (c.selection(), c.fields.clone()));
        let (Some(branch), Some(department), Some(sub_department)) = selection else {
            notifications.error(SEARCH_SELECTION_REQUIRED);
            return;
        };
        let validated = match values.with_untracked(|v| validate_inputs(&descriptors, v)) {
            Ok(validated) => validated,
            Err(field_errors) => {
                errors.set(errors_by_field(&field_errors));
                return;
            }
        };
        errors.set(BTreeMap::new());

        let change = file_change.get_untracked();
        let file = queue.with_untracked(|q| q.iter().next().map(|(_, f)| f.clone()));
        if change == FileChange::Replace && file.is_none() {
            notifications.error("Please choose a replacement file");
            return;
        }
        let edit = DataEntryEdit::new((branch, department, sub_department), &descriptors, &validated);

        set_saving.set(true);
        spawn_local(async move {
            let result = api::update_entry(entry_id, &edit, change, file.as_ref()).await;
            set_saving.set(false);
            match result {
                Ok(_) => {
                    notifications.success("Entry updated successfully");
                    on_saved.run(());
                }
                Err(e) => notifications.api_error("Failed to update entry", &e),
            }
        });
    };

    let disabled = Signal::derive(move || saving.get() || entry.with(|e| e.is_none()));

    view! {
        <Modal
            title=format!("Edit Entry #{}", entry_id)
            on_close=on_close
            class="modal--wide"
            footer=move || view! {
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_close.run(())>
                    "Cancel"
                </Button>
                <Button appearance=ButtonAppearance::Primary on_click=on_save disabled=disabled>
                    {move || if saving.get() { "Saving..." } else { "Update" }}
                </Button>
            }
        >
            <HierarchySelector controller=cascade id_prefix="edit-" required=true />
            <DynamicFields
                fields=fields
                values=values
                errors=errors
                id_prefix="edit-field-"
                loading=fields_loading
            />

            <div class="form__group">
                <label>"Document"</label>
                {move || entry.with(|e| e.as_ref().map(|record| match record.first_file() {
                    Some(file) => view! {
                        <div class="current-file">
                            "Current file: "
                            <strong>{file.file_name.clone()}</strong>
                            " ("{format_file_size(file.file_size)}")"
                        </div>
                    }.into_any(),
                    None => view! { <div class="text-muted">"No file attached"</div> }.into_any(),
                }))}
                <div class="form__radio-group">
                    {FILE_CHOICES.into_iter().map(|(choice, label)| {
                        let id = format!("file-change-{:?}", choice).to_lowercase();
                        let label_for = id.clone();
                        view! {
                            <label for=label_for class="form__radio">
                                <input
                                    type="radio"
                                    id=id
                                    name="file-change"
                                    prop:checked=move || file_change.get() == choice
                                    on:change=move |_| file_change.set(choice)
                                />
                                {label}
                            </label>
                        }
                    }).collect_view()}
                </div>
                <Show when=move || file_change.get() == FileChange::Replace>
                    <FileDropZone queue=queue input_id="edit-file" />
                </Show>
            </div>
        </Modal>
    }
}
