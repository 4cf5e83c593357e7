use std::collections::BTreeMap;

use contracts::domain::a005_data_entry::SEARCH_SELECTION_REQUIRED;
use contracts::shared::fields::{validate_inputs, FieldValues};
use contracts::system::permissions::PermissionModule;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a005_data_entry::api;
use crate::shared::components::dynamic_fields::{errors_by_field, DynamicFields};
use crate::shared::components::file_list::{new_file_queue, FileDropZone};
use crate::shared::components::hierarchy_select::{CascadeController, HierarchySelector};
use crate::shared::components::page_header::PageHeader;
use crate::shared::notification::use_notifications;
use crate::system::auth::context::use_capabilities;

/// Create a record: pick the hierarchy, fill the generated fields, attach documents.
#[component]
pub fn DataEntryPage() -> impl IntoView {
    let notifications = use_notifications();
    let capabilities = use_capabilities(PermissionModule::DataEntry);
    let cascade = CascadeController::new();
    cascade.load_divisions();

    let values = RwSignal::new(FieldValues::new());
    let errors = RwSignal::new(BTreeMap::<String, String>::new());
    let queue = new_file_queue();
    let (submitting, set_submitting) = signal(false);

    let fields = Memo::new(move |_| cascade.state.with(|c| c.fields.clone()));
    let fields_loading = Signal::derive(move || cascade.state.with(|c| c.fields_loading));

    // A new field set starts from blank inputs.
    Effect::new(move |_| {
        fields.track();
        values.set(FieldValues::new());
        errors.set(BTreeMap::new());
    });

    let on_submit = move |_| {
        if !capabilities.get_untracked().can_create {
            notifications.error("You don't have permission to create entries");
            return;
        }
        let (selection, descriptors) =
            cascade.state.with_untracked(|c| (c.selection(), c.fields.clone()));
        let (Some(branch), Some(department), Some(sub_department)) = selection else {
            notifications.error(SEARCH_SELECTION_REQUIRED);
            return;
        };
        let payload = match values.with_untracked(|v| validate_inputs(&descriptors, v)) {
            Ok(payload) => payload,
            Err(field_errors) => {
                errors.set(errors_by_field(&field_errors));
                notifications.error("Please correct the highlighted fields");
                return;
            }
        };
        errors.set(BTreeMap::new());
        let documents: Vec<web_sys::File> =
            queue.with_untracked(|q| q.iter().map(|(_, file)| file.clone()).collect());

        set_submitting.set(true);
        spawn_local(async move {
            let result = api::create_entry((branch, department, sub_department), &payload, &documents).await;
            set_submitting.set(false);
            match result {
                Ok(_) => {
                    log::debug!("entry created with {} document(s)", documents.len());
                    notifications.success("Entry created successfully");
                    queue.update(|q| q.clear());
                    cascade.reset();
                }
                Err(e) => notifications.api_error("Failed to create entry", &e),
            }
        });
    };

    view! {
        <div class="page">
            <PageHeader title="Data Entry" />
            <div class="page__content">
                <div class="card">
                    <HierarchySelector controller=cascade id_prefix="entry-" required=true />
                    <DynamicFields
                        fields=fields
                        values=values
                        errors=errors
                        id_prefix="entry-field-"
                        loading=fields_loading
                    />
                    <div class="form__group">
                        <label>"Documents"</label>
                        <FileDropZone queue=queue input_id="entry-documents" multiple=true />
                    </div>
                    <div class="form__actions">
                        <Show when=move || capabilities.get().can_create>
                            <Button
                                appearance=ButtonAppearance::Primary
                                on_click=on_submit
                                disabled=Signal::derive(move || submitting.get())
                            >
                                {move || if submitting.get() { "Submitting..." } else { "Submit" }}
                            </Button>
                        </Show>
                    </div>
                </div>
            </div>
        </div>
    }
}
