use contracts::domain::a001_division_branch::{DivisionBranch, DivisionBranchDto};
use contracts::domain::common::digits_only;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a001_division_branch::api;
use crate::shared::date_utils::format_datetime_or;
use crate::shared::modal::Modal;
use crate::shared::notification::use_notifications;

/// Add or edit a division/branch; `record` is `None` when adding.
#[component]
pub fn DivisionBranchFormModal(
    record: Option<DivisionBranch>,
    on_close: Callback<()>,
    on_saved: Callback<()>,
) -> impl IntoView {
    let notifications = use_notifications();
    let editing_id = record.as_ref().map(|r| r.id);
    let division_id = RwSignal::new(
        record
            .as_ref()
            .map(|r| r.division_id.to_string())
            .unwrap_or_default(),
    );
    let name = RwSignal::new(record.as_ref().map(|r| r.name.clone()).unwrap_or_default());
    let address = RwSignal::new(record.map(|r| r.address).unwrap_or_default());
    let (error, set_error) = signal::<Option<String>>(None);
    let (saving, set_saving) = signal(false);

    let on_save = move |_| {
        let dto = match DivisionBranchDto::from_form(
            &division_id.get_untracked(),
            &name.get_untracked(),
            &address.get_untracked(),
        ) {
            Ok(dto) => dto,
            Err(message) => {
                set_error.set(Some(message));
                return;
            }
        };
        set_error.set(None);
        set_saving.set(true);
        spawn_local(async move {
            let result = api::save(editing_id, &dto).await;
            set_saving.set(false);
            match result {
                Ok(()) => {
                    notifications.success(if editing_id.is_some() {
                        "Division/Branch updated successfully"
                    } else {
                        "Division/Branch saved successfully"
                    });
                    on_saved.run(());
                }
                Err(e) => notifications.api_error("Failed to save division/branch", &e),
            }
        });
    };

    let disabled = Signal::derive(move || saving.get());
    let title = if editing_id.is_some() {
        "Edit Division/Branch"
    } else {
        "Add Division/Branch"
    };

    view! {
        <Modal
            title=title.to_string()
            on_close=on_close
            footer=move || view! {
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_close.run(()) disabled=disabled>
                    "Cancel"
                </Button>
                <Button appearance=ButtonAppearance::Primary on_click=on_save disabled=disabled>
                    {move || if saving.get() { "Saving..." } else { "Save" }}
                </Button>
            }
        >
            {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}
            <div class="form__group">
                <label for="division-branch-id">"Division ID *"</label>
                <input
                    id="division-branch-id"
                    class="form__input"
                    inputmode="numeric"
                    disabled=move || saving.get()
                    prop:value=move || division_id.get()
                    on:input=move |ev| division_id.set(digits_only(&event_target_value(&ev)))
                />
            </div>
            <div class="form__group">
                <Label>"Name *"</Label>
                <Input value=name disabled=disabled />
            </div>
            <div class="form__group">
                <Label>"Address *"</Label>
                <Input value=address disabled=disabled />
            </div>
        </Modal>
    }
}

#[component]
pub fn DivisionBranchViewModal(record: DivisionBranch, on_close: Callback<()>) -> impl IntoView {
    view! {
        <Modal title=String::from("Division/Branch Details") on_close=on_close>
            <dl class="details-list">
                <dt>"Division ID"</dt>
                <dd>{record.division_id}</dd>
                <dt>"Name"</dt>
                <dd>{record.name.clone()}</dd>
                <dt>"Address"</dt>
                <dd>{if record.address.is_empty() { "N/A".to_string() } else { record.address.clone() }}</dd>
                <dt>"Created"</dt>
                <dd>{format_datetime_or(record.created_at.as_deref(), "N/A")}</dd>
                <dt>"Updated"</dt>
                <dd>{format_datetime_or(record.updated_at.as_deref(), "N/A")}</dd>
            </dl>
        </Modal>
    }
}
