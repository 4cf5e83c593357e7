use contracts::domain::a002_department::Department;
use leptos::prelude::*;
use thaw::*;

use super::view_model::DepartmentFormViewModel;
use crate::shared::date_utils::format_datetime_or;
use crate::shared::modal::Modal;

#[component]
fn DepartmentFields(vm: DepartmentFormViewModel, id_prefix: &'static str) -> impl IntoView {
    let disabled = Signal::derive(move || vm.saving.get());
    let code_id = format!("{}department-id", id_prefix);
    let name_id = format!("{}department-name", id_prefix);
    view! {
        {move || vm.error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}
        <div class="form__row">
            <div class="form__group">
                <label for=code_id.clone()>"Department ID *"</label>
                <input
                    id=code_id
                    class="form__input"
                    inputmode="numeric"
                    placeholder="Digits only"
                    disabled=move || disabled.get()
                    prop:value=move || vm.code.get()
                    on:input=move |ev| vm.set_code(&event_target_value(&ev))
                />
            </div>
            <div class="form__group">
                <label for=name_id.clone()>"Department Name *"</label>
                <input
                    id=name_id
                    class="form__input"
                    disabled=move || disabled.get()
                    prop:value=move || vm.name.get()
                    on:input=move |ev| vm.name.set(event_target_value(&ev))
                />
            </div>
        </div>
    }
}

/// Card above the table for adding a department.
#[component]
pub fn DepartmentCreateForm(on_saved: Callback<()>) -> impl IntoView {
    let vm = DepartmentFormViewModel::new();
    let disabled = Signal::derive(move || vm.saving.get());

    view! {
        <div class="card">
            <h3 class="card__title">"Add Department"</h3>
            <DepartmentFields vm=vm id_prefix="new-" />
            <div class="form__actions">
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| vm.clear() disabled=disabled>
                    "Clear"
                </Button>
                <Button appearance=ButtonAppearance::Primary on_click=move |_| vm.save(on_saved) disabled=disabled>
                    {move || if vm.saving.get() { "Saving..." } else { "Save" }}
                </Button>
            </div>
        </div>
    }
}

#[component]
pub fn DepartmentEditModal(
    department: Department,
    on_close: Callback<()>,
    on_saved: Callback<()>,
) -> impl IntoView {
    let vm = DepartmentFormViewModel::for_department(&department);
    let disabled = Signal::derive(move || vm.saving.get());

    view! {
        <Modal
            title=String::from("Edit Department")
            on_close=on_close
            footer=move || view! {
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_close.run(()) disabled=disabled>
                    "Cancel"
                </Button>
                <Button appearance=ButtonAppearance::Primary on_click=move |_| vm.save(on_saved) disabled=disabled>
                    {move || if vm.saving.get() { "Saving..." } else { "Save Changes" }}
                </Button>
            }
        >
            <DepartmentFields vm=vm id_prefix="edit-" />
        </Modal>
    }
}

#[component]
pub fn DepartmentViewModal(department: Department, on_close: Callback<()>) -> impl IntoView {
    view! {
        <Modal title=String::from("Department Details") on_close=on_close>
            <dl class="details-list">
                <dt>"Department ID"</dt>
                <dd>{department.department_id.clone()}</dd>
                <dt>"Name"</dt>
                <dd>{department.name.clone()}</dd>
                <dt>"Created"</dt>
                <dd>{format_datetime_or(department.created_at.as_deref(), "N/A")}</dd>
                <dt>"Updated"</dt>
                <dd>{format_datetime_or(department.updated_at.as_deref(), "N/A")}</dd>
            </dl>
        </Modal>
    }
}
