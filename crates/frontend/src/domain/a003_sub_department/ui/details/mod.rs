use contracts::domain::a002_department::Department;
use contracts::domain::a003_sub_department::{FieldEditor, SubDepartment, SubDepartmentDto};
use contracts::shared::fields::{FieldDataType, FieldRequirement};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a003_sub_department::api;
use crate::shared::date_utils::format_datetime_or;
use crate::shared::icons::icon;
use crate::shared::modal::Modal;
use crate::shared::notification::use_notifications;

/// Editable rows of field descriptors. Rows left without a name are dropped on save.
#[component]
fn FieldEditorRows(editor: RwSignal<FieldEditor>, disabled: Signal<bool>) -> impl IntoView {
    view! {
        <div class="field-editor">
            <div class="field-editor__header">
                <span class="field-editor__title">"Fields"</span>
                <Button
                    appearance=ButtonAppearance::Secondary
                    disabled=disabled
                    on_click=move |_| editor.update(|e| {
                        e.add_row();
                    })
                >
                    {icon("plus")}
                    " Add Field"
                </Button>
            </div>
            <For
                each=move || editor.with(|e| e.rows().to_vec())
                key=|row| row.key
                children=move |row| {
                    let key = row.key;
                    view! {
                        <div class="field-editor__row">
                            <input
                                class="form__input"
                                placeholder="Field name"
                                disabled=move || disabled.get()
                                prop:value=row.name.clone()
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    editor.update(|e| e.update(key, |r| r.name = value));
                                }
                            />
                            <select
                                class="form__select"
                                disabled=move || disabled.get()
                                on:change=move |ev| {
                                    let data_type = FieldDataType::from(event_target_value(&ev));
                                    editor.update(|e| e.update(key, |r| r.data_type = data_type));
                                }
                            >
                                {FieldDataType::ALL.into_iter().map(|t| view! {
                                    <option value=t.as_str() selected=t == row.data_type>{t.label()}</option>
                                }).collect_view()}
                            </select>
                            <select
                                class="form__select"
                                disabled=move || disabled.get()
                                on:change=move |ev| {
                                    let requirement = FieldRequirement::from(event_target_value(&ev));
                                    editor.update(|e| e.update(key, |r| r.requirement = requirement));
                                }
                            >
                                {FieldRequirement::ALL.into_iter().map(|r| view! {
                                    <option value=r.as_str() selected=r == row.requirement>{r.label()}</option>
                                }).collect_view()}
                            </select>
                            <label class="field-editor__verify">
                                <input
                                    type="checkbox"
                                    disabled=move || disabled.get()
                                    prop:checked=row.verify
                                    on:change=move |ev| {
                                        let verify = event_target_checked(&ev);
                                        editor.update(|e| e.update(key, |r| r.verify = verify));
                                    }
                                />
                                " Verify"
                            </label>
                            <button
                                type="button"
                                class="button button--icon"
                                title="Remove field"
                                disabled=move || disabled.get()
                                on:click=move |_| editor.update(|e| e.remove_row(key))
                            >
                                {icon("trash")}
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}

/// Add or edit a sub-department with its field descriptors.
#[component]
pub fn SubDepartmentFormModal(
    record: Option<SubDepartment>,
    #[prop(into)] departments: Signal<Vec<Department>>,
    on_close: Callback<()>,
    on_saved: Callback<()>,
) -> impl IntoView {
    let notifications = use_notifications();
    let editing_id = record.as_ref().map(|r| r.id);
    let department = RwSignal::new(record.as_ref().map(|r| r.department));
    let code = RwSignal::new(
        record
            .as_ref()
            .map(|r| r.sub_department_id.clone())
            .unwrap_or_default(),
    );
    let name = RwSignal::new(record.as_ref().map(|r| r.name.clone()).unwrap_or_default());
    let editor = RwSignal::new(match &record {
        Some(r) => FieldEditor::from_fields(&r.fields),
        None => FieldEditor::new(),
    });
    let (error, set_error) = signal::<Option<String>>(None);
    let (saving, set_saving) = signal(false);

    let on_save = move |_| {
        let dto = editor.with_untracked(|e| {
            SubDepartmentDto::from_form(
                department.get_untracked(),
                &code.get_untracked(),
                &name.get_untracked(),
                e,
            )
        });
        let dto = match dto {
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
                        "Sub-department updated successfully"
                    } else {
                        "Sub-department created successfully"
                    });
                    on_saved.run(());
                }
                Err(e) => notifications.api_error("Failed to save sub-department", &e),
            }
        });
    };

    let disabled = Signal::derive(move || saving.get());
    let title = if editing_id.is_some() {
        "Edit Sub-Department"
    } else {
        "Add Sub-Department"
    };

    view! {
        <Modal
            title=title.to_string()
            on_close=on_close
            class="modal--wide"
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
                <label for="sub-department-department">"Department *"</label>
                <select
                    id="sub-department-department"
                    class="form__select"
                    disabled=move || saving.get()
                    on:change=move |ev| department.set(event_target_value(&ev).parse().ok())
                >
                    <option value="">"Select Department"</option>
                    {move || departments.with(|list| list.iter().map(|d| {
                        let selected = department.get_untracked() == Some(d.id);
                        view! { <option value=d.id.to_string() selected=selected>{d.label()}</option> }
                    }).collect_view())}
                </select>
            </div>
            <div class="form__row">
                <div class="form__group">
                    <Label>"Sub-Department ID *"</Label>
                    <Input value=code disabled=disabled />
                </div>
                <div class="form__group">
                    <Label>"Title *"</Label>
                    <Input value=name disabled=disabled />
                </div>
            </div>
            <FieldEditorRows editor=editor disabled=disabled />
        </Modal>
    }
}

#[component]
pub fn SubDepartmentViewModal(record: SubDepartment, on_close: Callback<()>) -> impl IntoView {
    let fields = record.fields.clone();
    view! {
        <Modal title=String::from("Sub-Department Details") on_close=on_close>
            <dl class="details-list">
                <dt>"Department"</dt>
                <dd>{record.department_name.clone().unwrap_or_else(|| "N/A".to_string())}</dd>
                <dt>"Sub-Department ID"</dt>
                <dd>{record.sub_department_id.clone()}</dd>
                <dt>"Title"</dt>
                <dd>{record.name.clone()}</dd>
                <dt>"Created"</dt>
                <dd>{format_datetime_or(record.created_at.as_deref(), "N/A")}</dd>
                <dt>"Updated"</dt>
                <dd>{format_datetime_or(record.updated_at.as_deref(), "N/A")}</dd>
            </dl>
            <h3 class="modal-section-title">"Fields"</h3>
            {if fields.is_empty() {
                view! { <p class="text-muted">"No fields configured"</p> }.into_any()
            } else {
                view! {
                    <ul class="field-summary">
                        {fields.into_iter().map(|field| view! {
                            <li class="field-summary__item">
                                <strong>{field.name.clone()}</strong>
                                <div>"Type: "{field.data_type.label()}</div>
                                <div>"Requirement: "{field.requirement.label()}</div>
                                <div>"Verify: "{if field.verify { "Yes" } else { "No" }}</div>
                            </li>
                        }).collect_view()}
                    </ul>
                }.into_any()
            }}
        </Modal>
    }
}
