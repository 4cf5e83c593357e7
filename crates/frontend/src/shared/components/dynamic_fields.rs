//! Inputs generated from a sub-department's field descriptors.

use std::collections::BTreeMap;

use contracts::shared::fields::{
    filter_inputs, render_inputs, FieldDescriptor, FieldError, FieldValues, InputSpec,
};
use leptos::prelude::*;

/// Field name -> message, for showing errors next to their inputs.
pub fn errors_by_field(errors: &[FieldError]) -> BTreeMap<String, String> {
    errors
        .iter()
        .map(|e| (e.field.clone(), e.message.clone()))
        .collect()
}

#[component]
fn FieldInput(
    spec: InputSpec,
    id_prefix: &'static str,
    values: RwSignal<FieldValues>,
    errors: Signal<BTreeMap<String, String>>,
) -> impl IntoView {
    let id = format!("{}{}", id_prefix, spec.input_name);
    let label_for = id.clone();
    let key = spec.field.clone();
    let value_key = key.clone();
    let error_key = key.clone();
    let error_key_class = key.clone();

    view! {
        <div class="form__group">
            <label for=label_for>{spec.label.clone()}</label>
            <input
                id=id
                name=spec.input_name.clone()
                type=spec.kind.html_type()
                class=move || {
                    if errors.with(|e| e.contains_key(&error_key_class)) {
                        "form__input form__input--invalid"
                    } else {
                        "form__input"
                    }
                }
                pattern=spec.pattern
                title=spec.title
                required=spec.required
                prop:value=move || values.with(|v| v.get(&value_key).cloned().unwrap_or_default())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    values.update(|v| {
                        v.insert(key.clone(), value);
                    });
                }
            />
            {move || {
                errors
                    .with(|e| e.get(&error_key).cloned())
                    .map(|message| view! { <div class="form__error">{message}</div> })
            }}
        </div>
    }
}

/// Entry inputs for the selected sub-department. Inputs are rebuilt only when
/// the descriptors change; typing writes into `values`.
#[component]
pub fn DynamicFields(
    #[prop(into)] fields: Signal<Vec<FieldDescriptor>>,
    values: RwSignal<FieldValues>,
    #[prop(into, optional)] errors: Signal<BTreeMap<String, String>>,
    #[prop(optional)] id_prefix: &'static str,
    #[prop(into, optional)] loading: Signal<bool>,
) -> impl IntoView {
    view! {
        <div class="dynamic-fields">
            {move || {
                if loading.get() {
                    return view! { <div class="dynamic-fields__loading">"Loading fields..."</div> }
                        .into_any();
                }
                let specs = fields.with(|f| render_inputs(f, &values.get_untracked()));
                if specs.is_empty() {
                    return ().into_any();
                }
                specs
                    .into_iter()
                    .map(|spec| view! { <FieldInput spec=spec id_prefix=id_prefix values=values errors=errors /> })
                    .collect_view()
                    .into_any()
            }}
        </div>
    }
}

/// Optional per-field search filters.
#[component]
pub fn FilterFields(
    #[prop(into)] fields: Signal<Vec<FieldDescriptor>>,
    values: RwSignal<FieldValues>,
    #[prop(optional)] id_prefix: &'static str,
) -> impl IntoView {
    let no_errors = Signal::derive(BTreeMap::new);
    view! {
        <div class="filter-fields">
            {move || {
                fields
                    .with(|f| filter_inputs(f))
                    .into_iter()
                    .map(|spec| view! { <FieldInput spec=spec id_prefix=id_prefix values=values errors=no_errors /> })
                    .collect_view()
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_errors_by_field() {
        let errors = vec![
            FieldError {
                field: "Amount".into(),
                message: "Please enter a valid Amount".into(),
            },
            FieldError {
                field: "Name".into(),
                message: "Name is required".into(),
            },
        ];
        let map = errors_by_field(&errors);
        assert_eq!(map.len(), 2);
        assert_eq!(map["Name"], "Name is required");
    }
}
