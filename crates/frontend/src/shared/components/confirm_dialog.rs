use leptos::prelude::*;
use thaw::*;

use crate::shared::modal::Modal;

/// Yes/no confirmation in front of a destructive action.
#[component]
pub fn ConfirmDialog(
    #[prop(into)] message: String,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
    #[prop(optional, into)] title: Option<String>,
    #[prop(optional, into)] confirm_label: Option<String>,
) -> impl IntoView {
    let title = title.unwrap_or_else(|| "Confirm Delete".to_string());
    let confirm_label = confirm_label.unwrap_or_else(|| "Delete".to_string());
    let confirm_label = StoredValue::new(confirm_label);

    view! {
        <Modal
            title=title
            on_close=on_cancel
            class="modal--narrow"
            footer=move || view! {
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| on_cancel.run(())
                >
                    "Cancel"
                </Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| on_confirm.run(())
                >
                    {confirm_label.get_value()}
                </Button>
            }
        >
            <p class="confirm-dialog__message">{message}</p>
        </Modal>
    }
}
