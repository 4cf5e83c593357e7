use contracts::system::users::{UserFormDto, UserStatus};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::list::state::UserForm;
use crate::shared::modal::Modal;
use crate::shared::notification::use_notifications;
use crate::system::users::api;

/// Create or edit a user. The password is required when creating and left
/// unchanged on edit when blank.
#[component]
pub fn UserFormModal<F1, F2>(form: UserForm, on_close: F1, on_saved: F2) -> impl IntoView
where
    F1: Fn() + 'static + Copy + Send + Sync,
    F2: Fn() + 'static + Copy + Send + Sync,
{
    let notifications = use_notifications();
    let (editing_id, initial) = match &form {
        UserForm::Create => (None, UserFormDto::default()),
        UserForm::Edit(user) => (Some(user.id), UserFormDto::from_user(user)),
    };
    let creating = editing_id.is_none();

    let username = RwSignal::new(initial.username);
    let email = RwSignal::new(initial.email);
    let first_name = RwSignal::new(initial.first_name);
    let last_name = RwSignal::new(initial.last_name);
    let mobile_number = RwSignal::new(initial.mobile_number.unwrap_or_default());
    let active = RwSignal::new(initial.status == UserStatus::Active);
    let password = RwSignal::new(String::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (saving, set_saving) = signal(false);

    let title = if creating {
        "Add User".to_string()
    } else {
        format!("Edit User: {}", username.get_untracked())
    };

    let on_save = move |_| {
        let optional = |s: String| {
            let s = s.trim().to_string();
            (!s.is_empty()).then_some(s)
        };
        let dto = UserFormDto {
            username: username.get_untracked().trim().to_string(),
            email: email.get_untracked().trim().to_string(),
            first_name: first_name.get_untracked().trim().to_string(),
            last_name: last_name.get_untracked().trim().to_string(),
            mobile_number: optional(mobile_number.get_untracked()),
            status: if active.get_untracked() {
                UserStatus::Active
            } else {
                UserStatus::Inactive
            },
            password: optional(password.get_untracked()),
        };
        if let Err(message) = dto.validate(creating) {
            set_error.set(Some(message));
            return;
        }

        set_saving.set(true);
        set_error.set(None);
        spawn_local(async move {
            let result = match editing_id {
                Some(id) => api::update_user(id, &dto).await,
                None => api::create_user(&dto).await,
            };
            set_saving.set(false);
            match result {
                Ok(()) => {
                    notifications.success(if creating {
                        "User created successfully"
                    } else {
                        "User updated successfully"
                    });
                    on_saved();
                }
                Err(e) => set_error.set(Some(e.to_string())),
            }
        });
    };

    let disabled = Signal::derive(move || saving.get());

    view! {
        <Modal
            title=title
            on_close=Callback::new(move |_| on_close())
            footer=move || view! {
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_close() disabled=disabled>
                    "Cancel"
                </Button>
                <Button appearance=ButtonAppearance::Primary on_click=on_save disabled=disabled>
                    {move || if saving.get() { "Saving..." } else { "Save" }}
                </Button>
            }
        >
            {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

            <div class="form__group">
                <Label>"Username *"</Label>
                <Input value=username disabled=disabled />
            </div>
            <div class="form__group">
                <Label>"Email *"</Label>
                <Input value=email input_type=InputType::Email disabled=disabled />
            </div>
            <div class="form__row">
                <div class="form__group">
                    <Label>"First name"</Label>
                    <Input value=first_name disabled=disabled />
                </div>
                <div class="form__group">
                    <Label>"Last name"</Label>
                    <Input value=last_name disabled=disabled />
                </div>
            </div>
            <div class="form__group">
                <Label>"Mobile number"</Label>
                <Input value=mobile_number disabled=disabled />
            </div>
            <div class="form__group">
                <Label>{if creating { "Password *" } else { "Password (leave blank to keep)" }}</Label>
                <Input value=password input_type=InputType::Password disabled=disabled />
            </div>
            <div class="form__group">
                <Checkbox checked=active label="Active" />
            </div>
        </Modal>
    }
}
