use contracts::system::permissions::PermissionModule;
use contracts::system::users::{ChangePasswordDto, MIN_PASSWORD_LENGTH};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::api;
use crate::shared::components::user_select::UserSelect;
use crate::shared::notification::use_notifications;
use crate::system::auth::context::use_capabilities;

/// Set a new password for any user.
#[component]
pub fn PasswordChangePage() -> impl IntoView {
    let notifications = use_notifications();
    let capabilities = use_capabilities(PermissionModule::PasswordChange);
    let user = RwSignal::new(None::<i64>);
    let new_password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (saving, set_saving) = signal(false);

    let submit = move |_| {
        let dto = match ChangePasswordDto::build(
            user.get_untracked(),
            &new_password.get_untracked(),
            &confirm_password.get_untracked(),
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
            match api::change_password(&dto).await {
                Ok(()) => {
                    notifications.success("Password changed successfully");
                    new_password.set(String::new());
                    confirm_password.set(String::new());
                }
                Err(e) => set_error.set(Some(e.to_string())),
            }
            set_saving.set(false);
        });
    };

    let disabled = Signal::derive(move || saving.get());

    view! {
        <div class="page">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Password Change"</h1>
                </div>
            </div>
            <div class="page__content page__content--narrow">
                {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                <UserSelect selected=user id="password-change-user" />
                <div class="form__group">
                    <Label>"New password"</Label>
                    <Input
                        value=new_password
                        input_type=InputType::Password
                        placeholder=format!("At least {} characters", MIN_PASSWORD_LENGTH)
                        disabled=disabled
                    />
                </div>
                <div class="form__group">
                    <Label>"Confirm password"</Label>
                    <Input value=confirm_password input_type=InputType::Password disabled=disabled />
                </div>
                <Show when=move || capabilities.get().can_update>
                    <Button appearance=ButtonAppearance::Primary on_click=submit disabled=disabled>
                        {move || if saving.get() { "Saving..." } else { "Change Password" }}
                    </Button>
                </Show>
            </div>
        </div>
    }
}
