use contracts::system::permissions::{PermissionAction, PermissionModule};
use leptos::prelude::*;

use super::context::use_auth;

/// Renders children only when the signed-in user holds `action` on `module`.
#[component]
pub fn RequirePermission(
    module: PermissionModule,
    #[prop(optional)] action: Option<PermissionAction>,
    children: ChildrenFn,
) -> impl IntoView {
    let (auth_state, _) = use_auth();
    let action = action.unwrap_or(PermissionAction::Access);

    view! {
        <Show
            when=move || auth_state.with(|s| s.permissions.allows(action, module))
            fallback=move || {
                view! {
                    <div class="page__content">
                        <div class="alert alert--error">
                            {format!("You do not have permission to open {}.", module.label())}
                        </div>
                    </div>
                }
            }
        >
            {children()}
        </Show>
    }
}
