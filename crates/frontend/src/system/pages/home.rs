//! Landing screen: a welcome line and what the signed-in user may do.

use contracts::system::permissions::{PermissionAction, PermissionSet};
use leptos::prelude::*;

use crate::layout::tabs::tab_labels::SCREEN_MODULES;
use crate::system::auth::context::use_auth;

/// `(screen, granted actions)` for every screen the user can open.
fn capability_rows(permissions: &PermissionSet) -> Vec<(&'static str, Vec<&'static str>)> {
    SCREEN_MODULES
        .iter()
        .filter(|m| permissions.allows(PermissionAction::Access, **m))
        .map(|m| {
            let actions = PermissionAction::CRUD
                .into_iter()
                .filter(|a| permissions.allows(*a, *m))
                .map(|a| a.label())
                .collect();
            (m.label(), actions)
        })
        .collect()
}

#[component]
pub fn HomePage() -> impl IntoView {
    let (auth_state, _) = use_auth();
    let rows = Memo::new(move |_| auth_state.with(|s| capability_rows(&s.permissions)));

    view! {
        <div class="page">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">
                        {move || auth_state.with(|s| match &s.user {
                            Some(user) => format!("Welcome, {}", user.display_name()),
                            None => "Welcome".to_string(),
                        })}
                    </h1>
                </div>
            </div>
            <div class="page__content">
                <Show
                    when=move || rows.with(|r| !r.is_empty())
                    fallback=|| view! {
                        <p class="text-muted">"No screens have been granted to your account yet."</p>
                    }
                >
                    <table class="table">
                        <thead>
                            <tr><th>"Screen"</th><th>"Allowed actions"</th></tr>
                        </thead>
                        <tbody>
                            {move || rows.get().into_iter().map(|(screen, actions)| {
                                let actions = if actions.is_empty() {
                                    "Open only".to_string()
                                } else {
                                    actions.join(", ")
                                };
                                view! { <tr><td>{screen}</td><td>{actions}</td></tr> }
                            }).collect_view()}
                        </tbody>
                    </table>
                </Show>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::system::permissions::{permission_name, PermissionModule};

    #[test]
    fn test_capability_rows() {
        let permissions = PermissionSet::new([
            permission_name(PermissionAction::Access, PermissionModule::Department),
            permission_name(PermissionAction::View, PermissionModule::Department),
            permission_name(PermissionAction::Delete, PermissionModule::Department),
            permission_name(PermissionAction::Create, PermissionModule::Users),
        ]);
        let rows = capability_rows(&permissions);
        assert_eq!(rows, vec![("Department", vec!["View", "Delete"])]);
    }
}
