use contracts::shared::api_error::ApiError;
use contracts::shared::capabilities::Capabilities;
use contracts::system::permissions::{PermissionModule, PermissionSection, PermissionSet};
use contracts::system::users::User;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{api, storage};

#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub access_token: Option<String>,
    pub user: Option<User>,
    pub permissions: PermissionSet,
    /// True while a stored session is being checked after a reload.
    pub restoring: bool,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.access_token.is_some()
    }

    pub fn capabilities(&self, module: PermissionModule) -> Capabilities {
        self.permissions.capabilities(module)
    }

    pub fn can_access(&self, section: PermissionSection) -> bool {
        self.permissions.can_access_section(section)
    }
}

/// Permissions for the stored session, refreshing the access token once when
/// it has expired.
async fn restore_permissions() -> Result<(String, PermissionSet), ApiError> {
    let access = storage::get_access_token().ok_or(ApiError::NotAuthenticated)?;
    match api::fetch_permissions().await {
        Ok(permissions) => Ok((access, permissions)),
        Err(e) if e.is_unauthorized() => {
            let refresh = storage::get_refresh_token().ok_or(ApiError::NotAuthenticated)?;
            let response = api::refresh_token(refresh).await?;
            storage::save_access_token(&response.access);
            if let Some(rotated) = &response.refresh {
                storage::save_refresh_token(rotated);
            }
            let permissions = api::fetch_permissions().await?;
            Ok((response.access, permissions))
        }
        Err(e) => Err(e),
    }
}

#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    let stored_token = storage::get_access_token();
    let restoring = stored_token.is_some();
    let (auth_state, set_auth_state) = signal(AuthState {
        access_token: stored_token,
        user: storage::get_user(),
        permissions: PermissionSet::default(),
        restoring,
    });

    if restoring {
        spawn_local(async move {
            match restore_permissions().await {
                Ok((access, permissions)) => {
                    log::debug!("session restored with {} permissions", permissions.len());
                    set_auth_state.update(|s| {
                        s.access_token = Some(access);
                        s.permissions = permissions;
                        s.restoring = false;
                    });
                }
                Err(e) => {
                    log::warn!("session restore failed: {}", e);
                    storage::clear_tokens();
                    set_auth_state.set(AuthState::default());
                }
            }
        });
    }

    provide_context(auth_state);
    provide_context(set_auth_state);

    children()
}

pub fn use_auth() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
    let auth_state =
        use_context::<ReadSignal<AuthState>>().expect("AuthProvider not found in component tree");
    let set_auth_state =
        use_context::<WriteSignal<AuthState>>().expect("AuthProvider not found in component tree");

    (auth_state, set_auth_state)
}

/// Reactive capabilities of the current user for one module.
pub fn use_capabilities(module: PermissionModule) -> Signal<Capabilities> {
    let (auth_state, _) = use_auth();
    Signal::derive(move || auth_state.with(|s| s.capabilities(module)))
}

/// Sign in, persist the tokens and load the user's permissions.
///
/// A failed permissions fetch still signs the user in, with no permissions.
pub async fn do_login(
    set_auth_state: WriteSignal<AuthState>,
    username: String,
    password: String,
) -> Result<(), ApiError> {
    let response = api::login(username, password).await?;

    storage::save_access_token(&response.access);
    storage::save_refresh_token(&response.refresh);
    storage::save_user(&response.user);

    let permissions = match api::fetch_permissions().await {
        Ok(permissions) => permissions,
        Err(e) => {
            log::warn!("Failed to load permissions: {}", e);
            PermissionSet::default()
        }
    };

    log::info!("signed in as {}", response.user.username);
    set_auth_state.set(AuthState {
        access_token: Some(response.access),
        user: Some(response.user),
        permissions,
        restoring: false,
    });
    Ok(())
}

/// Sign out locally even when the backend call fails.
pub async fn do_logout(set_auth_state: WriteSignal<AuthState>) {
    if let Some(refresh) = storage::get_refresh_token() {
        if let Err(e) = api::logout(refresh).await {
            log::warn!("logout request failed: {}", e);
        }
    }
    storage::clear_tokens();
    set_auth_state.set(AuthState::default());
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::system::permissions::{permission_name, PermissionAction};

    #[test]
    fn test_default_state_has_no_access() {
        let state = AuthState::default();
        assert!(!state.is_authenticated());
        assert!(!state.can_access(PermissionSection::Setup));
        assert_eq!(
            state.capabilities(PermissionModule::Department),
            Capabilities::default()
        );
    }

    #[test]
    fn test_capabilities_follow_permissions() {
        let state = AuthState {
            access_token: Some("a".into()),
            permissions: PermissionSet::new([permission_name(
                PermissionAction::Create,
                PermissionModule::Department,
            )]),
            ..Default::default()
        };
        let caps = state.capabilities(PermissionModule::Department);
        assert!(caps.can_create);
        assert!(!caps.can_delete);
    }
}
