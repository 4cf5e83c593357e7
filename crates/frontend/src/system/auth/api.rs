use contracts::shared::api_error::ApiError;
use contracts::system::auth::{LoginRequest, LoginResponse, RefreshRequest, RefreshResponse};
use contracts::system::permissions::{PagePermissions, PermissionSet};

use crate::shared::http;

/// `POST /api/auth/login/`
pub async fn login(username: String, password: String) -> Result<LoginResponse, ApiError> {
    if username.trim().is_empty() || password.is_empty() {
        return Err(ApiError::Validation(
            "Please enter username and password".to_string(),
        ));
    }
    let request = LoginRequest { username, password };
    let value = http::post_json("/api/auth/login/", &request).await?;
    serde_json::from_value(value).map_err(|e| ApiError::Parse(e.to_string()))
}

/// `POST /api/auth/token/refresh/`
pub async fn refresh_token(refresh: String) -> Result<RefreshResponse, ApiError> {
    let value = http::post_json("/api/auth/token/refresh/", &RefreshRequest { refresh }).await?;
    serde_json::from_value(value).map_err(|e| ApiError::Parse(e.to_string()))
}

/// `POST /api/auth/logout/` (blacklists the refresh token)
pub async fn logout(refresh: String) -> Result<(), ApiError> {
    http::post_json("/api/auth/logout/", &RefreshRequest { refresh }).await?;
    Ok(())
}

/// Permissions of the signed-in user, flattened to `can_*` strings.
pub async fn fetch_permissions() -> Result<PermissionSet, ApiError> {
    let grouped: PagePermissions = http::get_json("/api/auth/permissions/").await?;
    Ok(PermissionSet::from_page_permissions(&grouped))
}
