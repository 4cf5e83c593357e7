use contracts::shared::api_error::ApiError;
use contracts::system::permissions::{PermissionSet, PermissionsResponse};

use crate::shared::http::{self, append_text, form_data};

/// Permissions currently granted to `user_id`.
pub async fn fetch_user_permissions(user_id: i64) -> Result<PermissionSet, ApiError> {
    let response: PermissionsResponse =
        http::get_json(&format!("/dashboard/user/get-permissions/{}/", user_id)).await?;
    Ok(PermissionSet::new(response.permissions))
}

/// Replace the user's permissions (multipart `user_id` + repeated `permissions[]`).
pub async fn save_user_rights(user_id: i64, granted: &PermissionSet) -> Result<(), ApiError> {
    let form = form_data()?;
    append_text(&form, "user_id", &user_id.to_string())?;
    for permission in granted.iter() {
        append_text(&form, "permissions[]", permission)?;
    }
    http::post_form("/dashboard/user/rights/", form).await?;
    Ok(())
}
