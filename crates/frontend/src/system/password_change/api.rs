use contracts::shared::api_error::ApiError;
use contracts::system::users::ChangePasswordDto;

use crate::shared::http;

/// `POST /dashboard/user/change-password/`
pub async fn change_password(dto: &ChangePasswordDto) -> Result<(), ApiError> {
    http::post_json("/dashboard/user/change-password/", dto).await?;
    Ok(())
}
