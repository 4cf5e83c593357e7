use contracts::shared::api_error::ApiError;
use contracts::system::users::{User, UserFormDto};

use crate::shared::http;

pub async fn fetch_users() -> Result<Vec<User>, ApiError> {
    http::get_json("/api/users/").await
}

pub async fn create_user(dto: &UserFormDto) -> Result<(), ApiError> {
    http::post_json("/api/users/", dto).await?;
    Ok(())
}

pub async fn update_user(id: i64, dto: &UserFormDto) -> Result<(), ApiError> {
    http::put_json(&format!("/api/users/{}/", id), dto).await?;
    Ok(())
}

pub async fn delete_user(id: i64) -> Result<(), ApiError> {
    http::delete(&format!("/api/users/{}/", id)).await
}

