use contracts::domain::a006_logo::{Logo, LogoUploadDto, SetActiveDto, LIST_ITEMS_KEY};
use contracts::shared::api_error::ApiError;

use crate::shared::http;

const BASE: &str = "/api/logos/";

pub async fn fetch_logos() -> Result<Vec<Logo>, ApiError> {
    http::get_items(BASE, LIST_ITEMS_KEY).await
}

pub async fn upload_logo(dto: &LogoUploadDto) -> Result<(), ApiError> {
    http::post_json(BASE, dto).await?;
    Ok(())
}

/// Mark one logo active; the backend deactivates the others.
pub async fn set_active(id: i64) -> Result<(), ApiError> {
    http::patch_json(&format!("{}{}/", BASE, id), &SetActiveDto { is_active: true }).await?;
    Ok(())
}

pub async fn delete_logo(id: i64) -> Result<(), ApiError> {
    http::delete(&format!("{}{}/", BASE, id)).await
}
