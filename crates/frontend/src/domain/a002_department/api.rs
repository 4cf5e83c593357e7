use contracts::domain::a002_department::{Department, DepartmentDto, LIST_ITEMS_KEY};
use contracts::shared::api_error::ApiError;
use contracts::shared::list_response::ListPage;

use crate::shared::api_utils::ListQuery;
use crate::shared::http;

const BASE: &str = "/api/departments/";

pub async fn fetch_page(page: usize) -> Result<ListPage<Department>, ApiError> {
    http::get_list(BASE, &ListQuery::page(page), LIST_ITEMS_KEY).await
}

/// First page of the list endpoint without paging parameters, as the link
/// and sub-department pickers use it.
pub async fn fetch_all() -> Result<Vec<Department>, ApiError> {
    http::get_items(BASE, LIST_ITEMS_KEY).await
}

pub async fn create_department(dto: &DepartmentDto) -> Result<(), ApiError> {
    http::post_json(BASE, dto).await?;
    Ok(())
}

pub async fn update_department(id: i64, dto: &DepartmentDto) -> Result<(), ApiError> {
    http::put_json(&format!("{}{}/", BASE, id), dto).await?;
    Ok(())
}

pub async fn delete_department(id: i64) -> Result<(), ApiError> {
    http::delete(&format!("{}{}/", BASE, id)).await
}
