use contracts::domain::a003_sub_department::{SubDepartment, SubDepartmentDto, LIST_ITEMS_KEY};
use contracts::shared::api_error::ApiError;
use contracts::shared::list_response::ListPage;

use crate::shared::api_utils::ListQuery;
use crate::shared::http;

const BASE: &str = "/api/sub-departments/";

pub async fn fetch_page(page: usize, search: &str) -> Result<ListPage<SubDepartment>, ApiError> {
    http::get_list(BASE, &ListQuery::with_search(page, search), LIST_ITEMS_KEY).await
}

pub async fn fetch_all() -> Result<Vec<SubDepartment>, ApiError> {
    http::get_items(BASE, LIST_ITEMS_KEY).await
}

pub async fn save(id: Option<i64>, dto: &SubDepartmentDto) -> Result<(), ApiError> {
    match id {
        Some(id) => http::put_json(&format!("{}{}/", BASE, id), dto).await?,
        None => http::post_json(BASE, dto).await?,
    };
    Ok(())
}

pub async fn delete(id: i64) -> Result<(), ApiError> {
    http::delete(&format!("{}{}/", BASE, id)).await
}
