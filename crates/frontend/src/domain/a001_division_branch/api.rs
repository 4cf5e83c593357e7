use contracts::domain::a001_division_branch::{DivisionBranch, DivisionBranchDto, LIST_ITEMS_KEY};
use contracts::shared::api_error::ApiError;
use contracts::shared::list_response::ListPage;

use crate::shared::api_utils::ListQuery;
use crate::shared::http;

const BASE: &str = "/api/division-branches/";

pub async fn fetch_page(page: usize) -> Result<ListPage<DivisionBranch>, ApiError> {
    http::get_list(BASE, &ListQuery::page(page), LIST_ITEMS_KEY).await
}

/// Branches for pickers.
pub async fn fetch_all() -> Result<Vec<DivisionBranch>, ApiError> {
    http::get_items(BASE, LIST_ITEMS_KEY).await
}

pub async fn save(id: Option<i64>, dto: &DivisionBranchDto) -> Result<(), ApiError> {
    match id {
        Some(id) => http::put_json(&format!("{}{}/", BASE, id), dto).await?,
        None => http::post_json(BASE, dto).await?,
    };
    Ok(())
}

pub async fn delete(id: i64) -> Result<(), ApiError> {
    http::delete(&format!("{}{}/", BASE, id)).await
}
