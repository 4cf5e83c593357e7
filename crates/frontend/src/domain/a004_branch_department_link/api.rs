use contracts::domain::a004_branch_department_link::{BranchDepartmentLink, NewLinkDto, LIST_ITEMS_KEY};
use contracts::shared::api_error::ApiError;
use futures::future::join_all;
use serde::Serialize;

use crate::shared::http;

const BASE: &str = "/api/branch-department-links/";

#[derive(Serialize)]
struct LinksQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    branch: Option<i64>,
}

/// Links of one branch, or all links when `branch` is `None`.
pub async fn fetch_links(branch: Option<i64>) -> Result<Vec<BranchDepartmentLink>, ApiError> {
    let page = http::get_list(BASE, &LinksQuery { branch }, LIST_ITEMS_KEY).await?;
    Ok(page.items)
}

/// One POST per link, sent together. Returns how many failed.
pub async fn create_links(links: &[NewLinkDto]) -> usize {
    let results = join_all(links.iter().map(|link| http::post_json(BASE, link))).await;
    results
        .into_iter()
        .filter_map(Result::err)
        .inspect(|e| log::warn!("link not created: {}", e))
        .count()
}

pub async fn delete_link(id: i64) -> Result<(), ApiError> {
    http::delete(&format!("{}{}/", BASE, id)).await
}
