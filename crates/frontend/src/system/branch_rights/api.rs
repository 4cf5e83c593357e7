use contracts::shared::api_error::ApiError;
use contracts::system::branch_rights::{BranchRightsResponse, SaveBranchRightsRequest};

use crate::shared::http;

pub async fn fetch_branch_rights(user_id: i64) -> Result<BranchRightsResponse, ApiError> {
    http::get_json(&format!("/api/user/{}/branch-departments/", user_id)).await
}

pub async fn save_branch_rights(
    user_id: i64,
    request: &SaveBranchRightsRequest,
) -> Result<(), ApiError> {
    http::post_json(&format!("/api/user/{}/branch-departments/", user_id), request).await?;
    Ok(())
}
