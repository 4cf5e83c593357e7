use std::collections::BTreeMap;

use contracts::domain::a005_data_entry::{DataEntry, DataEntryEdit, FileChange, LIST_ITEMS_KEY};
use contracts::shared::api_error::ApiError;
use contracts::shared::fields::{FieldDescriptor, FieldValues, SubDepartmentFields};
use contracts::shared::hierarchy::HierarchyBranch;
use contracts::shared::list_response::ListPage;
use serde::Serialize;
use serde_json::Value;

use crate::shared::http::{self, append_file, append_text, form_data, Download};

const BASE: &str = "/api/data-entry/";

/// Branches visible to the current user, with their departments and sub-departments.
pub async fn fetch_hierarchy() -> Result<Vec<HierarchyBranch>, ApiError> {
    http::get_json(&format!("{}get_hierarchy/", BASE)).await
}

#[derive(Serialize)]
struct FieldsQuery {
    sub_department_id: i64,
}

pub async fn fetch_fields(sub_department_id: i64) -> Result<Vec<FieldDescriptor>, ApiError> {
    let response: SubDepartmentFields = http::get_with_query(
        &format!("{}get_subdepartment_fields/", BASE),
        &FieldsQuery { sub_department_id },
    )
    .await?;
    Ok(response.fields)
}

/// Multipart create: ids, `field_values` as JSON and every queued document.
pub async fn create_entry(
    (branch, department, sub_department): (i64, i64, i64),
    values: &FieldValues,
    documents: &[web_sys::File],
) -> Result<Value, ApiError> {
    let form = form_data()?;
    append_text(&form, "branch", &branch.to_string())?;
    append_text(&form, "department", &department.to_string())?;
    append_text(&form, "sub_department", &sub_department.to_string())?;
    let values = serde_json::to_string(values).map_err(|e| ApiError::Parse(e.to_string()))?;
    append_text(&form, "field_values", &values)?;
    for file in documents {
        append_file(&form, "documents", file)?;
    }
    http::post_form(BASE, form).await
}

pub async fn search(query: &BTreeMap<String, String>) -> Result<ListPage<DataEntry>, ApiError> {
    http::get_list(&format!("{}search/", BASE), query, LIST_ITEMS_KEY).await
}

pub async fn fetch_entry(id: i64) -> Result<DataEntry, ApiError> {
    http::get_json(&format!("{}{}/", BASE, id)).await
}

/// Multipart update: `data` JSON plus either `remove_file=true` or a new `file`.
pub async fn update_entry(
    id: i64,
    edit: &DataEntryEdit,
    change: FileChange,
    file: Option<&web_sys::File>,
) -> Result<Value, ApiError> {
    let form = form_data()?;
    let data = serde_json::to_string(edit).map_err(|e| ApiError::Parse(e.to_string()))?;
    append_text(&form, "data", &data)?;
    match (change, file) {
        (FileChange::Remove, _) => append_text(&form, "remove_file", "true")?,
        (FileChange::Replace, Some(file)) => append_file(&form, "file", file)?,
        _ => {}
    }
    http::put_form(&format!("{}{}/", BASE, id), form).await
}

pub async fn delete_entry(id: i64) -> Result<(), ApiError> {
    http::delete(&format!("{}{}/", BASE, id)).await
}

pub async fn download_file(id: i64) -> Result<Download, ApiError> {
    http::download(&format!("{}{}/download_file/", BASE, id)).await
}
