use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::shared::capabilities::Capabilities;
use crate::shared::fields::{FieldDescriptor, FieldValues};
use crate::shared::pagination::DEFAULT_PAGE_SIZE;

/// Search answers `{results, count, total_pages, current_page}`.
pub const LIST_ITEMS_KEY: &str = "results";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataEntryFile {
    pub id: i64,
    pub file_name: String,
    #[serde(default)]
    pub file_type: String,
    #[serde(default)]
    pub file_size: u64,
    #[serde(default)]
    pub uploaded_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataEntry {
    pub id: i64,
    pub branch: i64,
    pub department: i64,
    pub sub_department: i64,
    #[serde(default)]
    pub branch_name: String,
    #[serde(default)]
    pub department_name: String,
    #[serde(default)]
    pub sub_department_name: String,
    #[serde(default)]
    pub field_values: BTreeMap<String, Value>,
    #[serde(default)]
    pub files: Vec<DataEntryFile>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub created_by: Option<String>,
    #[serde(flatten)]
    pub capabilities: Capabilities,
}

/// Display form of a stored JSON value. Strings are shown without quotes.
pub fn value_as_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

impl DataEntry {
    /// Stored values as text, for pre-populating the edit form.
    pub fn text_values(&self) -> FieldValues {
        self.field_values
            .iter()
            .map(|(name, value)| (name.clone(), value_as_text(value)))
            .collect()
    }

    pub fn first_file(&self) -> Option<&DataEntryFile> {
        self.files.first()
    }

    /// Date part of `created_at`, as shown in the results table.
    pub fn created_date(&self) -> String {
        self.created_at
            .as_deref()
            .map(|ts| ts.split_once('T').map_or(ts, |(date, _)| date).to_string())
            .unwrap_or_default()
    }
}

// ============================================================================
// Search
// ============================================================================

pub const SEARCH_SELECTION_REQUIRED: &str =
    "Please select Division/Branch, Department, and Sub Department";

/// Query of `GET /api/data-entry/search/`.
///
/// Keys mirror the filter form control names, so field filters travel as `field_{name}`.
pub fn search_query(
    selection: (Option<i64>, Option<i64>, Option<i64>),
    filters: &FieldValues,
    page: usize,
) -> Result<BTreeMap<String, String>, String> {
    let (Some(division), Some(department), Some(sub_department)) = selection else {
        return Err(SEARCH_SELECTION_REQUIRED.into());
    };
    let mut query = BTreeMap::new();
    query.insert("division-filter".to_string(), division.to_string());
    query.insert("department-filter".to_string(), department.to_string());
    query.insert("subdepartment-filter".to_string(), sub_department.to_string());
    for (name, value) in filters {
        let value = value.trim();
        if !value.is_empty() {
            query.insert(format!("field_{}", name), value.to_string());
        }
    }
    query.insert("page".to_string(), page.max(1).to_string());
    query.insert("per_page".to_string(), DEFAULT_PAGE_SIZE.to_string());
    Ok(query)
}

// ============================================================================
// Create / edit payloads
// ============================================================================

/// The `data` part of the multipart `PUT /api/data-entry/{id}/`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataEntryEdit {
    pub branch: i64,
    pub department: i64,
    pub sub_department: i64,
    pub field_values: FieldValues,
}

impl DataEntryEdit {
    /// Every descriptor is sent, blank ones as `""`, so optional values can be cleared.
    pub fn new(
        (branch, department, sub_department): (i64, i64, i64),
        descriptors: &[FieldDescriptor],
        validated: &FieldValues,
    ) -> Self {
        let field_values = descriptors
            .iter()
            .map(|d| {
                let value = validated.get(&d.name).cloned().unwrap_or_default();
                (d.name.clone(), value)
            })
            .collect();
        Self {
            branch,
            department,
            sub_department,
            field_values,
        }
    }
}

/// What to do with the stored file on edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FileChange {
    #[default]
    Keep,
    Remove,
    Replace,
}

// ============================================================================
// Upload list
// ============================================================================

/// Files queued for upload, keyed by file name.
///
/// Adding a name that is already queued is a no-op.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadQueue<F> {
    files: BTreeMap<String, F>,
}

impl<F> Default for UploadQueue<F> {
    fn default() -> Self {
        Self {
            files: BTreeMap::new(),
        }
    }
}

impl<F> UploadQueue<F> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns false when the name was already queued.
    pub fn add(&mut self, name: impl Into<String>, file: F) -> bool {
        let name = name.into();
        if self.files.contains_key(&name) {
            return false;
        }
        self.files.insert(name, file);
        true
    }

    pub fn remove(&mut self, name: &str) -> Option<F> {
        self.files.remove(name)
    }

    pub fn clear(&mut self) {
        self.files.clear();
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &F)> {
        self.files.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::fields::{FieldDataType, FieldRequirement};
    use serde_json::json;

    fn entry() -> DataEntry {
        serde_json::from_value(json!({
            "id": 9, "branch": 1, "department": 10, "sub_department": 5,
            "branch_name": "North", "department_name": "Finance", "sub_department_name": "Payables",
            "field_values": {"Amount": 150, "Vendor": "ACME", "Note": null},
            "files": [{"id": 1, "file_name": "invoice.pdf", "file_type": "application/pdf",
                       "file_size": 2048, "uploaded_at": "2024-03-01T10:00:00Z"}],
            "created_at": "2024-03-01T10:00:00Z",
            "can_view": true
        }))
        .unwrap()
    }

    #[test]
    fn test_text_values() {
        let values = entry().text_values();
        assert_eq!(values["Amount"], "150");
        assert_eq!(values["Vendor"], "ACME");
        assert_eq!(values["Note"], "");
        assert_eq!(entry().created_date(), "2024-03-01");
        assert_eq!(entry().first_file().unwrap().file_name, "invoice.pdf");
    }

    #[test]
    fn test_created_date() {
        let mut record = entry();
        record.created_at = Some("2024-03-01".into());
        assert_eq!(record.created_date(), "2024-03-01");
        record.created_at = None;
        assert_eq!(record.created_date(), "");
    }

    #[test]
    fn test_search_requires_full_selection() {
        let filters = FieldValues::new();
        assert_eq!(
            search_query((Some(1), Some(2), None), &filters, 1),
            Err(SEARCH_SELECTION_REQUIRED.into())
        );
    }

    #[test]
    fn test_search_query_params() {
        let mut filters = FieldValues::new();
        filters.insert("Vendor".into(), " ACME ".into());
        filters.insert("Amount".into(), "".into());
        let query = search_query((Some(1), Some(10), Some(5)), &filters, 3).unwrap();
        assert_eq!(query["division-filter"], "1");
        assert_eq!(query["subdepartment-filter"], "5");
        assert_eq!(query["field_Vendor"], "ACME");
        assert!(!query.contains_key("field_Amount"));
        assert_eq!(query["page"], "3");
        assert_eq!(query["per_page"], "10");
    }

    #[test]
    fn test_edit_sends_blank_optionals() {
        let descriptors = vec![
            FieldDescriptor::new("Amount", FieldDataType::Numeric, FieldRequirement::Essential),
            FieldDescriptor::new("Note", FieldDataType::Alphanumeric, FieldRequirement::Optional),
        ];
        let mut validated = FieldValues::new();
        validated.insert("Amount".into(), "12".into());
        let edit = DataEntryEdit::new((1, 10, 5), &descriptors, &validated);
        assert_eq!(edit.field_values["Note"], "");
        assert_eq!(edit.field_values["Amount"], "12");
    }

    #[test]
    fn test_upload_queue_ignores_duplicates() {
        let mut queue = UploadQueue::new();
        assert!(queue.add("a.pdf", 1));
        assert!(!queue.add("a.pdf", 2));
        assert!(queue.add("b.png", 3));
        assert_eq!(queue.len(), 2);
        assert_eq!(queue.remove("a.pdf"), Some(1));
        queue.clear();
        assert!(queue.is_empty());
    }
}
