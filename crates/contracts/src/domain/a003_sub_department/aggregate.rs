use serde::{Deserialize, Serialize};

use crate::shared::capabilities::Capabilities;
use crate::shared::fields::{FieldDataType, FieldDescriptor, FieldRequirement};

pub const LIST_ITEMS_KEY: &str = "results";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubDepartment {
    pub id: i64,
    pub department: i64,
    #[serde(default)]
    pub department_name: Option<String>,
    pub sub_department_id: String,
    pub name: String,
    #[serde(default)]
    pub fields: Vec<FieldDescriptor>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(flatten)]
    pub capabilities: Capabilities,
}

/// One editable row of the field designer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDraft {
    pub key: usize,
    pub name: String,
    pub data_type: FieldDataType,
    pub requirement: FieldRequirement,
    pub verify: bool,
}

impl FieldDraft {
    fn blank(key: usize) -> Self {
        Self {
            key,
            name: String::new(),
            data_type: FieldDataType::default(),
            requirement: FieldRequirement::default(),
            verify: false,
        }
    }

    fn to_descriptor(&self) -> Option<FieldDescriptor> {
        let name = self.name.trim();
        if name.is_empty() {
            return None;
        }
        Some(FieldDescriptor {
            name: name.to_string(),
            data_type: self.data_type,
            requirement: self.requirement,
            verify: self.verify,
        })
    }
}

/// Ordered list of field rows. Keys stay stable across removals so
/// the view can key its `For` on them.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldEditor {
    rows: Vec<FieldDraft>,
    next_key: usize,
}

impl FieldEditor {
    /// Starts with a single blank row.
    pub fn new() -> Self {
        let mut editor = Self::default();
        editor.add_row();
        editor
    }

    pub fn from_fields(fields: &[FieldDescriptor]) -> Self {
        let mut editor = Self::default();
        for field in fields {
            let key = editor.add_row();
            editor.update(key, |row| {
                row.name = field.name.clone();
                row.data_type = field.data_type;
                row.requirement = field.requirement;
                row.verify = field.verify;
            });
        }
        if editor.rows.is_empty() {
            editor.add_row();
        }
        editor
    }

    pub fn rows(&self) -> &[FieldDraft] {
        &self.rows
    }

    pub fn add_row(&mut self) -> usize {
        let key = self.next_key;
        self.next_key += 1;
        self.rows.push(FieldDraft::blank(key));
        key
    }

    pub fn remove_row(&mut self, key: usize) {
        self.rows.retain(|row| row.key != key);
    }

    pub fn update(&mut self, key: usize, apply: impl FnOnce(&mut FieldDraft)) {
        if let Some(row) = self.rows.iter_mut().find(|row| row.key == key) {
            apply(row);
        }
    }

    /// Rows with a name, in order.
    pub fn descriptors(&self) -> Vec<FieldDescriptor> {
        self.rows.iter().filter_map(FieldDraft::to_descriptor).collect()
    }
}

/// Body of `POST /api/sub-departments/` and `PUT /api/sub-departments/{id}/`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubDepartmentDto {
    pub department: i64,
    pub sub_department_id: String,
    pub name: String,
    pub fields: Vec<FieldDescriptor>,
}

impl SubDepartmentDto {
    pub fn from_form(
        department: Option<i64>,
        sub_department_id: &str,
        name: &str,
        editor: &FieldEditor,
    ) -> Result<Self, String> {
        let department = department.ok_or_else(|| "Please select a department".to_string())?;
        let sub_department_id = sub_department_id.trim();
        if sub_department_id.is_empty() {
            return Err("Please enter a sub-department ID".into());
        }
        let name = name.trim();
        if name.is_empty() {
            return Err("Please enter a sub-department title".into());
        }
        Ok(Self {
            department,
            sub_department_id: sub_department_id.to_string(),
            name: name.to_string(),
            fields: editor.descriptors(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_editor_keeps_named_rows_only() {
        let mut editor = FieldEditor::new();
        let first = editor.rows()[0].key;
        editor.update(first, |row| {
            row.name = " Amount ".into();
            row.data_type = FieldDataType::Numeric;
            row.requirement = FieldRequirement::Essential;
        });
        let second = editor.add_row();
        let third = editor.add_row();
        editor.update(third, |row| row.name = "Note".into());
        editor.remove_row(second);

        let descriptors = editor.descriptors();
        assert_eq!(descriptors.len(), 2);
        assert_eq!(descriptors[0].name, "Amount");
        assert!(descriptors[0].is_required());
        assert_eq!(editor.rows().len(), 2);
    }

    #[test]
    fn test_form_messages() {
        let editor = FieldEditor::new();
        assert_eq!(
            SubDepartmentDto::from_form(None, "1", "A", &editor),
            Err("Please select a department".into())
        );
        assert_eq!(
            SubDepartmentDto::from_form(Some(1), " ", "A", &editor),
            Err("Please enter a sub-department ID".into())
        );
        assert_eq!(
            SubDepartmentDto::from_form(Some(1), "7", "", &editor),
            Err("Please enter a sub-department title".into())
        );
    }

    #[test]
    fn test_request_body() {
        let editor = FieldEditor::from_fields(&[FieldDescriptor::new(
            "Invoice Date",
            FieldDataType::Date,
            FieldRequirement::Optional,
        )]);
        let dto = SubDepartmentDto::from_form(Some(4), "700", "Invoices", &editor).unwrap();
        let body = serde_json::to_value(&dto).unwrap();
        assert_eq!(
            body,
            json!({
                "department": 4,
                "sub_department_id": "700",
                "name": "Invoices",
                "fields": [{
                    "name": "Invoice Date",
                    "data_type": "date",
                    "requirement": "optional",
                    "verify": false
                }]
            })
        );
    }
}
