use serde::{Deserialize, Serialize};

use crate::domain::common::{require_digits, require_text};
use crate::shared::capabilities::Capabilities;

/// `GET /api/departments/` answers `{departments, total_pages, current_page}`.
pub const LIST_ITEMS_KEY: &str = "departments";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Department {
    pub id: i64,
    /// Human code, digits only.
    pub department_id: String,
    pub name: String,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(flatten)]
    pub capabilities: Capabilities,
}

impl Department {
    /// `code - name`, as shown in link pickers.
    pub fn label(&self) -> String {
        format!("{} - {}", self.department_id, self.name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepartmentDto {
    pub department_id: String,
    pub name: String,
}

impl DepartmentDto {
    pub fn from_form(department_id: &str, name: &str) -> Result<Self, String> {
        Ok(Self {
            department_id: require_digits(department_id, "Department ID must be a number")?,
            name: require_text(name, "Department name is required")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_response::parse_list;
    use serde_json::json;

    #[test]
    fn test_department_page() {
        let page = parse_list::<Department>(
            json!({
                "departments": [{"id": 1, "department_id": "200", "name": "Finance", "can_view": true}],
                "total_pages": 3,
                "current_page": 1
            }),
            LIST_ITEMS_KEY,
        )
        .unwrap();
        assert_eq!(page.items[0].label(), "200 - Finance");
        assert_eq!(page.page_count(10), 3);
        assert_eq!(
            page.items[0].capabilities.row_actions(),
            vec![crate::shared::capabilities::RowAction::View]
        );
    }

    #[test]
    fn test_department_code_must_be_numeric() {
        assert_eq!(
            DepartmentDto::from_form("D-1", "Finance"),
            Err("Department ID must be a number".into())
        );
        assert!(DepartmentDto::from_form("12", "Finance").is_ok());
    }
}
