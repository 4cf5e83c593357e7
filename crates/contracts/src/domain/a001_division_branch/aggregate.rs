use serde::{Deserialize, Serialize};

use crate::domain::common::{require_digits, require_text};
use crate::shared::capabilities::Capabilities;

pub const LIST_ITEMS_KEY: &str = "results";

/// Division or branch office, the top level of the hierarchy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DivisionBranch {
    pub id: i64,
    pub division_id: i64,
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(flatten)]
    pub capabilities: Capabilities,
}

/// Body of `POST /api/division-branches/` and `PUT /api/division-branches/{id}/`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DivisionBranchDto {
    pub division_id: i64,
    pub name: String,
    pub address: String,
}

impl DivisionBranchDto {
    /// Validate raw form input.
    pub fn from_form(division_id: &str, name: &str, address: &str) -> Result<Self, String> {
        let code = require_digits(division_id, "Division ID must be a number")?;
        let division_id = code
            .parse::<i64>()
            .map_err(|_| "Division ID must be a number".to_string())?;
        Ok(Self {
            division_id,
            name: require_text(name, "Division/Branch name is required")?,
            address: require_text(address, "Address is required")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_with_flags() {
        let row: DivisionBranch = serde_json::from_value(json!({
            "id": 3, "division_id": 101, "name": "North", "address": "1 Main St",
            "can_view": true, "can_update": true
        }))
        .unwrap();
        assert!(row.capabilities.can_update);
        assert!(!row.capabilities.can_delete);
    }

    #[test]
    fn test_form_validation() {
        assert_eq!(
            DivisionBranchDto::from_form("10a", "North", "x"),
            Err("Division ID must be a number".into())
        );
        assert!(DivisionBranchDto::from_form("10", " ", "x").is_err());
        let dto = DivisionBranchDto::from_form(" 10 ", "North", "1 Main St").unwrap();
        assert_eq!(dto.division_id, 10);
    }
}
