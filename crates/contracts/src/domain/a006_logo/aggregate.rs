use serde::{Deserialize, Serialize};

use crate::domain::common::require_text;

/// The logo endpoint answers a bare array; `results` covers a paginated backend.
pub const LIST_ITEMS_KEY: &str = "results";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Logo {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub organization_name: String,
    /// Base64 payload, with or without the `data:` prefix.
    #[serde(default)]
    pub logo_data: String,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Logo {
    /// Image `src` for previews. Bare payloads are assumed to be PNG.
    pub fn preview_src(&self) -> String {
        if self.logo_data.starts_with("data:") {
            self.logo_data.clone()
        } else {
            format!("data:image/png;base64,{}", self.logo_data)
        }
    }
}

/// Body of `POST /api/logos/`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogoUploadDto {
    pub name: String,
    pub organization_name: String,
    pub logo_data: String,
    pub is_active: bool,
}

impl LogoUploadDto {
    /// `logo_data` is `None` until a file has been read.
    pub fn from_form(
        name: &str,
        organization_name: &str,
        logo_data: Option<String>,
        is_active: bool,
    ) -> Result<Self, String> {
        let logo_data = logo_data.ok_or_else(|| "Please select a file to upload".to_string())?;
        let organization_name = require_text(organization_name, "Organization name is required")?;
        let name = require_text(name, "Logo name is required")?;
        Ok(Self {
            name,
            organization_name,
            logo_data,
            is_active,
        })
    }
}

/// Body of `PATCH /api/logos/{id}/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetActiveDto {
    pub is_active: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_preview_src() {
        let mut logo: Logo = serde_json::from_value(json!({
            "id": 1, "name": "Main", "organization_name": "Org", "logo_data": "iVBORw0",
            "is_active": true
        }))
        .unwrap();
        assert_eq!(logo.preview_src(), "data:image/png;base64,iVBORw0");
        logo.logo_data = "data:image/svg+xml;base64,PHN2Zz4".into();
        assert_eq!(logo.preview_src(), "data:image/svg+xml;base64,PHN2Zz4");
    }

    #[test]
    fn test_upload_validation_order() {
        assert_eq!(
            LogoUploadDto::from_form("Main", "Org", None, false),
            Err("Please select a file to upload".into())
        );
        assert_eq!(
            LogoUploadDto::from_form("Main", " ", Some("data:".into()), false),
            Err("Organization name is required".into())
        );
        assert_eq!(
            LogoUploadDto::from_form("", "Org", Some("data:".into()), false),
            Err("Logo name is required".into())
        );
        assert!(LogoUploadDto::from_form("Main", "Org", Some("data:".into()), true).is_ok());
    }
}
