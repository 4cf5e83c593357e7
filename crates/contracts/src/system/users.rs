use serde::{Deserialize, Serialize};

pub const MIN_PASSWORD_LENGTH: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum UserStatus {
    #[default]
    Active,
    Inactive,
}

impl UserStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserStatus::Active => "active",
            UserStatus::Inactive => "inactive",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            UserStatus::Active => "Active",
            UserStatus::Inactive => "Inactive",
        }
    }
}

impl From<String> for UserStatus {
    fn from(value: String) -> Self {
        if value.eq_ignore_ascii_case("active") {
            UserStatus::Active
        } else {
            UserStatus::Inactive
        }
    }
}

impl From<UserStatus> for String {
    fn from(value: UserStatus) -> Self {
        value.as_str().to_string()
    }
}

/// Row of `GET /api/users/` (a raw array).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub mobile_number: Option<String>,
    #[serde(default)]
    pub status: UserStatus,
    #[serde(default)]
    pub date_joined: Option<String>,
    #[serde(default)]
    pub last_login: Option<String>,
    #[serde(default)]
    pub can_update_users: bool,
    #[serde(default)]
    pub can_delete_users: bool,
}

impl User {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name).trim().to_string()
    }

    /// `full name (username)` for user pickers.
    pub fn display_name(&self) -> String {
        let full = self.full_name();
        if full.is_empty() {
            self.username.clone()
        } else {
            format!("{} ({})", full, self.username)
        }
    }
}

/// Body of `POST /api/users/` and `PUT /api/users/{id}/`.
///
/// `password` is omitted from the body when left blank on edit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserFormDto {
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mobile_number: Option<String>,
    pub status: UserStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl UserFormDto {
    pub fn from_user(user: &User) -> Self {
        Self {
            username: user.username.clone(),
            email: user.email.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            mobile_number: user.mobile_number.clone(),
            status: user.status,
            password: None,
        }
    }

    /// Password is required when creating, optional when editing.
    pub fn validate(&self, creating: bool) -> Result<(), String> {
        if self.username.trim().is_empty() {
            return Err("Username is required".into());
        }
        if self.email.trim().is_empty() {
            return Err("Email is required".into());
        }
        if !self.email.contains('@') {
            return Err("Please enter a valid email address".into());
        }
        let password = self.password.as_deref().unwrap_or("");
        if creating && password.is_empty() {
            return Err("Password is required".into());
        }
        Ok(())
    }
}

/// `POST /dashboard/user/change-password/`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChangePasswordDto {
    pub user_id: i64,
    pub new_password: String,
}

impl ChangePasswordDto {
    /// Check the confirmation and minimum length before building the request.
    pub fn build(user_id: Option<i64>, new_password: &str, confirm: &str) -> Result<Self, String> {
        let user_id = user_id.ok_or_else(|| "Please select a user".to_string())?;
        if new_password != confirm {
            return Err("Passwords do not match".into());
        }
        if new_password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(format!(
                "Password must be at least {} characters long",
                MIN_PASSWORD_LENGTH
            ));
        }
        Ok(Self {
            user_id,
            new_password: new_password.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_user_parsing() {
        let user: User = serde_json::from_value(json!({
            "id": 4, "username": "amir", "email": "a@x.io",
            "first_name": "Amir", "last_name": "", "status": "inactive",
            "last_login": null
        }))
        .unwrap();
        assert_eq!(user.status, UserStatus::Inactive);
        assert_eq!(user.full_name(), "Amir");
        assert_eq!(user.display_name(), "Amir (amir)");
        assert!(!user.can_update_users);
    }

    #[test]
    fn test_password_omitted_on_edit() {
        let dto = UserFormDto {
            username: "amir".into(),
            email: "a@x.io".into(),
            ..Default::default()
        };
        assert!(dto.validate(false).is_ok());
        assert_eq!(dto.validate(true), Err("Password is required".into()));
        let body = serde_json::to_value(&dto).unwrap();
        assert!(body.get("password").is_none());
        assert_eq!(body["status"], "active");
    }

    #[test]
    fn test_change_password_rules() {
        assert_eq!(
            ChangePasswordDto::build(Some(1), "secret123", "secret124"),
            Err("Passwords do not match".into())
        );
        assert_eq!(
            ChangePasswordDto::build(Some(1), "short", "short"),
            Err("Password must be at least 8 characters long".into())
        );
        assert!(ChangePasswordDto::build(None, "longenough", "longenough").is_err());
        let dto = ChangePasswordDto::build(Some(1), "longenough", "longenough").unwrap();
        assert_eq!(dto.user_id, 1);
    }
}
