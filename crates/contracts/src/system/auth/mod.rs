use serde::{Deserialize, Serialize};

use crate::system::users::User;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// `POST /api/auth/login/`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub user: User,
    pub access: String,
    pub refresh: String,
    #[serde(default)]
    pub redirect: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshRequest {
    pub refresh: String,
}

/// `POST /api/auth/token/refresh/`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshResponse {
    pub access: String,
    /// Present when the backend rotates refresh tokens.
    #[serde(default)]
    pub refresh: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_login_response() {
        let response: LoginResponse = serde_json::from_value(json!({
            "user": {"id": 1, "username": "admin", "status": "active"},
            "refresh": "r", "access": "a", "redirect": "/dashboard/"
        }))
        .unwrap();
        assert_eq!(response.user.username, "admin");
        assert_eq!(response.access, "a");
    }

    #[test]
    fn test_refresh_without_rotation() {
        let response: RefreshResponse = serde_json::from_value(json!({"access": "new"})).unwrap();
        assert_eq!(response.refresh, None);
    }
}
