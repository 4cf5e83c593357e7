//! Client-side settings. Everything here is fixed at build time.

/// Overrides the API origin, e.g. `DASHBOARD_API_BASE=http://127.0.0.1:8000`.
/// When unset the dashboard talks to the origin it was served from.
pub const API_BASE_OVERRIDE: Option<&str> = option_env!("DASHBOARD_API_BASE");

pub const CSRF_COOKIE: &str = "csrftoken";
pub const CSRF_HEADER: &str = "X-CSRFToken";

pub const ACCESS_TOKEN_KEY: &str = "access_token";
pub const REFRESH_TOKEN_KEY: &str = "refresh_token";
pub const USER_KEY: &str = "auth_user";

/// Auto-dismiss delay for toasts.
pub const NOTIFICATION_TIMEOUT_MS: u32 = 3000;

/// Debounce for search boxes on list pages.
pub const SEARCH_DEBOUNCE_MS: u32 = 500;

pub use contracts::shared::pagination::DEFAULT_PAGE_SIZE;
