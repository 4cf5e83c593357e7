//! API utilities for frontend-backend communication

use serde::Serialize;

use super::config::{API_BASE_OVERRIDE, DEFAULT_PAGE_SIZE};

/// Get the base URL for API requests
///
/// Uses `DASHBOARD_API_BASE` when it was set at build time, otherwise the
/// origin of the current page (the backend serves the dashboard itself).
///
/// # Example
/// ```rust,ignore
/// let url = format!("{}/api/departments/{}/", api_base(), id);
/// ```
pub fn api_base() -> String {
    if let Some(base) = API_BASE_OVERRIDE {
        return base.trim_end_matches('/').to_string();
    }
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default()
}

/// Build a full API URL from a path starting with `/`.
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Append an encoded query string, skipping the `?` when there is nothing to add.
pub fn with_query(path: &str, query: &str) -> String {
    if query.is_empty() {
        path.to_string()
    } else {
        format!("{}?{}", path, query)
    }
}

/// `?page=N&per_page=P[&search=..]` for paged list endpoints.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ListQuery {
    pub page: usize,
    pub per_page: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

impl ListQuery {
    pub fn page(page: usize) -> Self {
        Self {
            page,
            per_page: DEFAULT_PAGE_SIZE,
            search: None,
        }
    }

    /// Blank search text is left out of the query.
    pub fn with_search(page: usize, search: &str) -> Self {
        let search = search.trim();
        Self {
            page,
            per_page: DEFAULT_PAGE_SIZE,
            search: (!search.is_empty()).then(|| search.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_query() {
        assert_eq!(serde_qs::to_string(&ListQuery::page(2)).unwrap(), "page=2&per_page=10");
        assert_eq!(
            serde_qs::to_string(&ListQuery::with_search(1, " hr ")).unwrap(),
            "page=1&per_page=10&search=hr"
        );
        assert_eq!(
            serde_qs::to_string(&ListQuery::with_search(1, "  ")).unwrap(),
            "page=1&per_page=10"
        );
    }

    #[test]
    fn test_with_query() {
        assert_eq!(with_query("/api/users/", ""), "/api/users/");
        assert_eq!(
            with_query("/api/departments/", "page=2"),
            "/api/departments/?page=2"
        );
    }
}
