//! Paged list envelopes.
//!
//! List endpoints answer in one of three shapes:
//! - a raw JSON array (`/api/users/`, `/api/logos/`)
//! - `{ "count": N, "results": [...] }` (`/api/data-entry/search/`)
//! - `{ "<items_key>": [...], "total_pages": N, "current_page": N }`
//!   (`/api/departments/` uses `departments`, others use `data`)
//!
//! [`parse_list`] folds all of them into a single [`ListPage`].

use serde::de::DeserializeOwned;
use serde_json::Value;

use super::api_error::ApiError;

#[derive(Debug, Clone, PartialEq)]
pub struct ListPage<T> {
    pub items: Vec<T>,
    /// Total number of records, when the backend reports it.
    pub total_count: Option<usize>,
    /// Total number of pages, when the backend reports it.
    pub total_pages: Option<usize>,
    pub current_page: Option<usize>,
}

impl<T> Default for ListPage<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            total_count: None,
            total_pages: None,
            current_page: None,
        }
    }
}

impl<T> ListPage<T> {
    /// Number of pages for a given page size, preferring what the backend reported.
    pub fn page_count(&self, page_size: usize) -> usize {
        if let Some(pages) = self.total_pages {
            return pages;
        }
        match self.total_count {
            Some(count) => super::pagination::total_pages(count, page_size),
            None if self.items.is_empty() => 0,
            None => 1,
        }
    }
}

/// Parse any of the supported list envelopes.
///
/// `items_key` names the array field for envelopes that do not use `results`
/// (for example `"departments"`); `"data"` and `"results"` are always tried.
pub fn parse_list<T: DeserializeOwned>(value: Value, items_key: &str) -> Result<ListPage<T>, ApiError> {
    match value {
        Value::Array(_) => {
            let items: Vec<T> = from_value(value)?;
            let count = items.len();
            Ok(ListPage {
                items,
                total_count: Some(count),
                total_pages: None,
                current_page: None,
            })
        }
        Value::Object(mut map) => {
            let raw_items = [items_key, "results", "data"]
                .iter()
                .find_map(|key| map.remove(*key).filter(Value::is_array))
                .ok_or_else(|| ApiError::Parse(format!("missing '{}' array in list response", items_key)))?;
            let items: Vec<T> = from_value(raw_items)?;
            let total_count = ["count", "total"]
                .iter()
                .find_map(|key| map.get(*key).and_then(Value::as_u64))
                .map(|n| n as usize);
            let total_pages = map.get("total_pages").and_then(Value::as_u64).map(|n| n as usize);
            let current_page = map.get("current_page").and_then(Value::as_u64).map(|n| n as usize);
            Ok(ListPage {
                items,
                total_count,
                total_pages,
                current_page,
            })
        }
        other => Err(ApiError::Parse(format!("unexpected list response: {}", other))),
    }
}

fn from_value<T: DeserializeOwned>(value: Value) -> Result<T, ApiError> {
    serde_json::from_value(value).map_err(|e| ApiError::Parse(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Row {
        id: i64,
    }

    #[test]
    fn test_raw_array() {
        let page: ListPage<Row> = parse_list(json!([{"id": 1}, {"id": 2}]), "results").unwrap();
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.total_count, Some(2));
        assert_eq!(page.page_count(10), 1);
    }

    #[test]
    fn test_results_envelope() {
        let page: ListPage<Row> =
            parse_list(json!({"count": 23, "results": [{"id": 7}]}), "results").unwrap();
        assert_eq!(page.items, vec![Row { id: 7 }]);
        assert_eq!(page.total_count, Some(23));
        assert_eq!(page.page_count(10), 3);
    }

    #[test]
    fn test_named_envelope_with_pages() {
        let page: ListPage<Row> = parse_list(
            json!({"departments": [{"id": 3}], "total_pages": 4, "current_page": 2}),
            "departments",
        )
        .unwrap();
        assert_eq!(page.items, vec![Row { id: 3 }]);
        assert_eq!(page.page_count(10), 4);
        assert_eq!(page.current_page, Some(2));
    }

    #[test]
    fn test_data_fallback() {
        let page: ListPage<Row> =
            parse_list(json!({"data": [], "total": 0}), "branches").unwrap();
        assert!(page.items.is_empty());
        assert_eq!(page.page_count(10), 0);
    }

    #[test]
    fn test_missing_items_is_parse_error() {
        let result: Result<ListPage<Row>, _> = parse_list(json!({"count": 1}), "results");
        assert!(matches!(result, Err(ApiError::Parse(_))));
    }
}
