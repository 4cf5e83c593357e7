use std::collections::BTreeMap;

use contracts::domain::a005_data_entry::{search_query, value_as_text, DataEntry};
use contracts::shared::fields::FieldValues;

use crate::shared::paged_list::PagedList;

/// Filters captured when Search was pressed; paging reuses them.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SearchCriteria {
    pub selection: (Option<i64>, Option<i64>, Option<i64>),
    pub filters: FieldValues,
}

impl SearchCriteria {
    pub fn query(&self, page: usize) -> Result<BTreeMap<String, String>, String> {
        search_query(self.selection, &self.filters, page)
    }

    /// Cascade levels plus non-blank field filters.
    pub fn active_count(&self) -> usize {
        let (b, d, s) = self.selection;
        [b, d, s].iter().filter(|v| v.is_some()).count()
            + self.filters.values().filter(|v| !v.trim().is_empty()).count()
    }
}

#[derive(Clone, Debug, Default)]
pub struct DataEditState {
    pub list: PagedList<DataEntry>,
    pub criteria: Option<SearchCriteria>,
    /// Record whose file details are shown.
    pub file_details: Option<DataEntry>,
}

impl DataEditState {
    /// Start a new search from page 1. The criteria are kept only when they form a valid query.
    pub fn start_search(&mut self, criteria: SearchCriteria) -> Result<BTreeMap<String, String>, String> {
        let query = criteria.query(1)?;
        self.criteria = Some(criteria);
        Ok(query)
    }

    /// Query for another page of the last search.
    pub fn page_query(&self, page: usize) -> Option<BTreeMap<String, String>> {
        self.criteria.as_ref()?.query(page).ok()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn results_label(&self) -> Option<String> {
        self.list
            .load
            .is_loaded()
            .then(|| format!("{} entries found", self.list.total_count))
    }
}

/// Stored values as `(field, text)` pairs for the fields modal.
pub fn field_rows(entry: &DataEntry) -> Vec<(String, String)> {
    entry
        .field_values
        .iter()
        .map(|(name, value)| (name.clone(), value_as_text(value)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a005_data_entry::SEARCH_SELECTION_REQUIRED;
    use contracts::shared::list_response::ListPage;
    use serde_json::json;

    fn criteria() -> SearchCriteria {
        let mut filters = FieldValues::new();
        filters.insert("Vendor".into(), "ACME".into());
        filters.insert("Amount".into(), " ".into());
        SearchCriteria {
            selection: (Some(1), Some(10), Some(5)),
            filters,
        }
    }

    #[test]
    fn test_incomplete_selection_is_not_kept() {
        let mut state = DataEditState::default();
        let result = state.start_search(SearchCriteria {
            selection: (Some(1), None, None),
            filters: FieldValues::new(),
        });
        assert_eq!(result, Err(SEARCH_SELECTION_REQUIRED.to_string()));
        assert!(state.criteria.is_none());
        assert!(state.page_query(2).is_none());
    }

    #[test]
    fn test_paging_reuses_criteria() {
        let mut state = DataEditState::default();
        let first = state.start_search(criteria()).unwrap();
        assert_eq!(first["page"], "1");
        let third = state.page_query(3).unwrap();
        assert_eq!(third["page"], "3");
        assert_eq!(third["field_Vendor"], "ACME");
        assert_eq!(criteria().active_count(), 4);
    }

    #[test]
    fn test_results_label_after_load() {
        let mut state = DataEditState::default();
        assert_eq!(state.results_label(), None);
        state.list.finish(Ok(ListPage {
            items: Vec::new(),
            total_count: Some(0),
            total_pages: None,
            current_page: None,
        }));
        assert_eq!(state.results_label().as_deref(), Some("0 entries found"));
    }

    #[test]
    fn test_field_rows() {
        let entry: DataEntry = serde_json::from_value(json!({
            "id": 1, "branch": 1, "department": 2, "sub_department": 3,
            "field_values": {"Amount": 12, "Vendor": "ACME"}
        }))
        .unwrap();
        assert_eq!(
            field_rows(&entry),
            vec![
                ("Amount".to_string(), "12".to_string()),
                ("Vendor".to_string(), "ACME".to_string())
            ]
        );
    }
}
