use contracts::domain::a003_sub_department::SubDepartment;
use leptos::prelude::*;

use crate::shared::paged_list::PagedList;

#[derive(Clone, Debug, Default)]
pub struct SubDepartmentListState {
    pub list: PagedList<SubDepartment>,
    /// Search text as last applied to the query.
    pub search: String,
    pub adding: bool,
}

impl SubDepartmentListState {
    /// A new search always starts from the first page.
    pub fn set_search(&mut self, text: String) -> bool {
        let text = text.trim().to_string();
        if text == self.search {
            return false;
        }
        self.search = text;
        self.list.page = 1;
        true
    }
}

/// Field names joined for the table cell.
pub fn fields_summary(sub_department: &SubDepartment) -> String {
    sub_department
        .fields
        .iter()
        .map(|f| f.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn create_state() -> RwSignal<SubDepartmentListState> {
    RwSignal::new(SubDepartmentListState::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_fields_summary() {
        let sub: SubDepartment = serde_json::from_value(json!({
            "id": 5, "department": 10, "sub_department_id": "1", "name": "Payables",
            "fields": [
                {"name": "Amount", "data_type": "numeric", "requirement": "essential"},
                {"name": "Vendor", "data_type": "alphanumeric", "requirement": "optional"}
            ]
        }))
        .unwrap();
        assert_eq!(fields_summary(&sub), "Amount, Vendor");
    }

    #[test]
    fn test_search_resets_page() {
        let mut state = SubDepartmentListState::default();
        state.list.page = 4;
        assert!(state.set_search(" pay ".into()));
        assert_eq!(state.search, "pay");
        assert_eq!(state.list.page, 1);
        state.list.page = 2;
        assert!(!state.set_search("pay".into()));
        assert_eq!(state.list.page, 2);
    }
}
