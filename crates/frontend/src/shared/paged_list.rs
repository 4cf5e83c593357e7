//! Table state for endpoints that page on the server.

use contracts::shared::api_error::ApiError;
use contracts::shared::capabilities::RowAction;
use contracts::shared::list_response::ListPage;
use contracts::shared::load_state::LoadState;
use contracts::shared::pagination::DEFAULT_PAGE_SIZE;
use contracts::shared::pending_delete::PendingDelete;

/// Modal opened from a row's View or Edit action.
#[derive(Clone, Debug, PartialEq)]
pub enum RowModal<T> {
    View(T),
    Edit(T),
}

#[derive(Clone, Debug)]
pub struct PagedList<T> {
    pub items: Vec<T>,
    /// 1-based page currently requested or shown.
    pub page: usize,
    pub total_pages: usize,
    /// Records across all pages; the row count when the backend omits it.
    pub total_count: usize,
    pub load: LoadState,
    pub pending_delete: PendingDelete<T>,
    pub modal: Option<RowModal<T>>,
}

impl<T> Default for PagedList<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            page: 1,
            total_pages: 0,
            total_count: 0,
            load: LoadState::Idle,
            pending_delete: PendingDelete::new(),
            modal: None,
        }
    }
}

impl<T> PagedList<T> {
    pub fn begin(&mut self, page: usize) {
        self.page = page.max(1);
        self.load = LoadState::Loading;
    }

    /// Store a response. On failure the previous rows stay and the error is
    /// handed back for reporting.
    pub fn finish(&mut self, result: Result<ListPage<T>, ApiError>) -> Option<ApiError> {
        self.load.finish(&result);
        match result {
            Ok(page) => {
                self.total_pages = page.page_count(DEFAULT_PAGE_SIZE);
                self.total_count = page.total_count.unwrap_or(page.items.len());
                if let Some(current) = page.current_page {
                    self.page = current.max(1);
                }
                self.items = page.items;
                None
            }
            Err(e) => Some(e),
        }
    }

    /// Route a row action: View and Edit open a modal, Delete only asks
    /// for confirmation.
    pub fn dispatch(&mut self, action: RowAction, record: T) {
        match action {
            RowAction::View => self.modal = Some(RowModal::View(record)),
            RowAction::Edit => self.modal = Some(RowModal::Edit(record)),
            RowAction::Delete => self.pending_delete.request(record),
        }
    }

    pub fn close_modal(&mut self) {
        self.modal = None;
    }

    pub fn is_empty_result(&self) -> bool {
        self.load.is_loaded() && self.items.is_empty()
    }

    /// Page to reload after a delete: one back when the last row of a later
    /// page went away.
    pub fn page_after_delete(&self) -> usize {
        if self.items.len() <= 1 && self.page > 1 {
            self.page - 1
        } else {
            self.page
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finish_takes_server_paging() {
        let mut list = PagedList::<i64>::default();
        list.begin(2);
        assert!(list.load.is_loading());
        let error = list.finish(Ok(ListPage {
            items: vec![11, 12],
            total_count: Some(25),
            total_pages: Some(3),
            current_page: Some(2),
        }));
        assert!(error.is_none());
        assert_eq!(list.total_pages, 3);
        assert_eq!(list.total_count, 25);
        assert_eq!(list.page, 2);
        assert!(!list.is_empty_result());
    }

    #[test]
    fn test_failure_keeps_rows() {
        let mut list = PagedList::<i64>::default();
        list.items = vec![1, 2];
        list.begin(1);
        let error = list.finish(Err(ApiError::Network("offline".into())));
        assert!(error.is_some());
        assert_eq!(list.items, vec![1, 2]);
        assert_eq!(list.load.error(), Some("Network error: offline"));
    }

    #[test]
    fn test_empty_result_row() {
        let mut list = PagedList::<i64>::default();
        assert!(!list.is_empty_result());
        list.finish(Ok(ListPage::default()));
        assert!(list.is_empty_result());
        assert_eq!(list.total_pages, 0);
    }

    #[test]
    fn test_dispatch_delete_waits_for_confirmation() {
        let mut list = PagedList::<i64>::default();
        list.dispatch(RowAction::Delete, 7);
        assert!(list.modal.is_none());
        assert!(list.pending_delete.is_open());
        list.dispatch(RowAction::Edit, 7);
        assert_eq!(list.modal, Some(RowModal::Edit(7)));
        list.close_modal();
        assert!(list.modal.is_none());
        assert_eq!(list.pending_delete.confirm(), Some(7));
    }

    #[test]
    fn test_page_after_delete() {
        let mut list = PagedList::<i64>::default();
        list.page = 3;
        list.items = vec![21];
        assert_eq!(list.page_after_delete(), 2);
        list.items = vec![21, 22];
        assert_eq!(list.page_after_delete(), 3);
        list.page = 1;
        list.items = vec![1];
        assert_eq!(list.page_after_delete(), 1);
    }
}
