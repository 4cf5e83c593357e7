use contracts::shared::load_state::LoadState;
use contracts::shared::pagination::{total_pages, DEFAULT_PAGE_SIZE};
use contracts::shared::pending_delete::PendingDelete;
use contracts::system::users::User;
use leptos::prelude::*;

/// Target of the create/edit modal.
#[derive(Clone, Debug, PartialEq)]
pub enum UserForm {
    Create,
    Edit(User),
}

#[derive(Clone, Debug)]
pub struct UsersListState {
    /// Every user; the list endpoint is not paged.
    pub all: Vec<User>,
    pub page: usize,
    pub page_size: usize,
    pub load: LoadState,
    pub form: Option<UserForm>,
    pub pending_delete: PendingDelete<User>,
}

impl Default for UsersListState {
    fn default() -> Self {
        Self {
            all: Vec::new(),
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            load: LoadState::Idle,
            form: None,
            pending_delete: PendingDelete::new(),
        }
    }
}

impl UsersListState {
    pub fn total_pages(&self) -> usize {
        total_pages(self.all.len(), self.page_size)
    }

    /// Users on the current page.
    pub fn page_items(&self) -> Vec<User> {
        let start = (self.page.saturating_sub(1)) * self.page_size;
        self.all
            .iter()
            .skip(start)
            .take(self.page_size)
            .cloned()
            .collect()
    }

    /// Replace the data, keeping the page inside the new range.
    pub fn set_users(&mut self, users: Vec<User>) {
        self.all = users;
        let pages = self.total_pages().max(1);
        if self.page > pages {
            self.page = pages;
        }
    }
}

pub fn create_state() -> RwSignal<UsersListState> {
    RwSignal::new(UsersListState::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::system::users::UserStatus;

    fn user(id: i64) -> User {
        User {
            id,
            username: format!("u{}", id),
            email: String::new(),
            first_name: String::new(),
            last_name: String::new(),
            mobile_number: None,
            status: UserStatus::Active,
            date_joined: None,
            last_login: None,
            can_update_users: false,
            can_delete_users: false,
        }
    }

    #[test]
    fn test_client_side_paging() {
        let mut state = UsersListState::default();
        state.set_users((1..=23).map(user).collect());
        assert_eq!(state.total_pages(), 3);
        state.page = 3;
        let ids: Vec<i64> = state.page_items().iter().map(|u| u.id).collect();
        assert_eq!(ids, vec![21, 22, 23]);
    }

    #[test]
    fn test_page_clamped_after_delete() {
        let mut state = UsersListState::default();
        state.set_users((1..=11).map(user).collect());
        state.page = 2;
        state.set_users((1..=10).map(user).collect());
        assert_eq!(state.page, 1);
    }
}
