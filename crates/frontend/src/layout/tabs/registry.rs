//! Tab key → screen view. Every screen key is handled here.

use leptos::prelude::*;

use super::tab_labels::{module_for_key, BRANCH_RIGHTS, HOME};
use crate::domain::a001_division_branch::ui::list::DivisionBranchList;
use crate::domain::a002_department::ui::list::DepartmentList;
use crate::domain::a003_sub_department::ui::list::SubDepartmentList;
use crate::domain::a004_branch_department_link::ui::list::BranchDepartmentLinkList;
use crate::domain::a005_data_entry::ui::entry::DataEntryPage;
use crate::domain::a005_data_entry::ui::list::DataEditList;
use crate::domain::a006_logo::ui::list::LogoList;
use crate::system::auth::guard::RequirePermission;
use crate::system::branch_rights::ui::BranchRightsPage;
use crate::system::pages::home::HomePage;
use crate::system::password_change::ui::PasswordChangePage;
use crate::system::user_rights::ui::UserRightsPage;
use crate::system::users::ui::list::UsersListPage;

fn screen(key: &str) -> AnyView {
    match key {
        "data_entry" => view! { <DataEntryPage /> }.into_any(),
        "data_edit" => view! { <DataEditList /> }.into_any(),
        "department" => view! { <DepartmentList /> }.into_any(),
        "sub_department" => view! { <SubDepartmentList /> }.into_any(),
        "division_branch" => view! { <DivisionBranchList /> }.into_any(),
        "branch_dep_link" => view! { <BranchDepartmentLinkList /> }.into_any(),
        "logo_upload" => view! { <LogoList /> }.into_any(),
        "users" => view! { <UsersListPage /> }.into_any(),
        "user_rights" => view! { <UserRightsPage /> }.into_any(),
        BRANCH_RIGHTS => view! { <BranchRightsPage /> }.into_any(),
        "password_change" => view! { <PasswordChangePage /> }.into_any(),
        _ => {
            log::warn!("unknown tab key: {}", key);
            view! { <div class="placeholder">"Not implemented yet"</div> }.into_any()
        }
    }
}

/// Content of the tab `key`. Screens tied to a permission module are only
/// rendered for users holding its access permission.
pub fn render_tab_content(key: &str) -> AnyView {
    if key == HOME {
        return view! { <HomePage /> }.into_any();
    }
    match module_for_key(key) {
        Some(module) => {
            let key = key.to_string();
            view! {
                <RequirePermission module=module>
                    {screen(&key)}
                </RequirePermission>
            }
            .into_any()
        }
        None => screen(key),
    }
}

