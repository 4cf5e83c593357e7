//! Screen keys and their tab titles.
//!
//! Screens that correspond to a permission module use the module key, so the
//! sidebar, the registry and permission checks share one vocabulary.

use contracts::system::permissions::{PermissionModule, PermissionSection};

pub const HOME: &str = "home";
pub const BRANCH_RIGHTS: &str = "branch_rights";

/// Modules that have a screen in this client.
pub const SCREEN_MODULES: [PermissionModule; 10] = [
    PermissionModule::DataEntry,
    PermissionModule::DataEdit,
    PermissionModule::Department,
    PermissionModule::SubDepartment,
    PermissionModule::DivisionBranch,
    PermissionModule::BranchDepLink,
    PermissionModule::LogoUpload,
    PermissionModule::Users,
    PermissionModule::UserRights,
    PermissionModule::PasswordChange,
];

pub fn tab_label_for_key(key: &str) -> &'static str {
    match key {
        HOME => "Home",
        BRANCH_RIGHTS => "Branch Rights",
        _ => module_for_key(key)
            .map(|m| m.label())
            .unwrap_or("Unknown"),
    }
}

/// The module whose access permission gates the screen.
pub fn module_for_key(key: &str) -> Option<PermissionModule> {
    if key == BRANCH_RIGHTS {
        return Some(PermissionModule::UserRights);
    }
    PermissionModule::ALL.into_iter().find(|m| m.key() == key)
}

pub fn icon_for_key(key: &str) -> &'static str {
    match key {
        HOME => "home",
        "data_entry" => "upload",
        "data_edit" => "edit",
        "department" => "building",
        "sub_department" => "layers",
        "division_branch" => "sitemap",
        "branch_dep_link" => "link",
        "logo_upload" => "image",
        "users" => "users",
        "user_rights" => "shield",
        BRANCH_RIGHTS => "sitemap",
        "password_change" => "key",
        _ => "list",
    }
}

pub fn section_icon(section: PermissionSection) -> &'static str {
    match section {
        PermissionSection::Data => "database",
        PermissionSection::Setup => "settings",
        PermissionSection::User => "users",
        PermissionSection::Report => "bar-chart",
    }
}

/// Screen keys listed under a sidebar section, in menu order.
pub fn screens_in_section(section: PermissionSection) -> Vec<&'static str> {
    let mut keys: Vec<&'static str> = SCREEN_MODULES
        .iter()
        .filter(|m| m.section() == section)
        .map(|m| m.key())
        .collect();
    if section == PermissionSection::User {
        keys.push(BRANCH_RIGHTS);
    }
    keys
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        assert_eq!(tab_label_for_key("department"), "Department");
        assert_eq!(tab_label_for_key(BRANCH_RIGHTS), "Branch Rights");
        assert_eq!(tab_label_for_key("nope"), "Unknown");
    }

    #[test]
    fn test_branch_rights_gated_by_user_rights() {
        assert_eq!(
            module_for_key(BRANCH_RIGHTS),
            Some(PermissionModule::UserRights)
        );
        assert_eq!(module_for_key(HOME), None);
    }

    #[test]
    fn test_report_section_has_no_screens() {
        assert!(screens_in_section(PermissionSection::Report).is_empty());
        assert_eq!(
            screens_in_section(PermissionSection::User),
            vec!["users", "user_rights", "password_change", BRANCH_RIGHTS]
        );
    }
}
