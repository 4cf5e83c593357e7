//! Permission catalog and the user-rights editor model.
//!
//! Permissions are flat strings of the form `can_{action}_{module}` (plus one
//! `can_access_{section}` per menu section). The dashboard reads them through
//! [`PermissionSet`] and edits them through [`RightsTree`].

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::shared::capabilities::Capabilities;

// ============================================================================
// Catalog
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PermissionAction {
    Access,
    View,
    Create,
    Update,
    Delete,
}

impl PermissionAction {
    /// Actions editable per module, below the module's own access flag.
    pub const CRUD: [PermissionAction; 4] = [
        PermissionAction::View,
        PermissionAction::Create,
        PermissionAction::Update,
        PermissionAction::Delete,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PermissionAction::Access => "access",
            PermissionAction::View => "view",
            PermissionAction::Create => "create",
            PermissionAction::Update => "update",
            PermissionAction::Delete => "delete",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PermissionAction::Access => "Access",
            PermissionAction::View => "View",
            PermissionAction::Create => "Create",
            PermissionAction::Update => "Update",
            PermissionAction::Delete => "Delete",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PermissionSection {
    Data,
    Setup,
    User,
    Report,
}

impl PermissionSection {
    pub const ALL: [PermissionSection; 4] = [
        PermissionSection::Data,
        PermissionSection::Setup,
        PermissionSection::User,
        PermissionSection::Report,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            PermissionSection::Data => "data",
            PermissionSection::Setup => "setup",
            PermissionSection::User => "user",
            PermissionSection::Report => "report",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PermissionSection::Data => "Data",
            PermissionSection::Setup => "Setup",
            PermissionSection::User => "User",
            PermissionSection::Report => "Report",
        }
    }

    /// `can_access_{section}`
    pub fn permission(&self) -> String {
        format!("can_access_{}", self.key())
    }

    pub fn modules(&self) -> Vec<PermissionModule> {
        PermissionModule::ALL
            .iter()
            .copied()
            .filter(|m| m.section() == *self)
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PermissionModule {
    DataEntry,
    DataEdit,
    Enquiry,
    Department,
    SubDepartment,
    DivisionBranch,
    BranchDepLink,
    LogoUpload,
    BulkUpload,
    Users,
    UserRights,
    PasswordChange,
    LogReport,
    Register,
}

impl PermissionModule {
    pub const ALL: [PermissionModule; 14] = [
        PermissionModule::DataEntry,
        PermissionModule::DataEdit,
        PermissionModule::Enquiry,
        PermissionModule::Department,
        PermissionModule::SubDepartment,
        PermissionModule::DivisionBranch,
        PermissionModule::BranchDepLink,
        PermissionModule::LogoUpload,
        PermissionModule::BulkUpload,
        PermissionModule::Users,
        PermissionModule::UserRights,
        PermissionModule::PasswordChange,
        PermissionModule::LogReport,
        PermissionModule::Register,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            PermissionModule::DataEntry => "data_entry",
            PermissionModule::DataEdit => "data_edit",
            PermissionModule::Enquiry => "enquiry",
            PermissionModule::BulkUpload => "bulk_upload",
            PermissionModule::Department => "department",
            PermissionModule::SubDepartment => "sub_department",
            PermissionModule::DivisionBranch => "division_branch",
            PermissionModule::BranchDepLink => "branch_dep_link",
            PermissionModule::LogoUpload => "logo_upload",
            PermissionModule::Users => "users",
            PermissionModule::UserRights => "user_rights",
            PermissionModule::PasswordChange => "password_change",
            PermissionModule::Register => "register",
            PermissionModule::LogReport => "log_report",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PermissionModule::DataEntry => "Data Entry",
            PermissionModule::DataEdit => "Data Edit",
            PermissionModule::Enquiry => "Enquiry",
            PermissionModule::BulkUpload => "Bulk Upload",
            PermissionModule::Department => "Department",
            PermissionModule::SubDepartment => "Sub Department",
            PermissionModule::DivisionBranch => "Division/Branch",
            PermissionModule::BranchDepLink => "Branch Department Link",
            PermissionModule::LogoUpload => "Logo Upload",
            PermissionModule::Users => "Users",
            PermissionModule::UserRights => "User Rights",
            PermissionModule::PasswordChange => "Password Change",
            PermissionModule::Register => "Register",
            PermissionModule::LogReport => "Log Report",
        }
    }

    pub fn section(&self) -> PermissionSection {
        match self {
            PermissionModule::DataEntry | PermissionModule::DataEdit | PermissionModule::Enquiry => {
                PermissionSection::Data
            }
            PermissionModule::Department
            | PermissionModule::SubDepartment
            | PermissionModule::DivisionBranch
            | PermissionModule::BranchDepLink
            | PermissionModule::LogoUpload
            | PermissionModule::BulkUpload => PermissionSection::Setup,
            PermissionModule::Users | PermissionModule::UserRights | PermissionModule::PasswordChange => {
                PermissionSection::User
            }
            PermissionModule::LogReport | PermissionModule::Register => PermissionSection::Report,
        }
    }

    /// Every permission string belonging to this module, access first.
    pub fn permissions(&self) -> Vec<String> {
        std::iter::once(PermissionAction::Access)
            .chain(PermissionAction::CRUD)
            .map(|action| permission_name(action, *self))
            .collect()
    }
}

/// `can_{action}_{module}`
pub fn permission_name(action: PermissionAction, module: PermissionModule) -> String {
    format!("can_{}_{}", action.as_str(), module.key())
}

/// Every permission the rights editor can grant.
pub fn all_permissions() -> Vec<String> {
    PermissionSection::ALL
        .iter()
        .flat_map(|section| {
            std::iter::once(section.permission())
                .chain(section.modules().into_iter().flat_map(|m| m.permissions()))
        })
        .collect()
}

// ============================================================================
// Granted set
// ============================================================================

/// `GET /dashboard/user/get-permissions/{id}/`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PermissionsResponse {
    #[serde(default)]
    pub permissions: Vec<String>,
}

/// `GET /api/auth/permissions/`: the signed-in user's permissions grouped by
/// menu section, e.g. `{"setup": {"access": true, "pages": {"department":
/// {"access": true, "permissions": {"view": true, ..}}}}}`.
pub type PagePermissions = BTreeMap<String, SectionPermissions>;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SectionPermissions {
    #[serde(default)]
    pub access: bool,
    #[serde(default)]
    pub pages: BTreeMap<String, PagePermission>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PagePermission {
    #[serde(default)]
    pub access: bool,
    #[serde(default)]
    pub permissions: BTreeMap<String, bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PermissionSet(BTreeSet<String>);

impl PermissionSet {
    pub fn new<I, S>(permissions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(permissions.into_iter().map(Into::into).collect())
    }

    /// Flatten the grouped shape into `can_*` strings.
    pub fn from_page_permissions(sections: &PagePermissions) -> Self {
        let mut set = PermissionSet::default();
        for section in sections.values() {
            for (module, page) in &section.pages {
                if page.access {
                    set.0.insert(format!("can_access_{}", module));
                }
                for (action, granted) in &page.permissions {
                    if *granted {
                        set.0.insert(format!("can_{}_{}", action, module));
                    }
                }
                if section.access {
                    if let Some(known) = PermissionModule::ALL.iter().find(|m| m.key() == module) {
                        set.0.insert(known.section().permission());
                    }
                }
            }
        }
        set
    }

    pub fn has(&self, permission: &str) -> bool {
        self.0.contains(permission)
    }

    pub fn allows(&self, action: PermissionAction, module: PermissionModule) -> bool {
        self.has(&permission_name(action, module))
    }

    pub fn can_access_section(&self, section: PermissionSection) -> bool {
        self.has(&section.permission())
    }

    /// Screen-level capabilities for a module.
    pub fn capabilities(&self, module: PermissionModule) -> Capabilities {
        Capabilities {
            can_view: self.allows(PermissionAction::View, module),
            can_create: self.allows(PermissionAction::Create, module),
            can_update: self.allows(PermissionAction::Update, module),
            can_delete: self.allows(PermissionAction::Delete, module),
        }
    }

    pub fn set(&mut self, permission: &str, granted: bool) {
        if granted {
            self.0.insert(permission.to_string());
        } else {
            self.0.remove(permission);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

// ============================================================================
// Rights editor
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckState {
    Unchecked,
    Indeterminate,
    Checked,
}

impl CheckState {
    fn from_counts(checked: usize, total: usize) -> Self {
        if total > 0 && checked == total {
            CheckState::Checked
        } else if checked == 0 {
            CheckState::Unchecked
        } else {
            CheckState::Indeterminate
        }
    }

    pub fn is_checked(&self) -> bool {
        *self == CheckState::Checked
    }

    pub fn is_indeterminate(&self) -> bool {
        *self == CheckState::Indeterminate
    }
}

/// Tri-state section -> module -> action checkbox tree over a [`PermissionSet`].
///
/// Section and module boxes are derived from their children; toggling a box
/// cascades downwards. A section's own `can_access_*` flag is kept granted
/// while anything below it is granted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RightsTree {
    granted: PermissionSet,
}

impl RightsTree {
    pub fn new(granted: PermissionSet) -> Self {
        let mut tree = Self { granted };
        tree.sync_sections();
        tree
    }

    pub fn granted(&self) -> &PermissionSet {
        &self.granted
    }

    pub fn action_checked(&self, module: PermissionModule, action: PermissionAction) -> bool {
        self.granted.allows(action, module)
    }

    pub fn module_state(&self, module: PermissionModule) -> CheckState {
        let perms = module.permissions();
        let checked = perms.iter().filter(|p| self.granted.has(p)).count();
        CheckState::from_counts(checked, perms.len())
    }

    pub fn section_state(&self, section: PermissionSection) -> CheckState {
        let states: Vec<CheckState> = section.modules().iter().map(|m| self.module_state(*m)).collect();
        if states.iter().all(CheckState::is_checked) {
            CheckState::Checked
        } else if states.iter().all(|s| *s == CheckState::Unchecked) {
            CheckState::Unchecked
        } else {
            CheckState::Indeterminate
        }
    }

    pub fn all_selected(&self) -> bool {
        PermissionSection::ALL.iter().all(|s| self.section_state(*s).is_checked())
    }

    pub fn toggle_action(&mut self, module: PermissionModule, action: PermissionAction, on: bool) {
        self.granted.set(&permission_name(action, module), on);
        self.sync_sections();
    }

    pub fn toggle_module(&mut self, module: PermissionModule, on: bool) {
        for permission in module.permissions() {
            self.granted.set(&permission, on);
        }
        self.sync_sections();
    }

    pub fn toggle_section(&mut self, section: PermissionSection, on: bool) {
        for module in section.modules() {
            for permission in module.permissions() {
                self.granted.set(&permission, on);
            }
        }
        self.sync_sections();
    }

    pub fn select_all(&mut self, on: bool) {
        for section in PermissionSection::ALL {
            self.toggle_section(section, on);
        }
    }

    fn sync_sections(&mut self) {
        for section in PermissionSection::ALL {
            let any = section.modules().iter().any(|m| {
                m.permissions().iter().any(|p| self.granted.has(p))
            });
            self.granted.set(&section.permission(), any);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_permission_names() {
        assert_eq!(
            permission_name(PermissionAction::Update, PermissionModule::BranchDepLink),
            "can_update_branch_dep_link"
        );
        assert_eq!(PermissionSection::Setup.permission(), "can_access_setup");
        assert_eq!(PermissionModule::Users.permissions().len(), 5);
    }

    #[test]
    fn test_catalog_is_complete() {
        let all = all_permissions();
        assert_eq!(all.len(), 4 + 14 * 5);
        assert!(all.contains(&"can_view_logo_upload".to_string()));
        assert!(all.contains(&"can_access_report".to_string()));
    }

    #[test]
    fn test_capabilities_from_set() {
        let set = PermissionSet::new(["can_view_department", "can_delete_department"]);
        let caps = set.capabilities(PermissionModule::Department);
        assert!(caps.can_view && caps.can_delete);
        assert!(!caps.can_create && !caps.can_update);
        assert_eq!(set.capabilities(PermissionModule::Users), Capabilities::default());
    }

    #[test]
    fn test_from_page_permissions() {
        let sections: PagePermissions = serde_json::from_value(serde_json::json!({
            "setup": {
                "access": true,
                "pages": {
                    "department": {
                        "access": true,
                        "permissions": {"view": true, "create": false, "update": true, "delete": false}
                    }
                }
            },
            "reports": {"access": false, "pages": {}}
        }))
        .unwrap();
        let set = PermissionSet::from_page_permissions(&sections);
        assert!(set.has("can_access_setup"));
        assert!(set.has("can_access_department"));
        let caps = set.capabilities(PermissionModule::Department);
        assert!(caps.can_view && caps.can_update);
        assert!(!caps.can_create && !caps.can_delete);
        assert!(!set.can_access_section(PermissionSection::Report));
    }

    #[test]
    fn test_module_tri_state() {
        let mut tree = RightsTree::default();
        assert_eq!(tree.module_state(PermissionModule::Users), CheckState::Unchecked);

        tree.toggle_action(PermissionModule::Users, PermissionAction::View, true);
        assert_eq!(tree.module_state(PermissionModule::Users), CheckState::Indeterminate);
        assert_eq!(tree.section_state(PermissionSection::User), CheckState::Indeterminate);
        assert!(tree.granted().has("can_access_user"));

        tree.toggle_module(PermissionModule::Users, true);
        assert_eq!(tree.module_state(PermissionModule::Users), CheckState::Checked);
    }

    #[test]
    fn test_section_toggle_cascades() {
        let mut tree = RightsTree::default();
        tree.toggle_section(PermissionSection::Report, true);
        assert_eq!(tree.section_state(PermissionSection::Report), CheckState::Checked);
        assert!(tree.action_checked(PermissionModule::LogReport, PermissionAction::Delete));

        tree.toggle_action(PermissionModule::LogReport, PermissionAction::Delete, false);
        assert_eq!(tree.section_state(PermissionSection::Report), CheckState::Indeterminate);

        tree.toggle_section(PermissionSection::Report, false);
        assert_eq!(tree.section_state(PermissionSection::Report), CheckState::Unchecked);
        assert!(!tree.granted().has("can_access_report"));
    }

    #[test]
    fn test_select_all() {
        let mut tree = RightsTree::default();
        tree.select_all(true);
        assert!(tree.all_selected());
        assert_eq!(tree.granted().len(), all_permissions().len());
        tree.select_all(false);
        assert!(tree.granted().is_empty());
    }

    #[test]
    fn test_loaded_permissions_sync_sections() {
        let tree = RightsTree::new(PermissionSet::new(["can_view_data_entry"]));
        assert!(tree.granted().has("can_access_data"));
        assert!(!tree.granted().has("can_access_setup"));
    }
}
