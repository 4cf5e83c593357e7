use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::domain::a002_department::Department;
use crate::domain::a003_sub_department::SubDepartment;

pub const LIST_ITEMS_KEY: &str = "results";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BranchDepartmentLink {
    pub id: i64,
    pub branch: i64,
    pub department: i64,
    #[serde(default)]
    pub sub_department: Option<i64>,
    #[serde(default = "default_active")]
    pub is_active: bool,
    #[serde(default)]
    pub branch_name: String,
    #[serde(default)]
    pub department_name: String,
    #[serde(default)]
    pub sub_department_name: Option<String>,
}

fn default_active() -> bool {
    true
}

/// Body of `POST /api/branch-department-links/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewLinkDto {
    pub branch: i64,
    pub department: i64,
    pub sub_department: i64,
    pub is_active: bool,
}

/// `(department, sub_department)` pair checked in the link modal.
pub type LinkKey = (i64, i64);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkOption {
    pub sub_department: i64,
    pub name: String,
    pub linked: bool,
}

/// A department and the sub-departments offered under it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepartmentGroup {
    pub department: i64,
    pub label: String,
    pub options: Vec<LinkOption>,
}

impl DepartmentGroup {
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}

/// Sub-departments of `branch` that already have a link.
pub fn linked_keys(branch: i64, links: &[BranchDepartmentLink]) -> BTreeSet<LinkKey> {
    links
        .iter()
        .filter(|link| link.branch == branch)
        .filter_map(|link| link.sub_department.map(|sub| (link.department, sub)))
        .collect()
}

/// Group sub-departments under their departments, in department order.
pub fn group_options(
    departments: &[Department],
    sub_departments: &[SubDepartment],
    linked: &BTreeSet<LinkKey>,
) -> Vec<DepartmentGroup> {
    departments
        .iter()
        .map(|department| DepartmentGroup {
            department: department.id,
            label: department.label(),
            options: sub_departments
                .iter()
                .filter(|sub| sub.department == department.id)
                .map(|sub| LinkOption {
                    sub_department: sub.id,
                    name: format!("{} - {}", sub.sub_department_id, sub.name),
                    linked: linked.contains(&(department.id, sub.id)),
                })
                .collect(),
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkPlan {
    Create(Vec<NewLinkDto>),
    /// Everything selected is linked already; reported as info, not error.
    NothingNew,
}

/// Decide which links to create. Already linked pairs are skipped.
pub fn plan_links(
    branch: Option<i64>,
    selected: &BTreeSet<LinkKey>,
    linked: &BTreeSet<LinkKey>,
    is_active: bool,
) -> Result<LinkPlan, String> {
    let branch = branch.ok_or_else(|| "Please select a branch first".to_string())?;
    if selected.is_empty() {
        return Err("Please select at least one sub-department".into());
    }
    let new_links: Vec<NewLinkDto> = selected
        .difference(linked)
        .map(|&(department, sub_department)| NewLinkDto {
            branch,
            department,
            sub_department,
            is_active,
        })
        .collect();
    if new_links.is_empty() {
        Ok(LinkPlan::NothingNew)
    } else {
        Ok(LinkPlan::Create(new_links))
    }
}

pub fn created_message(count: usize) -> String {
    format!("Successfully linked {} sub-department(s)", count)
}

pub const ALL_LINKED_MESSAGE: &str = "All selected sub-departments are already linked";

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn link(branch: i64, department: i64, sub: Option<i64>) -> BranchDepartmentLink {
        serde_json::from_value(json!({
            "id": 1, "branch": branch, "department": department, "sub_department": sub,
            "branch_name": "North", "department_name": "Finance"
        }))
        .unwrap()
    }

    #[test]
    fn test_linked_keys_for_branch() {
        let links = vec![link(1, 10, Some(5)), link(2, 10, Some(6)), link(1, 11, None)];
        let keys = linked_keys(1, &links);
        assert_eq!(keys.into_iter().collect::<Vec<_>>(), vec![(10, 5)]);
    }

    #[test]
    fn test_group_marks_linked() {
        let departments: Vec<Department> = serde_json::from_value(json!([
            {"id": 10, "department_id": "100", "name": "Finance"},
            {"id": 11, "department_id": "110", "name": "Legal"}
        ]))
        .unwrap();
        let subs: Vec<SubDepartment> = serde_json::from_value(json!([
            {"id": 5, "department": 10, "sub_department_id": "1", "name": "Payables"},
            {"id": 6, "department": 10, "sub_department_id": "2", "name": "Receivables"}
        ]))
        .unwrap();
        let linked = BTreeSet::from([(10, 5)]);
        let groups = group_options(&departments, &subs, &linked);
        assert_eq!(groups.len(), 2);
        assert!(groups[0].options[0].linked);
        assert!(!groups[0].options[1].linked);
        assert!(groups[1].is_empty());
        assert_eq!(groups[0].options[1].name, "2 - Receivables");
    }

    #[test]
    fn test_plan_only_new_links() {
        let linked = BTreeSet::from([(10, 5)]);
        assert_eq!(
            plan_links(None, &BTreeSet::from([(10, 6)]), &linked, true),
            Err("Please select a branch first".into())
        );
        assert_eq!(
            plan_links(Some(1), &BTreeSet::new(), &linked, true),
            Err("Please select at least one sub-department".into())
        );
        assert_eq!(
            plan_links(Some(1), &BTreeSet::from([(10, 5)]), &linked, true),
            Ok(LinkPlan::NothingNew)
        );
        match plan_links(Some(1), &BTreeSet::from([(10, 5), (10, 6)]), &linked, false).unwrap() {
            LinkPlan::Create(links) => {
                assert_eq!(links.len(), 1);
                assert_eq!(links[0].sub_department, 6);
                assert!(!links[0].is_active);
            }
            LinkPlan::NothingNew => panic!("expected new links"),
        }
        assert_eq!(created_message(2), "Successfully linked 2 sub-department(s)");
    }
}
