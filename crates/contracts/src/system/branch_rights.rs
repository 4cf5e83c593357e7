//! Per-user branch/department/sub-department assignments.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// `GET /api/user/{id}/branch-departments/`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BranchRightsResponse {
    #[serde(default)]
    pub branches: Vec<RightsBranch>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RightsBranch {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub departments: Vec<RightsDepartment>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RightsDepartment {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub subdepartments: Vec<RightsSubDepartment>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RightsSubDepartment {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub assigned: bool,
}

/// One checked box in the rights tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Assignment {
    pub branch_id: i64,
    pub department_id: i64,
    pub subdepartment_id: i64,
}

/// `POST /api/user/{id}/branch-departments/`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SaveBranchRightsRequest {
    pub subdepartments: Vec<Assignment>,
}

/// Editable selection over a [`BranchRightsResponse`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BranchRightsSelection {
    selected: BTreeSet<Assignment>,
}

impl BranchRightsSelection {
    /// Start from what the backend reports as assigned.
    pub fn from_response(response: &BranchRightsResponse) -> Self {
        let selected = response
            .branches
            .iter()
            .flat_map(|b| {
                b.departments.iter().flat_map(move |d| {
                    d.subdepartments.iter().filter(|s| s.assigned).map(move |s| Assignment {
                        branch_id: b.id,
                        department_id: d.id,
                        subdepartment_id: s.id,
                    })
                })
            })
            .collect();
        Self { selected }
    }

    pub fn is_selected(&self, assignment: &Assignment) -> bool {
        self.selected.contains(assignment)
    }

    pub fn toggle(&mut self, assignment: Assignment, on: bool) {
        if on {
            self.selected.insert(assignment);
        } else {
            self.selected.remove(&assignment);
        }
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn to_request(&self) -> SaveBranchRightsRequest {
        SaveBranchRightsRequest {
            subdepartments: self.selected.iter().copied().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn response() -> BranchRightsResponse {
        serde_json::from_value(json!({
            "branches": [{
                "id": 1, "name": "North",
                "departments": [{
                    "id": 10, "name": "Finance",
                    "subdepartments": [
                        {"id": 5, "name": "Payables", "assigned": true},
                        {"id": 6, "name": "Receivables", "assigned": false}
                    ]
                }]
            }]
        }))
        .unwrap()
    }

    #[test]
    fn test_initial_selection_from_assigned() {
        let selection = BranchRightsSelection::from_response(&response());
        assert_eq!(selection.len(), 1);
        assert!(selection.is_selected(&Assignment {
            branch_id: 1,
            department_id: 10,
            subdepartment_id: 5
        }));
    }

    #[test]
    fn test_toggle_and_request() {
        let mut selection = BranchRightsSelection::from_response(&response());
        let receivables = Assignment {
            branch_id: 1,
            department_id: 10,
            subdepartment_id: 6,
        };
        selection.toggle(receivables, true);
        let body = serde_json::to_value(selection.to_request()).unwrap();
        assert_eq!(body["subdepartments"].as_array().unwrap().len(), 2);
        assert_eq!(body["subdepartments"][1]["subdepartment_id"], 6);

        selection.toggle(receivables, false);
        assert_eq!(selection.to_request().subdepartments.len(), 1);
    }
}
