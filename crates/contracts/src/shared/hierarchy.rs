//! Division -> department -> sub-department cascade.
//!
//! [`HierarchyCascade`] is the single state machine behind every cascading
//! selector in the dashboard. Each selection that needs a fetch returns a
//! [`Ticket`]; a response is applied only when its ticket is still current, so
//! answers to superseded selections are dropped instead of overwriting newer
//! state.

use serde::{Deserialize, Serialize};

use super::fields::FieldDescriptor;

pub const DIVISION_PLACEHOLDER: &str = "Select Division/Branch";
pub const DEPARTMENT_PLACEHOLDER: &str = "Select Department";
pub const SUB_DEPARTMENT_PLACEHOLDER: &str = "Select Sub Department";

// ============================================================================
// Wire types (GET /api/data-entry/get_hierarchy/)
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HierarchyBranch {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub departments: Vec<HierarchyDepartment>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HierarchyDepartment {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub sub_departments: Vec<HierarchySubDepartment>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HierarchySubDepartment {
    pub id: i64,
    pub name: String,
}

// ============================================================================
// Selector state
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorState {
    pub placeholder: &'static str,
    pub options: Vec<SelectOption>,
    pub selected: Option<i64>,
    pub enabled: bool,
    pub loading: bool,
}

impl SelectorState {
    fn new(placeholder: &'static str) -> Self {
        Self {
            placeholder,
            options: Vec::new(),
            selected: None,
            enabled: false,
            loading: false,
        }
    }

    /// Back to placeholder-only and disabled.
    fn clear(&mut self) {
        self.options.clear();
        self.selected = None;
        self.enabled = false;
        self.loading = false;
    }

    /// Replace the option list. An empty list leaves the selector disabled.
    fn populate(&mut self, options: Vec<SelectOption>) {
        self.enabled = !options.is_empty();
        self.options = options;
        self.loading = false;
        if let Some(id) = self.selected {
            if !self.options.iter().any(|o| o.id == id) {
                self.selected = None;
            }
        }
    }

    /// Store `id` if it is one of the current options; anything else clears
    /// the selection. Returns whether an option is now selected.
    fn choose(&mut self, id: Option<i64>) -> bool {
        self.selected = id.filter(|id| self.options.iter().any(|o| o.id == *id));
        self.selected.is_some()
    }

    pub fn selected_name(&self) -> Option<&str> {
        let id = self.selected?;
        self.options.iter().find(|o| o.id == id).map(|o| o.name.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Division,
    Department,
    SubDepartment,
    Fields,
}

/// Proof that a fetch was issued for a given selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    pub level: Level,
    generation: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    Applied,
    /// The response belonged to a superseded selection and was ignored.
    Stale,
}

// ============================================================================
// Cascade
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct HierarchyCascade {
    pub division: SelectorState,
    pub department: SelectorState,
    pub sub_department: SelectorState,
    pub fields: Vec<FieldDescriptor>,
    pub fields_loading: bool,
    generation: u64,
}

impl Default for HierarchyCascade {
    fn default() -> Self {
        Self::new()
    }
}

impl HierarchyCascade {
    pub fn new() -> Self {
        Self {
            division: SelectorState::new(DIVISION_PLACEHOLDER),
            department: SelectorState::new(DEPARTMENT_PLACEHOLDER),
            sub_department: SelectorState::new(SUB_DEPARTMENT_PLACEHOLDER),
            fields: Vec::new(),
            fields_loading: false,
            generation: 0,
        }
    }

    fn issue(&mut self, level: Level) -> Ticket {
        self.generation += 1;
        Ticket {
            level,
            generation: self.generation,
        }
    }

    fn is_current(&self, ticket: Ticket) -> bool {
        ticket.generation == self.generation
    }

    fn clear_below(&mut self, level: Level) {
        if level == Level::Division {
            self.department.clear();
        }
        if matches!(level, Level::Division | Level::Department) {
            self.sub_department.clear();
        }
        self.fields.clear();
        self.fields_loading = false;
    }

    pub fn selection(&self) -> (Option<i64>, Option<i64>, Option<i64>) {
        (
            self.division.selected,
            self.department.selected,
            self.sub_department.selected,
        )
    }

    /// All three levels chosen.
    pub fn is_complete(&self) -> bool {
        let (a, b, c) = self.selection();
        a.is_some() && b.is_some() && c.is_some()
    }

    pub fn begin_load_divisions(&mut self) -> Ticket {
        self.division.loading = true;
        self.issue(Level::Division)
    }

    pub fn apply_divisions(&mut self, ticket: Ticket, branches: &[HierarchyBranch]) -> Applied {
        if !self.is_current(ticket) {
            return Applied::Stale;
        }
        self.division.populate(
            branches
                .iter()
                .map(|b| SelectOption {
                    id: b.id,
                    name: b.name.clone(),
                })
                .collect(),
        );
        Applied::Applied
    }

    /// Choose a division. Departments, sub-departments and fields are blanked
    /// immediately; a ticket is returned when departments must be fetched.
    pub fn select_division(&mut self, id: Option<i64>) -> Option<Ticket> {
        let chosen = self.division.choose(id);
        self.clear_below(Level::Division);
        let ticket = self.issue(Level::Department);
        chosen.then(|| {
            self.department.loading = true;
            ticket
        })
    }

    /// Populate departments of the selected division from a fresh hierarchy.
    pub fn apply_departments(&mut self, ticket: Ticket, branches: &[HierarchyBranch]) -> Applied {
        if !self.is_current(ticket) {
            return Applied::Stale;
        }
        let options = self
            .division
            .selected
            .and_then(|id| branches.iter().find(|b| b.id == id))
            .map(|b| {
                b.departments
                    .iter()
                    .map(|d| SelectOption {
                        id: d.id,
                        name: d.name.clone(),
                    })
                    .collect()
            })
            .unwrap_or_default();
        self.department.populate(options);
        Applied::Applied
    }

    /// Ids missing from the department options (including every id while the
    /// selector is disabled) clear the selection and issue no fetch.
    pub fn select_department(&mut self, id: Option<i64>) -> Option<Ticket> {
        let chosen = self.department.choose(id);
        self.clear_below(Level::Department);
        let ticket = self.issue(Level::SubDepartment);
        chosen.then(|| {
            self.sub_department.loading = true;
            ticket
        })
    }

    pub fn apply_sub_departments(&mut self, ticket: Ticket, branches: &[HierarchyBranch]) -> Applied {
        if !self.is_current(ticket) {
            return Applied::Stale;
        }
        let division = self.division.selected;
        let options = self
            .department
            .selected
            .and_then(|id| {
                branches
                    .iter()
                    .find(|b| Some(b.id) == division)?
                    .departments
                    .iter()
                    .find(|d| d.id == id)
            })
            .map(|d| {
                d.sub_departments
                    .iter()
                    .map(|s| SelectOption {
                        id: s.id,
                        name: s.name.clone(),
                    })
                    .collect()
            })
            .unwrap_or_default();
        self.sub_department.populate(options);
        Applied::Applied
    }

    pub fn select_sub_department(&mut self, id: Option<i64>) -> Option<Ticket> {
        let chosen = self.sub_department.choose(id);
        self.clear_below(Level::SubDepartment);
        let ticket = self.issue(Level::Fields);
        chosen.then(|| {
            self.fields_loading = true;
            ticket
        })
    }

    pub fn apply_fields(&mut self, ticket: Ticket, fields: Vec<FieldDescriptor>) -> Applied {
        if !self.is_current(ticket) {
            return Applied::Stale;
        }
        self.fields = fields;
        self.fields_loading = false;
        Applied::Applied
    }

    /// A fetch failed. Selectors below the failing level stay disabled.
    pub fn fail(&mut self, ticket: Ticket) -> Applied {
        if !self.is_current(ticket) {
            return Applied::Stale;
        }
        match ticket.level {
            Level::Division => self.division.clear(),
            Level::Department => self.department.clear(),
            Level::SubDepartment => self.sub_department.clear(),
            Level::Fields => {
                self.fields.clear();
                self.fields_loading = false;
            }
        }
        Applied::Applied
    }

    /// Clear every level below the division list, keeping the loaded divisions.
    pub fn reset(&mut self) {
        self.division.selected = None;
        self.clear_below(Level::Division);
        self.generation += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::fields::{FieldDataType, FieldRequirement};

    fn hierarchy() -> Vec<HierarchyBranch> {
        vec![
            HierarchyBranch {
                id: 1,
                name: "North".into(),
                departments: vec![HierarchyDepartment {
                    id: 10,
                    name: "Finance".into(),
                    sub_departments: vec![
                        HierarchySubDepartment { id: 5, name: "Payables".into() },
                        HierarchySubDepartment { id: 6, name: "Receivables".into() },
                    ],
                }],
            },
            HierarchyBranch {
                id: 2,
                name: "Empty".into(),
                departments: vec![],
            },
        ]
    }

    fn loaded() -> HierarchyCascade {
        let mut cascade = HierarchyCascade::new();
        let ticket = cascade.begin_load_divisions();
        cascade.apply_divisions(ticket, &hierarchy());
        cascade
    }

    #[test]
    fn test_initial_state() {
        let cascade = HierarchyCascade::new();
        assert!(!cascade.department.enabled);
        assert!(!cascade.sub_department.enabled);
        assert_eq!(cascade.department.placeholder, DEPARTMENT_PLACEHOLDER);
    }

    #[test]
    fn test_full_cascade() {
        let mut cascade = loaded();
        assert!(cascade.division.enabled);
        assert_eq!(cascade.division.options.len(), 2);

        let t = cascade.select_division(Some(1)).unwrap();
        assert!(cascade.department.loading);
        assert_eq!(cascade.apply_departments(t, &hierarchy()), Applied::Applied);
        assert!(cascade.department.enabled);

        let t = cascade.select_department(Some(10)).unwrap();
        cascade.apply_sub_departments(t, &hierarchy());
        assert_eq!(cascade.sub_department.options.len(), 2);

        let t = cascade.select_sub_department(Some(5)).unwrap();
        let fields = vec![FieldDescriptor::new(
            "Amount",
            FieldDataType::Numeric,
            FieldRequirement::Essential,
        )];
        cascade.apply_fields(t, fields);
        assert_eq!(cascade.fields.len(), 1);
        assert!(cascade.is_complete());
        assert_eq!(cascade.sub_department.selected_name(), Some("Payables"));
    }

    #[test]
    fn test_division_without_departments_stays_disabled() {
        let mut cascade = loaded();
        let t = cascade.select_division(Some(2)).unwrap();
        cascade.apply_departments(t, &hierarchy());
        assert!(cascade.department.options.is_empty());
        assert!(!cascade.department.enabled);
        assert!(!cascade.department.loading);
    }

    #[test]
    fn test_reselect_clears_descendants() {
        let mut cascade = loaded();
        let t = cascade.select_division(Some(1)).unwrap();
        cascade.apply_departments(t, &hierarchy());
        let t = cascade.select_department(Some(10)).unwrap();
        cascade.apply_sub_departments(t, &hierarchy());
        let t = cascade.select_sub_department(Some(5)).unwrap();
        cascade.apply_fields(t, vec![FieldDescriptor::new("X", FieldDataType::Date, FieldRequirement::Optional)]);

        cascade.select_division(Some(2));
        assert_eq!(cascade.department.selected, None);
        assert!(!cascade.sub_department.enabled);
        assert!(cascade.sub_department.options.is_empty());
        assert!(cascade.fields.is_empty());
    }

    #[test]
    fn test_stale_response_is_ignored() {
        let mut cascade = loaded();
        let first = cascade.select_division(Some(1)).unwrap();
        let second = cascade.select_division(Some(2)).unwrap();

        // The answer for division 1 arrives after division 2 was chosen.
        assert_eq!(cascade.apply_departments(first, &hierarchy()), Applied::Stale);
        assert!(cascade.department.options.is_empty());

        assert_eq!(cascade.apply_departments(second, &hierarchy()), Applied::Applied);
        assert!(!cascade.department.enabled);
    }

    #[test]
    fn test_stale_fields_are_ignored() {
        let mut cascade = loaded();
        let t = cascade.select_division(Some(1)).unwrap();
        cascade.apply_departments(t, &hierarchy());
        let t = cascade.select_department(Some(10)).unwrap();
        cascade.apply_sub_departments(t, &hierarchy());
        let old = cascade.select_sub_department(Some(5)).unwrap();
        let new = cascade.select_sub_department(Some(6)).unwrap();
        let stale = vec![FieldDescriptor::new("Old", FieldDataType::Date, FieldRequirement::Optional)];
        assert_eq!(cascade.apply_fields(old, stale), Applied::Stale);
        assert!(cascade.fields.is_empty());
        assert_eq!(cascade.apply_fields(new, vec![]), Applied::Applied);
    }

    #[test]
    fn test_failure_leaves_downstream_disabled() {
        let mut cascade = loaded();
        let t = cascade.select_division(Some(1)).unwrap();
        assert_eq!(cascade.fail(t), Applied::Applied);
        assert!(!cascade.department.enabled);
        assert!(!cascade.department.loading);
        assert!(!cascade.sub_department.enabled);
    }

    #[test]
    fn test_clearing_selection_issues_no_fetch() {
        let mut cascade = loaded();
        assert!(cascade.select_division(None).is_none());
        assert!(!cascade.department.loading);
    }

    #[test]
    fn test_shared_department_uses_selected_division() {
        let branches = vec![
            HierarchyBranch {
                id: 1,
                name: "North".into(),
                departments: vec![HierarchyDepartment {
                    id: 10,
                    name: "Finance".into(),
                    sub_departments: vec![HierarchySubDepartment { id: 5, name: "Payables".into() }],
                }],
            },
            HierarchyBranch {
                id: 2,
                name: "South".into(),
                departments: vec![HierarchyDepartment {
                    id: 10,
                    name: "Finance".into(),
                    sub_departments: vec![HierarchySubDepartment { id: 6, name: "Audit".into() }],
                }],
            },
        ];
        let mut cascade = HierarchyCascade::new();
        let t = cascade.begin_load_divisions();
        cascade.apply_divisions(t, &branches);
        let t = cascade.select_division(Some(2)).unwrap();
        cascade.apply_departments(t, &branches);
        let t = cascade.select_department(Some(10)).unwrap();
        cascade.apply_sub_departments(t, &branches);
        let ids: Vec<i64> = cascade.sub_department.options.iter().map(|o| o.id).collect();
        assert_eq!(ids, vec![6]);
    }

    #[test]
    fn test_unknown_ids_are_rejected() {
        let mut cascade = loaded();
        assert!(cascade.select_division(Some(99)).is_none());
        assert_eq!(cascade.division.selected, None);

        // Division 2 has no departments, so the department selector is disabled.
        let t = cascade.select_division(Some(2)).unwrap();
        cascade.apply_departments(t, &hierarchy());
        assert!(cascade.select_department(Some(99)).is_none());
        assert_eq!(cascade.department.selected, None);
        assert!(!cascade.sub_department.loading);

        let t = cascade.select_division(Some(1)).unwrap();
        cascade.apply_departments(t, &hierarchy());
        let t = cascade.select_department(Some(10)).unwrap();
        cascade.apply_sub_departments(t, &hierarchy());
        assert!(cascade.select_sub_department(Some(7)).is_none());
        assert_eq!(cascade.sub_department.selected, None);
        assert!(!cascade.fields_loading);
        assert!(!cascade.is_complete());
    }

    #[test]
    fn test_reset_invalidates_pending_requests() {
        let mut cascade = loaded();
        let t = cascade.select_division(Some(1)).unwrap();
        cascade.reset();
        assert_eq!(cascade.apply_departments(t, &hierarchy()), Applied::Stale);
        assert_eq!(cascade.division.options.len(), 2);
        assert_eq!(cascade.division.selected, None);
    }
}
