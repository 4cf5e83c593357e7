use serde::{Deserialize, Serialize};

/// What the current user may do with a record (or with a whole screen).
///
/// Records embed these as flat `can_*` flags; absent flags mean "not allowed".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Capabilities {
    #[serde(default)]
    pub can_view: bool,
    #[serde(default)]
    pub can_create: bool,
    #[serde(default)]
    pub can_update: bool,
    #[serde(default)]
    pub can_delete: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RowAction {
    View,
    Edit,
    Delete,
}

impl RowAction {
    pub fn label(&self) -> &'static str {
        match self {
            RowAction::View => "View",
            RowAction::Edit => "Edit",
            RowAction::Delete => "Delete",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            RowAction::View => "eye",
            RowAction::Edit => "edit",
            RowAction::Delete => "trash",
        }
    }
}

impl Capabilities {
    pub const ALL: Capabilities = Capabilities {
        can_view: true,
        can_create: true,
        can_update: true,
        can_delete: true,
    };

    /// Row controls to attach, in display order. Disallowed actions are omitted.
    pub fn row_actions(&self) -> Vec<RowAction> {
        let mut actions = Vec::new();
        if self.can_view {
            actions.push(RowAction::View);
        }
        if self.can_update {
            actions.push(RowAction::Edit);
        }
        if self.can_delete {
            actions.push(RowAction::Delete);
        }
        actions
    }

    pub fn allows(&self, action: RowAction) -> bool {
        match action {
            RowAction::View => self.can_view,
            RowAction::Edit => self.can_update,
            RowAction::Delete => self.can_delete,
        }
    }

    /// Intersection of two capability sets, e.g. screen permission and record flags.
    pub fn and(self, other: Capabilities) -> Capabilities {
        Capabilities {
            can_view: self.can_view && other.can_view,
            can_create: self.can_create && other.can_create,
            can_update: self.can_update && other.can_update,
            can_delete: self.can_delete && other.can_delete,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Deserialize)]
    struct Record {
        #[allow(dead_code)]
        id: i64,
        #[serde(flatten)]
        caps: Capabilities,
    }

    #[test]
    fn test_no_flags_means_empty_action_cell() {
        let record: Record = serde_json::from_value(json!({"id": 1})).unwrap();
        assert_eq!(record.caps, Capabilities::default());
        assert!(record.caps.row_actions().is_empty());
    }

    #[test]
    fn test_all_false_means_empty_action_cell() {
        let record: Record = serde_json::from_value(json!({
            "id": 1, "can_view": false, "can_update": false, "can_delete": false
        }))
        .unwrap();
        assert!(record.caps.row_actions().is_empty());
    }

    #[test]
    fn test_actions_in_order() {
        let record: Record =
            serde_json::from_value(json!({"id": 1, "can_delete": true, "can_view": true})).unwrap();
        assert_eq!(record.caps.row_actions(), vec![RowAction::View, RowAction::Delete]);
        assert!(!record.caps.allows(RowAction::Edit));
    }

    #[test]
    fn test_and() {
        let screen = Capabilities {
            can_view: true,
            can_update: true,
            ..Default::default()
        };
        assert_eq!(screen.and(Capabilities::ALL), screen);
        assert!(screen.and(Capabilities::default()).row_actions().is_empty());
    }
}
