/// A delete waiting for the user's confirmation.
///
/// The target is only handed out by [`PendingDelete::confirm`], so a DELETE
/// cannot be issued without passing through the confirmation dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingDelete<T> {
    target: Option<T>,
}

impl<T> Default for PendingDelete<T> {
    fn default() -> Self {
        Self { target: None }
    }
}

impl<T> PendingDelete<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open the confirmation for `target`, replacing any earlier one.
    pub fn request(&mut self, target: T) {
        self.target = Some(target);
    }

    pub fn is_open(&self) -> bool {
        self.target.is_some()
    }

    pub fn cancel(&mut self) {
        self.target = None;
    }

    /// Close the dialog and release the target to delete.
    pub fn confirm(&mut self) -> Option<T> {
        self.target.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cancel_releases_nothing() {
        let mut pending = PendingDelete::new();
        pending.request(7);
        assert!(pending.is_open());
        pending.cancel();
        assert_eq!(pending.confirm(), None);
    }

    #[test]
    fn test_confirm_once() {
        let mut pending = PendingDelete::new();
        assert_eq!(pending.confirm(), None::<i64>);
        pending.request(3);
        pending.request(4);
        assert_eq!(pending.confirm(), Some(4));
        assert!(!pending.is_open());
        assert_eq!(pending.confirm(), None);
    }
}
