//! Numbered pagination controls.

/// Page size used by every paged table in the dashboard.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// `ceil(total_items / page_size)`; zero items means zero pages.
pub fn total_pages(total_items: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total_items.div_ceil(page_size)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageControl {
    Previous { target: usize, disabled: bool },
    Page { number: usize, active: bool },
    Next { target: usize, disabled: bool },
}

impl PageControl {
    pub fn label(&self) -> String {
        match self {
            PageControl::Previous { .. } => "Previous".to_string(),
            PageControl::Page { number, .. } => number.to_string(),
            PageControl::Next { .. } => "Next".to_string(),
        }
    }

    /// Page to load when the control is clicked, `None` when it is inert.
    pub fn target(&self) -> Option<usize> {
        match *self {
            PageControl::Previous { target, disabled } | PageControl::Next { target, disabled } => {
                (!disabled).then_some(target)
            }
            PageControl::Page { number, active } => (!active).then_some(number),
        }
    }

    pub fn is_disabled(&self) -> bool {
        match *self {
            PageControl::Previous { disabled, .. } | PageControl::Next { disabled, .. } => disabled,
            PageControl::Page { .. } => false,
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, PageControl::Page { active: true, .. })
    }
}

/// Current position in a paged result. Pages are 1-based, matching the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    pub current: usize,
    pub total_pages: usize,
}

impl Pager {
    pub fn new(current: usize, total_items: usize, page_size: usize) -> Self {
        Self::with_pages(current, total_pages(total_items, page_size))
    }

    pub fn with_pages(current: usize, total_pages: usize) -> Self {
        Self {
            current: current.max(1),
            total_pages,
        }
    }

    /// Previous, one control per page, Next.
    pub fn controls(&self) -> Vec<PageControl> {
        let mut controls = Vec::with_capacity(self.total_pages + 2);
        controls.push(PageControl::Previous {
            target: self.current.saturating_sub(1).max(1),
            disabled: self.current <= 1,
        });
        controls.extend((1..=self.total_pages).map(|number| PageControl::Page {
            number,
            active: number == self.current,
        }));
        controls.push(PageControl::Next {
            target: self.current + 1,
            disabled: self.current >= self.total_pages,
        });
        controls
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, 10), 0);
        assert_eq!(total_pages(1, 10), 1);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(23, 10), 3);
        assert_eq!(total_pages(5, 0), 0);
    }

    #[test]
    fn test_controls_for_23_items() {
        let controls = Pager::new(1, 23, 10).controls();
        assert_eq!(controls.len(), 5);
        assert_eq!(controls[0], PageControl::Previous { target: 1, disabled: true });
        assert!(controls[1].is_active());
        assert_eq!(controls[2], PageControl::Page { number: 2, active: false });
        assert_eq!(controls[4], PageControl::Next { target: 2, disabled: false });
    }

    #[test]
    fn test_last_page_disables_next() {
        let controls = Pager::new(3, 23, 10).controls();
        let next = controls.last().unwrap();
        assert!(next.is_disabled());
        assert_eq!(next.target(), None);
        assert_eq!(controls[0].target(), Some(2));
    }

    #[test]
    fn test_no_pages() {
        let controls = Pager::new(1, 0, 10).controls();
        assert_eq!(controls.len(), 2);
        assert!(controls.iter().all(PageControl::is_disabled));
    }

    #[test]
    fn test_active_page_is_not_a_target() {
        let controls = Pager::with_pages(2, 3).controls();
        assert_eq!(controls[2].target(), None);
        assert_eq!(controls[3].target(), Some(3));
        assert_eq!(controls[3].label(), "3");
    }
}
