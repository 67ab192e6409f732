//! Design picker state: the signed-in user's stored designs, a selection and
//! a pending delete confirmation.

use crate::adapter::DesignSummary;
use crate::types::DesignId;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DesignPicker {
    designs: Vec<DesignSummary>,
    selected: usize,
    /// Set by the first delete press; the second one deletes
    confirm_delete: bool,
}

impl DesignPicker {
    pub fn new(designs: Vec<DesignSummary>) -> Self {
        Self {
            designs,
            selected: 0,
            confirm_delete: false,
        }
    }

    pub fn designs(&self) -> &[DesignSummary] {
        &self.designs
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn selected_design(&self) -> Option<&DesignSummary> {
        self.designs.get(self.selected)
    }

    pub fn confirming_delete(&self) -> bool {
        self.confirm_delete
    }

    /// Move the selection, clamped to the list
    pub fn move_by(&mut self, delta: i8) {
        self.confirm_delete = false;
        let last = self.designs.len().saturating_sub(1);
        self.selected = self
            .selected
            .saturating_add_signed(isize::from(delta))
            .min(last);
    }

    /// First call asks for confirmation; returns the id to delete on the second
    pub fn request_delete(&mut self) -> Option<DesignId> {
        let id = self.selected_design()?.id.clone();
        if self.confirm_delete {
            self.confirm_delete = false;
            Some(id)
        } else {
            self.confirm_delete = true;
            None
        }
    }

    /// Drop a deleted design from the list
    pub fn remove(&mut self, id: &DesignId) {
        self.designs.retain(|d| &d.id != id);
        self.confirm_delete = false;
        self.selected = self.selected.min(self.designs.len().saturating_sub(1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(id: &str, name: &str) -> DesignSummary {
        DesignSummary {
            id: DesignId::new(id),
            name: name.to_string(),
            created_at: 0,
            updated_at: None,
        }
    }

    fn picker() -> DesignPicker {
        DesignPicker::new(vec![
            summary("a", "Skyline"),
            summary("b", "Castle"),
            summary("c", "Snake"),
        ])
    }

    #[test]
    fn selection_is_clamped() {
        let mut p = picker();
        p.move_by(-1);
        assert_eq!(p.selected(), 0);
        p.move_by(5);
        assert_eq!(p.selected(), 2);
        assert_eq!(p.selected_design().map(|d| d.name.as_str()), Some("Snake"));
    }

    #[test]
    fn delete_needs_two_presses() {
        let mut p = picker();
        p.move_by(1);
        assert_eq!(p.request_delete(), None);
        assert!(p.confirming_delete());
        assert_eq!(p.request_delete(), Some(DesignId::new("b")));
        assert!(!p.confirming_delete());
    }

    #[test]
    fn moving_cancels_pending_delete() {
        let mut p = picker();
        assert_eq!(p.request_delete(), None);
        p.move_by(1);
        assert_eq!(p.request_delete(), None);
    }

    #[test]
    fn remove_keeps_selection_in_range() {
        let mut p = picker();
        p.move_by(2);
        p.remove(&DesignId::new("c"));
        assert_eq!(p.designs().len(), 2);
        assert_eq!(p.selected(), 1);

        let mut empty = DesignPicker::new(Vec::new());
        assert_eq!(empty.request_delete(), None);
        assert!(empty.selected_design().is_none());
    }
}
