//! Linear undo/redo log of whole-state snapshots.
//!
//! The log is a flat vector plus a cursor. Committing after an undo drops the
//! snapshots past the cursor, so there is never more than one redo branch.

use crate::domain::PricingConfiguration;
use crate::error::PricingError;

/// Snapshot history of price configurations for one editing session.
pub type ConfigurationEditHistory = EditHistory<PricingConfiguration>;

/// Snapshot log with a cursor at the active state.
///
/// Invariants: the log is never empty and `cursor < snapshots.len()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditHistory<T> {
    snapshots: Vec<T>,
    cursor: usize,
}

impl<T: Clone> EditHistory<T> {
    /// Start a history whose only snapshot is `initial`.
    pub fn new(initial: T) -> Self {
        EditHistory {
            snapshots: vec![initial],
            cursor: 0,
        }
    }

    /// The active snapshot.
    pub fn current(&self) -> &T {
        &self.snapshots[self.cursor]
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// A history always holds at least its initial snapshot.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.snapshots.len()
    }

    /// Drop everything after the cursor, append `snapshot` and make it active.
    pub fn commit(&mut self, snapshot: T) {
        let discarded = self.snapshots.len() - (self.cursor + 1);
        self.snapshots.truncate(self.cursor + 1);
        self.snapshots.push(snapshot);
        self.cursor = self.snapshots.len() - 1;
        tracing::debug!(
            cursor = self.cursor,
            snapshots = self.snapshots.len(),
            discarded,
            "Committed snapshot"
        );
    }

    /// Step back one snapshot.
    ///
    /// # Errors
    /// `NothingToUndo` at the first snapshot; the cursor is left in place.
    pub fn undo(&mut self) -> Result<&T, PricingError> {
        if !self.can_undo() {
            return Err(PricingError::NothingToUndo);
        }
        self.cursor -= 1;
        tracing::debug!(cursor = self.cursor, "Undo");
        Ok(self.current())
    }

    /// Step forward one snapshot.
    ///
    /// # Errors
    /// `NothingToRedo` at the last snapshot; the cursor is left in place.
    pub fn redo(&mut self) -> Result<&T, PricingError> {
        if !self.can_redo() {
            return Err(PricingError::NothingToRedo);
        }
        self.cursor += 1;
        tracing::debug!(cursor = self.cursor, "Redo");
        Ok(self.current())
    }

    /// Forget every snapshot and restart from `initial`.
    pub fn reset(&mut self, initial: T) {
        self.snapshots = vec![initial];
        self.cursor = 0;
        tracing::debug!("History reset");
    }

    pub fn snapshots(&self) -> &[T] {
        &self.snapshots
    }

    /// Consume the history, returning the active snapshot.
    pub fn into_current(mut self) -> T {
        self.snapshots.swap_remove(self.cursor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_history() {
        let history = EditHistory::new("A");
        assert_eq!(*history.current(), "A");
        assert_eq!(history.len(), 1);
        assert!(!history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn test_commit_advances_cursor() {
        let mut history = EditHistory::new("A");
        history.commit("B");
        history.commit("C");
        assert_eq!(history.cursor(), 2);
        assert_eq!(*history.current(), "C");
        assert!(history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn test_undo_redo() {
        let mut history = EditHistory::new("A");
        history.commit("B");

        assert_eq!(*history.undo().unwrap(), "A");
        assert!(history.can_redo());
        assert_eq!(*history.redo().unwrap(), "B");
        assert!(!history.can_redo());
    }

    #[test]
    fn test_undo_at_start_fails() {
        let mut history = EditHistory::new("A");
        assert_eq!(history.undo(), Err(PricingError::NothingToUndo));
        assert_eq!(history.cursor(), 0);
    }

    #[test]
    fn test_redo_at_end_fails() {
        let mut history = EditHistory::new("A");
        history.commit("B");
        assert_eq!(history.redo(), Err(PricingError::NothingToRedo));
        assert_eq!(history.cursor(), 1);
    }

    #[test]
    fn test_commit_after_undo_discards_redo_branch() {
        let mut history = EditHistory::new("A");
        history.commit("B");
        history.commit("C");
        history.undo().unwrap();
        history.commit("D");

        assert_eq!(history.snapshots(), &["A", "B", "D"]);
        assert_eq!(history.cursor(), 2);
        assert!(!history.can_redo());
    }

    #[test]
    fn test_reset() {
        let mut history = EditHistory::new("A");
        history.commit("B");
        history.reset("Z");
        assert_eq!(history.snapshots(), &["Z"]);
        assert!(!history.can_undo());
    }

    #[test]
    fn test_into_current() {
        let mut history = EditHistory::new("A".to_string());
        history.commit("B".to_string());
        history.commit("C".to_string());
        history.undo().unwrap();
        assert_eq!(history.into_current(), "B");
    }
}
