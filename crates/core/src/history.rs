//! History manager - bounded undo/redo stacks of whole-board snapshots
//!
//! Both stacks are ring buffers capped at [`HISTORY_LIMIT`] entries; pushing
//! onto a full stack evicts its oldest snapshot. Recording a new mutation
//! invalidates the redo stack, giving standard linear-history semantics.

use std::collections::VecDeque;

use crate::board::Board;
use crate::types::HISTORY_LIMIT;

/// Bounded stack that drops its oldest entry when full
#[derive(Debug, Clone, PartialEq, Eq)]
struct BoundedStack {
    entries: VecDeque<Board>,
    limit: usize,
}

impl BoundedStack {
    fn new(limit: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(limit),
            limit,
        }
    }

    fn push(&mut self, board: Board) {
        if self.limit == 0 {
            return;
        }
        if self.entries.len() == self.limit {
            self.entries.pop_front();
        }
        self.entries.push_back(board);
    }

    fn pop(&mut self) -> Option<Board> {
        self.entries.pop_back()
    }
}

/// Undo/redo state for one editing session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct History {
    undo: BoundedStack,
    redo: BoundedStack,
}

impl History {
    pub fn new() -> Self {
        Self::with_limit(HISTORY_LIMIT)
    }

    /// History keeping at most `limit` snapshots per stack
    pub fn with_limit(limit: usize) -> Self {
        Self {
            undo: BoundedStack::new(limit),
            redo: BoundedStack::new(limit),
        }
    }

    pub fn limit(&self) -> usize {
        self.undo.limit
    }

    /// Record the board as it was right before a mutation
    ///
    /// Call this immediately before committing a place, erase or clear. The
    /// redo stack is discarded.
    pub fn record_mutation(&mut self, before: &Board) {
        self.record_snapshot(before.clone());
    }

    /// Same as [`History::record_mutation`], taking an already-copied board
    pub fn record_snapshot(&mut self, before: Board) {
        self.undo.push(before);
        self.redo.entries.clear();
    }

    /// Step back one snapshot
    ///
    /// Returns `None` (nothing happens) when there is nothing to undo.
    /// Otherwise `current` moves onto the redo stack and the popped snapshot
    /// is returned as the new current board.
    pub fn undo(&mut self, current: &Board) -> Option<Board> {
        let previous = self.undo.pop()?;
        self.redo.push(current.clone());
        Some(previous)
    }

    /// Re-apply the most recently undone snapshot
    pub fn redo(&mut self, current: &Board) -> Option<Board> {
        let next = self.redo.pop()?;
        self.undo.push(current.clone());
        Some(next)
    }

    pub fn can_undo(&self) -> bool {
        !self.undo.entries.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo.entries.is_empty()
    }

    pub fn undo_len(&self) -> usize {
        self.undo.entries.len()
    }

    pub fn redo_len(&self) -> usize {
        self.redo.entries.len()
    }

    /// Undo snapshots, oldest first
    pub fn undo_snapshots(&self) -> impl Iterator<Item = &Board> + '_ {
        self.undo.entries.iter()
    }

    /// Redo snapshots, oldest first
    pub fn redo_snapshots(&self) -> impl Iterator<Item = &Board> + '_ {
        self.redo.entries.iter()
    }

    /// Forget everything, e.g. when a different design is loaded
    pub fn reset(&mut self) {
        self.undo.entries.clear();
        self.redo.entries.clear();
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}
