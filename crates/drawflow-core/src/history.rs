//! Snapshot history backing undo/redo.

/// How a commit records the new snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CommitMode {
    /// Drop everything after the cursor and add a new undo step.
    #[default]
    Append,
    /// Replace the snapshot at the cursor in place.
    ///
    /// Used for the intermediate updates of a drag so that a whole gesture
    /// collapses into one undo step.
    Overwrite,
}

/// An ordered list of snapshots with a cursor.
///
/// `undo` and `redo` only move the cursor; `commit` is the only operation
/// that changes the entries. The cursor always points at a valid entry.
#[derive(Debug, Clone)]
pub struct History<T> {
    entries: Vec<T>,
    cursor: usize,
    /// Maximum number of entries to keep (`None` = unbounded).
    limit: Option<usize>,
}

impl<T: Clone> History<T> {
    /// Start a history with one initial snapshot.
    pub fn new(initial: T) -> Self {
        Self {
            entries: vec![initial],
            cursor: 0,
            limit: None,
        }
    }

    /// Start a history that keeps at most `limit` snapshots.
    ///
    /// The oldest snapshots are dropped once the limit is exceeded.
    pub fn with_limit(initial: T, limit: usize) -> Self {
        Self {
            limit: Some(limit.max(1)),
            ..Self::new(initial)
        }
    }

    /// The snapshot under the cursor.
    pub fn current(&self) -> &T {
        &self.entries[self.cursor]
    }

    /// Record `state`.
    pub fn commit(&mut self, state: T, mode: CommitMode) {
        match mode {
            CommitMode::Overwrite => {
                self.entries[self.cursor] = state;
            }
            CommitMode::Append => {
                self.entries.truncate(self.cursor + 1);
                self.entries.push(state);
                self.cursor += 1;

                if let Some(limit) = self.limit {
                    if self.entries.len() > limit {
                        let excess = self.entries.len() - limit;
                        self.entries.drain(..excess);
                        self.cursor -= excess;
                    }
                }
            }
        }
        log::debug!(
            "History commit ({:?}): cursor {} of {}",
            mode,
            self.cursor,
            self.entries.len()
        );
    }

    /// Record the snapshot produced by `update` from the current one.
    pub fn commit_with(&mut self, update: impl FnOnce(&T) -> T, mode: CommitMode) {
        let next = update(self.current());
        self.commit(next, mode);
    }

    /// Step back one snapshot.
    /// Returns true if the cursor moved, false if already at the oldest.
    pub fn undo(&mut self) -> bool {
        if self.cursor > 0 {
            self.cursor -= 1;
            true
        } else {
            false
        }
    }

    /// Step forward one snapshot.
    /// Returns true if the cursor moved, false if already at the newest.
    pub fn redo(&mut self) -> bool {
        if self.cursor + 1 < self.entries.len() {
            self.cursor += 1;
            true
        } else {
            false
        }
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }

    /// Number of snapshots, including the initial one.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Drop every snapshot and start over from `initial`.
    pub fn reset(&mut self, initial: T) {
        self.entries.clear();
        self.entries.push(initial);
        self.cursor = 0;
    }
}
