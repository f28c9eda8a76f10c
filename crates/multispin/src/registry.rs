//! Append-only spinner registry.
//!
//! The registry owns every [`SpinnerRecord`] and the reference count that
//! decides cursor visibility. It is only ever touched under the set's
//! registry lock and never performs I/O: each transition returns an outcome
//! describing what the caller must forward to the render loop or paint.

/// One registered spinner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpinnerRecord {
    /// Public handle, equal to the position in registration order.
    pub index: usize,
    /// Rows below the saved cursor anchor. Assigned once, never changes.
    pub line_offset: usize,
    /// Text painted next to the glyph or final marker.
    pub message: String,
    /// Painted by the render loop while true.
    pub active: bool,
}

/// Counts active spinners and reports the 0↔1 edges.
///
/// The cursor is hidden while the count is above zero; only the edges
/// produce terminal output.
#[derive(Debug, Default)]
pub struct CursorRefCount {
    active: usize,
}

impl CursorRefCount {
    /// Returns true on the 0 → 1 edge.
    fn acquire(&mut self) -> bool {
        self.active += 1;
        self.active == 1
    }

    /// Returns true on the 1 → 0 edge.
    fn release(&mut self) -> bool {
        debug_assert!(self.active > 0, "cursor released more often than acquired");
        self.active = self.active.saturating_sub(1);
        self.active == 0
    }

    pub fn count(&self) -> usize {
        self.active
    }
}

/// Result of a successful `start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Started {
    /// First active spinner: the cursor must be hidden.
    pub hide_cursor: bool,
}

/// Result of a successful `stop`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stopped {
    pub line_offset: usize,
    /// Last active spinner: cursor and attributes must be restored.
    pub show_cursor: bool,
}

/// Snapshot of an active row, taken for one repaint pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveRow {
    pub line_offset: usize,
    pub message: String,
}

#[derive(Debug, Default)]
pub struct Registry {
    records: Vec<SpinnerRecord>,
    cursor: CursorRefCount,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an inactive record and return its index.
    pub fn register(&mut self) -> usize {
        let index = self.records.len();
        self.records.push(SpinnerRecord {
            index,
            line_offset: index,
            message: String::new(),
            active: false,
        });
        index
    }

    /// Set the message and mark the record active.
    ///
    /// Starting an already active record only replaces its message and does
    /// not touch the reference count. Returns `None` for unknown indices.
    pub fn start(&mut self, index: usize, message: &str) -> Option<Started> {
        let record = self.records.get_mut(index)?;
        message.clone_into(&mut record.message);

        if record.active {
            return Some(Started { hide_cursor: false });
        }
        record.active = true;
        Some(Started {
            hide_cursor: self.cursor.acquire(),
        })
    }

    /// Replace the message without changing the active flag.
    pub fn set_message(&mut self, index: usize, message: &str) -> bool {
        match self.records.get_mut(index) {
            Some(record) => {
                message.clone_into(&mut record.message);
                true
            }
            None => false,
        }
    }

    /// Mark an active record inactive with its final message.
    ///
    /// Returns `None` when the index is unknown or the record is not active.
    pub fn stop(&mut self, index: usize, message: &str) -> Option<Stopped> {
        let record = self.records.get_mut(index).filter(|record| record.active)?;
        record.active = false;
        message.clone_into(&mut record.message);
        let line_offset = record.line_offset;

        Some(Stopped {
            line_offset,
            show_cursor: self.cursor.release(),
        })
    }

    /// Rows the render loop should paint, in line order.
    pub fn active_rows(&self) -> Vec<ActiveRow> {
        self.records
            .iter()
            .filter(|record| record.active)
            .map(|record| ActiveRow {
                line_offset: record.line_offset,
                message: record.message.clone(),
            })
            .collect()
    }

    pub fn get(&self, index: usize) -> Option<&SpinnerRecord> {
        self.records.get(index)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn active_count(&self) -> usize {
        self.cursor.count()
    }
}
