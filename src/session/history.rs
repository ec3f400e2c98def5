//! Command history
//!
//! Append-only log of entered lines plus a recall cursor for stepping
//! through it with the arrow keys.

/// History log with a recall cursor.
///
/// The cursor sits one past the newest entry after every submitted line.
/// Stepping older clamps at the first entry; stepping newer past the last
/// entry clears the input.
#[derive(Debug, Clone, Default)]
pub struct History {
    entries: Vec<String>,
    cursor: usize,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a line. Blank lines and repeats of the newest entry are
    /// dropped. Returns whether the line was stored.
    pub fn push(&mut self, line: &str) -> bool {
        let line = line.trim();
        let stored = !line.is_empty() && self.entries.last().map(String::as_str) != Some(line);
        if stored {
            self.entries.push(line.to_string());
        }
        self.reset_cursor();
        stored
    }

    /// Move the cursor back past the newest entry.
    pub fn reset_cursor(&mut self) {
        self.cursor = self.entries.len();
    }

    /// Step towards older entries. `None` when there is no history at all.
    pub fn older(&mut self) -> Option<&str> {
        if self.entries.is_empty() {
            return None;
        }
        self.cursor = self.cursor.saturating_sub(1);
        self.entries.get(self.cursor).map(String::as_str)
    }

    /// Step towards newer entries. Stepping past the newest entry yields an
    /// empty string (input cleared). `None` when there is no history at all.
    pub fn newer(&mut self) -> Option<&str> {
        if self.entries.is_empty() {
            return None;
        }
        self.cursor += 1;
        if self.cursor >= self.entries.len() {
            self.cursor = self.entries.len();
            return Some("");
        }
        self.entries.get(self.cursor).map(String::as_str)
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
