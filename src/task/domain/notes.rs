//! Append-only task note log.

use super::{TaskName, TaskState};
use crate::identity::domain::Username;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

const ENTRY_SEPARATOR: &str = "\n\n";
const DATE_FORMAT: &str = "%Y-%m-%d";
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A single audit entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteEntry(String);

impl NoteEntry {
    /// Entry recorded when a task is created. Only the UTC date is shown.
    #[must_use]
    pub fn created(actor: &Username, at: DateTime<Utc>) -> Self {
        Self(format!(
            "Task created by {actor} on {}",
            at.format(DATE_FORMAT)
        ))
    }

    /// Entry recorded when a task changes state, optionally followed by the
    /// caller's remark on its own line.
    #[must_use]
    pub fn transition(
        actor: &Username,
        task_name: &TaskName,
        from: TaskState,
        to: TaskState,
        at: DateTime<Utc>,
        remark: Option<&str>,
    ) -> Self {
        let mut entry = format!(
            "{actor} moved {task_name} from {from} to {to} on {}",
            at.format(TIMESTAMP_FORMAT)
        );
        if let Some(text) = remark {
            entry.push('\n');
            entry.push_str(text);
        }
        Self(entry)
    }

    /// Returns the entry text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Ordered note entries, newest first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskNotes(Vec<NoteEntry>);

impl TaskNotes {
    /// Creates a log holding one entry.
    #[must_use]
    pub fn starting_with(entry: NoteEntry) -> Self {
        Self(vec![entry])
    }

    /// Rebuilds a log from its stored text.
    ///
    /// Stored text is kept as one opaque entry since remarks may themselves
    /// contain blank lines. `NULL` reads as empty text, which still counts as
    /// a prior entry, so a later prepend always writes the separator.
    #[must_use]
    pub fn from_persisted(value: Option<String>) -> Self {
        Self(vec![NoteEntry(value.unwrap_or_default())])
    }

    /// Adds an entry in front of the existing ones.
    pub fn prepend(&mut self, entry: NoteEntry) {
        self.0.insert(0, entry);
    }

    /// Returns the entries, newest first.
    #[must_use]
    pub fn entries(&self) -> &[NoteEntry] {
        &self.0
    }

    /// Returns `true` when the log has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Renders the storage form: entries joined by one blank line.
    #[must_use]
    pub fn render(&self) -> String {
        self.0
            .iter()
            .map(NoteEntry::as_str)
            .collect::<Vec<_>>()
            .join(ENTRY_SEPARATOR)
    }
}
