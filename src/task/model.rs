//! Task data model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use crate::schedule::{date_spec, recurrence, ScheduleError};

/// Task ID. Stored as an integer, shown to users in base-36 ("a" is 10).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(pub u32);

const BASE36_DIGITS: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut n = self.0;
        if n == 0 {
            return write!(f, "0");
        }

        let mut buf = [0u8; 7];
        let mut at = buf.len();
        while n > 0 {
            at -= 1;
            buf[at] = BASE36_DIGITS[(n % 36) as usize];
            n /= 36;
        }
        f.write_str(std::str::from_utf8(&buf[at..]).expect("base-36 digits are ascii"))
    }
}

impl FromStr for TaskId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        u32::from_str_radix(s, 36).map(Self)
    }
}

/// One to-do item. The registry is the sole owner; tasks are mutated in
/// place and never shared outside the invocation that loaded them.
///
/// Optional fields are omitted from the serialized record when absent so
/// the store file stays minimal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,

    pub name: String,

    #[serde(default)]
    pub recurs: bool,

    #[serde(default)]
    pub completed: bool,

    /// Due calendar day. Compared by day, never by instant.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due: Option<NaiveDate>,

    /// Recurrence expression; present iff `recurs`. Validated when set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schedule: Option<String>,

    /// Unique, case-sensitive. Insertion order in storage, sorted for display.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

impl Task {
    pub fn new(id: TaskId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            recurs: false,
            completed: false,
            due: None,
            schedule: None,
            tags: Vec::new(),
        }
    }

    /// Complete the task.
    ///
    /// A recurring task never finishes: its due date advances by one
    /// schedule step anchored to the current due date, not to the
    /// completion instant, so completing late or early cannot drift the
    /// schedule. Anything else becomes terminally completed.
    pub fn complete(&mut self) -> Result<(), ScheduleError> {
        match (self.recurs, &self.schedule, self.due) {
            (true, Some(schedule), Some(due)) => {
                self.due = Some(recurrence::resolve(schedule, due)?);
            }
            _ => self.completed = true,
        }
        Ok(())
    }

    pub fn set_due(&mut self, due: NaiveDate) {
        self.due = Some(due);
    }

    /// Resolve a due-date expression against `reference` and store the result.
    pub fn set_due_spec(&mut self, spec: &str, reference: NaiveDate) -> Result<(), ScheduleError> {
        self.due = Some(date_spec::resolve(spec, reference)?);
        Ok(())
    }

    /// Validate a recurrence expression against `reference` and store it.
    /// The reference is only used to prove the expression parses; completion
    /// anchors to the due date.
    pub fn set_schedule(&mut self, spec: &str, reference: NaiveDate) -> Result<(), ScheduleError> {
        recurrence::resolve(spec, reference)?;
        self.schedule = Some(spec.to_string());
        self.recurs = true;
        Ok(())
    }

    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Add a tag unless already present.
    pub fn add_tag(&mut self, tag: impl Into<String>) {
        let tag = tag.into();
        if !self.tags.contains(&tag) {
            self.tags.push(tag);
        }
    }

    /// Replace the tag set, deduplicating while keeping the given order.
    pub fn set_tags<I>(&mut self, tags: I)
    where
        I: IntoIterator<Item = String>,
    {
        self.tags.clear();
        for tag in tags {
            self.add_tag(tag);
        }
    }

    /// Tags in display order.
    pub fn display_tags(&self) -> Vec<&str> {
        let mut tags: Vec<&str> = self.tags.iter().map(String::as_str).collect();
        tags.sort_unstable();
        tags
    }

    /// Due strictly before `today` and still pending.
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        !self.completed && self.due.is_some_and(|due| due < today)
    }
}
