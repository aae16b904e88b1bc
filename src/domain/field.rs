//! The three free-text journal fields and their normalization rules

use super::validation::{ViolationKind, Violations};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// Shortest text a stored entry accepts, after trimming
pub const MIN_TEXT_LEN: usize = 5;

/// Longest text either record shape accepts
pub const MAX_TEXT_LEN: usize = 256;

/// Free-text fields shared by `Entry` and `EntryCreate`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryField {
    /// What was worked on today
    Work,
    /// One thing that was hard today
    Struggle,
    /// What to work on tomorrow
    Intention,
}

impl EntryField {
    pub const ALL: [EntryField; 3] = [EntryField::Work, EntryField::Struggle, EntryField::Intention];

    /// Name used on the wire
    pub fn name(&self) -> &'static str {
        match self {
            EntryField::Work => "work",
            EntryField::Struggle => "struggle",
            EntryField::Intention => "intention",
        }
    }

    /// Prompt shown to whoever fills the field in
    pub fn description(&self) -> &'static str {
        match self {
            EntryField::Work => "What did you work on today?",
            EntryField::Struggle => "What's one thing you struggled with today?",
            EntryField::Intention => "What will you study/work on tomorrow?",
        }
    }

    pub fn example(&self) -> &'static str {
        match self {
            EntryField::Work => "Studied FastAPI and built my first API endpoints",
            EntryField::Struggle => "Understanding async/await syntax and when to use it",
            EntryField::Intention => "Practice PostgreSQL queries and database design",
        }
    }

    /// Check a normalized value against the stored-entry bounds
    pub(crate) fn check_stored(&self, value: &str, violations: &mut Violations) {
        let actual = char_len(value);
        if actual < MIN_TEXT_LEN {
            violations.push(
                self.name(),
                ViolationKind::TooShort {
                    min: MIN_TEXT_LEN,
                    actual,
                },
            );
        } else if actual > MAX_TEXT_LEN {
            violations.push(
                self.name(),
                ViolationKind::TooLong {
                    max: MAX_TEXT_LEN,
                    actual,
                },
            );
        }
    }

    /// Check a raw value against the input-record bound (no minimum)
    pub(crate) fn check_input(&self, value: &str, violations: &mut Violations) {
        let actual = char_len(value);
        if actual > MAX_TEXT_LEN {
            violations.push(
                self.name(),
                ViolationKind::TooLong {
                    max: MAX_TEXT_LEN,
                    actual,
                },
            );
        }
    }

    /// Pull this field out of an untyped object as a string.
    ///
    /// Missing keys and non-string values are recorded as violations.
    pub(crate) fn extract(
        &self,
        object: &serde_json::Map<String, Value>,
        violations: &mut Violations,
    ) -> Option<String> {
        match object.get(self.name()) {
            None => {
                violations.push(self.name(), ViolationKind::Missing);
                None
            }
            Some(Value::String(text)) => Some(text.clone()),
            Some(_) => {
                violations.push(self.name(), ViolationKind::WrongType { expected: "string" });
                None
            }
        }
    }
}

impl fmt::Display for EntryField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for EntryField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "work" => Ok(EntryField::Work),
            "struggle" => Ok(EntryField::Struggle),
            "intention" => Ok(EntryField::Intention),
            _ => Err(format!(
                "Unknown field: '{}'. Valid fields are: work, struggle, intention",
                s
            )),
        }
    }
}

/// Strip leading and trailing whitespace
pub fn normalize(value: &str) -> &str {
    value.trim()
}

/// Trim a raw value when it is textual, leave anything else untouched
pub fn normalize_value(value: &Value) -> Value {
    match value {
        Value::String(text) => Value::String(normalize(text).to_string()),
        other => other.clone(),
    }
}

/// Length in characters, not bytes
pub fn char_len(value: &str) -> usize {
    value.chars().count()
}
