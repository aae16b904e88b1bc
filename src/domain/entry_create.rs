//! Caller-supplied input for a new entry

use super::entry::{Entry, EntryBuilder};
use super::field::EntryField;
use super::validation::{ValidationError, ViolationKind, Violations};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Input record for a new entry.
///
/// Only the upper bound is checked here; text is kept exactly as supplied.
/// Trimming and the minimum length apply when it is upgraded into an
/// [`Entry`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "serde_json::Value")]
pub struct EntryCreate {
    work: String,
    struggle: String,
    intention: String,
}

impl EntryCreate {
    pub fn new(
        work: impl Into<String>,
        struggle: impl Into<String>,
        intention: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let create = EntryCreate {
            work: work.into(),
            struggle: struggle.into(),
            intention: intention.into(),
        };

        let mut violations = Violations::default();
        for field in EntryField::ALL {
            field.check_input(create.text(field), &mut violations);
        }
        violations.finish("EntryCreate")?;

        Ok(create)
    }

    pub fn from_value(value: &Value) -> Result<Self, ValidationError> {
        let mut violations = Violations::default();

        let Some(object) = value.as_object() else {
            violations.push("body", ViolationKind::WrongType { expected: "object" });
            return Err(violations.into_error("EntryCreate"));
        };

        let work = EntryField::Work.extract(object, &mut violations);
        let struggle = EntryField::Struggle.extract(object, &mut violations);
        let intention = EntryField::Intention.extract(object, &mut violations);

        match (work, struggle, intention) {
            (Some(work), Some(struggle), Some(intention)) if violations.is_empty() => {
                EntryCreate::new(work, struggle, intention)
            }
            (work, struggle, intention) => {
                // Length problems on the fields that did parse are still worth reporting
                for (field, text) in [
                    (EntryField::Work, work),
                    (EntryField::Struggle, struggle),
                    (EntryField::Intention, intention),
                ] {
                    if let Some(text) = text {
                        field.check_input(&text, &mut violations);
                    }
                }
                Err(violations.into_error("EntryCreate"))
            }
        }
    }

    pub fn work(&self) -> &str {
        &self.work
    }

    pub fn struggle(&self) -> &str {
        &self.struggle
    }

    pub fn intention(&self) -> &str {
        &self.intention
    }

    pub fn text(&self, field: EntryField) -> &str {
        match field {
            EntryField::Work => &self.work,
            EntryField::Struggle => &self.struggle,
            EntryField::Intention => &self.intention,
        }
    }

    /// Start an entry from this input; id and timestamps are still unset
    pub fn to_builder(&self) -> EntryBuilder {
        Entry::builder(
            self.work.clone(),
            self.struggle.clone(),
            self.intention.clone(),
        )
    }

    pub fn into_builder(self) -> EntryBuilder {
        Entry::builder(self.work, self.struggle, self.intention)
    }
}

impl TryFrom<Value> for EntryCreate {
    type Error = ValidationError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        EntryCreate::from_value(&value)
    }
}
