//! Stored journal entry: defaults, normalization and validation

use super::entry_create::EntryCreate;
use super::field::{self, EntryField};
use super::validation::{ValidationError, ViolationKind, Violations};
use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::str::FromStr;
use uuid::Uuid;

/// Schema version stamped on entries that do not name one
pub const SCHEMA_VERSION: &str = "1.0";

/// How absent `created_at` / `updated_at` values are filled in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TimestampDefaults {
    /// One clock read per construction, shared by both timestamps
    #[default]
    Shared,
    /// A separate clock read for each timestamp
    Independent,
}

impl FromStr for TimestampDefaults {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "shared" => Ok(TimestampDefaults::Shared),
            "independent" => Ok(TimestampDefaults::Independent),
            _ => Err(format!(
                "Invalid timestamps policy: '{}'. Valid policies are: shared, independent",
                s
            )),
        }
    }
}

/// A fully validated journal entry.
///
/// Only obtainable through [`EntryBuilder`] (or deserialization, which goes
/// through the same checks), so every value upholds:
/// - `work`, `struggle` and `intention` are trimmed and 5..=256 characters
/// - `updated_at >= created_at`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "serde_json::Value")]
pub struct Entry {
    version: String,
    id: String,
    work: String,
    struggle: String,
    intention: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Entry {
    /// Build an entry from the three text fields, defaulting everything else
    pub fn new(
        work: impl Into<String>,
        struggle: impl Into<String>,
        intention: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Self::builder(work, struggle, intention).build()
    }

    pub fn builder(
        work: impl Into<String>,
        struggle: impl Into<String>,
        intention: impl Into<String>,
    ) -> EntryBuilder {
        let mut builder = EntryBuilder::empty();
        builder.work = Slot::Given(work.into());
        builder.struggle = Slot::Given(struggle.into());
        builder.intention = Slot::Given(intention.into());
        builder
    }

    /// Validate an entry from untyped data
    pub fn from_value(value: &Value) -> Result<Self, ValidationError> {
        EntryBuilder::from_value(value).build()
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn id(&self) -> &str {
        &self.id
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

    /// Text of one of the free-text fields
    pub fn text(&self, field: EntryField) -> &str {
        match field {
            EntryField::Work => &self.work,
            EntryField::Struggle => &self.struggle,
            EntryField::Intention => &self.intention,
        }
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// A new entry carrying `changes`, stamped as updated now
    pub fn revise(&self, changes: &EntryCreate) -> Result<Entry, ValidationError> {
        self.revise_at(changes, Utc::now())
    }

    /// Keeps `id`, `version` and `created_at`; replaces the text and sets
    /// `updated_at` to `now`.
    pub fn revise_at(
        &self,
        changes: &EntryCreate,
        now: DateTime<Utc>,
    ) -> Result<Entry, ValidationError> {
        changes
            .to_builder()
            .id(self.id.clone())
            .version(self.version.clone())
            .created_at(self.created_at)
            .updated_at(now)
            .build_at(now)
    }
}

impl TryFrom<Value> for Entry {
    type Error = ValidationError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Entry::from_value(&value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Slot<T> {
    Absent,
    Given(T),
    /// Supplied but unusable; a violation has already been recorded
    Rejected,
}

/// Collects the parts of an entry and checks them all at once in `build`
#[derive(Debug, Clone)]
pub struct EntryBuilder {
    version: Slot<String>,
    id: Slot<String>,
    work: Slot<String>,
    struggle: Slot<String>,
    intention: Slot<String>,
    created_at: Slot<DateTime<Utc>>,
    updated_at: Slot<DateTime<Utc>>,
    timestamps: TimestampDefaults,
    violations: Violations,
}

impl EntryBuilder {
    fn empty() -> Self {
        EntryBuilder {
            version: Slot::Absent,
            id: Slot::Absent,
            work: Slot::Absent,
            struggle: Slot::Absent,
            intention: Slot::Absent,
            created_at: Slot::Absent,
            updated_at: Slot::Absent,
            timestamps: TimestampDefaults::default(),
            violations: Violations::default(),
        }
    }

    /// Read every part out of untyped data.
    ///
    /// Problems found here (missing text, wrong types, unparsable
    /// timestamps) are kept and reported by `build` together with the
    /// length and ordering checks.
    pub fn from_value(value: &Value) -> Self {
        let mut builder = Self::empty();

        let Some(object) = value.as_object() else {
            builder
                .violations
                .push("body", ViolationKind::WrongType { expected: "object" });
            for field in EntryField::ALL {
                *builder.text_slot(field) = Slot::Rejected;
            }
            return builder;
        };

        let mut normalized = object.clone();
        for field in EntryField::ALL {
            if let Some(raw) = object.get(field.name()) {
                normalized.insert(field.name().to_string(), field::normalize_value(raw));
            }
        }

        for field in EntryField::ALL {
            let slot = match field.extract(&normalized, &mut builder.violations) {
                Some(text) => Slot::Given(text),
                None => Slot::Rejected,
            };
            *builder.text_slot(field) = slot;
        }

        builder.id = optional_string(object, "id", &mut builder.violations);
        builder.version = optional_string(object, "version", &mut builder.violations);
        builder.created_at = optional_timestamp(object, "created_at", &mut builder.violations);
        builder.updated_at = optional_timestamp(object, "updated_at", &mut builder.violations);
        builder
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Slot::Given(id.into());
        self
    }

    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Slot::Given(version.into());
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Slot::Given(created_at);
        self
    }

    pub fn updated_at(mut self, updated_at: DateTime<Utc>) -> Self {
        self.updated_at = Slot::Given(updated_at);
        self
    }

    pub fn timestamps(mut self, timestamps: TimestampDefaults) -> Self {
        self.timestamps = timestamps;
        self
    }

    /// Validate, filling absent timestamps from the system clock
    pub fn build(self) -> Result<Entry, ValidationError> {
        let created_default = Utc::now();
        let updated_default = match self.timestamps {
            TimestampDefaults::Shared => created_default,
            TimestampDefaults::Independent => Utc::now(),
        };
        self.finish(created_default, updated_default)
    }

    /// Validate, filling absent timestamps with `now`
    pub fn build_at(self, now: DateTime<Utc>) -> Result<Entry, ValidationError> {
        self.finish(now, now)
    }

    fn text_slot(&mut self, field: EntryField) -> &mut Slot<String> {
        match field {
            EntryField::Work => &mut self.work,
            EntryField::Struggle => &mut self.struggle,
            EntryField::Intention => &mut self.intention,
        }
    }

    fn finish(
        self,
        created_default: DateTime<Utc>,
        updated_default: DateTime<Utc>,
    ) -> Result<Entry, ValidationError> {
        let mut violations = self.violations;

        let work = resolve_text(EntryField::Work, self.work, &mut violations);
        let struggle = resolve_text(EntryField::Struggle, self.struggle, &mut violations);
        let intention = resolve_text(EntryField::Intention, self.intention, &mut violations);

        let created_at = resolve(self.created_at, || created_default);
        let updated_at = resolve(self.updated_at, || updated_default);
        if let (Some(created), Some(updated)) = (created_at, updated_at) {
            if updated < created {
                violations.push("updated_at", ViolationKind::UpdatedBeforeCreated);
            }
        }

        let version = resolve(self.version, || SCHEMA_VERSION.to_string());
        let id = resolve(self.id, generate_id);

        match (version, id, work, struggle, intention, created_at, updated_at) {
            (
                Some(version),
                Some(id),
                Some(work),
                Some(struggle),
                Some(intention),
                Some(created_at),
                Some(updated_at),
            ) if violations.is_empty() => Ok(Entry {
                version,
                id,
                work,
                struggle,
                intention,
                created_at,
                updated_at,
            }),
            _ => Err(violations.into_error("Entry")),
        }
    }
}

fn resolve<T>(slot: Slot<T>, default: impl FnOnce() -> T) -> Option<T> {
    match slot {
        Slot::Given(value) => Some(value),
        Slot::Absent => Some(default()),
        Slot::Rejected => None,
    }
}

fn resolve_text(
    field: EntryField,
    slot: Slot<String>,
    violations: &mut Violations,
) -> Option<String> {
    match slot {
        Slot::Given(raw) => {
            let text = field::normalize(&raw).to_string();
            field.check_stored(&text, violations);
            Some(text)
        }
        Slot::Absent => {
            violations.push(field.name(), ViolationKind::Missing);
            None
        }
        Slot::Rejected => None,
    }
}

fn generate_id() -> String {
    let id = Uuid::new_v4().to_string();
    log::debug!("assigned entry id {}", id);
    id
}

fn optional_string(
    object: &Map<String, Value>,
    key: &'static str,
    violations: &mut Violations,
) -> Slot<String> {
    match object.get(key) {
        None => Slot::Absent,
        Some(Value::String(text)) => Slot::Given(text.clone()),
        Some(_) => {
            violations.push(key, ViolationKind::WrongType { expected: "string" });
            Slot::Rejected
        }
    }
}

// null timestamps are treated as absent and get the default
fn optional_timestamp(
    object: &Map<String, Value>,
    key: &'static str,
    violations: &mut Violations,
) -> Slot<DateTime<Utc>> {
    match object.get(key) {
        None | Some(Value::Null) => Slot::Absent,
        Some(Value::String(text)) => match parse_timestamp(text) {
            Some(ts) => Slot::Given(ts),
            None => {
                violations.push(
                    key,
                    ViolationKind::WrongType {
                        expected: "ISO-8601 datetime",
                    },
                );
                Slot::Rejected
            }
        },
        Some(_) => {
            violations.push(
                key,
                ViolationKind::WrongType {
                    expected: "ISO-8601 datetime",
                },
            );
            Slot::Rejected
        }
    }
}

/// Accepts RFC 3339 with an offset, or a naive datetime taken as UTC
pub fn parse_timestamp(text: &str) -> Option<DateTime<Utc>> {
    let text = text.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(text) {
        return Some(ts.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| Utc.from_utc_datetime(&naive))
}
