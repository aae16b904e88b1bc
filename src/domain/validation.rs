//! Field-level violations and the aggregated validation error

use std::fmt;
use thiserror::Error;

/// What went wrong with a single field
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ViolationKind {
    #[error("field required")]
    Missing,

    #[error("expected {expected}")]
    WrongType { expected: &'static str },

    #[error("should have at least {min} characters, got {actual}")]
    TooShort { min: usize, actual: usize },

    #[error("should have at most {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },

    #[error("updated_at cannot be before created_at")]
    UpdatedBeforeCreated,
}

/// A single rejected field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub field: &'static str,
    pub kind: ViolationKind,
}

impl Violation {
    pub fn new(field: &'static str, kind: ViolationKind) -> Self {
        Violation { field, kind }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.kind)
    }
}

/// Construction of a record failed.
///
/// Always carries at least one violation. Every violation found during a
/// single construction is reported, not just the first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    model: &'static str,
    violations: Vec<Violation>,
}

impl ValidationError {
    /// Name of the record shape that was rejected (`Entry` or `EntryCreate`)
    pub fn model(&self) -> &'static str {
        self.model
    }

    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Names of the rejected fields, in the order they were checked
    pub fn fields(&self) -> Vec<&'static str> {
        let mut fields: Vec<&'static str> = Vec::new();
        for violation in &self.violations {
            if !fields.contains(&violation.field) {
                fields.push(violation.field);
            }
        }
        fields
    }

    /// Whether any violation concerns `field`
    pub fn mentions(&self, field: &str) -> bool {
        self.violations.iter().any(|v| v.field == field)
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let count = self.violations.len();
        write!(
            f,
            "{} validation error{} for {}: ",
            count,
            if count == 1 { "" } else { "s" },
            self.model
        )?;
        for (idx, violation) in self.violations.iter().enumerate() {
            if idx > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}", violation)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

/// Accumulates violations while a record is being checked
#[derive(Debug, Clone, Default)]
pub(crate) struct Violations {
    items: Vec<Violation>,
}

impl Violations {
    pub(crate) fn push(&mut self, field: &'static str, kind: ViolationKind) {
        self.items.push(Violation::new(field, kind));
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Turn the collected violations into a result for `model`
    pub(crate) fn finish(self, model: &'static str) -> Result<(), ValidationError> {
        if self.items.is_empty() {
            Ok(())
        } else {
            Err(self.into_error(model))
        }
    }

    /// Callers only reach this after at least one push.
    pub(crate) fn into_error(self, model: &'static str) -> ValidationError {
        log::debug!("rejected {} with {} violation(s)", model, self.items.len());
        ValidationError {
            model,
            violations: self.items,
        }
    }
}
