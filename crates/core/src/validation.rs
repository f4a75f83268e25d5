//! Required-field validation.
//!
//! Callers declare which fields are required at call time via a slice of
//! [`FieldRequirement`]s. Fields are checked in declaration order and the
//! first missing one is reported.

use crate::error::CoreError;

/// Suffix appended to a field name when it is required but absent.
pub const MISSING_REQUIRED_FIELD: &str = "Missing required field";

/// Whether a declared field must carry a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    Required,
    Optional,
}

/// Declares one field and its requirement level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRequirement {
    pub field: &'static str,
    pub requirement: Requirement,
}

impl FieldRequirement {
    pub const fn required(field: &'static str) -> Self {
        Self {
            field,
            requirement: Requirement::Required,
        }
    }

    pub const fn optional(field: &'static str) -> Self {
        Self {
            field,
            requirement: Requirement::Optional,
        }
    }
}

/// Something whose string fields can be looked up by name.
pub trait FieldSource {
    /// The raw value of `field`, or `None` if the field is absent or unknown.
    fn field_value(&self, field: &str) -> Option<&str>;
}

/// Check every required field in `requirements` against `candidate`.
///
/// A value that is absent, empty, or only whitespace counts as missing.
/// Fails with [`CoreError::Validation`] naming the first missing field as
/// `"<field>: Missing required field"`.
pub fn validate_required<S: FieldSource + ?Sized>(
    candidate: &S,
    requirements: &[FieldRequirement],
) -> Result<(), CoreError> {
    let missing = requirements
        .iter()
        .filter(|r| r.requirement == Requirement::Required)
        .find(|r| {
            candidate
                .field_value(r.field)
                .map_or(true, |v| v.trim().is_empty())
        });

    match missing {
        Some(r) => Err(CoreError::Validation(format!(
            "{}: {MISSING_REQUIRED_FIELD}",
            r.field
        ))),
        None => Ok(()),
    }
}
