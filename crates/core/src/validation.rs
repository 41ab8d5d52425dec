//! Reusable validation rules for entity invariants.
//!
//! Every rule is a pure function over a value and a field label. Failures are
//! [`DomainError::EntityValidation`] with a message that names the field, so
//! entities can chain rules with `?` in the order they must be checked.
//!
//! Lengths are counted in Unicode scalar values, not bytes.

use crate::error::{DomainError, DomainResult};

/// Fails when `value` is absent.
pub fn not_null<T>(value: Option<T>, field: &str) -> DomainResult<()> {
    match value {
        Some(_) => Ok(()),
        None => Err(DomainError::entity_validation(format!(
            "{field} should not be null"
        ))),
    }
}

/// Fails when `value` is absent, empty or whitespace-only.
pub fn not_null_or_empty(value: Option<&str>, field: &str) -> DomainResult<()> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(()),
        _ => Err(DomainError::entity_validation(format!(
            "{field} should not be empty or null"
        ))),
    }
}

/// Fails when `value` is shorter than `min` characters.
pub fn min_length(value: &str, min: usize, field: &str) -> DomainResult<()> {
    if value.chars().count() < min {
        return Err(DomainError::entity_validation(format!(
            "{field} should not be less than {min} characters"
        )));
    }
    Ok(())
}

/// Fails when `value` is longer than `max` characters.
pub fn max_length(value: &str, max: usize, field: &str) -> DomainResult<()> {
    if value.chars().count() > max {
        return Err(DomainError::entity_validation(format!(
            "{field} should not be greater than {max} characters"
        )));
    }
    Ok(())
}
