//! Reusable field-validation primitives.
//!
//! Every function here is pure: it inspects a value and either returns
//! normally or returns a [`DomainError::Validation`] naming the field and the
//! violated rule. Entities chain them with `?` so the first violated rule wins.
//!
//! Lengths are counted in `char`s, not bytes.

use crate::error::{DomainError, DomainResult};

/// Fails when `value` is absent. Returns the present value.
pub fn not_null<T>(value: Option<T>, field_name: &str) -> DomainResult<T> {
    value.ok_or_else(|| DomainError::validation(format!("{field_name} should not be null!")))
}

/// Fails when `value` is absent or blank after trimming.
///
/// Returns the original (untrimmed) value.
pub fn not_null_or_empty<'a>(value: Option<&'a str>, field_name: &str) -> DomainResult<&'a str> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(DomainError::validation(format!(
            "{field_name} should not be empty or null!"
        ))),
    }
}

/// Fails when `value` is shorter than `min_length` characters.
pub fn min_length(value: &str, min_length: usize, field_name: &str) -> DomainResult<()> {
    if char_len(value) < min_length {
        return Err(DomainError::validation(format!(
            "{field_name} should not be less than {min_length} characters long!"
        )));
    }
    Ok(())
}

/// Fails when `value` is longer than `max_length` characters.
pub fn max_length(value: &str, max_length: usize, field_name: &str) -> DomainResult<()> {
    if char_len(value) > max_length {
        return Err(DomainError::validation(format!(
            "{field_name} should be less or equal {max_length} characters long!"
        )));
    }
    Ok(())
}

fn char_len(value: &str) -> usize {
    value.chars().count()
}
