// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::types::Field;

/// Checks whether `value` consists solely of ASCII digits and capital letters.
///
/// Equivalent to a full match of `[0-9A-Z]+`. Empty strings do not match.
#[must_use]
pub fn is_capitals_and_digits_only(value: &str) -> bool {
    !value.is_empty()
        && value
            .chars()
            .all(|c| c.is_ascii_digit() || c.is_ascii_uppercase())
}

/// Validates a referee name.
///
/// The value is checked as given; callers collecting raw input trim it first.
///
/// # Arguments
///
/// * `field` - Which name field is being validated
/// * `value` - The name to validate
///
/// # Errors
///
/// Returns an error if:
/// - The name is empty
/// - The name contains whitespace
/// - The name consists solely of digits and capital letters
pub fn validate_name(field: Field, value: &str) -> Result<(), DomainError> {
    // Rule: name must not be empty
    if value.is_empty() {
        return Err(DomainError::InvalidName {
            field,
            reason: String::from("Name cannot be empty"),
        });
    }

    // Rule: a name is a single word
    if value.chars().any(char::is_whitespace) {
        return Err(DomainError::InvalidName {
            field,
            reason: format!("Name '{value}' must not contain spaces"),
        });
    }

    // Rule: codes such as "AB12" or "SMITH" are not names
    if is_capitals_and_digits_only(value) {
        return Err(DomainError::InvalidName {
            field,
            reason: format!("Name '{value}' must not consist solely of digits and capitals"),
        });
    }

    Ok(())
}

/// Parses the count of previous match allocations from raw input.
///
/// Surrounding whitespace is ignored.
///
/// # Errors
///
/// Returns an error if the trimmed text is not a non-negative integer.
pub fn parse_allocations(text: &str) -> Result<u32, DomainError> {
    let trimmed: &str = text.trim();
    trimmed.parse::<u32>().map_err(|_| {
        DomainError::InvalidAllocations(format!(
            "'{trimmed}' is not a non-negative whole number"
        ))
    })
}
