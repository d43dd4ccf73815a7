use crate::error::{PermissionsError, PermissionsResult};
use crate::octal::{parser, OctalInput};

pub(crate) const INVALID_LENGTH: &str =
    "invalid octal representation length, must have a length ranging from 1 to 3";

pub(crate) const INVALID_BITS: &str =
    "invalid bits in octal representation, bits must range from 0 to 7";

pub(crate) const INVALID_OCTAL_LITERAL: &str = "must be a valid octal literal";

pub(crate) const INVALID_DECIMAL_REPR: &str = "must be a valid decimal representation of an octal";

const MODE_WIDTH: usize = 3;

/// Checks that `digits` is one to three octal digits and left pads it with zeros to the full
/// three digit mode width.
fn validate_octal_digits(digits: &str) -> PermissionsResult<String> {
    let length = digits.chars().count();
    if !(1..=MODE_WIDTH).contains(&length) {
        return Err(PermissionsError::InvalidOctal(INVALID_LENGTH));
    }

    if !digits.chars().all(|c| ('0'..='7').contains(&c)) {
        return Err(PermissionsError::InvalidOctal(INVALID_BITS));
    }

    Ok(format!("{:0>width$}", digits, width = MODE_WIDTH))
}

/// Base 8 rendering that keeps the sign of negative values, they are then turned away by the
/// digit check like any other stray character.
fn render_octal(value: i64) -> String {
    if value < 0 {
        format!("-{:o}", value.unsigned_abs())
    } else {
        format!("{value:o}")
    }
}

/// Normalizes a mode that is already written digit by digit in octal, such as `"754"`, `"03"`
/// or the integer `754`. Integers are not re-based: the decimal digits of the integer are taken
/// to be the octal digits of the mode.
///
/// The result is always exactly three characters. Text may carry a leading `0o` which is
/// dropped before validation unless the `strict` feature is enabled.
pub fn normalize_octal_text(input: impl Into<OctalInput>) -> PermissionsResult<String> {
    let input = input.into();

    let result = match &input {
        OctalInput::Integer(value) => validate_octal_digits(&value.to_string()),
        OctalInput::Text(text) => {
            let digits = if cfg!(feature = "strict") {
                text.as_str()
            } else {
                text.strip_prefix(parser::OCTAL_LITERAL_PREFIX)
                    .unwrap_or(text)
            };

            validate_octal_digits(digits)
        }
    };

    if let Err(err) = &result {
        tracing::trace!(%input, %err, "rejected octal text");
    }

    result
}

/// Normalizes a mode held as an integer bit pattern (decimal `438` is mode `666`) or as an
/// explicit octal literal (`"0o666"`). Text without the `0o` prefix is read as a base 10
/// integer.
pub fn normalize_from_decimal_repr(input: impl Into<OctalInput>) -> PermissionsResult<String> {
    let input = input.into();

    let result = match &input {
        OctalInput::Integer(value) => validate_octal_digits(&render_octal(*value)),
        OctalInput::Text(text) if text.starts_with(parser::OCTAL_LITERAL_PREFIX) => {
            match parser::parse_octal_literal(text) {
                Some(digits) => {
                    let significant = digits.trim_start_matches('0');
                    validate_octal_digits(if significant.is_empty() { "0" } else { significant })
                }
                None => Err(PermissionsError::InvalidOctal(INVALID_OCTAL_LITERAL)),
            }
        }
        OctalInput::Text(text) => match parser::parse_signed_decimal(text) {
            Some(Some(value)) => validate_octal_digits(&render_octal(value)),
            // Shaped like a number but wider than an i64, far too long to be a mode
            Some(None) => Err(PermissionsError::InvalidOctal(INVALID_LENGTH)),
            None => Err(PermissionsError::InvalidOctal(INVALID_DECIMAL_REPR)),
        },
    };

    if let Err(err) = &result {
        tracing::trace!(%input, %err, "rejected decimal representation");
    }

    result
}

/// Reads text as octal digits and integers as bit patterns. This is the natural reading of
/// values coming from a config file or a command line, where `"644"` and `0o644` mean the same
/// mode.
pub fn to_permissions_mode(input: impl Into<OctalInput>) -> PermissionsResult<String> {
    match input.into() {
        text @ OctalInput::Text(_) => normalize_octal_text(text),
        integer @ OctalInput::Integer(_) => normalize_from_decimal_repr(integer),
    }
}

pub fn is_octal_integer(input: impl Into<OctalInput>) -> bool {
    normalize_octal_text(input).is_ok()
}

pub fn is_decimal_repr(input: impl Into<OctalInput>) -> bool {
    normalize_from_decimal_repr(input).is_ok()
}

pub fn is_permissions_mode(input: impl Into<OctalInput>) -> bool {
    to_permissions_mode(input).is_ok()
}
