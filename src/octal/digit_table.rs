use crate::error::{PermissionsError, PermissionsResult};
use crate::octal::{parser, OctalInput};

const DIGIT_OUT_OF_RANGE: &str =
    "an integer representation of an octal digit must be a single digit ranging from 0 to 7";

const DIGIT_NOT_AN_INTEGER: &str =
    "expecting a string representation of the octal digit being a single digit integer";

/// What a single octal digit grants to the authority it is assigned to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OctalDigitConfig {
    pub description: &'static str,
    pub read: bool,
    pub write: bool,
    pub execute: bool,
}

const fn digit_config(
    description: &'static str,
    read: bool,
    write: bool,
    execute: bool,
) -> OctalDigitConfig {
    OctalDigitConfig {
        description,
        read,
        write,
        execute,
    }
}

/// Indexed by the digit itself.
pub static OCTAL_DIGIT_TABLE: [OctalDigitConfig; 8] = [
    digit_config("No permissions", false, false, false),
    digit_config("Execute permission only", false, false, true),
    digit_config("Write permission only", false, true, false),
    digit_config("Write and execute permissions", false, true, true),
    digit_config("Read permission only", true, false, false),
    digit_config("Read and execute permissions", true, false, true),
    digit_config("Read and write permissions", true, true, false),
    digit_config("Read, write, and execute permissions", true, true, true),
];

impl OctalDigitConfig {
    /// Looks up the configuration for a single digit. Text is read as a decimal integer first, so
    /// `"007"` is the digit 7 while `"47"` is out of range.
    pub fn lookup(digit: impl Into<OctalInput>) -> PermissionsResult<&'static Self> {
        let digit = match digit.into() {
            OctalInput::Integer(value) => value,
            OctalInput::Text(text) => match parser::parse_signed_decimal(&text) {
                Some(Some(value)) => value,
                Some(None) => return Err(PermissionsError::InvalidOctal(DIGIT_OUT_OF_RANGE)),
                None => {
                    tracing::trace!(digit = %text, "digit text is not an integer");
                    return Err(PermissionsError::InvalidOctal(DIGIT_NOT_AN_INTEGER));
                }
            },
        };

        usize::try_from(digit)
            .ok()
            .and_then(|index| OCTAL_DIGIT_TABLE.get(index))
            .ok_or_else(|| {
                tracing::trace!(digit, "octal digit out of range");
                PermissionsError::InvalidOctal(DIGIT_OUT_OF_RANGE)
            })
    }

    /// Infallible lookup for digits already known to be in range, anything above 7 is masked
    /// down to its lowest three bits.
    pub(crate) fn for_digit(digit: u8) -> &'static Self {
        &OCTAL_DIGIT_TABLE[usize::from(digit & 0o7)]
    }
}
