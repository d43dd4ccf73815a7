use std::fmt::{self, Display, Formatter};

#[cfg(feature = "serde")]
use crate::error::PermissionsError;

/// The two shapes of external input the conversion functions accept. How an integer is read
/// (as literal octal digits or as a bit pattern) is decided by the function receiving it, not
/// by this type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum OctalInput {
    Text(String),
    Integer(i64),
}

impl Display for OctalInput {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Integer(value) => write!(f, "{value}"),
        }
    }
}

impl From<&str> for OctalInput {
    fn from(val: &str) -> Self {
        Self::Text(val.to_string())
    }
}

impl From<String> for OctalInput {
    fn from(val: String) -> Self {
        Self::Text(val)
    }
}

impl From<&String> for OctalInput {
    fn from(val: &String) -> Self {
        Self::Text(val.clone())
    }
}

impl From<char> for OctalInput {
    fn from(val: char) -> Self {
        Self::Text(val.to_string())
    }
}

macro_rules! integer_octal_input {
    ($($int:ty),*) => {
        $(
            impl From<$int> for OctalInput {
                fn from(val: $int) -> Self {
                    Self::Integer(i64::from(val))
                }
            }
        )*
    };
}

integer_octal_input!(i8, i16, i32, i64, u8, u16, u32);

#[cfg(feature = "serde")]
impl TryFrom<&serde_json::Value> for OctalInput {
    type Error = PermissionsError;

    fn try_from(value: &serde_json::Value) -> Result<Self, Self::Error> {
        use serde_json::Value;

        let found = match value {
            Value::String(text) => return Ok(Self::Text(text.clone())),
            Value::Number(number) => {
                if let Some(int) = number.as_i64() {
                    return Ok(Self::Integer(int));
                }

                // Integers past i64::MAX have far more than three digits in any base we care
                // about, they're a bad value rather than a bad shape.
                if number.is_u64() {
                    return Err(PermissionsError::InvalidOctal(
                        super::normalize::INVALID_LENGTH,
                    ));
                }

                "float"
            }
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        };

        tracing::debug!(found, "rejected octal input of unsupported type");

        Err(PermissionsError::TypeMismatch { found })
    }
}

#[cfg(feature = "serde")]
impl TryFrom<serde_json::Value> for OctalInput {
    type Error = PermissionsError;

    fn try_from(value: serde_json::Value) -> Result<Self, Self::Error> {
        Self::try_from(&value)
    }
}
