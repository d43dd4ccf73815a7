use crate::permissions::Authority;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum PermissionsError {
    #[error("{0}")]
    InvalidOctal(&'static str),

    #[error("{found} is not a valid octal input type, must be a string or an integer")]
    TypeMismatch { found: &'static str },

    #[error("authority cannot be the same for both operands (both were {0})")]
    SameAuthority(Authority),

    #[error("the {slot} slot of a permissions mode can't hold a permissions byte for {found}")]
    MisplacedAuthority { slot: Authority, found: Authority },

    #[error("unknown authority {0:?}, must be one of owner, group, or others")]
    UnknownAuthority(String),
}

impl PermissionsError {
    /// Whether this error describes a malformed value rather than a misuse of the API. Only
    /// these errors are folded into `false` by the boolean predicates.
    pub fn is_invalid_octal(&self) -> bool {
        matches!(self, Self::InvalidOctal(_))
    }
}

pub type PermissionsResult<T> = Result<T, PermissionsError>;
