//! Unix permission modes as structured, validated values.
//!
//! Modes are broken into one [`PermissionsByte`](permissions::PermissionsByte) per authority
//! (owner, group, others) which compose into a full
//! [`PermissionsMode`](permissions::PermissionsMode). The [`octal`] module holds the digit table
//! and the functions that turn external text and integers into canonical three digit mode text.
//! Nothing in this crate touches the filesystem.

pub mod error;
pub mod octal;
pub mod permissions;

pub mod prelude {
    pub use crate::error::*;
    pub use crate::octal::{
        is_decimal_repr, is_octal_integer, is_permissions_mode, normalize_from_decimal_repr,
        normalize_octal_text, to_permissions_mode, OctalDigitConfig, OctalInput,
    };
    pub use crate::permissions::*;
}
