//! # Octal
//!
//! The digit table and the conversion functions that turn external text and integers into
//! canonical three digit mode text. Everything here is pure and stateless.

mod digit_table;
mod input;
mod normalize;
pub(crate) mod parser;

pub use digit_table::{OctalDigitConfig, OCTAL_DIGIT_TABLE};
pub use input::OctalInput;
pub use normalize::{
    is_decimal_repr, is_octal_integer, is_permissions_mode, normalize_from_decimal_repr,
    normalize_octal_text, to_permissions_mode,
};
