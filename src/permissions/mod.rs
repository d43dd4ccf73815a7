//! # Permissions
//!
//! Structured permission values. An [`Authority`] owns a fixed set of mode bits, a
//! [`PermissionsByte`] is one authority's read/write/execute settings, and a [`PermissionsMode`]
//! holds exactly one byte per authority.

mod authority;
mod permissions_byte;
mod permissions_config;
mod permissions_mode;

pub use authority::{Authority, AuthorityBits, GROUP_BITS, OTHERS_BITS, OWNER_BITS};
pub use permissions_byte::{PermissionsByte, PermissionsByteDetails};
pub use permissions_config::PermissionsConfig;
pub use permissions_mode::PermissionsMode;
