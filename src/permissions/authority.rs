use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use crate::error::PermissionsError;

/// One of the three subjects a Unix mode grants permissions to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Authority {
    Owner,
    Group,
    Others,
}

/// The raw mode bits reserved for a single authority, along with the named combinations of
/// them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthorityBits {
    pub none: u16,
    pub read: u16,
    pub write: u16,
    pub execute: u16,
    pub read_write: u16,
    pub read_execute: u16,
    pub write_execute: u16,
    pub read_write_execute: u16,
}

const fn authority_bits(read: u16, write: u16, execute: u16) -> AuthorityBits {
    AuthorityBits {
        none: 0o000,
        read,
        write,
        execute,
        read_write: read | write,
        read_execute: read | execute,
        write_execute: write | execute,
        read_write_execute: read | write | execute,
    }
}

pub const OWNER_BITS: AuthorityBits = authority_bits(0o400, 0o200, 0o100);

pub const GROUP_BITS: AuthorityBits = authority_bits(0o040, 0o020, 0o010);

pub const OTHERS_BITS: AuthorityBits = authority_bits(0o004, 0o002, 0o001);

impl Authority {
    /// In mode digit order, most significant first.
    pub const ALL: [Authority; 3] = [Self::Owner, Self::Group, Self::Others];

    pub const fn bits(self) -> AuthorityBits {
        match self {
            Self::Owner => OWNER_BITS,
            Self::Group => GROUP_BITS,
            Self::Others => OTHERS_BITS,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Owner => "owner",
            Self::Group => "group",
            Self::Others => "others",
        }
    }

    /// Index of this authority's digit within a three digit mode.
    pub const fn position(self) -> usize {
        match self {
            Self::Owner => 0,
            Self::Group => 1,
            Self::Others => 2,
        }
    }
}

impl Display for Authority {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Authority {
    type Err = PermissionsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|authority| authority.name() == s)
            .ok_or_else(|| PermissionsError::UnknownAuthority(s.to_string()))
    }
}
