use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use crate::error::{PermissionsError, PermissionsResult};
use crate::octal::{
    normalize_from_decimal_repr, normalize_octal_text, to_permissions_mode, OctalDigitConfig,
    OctalInput,
};
use crate::permissions::{Authority, PermissionsByte, PermissionsConfig};

/// A complete Unix permissions mode, one [`PermissionsByte`] for each authority.
///
/// Modes are immutable, [`PermissionsMode::plus`] and [`PermissionsMode::minus`] produce new
/// modes rather than changing the one they were called on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct PermissionsMode {
    owner: PermissionsByte,
    group: PermissionsByte,
    others: PermissionsByte,
}

impl PermissionsMode {
    /// Assembles a mode from its three bytes, each of which must belong to the authority of the
    /// slot it is passed in.
    pub fn new(
        owner: PermissionsByte,
        group: PermissionsByte,
        others: PermissionsByte,
    ) -> PermissionsResult<Self> {
        for (slot, byte) in Authority::ALL.into_iter().zip([&owner, &group, &others]) {
            if byte.authority() != slot {
                return Err(PermissionsError::MisplacedAuthority {
                    slot,
                    found: byte.authority(),
                });
            }
        }

        Ok(Self {
            owner,
            group,
            others,
        })
    }

    /// Parses a mode written digit by digit in octal, see
    /// [`normalize_octal_text`](crate::octal::normalize_octal_text).
    pub fn parse_octal(input: impl Into<OctalInput>) -> PermissionsResult<Self> {
        Self::from_normalized(&normalize_octal_text(input)?)
    }

    /// Parses a mode held as a bit pattern or octal literal, see
    /// [`normalize_from_decimal_repr`](crate::octal::normalize_from_decimal_repr).
    pub fn parse_decimal_repr(input: impl Into<OctalInput>) -> PermissionsResult<Self> {
        Self::from_normalized(&normalize_from_decimal_repr(input)?)
    }

    /// Text as octal digits, integers as bit patterns.
    pub fn parse(input: impl Into<OctalInput>) -> PermissionsResult<Self> {
        Self::from_normalized(&to_permissions_mode(input)?)
    }

    fn from_normalized(mode: &str) -> PermissionsResult<Self> {
        let mut parsed = Self::default();

        for (authority, digit) in Authority::ALL.into_iter().zip(mode.chars()) {
            let config = PermissionsConfig::from(OctalDigitConfig::lookup(digit)?);
            parsed = parsed.plus(PermissionsByte::new(authority, config));
        }

        Ok(parsed)
    }

    pub fn owner(&self) -> &PermissionsByte {
        &self.owner
    }

    pub fn group(&self) -> &PermissionsByte {
        &self.group
    }

    pub fn others(&self) -> &PermissionsByte {
        &self.others
    }

    pub fn byte(&self, authority: Authority) -> &PermissionsByte {
        match authority {
            Authority::Owner => &self.owner,
            Authority::Group => &self.group,
            Authority::Others => &self.others,
        }
    }

    /// Grants the permissions of `byte` on top of whatever its authority already holds, the
    /// existing bits of that slot are kept.
    pub fn plus(&self, byte: PermissionsByte) -> Self {
        let authority = byte.authority();
        let merged = self.byte(authority).config().union(byte.config());

        self.with_byte(PermissionsByte::new(authority, merged))
    }

    /// Clears every permission of `byte`'s authority. Only the authority of `byte` is
    /// considered, the slot is emptied whichever bits `byte` itself carries.
    pub fn minus(&self, byte: PermissionsByte) -> Self {
        self.with_byte(PermissionsByte::empty(byte.authority()))
    }

    fn with_byte(&self, byte: PermissionsByte) -> Self {
        let mut updated = *self;

        match byte.authority() {
            Authority::Owner => updated.owner = byte,
            Authority::Group => updated.group = byte,
            Authority::Others => updated.others = byte,
        }

        updated
    }

    pub fn mode(&self) -> String {
        format!("{:03o}", self.mode_as_decimal_repr())
    }

    /// The mode digits read as a decimal number, mode `"274"` becomes `274`.
    pub fn mode_as_int(&self) -> u16 {
        self.owner.mode_as_int() + self.group.mode_as_int() + self.others.mode_as_int()
    }

    /// The actual mode bits, mode `"274"` is `0o274` which is `188`.
    pub fn mode_as_decimal_repr(&self) -> u16 {
        self.owner.mode_as_decimal_repr()
            | self.group.mode_as_decimal_repr()
            | self.others.mode_as_decimal_repr()
    }

    pub fn mode_as_octal_literal(&self) -> String {
        format!("0o{}", self.mode())
    }
}

impl Default for PermissionsMode {
    fn default() -> Self {
        Self {
            owner: PermissionsByte::empty(Authority::Owner),
            group: PermissionsByte::empty(Authority::Group),
            others: PermissionsByte::empty(Authority::Others),
        }
    }
}

impl Display for PermissionsMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.mode())
    }
}

impl FromStr for PermissionsMode {
    type Err = PermissionsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_octal(s)
    }
}

impl TryFrom<String> for PermissionsMode {
    type Error = PermissionsError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse_octal(value)
    }
}

impl From<PermissionsMode> for String {
    fn from(mode: PermissionsMode) -> Self {
        mode.mode()
    }
}
