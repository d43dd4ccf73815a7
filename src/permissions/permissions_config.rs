use crate::error::PermissionsResult;
use crate::octal::{OctalDigitConfig, OctalInput};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PermissionsConfig {
    pub read: bool,
    pub write: bool,
    pub execute: bool,
}

impl PermissionsConfig {
    pub const fn new(read: bool, write: bool, execute: bool) -> Self {
        Self {
            read,
            write,
            execute,
        }
    }

    pub const fn none() -> Self {
        Self::new(false, false, false)
    }

    pub const fn all() -> Self {
        Self::new(true, true, true)
    }

    pub fn from_octal_digit(digit: impl Into<OctalInput>) -> PermissionsResult<Self> {
        OctalDigitConfig::lookup(digit).map(Self::from)
    }

    /// Everything granted by either config.
    pub const fn union(self, other: Self) -> Self {
        Self::new(
            self.read || other.read,
            self.write || other.write,
            self.execute || other.execute,
        )
    }

    /// The single octal digit granting exactly these permissions.
    pub const fn digit(&self) -> u8 {
        ((self.read as u8) << 2) | ((self.write as u8) << 1) | (self.execute as u8)
    }
}

impl From<&OctalDigitConfig> for PermissionsConfig {
    fn from(config: &OctalDigitConfig) -> Self {
        Self::new(config.read, config.write, config.execute)
    }
}
