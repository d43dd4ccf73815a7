use std::fmt::{self, Display, Formatter};

use crate::error::{PermissionsError, PermissionsResult};
use crate::octal::OctalDigitConfig;
use crate::permissions::{Authority, PermissionsConfig, PermissionsMode};

/// The read, write, and execute permissions of a single authority, positioned within the full
/// mode word. Owner write is mode `200`, group write is `020`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PermissionsByte {
    authority: Authority,
    config: PermissionsConfig,
}

impl PermissionsByte {
    pub const fn new(authority: Authority, config: PermissionsConfig) -> Self {
        Self { authority, config }
    }

    /// A byte granting nothing to `authority`.
    pub const fn empty(authority: Authority) -> Self {
        Self::new(authority, PermissionsConfig::none())
    }

    pub fn authority(&self) -> Authority {
        self.authority
    }

    pub fn config(&self) -> PermissionsConfig {
        self.config
    }

    pub fn read(&self) -> bool {
        self.config.read
    }

    pub fn write(&self) -> bool {
        self.config.write
    }

    pub fn execute(&self) -> bool {
        self.config.execute
    }

    /// Produces a full mode holding this byte and `other`, the remaining authority is granted
    /// nothing. Both bytes must belong to different authorities.
    pub fn combine(&self, other: &PermissionsByte) -> PermissionsResult<PermissionsMode> {
        if self.authority == other.authority {
            tracing::debug!(authority = %self.authority, "refusing to combine bytes of a single authority");
            return Err(PermissionsError::SameAuthority(self.authority));
        }

        Ok(PermissionsMode::default().plus(*self).plus(*other))
    }

    pub fn description(&self) -> &'static str {
        OctalDigitConfig::for_digit(self.config.digit()).description
    }

    pub fn details(&self) -> PermissionsByteDetails {
        PermissionsByteDetails {
            authority: self.authority,
            mode: self.mode(),
            read: self.config.read,
            write: self.config.write,
            execute: self.config.execute,
        }
    }

    pub fn mode(&self) -> String {
        format!("{:03o}", self.mode_as_decimal_repr())
    }

    /// The mode digits read as a decimal number, owner write (`"200"`) becomes `200`.
    pub fn mode_as_int(&self) -> u16 {
        let digit = u16::from(self.config.digit());

        match self.authority {
            Authority::Owner => digit * 100,
            Authority::Group => digit * 10,
            Authority::Others => digit,
        }
    }

    /// The actual mode bits, owner write is `0o200` which is `128`.
    pub fn mode_as_decimal_repr(&self) -> u16 {
        let bits = self.authority.bits();
        let mut mode = bits.none;

        if self.config.read {
            mode |= bits.read;
        }

        if self.config.write {
            mode |= bits.write;
        }

        if self.config.execute {
            mode |= bits.execute;
        }

        mode
    }

    pub fn mode_as_octal_literal(&self) -> String {
        format!("0o{}", self.mode())
    }
}

impl Display for PermissionsByte {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.authority, self.mode())
    }
}

/// A flattened, serializable summary of a [`PermissionsByte`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PermissionsByteDetails {
    pub authority: Authority,
    pub mode: String,
    pub read: bool,
    pub write: bool,
    pub execute: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(target_arch = "wasm32")]
    use wasm_bindgen_test::*;

    const WRITE: PermissionsConfig = PermissionsConfig::new(false, true, false);

    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
    #[cfg_attr(not(target_arch = "wasm32"), test)]
    fn test_owner_write() {
        let byte = PermissionsByte::new(Authority::Owner, WRITE);

        assert_eq!(byte.authority(), Authority::Owner);
        assert!(!byte.read());
        assert!(byte.write());
        assert!(!byte.execute());

        assert_eq!(byte.mode(), "200");
        assert_eq!(byte.mode_as_int(), 200);
        assert_eq!(byte.mode_as_decimal_repr(), 128);
        assert_eq!(byte.mode_as_octal_literal(), "0o200");
        assert_eq!(byte.description(), "Write permission only");
        assert_eq!(byte.to_string(), "owner:200");
    }

    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
    #[cfg_attr(not(target_arch = "wasm32"), test)]
    fn test_modes_for_each_authority() {
        let read_execute = PermissionsConfig::new(true, false, true);

        let group = PermissionsByte::new(Authority::Group, read_execute);
        assert_eq!(group.mode(), "050");
        assert_eq!(group.mode_as_int(), 50);
        assert_eq!(group.mode_as_decimal_repr(), 0o050);
        assert_eq!(group.description(), "Read and execute permissions");

        let others = PermissionsByte::new(Authority::Others, read_execute);
        assert_eq!(others.mode(), "005");
        assert_eq!(others.mode_as_octal_literal(), "0o005");

        let empty = PermissionsByte::empty(Authority::Group);
        assert_eq!(empty.mode(), "000");
        assert_eq!(empty.description(), "No permissions");
    }

    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
    #[cfg_attr(not(target_arch = "wasm32"), test)]
    fn test_description_follows_digit_table() {
        for authority in Authority::ALL {
            for digit in 0u8..8 {
                let config = PermissionsConfig::from_octal_digit(digit).unwrap();
                let byte = PermissionsByte::new(authority, config);
                let expected = OctalDigitConfig::lookup(digit).unwrap().description;

                assert_eq!(byte.description(), expected);
            }
        }
    }

    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
    #[cfg_attr(not(target_arch = "wasm32"), test)]
    fn test_details() {
        let byte = PermissionsByte::new(Authority::Owner, WRITE);

        assert_eq!(
            byte.details(),
            PermissionsByteDetails {
                authority: Authority::Owner,
                mode: "200".to_string(),
                read: false,
                write: true,
                execute: false,
            }
        );
    }

    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
    #[cfg_attr(not(target_arch = "wasm32"), test)]
    fn test_combine() {
        let owner = PermissionsByte::new(Authority::Owner, WRITE);
        let group = PermissionsByte::new(Authority::Group, PermissionsConfig::all());

        let mode = owner.combine(&group).unwrap();
        assert_eq!(mode.mode(), "270");
        assert_eq!(mode.others(), &PermissionsByte::empty(Authority::Others));

        let reversed = group.combine(&owner).unwrap();
        assert_eq!(reversed, mode);
    }

    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
    #[cfg_attr(not(target_arch = "wasm32"), test)]
    fn test_combine_same_authority() {
        let first = PermissionsByte::new(Authority::Group, WRITE);
        let second = PermissionsByte::new(Authority::Group, PermissionsConfig::all());

        let err = first.combine(&second).unwrap_err();
        assert_eq!(err, PermissionsError::SameAuthority(Authority::Group));
        assert!(err
            .to_string()
            .starts_with("authority cannot be the same for both operands"));
    }

    #[cfg(feature = "serde")]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
    #[cfg_attr(not(target_arch = "wasm32"), test)]
    fn test_details_serialization() {
        let byte = PermissionsByte::new(Authority::Owner, WRITE);

        let value = serde_json::to_value(byte.details()).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "authority": "owner",
                "mode": "200",
                "read": false,
                "write": true,
                "execute": false,
            })
        );
    }
}
