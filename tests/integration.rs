use unixperms::prelude::*;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen_test::*;

const WRITE: PermissionsConfig = PermissionsConfig::new(false, true, false);

const READ: PermissionsConfig = PermissionsConfig::new(true, false, false);

#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
#[cfg_attr(not(target_arch = "wasm32"), test)]
fn test_building_a_mode_from_bytes() {
    let owner = PermissionsByte::new(Authority::Owner, WRITE);
    let group = PermissionsByte::new(Authority::Group, PermissionsConfig::all());
    let others = PermissionsByte::new(Authority::Others, READ);

    assert_eq!(owner.combine(&group).unwrap().mode(), "270");
    assert_eq!(
        owner.combine(&owner),
        Err(PermissionsError::SameAuthority(Authority::Owner))
    );

    let mode = PermissionsMode::new(owner, group, others).unwrap();
    assert_eq!(mode.mode(), "274");

    let without_group = mode.minus(group);
    assert_eq!(without_group.mode(), "204");

    let others_write = PermissionsByte::new(Authority::Others, WRITE);
    assert_eq!(without_group.plus(others_write).mode(), "206");
    assert_eq!(mode.plus(others_write).mode(), "276");

    let group_write = PermissionsByte::new(Authority::Group, WRITE);
    let group_read_execute = PermissionsMode::parse_octal("254").unwrap();
    assert_eq!(group_read_execute.plus(group_write).mode(), "274");
}

#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
#[cfg_attr(not(target_arch = "wasm32"), test)]
fn test_both_readings_of_a_mode_agree() {
    let from_digits = PermissionsMode::parse_octal("644").unwrap();
    let from_bits = PermissionsMode::parse_decimal_repr(420).unwrap();
    let from_literal = PermissionsMode::parse_decimal_repr("0o644").unwrap();

    assert_eq!(from_digits, from_bits);
    assert_eq!(from_digits, from_literal);
    assert_eq!(from_digits, PermissionsMode::parse(0o644).unwrap());
    assert_eq!(from_digits, PermissionsMode::parse("644").unwrap());

    assert_eq!(from_digits.owner().description(), "Read and write permissions");
    assert_eq!(from_digits.group().description(), "Read permission only");
    assert_eq!(from_digits.mode_as_octal_literal(), "0o644");
}

#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
#[cfg_attr(not(target_arch = "wasm32"), test)]
fn test_rejected_inputs_report_invalid_octal() {
    let cases: [(PermissionsResult<String>, &str); 5] = [
        (
            normalize_octal_text("118"),
            "invalid bits in octal representation, bits must range from 0 to 7",
        ),
        (
            normalize_octal_text("7777"),
            "invalid octal representation length, must have a length ranging from 1 to 3",
        ),
        (
            normalize_from_decimal_repr("999"),
            "invalid octal representation length, must have a length ranging from 1 to 3",
        ),
        (
            normalize_from_decimal_repr("0o9"),
            "must be a valid octal literal",
        ),
        (
            normalize_from_decimal_repr("0x1ff"),
            "must be a valid decimal representation of an octal",
        ),
    ];

    for (result, message) in cases {
        let err = result.unwrap_err();
        assert!(err.is_invalid_octal());
        assert_eq!(err.to_string(), message);
    }

    assert!(!is_octal_integer("118"));
    assert!(!is_decimal_repr("0x1ff"));
}

#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
#[cfg_attr(not(target_arch = "wasm32"), test)]
fn test_digit_table_lookup() {
    let config = OctalDigitConfig::lookup(5).unwrap();
    assert_eq!(config.description, "Read and execute permissions");
    assert!(config.read && !config.write && config.execute);

    assert!(OctalDigitConfig::lookup(8).unwrap_err().is_invalid_octal());
    assert!(OctalDigitConfig::lookup(-1).unwrap_err().is_invalid_octal());
}

#[cfg(feature = "serde")]
#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
#[cfg_attr(not(target_arch = "wasm32"), test)]
fn test_modes_from_json_documents() -> Result<(), PermissionsError> {
    let document = serde_json::json!({
        "bits": 493,
        "literal": "0o755",
        "digits": "755",
        "broken": true,
    });

    let bits = OctalInput::try_from(&document["bits"])?;
    let literal = OctalInput::try_from(&document["literal"])?;
    let digits = OctalInput::try_from(&document["digits"])?;

    assert_eq!(normalize_from_decimal_repr(bits.clone())?, "755");
    assert_eq!(normalize_from_decimal_repr(literal)?, "755");
    assert_eq!(normalize_octal_text(digits)?, "755");
    assert!(!is_octal_integer(bits));

    // A wrong shape never reaches the predicates, it surfaces as its own error
    let err = OctalInput::try_from(&document["broken"]).unwrap_err();
    assert_eq!(err, PermissionsError::TypeMismatch { found: "bool" });
    assert!(!err.is_invalid_octal());

    Ok(())
}
