//! Serialization of the case option.
#![cfg(feature = "serde")]

use rfc4648_base16::Case;

#[test]
fn case_uses_lowercase_names() {
    assert_eq!(serde_json::to_string(&Case::Upper).unwrap(), "\"upper\"");
    assert_eq!(serde_json::from_str::<Case>("\"lower\"").unwrap(), Case::Lower);
}
