//! Serialization of the padding option.
#![cfg(feature = "serde")]

use rfc4648_base64url::Padding;

#[test]
fn padding_uses_lowercase_names() {
    assert_eq!(serde_json::to_string(&Padding::Include).unwrap(), "\"include\"");
    assert_eq!(serde_json::from_str::<Padding>("\"omit\"").unwrap(), Padding::Omit);
}
