//! Serde-related test utilities.

use crate::test_item::{new_map, TestKey, TestMap, TestValue};
use bidimap::{internal::ValidateCompact, DupPolicy};

/// Builds a map from `associations` with strict semantics, checks that it
/// survives a JSON round trip, and checks that deserializing the raw
/// associations fails exactly when strict construction does.
pub fn assert_serialize_roundtrip(associations: Vec<(TestKey, TestValue)>) {
    let mut map = new_map();
    let mut first_error = None;
    for &(key, value) in &associations {
        // Ignore errors from duplicates which are quite possible to occur
        // here, since we're just testing serialization. But store the
        // first error to ensure that deserialization returns errors.
        if let Err(error) = map.put(key, value, DupPolicy::RAISE) {
            if first_error.is_none() {
                first_error = Some(error.into_owned());
            }
        }
    }

    let serialized = serde_json::to_string(&map).unwrap();
    let deserialized: TestMap = serde_json::from_str(&serialized).unwrap();
    deserialized
        .validate(ValidateCompact::Compact)
        .expect("deserialized map is valid");
    assert_eq!(map, deserialized, "maps match");

    // Also check that the output is a plain JSON object.
    let as_object: std::collections::BTreeMap<TestKey, TestValue> =
        serde_json::from_str(&serialized).unwrap();
    assert_eq!(as_object.len(), map.len(), "object has one entry per association");

    // Now write out the full list of associations as an object, duplicates
    // included, and see that the error reported is the same as first_error.
    // serde_json passes repeated object keys through to the visitor.
    let entries: Vec<String> = associations
        .iter()
        .map(|(key, value)| {
            format!("\"{key}\":{}", serde_json::to_string(value).unwrap())
        })
        .collect();
    let raw = format!("{{{}}}", entries.join(","));
    let res: Result<TestMap, _> = serde_json::from_str(&raw);
    match (first_error, res) {
        (None, Ok(deserialized)) => {
            assert_eq!(map, deserialized, "maps match");
        }
        (Some(first_error), Ok(_)) => {
            panic!(
                "expected error ({first_error}), but deserialization succeeded"
            )
        }
        (None, Err(error)) => {
            panic!(
                "unexpected error: {error}, deserialization should have succeeded"
            )
        }
        (Some(first_error), Err(error)) => {
            // The deserialization error is a custom error carrying the
            // map's error message, followed by a position.
            let expected = first_error.to_string();
            let actual = error.to_string();

            let Some((actual_prefix, _)) = actual.rsplit_once(" at line ")
            else {
                panic!(
                    "error does not contain line number at the end: {actual}"
                );
            };
            assert_eq!(actual_prefix, expected, "error matches");
        }
    }
}
