use crate::expression::Profile;

/// Returns a copy of `profile` with its top-level keys in ascending UTF-16 code unit order,
/// the order JavaScript hosts sort keys in, so equal profiles are signed over the same bytes.
/// Nested objects are left as they are.
pub fn canonicalize(profile: &Profile) -> Profile {
    let mut fields: Vec<(&String, &serde_json::Value)> = profile.iter().collect();
    fields.sort_by(|(a, _), (b, _)| a.encode_utf16().cmp(b.encode_utf16()));
    fields
        .into_iter()
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::canonicalize;
    use crate::expression::Profile;

    fn profile(value: serde_json::Value) -> Profile {
        value.as_object().cloned().expect("test profile must be an object")
    }

    #[test]
    fn sorts_top_level_keys() {
        let input = profile(json!({
            "name": "Alice",
            "@context": {"foaf": "http://xmlns.com/foaf/0.1/"},
            "avatar": "ipfs://avatar",
            "Zeta": 1
        }));
        let canonical = canonicalize(&input);

        let keys: Vec<&str> = canonical.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["@context", "Zeta", "avatar", "name"]);
        assert_eq!(canonical, input);
    }

    #[test]
    fn key_order_of_input_does_not_matter() {
        let a = profile(json!({"b": 2, "a": 1, "c": [3]}));
        let b = profile(json!({"c": [3], "a": 1, "b": 2}));

        let a = serde_json::to_string(&canonicalize(&a)).unwrap();
        let b = serde_json::to_string(&canonicalize(&b)).unwrap();
        assert_eq!(a, b);
        assert_eq!(a, r#"{"a":1,"b":2,"c":[3]}"#);
    }

    #[test]
    fn is_idempotent() {
        let input = profile(json!({"username": "alice", "bio": "hi", "age": 30}));
        let once = canonicalize(&input);
        let twice = canonicalize(&once);
        assert_eq!(
            serde_json::to_string(&once).unwrap(),
            serde_json::to_string(&twice).unwrap()
        );
    }

    #[test]
    fn leaves_input_and_nested_objects_untouched() {
        let input = profile(json!({"z": {"y": 1, "x": 2}, "a": true}));
        let canonical = canonicalize(&input);

        let input_keys: Vec<&str> = input.keys().map(String::as_str).collect();
        assert_eq!(input_keys, vec!["z", "a"]);
        assert_eq!(
            serde_json::to_string(&canonical).unwrap(),
            r#"{"a":true,"z":{"y":1,"x":2}}"#
        );
    }

    #[test]
    fn orders_keys_by_utf16_code_units() {
        let input = profile(json!({"\u{FF21}": 2, "\u{1F600}": 1, "a": 0}));
        let canonical = canonicalize(&input);

        let keys: Vec<&str> = canonical.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["a", "\u{1F600}", "\u{FF21}"]);
    }

    #[test]
    fn empty_profile_stays_empty() {
        assert!(canonicalize(&Profile::new()).is_empty());
    }
}
