//! Manifest cleaning
//!
//! The core transformation: given a parsed manifest object and a list of
//! field names, produce a new manifest with those top-level fields absent.
//! Nested structures pass through untouched.

use crate::manifest::Manifest;

/// Remove the named top-level fields from a manifest.
///
/// Returns a new manifest containing every key of the input except those
/// whose name appears in `fields`. Names that do not occur in the manifest
/// are silently ignored. Retained keys keep their original relative order.
///
/// Pure: the input manifest is not mutated.
pub fn clear_fields(manifest: &Manifest, fields: &[String]) -> Manifest {
    manifest
        .iter()
        .filter(|(key, _)| !fields.iter().any(|f| f == *key))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn manifest(value: serde_json::Value) -> Manifest {
        match value {
            serde_json::Value::Object(map) => map,
            _ => panic!("test manifest must be an object"),
        }
    }

    fn fields(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_removes_named_field() {
        let input = manifest(json!({
            "name": "a",
            "version": "1.0.0",
            "scripts": {"test": "x"},
            "private": true
        }));

        let result = clear_fields(&input, &fields(&["private"]));

        assert!(!result.contains_key("private"));
        assert_eq!(result.len(), 3);
        assert_eq!(result["name"], "a");
        assert_eq!(result["scripts"]["test"], "x");
    }

    #[test]
    fn test_empty_field_list_is_identity() {
        let input = manifest(json!({
            "name": "a",
            "version": "1.0.0",
            "private": true
        }));

        let result = clear_fields(&input, &[]);

        assert_eq!(result, input);
    }

    #[test]
    fn test_missing_field_is_ignored() {
        let input = manifest(json!({"name": "a"}));

        let result = clear_fields(&input, &fields(&["devDependencies"]));

        assert_eq!(result, input);
    }

    #[test]
    fn test_idempotent() {
        let input = manifest(json!({
            "name": "a",
            "scripts": {"test": "x"},
            "devDependencies": {"jest": "^29"}
        }));
        let remove = fields(&["devDependencies", "scripts"]);

        let once = clear_fields(&input, &remove);
        let twice = clear_fields(&once, &remove);

        assert_eq!(once, twice);
    }

    #[test]
    fn test_duplicate_names_harmless() {
        let input = manifest(json!({"name": "a", "private": true}));

        let result = clear_fields(&input, &fields(&["private", "private"]));

        assert_eq!(result, manifest(json!({"name": "a"})));
    }

    #[test]
    fn test_only_top_level_keys_removed() {
        let input = manifest(json!({
            "name": "a",
            "publishConfig": {
                // Nested key sharing a removal name must survive
                "private": "should stay"
            }
        }));

        let result = clear_fields(&input, &fields(&["private"]));

        assert_eq!(result["publishConfig"]["private"], "should stay");
    }

    #[test]
    fn test_retained_key_order_preserved() {
        let input = manifest(json!({
            "name": "a",
            "version": "1.0.0",
            "private": true,
            "scripts": {"test": "x"},
            "license": "MIT"
        }));

        let result = clear_fields(&input, &fields(&["private", "scripts"]));

        let keys: Vec<&str> = result.keys().map(|k| k.as_str()).collect();
        assert_eq!(keys, vec!["name", "version", "license"]);
    }

    #[test]
    fn test_input_not_mutated() {
        let input = manifest(json!({"name": "a", "private": true}));
        let before = input.clone();

        let _ = clear_fields(&input, &fields(&["private"]));

        assert_eq!(input, before);
    }
}
