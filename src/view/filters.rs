//! Pure template filters used by page rendering.

use std::collections::HashMap;

use tera::{Result, Value};

/// Fallback RGB triple for anything that is not a well-formed hex color.
const BLACK: &str = "0, 0, 0";

/// Order-preserving de-duplication of an array.
///
/// Each distinct value appears once, at the position of its first
/// occurrence. Equality is JSON value equality.
///
/// # Arguments
/// - `value` - Array to de-duplicate
/// - `_args` - Unused
///
/// # Returns
/// - `Ok(Value::Array)` - De-duplicated array
/// - `Err(tera::Error)` - Input was not an array
pub fn unique(value: &Value, _args: &HashMap<String, Value>) -> Result<Value> {
    let items = value
        .as_array()
        .ok_or_else(|| tera::Error::msg("unique filter expects an array"))?;

    let mut result: Vec<Value> = Vec::new();
    for item in items {
        if !result.contains(item) {
            result.push(item.clone());
        }
    }

    Ok(Value::Array(result))
}

/// Converts a `#RRGGBB` color to a decimal `"R, G, B"` triple.
///
/// Malformed input never fails: empty strings, strings without a leading
/// `#`, bodies that are not exactly six hex digits, and non-string values
/// all yield `"0, 0, 0"`.
///
/// # Arguments
/// - `value` - Hex color string
/// - `_args` - Unused
///
/// # Returns
/// - `Ok(Value::String)` - Decimal triple, e.g. `"255, 0, 0"`
pub fn hex_to_rgb(value: &Value, _args: &HashMap<String, Value>) -> Result<Value> {
    let hex = value.as_str().unwrap_or("");
    Ok(Value::String(hex_color_to_rgb(hex)))
}

/// The conversion itself, shared with the tests.
fn hex_color_to_rgb(hex: &str) -> String {
    if !hex.starts_with('#') {
        return BLACK.to_string();
    }

    let body = hex.trim_start_matches('#');
    if body.len() != 6 || !body.is_ascii() {
        return BLACK.to_string();
    }

    let channels = (
        u8::from_str_radix(&body[0..2], 16),
        u8::from_str_radix(&body[2..4], 16),
        u8::from_str_radix(&body[4..6], 16),
    );
    match channels {
        (Ok(r), Ok(g), Ok(b)) => format!("{r}, {g}, {b}"),
        _ => BLACK.to_string(),
    }
}

#[cfg(test)]
mod test {
    use serde_json::json;

    use super::*;

    fn no_args() -> HashMap<String, Value> {
        HashMap::new()
    }

    /// Tests order-preserving de-duplication.
    ///
    /// Expected: [3, 1, 3, 2, 1] becomes [3, 1, 2]
    #[test]
    fn unique_preserves_first_occurrence_order() {
        let result = unique(&json!([3, 1, 3, 2, 1]), &no_args()).unwrap();
        assert_eq!(result, json!([3, 1, 2]));
    }

    /// Tests that strings de-duplicate by value equality.
    #[test]
    fn unique_handles_strings() {
        let result = unique(&json!(["daily", "weekly", "daily"]), &no_args()).unwrap();
        assert_eq!(result, json!(["daily", "weekly"]));
    }

    /// Tests that an already-distinct array is unchanged.
    #[test]
    fn unique_leaves_distinct_array_unchanged() {
        let result = unique(&json!([1, 2, 3]), &no_args()).unwrap();
        assert_eq!(result, json!([1, 2, 3]));
    }

    /// Tests that non-array input is rejected.
    #[test]
    fn unique_rejects_non_array() {
        assert!(unique(&json!("not an array"), &no_args()).is_err());
    }

    /// Tests well-formed hex colors in both cases.
    #[test]
    fn hex_to_rgb_parses_valid_colors() {
        let cases = [
            ("#FF0000", "255, 0, 0"),
            ("#00ff00", "0, 255, 0"),
            ("#0000FF", "0, 0, 255"),
            ("#FFD700", "255, 215, 0"),
        ];
        for (input, expected) in cases {
            let result = hex_to_rgb(&json!(input), &no_args()).unwrap();
            assert_eq!(result, json!(expected), "for input {input}");
        }
    }

    /// Tests every malformed-input class falls back to black.
    ///
    /// Expected: "0, 0, 0" for empty input, a missing `#`, non-hex digits,
    /// and a body that is not exactly six characters
    #[test]
    fn hex_to_rgb_falls_back_to_black() {
        let cases = ["", "123456", "#ZZZZZZ", "#ABC", "#ABCDEF12", "#FF00é0"];
        for input in cases {
            let result = hex_to_rgb(&json!(input), &no_args()).unwrap();
            assert_eq!(result, json!(BLACK), "for input {input:?}");
        }
    }

    /// Tests that repeated leading `#` characters are all stripped.
    #[test]
    fn hex_to_rgb_strips_repeated_hash() {
        let result = hex_to_rgb(&json!("##FF0000"), &no_args()).unwrap();
        assert_eq!(result, json!("255, 0, 0"));
    }

    /// Tests that a non-string value falls back to black.
    #[test]
    fn hex_to_rgb_handles_non_string() {
        let result = hex_to_rgb(&json!(42), &no_args()).unwrap();
        assert_eq!(result, json!(BLACK));
    }
}
