//! Shared test utilities for the legacyscan workspace.
//!
//! Used by the CLI integration tests, which cannot reach `#[cfg(test)]` helpers of the
//! library crates.

use serde_json::{Value, json};

/// Normalize non-deterministic JSON fields for golden comparison.
///
/// 1. **Root-only**: `tool.version` becomes `"__VERSION__"` when the root object is a
///    report envelope (`schema`, `tool`, `verdict`, `data`).
/// 2. **Recursive**: `started_at` and `finished_at` become `"__TIMESTAMP__"` at any depth.
pub fn normalize_nondeterministic(mut value: Value) -> Value {
    if let Some(obj) = value.as_object_mut() {
        let is_envelope = obj.contains_key("schema")
            && obj.contains_key("tool")
            && obj.contains_key("verdict")
            && obj.contains_key("data");
        if is_envelope
            && let Some(tool) = obj.get_mut("tool")
            && let Some(tool_obj) = tool.as_object_mut()
            && tool_obj.contains_key("version")
        {
            tool_obj.insert(
                "version".to_string(),
                Value::String("__VERSION__".to_string()),
            );
        }
    }
    normalize_timestamps_recursive(&mut value);
    value
}

fn normalize_timestamps_recursive(value: &mut Value) {
    match value {
        Value::Object(map) => {
            for key in ["started_at", "finished_at"] {
                if let Some(v) = map.get_mut(key) {
                    *v = Value::String("__TIMESTAMP__".to_string());
                }
            }
            for val in map.values_mut() {
                normalize_timestamps_recursive(val);
            }
        }
        Value::Array(arr) => {
            for val in arr.iter_mut() {
                normalize_timestamps_recursive(val);
            }
        }
        _ => {}
    }
}

/// Units covering each usage context, plus one clean unit.
pub fn sample_units() -> Value {
    json!([
        {
            "pgm_name": "ZCREDIT",
            "inc_name": "ZCREDIT_F01",
            "type": "PROG",
            "code": "SELECT * FROM S066 WHERE KUNNR = '1'.\nCALL TRANSACTION 'VKM2'."
        },
        {
            "pgm_name": "ZCREDIT",
            "inc_name": "ZCREDIT_F02",
            "type": "PROG",
            "code": "SUBMIT rvkred04 AND RETURN.\nCLEAR S066-FIELD.\nX = S067."
        },
        {
            "pgm_name": "ZCLEAN",
            "inc_name": "ZCLEAN",
            "type": "PROG",
            "code": "WRITE: 'hello'."
        }
    ])
}
