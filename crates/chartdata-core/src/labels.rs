use crate::input::RawValueGroup;
use crate::number::format_number;
use serde_json::Value;

/// Placeholder used when a label is absent or empty.
pub const LABEL_PLACEHOLDER: &str = "undefined";

/// Extracts a display label, falling back to [`LABEL_PLACEHOLDER`].
pub fn pick_label(label: Option<&Value>) -> String {
    pick_label_or(label, LABEL_PLACEHOLDER)
}

/// Extracts a display label from a bare string, a sequence (first element wins) or an object
/// carrying a `label` field. Falsy values (`""`, `0`, `false`, `null`) yield `placeholder`.
pub fn pick_label_or(label: Option<&Value>, placeholder: &str) -> String {
    resolve_label(label)
        .filter(|l| !l.is_empty())
        .unwrap_or_else(|| placeholder.to_string())
}

fn resolve_label(label: Option<&Value>) -> Option<String> {
    match label? {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Array(items) => resolve_label(items.first()),
        Value::Object(obj) => resolve_label(obj.get("label")),
        Value::Bool(true) => Some("true".to_string()),
        Value::Bool(false) => None,
        Value::Number(n) => {
            let v = n.as_f64()?;
            if v == 0.0 || v.is_nan() {
                None
            } else {
                Some(format_number(v))
            }
        }
    }
}

/// Literal label for the magnitude at `index`: `valuelabels[index]` when present, else the
/// raw magnitude itself.
pub fn pick_value_label(group: &RawValueGroup, index: usize) -> Option<Value> {
    group
        .value_labels
        .get(index)
        .filter(|l| !l.is_null())
        .or_else(|| group.values.get(index))
        .cloned()
}
