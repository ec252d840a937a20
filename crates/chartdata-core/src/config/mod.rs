use crate::{Error, Result};
use serde_json::map::Entry;
use serde_json::{Map, Value, json};

#[derive(Debug, Clone, PartialEq)]
pub struct TransformConfig(Value);

impl Default for TransformConfig {
    fn default() -> Self {
        Self(default_config_value())
    }
}

impl TransformConfig {
    pub fn from_value(value: Value) -> Self {
        Self(value)
    }

    /// Parses config overrides from JSON text. The root must be an object.
    pub fn from_json_str(text: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(text)?;
        if !value.is_object() {
            return Err(Error::InvalidConfig {
                message: "config root must be a JSON object".to_string(),
            });
        }
        Ok(Self(value))
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn get(&self, dotted_path: &str) -> Option<&Value> {
        let mut cur = &self.0;
        for segment in dotted_path.split('.') {
            cur = cur.as_object()?.get(segment)?;
        }
        Some(cur)
    }

    pub fn get_str(&self, dotted_path: &str) -> Option<&str> {
        self.get(dotted_path)?.as_str()
    }

    pub fn get_bool(&self, dotted_path: &str) -> Option<bool> {
        self.get(dotted_path)?.as_bool()
    }

    pub fn get_object(&self, dotted_path: &str) -> Option<&Map<String, Value>> {
        self.get(dotted_path)?.as_object()
    }

    pub fn deep_merge(&mut self, other: &Value) {
        deep_merge_value(&mut self.0, other);
    }

    pub(crate) fn label_placeholder(&self) -> &str {
        self.get_str("labels.placeholder")
            .unwrap_or(crate::labels::LABEL_PLACEHOLDER)
    }

    pub(crate) fn default_bar_key(&self) -> &str {
        self.get_str("multibar.defaultKey").unwrap_or("Module")
    }

    pub(crate) fn default_stacked(&self) -> bool {
        self.get_bool("multibar.stacked").unwrap_or(true)
    }

    pub(crate) fn currency_symbol(&self) -> &str {
        self.get_str("bubble.currencySymbol").unwrap_or("$")
    }

    pub(crate) fn sales_stage_short(&self, stage: &str) -> Option<&str> {
        self.get_object("bubble.salesStageShort")?.get(stage)?.as_str()
    }
}

fn default_config_value() -> Value {
    json!({
        "labels": {
            "placeholder": crate::labels::LABEL_PLACEHOLDER
        },
        "multibar": {
            "defaultKey": "Module",
            "stacked": true
        },
        "bubble": {
            "currencySymbol": "$",
            "salesStageShort": {
                "Negotiation/Review": "Negotiat./Review",
                "Perception Analysis": "Percept. Analysis",
                "Proposal/Price Quote": "Proposal/Quote",
                "Id. Decision Makers": "Id. Deciders"
            }
        }
    })
}

/// Objects merge key by key; any other incoming value replaces what is there.
fn deep_merge_value(base: &mut Value, incoming: &Value) {
    match (base, incoming) {
        (Value::Object(target), Value::Object(source)) => {
            for (key, value) in source {
                match target.entry(key.as_str()) {
                    Entry::Occupied(mut slot) => deep_merge_value(slot.get_mut(), value),
                    Entry::Vacant(slot) => {
                        slot.insert(value.clone());
                    }
                }
            }
        }
        (slot, value) => *slot = value.clone(),
    }
}
