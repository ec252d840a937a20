//! Classification of raw chart input.
//!
//! Raw documents are loosely shaped: `properties` may be array-wrapped, value-groups may be
//! objects or bare columns, and a document may already carry canonical `data`. All of that is
//! resolved here, once, into a [`ChartInput`] variant before any chart-specific shaping runs.

use crate::ChartType;
use serde::Deserialize;
use serde_json::{Map, Value};

/// One element of the raw `values` sequence.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawValueGroup {
    pub label: Option<Value>,
    pub values: Vec<Value>,
    pub value_labels: Vec<Value>,
    pub color: Option<Value>,
    pub classes: Option<Value>,
    pub disabled: Option<bool>,
    /// Gauge needle value; only meaningful on the first value-group of a gauge input.
    pub gvalue: Option<Value>,
}

impl RawValueGroup {
    /// Accepts an object with the documented keys, or a bare array of magnitudes.
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::Object(obj) => Self {
                label: obj.get("label").filter(|v| !v.is_null()).cloned(),
                values: array_or_empty(obj.get("values")),
                value_labels: array_or_empty(obj.get("valuelabels")),
                color: obj.get("color").filter(|v| !v.is_null()).cloned(),
                classes: obj.get("classes").filter(|v| !v.is_null()).cloned(),
                disabled: obj.get("disabled").and_then(Value::as_bool),
                gvalue: obj.get("gvalue").filter(|v| !v.is_null()).cloned(),
            },
            Value::Array(items) => Self {
                values: items.clone(),
                ..Self::default()
            },
            _ => Self::default(),
        }
    }

    pub fn has_values(&self) -> bool {
        !self.values.is_empty()
    }
}

/// A flat business record feeding the bubble chart.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RawRecord {
    pub date_closed: Option<Value>,
    pub likely_case: Option<Value>,
    pub base_rate: Option<Value>,
    pub account_name: Option<Value>,
    pub assigned_user_name: Option<Value>,
    pub sales_stage: Option<Value>,
    pub probability: Option<Value>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RawValueGroupInput {
    pub properties: Map<String, Value>,
    /// Top-level `label` sequence.
    pub labels: Vec<Value>,
    pub groups: Vec<RawValueGroup>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RawRecordsInput {
    pub properties: Map<String, Value>,
    pub records: Vec<RawRecord>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RawPassthroughInput {
    pub properties: Map<String, Value>,
    pub data: Value,
    /// Top-level keys besides `properties` and `data`.
    pub rest: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ChartInput {
    ValueGroups(RawValueGroupInput),
    Records(RawRecordsInput),
    Passthrough(RawPassthroughInput),
    Empty { properties: Map<String, Value> },
}

impl ChartInput {
    pub fn kind(&self) -> &'static str {
        match self {
            ChartInput::ValueGroups(_) => "value-groups",
            ChartInput::Records(_) => "records",
            ChartInput::Passthrough(_) => "passthrough",
            ChartInput::Empty { .. } => "empty",
        }
    }
}

/// Maps a raw input document onto exactly one [`ChartInput`] variant for `chart_type`.
pub fn classify(input: &Value, chart_type: ChartType) -> ChartInput {
    let Value::Object(doc) = input else {
        return ChartInput::Empty {
            properties: Map::new(),
        };
    };

    let properties = unwrap_properties(doc.get("properties"));

    if chart_type.is_value_typed() {
        let groups = doc
            .get("values")
            .and_then(Value::as_array)
            .map(|items| items.iter().map(RawValueGroup::from_value).collect::<Vec<_>>())
            .unwrap_or_default();
        if groups.iter().any(RawValueGroup::has_values) {
            return ChartInput::ValueGroups(RawValueGroupInput {
                properties,
                labels: array_or_empty(doc.get("label")),
                groups,
            });
        }
    }

    if let Some(data) = doc.get("data") {
        let rest = doc
            .iter()
            .filter(|(key, _)| !matches!(key.as_str(), "properties" | "data"))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();
        return ChartInput::Passthrough(RawPassthroughInput {
            properties,
            data: data.clone(),
            rest,
        });
    }

    if chart_type == ChartType::Bubble {
        if let Some(records) = doc.get("records").and_then(Value::as_array) {
            let records = records
                .iter()
                .map(|r| RawRecord::deserialize(r).unwrap_or_default())
                .collect();
            return ChartInput::Records(RawRecordsInput {
                properties,
                records,
            });
        }
    }

    ChartInput::Empty { properties }
}

/// `properties` may be wrapped in a one-element array; anything that is not an object is
/// treated as absent.
pub fn unwrap_properties(raw: Option<&Value>) -> Map<String, Value> {
    let raw = match raw {
        Some(Value::Array(items)) => items.first(),
        other => other,
    };
    match raw {
        Some(Value::Object(obj)) => obj.clone(),
        _ => Map::new(),
    }
}

fn array_or_empty(value: Option<&Value>) -> Vec<Value> {
    value
        .and_then(Value::as_array)
        .cloned()
        .unwrap_or_default()
}
