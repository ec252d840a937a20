use crate::number::{deserialize_magnitude, deserialize_optional_magnitude};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The `{properties, data}` document every chart renderer consumes.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ChartDocument {
    pub properties: ChartProperties,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<ChartData>,
    /// Further top-level keys of a document passed through as a whole (bubble).
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ChartDocument {
    pub fn new(properties: ChartProperties, data: Option<ChartData>) -> Self {
        Self {
            properties,
            data,
            extra: Map::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ChartProperties {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(rename = "yDataType", skip_serializing_if = "Option::is_none")]
    pub y_data_type: Option<String>,
    #[serde(rename = "xDataType", skip_serializing_if = "Option::is_none")]
    pub x_data_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub groups: Option<Vec<ChartGroup>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stacked: Option<bool>,
    /// Gauge needle value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    /// Formatted x-axis labels (table documents only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<String>>,
    #[serde(rename = "colorLength", skip_serializing_if = "Option::is_none")]
    pub color_length: Option<usize>,
    /// Input properties without a dedicated field (`quota`, `key`, ...), carried verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ChartProperties {
    /// Builds properties from an unwrapped input `properties` object.
    ///
    /// Known keys holding a value of the wrong shape stay in `extra` untouched.
    pub fn from_raw(raw: Map<String, Value>) -> Self {
        let mut out = Self::default();
        for (key, value) in raw {
            let rest = match key.as_str() {
                "title" => take_string(value, &mut out.title),
                "yDataType" => take_string(value, &mut out.y_data_type),
                "xDataType" => take_string(value, &mut out.x_data_type),
                "stacked" => match value {
                    Value::Bool(b) => {
                        out.stacked = Some(b);
                        None
                    }
                    other => Some(other),
                },
                "groups" => match Vec::<ChartGroup>::deserialize(&value) {
                    Ok(groups) => {
                        out.groups = Some(groups);
                        None
                    }
                    Err(_) => Some(value),
                },
                "value" => match value.as_f64() {
                    Some(v) => {
                        out.value = Some(v);
                        None
                    }
                    None => Some(value),
                },
                "labels" => match Vec::<String>::deserialize(&value) {
                    Ok(labels) => {
                        out.labels = Some(labels);
                        None
                    }
                    Err(_) => Some(value),
                },
                "colorLength" => match value.as_u64() {
                    Some(n) => {
                        out.color_length = Some(n as usize);
                        None
                    }
                    None => Some(value),
                },
                _ => Some(value),
            };
            if let Some(rest) = rest {
                out.extra.insert(key, rest);
            }
        }
        out
    }

    /// Carries `raw` unchanged: every key lands in `extra`, in input order, with its original
    /// JSON value. Used for documents whose `data` is passed through.
    pub fn verbatim(raw: Map<String, Value>) -> Self {
        Self {
            extra: raw,
            ..Self::default()
        }
    }

    /// The `stacked` flag, whether typed or carried verbatim.
    pub fn stacked(&self) -> Option<bool> {
        self.stacked
            .or_else(|| self.extra.get("stacked").and_then(Value::as_bool))
    }

    /// String-valued `key` property; overrides the synthetic series key of discrete bars.
    pub fn key(&self) -> Option<&str> {
        self.extra
            .get("key")
            .and_then(Value::as_str)
            .filter(|k| !k.is_empty())
    }

    pub(crate) fn clear_extra(&mut self, key: &str) {
        self.extra.shift_remove(key);
    }
}

fn take_string(value: Value, slot: &mut Option<String>) -> Option<Value> {
    match value {
        Value::String(s) => {
            *slot = Some(s);
            None
        }
        other => Some(other),
    }
}

/// One x-axis category (line/area) or one retained value-group (bar family).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartGroup {
    /// 1-based.
    pub group: usize,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ChartData {
    Bar(Vec<BarSeries>),
    Pie(Vec<PieSlice>),
    Funnel(Vec<FunnelStage>),
    Line(Vec<LineSeries>),
    Gauge(Vec<GaugePoint>),
    Bubble(Vec<BubblePoint>),
    /// Already-canonical input data, emitted verbatim.
    Passthrough(Value),
}

impl ChartData {
    pub fn len(&self) -> usize {
        match self {
            ChartData::Bar(v) => v.len(),
            ChartData::Pie(v) => v.len(),
            ChartData::Funnel(v) => v.len(),
            ChartData::Line(v) => v.len(),
            ChartData::Gauge(v) => v.len(),
            ChartData::Bubble(v) => v.len(),
            ChartData::Passthrough(v) => v.as_array().map_or(0, Vec::len),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarSeries {
    pub key: String,
    #[serde(rename = "type", default = "bar_type_tag")]
    pub series_type: String,
    #[serde(default)]
    pub disabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub classes: Option<Value>,
    pub values: Vec<BarPoint>,
    /// Working copy of `values` maintained by live editors; preferred by table reshapes.
    #[serde(rename = "_values", default, skip_serializing_if = "Option::is_none")]
    pub working_values: Option<Vec<BarPoint>>,
}

fn bar_type_tag() -> String {
    "bar".to_string()
}

impl BarSeries {
    pub fn new(key: String, values: Vec<BarPoint>) -> Self {
        Self {
            key,
            series_type: bar_type_tag(),
            disabled: false,
            color: None,
            classes: None,
            values,
            working_values: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarPoint {
    #[serde(default)]
    pub series: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<Value>,
    #[serde(default)]
    pub x: usize,
    #[serde(default = "nan", deserialize_with = "deserialize_magnitude")]
    pub y: f64,
    /// Edited magnitude, used when `y` is not numeric.
    #[serde(
        default,
        deserialize_with = "deserialize_optional_magnitude",
        skip_serializing_if = "Option::is_none"
    )]
    pub value: Option<f64>,
}

fn nan() -> f64 {
    f64::NAN
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieSlice {
    pub key: String,
    pub disabled: bool,
    pub value: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub classes: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunnelStage {
    pub key: String,
    #[serde(default)]
    pub disabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub classes: Option<Value>,
    pub values: Vec<BarPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineSeries {
    pub key: String,
    pub values: Vec<LinePoint>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinePoint {
    #[serde(deserialize_with = "deserialize_magnitude")]
    pub x: f64,
    #[serde(default = "nan", deserialize_with = "deserialize_magnitude")]
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GaugePoint {
    pub key: String,
    /// Running total of this band and every band before it.
    pub y: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub classes: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BubblePoint {
    pub id: usize,
    pub x: Value,
    pub y: f64,
    pub shape: String,
    pub account_name: Value,
    pub assigned_user_name: Value,
    pub sales_stage: Value,
    pub sales_stage_short: Value,
    pub probability: Option<i64>,
    pub base_amount: Option<i64>,
    pub currency_symbol: String,
}
