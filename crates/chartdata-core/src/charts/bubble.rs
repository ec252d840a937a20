//! Bubble charts plot sales records: closing date on x, normalized likely amount on y.

use crate::config::TransformConfig;
use crate::input::{RawRecord, RawRecordsInput};
use crate::model::{BubblePoint, ChartData, ChartDocument, ChartGroup, ChartProperties};
use crate::number::{coerce_float, coerce_int, js_round};
use indexmap::IndexSet;
use serde_json::Value;

pub(crate) fn shape_records(input: &RawRecordsInput, config: &TransformConfig) -> ChartDocument {
    let points: Vec<BubblePoint> = input
        .records
        .iter()
        .enumerate()
        .map(|(id, record)| record_to_point(id, record, config))
        .collect();

    let stages: IndexSet<String> = points
        .iter()
        .filter_map(|p| p.sales_stage.as_str())
        .map(str::to_string)
        .collect();
    tracing::debug!(
        records = points.len(),
        stages = stages.len(),
        "shaped bubble records"
    );

    let mut properties = ChartProperties::from_raw(input.properties.clone());
    if properties.y_data_type.is_none() {
        properties.y_data_type = Some("numeric".to_string());
    }
    if properties.x_data_type.is_none() {
        properties.x_data_type = Some("datetime".to_string());
    }
    properties.clear_extra("groups");
    properties.groups = Some(
        stages
            .into_iter()
            .enumerate()
            .map(|(index, label)| ChartGroup {
                group: index + 1,
                label,
            })
            .collect(),
    );
    properties.clear_extra("colorLength");
    properties.color_length = Some(points.len());

    ChartDocument::new(properties, Some(ChartData::Bubble(points)))
}

fn record_to_point(id: usize, record: &RawRecord, config: &TransformConfig) -> BubblePoint {
    let likely = record.likely_case.as_ref().map_or(f64::NAN, coerce_int);
    let base_rate = record.base_rate.as_ref().map_or(f64::NAN, coerce_float);
    let sales_stage = record.sales_stage.clone().unwrap_or(Value::Null);
    let sales_stage_short = sales_stage
        .as_str()
        .and_then(|stage| config.sales_stage_short(stage))
        .map_or_else(|| sales_stage.clone(), |short| Value::String(short.to_string()));

    BubblePoint {
        id,
        x: record.date_closed.clone().unwrap_or(Value::Null),
        y: js_round(likely / base_rate),
        shape: "circle".to_string(),
        account_name: record.account_name.clone().unwrap_or(Value::Null),
        assigned_user_name: record.assigned_user_name.clone().unwrap_or(Value::Null),
        sales_stage,
        sales_stage_short,
        probability: as_integer(record.probability.as_ref().map_or(f64::NAN, coerce_int)),
        base_amount: as_integer(likely),
        currency_symbol: config.currency_symbol().to_string(),
    }
}

fn as_integer(v: f64) -> Option<i64> {
    v.is_finite().then_some(v as i64)
}
