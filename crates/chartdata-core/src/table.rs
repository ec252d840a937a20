//! Re-projection of canonical documents into rows for an editable data grid.

use crate::ChartType;
use crate::model::{
    BarPoint, BarSeries, ChartData, ChartDocument, ChartProperties, FunnelStage, LineSeries,
    PieSlice,
};
use crate::number::format_number;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Formatting collaborators supplied by the chart the table belongs to.
pub trait TableFormatter {
    /// Value accessor for pie slices.
    fn pie_value(&self, slice: &PieSlice) -> f64 {
        slice.value
    }

    /// Tick formatter of a line chart's x axis.
    fn line_x_tick(&self, x: f64) -> String;

    /// Tick formatter of an area chart's x axis.
    fn area_x_tick(&self, x: f64) -> String {
        self.line_x_tick(x)
    }
}

/// Reads slice values as-is and prints ticks as plain numbers.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTableFormatter;

impl TableFormatter for PlainTableFormatter {
    fn line_x_tick(&self, x: f64) -> String {
        format_number(x)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TableDocument {
    pub properties: ChartProperties,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<TableData>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TableData {
    Rows(Vec<TableRow>),
    /// Data with no row projection, carried unchanged.
    Chart(ChartData),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableRow {
    pub key: String,
    pub disabled: bool,
    pub values: Vec<TablePoint>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TablePoint {
    pub x: usize,
    pub y: f64,
}

impl From<&BarPoint> for TablePoint {
    fn from(point: &BarPoint) -> Self {
        let y = match point.value {
            Some(value) if point.y.is_nan() => value,
            _ => point.y,
        };
        Self { x: point.x, y }
    }
}

pub fn transform_table_data(
    doc: &ChartDocument,
    chart_type: ChartType,
    formatter: &dyn TableFormatter,
) -> TableDocument {
    let mut properties = doc.properties.clone();
    let Some(data) = &doc.data else {
        return TableDocument {
            properties,
            data: None,
        };
    };

    let data = match chart_type {
        ChartType::Multibar => match series_of::<BarSeries>(data, |d| match d {
            ChartData::Bar(series) => Some(series.clone()),
            _ => None,
        }) {
            Some(series) => TableData::Rows(series.iter().map(bar_row).collect()),
            None => TableData::Chart(data.clone()),
        },
        ChartType::Funnel => match series_of::<FunnelStage>(data, |d| match d {
            ChartData::Funnel(stages) => Some(stages.clone()),
            _ => None,
        }) {
            Some(stages) => TableData::Rows(stages.iter().map(funnel_row).collect()),
            None => TableData::Chart(data.clone()),
        },
        ChartType::Pie => match data {
            ChartData::Pie(slices) => TableData::Rows(
                slices
                    .iter()
                    .map(|slice| TableRow {
                        key: slice.key.clone(),
                        disabled: slice.disabled,
                        values: vec![TablePoint {
                            x: 1,
                            y: formatter.pie_value(slice),
                        }],
                    })
                    .collect(),
            ),
            other => TableData::Chart(other.clone()),
        },
        ChartType::Line | ChartType::Area => {
            if let Some(series) = series_of::<LineSeries>(data, |d| match d {
                ChartData::Line(series) => Some(series.clone()),
                _ => None,
            }) {
                let labels = axis_labels(&series)
                    .into_iter()
                    .map(|x| match chart_type {
                        ChartType::Area => formatter.area_x_tick(x),
                        _ => formatter.line_x_tick(x),
                    })
                    .collect();
                properties.clear_extra("labels");
                properties.labels = Some(labels);
            }
            TableData::Chart(data.clone())
        }
        ChartType::Tree | ChartType::Treemap | ChartType::Globe | ChartType::Bubble => {
            TableData::Rows(Vec::new())
        }
        ChartType::Gauge | ChartType::Pareto => TableData::Chart(data.clone()),
    };

    TableDocument {
        properties,
        data: Some(data),
    }
}

/// Typed series for `data`: taken directly when already shaped, else re-read from passthrough
/// JSON. `None` when the data does not have the expected series shape.
fn series_of<T>(data: &ChartData, typed: impl Fn(&ChartData) -> Option<Vec<T>>) -> Option<Vec<T>>
where
    T: DeserializeOwned,
{
    match data {
        ChartData::Passthrough(raw @ Value::Array(_)) => Vec::<T>::deserialize(raw).ok(),
        other => typed(other),
    }
}

fn bar_row(series: &BarSeries) -> TableRow {
    let points = series.working_values.as_ref().unwrap_or(&series.values);
    TableRow {
        key: series.key.clone(),
        disabled: series.disabled,
        values: points.iter().map(TablePoint::from).collect(),
    }
}

fn funnel_row(stage: &FunnelStage) -> TableRow {
    TableRow {
        key: stage.key.clone(),
        disabled: stage.disabled,
        values: stage.values.iter().map(TablePoint::from).collect(),
    }
}

/// Union of every series' x values, ascending and de-duplicated.
fn axis_labels(series: &[LineSeries]) -> Vec<f64> {
    let mut xs: Vec<f64> = series
        .iter()
        .flat_map(|s| s.values.iter().map(|p| p.x))
        .filter(|x| !x.is_nan())
        .collect();
    xs.sort_by(f64::total_cmp);
    xs.dedup();
    xs
}
