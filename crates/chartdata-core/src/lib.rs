#![forbid(unsafe_code)]

//! Chart-data normalization (headless).
//!
//! Chart inputs arrive in several loosely specified shapes: label/value parallel arrays,
//! column-oriented value-groups, flat sales records, or data that is already canonical. This
//! crate classifies such input once and reshapes it into the canonical `{properties, data}`
//! document that chart renderers consume, per chart type.
//!
//! Design goals:
//! - pure and deterministic: identical input yields deep-equal output
//! - never fail on well-formed but empty input
//! - numeric coercion matches the loosely-typed source data (`"12abc"` is `12`, `"abc"` is
//!   `NaN`, and `NaN` propagates through totals)

pub mod charts;
pub mod config;
pub mod error;
pub mod input;
pub mod labels;
pub mod model;
pub mod number;
pub mod post_process;
pub mod table;

pub use config::TransformConfig;
pub use error::{Error, Result};
pub use input::{ChartInput, classify};
pub use labels::{LABEL_PLACEHOLDER, pick_label, pick_value_label};
pub use model::{
    BarPoint, BarSeries, BubblePoint, ChartData, ChartDocument, ChartGroup, ChartProperties,
    FunnelStage, GaugePoint, LinePoint, LineSeries, PieSlice,
};
pub use number::sum_values;
pub use post_process::StackedChart;
pub use table::{PlainTableFormatter, TableData, TableDocument, TableFormatter};

use serde_json::Value;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartType {
    Multibar,
    Pie,
    Funnel,
    Area,
    Line,
    Gauge,
    Bubble,
    Treemap,
    Tree,
    Globe,
    Pareto,
}

impl ChartType {
    pub const ALL: [ChartType; 11] = [
        ChartType::Multibar,
        ChartType::Pie,
        ChartType::Funnel,
        ChartType::Area,
        ChartType::Line,
        ChartType::Gauge,
        ChartType::Bubble,
        ChartType::Treemap,
        ChartType::Tree,
        ChartType::Globe,
        ChartType::Pareto,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ChartType::Multibar => "multibar",
            ChartType::Pie => "pie",
            ChartType::Funnel => "funnel",
            ChartType::Area => "area",
            ChartType::Line => "line",
            ChartType::Gauge => "gauge",
            ChartType::Bubble => "bubble",
            ChartType::Treemap => "treemap",
            ChartType::Tree => "tree",
            ChartType::Globe => "globe",
            ChartType::Pareto => "pareto",
        }
    }

    /// Chart types shaped from a `values` sequence.
    pub fn is_value_typed(self) -> bool {
        matches!(
            self,
            ChartType::Multibar
                | ChartType::Line
                | ChartType::Area
                | ChartType::Pie
                | ChartType::Funnel
                | ChartType::Gauge
                | ChartType::Pareto
        )
    }
}

impl std::fmt::Display for ChartType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChartType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        ChartType::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| Error::UnsupportedChartType {
                chart_type: s.to_string(),
            })
    }
}

/// Bar sub-type. Absent means "basic" bars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BarType {
    Stacked,
    Grouped,
}

impl BarType {
    pub fn as_str(self) -> &'static str {
        match self {
            BarType::Stacked => "stacked",
            BarType::Grouped => "grouped",
        }
    }
}

impl FromStr for BarType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "stacked" => Ok(BarType::Stacked),
            "grouped" => Ok(BarType::Grouped),
            _ => Err(Error::UnsupportedBarType {
                bar_type: s.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Transformer {
    config: TransformConfig,
}

impl Transformer {
    fn timing_enabled() -> bool {
        static ENABLED: std::sync::OnceLock<bool> = std::sync::OnceLock::new();
        *ENABLED.get_or_init(
            || match std::env::var("CHARTDATA_TRANSFORM_TIMING").as_deref() {
                Ok("1") | Ok("true") => true,
                _ => false,
            },
        )
    }

    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(mut self, overrides: TransformConfig) -> Self {
        // Merge overrides onto the defaults so unset keys keep their built-in values.
        self.config.deep_merge(overrides.as_value());
        self
    }

    pub fn config(&self) -> &TransformConfig {
        &self.config
    }

    /// Reshapes `input` into the canonical document for `chart_type`.
    ///
    /// `bar_type` only affects the bar family. Never fails: input without usable `values`,
    /// `data` or `records` yields empty `properties` and no `data`.
    pub fn transform(
        &self,
        input: &Value,
        chart_type: ChartType,
        bar_type: Option<BarType>,
    ) -> ChartDocument {
        let start = Self::timing_enabled().then(std::time::Instant::now);

        let classified = input::classify(input, chart_type);
        tracing::debug!(
            chart_type = %chart_type,
            bar_type = bar_type.map(BarType::as_str),
            input = classified.kind(),
            "classified chart input"
        );

        let doc = match classified {
            ChartInput::ValueGroups(groups) => {
                charts::shape_value_groups(&groups, chart_type, bar_type, &self.config)
            }
            ChartInput::Records(records) => charts::bubble::shape_records(&records, &self.config),
            ChartInput::Passthrough(passthrough) => {
                let mut doc = ChartDocument::new(
                    ChartProperties::verbatim(passthrough.properties),
                    Some(ChartData::Passthrough(passthrough.data)),
                );
                // Bubble documents that already carry data are returned whole.
                if chart_type == ChartType::Bubble {
                    doc.extra = passthrough.rest;
                }
                doc
            }
            ChartInput::Empty { properties } => {
                ChartDocument::new(ChartProperties::from_raw(properties), None)
            }
        };

        if let Some(start) = start {
            tracing::info!(
                chart_type = %chart_type,
                elapsed = ?start.elapsed(),
                series = doc.data.as_ref().map_or(0, ChartData::len),
                "[transform-timing]"
            );
        }
        doc
    }

    /// Parses `text` as JSON and transforms it.
    pub fn transform_str(
        &self,
        text: &str,
        chart_type: ChartType,
        bar_type: Option<BarType>,
    ) -> Result<ChartDocument> {
        let input: Value = serde_json::from_str(text)?;
        Ok(self.transform(&input, chart_type, bar_type))
    }

    pub fn transform_table_data(
        &self,
        doc: &ChartDocument,
        chart_type: ChartType,
        formatter: &dyn TableFormatter,
    ) -> TableDocument {
        table::transform_table_data(doc, chart_type, formatter)
    }

    pub fn post_process_data(
        &self,
        doc: &ChartDocument,
        chart_type: ChartType,
        chart: &mut dyn StackedChart,
    ) {
        post_process::post_process_data(doc, chart_type, chart, self.config.default_stacked());
    }
}

fn default_transformer() -> &'static Transformer {
    static DEFAULT: std::sync::OnceLock<Transformer> = std::sync::OnceLock::new();
    DEFAULT.get_or_init(Transformer::default)
}

/// [`Transformer::transform`] with the default configuration.
pub fn transform(input: &Value, chart_type: ChartType, bar_type: Option<BarType>) -> ChartDocument {
    default_transformer().transform(input, chart_type, bar_type)
}

/// [`Transformer::transform_table_data`] with the default configuration.
pub fn transform_table_data(
    doc: &ChartDocument,
    chart_type: ChartType,
    formatter: &dyn TableFormatter,
) -> TableDocument {
    default_transformer().transform_table_data(doc, chart_type, formatter)
}

/// [`Transformer::post_process_data`] with the default configuration.
pub fn post_process_data(doc: &ChartDocument, chart_type: ChartType, chart: &mut dyn StackedChart) {
    default_transformer().post_process_data(doc, chart_type, chart);
}

#[cfg(test)]
mod tests;
