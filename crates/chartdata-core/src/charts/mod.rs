//! Per-chart-type shaping of classified value-group input.

pub mod bar;
pub mod bubble;
pub mod funnel;
pub mod gauge;
pub mod line;
pub mod pie;

use crate::config::TransformConfig;
use crate::input::{RawValueGroup, RawValueGroupInput};
use crate::labels::{pick_label_or, pick_value_label};
use crate::model::{ChartData, ChartDocument, ChartGroup, ChartProperties};
use crate::number::{sum_values, to_json_number};
use crate::{BarType, ChartType};
use serde_json::Value;

/// Output of one chart-type branch, before properties are derived.
#[derive(Debug, Clone)]
pub(crate) struct Shaped {
    pub data: ChartData,
    pub groups: Vec<ChartGroup>,
    /// Gauge needle value.
    pub pointer: Option<f64>,
}

impl Shaped {
    pub fn new(data: ChartData, groups: Vec<ChartGroup>) -> Self {
        Self {
            data,
            groups,
            pointer: None,
        }
    }
}

/// Read-only view over a value-group input shared by every branch.
pub(crate) struct Shaping<'a> {
    pub input: &'a RawValueGroupInput,
    pub properties: &'a ChartProperties,
    pub config: &'a TransformConfig,
    pub discrete: bool,
}

impl Shaping<'_> {
    pub fn label(&self, label: Option<&Value>) -> String {
        pick_label_or(label, self.config.label_placeholder())
    }

    /// Label of top-level category `index`.
    pub fn series_label(&self, index: usize) -> String {
        self.label(self.input.labels.get(index))
    }

    /// Key for a value-group that becomes its own series/slice/stage: its own label, else the
    /// top-level label at the same position.
    pub fn group_key(&self, index: usize, group: &RawValueGroup) -> String {
        match &group.label {
            Some(own) => self.label(Some(own)),
            None => self.series_label(index),
        }
    }

    /// Label for a value-group that becomes an x-axis category.
    pub fn category_label(&self, group: &RawValueGroup) -> String {
        self.label(group.label.as_ref())
    }

    /// Number of parallel series in cross-tabulated input: one per top-level label, or the
    /// widest value-group when no labels are given.
    pub fn series_count(&self) -> usize {
        if self.input.labels.is_empty() {
            self.input
                .groups
                .iter()
                .map(|g| g.values.len())
                .max()
                .unwrap_or(0)
        } else {
            self.input.labels.len()
        }
    }
}

/// A dataset is discrete when every value-group holds exactly one magnitude, the number of
/// value-groups equals the number of top-level labels, and each value-group's own label (when
/// it has one) matches the top-level label at the same position.
pub fn is_discrete(input: &RawValueGroupInput, config: &TransformConfig) -> bool {
    let placeholder = config.label_placeholder();
    !input.groups.is_empty()
        && input.groups.len() == input.labels.len()
        && input
            .groups
            .iter()
            .zip(&input.labels)
            .all(|(group, label)| {
                group.values.len() == 1
                    && group.label.as_ref().is_none_or(|own| {
                        pick_label_or(Some(own), placeholder)
                            == pick_label_or(Some(label), placeholder)
                    })
            })
}

/// Point label for a value-group collapsed into one magnitude: the literal label when it holds
/// a single magnitude, else the numeric total.
pub(crate) fn summary_label(group: &RawValueGroup) -> Option<Value> {
    if group.values.len() == 1 {
        pick_value_label(group, 0)
    } else {
        Some(to_json_number(sum_values(&group.values)))
    }
}

pub(crate) fn shape_value_groups(
    input: &RawValueGroupInput,
    chart_type: ChartType,
    bar_type: Option<BarType>,
    config: &TransformConfig,
) -> ChartDocument {
    let mut properties = ChartProperties::from_raw(input.properties.clone());
    let discrete = is_discrete(input, config);
    tracing::debug!(
        chart_type = %chart_type,
        groups = input.groups.len(),
        labels = input.labels.len(),
        discrete,
        "shaping value-groups"
    );

    let shaped = {
        let ctx = Shaping {
            input,
            properties: &properties,
            config,
            discrete,
        };
        match chart_type {
            ChartType::Multibar | ChartType::Pareto => bar::shape(&ctx, bar_type),
            ChartType::Pie => pie::shape(&ctx),
            ChartType::Funnel => funnel::shape(&ctx),
            ChartType::Line | ChartType::Area => line::shape(&ctx),
            ChartType::Gauge => gauge::shape(&ctx),
            other => {
                tracing::debug!(chart_type = %other, "chart type has no value-group shaping");
                return ChartDocument::new(properties, None);
            }
        }
    };

    properties.clear_extra("groups");
    properties.groups = Some(shaped.groups);
    if matches!(chart_type, ChartType::Multibar | ChartType::Pareto) {
        properties.clear_extra("stacked");
        properties.stacked = Some(properties.stacked.unwrap_or(config.default_stacked()));
    }
    if let Some(pointer) = shaped.pointer {
        properties.clear_extra("value");
        properties.value = Some(pointer);
    }
    // Sized from the emitted data so palettes match what is drawn.
    properties.clear_extra("colorLength");
    properties.color_length = Some(shaped.data.len());
    tracing::trace!(
        chart_type = %chart_type,
        series = shaped.data.len(),
        "value-groups shaped"
    );

    ChartDocument::new(properties, Some(shaped.data))
}
