//! Bar-family shaping (`multibar`, `pareto`).
//!
//! Which of the three layouts applies depends on the requested bar type and on whether the
//! input is discrete:
//!
//! | bar type | discrete | layout                                                 |
//! |----------|----------|--------------------------------------------------------|
//! | grouped  | no       | one series per top-level label, one point per group    |
//! | grouped  | yes      | one series per value-group, holding its total          |
//! | other    | no       | one series per value-group, holding its total          |
//! | other    | yes      | a single series, one point per value-group             |
//!
//! Value-groups without magnitudes are not retained.

use super::{Shaped, Shaping, summary_label};
use crate::BarType;
use crate::input::RawValueGroup;
use crate::labels::pick_value_label;
use crate::model::{BarPoint, BarSeries, ChartData, ChartGroup};
use crate::number::{coerce_float, sum_values};

pub(crate) fn shape(ctx: &Shaping<'_>, bar_type: Option<BarType>) -> Shaped {
    let grouped = bar_type == Some(BarType::Grouped);
    let retained: Vec<(usize, &RawValueGroup)> = ctx
        .input
        .groups
        .iter()
        .enumerate()
        .filter(|(_, g)| g.has_values())
        .collect();

    match (grouped, ctx.discrete) {
        (true, false) => cross_tabulated(ctx, &retained),
        (false, true) => single_series(ctx, &retained),
        _ => series_per_group(ctx, &retained),
    }
}

fn cross_tabulated(ctx: &Shaping<'_>, retained: &[(usize, &RawValueGroup)]) -> Shaped {
    tracing::trace!(layout = "cross-tabulated", "shaping bars");
    let series = (0..ctx.series_count())
        .map(|i| {
            let values = retained
                .iter()
                .enumerate()
                .map(|(pos, (_, group))| BarPoint {
                    series: i,
                    label: pick_value_label(group, i),
                    x: pos + 1,
                    y: group.values.get(i).map_or(0.0, coerce_float),
                    value: None,
                })
                .collect();
            BarSeries::new(ctx.series_label(i), values)
        })
        .collect();

    let groups = retained
        .iter()
        .enumerate()
        .map(|(pos, (_, group))| ChartGroup {
            group: pos + 1,
            label: ctx.category_label(group),
        })
        .collect();

    Shaped::new(ChartData::Bar(series), groups)
}

fn series_per_group(ctx: &Shaping<'_>, retained: &[(usize, &RawValueGroup)]) -> Shaped {
    tracing::trace!(layout = "series-per-group", "shaping bars");
    let mut series = Vec::with_capacity(retained.len());
    let mut groups = Vec::with_capacity(retained.len());
    for (pos, (index, group)) in retained.iter().enumerate() {
        let key = ctx.group_key(*index, group);
        let point = BarPoint {
            series: pos,
            label: summary_label(group),
            x: pos + 1,
            y: sum_values(&group.values),
            value: None,
        };
        series.push(BarSeries {
            disabled: group.disabled.unwrap_or(false),
            color: group.color.clone(),
            classes: group.classes.clone(),
            ..BarSeries::new(key.clone(), vec![point])
        });
        groups.push(ChartGroup {
            group: pos + 1,
            label: key,
        });
    }
    Shaped::new(ChartData::Bar(series), groups)
}

fn single_series(ctx: &Shaping<'_>, retained: &[(usize, &RawValueGroup)]) -> Shaped {
    tracing::trace!(layout = "single-series", "shaping bars");
    let key = ctx
        .properties
        .key()
        .unwrap_or(ctx.config.default_bar_key())
        .to_string();

    let mut values = Vec::with_capacity(retained.len());
    let mut groups = Vec::with_capacity(retained.len());
    for (pos, (index, group)) in retained.iter().enumerate() {
        values.push(BarPoint {
            series: 0,
            label: pick_value_label(group, 0),
            x: pos + 1,
            y: group.values.first().map_or(f64::NAN, coerce_float),
            value: None,
        });
        groups.push(ChartGroup {
            group: pos + 1,
            label: ctx.group_key(*index, group),
        });
    }

    Shaped::new(ChartData::Bar(vec![BarSeries::new(key, values)]), groups)
}
