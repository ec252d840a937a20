//! Line and area shaping.
//!
//! Discrete input yields one series per value-group with a single point at the group's
//! position. Otherwise each value-group is an x-axis category and each top-level label names a
//! series whose `i`-th point comes from `values[i]` of every group. Positions are 1-based and
//! missing magnitudes plot as `0`. `groups` lists each category label once, in x order.

use super::{Shaped, Shaping};
use crate::model::{ChartData, ChartGroup, LinePoint, LineSeries};
use crate::number::coerce_float;
use indexmap::{IndexMap, IndexSet};

pub(crate) fn shape(ctx: &Shaping<'_>) -> Shaped {
    let groups = &ctx.input.groups;

    let series: Vec<LineSeries> = if ctx.discrete {
        groups
            .iter()
            .enumerate()
            .map(|(index, group)| LineSeries {
                key: ctx.group_key(index, group),
                values: vec![LinePoint {
                    x: (index + 1) as f64,
                    y: group.values.first().map_or(f64::NAN, coerce_float),
                }],
            })
            .collect()
    } else {
        (0..ctx.series_count())
            .map(|i| LineSeries {
                key: ctx.series_label(i),
                values: groups
                    .iter()
                    .enumerate()
                    .map(|(index, group)| LinePoint {
                        x: (index + 1) as f64,
                        y: group.values.get(i).map_or(0.0, coerce_float),
                    })
                    .collect(),
            })
            .collect()
    };

    // Category labels in ascending x order, each label once.
    let mut positions: IndexMap<usize, String> = IndexMap::new();
    for point in series.iter().flat_map(|s| s.values.iter()) {
        let index = point.x as usize - 1;
        positions.entry(index).or_insert_with(|| {
            let group = &groups[index];
            if ctx.discrete {
                ctx.group_key(index, group)
            } else {
                ctx.category_label(group)
            }
        });
    }
    positions.sort_keys();
    let labels: IndexSet<String> = positions.into_values().collect();
    let axis_groups = labels
        .into_iter()
        .enumerate()
        .map(|(index, label)| ChartGroup {
            group: index + 1,
            label,
        })
        .collect();

    Shaped::new(ChartData::Line(series), axis_groups)
}
