use super::{Shaped, Shaping, summary_label};
use crate::model::{BarPoint, ChartData, ChartGroup, FunnelStage};
use crate::number::sum_values;

/// One stage per value-group. Stages are emitted in reverse input order; each keeps its input
/// position as `series`.
pub(crate) fn shape(ctx: &Shaping<'_>) -> Shaped {
    let mut stages = Vec::with_capacity(ctx.input.groups.len());
    let mut groups = Vec::with_capacity(ctx.input.groups.len());
    for (index, group) in ctx.input.groups.iter().enumerate() {
        let key = ctx.group_key(index, group);
        stages.push(FunnelStage {
            key: key.clone(),
            disabled: group.disabled.unwrap_or(false),
            color: group.color.clone(),
            classes: group.classes.clone(),
            values: vec![BarPoint {
                series: index,
                label: summary_label(group),
                x: 0,
                y: sum_values(&group.values),
                value: None,
            }],
        });
        groups.push(ChartGroup {
            group: index + 1,
            label: key,
        });
    }
    stages.reverse();
    Shaped::new(ChartData::Funnel(stages), groups)
}
