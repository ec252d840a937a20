use super::{Shaped, Shaping};
use crate::model::{ChartData, ChartGroup, PieSlice};
use crate::number::sum_values;

/// One slice per value-group, valued at the group's total.
pub(crate) fn shape(ctx: &Shaping<'_>) -> Shaped {
    let mut slices = Vec::with_capacity(ctx.input.groups.len());
    let mut groups = Vec::with_capacity(ctx.input.groups.len());
    for (index, group) in ctx.input.groups.iter().enumerate() {
        let key = ctx.group_key(index, group);
        slices.push(PieSlice {
            key: key.clone(),
            disabled: group.disabled.unwrap_or(false),
            value: sum_values(&group.values),
            color: group.color.clone(),
            classes: group.classes.clone(),
        });
        groups.push(ChartGroup {
            group: index + 1,
            label: key,
        });
    }
    Shaped::new(ChartData::Pie(slices), groups)
}
