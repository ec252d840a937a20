use super::{Shaped, Shaping};
use crate::model::{ChartData, ChartGroup, GaugePoint};
use crate::number::{coerce_float, sum_values};

/// The first value-group carries the needle value (`gvalue`) and is not a band. Every other
/// group becomes a band whose `y` is the running total up to and including it.
pub(crate) fn shape(ctx: &Shaping<'_>) -> Shaped {
    let Some((first, bands)) = ctx.input.groups.split_first() else {
        return Shaped::new(ChartData::Gauge(Vec::new()), Vec::new());
    };

    let pointer = match &first.gvalue {
        Some(g) => Some(coerce_float(g)),
        None if first.has_values() => Some(sum_values(&first.values)),
        None => None,
    };

    let mut total = 0.0;
    let mut points = Vec::with_capacity(bands.len());
    let mut groups = Vec::with_capacity(bands.len());
    for (pos, group) in bands.iter().enumerate() {
        total += sum_values(&group.values);
        let key = ctx.group_key(pos + 1, group);
        points.push(GaugePoint {
            key: key.clone(),
            y: total,
            color: group.color.clone(),
            classes: group.classes.clone(),
        });
        groups.push(ChartGroup {
            group: pos + 1,
            label: key,
        });
    }

    Shaped {
        data: ChartData::Gauge(points),
        groups,
        pointer,
    }
}
