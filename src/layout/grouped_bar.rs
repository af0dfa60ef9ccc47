use serde::{Deserialize, Serialize};

use crate::core::{BandScale, LinearScale, Region};
use crate::error::{ChartError, ChartResult};

use super::{LayoutShape, ShapeExtent, ShapeKey};

/// Two-level bar value: `group` selects the outer band, `series` the bar
/// inside it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GroupedValue {
    pub group: ShapeKey,
    pub series: ShapeKey,
    pub value: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GroupedBarStyle {
    pub outer_padding: f64,
    pub inner_padding: f64,
    pub value_min: f64,
    pub value_max: f64,
}

impl Default for GroupedBarStyle {
    fn default() -> Self {
        Self {
            outer_padding: 0.2,
            inner_padding: 0.1,
            value_min: 0.0,
            value_max: 100.0,
        }
    }
}

/// Vertical value scale of a grouped bar chart in `region`.
pub fn grouped_bar_value_scale(
    style: &GroupedBarStyle,
    region: Region,
) -> ChartResult<LinearScale> {
    let region = region.validate()?;
    Ok(LinearScale::new(style.value_min, style.value_max)?
        .nice(10)
        .with_range(region.y_max, region.y_min)?)
}

fn distinct_in_order(keys: impl Iterator<Item = ShapeKey>) -> Vec<ShapeKey> {
    let mut distinct = Vec::new();
    for key in keys {
        if !distinct.contains(&key) {
            distinct.push(key);
        }
    }
    distinct
}

/// Places one bar per value.
///
/// Groups and series keep first-appearance order. Bars grow up from the
/// bottom of `region`; values below the domain minimum hang downward
/// instead of producing a negative height.
pub fn layout_grouped_bars(
    values: &[GroupedValue],
    style: &GroupedBarStyle,
    region: Region,
) -> ChartResult<Vec<LayoutShape>> {
    let region = region.validate()?;
    if values.iter().any(|value| !value.value.is_finite()) {
        return Err(ChartError::InvalidData(
            "grouped bar values must be finite".to_owned(),
        ));
    }
    if values.is_empty() {
        return Ok(Vec::new());
    }

    let groups = distinct_in_order(values.iter().map(|value| value.group));
    let series = distinct_in_order(values.iter().map(|value| value.series));

    let outer = BandScale::new(groups, region.x_min, region.x_max, style.outer_padding)?;
    let inner = BandScale::new(series, 0.0, outer.bandwidth(), style.inner_padding)?;
    let value_scale = grouped_bar_value_scale(style, region)?;
    let baseline = region.y_max;
    let width = inner.bandwidth();

    let mut bars = Vec::with_capacity(values.len());
    for (ordinal, value) in values.iter().enumerate() {
        let (Some(group_x), Some(series_x)) =
            (outer.position(&value.group), inner.position(&value.series))
        else {
            continue;
        };
        let value_y = value_scale.map(value.value);
        bars.push(LayoutShape {
            key: value.series,
            group: Some(value.group),
            value: value.value,
            ordinal,
            x: group_x + series_x,
            y: value_y.min(baseline),
            extent: ShapeExtent::Rect {
                width,
                height: (baseline - value_y).abs(),
            },
        });
    }

    Ok(bars)
}
