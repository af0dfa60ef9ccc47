use std::f64::consts::FRAC_PI_2;

use serde::{Deserialize, Serialize};

use crate::core::Region;
use crate::data::Country;
use crate::error::{ChartError, ChartResult};
use crate::metrics::CategoryValue;

use super::{LayoutShape, ShapeExtent, ShapeKey};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DonutStyle {
    pub inner_radius: f64,
    pub outer_radius: f64,
    /// Radians clockwise from 12 o'clock.
    pub start_angle: f64,
    pub end_angle: f64,
    /// Entrance delay added per segment index.
    pub delay_step_ms: u64,
}

impl Default for DonutStyle {
    fn default() -> Self {
        Self {
            inner_radius: 60.0,
            outer_radius: 110.0,
            start_angle: -FRAC_PI_2,
            end_angle: FRAC_PI_2,
            delay_step_ms: 200,
        }
    }
}

impl DonutStyle {
    pub fn validate(self) -> ChartResult<Self> {
        if !self.inner_radius.is_finite()
            || !self.outer_radius.is_finite()
            || self.inner_radius < 0.0
            || self.inner_radius >= self.outer_radius
        {
            return Err(ChartError::InvalidData(
                "donut radii must be finite with 0 <= inner < outer".to_owned(),
            ));
        }
        if !self.start_angle.is_finite() || !self.end_angle.is_finite() {
            return Err(ChartError::InvalidData(
                "donut angles must be finite".to_owned(),
            ));
        }
        if self.end_angle < self.start_angle {
            return Err(ChartError::InvalidData(
                "donut end angle must not precede start angle".to_owned(),
            ));
        }
        Ok(self)
    }
}

/// Splits the style's angular span between `segments` proportionally.
///
/// Segments keep input order. Non-positive values get a zero-width wedge;
/// when nothing is positive every wedge collapses onto the start angle.
/// The pie center sits horizontally centered in `region`, lowered by half
/// the outer radius so a half donut is vertically centered.
pub fn layout_donut(
    country: Country,
    segments: &[CategoryValue],
    style: &DonutStyle,
    region: Region,
) -> ChartResult<Vec<LayoutShape>> {
    let region = region.validate()?;
    let style = style.validate()?;
    if segments.iter().any(|segment| !segment.value.is_finite()) {
        return Err(ChartError::InvalidData(
            "donut segment values must be finite".to_owned(),
        ));
    }

    let total: f64 = segments.iter().map(|segment| segment.value.max(0.0)).sum();
    let span = style.end_angle - style.start_angle;
    let angle_per_unit = if total > 0.0 { span / total } else { 0.0 };

    let center_x = region.center_x();
    let center_y = region.center_y() + style.outer_radius / 2.0;

    let mut angle = style.start_angle;
    let mut wedges = Vec::with_capacity(segments.len());
    for (ordinal, segment) in segments.iter().enumerate() {
        let sweep = segment.value.max(0.0) * angle_per_unit;
        wedges.push(LayoutShape {
            key: ShapeKey::Category(segment.category),
            group: Some(ShapeKey::Country(country)),
            value: segment.value,
            ordinal,
            x: center_x,
            y: center_y,
            extent: ShapeExtent::Wedge {
                inner_radius: style.inner_radius,
                outer_radius: style.outer_radius,
                start_angle: angle,
                end_angle: angle + sweep,
                delay_ms: style.delay_step_ms * ordinal as u64,
            },
        });
        angle += sweep;
    }

    Ok(wedges)
}
