use serde::{Deserialize, Serialize};

use crate::aggregate::CountryValue;
use crate::core::{LinearScale, Region};
use crate::error::{ChartError, ChartResult};

use super::{LayoutShape, ShapeExtent, ShapeKey};

/// Parameters of the vertical circle stack.
///
/// Radii come from a clamped linear scale `radius_domain -> radius_range`,
/// raised when needed so the one-decimal label fits inside.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StackedCircleStyle {
    pub radius_domain: (f64, f64),
    pub radius_range: (f64, f64),
    pub gap_px: f64,
    pub font_size_px: f64,
    pub char_width_ratio: f64,
    pub label_padding_px: f64,
}

impl Default for StackedCircleStyle {
    fn default() -> Self {
        Self {
            radius_domain: (25.0, 100.0),
            radius_range: (20.0, 40.0),
            gap_px: 10.0,
            font_size_px: 12.0,
            char_width_ratio: 0.6,
            label_padding_px: 4.0,
        }
    }
}

impl StackedCircleStyle {
    fn validate(self) -> ChartResult<Self> {
        if !self.gap_px.is_finite() || self.gap_px < 0.0 {
            return Err(ChartError::InvalidData(
                "circle gap must be finite and >= 0".to_owned(),
            ));
        }
        if !self.font_size_px.is_finite() || self.font_size_px <= 0.0 {
            return Err(ChartError::InvalidData(
                "font size must be finite and > 0".to_owned(),
            ));
        }
        if !self.char_width_ratio.is_finite()
            || self.char_width_ratio <= 0.0
            || !self.label_padding_px.is_finite()
            || self.label_padding_px < 0.0
        {
            return Err(ChartError::InvalidData(
                "label metrics must be finite and positive".to_owned(),
            ));
        }
        let (r0, r1) = self.radius_range;
        if !r0.is_finite() || !r1.is_finite() || r0 < 0.0 || r1 < 0.0 {
            return Err(ChartError::InvalidData(
                "radius range must be finite and >= 0".to_owned(),
            ));
        }
        Ok(self)
    }

    pub fn radius_scale(&self) -> ChartResult<LinearScale> {
        let (d0, d1) = self.radius_domain;
        let (r0, r1) = self.radius_range;
        Ok(LinearScale::new(d0, d1)?
            .with_range(r0, r1)?
            .with_clamp(true))
    }

    /// Final radius for `value`.
    pub fn radius_for(&self, value: f64) -> ChartResult<f64> {
        let scaled = self.radius_scale()?.map(value);
        Ok(scaled.max(min_radius_for_label(
            value,
            self.font_size_px,
            self.char_width_ratio,
            self.label_padding_px,
        )))
    }
}

/// Smallest radius that fits the one-decimal label of `value`.
///
/// Label width is approximated as `chars * font_size * char_width_ratio`.
#[must_use]
pub fn min_radius_for_label(
    value: f64,
    font_size_px: f64,
    char_width_ratio: f64,
    padding_px: f64,
) -> f64 {
    let chars = format!("{value:.1}").chars().count() as f64;
    chars * font_size_px * char_width_ratio / 2.0 + padding_px
}

/// Stacks one circle per value in a single column centered in `region`.
///
/// The first value sits at the bottom edge; each next circle is placed above
/// the previous one with `gap_px` between their rims. Pass values in rank
/// order to get the largest at the bottom.
pub fn layout_stacked_circles(
    values: &[CountryValue],
    style: &StackedCircleStyle,
    region: Region,
) -> ChartResult<Vec<LayoutShape>> {
    let region = region.validate()?;
    let style = style.validate()?;
    if values.iter().any(|value| !value.value.is_finite()) {
        return Err(ChartError::InvalidData(
            "circle values must be finite".to_owned(),
        ));
    }

    let center_x = region.center_x();
    let mut cursor_y = region.y_max;
    let mut circles = Vec::with_capacity(values.len());
    for (ordinal, value) in values.iter().enumerate() {
        let radius = style.radius_for(value.value)?;
        cursor_y -= radius;
        circles.push(LayoutShape {
            key: ShapeKey::Country(value.country),
            group: None,
            value: value.value,
            ordinal,
            x: center_x,
            y: cursor_y,
            extent: ShapeExtent::Circle { radius },
        });
        cursor_y -= radius + style.gap_px;
    }

    Ok(circles)
}
