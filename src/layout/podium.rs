use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::aggregate::CountryValue;
use crate::core::Region;
use crate::error::{ChartError, ChartResult};

use super::{LayoutShape, ShapeExtent, ShapeKey};

/// Fixed bar slot for one rank, relative to the region's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PodiumSlot {
    pub x_offset: f64,
    pub y_offset: f64,
    pub height: f64,
}

impl PodiumSlot {
    #[must_use]
    pub const fn new(x_offset: f64, y_offset: f64, height: f64) -> Self {
        Self {
            x_offset,
            y_offset,
            height,
        }
    }
}

/// Podium geometry; slot `i` holds rank `i`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PodiumStyle {
    pub bar_width: f64,
    pub slots: Vec<PodiumSlot>,
}

impl Default for PodiumStyle {
    /// Centered winner flanked by second (left) and third (right) on an
    /// 800 x 600 canvas.
    fn default() -> Self {
        Self {
            bar_width: 200.0,
            slots: vec![
                PodiumSlot::new(320.0, 110.0, 320.0),
                PodiumSlot::new(70.0, 190.0, 240.0),
                PodiumSlot::new(555.0, 270.0, 160.0),
            ],
        }
    }
}

impl PodiumStyle {
    fn validate(&self) -> ChartResult<()> {
        if !self.bar_width.is_finite() || self.bar_width <= 0.0 {
            return Err(ChartError::InvalidData(
                "podium bar width must be finite and > 0".to_owned(),
            ));
        }
        for slot in &self.slots {
            if !slot.x_offset.is_finite()
                || !slot.y_offset.is_finite()
                || !slot.height.is_finite()
                || slot.height <= 0.0
            {
                return Err(ChartError::InvalidData(
                    "podium slots must be finite with height > 0".to_owned(),
                ));
            }
        }
        Ok(())
    }
}

/// Assigns ranked values to podium slots.
///
/// Placement is ordinal only; magnitudes never change bar sizes. Values
/// beyond the last slot are dropped with a warning and empty slots stay
/// empty.
pub fn layout_podium(
    ranked: &[CountryValue],
    style: &PodiumStyle,
    region: Region,
) -> ChartResult<Vec<LayoutShape>> {
    let region = region.validate()?;
    style.validate()?;

    if ranked.len() > style.slots.len() {
        warn!(
            values = ranked.len(),
            slots = style.slots.len(),
            "more ranked values than podium slots; extra entries omitted"
        );
    }

    Ok(ranked
        .iter()
        .zip(&style.slots)
        .enumerate()
        .map(|(ordinal, (value, slot))| LayoutShape {
            key: ShapeKey::Country(value.country),
            group: None,
            value: value.value,
            ordinal,
            x: region.x_min + slot.x_offset,
            y: region.y_min + slot.y_offset,
            extent: ShapeExtent::Rect {
                width: style.bar_width,
                height: slot.height,
            },
        })
        .collect())
}
