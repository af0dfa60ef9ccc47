//! Layout engine: turns ordered values into chart geometry.
//!
//! Every chart style is one variant of [`LayoutStyle`]; [`layout`] pairs it
//! with the matching [`LayoutInput`] and a bounding [`Region`]. The per-style
//! functions are public as well for callers that already know the style.

mod donut;
mod grouped_bar;
mod podium;
mod stacked_circles;

use serde::{Deserialize, Serialize};

use crate::aggregate::CountryValue;
use crate::core::Region;
use crate::data::Country;
use crate::error::{ChartError, ChartResult};
use crate::metrics::{BmiCategory, CategoryValue};

pub use donut::{DonutStyle, layout_donut};
pub use grouped_bar::{
    GroupedBarStyle, GroupedValue, grouped_bar_value_scale, layout_grouped_bars,
};
pub use podium::{PodiumSlot, PodiumStyle, layout_podium};
pub use stacked_circles::{StackedCircleStyle, layout_stacked_circles, min_radius_for_label};

/// Identity of a shape: a country or a BMI category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeKey {
    Country(Country),
    Category(BmiCategory),
}

impl ShapeKey {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Country(country) => country.as_str(),
            Self::Category(category) => category.as_str(),
        }
    }

    #[must_use]
    pub const fn country(self) -> Option<Country> {
        match self {
            Self::Country(country) => Some(country),
            Self::Category(_) => None,
        }
    }
}

/// Size part of a placed shape.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ShapeExtent {
    /// `x`/`y` of the owning shape is the top-left corner.
    Rect { width: f64, height: f64 },
    /// `x`/`y` of the owning shape is the center.
    Circle { radius: f64 },
    /// Annular sector around the owning shape's `x`/`y`.
    ///
    /// Angles are radians measured clockwise from 12 o'clock.
    Wedge {
        inner_radius: f64,
        outer_radius: f64,
        start_angle: f64,
        end_angle: f64,
        delay_ms: u64,
    },
}

/// A value annotated with geometry, ready for a render backend.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutShape {
    pub key: ShapeKey,
    /// Enclosing group for grouped bars and donut panels.
    pub group: Option<ShapeKey>,
    pub value: f64,
    /// Position of the source value in the input sequence.
    pub ordinal: usize,
    pub x: f64,
    pub y: f64,
    pub extent: ShapeExtent,
}

impl LayoutShape {
    /// Label anchor: rect top-center, circle center or wedge centroid.
    #[must_use]
    pub fn anchor(&self) -> (f64, f64) {
        match self.extent {
            ShapeExtent::Rect { width, .. } => (self.x + width / 2.0, self.y),
            ShapeExtent::Circle { .. } => (self.x, self.y),
            ShapeExtent::Wedge {
                inner_radius,
                outer_radius,
                start_angle,
                end_angle,
                ..
            } => {
                let angle = (start_angle + end_angle) / 2.0 - std::f64::consts::FRAC_PI_2;
                let radius = (inner_radius + outer_radius) / 2.0;
                (self.x + angle.cos() * radius, self.y + angle.sin() * radius)
            }
        }
    }
}

/// Chart style with its placement parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum LayoutStyle {
    GroupedBar(GroupedBarStyle),
    StackedCircles(StackedCircleStyle),
    Donut(DonutStyle),
    Podium(PodiumStyle),
}

impl LayoutStyle {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::GroupedBar(_) => "grouped bar",
            Self::StackedCircles(_) => "stacked circle",
            Self::Donut(_) => "donut",
            Self::Podium(_) => "podium",
        }
    }
}

/// Values handed to the layout engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LayoutInput<'a> {
    /// Country values already in rank order.
    Ranked(&'a [CountryValue]),
    /// Two-level `(group, series)` values.
    Grouped(&'a [GroupedValue]),
    /// Category segments of one country panel.
    Segments {
        country: Country,
        values: &'a [CategoryValue],
    },
}

impl LayoutInput<'_> {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Ranked(_) => "ranked",
            Self::Grouped(_) => "grouped",
            Self::Segments { .. } => "segment",
        }
    }
}

/// Lays `input` out inside `region` using `style`.
pub fn layout(
    input: LayoutInput<'_>,
    style: &LayoutStyle,
    region: Region,
) -> ChartResult<Vec<LayoutShape>> {
    match (style, input) {
        (LayoutStyle::GroupedBar(style), LayoutInput::Grouped(values)) => {
            layout_grouped_bars(values, style, region)
        }
        (LayoutStyle::StackedCircles(style), LayoutInput::Ranked(values)) => {
            layout_stacked_circles(values, style, region)
        }
        (LayoutStyle::Donut(style), LayoutInput::Segments { country, values }) => {
            layout_donut(country, values, style, region)
        }
        (LayoutStyle::Podium(style), LayoutInput::Ranked(values)) => {
            layout_podium(values, style, region)
        }
        (style, input) => Err(ChartError::InvalidData(format!(
            "{} layout cannot place {} input",
            style.name(),
            input.name()
        ))),
    }
}
