use crate::data::Country;
use crate::metrics::BmiCategory;
use crate::render::Color;

const BRIGHTEN_STEP: f64 = 1.0 / 0.7;

/// Identity color of a country, shared by every chart.
#[must_use]
pub fn country_color(country: Country) -> Color {
    match country {
        Country::France => Color::rgb8(0, 112, 192),
        Country::Italy => Color::rgb8(0, 128, 0),
        Country::Netherlands => Color::rgb8(255, 165, 0),
    }
}

/// Per-country shade of a BMI category.
#[must_use]
pub fn category_color(country: Country, category: BmiCategory) -> Color {
    match (country, category) {
        (Country::France, BmiCategory::Normal) => Color::rgb8(0x46, 0x82, 0xB4),
        (Country::France, BmiCategory::Overweight) => Color::rgb8(0x5A, 0x9B, 0xD4),
        (Country::France, BmiCategory::Obese) => Color::rgb8(0x87, 0xCE, 0xEB),
        (Country::Italy, BmiCategory::Normal) => Color::rgb8(0x22, 0x8B, 0x22),
        (Country::Italy, BmiCategory::Overweight) => Color::rgb8(0x32, 0xCD, 0x32),
        (Country::Italy, BmiCategory::Obese) => Color::rgb8(0xA5, 0xD8, 0x9A),
        (Country::Netherlands, BmiCategory::Normal) => Color::rgb8(0xFF, 0x8C, 0x00),
        (Country::Netherlands, BmiCategory::Overweight) => Color::rgb8(0xFF, 0xA5, 0x4D),
        (Country::Netherlands, BmiCategory::Obese) => Color::rgb8(0xFF, 0xD2, 0x7F),
    }
}

/// Country color ramped over time: early years brighter, late years darker.
#[must_use]
pub fn year_color(country: Country, year_fraction: f64) -> Color {
    let base = country_color(country);
    let early = base.scaled(BRIGHTEN_STEP.powf(1.25));
    let late = base.scaled(0.7_f64.powf(0.5));
    early.lerp(late, year_fraction)
}

pub const TEXT_COLOR: Color = Color::rgb(0.0, 0.0, 0.0);
pub const MUTED_TEXT_COLOR: Color = Color::rgb(0.267, 0.267, 0.267);
pub const LABEL_ON_FILL_COLOR: Color = Color::rgb(1.0, 1.0, 1.0);
pub const OUTLINE_COLOR: Color = Color::rgb(0.4, 0.4, 0.4);
pub const GUIDE_COLOR: Color = Color::rgb(0.5, 0.5, 0.5);

/// Opacity of shapes that belong to a country other than the selected one.
pub const DIMMED_ALPHA: f64 = 0.2;
