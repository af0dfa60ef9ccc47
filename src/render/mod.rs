mod frame;
mod null_renderer;
pub mod palette;
mod primitives;
mod scene;

pub use frame::RenderFrame;
pub use null_renderer::NullRenderer;
pub use primitives::{
    CirclePrimitive, Color, LinePrimitive, RectPrimitive, TextHAlign, TextPrimitive, WedgePrimitive,
};
pub use scene::{
    bmi_chart_scene, dashboard_frames, donut_panels_scene, honeycomb_scene, leaderboard_scene,
    scatter_scene,
};

use crate::error::ChartResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized, deterministic `RenderFrame` so
/// drawing code remains isolated from dashboard data and selection logic.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()>;
}
