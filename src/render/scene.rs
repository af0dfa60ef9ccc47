//! Scene builders: turn dashboard views into render frames.
//!
//! View geometry for the bar and scatter charts lives in translated plot
//! coordinates; the builders shift it by the configured margins.

use crate::api::{
    BmiChartConfig, BmiChartView, DashboardConfig, DashboardSnapshot, DonutPanelConfig,
    DonutPanelsView, HoneycombConfig, HoneycombPanel, HoneycombView, LeaderboardView, PodiumConfig,
    ScatterConfig, ScatterView,
};
use crate::core::Region;
use crate::data::Country;
use crate::error::ChartResult;
use crate::layout::{LayoutShape, ShapeExtent, ShapeKey};
use crate::metrics::BmiCategory;
use crate::render::palette::{
    DIMMED_ALPHA, GUIDE_COLOR, LABEL_ON_FILL_COLOR, MUTED_TEXT_COLOR, OUTLINE_COLOR, TEXT_COLOR,
    category_color, country_color, year_color,
};
use crate::render::{
    CirclePrimitive, Color, LinePrimitive, RectPrimitive, RenderFrame, TextHAlign, TextPrimitive,
    WedgePrimitive,
};

const VALUE_FONT_PX: f64 = 12.0;
const SCATTER_POINT_RADIUS: f64 = 5.0;

fn shape_country(shape: &LayoutShape) -> Option<Country> {
    shape
        .key
        .country()
        .or_else(|| shape.group.and_then(ShapeKey::country))
}

fn shape_category(shape: &LayoutShape) -> Option<BmiCategory> {
    [Some(shape.key), shape.group]
        .into_iter()
        .flatten()
        .find_map(|key| match key {
            ShapeKey::Category(category) => Some(category),
            ShapeKey::Country(_) => None,
        })
}

fn shape_color(shape: &LayoutShape) -> Color {
    match (shape_country(shape), shape_category(shape)) {
        (Some(country), Some(category)) => category_color(country, category),
        (Some(country), None) => country_color(country),
        _ => GUIDE_COLOR,
    }
}

/// Grouped BMI bars with value labels, group labels and a baseline.
pub fn bmi_chart_scene(view: &BmiChartView, config: &BmiChartConfig) -> ChartResult<RenderFrame> {
    let (dx, dy) = (config.margins.left, config.margins.top);
    let mut frame = RenderFrame::new(Region::from_size(config.width, config.height));
    let baseline = dy + view.plot_region.y_max;

    let mut group_spans: Vec<(ShapeKey, f64, f64)> = Vec::new();
    for bar in &view.bars {
        let ShapeExtent::Rect { width, height } = bar.extent else {
            continue;
        };
        let x = dx + bar.x;
        frame = frame
            .with_rect(RectPrimitive::new(
                x,
                dy + bar.y,
                width,
                height,
                shape_color(bar),
            ))
            .with_text(TextPrimitive::new(
                format!("{:.1}%", bar.value),
                x + width / 2.0,
                dy + bar.y - 5.0,
                VALUE_FONT_PX,
                TEXT_COLOR,
                TextHAlign::Center,
            ));

        if let Some(group) = bar.group {
            match group_spans.iter_mut().find(|(key, _, _)| *key == group) {
                Some(span) => {
                    span.1 = span.1.min(x);
                    span.2 = span.2.max(x + width);
                }
                None => group_spans.push((group, x, x + width)),
            }
        }
    }

    for (group, start, end) in group_spans {
        frame = frame.with_text(TextPrimitive::new(
            group.as_str(),
            (start + end) / 2.0,
            baseline + 20.0,
            14.0,
            TEXT_COLOR,
            TextHAlign::Center,
        ));
    }

    Ok(frame.with_line(LinePrimitive::new(
        dx + view.plot_region.x_min,
        baseline,
        dx + view.plot_region.x_max,
        baseline,
        1.0,
        TEXT_COLOR,
    )))
}

/// Half donuts with centroid percentages and a country caption per panel.
pub fn donut_panels_scene(
    view: &DonutPanelsView,
    config: &DonutPanelConfig,
) -> ChartResult<RenderFrame> {
    let panel_count = view.panels.len().max(1);
    let canvas = Region::new(
        0.0,
        config.panel_region(panel_count - 1).x_max,
        0.0,
        config.panel_height,
    );
    let mut frame = RenderFrame::new(canvas);

    for panel in &view.panels {
        for wedge in &panel.wedges {
            let ShapeExtent::Wedge {
                inner_radius,
                outer_radius,
                start_angle,
                end_angle,
                delay_ms,
            } = wedge.extent
            else {
                continue;
            };
            frame = frame.with_wedge(WedgePrimitive {
                cx: wedge.x,
                cy: wedge.y,
                inner_radius,
                outer_radius,
                start_angle,
                end_angle,
                fill_color: shape_color(wedge),
                delay_ms,
            });
            if wedge.value > 0.0 {
                let (x, y) = wedge.anchor();
                frame = frame.with_text(
                    TextPrimitive::new(
                        format!("{:.1}%", wedge.value),
                        x,
                        y,
                        VALUE_FONT_PX,
                        LABEL_ON_FILL_COLOR,
                        TextHAlign::Center,
                    )
                    .bold(),
                );
            }
        }

        let center_y = panel.region.center_y() + config.style.outer_radius / 2.0;
        frame = frame.with_text(TextPrimitive::new(
            panel.country.as_str(),
            panel.region.center_x(),
            center_y + 20.0,
            16.0,
            TEXT_COLOR,
            TextHAlign::Center,
        ));
    }

    Ok(frame)
}

/// Six circle stacks with titles; unselected countries are dimmed.
pub fn honeycomb_scene(view: &HoneycombView, config: &HoneycombConfig) -> ChartResult<RenderFrame> {
    let mut frame = RenderFrame::new(Region::from_size(config.width, config.height));

    for panel in &view.panels {
        frame = frame.with_text(TextPrimitive::new(
            panel.panel.label(),
            panel.region.center_x(),
            panel.region.y_min - 5.0,
            20.0,
            TEXT_COLOR,
            TextHAlign::Center,
        ));

        for circle in &panel.circles {
            let ShapeExtent::Circle { radius } = circle.shape.extent else {
                continue;
            };
            let country = circle.shape.key.country();
            let is_selected = view.selected_country.is_some() && country == view.selected_country;
            let alpha = match view.selected_country {
                Some(_) if !is_selected => DIMMED_ALPHA,
                _ => 1.0,
            };
            let fill = country.map_or(GUIDE_COLOR, country_color).with_alpha(alpha);
            let stroke_width = if is_selected { 3.0 } else { 1.0 };

            frame = frame
                .with_circle(
                    CirclePrimitive::new(circle.shape.x, circle.shape.y, radius, fill)
                        .with_stroke(OUTLINE_COLOR.with_alpha(alpha), stroke_width),
                )
                .with_text(
                    TextPrimitive::new(
                        circle.label.clone(),
                        circle.shape.x,
                        circle.shape.y + 4.0,
                        circle.font_size_px,
                        LABEL_ON_FILL_COLOR.with_alpha(alpha),
                        TextHAlign::Center,
                    )
                    .bold(),
                );
        }
    }

    if let Some(summary) = view.rank_summary {
        let anchor = HoneycombPanel::HealthyBmi.region(config.width, config.height);
        let x = config.width / 2.0;
        let top = anchor.y_max + 60.0;
        let lines = [
            format!("Ranked 1st across {} categories", summary.counts.first),
            format!("2nd across {} categories", summary.counts.second),
            format!("3rd across {} categories", summary.counts.third),
        ];
        frame = frame.with_text(
            TextPrimitive::new(
                summary.country.as_str(),
                x,
                top,
                18.0,
                country_color(summary.country),
                TextHAlign::Center,
            )
            .bold(),
        );
        for (index, line) in lines.into_iter().enumerate() {
            let text = TextPrimitive::new(
                line,
                x,
                top + 19.2 * (index + 1) as f64,
                16.0,
                MUTED_TEXT_COLOR,
                TextHAlign::Center,
            );
            frame = frame.with_text(if index == 0 { text.bold() } else { text });
        }
    }

    Ok(frame)
}

/// Podium bars with position labels inside and country names below.
pub fn leaderboard_scene(
    view: &LeaderboardView,
    config: &PodiumConfig,
) -> ChartResult<RenderFrame> {
    let mut frame = RenderFrame::new(Region::from_size(config.width, config.height));

    for bar in &view.bars {
        let ShapeExtent::Rect { width, height } = bar.shape.extent else {
            continue;
        };
        let center_x = bar.shape.x + width / 2.0;
        frame = frame
            .with_rect(
                RectPrimitive::new(
                    bar.shape.x,
                    bar.shape.y,
                    width,
                    height,
                    shape_color(&bar.shape),
                )
                .with_corner_radius(10.0),
            )
            .with_text(
                TextPrimitive::new(
                    bar.position_label.clone(),
                    center_x,
                    bar.shape.y + height / 2.0,
                    36.0,
                    LABEL_ON_FILL_COLOR,
                    TextHAlign::Center,
                )
                .bold(),
            )
            .with_text(
                TextPrimitive::new(
                    bar.shape.key.as_str(),
                    center_x,
                    bar.shape.y + height + 50.0,
                    22.0,
                    TEXT_COLOR,
                    TextHAlign::Center,
                )
                .bold(),
            );
    }

    Ok(frame)
}

/// Both scatter panels, the dashed divider and any visible trendlines.
pub fn scatter_scene(view: &ScatterView, config: &ScatterConfig) -> ChartResult<RenderFrame> {
    let (dx, dy) = (config.margins.left, config.margins.top);
    let plot = view.plot_region;
    let mut frame = RenderFrame::new(Region::from_size(config.width, config.height))
        .with_line(
            LinePrimitive::new(
                dx + plot.center_x(),
                dy + plot.y_min,
                dx + plot.center_x(),
                dy + plot.y_max,
                1.0,
                GUIDE_COLOR,
            )
            .dashed(6.0),
        )
        .with_text(TextPrimitive::new(
            view.axis_label.clone(),
            dx,
            dy - 20.0,
            14.0,
            TEXT_COLOR,
            TextHAlign::Left,
        ));

    for point in &view.points {
        frame = frame.with_circle(CirclePrimitive::new(
            dx + point.pixel.x,
            dy + point.pixel.y,
            SCATTER_POINT_RADIUS,
            year_color(point.country, point.year_fraction),
        ));
    }

    for trendline in view.visible_trendlines() {
        frame = frame.with_line(LinePrimitive::new(
            dx + trendline.from.x,
            dy + trendline.from.y,
            dx + trendline.to.x,
            dy + trendline.to.y,
            2.0,
            country_color(trendline.group.country),
        ));
    }

    Ok(frame)
}

/// One frame per view, in dashboard order.
pub fn dashboard_frames(
    snapshot: &DashboardSnapshot,
    config: &DashboardConfig,
) -> ChartResult<Vec<RenderFrame>> {
    Ok(vec![
        honeycomb_scene(&snapshot.honeycomb, &config.honeycomb)?,
        bmi_chart_scene(&snapshot.bmi_chart, &config.bmi_chart)?,
        donut_panels_scene(&snapshot.donut_panels, &config.donut)?,
        leaderboard_scene(&snapshot.leaderboard, &config.podium)?,
        scatter_scene(&snapshot.scatter, &config.scatter)?,
    ])
}
