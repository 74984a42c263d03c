//! Pie chart drawing: wedges clockwise from 12 o'clock, labels inside each slice.

use anyhow::{Result, anyhow};
use plotters::backend::DrawingBackend;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::FontFamily;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::f64::consts::{FRAC_PI_2, TAU};

use super::PieChart;
use super::legend::{draw_legend_panel, legend_width_px};
use super::text::{truncate_to_width, wrap_limited};
use super::theme::Theme;
use super::util::format_percent;

const MARGIN: i32 = 16;
const TITLE_FONT_PX: u32 = 18;
const TITLE_MAX_LINES: usize = 3;
const SLICE_FONT_PX: u32 = 12;
/// Arc resolution for wedge polygons.
const MAX_STEP_RAD: f64 = 0.03;
const MIN_SLICE_FONT_PX: u32 = 6;
/// Slices at least this wide get the full label font.
const FULL_LABEL_SWEEP_RAD: f64 = 0.22;
/// Labels sit at this fraction of the radius; narrow slices push them outward.
const LABEL_RADIUS: f64 = 0.62;
const NARROW_LABEL_RADIUS: f64 = 0.8;

fn arc_point(center: (i32, i32), radius: f64, angle: f64) -> (i32, i32) {
    (
        center.0 + (radius * angle.cos()).round() as i32,
        center.1 + (radius * angle.sin()).round() as i32,
    )
}

/// Polygon outline of one wedge: the center followed by points along the arc.
///
/// Angles are in screen space (y grows downward), so increasing angles run clockwise.
pub(crate) fn wedge_points(center: (i32, i32), radius: f64, start: f64, sweep: f64) -> Vec<(i32, i32)> {
    let steps = (sweep / MAX_STEP_RAD).ceil().max(1.0) as usize;
    let mut pts = Vec::with_capacity(steps + 2);
    pts.push(center);
    for i in 0..=steps {
        let a = start + sweep * (i as f64) / (steps as f64);
        pts.push(arc_point(center, radius, a));
    }
    pts
}

/// Font size for the inside label of a slice spanning `sweep` radians.
///
/// Narrow slices get a proportionally smaller font, never below `MIN_SLICE_FONT_PX`.
pub(crate) fn slice_label_font_px(sweep: f64) -> u32 {
    if sweep >= FULL_LABEL_SWEEP_RAD {
        return SLICE_FONT_PX;
    }
    let scaled = (SLICE_FONT_PX as f64 * sweep / FULL_LABEL_SWEEP_RAD).round() as u32;
    scaled.clamp(MIN_SLICE_FONT_PX, SLICE_FONT_PX)
}

pub fn draw_pie_chart<DB>(
    root: &DrawingArea<DB, Shift>,
    chart: &PieChart,
    theme: &Theme,
    locale_tag: &str,
) -> Result<()>
where
    DB: DrawingBackend,
{
    let (w_u32, _) = root.dim_in_pixel();
    let w = w_u32 as i32;

    // Title, wrapped because catalog descriptions are whole sentences.
    let title_lines = wrap_limited(
        &chart.title,
        TITLE_FONT_PX,
        (w - 2 * MARGIN).max(40) as u32,
        TITLE_MAX_LINES,
    );
    let line_h = TITLE_FONT_PX as i32 + 4;
    let title_style = TextStyle::from((FontFamily::SansSerif, TITLE_FONT_PX))
        .color(&theme.text)
        .pos(Pos::new(HPos::Center, VPos::Top));
    for (i, line) in title_lines.iter().enumerate() {
        root.draw(&Text::new(
            line.as_str(),
            (w / 2, MARGIN + i as i32 * line_h),
            title_style.clone(),
        ))
        .map_err(|e| anyhow!("{:?}", e))?;
    }
    let title_h = MARGIN + title_lines.len() as i32 * line_h + 8;
    let (_, body) = root.split_vertically(title_h);

    let legend_items: Vec<(String, RGBColor)> = chart
        .slices
        .iter()
        .enumerate()
        .map(|(i, s)| (s.label.clone(), theme.color(i)))
        .collect();
    let legend_w = if chart.show_legend {
        legend_width_px(legend_items.iter().map(|(l, _)| l.as_str()), w_u32) as i32
    } else {
        0
    };
    let (pie_area, legend_area) = body.split_horizontally((w - legend_w).max(40));

    let (pw, ph) = pie_area.dim_in_pixel();
    let center = (pw as i32 / 2, ph as i32 / 2);
    let radius = ((pw.min(ph) as i32) / 2 - MARGIN).max(10) as f64;

    // Pass 1: wedges and separators.
    let mut start = -FRAC_PI_2;
    let mut label_anchors: Vec<(usize, f64, f64)> = Vec::new();
    for (idx, slice) in chart.slices.iter().enumerate() {
        let sweep = slice.percent / 100.0 * TAU;
        if sweep <= 0.0 {
            continue;
        }
        pie_area
            .draw(&Polygon::new(
                wedge_points(center, radius, start, sweep),
                theme.color(idx).filled(),
            ))
            .map_err(|e| anyhow!("{:?}", e))?;
        if chart.slices.len() > 1 {
            pie_area
                .draw(&PathElement::new(
                    vec![center, arc_point(center, radius, start)],
                    theme.separator.stroke_width(1),
                ))
                .map_err(|e| anyhow!("{:?}", e))?;
        }
        label_anchors.push((idx, start + sweep / 2.0, sweep));
        start += sweep;
    }

    // Pass 2: "label\npercent" inside every slice, smaller for narrow ones.
    for (idx, mid, sweep) in label_anchors {
        let slice = &chart.slices[idx];
        let font_px = slice_label_font_px(sweep);
        let label_radius = if sweep >= FULL_LABEL_SWEEP_RAD {
            LABEL_RADIUS
        } else {
            NARROW_LABEL_RADIUS
        };
        let slice_style = TextStyle::from((FontFamily::SansSerif, font_px))
            .color(&theme.text)
            .pos(Pos::new(HPos::Center, VPos::Center));
        let half_line = font_px as i32 / 2 + 1;
        let (x, y) = arc_point(center, radius * label_radius, mid);
        let max_text_px = (radius * label_radius * sweep.min(FRAC_PI_2)).max(24.0) as u32;
        let name = truncate_to_width(&slice.label, font_px, max_text_px);
        pie_area
            .draw(&Text::new(name, (x, y - half_line), slice_style.clone()))
            .map_err(|e| anyhow!("{:?}", e))?;
        pie_area
            .draw(&Text::new(
                format_percent(slice.percent, locale_tag),
                (x, y + half_line),
                slice_style,
            ))
            .map_err(|e| anyhow!("{:?}", e))?;
    }

    if chart.show_legend {
        draw_legend_panel(&legend_area, &legend_items, theme, MARGIN)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wedge_starts_at_center_and_runs_clockwise_from_top() {
        let pts = wedge_points((100, 100), 50.0, -FRAC_PI_2, FRAC_PI_2);
        assert_eq!(pts[0], (100, 100));
        // 12 o'clock
        assert_eq!(pts[1], (100, 50));
        // a quarter turn clockwise ends at 3 o'clock
        assert_eq!(*pts.last().unwrap(), (150, 100));
    }

    #[test]
    fn narrow_slices_keep_a_smaller_label() {
        assert_eq!(slice_label_font_px(1.0), SLICE_FONT_PX);
        assert_eq!(slice_label_font_px(FULL_LABEL_SWEEP_RAD), SLICE_FONT_PX);
        let half = slice_label_font_px(FULL_LABEL_SWEEP_RAD / 2.0);
        assert!(half < SLICE_FONT_PX && half >= MIN_SLICE_FONT_PX);
        // 0.5% of the circle still gets a readable label
        assert_eq!(slice_label_font_px(TAU * 0.005), MIN_SLICE_FONT_PX);
    }

    #[test]
    fn full_circle_has_fine_resolution() {
        let pts = wedge_points((0, 0), 10.0, 0.0, TAU);
        assert!(pts.len() > 200);
    }
}
