//! Overview line chart: categorical X axis (countries), one colored series per indicator.

use anyhow::{Result, anyhow};
use plotters::backend::DrawingBackend;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::series::LineSeries;
use plotters::style::FontFamily;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use super::LineChart;
use super::legend::{draw_legend_panel, legend_width_px};
use super::text::{estimate_text_width_px, truncate_to_width};
use super::theme::Theme;
use super::util::{compute_left_label_area_px, format_tick};

const MARGIN: i32 = 16;
const TITLE_FONT_PX: u32 = 22;
const TICK_FONT_PX: u32 = 12;
const Y_LABELS: usize = 10;
const BOTTOM_LABEL_AREA_PX: u32 = 64;
/// Category labels longer than this are truncated.
const MAX_CATEGORY_LABEL_PX: u32 = 110;

/// Split a gappy series into contiguous runs of `(x, y)` points.
pub(crate) fn contiguous_runs(values: &[Option<f64>]) -> Vec<Vec<(f64, f64)>> {
    let mut runs = Vec::new();
    let mut cur: Vec<(f64, f64)> = Vec::new();
    for (i, v) in values.iter().enumerate() {
        match v {
            Some(y) => cur.push((i as f64, *y)),
            None if !cur.is_empty() => runs.push(std::mem::take(&mut cur)),
            None => {}
        }
    }
    if !cur.is_empty() {
        runs.push(cur);
    }
    runs
}

fn value_range(chart: &LineChart) -> (f64, f64) {
    let values = chart
        .series
        .iter()
        .flat_map(|s| s.values.iter().flatten().copied());
    let (mut min_val, mut max_val) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });
    if !min_val.is_finite() || !max_val.is_finite() {
        return (0.0, 1.0);
    }
    if (max_val - min_val).abs() < f64::EPSILON {
        min_val -= 1.0;
        max_val += 1.0;
    }
    let pad = (max_val - min_val) * 0.05;
    (min_val - pad, max_val + pad)
}

pub fn draw_line_chart<DB>(
    root: &DrawingArea<DB, Shift>,
    chart: &LineChart,
    theme: &Theme,
    locale_tag: &str,
) -> Result<()>
where
    DB: DrawingBackend,
{
    let n = chart.categories.len();
    if n == 0 {
        return Err(anyhow!("no data to plot"));
    }
    let (min_val, max_val) = value_range(chart);

    let legend_items: Vec<(String, RGBColor)> = chart
        .series
        .iter()
        .enumerate()
        .map(|(i, s)| (s.name.clone(), theme.color(i)))
        .collect();
    let (root_w, _) = root.dim_in_pixel();
    let legend_w = legend_width_px(legend_items.iter().map(|(l, _)| l.as_str()), root_w);
    let (plot_area, legend_area) = root.split_horizontally((root_w as i32 - legend_w as i32).max(40));

    let left_label_px = compute_left_label_area_px(min_val, max_val, Y_LABELS, TICK_FONT_PX, locale_tag);
    let title_style = TextStyle::from((FontFamily::SansSerif, TITLE_FONT_PX)).color(&theme.text);
    let tick_style = TextStyle::from((FontFamily::SansSerif, TICK_FONT_PX)).color(&theme.muted_text);
    let desc_style = TextStyle::from((FontFamily::SansSerif, 14)).color(&theme.text);

    let mut cc = ChartBuilder::on(&plot_area)
        .margin(MARGIN as u32)
        .caption(chart.title.as_str(), title_style)
        .set_label_area_size(LabelAreaPosition::Left, left_label_px)
        .set_label_area_size(LabelAreaPosition::Bottom, BOTTOM_LABEL_AREA_PX)
        .build_cartesian_2d(-0.5f64..(n as f64 - 0.5), min_val..max_val)
        .map_err(|e| anyhow!("{:?}", e))?;

    // Category names are drawn below; the numeric X ticks stay blank.
    let x_fmt = |_: &f64| String::new();
    let y_fmt = |v: &f64| format_tick(*v, locale_tag);
    cc.configure_mesh()
        .disable_x_mesh()
        .x_desc(chart.x_label.as_str())
        .y_desc(chart.y_label.as_str())
        .y_labels(Y_LABELS)
        .x_label_formatter(&x_fmt)
        .y_label_formatter(&y_fmt)
        .label_style(tick_style.clone())
        .axis_desc_style(desc_style)
        .bold_line_style(theme.grid)
        .light_line_style(theme.background)
        .axis_style(theme.axis)
        .draw()
        .map_err(|e| anyhow!("{:?}", e))?;

    for (idx, series) in chart.series.iter().enumerate() {
        let color = theme.color(idx);
        for run in contiguous_runs(&series.values) {
            if run.len() == 1 {
                cc.draw_series(std::iter::once(Circle::new(run[0], 3, color.filled())))
                    .map_err(|e| anyhow!("{:?}", e))?;
            } else {
                cc.draw_series(LineSeries::new(run, color.stroke_width(2)))
                    .map_err(|e| anyhow!("{:?}", e))?;
            }
        }
    }

    // Category labels under the axis; thin them out when they would collide.
    let (x_first, y_axis) = cc.backend_coord(&(0.0, min_val));
    let (x_last, _) = cc.backend_coord(&((n - 1) as f64, min_val));
    let slot_px = if n > 1 {
        ((x_last - x_first) as f64 / (n - 1) as f64).max(1.0)
    } else {
        plot_area.dim_in_pixel().0 as f64
    };
    let labels: Vec<String> = chart
        .categories
        .iter()
        .map(|c| truncate_to_width(c, TICK_FONT_PX, MAX_CATEGORY_LABEL_PX))
        .collect();
    let widest = labels
        .iter()
        .map(|l| estimate_text_width_px(l, TICK_FONT_PX))
        .max()
        .unwrap_or(0) as f64;
    let step = ((widest + 6.0) / slot_px).ceil().max(1.0) as usize;
    let label_style = tick_style.pos(Pos::new(HPos::Center, VPos::Top));
    for (i, label) in labels.iter().enumerate().step_by(step) {
        let (x, _) = cc.backend_coord(&(i as f64, min_val));
        plot_area
            .draw(&Text::new(label.as_str(), (x, y_axis + 8), label_style.clone()))
            .map_err(|e| anyhow!("{:?}", e))?;
    }

    draw_legend_panel(
        &legend_area,
        &legend_items,
        theme,
        MARGIN + TITLE_FONT_PX as i32 + 8,
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runs_break_at_gaps() {
        let runs = contiguous_runs(&[Some(1.0), Some(2.0), None, Some(4.0), None, None]);
        assert_eq!(runs, vec![vec![(0.0, 1.0), (1.0, 2.0)], vec![(3.0, 4.0)]]);
        assert!(contiguous_runs(&[None, None]).is_empty());
    }
}
