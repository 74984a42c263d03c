//! Right-hand legend panel shared by line and pie charts.

use anyhow::Result;
use plotters::backend::DrawingBackend;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::FontFamily;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use super::text::{estimate_text_width_px, wrap_text_to_width};
use super::theme::Theme;

pub const LEGEND_FONT_PX: u32 = 14;

// Layout constants (must match legend_width_px)
const PAD_X: i32 = 8;
const SWATCH: i32 = 10;
const SWATCH_TO_TEXT: i32 = 8;
const ROW_GAP: i32 = 6;

/// Width of the legend panel for these labels, capped at a third of the canvas.
pub fn legend_width_px<'a, I>(labels: I, canvas_w: u32) -> u32
where
    I: IntoIterator<Item = &'a str>,
{
    let widest = labels
        .into_iter()
        .map(|l| estimate_text_width_px(l, LEGEND_FONT_PX))
        .max()
        .unwrap_or(0);
    let needed = widest + (2 * PAD_X + SWATCH + SWATCH_TO_TEXT) as u32;
    needed.clamp(80, (canvas_w / 3).max(80))
}

/// Draw a single-column legend starting `top_px` below the panel's top edge.
///
/// Labels wrap to the panel width; items that no longer fit vertically are
/// summarized as `+N`.
pub fn draw_legend_panel<DB>(
    legend_area: &DrawingArea<DB, Shift>,
    items: &[(String, RGBColor)],
    theme: &Theme,
    top_px: i32,
) -> Result<()>
where
    DB: DrawingBackend,
{
    let (w_u32, h_u32) = legend_area.dim_in_pixel();
    let (w, h) = (w_u32 as i32, h_u32 as i32);
    let line_h = LEGEND_FONT_PX as i32 + 2;
    let text_x = PAD_X + SWATCH + SWATCH_TO_TEXT;
    let max_text_w = (w - text_x - PAD_X).max(20) as u32;

    let label_style = TextStyle::from((FontFamily::SansSerif, LEGEND_FONT_PX))
        .color(&theme.text)
        .pos(Pos::new(HPos::Left, VPos::Center));

    let mut y = top_px.max(PAD_X);
    for (drawn, (label, color)) in items.iter().enumerate() {
        let lines = wrap_text_to_width(label, LEGEND_FONT_PX, max_text_w);
        let block_h = (lines.len().max(1) as i32) * line_h;
        if y + block_h > h - line_h && drawn + 1 < items.len() {
            legend_area
                .draw(&Text::new(
                    format!("+{}", items.len() - drawn),
                    (text_x, y + line_h / 2),
                    label_style.clone(),
                ))
                .map_err(|e| anyhow::anyhow!("{:?}", e))?;
            break;
        }

        let swatch_top = y + line_h / 2 - SWATCH / 2;
        legend_area
            .draw(&Rectangle::new(
                [(PAD_X, swatch_top), (PAD_X + SWATCH, swatch_top + SWATCH)],
                color.filled(),
            ))
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;

        for (i, line) in lines.iter().enumerate() {
            legend_area
                .draw(&Text::new(
                    line.as_str(),
                    (text_x, y + (i as i32) * line_h + line_h / 2),
                    label_style.clone(),
                ))
                .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        }
        y += block_h + ROW_GAP;
    }
    Ok(())
}
