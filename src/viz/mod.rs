//! Visualization: chart specifications and their rendering to **SVG**, **PNG** or RGB buffers.
//!
//! - Overview: one line series per catalog indicator present in the table, x = country
//! - Per-country pie: one chart per indicator over the selected countries
//! - Dark theme, legend on the right, locale-aware Y tick labels

pub mod legend;
pub mod line;
pub mod pie;
pub mod text;
pub mod theme;
pub mod util;

pub use theme::{DARK, Theme};

use crate::catalog;
use crate::display::PieRequest;
use crate::models::{RecordTable, Value};
use anyhow::{Result, anyhow};
use plotters::backend::DrawingBackend;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters_bitmap::BitMapBackend;
use plotters_svg::SVGBackend;
use serde::Serialize;
use std::borrow::Cow;
use std::path::Path;
use std::sync::Once;
use std::time::Instant;
use thiserror::Error;

pub const OVERVIEW_TITLE: &str = "Estatísticas Gerais por Categoria";
pub const OVERVIEW_X_LABEL: &str = "Países";
pub const OVERVIEW_Y_LABEL: &str = "Valor";

/// Default canvas size for saved charts.
pub const DEFAULT_WIDTH: u32 = 1000;
pub const DEFAULT_HEIGHT: u32 = 600;

/// One-time registration of a "sans-serif" font for the `ab_glyph` text path,
/// which does not discover OS fonts. The bytes come from egui's bundled fonts.
static INIT_FONTS: Once = Once::new();

fn ensure_fonts_registered() {
    INIT_FONTS.call_once(|| {
        let defs = egui::FontDefinitions::default();
        let Some(data) = defs.font_data.get("Ubuntu-Light") else {
            log::warn!("bundled sans-serif font not found; chart text will fail to render");
            return;
        };
        let bytes: &'static [u8] = match &data.font {
            Cow::Borrowed(bytes) => *bytes,
            Cow::Owned(bytes) => Box::leak(bytes.clone().into_boxed_slice()),
        };
        if plotters::style::register_font("sans-serif", plotters::style::FontStyle::Normal, bytes)
            .is_err()
        {
            log::warn!("failed to register sans-serif font for charts");
        }
    });
}

/// A renderable chart specification.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Chart {
    Line(LineChart),
    Pie(PieChart),
}

impl Chart {
    pub fn title(&self) -> &str {
        match self {
            Chart::Line(c) => &c.title,
            Chart::Pie(c) => &c.title,
        }
    }
}

/// Multi-series line chart over categorical X values.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineChart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub categories: Vec<String>,
    pub series: Vec<Series>,
}

/// One named series; `values` is aligned with [`LineChart::categories`], `None` marks a gap.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    pub name: String,
    pub values: Vec<Option<f64>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieChart {
    pub title: String,
    pub indicator: String,
    /// Slices in drawing order (descending value).
    pub slices: Vec<PieSlice>,
    pub show_legend: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieSlice {
    pub label: String,
    pub value: f64,
    /// Share of the total in percent (0..=100).
    pub percent: f64,
}

impl PieChart {
    pub fn total(&self) -> f64 {
        self.slices.iter().map(|s| s.value).sum()
    }
}

/// Why a pie chart could not be built from a column.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ChartError {
    #[error("column '{0}' not found")]
    MissingColumn(String),
    #[error("non-numeric value '{value}' for {country}")]
    NonNumeric { country: String, value: String },
    #[error("negative value {value} for {country}")]
    Negative { country: String, value: f64 },
    #[error("no numeric values")]
    NoValues,
    #[error("values sum to zero")]
    ZeroTotal,
    #[error("values sum past the largest representable number")]
    TotalOverflow,
}

/// Overview line chart: one series per catalog entry that is a column of `table`, in catalog order.
pub fn overview_chart(table: &RecordTable) -> LineChart {
    let categories = table.rows().iter().map(|r| r.country.clone()).collect();
    let series = catalog::entries()
        .iter()
        .filter_map(|ind| {
            let column = table.column(ind.code())?;
            Some(Series {
                name: ind.code().to_string(),
                values: column.into_iter().map(|(_, v)| v.as_f64()).collect(),
            })
        })
        .collect();
    LineChart {
        title: OVERVIEW_TITLE.to_string(),
        x_label: OVERVIEW_X_LABEL.to_string(),
        y_label: OVERVIEW_Y_LABEL.to_string(),
        categories,
        series,
    }
}

/// Build the pie chart for one request: one slice per country of the subset.
///
/// Repeated countries are summed into one slice; missing cells contribute nothing.
pub fn pie_chart(request: &PieRequest) -> Result<PieChart, ChartError> {
    let code = request.indicator.code();
    let column = request
        .subset
        .column(code)
        .ok_or_else(|| ChartError::MissingColumn(code.to_string()))?;

    let mut slices: Vec<PieSlice> = Vec::new();
    for (country, value) in column {
        let v = match value {
            Value::Missing => continue,
            Value::Text(t) => {
                return Err(ChartError::NonNumeric {
                    country: country.to_string(),
                    value: t.clone(),
                });
            }
            Value::Number(v) if !v.is_finite() => {
                return Err(ChartError::NonNumeric {
                    country: country.to_string(),
                    value: v.to_string(),
                });
            }
            Value::Number(v) if *v < 0.0 => {
                return Err(ChartError::Negative {
                    country: country.to_string(),
                    value: *v,
                });
            }
            Value::Number(v) => *v,
        };
        match slices.iter_mut().find(|s| s.label == country) {
            Some(s) => s.value += v,
            None => slices.push(PieSlice {
                label: country.to_string(),
                value: v,
                percent: 0.0,
            }),
        }
    }

    if slices.is_empty() {
        return Err(ChartError::NoValues);
    }
    let total: f64 = slices.iter().map(|s| s.value).sum();
    if !total.is_finite() {
        return Err(ChartError::TotalOverflow);
    }
    if total <= 0.0 {
        return Err(ChartError::ZeroTotal);
    }
    for s in slices.iter_mut() {
        s.percent = s.value / total * 100.0;
    }
    // stable: equal values keep table order
    slices.sort_by(|a, b| b.value.total_cmp(&a.value));

    Ok(PieChart {
        title: format!("{} por País", request.indicator.description()),
        indicator: code.to_string(),
        slices,
        show_legend: true,
    })
}

/// Write a chart to `out_path`: SVG when the extension is `.svg`, PNG otherwise.
pub fn save_chart<P: AsRef<Path>>(
    chart: &Chart,
    out_path: P,
    width: u32,
    height: u32,
    locale_tag: &str,
) -> Result<()> {
    ensure_fonts_registered();
    let out_path = out_path.as_ref();
    let path_string = out_path.to_string_lossy().into_owned();

    if out_path.extension().and_then(|s| s.to_str()) == Some("svg") {
        let root = SVGBackend::new(path_string.as_str(), (width, height)).into_drawing_area();
        draw_chart(root, chart, locale_tag)?;
    } else {
        let root = BitMapBackend::new(path_string.as_str(), (width, height)).into_drawing_area();
        draw_chart(root, chart, locale_tag)?;
    }
    log::debug!("wrote '{}' to {}", chart.title(), out_path.display());
    Ok(())
}

/// Render a chart into a packed RGB8 buffer of `width * height * 3` bytes.
pub fn render_rgb(chart: &Chart, width: u32, height: u32, locale_tag: &str) -> Result<Vec<u8>> {
    if width == 0 || height == 0 {
        return Err(anyhow!("empty canvas {width}x{height}"));
    }
    ensure_fonts_registered();
    let started = Instant::now();
    let mut buf = vec![0u8; width as usize * height as usize * 3];
    {
        let root = BitMapBackend::with_buffer(&mut buf, (width, height)).into_drawing_area();
        draw_chart(root, chart, locale_tag)?;
    }
    log::debug!("rendered '{}' in {:?}", chart.title(), started.elapsed());
    Ok(buf)
}

fn draw_chart<DB>(root: DrawingArea<DB, Shift>, chart: &Chart, locale_tag: &str) -> Result<()>
where
    DB: DrawingBackend,
{
    root.fill(&DARK.background).map_err(|e| anyhow!("{:?}", e))?;
    match chart {
        Chart::Line(c) => line::draw_line_chart(&root, c, &DARK, locale_tag)?,
        Chart::Pie(c) => pie::draw_pie_chart(&root, c, &DARK, locale_tag)?,
    }
    root.present().map_err(|e| anyhow!("{:?}", e))?;
    Ok(())
}
