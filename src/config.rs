use crate::storage::DATA_FILE_NAME;
use crate::viz::{DEFAULT_HEIGHT, DEFAULT_WIDTH};
use std::path::PathBuf;

/// Output format for exported charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartFormat {
    Png,
    Svg,
}

impl ChartFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ChartFormat::Png => "png",
            ChartFormat::Svg => "svg",
        }
    }
}

/// Session settings. The GUI runs on the defaults; the CLI overrides them from flags.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelConfig {
    pub data_file: PathBuf,
    pub width: u32,
    pub height: u32,
    /// Locale tag for tick and percent labels (see `viz::util::map_locale`).
    pub locale: String,
    pub format: ChartFormat,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DATA_FILE_NAME),
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            locale: "en".to_string(),
            format: ChartFormat::Png,
        }
    }
}

impl PanelConfig {
    /// File name for the `index`-th chart of a page, e.g. `chart_02_gdp.svg`.
    pub fn chart_file_name(&self, index: usize, slug: &str) -> String {
        let slug: String = slug
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() {
                    c.to_ascii_lowercase()
                } else {
                    '_'
                }
            })
            .collect();
        format!("chart_{:02}_{}.{}", index + 1, slug, self.format.extension())
    }
}
