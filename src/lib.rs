//! prosperity_panel
//!
//! A small dashboard library over a CSV of country development indicators
//! ("O que faz um país próspero?"). Pairs with the `panel` CLI and the
//! `panel-gui` desktop app.
//!
//! ### Features
//! - Load `trabalho.csv` into an immutable record table keyed by `Country`
//! - Fixed catalog of 13 indicator codes with Portuguese descriptions
//! - Pure display selection: overview line chart, per-country pie charts, or a prompt
//! - Render charts with a dark theme to SVG/PNG or an RGB buffer
//!
//! ### Example
//! ```no_run
//! use prosperity_panel::{Selection, dashboard, display, storage, viz};
//!
//! let table = storage::load_csv("trabalho.csv")?;
//! let selection = Selection::new()
//!     .with_indicator_codes(["GDP", "HDI"])?
//!     .with_countries(["Brasil", "Chile"]);
//! let plan = display::select(&selection, &table);
//! let page = dashboard::compose(&plan, &table);
//! for (i, chart) in page.charts().enumerate() {
//!     viz::save_chart(chart, format!("chart_{i}.svg"), 1000, 600, "en")?;
//! }
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod catalog;
pub mod config;
pub mod dashboard;
pub mod display;
pub mod models;
pub mod selection;
pub mod session;
pub mod stats;
pub mod storage;
pub mod viz;

pub use catalog::Indicator;
pub use config::PanelConfig;
pub use models::{RecordTable, Value};
pub use selection::Selection;
