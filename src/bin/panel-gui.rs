/*!
 * Desktop dashboard for prosperity-panel: "O que faz um país próspero?"
 *
 * - Sidebar: indicator filters (labelled by description) and countries
 * - Main area: overview line chart on demand, or one pie chart per indicator
 * - Charts can be exported as PNG/SVG into a chosen folder
 *
 * Reads `trabalho.csv` from the working directory. Platform support: Windows, macOS, Linux
 */

use eframe::egui;
use prosperity_panel::config::{ChartFormat, PanelConfig};
use prosperity_panel::dashboard::{self, Block, Page};
use prosperity_panel::viz::{self, Chart};
use prosperity_panel::{Indicator, RecordTable, Selection, catalog, display, session};
use std::collections::BTreeSet;
use std::path::PathBuf;

fn main() -> Result<(), eframe::Error> {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 860.0])
            .with_min_inner_size([720.0, 480.0])
            .with_title("O que faz um país próspero?"),
        ..Default::default()
    };

    eframe::run_native(
        "O que faz um país próspero?",
        options,
        Box::new(|cc| {
            cc.egui_ctx.set_visuals(egui::Visuals::dark());
            Ok(Box::new(PanelApp::new()))
        }),
    )
}

/// Page plus chart textures for the selection they were computed from.
struct Rendered {
    selection: Selection,
    page: Page,
    /// One entry per page block; `Some` only for charts that rendered.
    textures: Vec<Option<egui::TextureHandle>>,
    render_errors: Vec<String>,
}

/// Main application state
struct PanelApp {
    config: PanelConfig,
    table: Option<RecordTable>,
    startup_error: Option<String>,

    // Sidebar selections
    chosen_indicators: Vec<&'static Indicator>,
    chosen_countries: BTreeSet<String>,
    overview_clicked: bool,

    rendered: Option<Rendered>,

    // Export
    export_format: ChartFormat,
    export_dir: String,
    status_message: String,
    error_message: String,
}

impl PanelApp {
    fn new() -> Self {
        let (table, startup_error) = match session::open_default() {
            Ok(t) => (Some(t), None),
            Err(err) => {
                log::error!("{err}");
                (None, Some(err.to_string()))
            }
        };
        let export_dir = dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .to_string_lossy()
            .to_string();

        Self {
            config: PanelConfig::default(),
            table,
            startup_error,
            chosen_indicators: Vec::new(),
            chosen_countries: BTreeSet::new(),
            overview_clicked: false,
            rendered: None,
            export_format: ChartFormat::Png,
            export_dir,
            status_message: String::new(),
            error_message: String::new(),
        }
    }

    fn current_selection(&self) -> Selection {
        Selection::new()
            .with_indicators(self.chosen_indicators.iter().copied())
            .with_countries(self.chosen_countries.iter().cloned())
            .with_overview(self.overview_clicked)
    }

    /// Recompute page and chart textures when the selection changed since the last frame.
    fn refresh(&mut self, ctx: &egui::Context) {
        let Some(table) = self.table.as_ref() else {
            return;
        };
        let selection = self.current_selection();
        if self
            .rendered
            .as_ref()
            .is_some_and(|r| r.selection == selection)
        {
            return;
        }

        let plan = display::select(&selection, table);
        let page = dashboard::compose(&plan, table);
        let mut render_errors = Vec::new();
        let textures = page
            .blocks
            .iter()
            .enumerate()
            .map(|(i, block)| {
                let Block::Chart(chart) = block else {
                    return None;
                };
                match chart_texture(ctx, chart, &self.config, i) {
                    Ok(tex) => Some(tex),
                    Err(err) => {
                        log::warn!("rendering '{}' failed: {err:#}", chart.title());
                        render_errors.push(format!("{}: {err}", chart.title()));
                        None
                    }
                }
            })
            .collect();

        self.rendered = Some(Rendered {
            selection,
            page,
            textures,
            render_errors,
        });
    }

    fn export_charts(&mut self) {
        let Some(rendered) = self.rendered.as_ref() else {
            return;
        };
        let config = PanelConfig {
            format: self.export_format,
            ..self.config.clone()
        };
        let dir = PathBuf::from(&self.export_dir);
        let mut written = Vec::new();
        for (i, chart) in rendered.page.charts().enumerate() {
            let slug = match chart {
                Chart::Line(_) => "overview",
                Chart::Pie(p) => p.indicator.as_str(),
            };
            let path = dir.join(config.chart_file_name(i, slug));
            if let Err(err) =
                viz::save_chart(chart, &path, config.width, config.height, &config.locale)
            {
                self.error_message = format!("Failed to export chart: {err}");
                self.status_message.clear();
                return;
            }
            written.push(path.to_string_lossy().to_string());
        }
        self.error_message.clear();
        self.status_message = if written.is_empty() {
            "No charts to export.".to_string()
        } else {
            format!("Files created:\n{}", written.join("\n"))
        };
    }

    fn side_panel(&mut self, ui: &mut egui::Ui, countries: &[String]) {
        egui::ScrollArea::vertical().show(ui, |ui| {
            ui.heading("Escolha os filtros");
            ui.add_space(5.0);
            for ind in catalog::entries() {
                let mut on = self.chosen_indicators.iter().any(|c| c.code() == ind.code());
                if ui
                    .checkbox(&mut on, ind.description())
                    .on_hover_text(ind.code())
                    .changed()
                {
                    if on {
                        self.chosen_indicators.push(ind);
                    } else {
                        self.chosen_indicators.retain(|c| c.code() != ind.code());
                    }
                }
            }

            ui.add_space(10.0);
            ui.separator();
            ui.heading("Escolha os países");
            ui.add_space(5.0);
            for country in countries {
                let mut on = self.chosen_countries.contains(country);
                if ui.checkbox(&mut on, country).changed() {
                    if on {
                        self.chosen_countries.insert(country.clone());
                    } else {
                        self.chosen_countries.remove(country);
                    }
                }
            }
        });
    }
}

fn chart_texture(
    ctx: &egui::Context,
    chart: &Chart,
    config: &PanelConfig,
    index: usize,
) -> anyhow::Result<egui::TextureHandle> {
    let buf = viz::render_rgb(chart, config.width, config.height, &config.locale)?;
    let image = egui::ColorImage::from_rgb([config.width as usize, config.height as usize], &buf);
    Ok(ctx.load_texture(
        format!("chart-{index}"),
        image,
        egui::TextureOptions::LINEAR,
    ))
}

impl eframe::App for PanelApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if let Some(err) = &self.startup_error {
            egui::CentralPanel::default().show(ctx, |ui| {
                ui.heading("O que faz um país próspero?");
                ui.add_space(10.0);
                ui.colored_label(egui::Color32::RED, err);
            });
            return;
        }

        let countries: Vec<String> = self
            .table
            .as_ref()
            .map(|t| t.countries().into_iter().map(String::from).collect())
            .unwrap_or_default();

        let before = self.current_selection();
        egui::SidePanel::left("filters")
            .resizable(true)
            .default_width(340.0)
            .show(ctx, |ui| self.side_panel(ui, &countries));
        // The overview button only counts for the interaction that pressed it.
        if !before.same_choices(&self.current_selection()) {
            self.overview_clicked = false;
        }

        self.refresh(ctx);

        let mut overview_pressed = false;
        let mut export_pressed = false;
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.heading("O que faz um país próspero?");
                ui.add_space(10.0);

                let Some(rendered) = self.rendered.as_ref() else {
                    return;
                };
                for (block, texture) in rendered.page.blocks.iter().zip(&rendered.textures) {
                    match block {
                        Block::Subheader(s) => {
                            ui.heading(s);
                        }
                        Block::Heading(h) => {
                            ui.label(egui::RichText::new(h).strong().size(18.0));
                        }
                        Block::Button(label) => {
                            if ui.button(label).clicked() {
                                overview_pressed = true;
                            }
                        }
                        Block::Chart(_) => {
                            if let Some(tex) = texture {
                                ui.add(
                                    egui::Image::from_texture(
                                        egui::load::SizedTexture::from_handle(tex),
                                    )
                                    .shrink_to_fit(),
                                );
                            }
                        }
                        Block::Warning(w) => {
                            ui.colored_label(egui::Color32::from_rgb(255, 193, 7), w.to_string());
                        }
                    }
                    ui.add_space(8.0);
                }
                for err in &rendered.render_errors {
                    ui.colored_label(egui::Color32::RED, err);
                }

                if rendered.page.charts().next().is_some() {
                    ui.separator();
                    ui.horizontal(|ui| {
                        ui.label("Export format:");
                        ui.radio_value(&mut self.export_format, ChartFormat::Png, "PNG");
                        ui.radio_value(&mut self.export_format, ChartFormat::Svg, "SVG");
                    });
                    ui.horizontal(|ui| {
                        ui.label("Output path:");
                        ui.text_edit_singleline(&mut self.export_dir);
                        if ui.button("Browse").clicked()
                            && let Some(path) = rfd::FileDialog::new().pick_folder()
                        {
                            self.export_dir = path.to_string_lossy().to_string();
                        }
                    });
                    if ui.button("Exportar gráficos").clicked() {
                        export_pressed = true;
                    }
                }

                if !self.status_message.is_empty() {
                    ui.colored_label(egui::Color32::DARK_GREEN, &self.status_message);
                }
                if !self.error_message.is_empty() {
                    ui.colored_label(egui::Color32::RED, &self.error_message);
                }
            });
        });

        if overview_pressed {
            self.overview_clicked = true;
            ctx.request_repaint();
        }
        if export_pressed {
            self.export_charts();
        }
    }
}
