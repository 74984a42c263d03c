//! Page composition: turn a display plan into the ordered blocks of the main area.
//!
//! Both binaries consume a [`Page`]: the GUI paints it, the CLI writes its charts
//! to files and prints its text.

use crate::display::{DisplayPlan, IndicatorPlan};
use crate::models::RecordTable;
use crate::viz::{self, Chart};
use serde::Serialize;
use thiserror::Error;

pub const OVERVIEW_SUBHEADER: &str = "Estatísticas Gerais";
pub const OVERVIEW_BUTTON: &str = "Mostrar Estatísticas Gerais";
pub const PIES_SUBHEADER: &str = "Dados Específicos por País";

/// Recoverable problems shown inline; none of them stops the session.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Warning {
    #[error("Coluna '{column}' não encontrada nos dados selecionados.")]
    MissingColumn { column: String },
    #[error(
        "Não foi possível plotar o gráfico de pizza para '{indicator}'. Verifique se os dados são válidos."
    )]
    ChartConstruction { indicator: String, reason: String },
    #[error("{}", incomplete_message(.both_empty))]
    IncompleteSelection { both_empty: bool },
}

fn incomplete_message(both_empty: &bool) -> &'static str {
    if *both_empty {
        "Por favor, selecione pelo menos um filtro e país para visualizar os gráficos."
    } else {
        "Selecione pelo menos um filtro e país para visualizar os gráficos."
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "block", content = "value", rename_all = "snake_case")]
pub enum Block {
    Subheader(String),
    Heading(String),
    /// The explicit overview trigger.
    Button(String),
    Chart(Chart),
    Warning(Warning),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Page {
    pub blocks: Vec<Block>,
}

impl Page {
    pub fn charts(&self) -> impl Iterator<Item = &Chart> {
        self.blocks.iter().filter_map(|b| match b {
            Block::Chart(c) => Some(c),
            _ => None,
        })
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Warning> {
        self.blocks.iter().filter_map(|b| match b {
            Block::Warning(w) => Some(w),
            _ => None,
        })
    }

    pub fn has_overview_button(&self) -> bool {
        self.blocks.iter().any(|b| matches!(b, Block::Button(_)))
    }
}

/// Build the page for `plan`. Pie failures become per-indicator warnings.
pub fn compose(plan: &DisplayPlan, table: &RecordTable) -> Page {
    let mut blocks = Vec::new();
    match plan {
        DisplayPlan::Overview { triggered } => {
            blocks.push(Block::Subheader(OVERVIEW_SUBHEADER.to_string()));
            blocks.push(Block::Button(OVERVIEW_BUTTON.to_string()));
            if *triggered {
                blocks.push(Block::Chart(Chart::Line(viz::overview_chart(table))));
            }
        }
        DisplayPlan::Pies(items) => {
            blocks.push(Block::Subheader(PIES_SUBHEADER.to_string()));
            for item in items {
                let indicator = item.indicator();
                blocks.push(Block::Heading(indicator.description().to_string()));
                let block = match item {
                    IndicatorPlan::Pie(request) => match viz::pie_chart(request) {
                        Ok(pie) => Block::Chart(Chart::Pie(pie)),
                        Err(err) => {
                            log::warn!("pie chart for {} failed: {err}", indicator.code());
                            Block::Warning(Warning::ChartConstruction {
                                indicator: indicator.code().to_string(),
                                reason: err.to_string(),
                            })
                        }
                    },
                    IndicatorPlan::MissingColumn { indicator } => {
                        Block::Warning(Warning::MissingColumn {
                            column: indicator.code().to_string(),
                        })
                    }
                };
                blocks.push(block);
            }
        }
        DisplayPlan::Incomplete { both_empty } => {
            blocks.push(Block::Warning(Warning::IncompleteSelection {
                both_empty: *both_empty,
            }));
        }
    }
    Page { blocks }
}
