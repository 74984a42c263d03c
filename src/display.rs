//! Display selection: decide what the main area shows for a given selection.
//!
//! This is a pure function of the selection and the table. Rules, first match wins:
//!
//! 1. empty table: nothing can be selected, prompt for a selection
//! 2. no indicators: overview (drawn only once explicitly requested)
//! 3. indicators and countries: one pie request per indicator over the country subset
//! 4. indicators without countries: prompt to complete the selection

use crate::catalog::Indicator;
use crate::models::RecordTable;
use crate::selection::Selection;
use serde::Serialize;

/// Inputs for one pie chart: an indicator and the rows of the selected countries.
#[derive(Debug, Clone, PartialEq)]
pub struct PieRequest {
    pub indicator: &'static Indicator,
    pub subset: RecordTable,
}

/// Outcome for one selected indicator.
#[derive(Debug, Clone, PartialEq)]
pub enum IndicatorPlan {
    Pie(PieRequest),
    MissingColumn { indicator: &'static Indicator },
}

impl IndicatorPlan {
    pub fn indicator(&self) -> &'static Indicator {
        match self {
            IndicatorPlan::Pie(req) => req.indicator,
            IndicatorPlan::MissingColumn { indicator } => indicator,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DisplayPlan {
    Overview { triggered: bool },
    Pies(Vec<IndicatorPlan>),
    Incomplete { both_empty: bool },
}

/// Dashboard states, derived from a plan. Nothing carries over between evaluations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DisplayState {
    NoSelection,
    OverviewPending,
    OverviewShown,
    PartialSelection,
    /// Indicators and countries are both chosen. Set by the selection alone, so it
    /// holds even when every chosen indicator ends up as a missing-column warning.
    PieShown,
}

pub fn select(selection: &Selection, table: &RecordTable) -> DisplayPlan {
    let plan = if table.is_empty() {
        DisplayPlan::Incomplete { both_empty: true }
    } else if selection.indicators().is_empty() {
        DisplayPlan::Overview {
            triggered: selection.overview_requested(),
        }
    } else if !selection.countries().is_empty() {
        let subset = table.filter_countries(selection.countries());
        DisplayPlan::Pies(
            selection
                .indicators()
                .iter()
                .map(|&indicator| {
                    if subset.has_column(indicator.code()) {
                        IndicatorPlan::Pie(PieRequest {
                            indicator,
                            subset: subset.clone(),
                        })
                    } else {
                        IndicatorPlan::MissingColumn { indicator }
                    }
                })
                .collect(),
        )
    } else {
        DisplayPlan::Incomplete { both_empty: false }
    };
    log::debug!("display plan: {:?}", plan_state(&plan, selection));
    plan
}

fn plan_state(plan: &DisplayPlan, selection: &Selection) -> DisplayState {
    match plan {
        DisplayPlan::Overview { triggered: true } => DisplayState::OverviewShown,
        DisplayPlan::Overview { triggered: false } if selection.countries().is_empty() => {
            DisplayState::NoSelection
        }
        DisplayPlan::Overview { triggered: false } => DisplayState::OverviewPending,
        DisplayPlan::Pies(_) => DisplayState::PieShown,
        DisplayPlan::Incomplete { both_empty: true } => DisplayState::NoSelection,
        DisplayPlan::Incomplete { both_empty: false } => DisplayState::PartialSelection,
    }
}

impl DisplayPlan {
    /// State-machine view of this plan for the selection it was computed from.
    pub fn state(&self, selection: &Selection) -> DisplayState {
        plan_state(self, selection)
    }

    /// Number of pie charts requested (indicators present as columns).
    pub fn pie_requests(&self) -> usize {
        match self {
            DisplayPlan::Pies(items) => items
                .iter()
                .filter(|p| matches!(p, IndicatorPlan::Pie(_)))
                .count(),
            _ => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Record, Value};

    fn table() -> RecordTable {
        RecordTable::new(
            vec!["Country".into(), "GDP".into(), "HDI".into()],
            vec![
                Record {
                    country: "A".into(),
                    values: vec![Value::Number(100.0), Value::Number(0.8)],
                },
                Record {
                    country: "B".into(),
                    values: vec![Value::Number(200.0), Value::Number(0.9)],
                },
            ],
        )
        .unwrap()
    }

    #[test]
    fn no_indicators_means_overview_regardless_of_countries() {
        let t = table();
        for countries in [vec![], vec!["A"], vec!["A", "B"]] {
            let sel = Selection::new().with_countries(countries);
            assert_eq!(select(&sel, &t), DisplayPlan::Overview { triggered: false });
        }
        let sel = Selection::new().with_overview(true);
        let plan = select(&sel, &t);
        assert_eq!(plan, DisplayPlan::Overview { triggered: true });
        assert_eq!(plan.state(&sel), DisplayState::OverviewShown);
    }

    #[test]
    fn full_selection_filters_subset() {
        let t = table();
        let sel = Selection::new()
            .with_indicator_codes(["GDP", "CPI"])
            .unwrap()
            .with_countries(["B"]);
        let plan = select(&sel, &t);
        assert_eq!(plan.pie_requests(), 1);
        let DisplayPlan::Pies(items) = &plan else {
            panic!("expected pies, got {plan:?}");
        };
        match &items[0] {
            IndicatorPlan::Pie(req) => {
                assert_eq!(req.subset.len(), 1);
                assert_eq!(req.subset.rows()[0].country, "B");
            }
            other => panic!("unexpected {other:?}"),
        }
        assert!(matches!(items[1], IndicatorPlan::MissingColumn { .. }));
        assert_eq!(items[1].indicator().code(), "CPI");
    }

    #[test]
    fn full_selection_state_does_not_depend_on_columns() {
        let t = table();
        let sel = Selection::new()
            .with_indicator_codes(["CPI"])
            .unwrap()
            .with_countries(["A"]);
        let plan = select(&sel, &t);
        assert_eq!(plan.pie_requests(), 0);
        assert_eq!(plan.state(&sel), DisplayState::PieShown);
    }

    #[test]
    fn partial_and_empty_table_states() {
        let t = table();
        let sel = Selection::new().with_indicator_codes(["GDP"]).unwrap();
        let plan = select(&sel, &t);
        assert_eq!(plan, DisplayPlan::Incomplete { both_empty: false });
        assert_eq!(plan.state(&sel), DisplayState::PartialSelection);

        let empty = t.filter_countries(&Default::default());
        let plan = select(&Selection::new(), &empty);
        assert_eq!(plan, DisplayPlan::Incomplete { both_empty: true });
        assert_eq!(plan.state(&Selection::new()), DisplayState::NoSelection);

        let sel = Selection::new().with_countries(["A"]);
        assert_eq!(
            select(&sel, &t).state(&sel),
            DisplayState::OverviewPending
        );
    }
}
