use crate::catalog;
use crate::models::{RecordTable, Value};
use serde::Serialize;

/// Summary statistics for one indicator column.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Summary {
    pub indicator: String,
    pub count: usize,
    /// Empty cells plus non-numeric text.
    pub missing: usize,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub mean: Option<f64>,
    pub median: Option<f64>,
}

/// Summaries for every catalog indicator present in `table`, in catalog order.
pub fn indicator_summary(table: &RecordTable) -> Vec<Summary> {
    catalog::entries()
        .iter()
        .filter_map(|ind| {
            let column = table.column(ind.code())?;
            Some(summarize(
                ind.code(),
                column.into_iter().map(|(_, v)| v),
            ))
        })
        .collect()
}

fn summarize<'a>(indicator: &str, values: impl Iterator<Item = &'a Value>) -> Summary {
    let mut vals: Vec<f64> = Vec::new();
    let mut missing = 0;
    for v in values {
        match v.as_f64() {
            Some(x) if x.is_finite() => vals.push(x),
            _ => missing += 1,
        }
    }
    vals.sort_by(f64::total_cmp);

    let count = vals.len();
    let mean = (count > 0).then(|| vals.iter().sum::<f64>() / count as f64);
    let median = if count == 0 {
        None
    } else if count % 2 == 1 {
        Some(vals[count / 2])
    } else {
        Some((vals[count / 2 - 1] + vals[count / 2]) / 2.0)
    };
    Summary {
        indicator: indicator.to_string(),
        count,
        missing,
        min: vals.first().copied(),
        max: vals.last().copied(),
        mean,
        median,
    }
}
