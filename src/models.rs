use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Name of the column every dataset must carry.
pub const COUNTRY_COLUMN: &str = "Country";

/// One cell of an indicator column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    Number(f64),
    /// Non-numeric content, kept verbatim so chart validation can report it.
    Text(String),
    Missing,
}

impl Value {
    /// Classify a raw CSV cell. Empty cells and the usual NaN spellings are `Missing`.
    pub fn parse(raw: &str) -> Self {
        let s = raw.trim();
        match s {
            "" | "NA" | "N/A" | "NaN" | "nan" | "null" => Value::Missing,
            _ => match s.parse::<f64>() {
                Ok(v) if v.is_nan() => Value::Missing,
                Ok(v) => Value::Number(v),
                Err(_) => Value::Text(s.to_string()),
            },
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(v) => Some(*v),
            _ => None,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Value::Missing)
    }
}

/// One row: the country key plus one value per indicator column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub country: String,
    /// Aligned with [`RecordTable::indicator_columns`].
    pub values: Vec<Value>,
}

/// Ordered, immutable table of country records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordTable {
    headers: Vec<String>,
    columns: Vec<String>,
    rows: Vec<Record>,
}

impl RecordTable {
    /// Build a table from the full header row (which must contain `Country`) and its records.
    ///
    /// Returns `None` when the header has no `Country` column or a record's width
    /// does not match the number of indicator columns.
    pub fn new(headers: Vec<String>, rows: Vec<Record>) -> Option<Self> {
        if !headers.iter().any(|h| h == COUNTRY_COLUMN) {
            return None;
        }
        let columns: Vec<String> = headers
            .iter()
            .filter(|h| *h != COUNTRY_COLUMN)
            .cloned()
            .collect();
        if rows.iter().any(|r| r.values.len() != columns.len()) {
            return None;
        }
        Some(Self {
            headers,
            columns,
            rows,
        })
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// All headers in file order, `Country` included.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Headers other than `Country`, in file order.
    pub fn indicator_columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Record] {
        &self.rows
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.headers.iter().any(|h| h == name)
    }

    fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Distinct non-blank country names in first-seen order.
    pub fn countries(&self) -> Vec<&str> {
        let mut seen = BTreeSet::new();
        self.rows
            .iter()
            .map(|r| r.country.as_str())
            .filter(|c| !c.is_empty() && seen.insert(*c))
            .collect()
    }

    /// `(country, value)` pairs of an indicator column, in table order.
    pub fn column(&self, name: &str) -> Option<Vec<(&str, &Value)>> {
        let idx = self.column_index(name)?;
        Some(
            self.rows
                .iter()
                .map(|r| (r.country.as_str(), &r.values[idx]))
                .collect(),
        )
    }

    /// Rows whose country is in `countries`, preserving row order and headers.
    pub fn filter_countries(&self, countries: &BTreeSet<String>) -> RecordTable {
        RecordTable {
            headers: self.headers.clone(),
            columns: self.columns.clone(),
            rows: self
                .rows
                .iter()
                .filter(|r| countries.contains(&r.country))
                .cloned()
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

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
                    values: vec![Value::Number(200.0), Value::Missing],
                },
                Record {
                    country: "A".into(),
                    values: vec![Value::Number(50.0), Value::Text("n/d".into())],
                },
            ],
        )
        .unwrap()
    }

    #[test]
    fn value_parse_classifies_cells() {
        assert_eq!(Value::parse(" 1.5 "), Value::Number(1.5));
        assert_eq!(Value::parse("-3"), Value::Number(-3.0));
        assert_eq!(Value::parse(""), Value::Missing);
        assert_eq!(Value::parse("NaN"), Value::Missing);
        assert_eq!(Value::parse("abc"), Value::Text("abc".into()));
    }

    #[test]
    fn countries_are_distinct_in_first_seen_order() {
        assert_eq!(table().countries(), vec!["A", "B"]);
    }

    #[test]
    fn filter_keeps_order_and_headers() {
        let t = table();
        let sel: BTreeSet<String> = ["A".to_string()].into_iter().collect();
        let sub = t.filter_countries(&sel);
        assert_eq!(sub.len(), 2);
        assert_eq!(sub.headers(), t.headers());
        let gdp = sub.column("GDP").unwrap();
        assert_eq!(gdp[1], ("A", &Value::Number(50.0)));
    }

    #[test]
    fn table_requires_country_header() {
        assert!(RecordTable::new(vec!["GDP".into()], vec![]).is_none());
        assert!(!table().has_column("CPI"));
        assert!(table().has_column("Country"));
        assert!(table().column("Country").is_none());
    }
}
