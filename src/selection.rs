use crate::catalog::{self, Indicator, UnknownIndicator};
use std::collections::BTreeSet;

/// What the user has picked during one interaction.
///
/// A fresh value is built for every interaction; nothing here is persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    indicators: Vec<&'static Indicator>,
    countries: BTreeSet<String>,
    overview_requested: bool,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve indicator codes against the catalog, keeping first-seen order and dropping repeats.
    pub fn with_indicator_codes<I, S>(mut self, codes: I) -> Result<Self, UnknownIndicator>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for code in codes {
            let ind = catalog::lookup(code.as_ref())?;
            self.push_indicator(ind);
        }
        Ok(self)
    }

    pub fn with_indicators<I>(mut self, indicators: I) -> Self
    where
        I: IntoIterator<Item = &'static Indicator>,
    {
        for ind in indicators {
            self.push_indicator(ind);
        }
        self
    }

    pub fn with_countries<I, S>(mut self, countries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.countries.extend(countries.into_iter().map(Into::into));
        self
    }

    /// Mark the explicit "show overview" action for this interaction.
    pub fn with_overview(mut self, requested: bool) -> Self {
        self.overview_requested = requested;
        self
    }

    fn push_indicator(&mut self, ind: &'static Indicator) {
        if !self.indicators.iter().any(|i| i.code() == ind.code()) {
            self.indicators.push(ind);
        }
    }

    pub fn indicators(&self) -> &[&'static Indicator] {
        &self.indicators
    }

    pub fn countries(&self) -> &BTreeSet<String> {
        &self.countries
    }

    pub fn overview_requested(&self) -> bool {
        self.overview_requested
    }

    /// True when both pick the same indicators and countries, whatever the overview flag.
    pub fn same_choices(&self, other: &Selection) -> bool {
        self.indicators == other.indicators && self.countries == other.countries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_resolved_in_order_without_repeats() {
        let s = Selection::new()
            .with_indicator_codes(["GDP", "HDI", "GDP"])
            .unwrap();
        let codes: Vec<_> = s.indicators().iter().map(|i| i.code()).collect();
        assert_eq!(codes, vec!["GDP", "HDI"]);
    }

    #[test]
    fn unknown_codes_are_rejected() {
        let err = Selection::new().with_indicator_codes(["XYZ"]).unwrap_err();
        assert_eq!(err, UnknownIndicator("XYZ".into()));
    }

    #[test]
    fn overview_flag_does_not_change_choices() {
        let a = Selection::new().with_countries(["A"]);
        let b = a.clone().with_overview(true);
        assert!(a.same_choices(&b));
        assert_ne!(a, b);
    }
}
