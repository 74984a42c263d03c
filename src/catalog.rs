//! Fixed catalog of indicator codes and their human-readable descriptions.
//!
//! The descriptions double as selection labels in the GUI and as chart titles.

use serde::Serialize;
use std::collections::BTreeSet;
use thiserror::Error;

/// One catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Indicator {
    code: &'static str,
    description: &'static str,
}

impl Indicator {
    pub(crate) const fn new(code: &'static str, description: &'static str) -> Self {
        Self { code, description }
    }

    pub fn code(&self) -> &'static str {
        self.code
    }

    pub fn description(&self) -> &'static str {
        self.description
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("indicador desconhecido: '{0}'")]
pub struct UnknownIndicator(pub String);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("duplicate indicator code '{0}'")]
    DuplicateCode(&'static str),
    #[error("indicator '{0}' has an empty description")]
    EmptyDescription(&'static str),
}

static CATALOG: [Indicator; 13] = [
    Indicator::new(
        "HDI",
        "Índice de Desenvolvimento Humano (IDH) que mede o desenvolvimento humano com base em saúde, educação e padrão de vida.",
    ),
    Indicator::new(
        "DBS",
        "Índice de Facilidade de Fazer Negócios que avalia a facilidade com que as empresas podem operar em um país.",
    ),
    Indicator::new(
        "GCI",
        "Índice de Competitividade Global que mede a capacidade de um país fornecer um ambiente sustentável para a prosperidade econômica.",
    ),
    Indicator::new(
        "GDP",
        "Produto Interno Bruto (PIB) que mede o valor de mercado de todos os bens e serviços finais produzidos em um país.",
    ),
    Indicator::new(
        "Tax/GDP",
        "Taxa de Impostos sobre o PIB que indica a proporção do PIB de um país que é arrecadada como imposto pelo governo.",
    ),
    Indicator::new(
        "GII",
        "Índice de Inovação Global que avalia a capacidade de um país em incentivar e facilitar a inovação.",
    ),
    Indicator::new(
        "RND",
        "Gastos em Pesquisa e Desenvolvimento como proporção do PIB, um indicador chave para inovação e desenvolvimento tecnológico.",
    ),
    Indicator::new(
        "EDS",
        "Medidas educacionais como taxa de alfabetização, média de anos de escolaridade, qualidade do sistema educacional, etc.",
    ),
    Indicator::new(
        "GE",
        "Métricas de igualdade de gênero em diferentes aspectos sociais e econômicos.",
    ),
    Indicator::new(
        "CPI",
        "Índice de Percepção de Corrupção que avalia o nível de corrupção percebida no setor público de um país.",
    ),
    Indicator::new(
        "GINI",
        "Coeficiente de Gini que mede a desigualdade de renda dentro de um país.",
    ),
    Indicator::new(
        "WHS",
        "Índice de Felicidade Mundial que mede a felicidade percebida com base em vários fatores.",
    ),
    Indicator::new(
        "SPS",
        "Índice de Progresso Social que avalia o bem-estar social de um país com base em necessidades humanas básicas e inclusão.",
    ),
];

/// All entries in presentation order.
pub fn entries() -> &'static [Indicator] {
    &CATALOG
}

pub fn lookup(code: &str) -> Result<&'static Indicator, UnknownIndicator> {
    CATALOG
        .iter()
        .find(|i| i.code == code)
        .ok_or_else(|| UnknownIndicator(code.to_string()))
}

pub fn description_of(code: &str) -> Option<&'static str> {
    lookup(code).ok().map(Indicator::description)
}

/// Check that codes are unique and every description is non-empty.
pub fn validate() -> Result<(), CatalogError> {
    validate_entries(entries())
}

pub(crate) fn validate_entries(entries: &[Indicator]) -> Result<(), CatalogError> {
    let mut seen = BTreeSet::new();
    for e in entries {
        if !seen.insert(e.code) {
            return Err(CatalogError::DuplicateCode(e.code));
        }
        if e.description.trim().is_empty() {
            return Err(CatalogError::EmptyDescription(e.code));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_is_valid() {
        assert_eq!(entries().len(), 13);
        assert_eq!(validate(), Ok(()));
    }

    #[test]
    fn duplicates_and_blank_descriptions_are_rejected() {
        let dup = [Indicator::new("A", "x"), Indicator::new("A", "y")];
        assert_eq!(validate_entries(&dup), Err(CatalogError::DuplicateCode("A")));
        let blank = [Indicator::new("B", "  ")];
        assert_eq!(
            validate_entries(&blank),
            Err(CatalogError::EmptyDescription("B"))
        );
    }
}
