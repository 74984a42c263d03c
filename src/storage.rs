use crate::models::{COUNTRY_COLUMN, Record, RecordTable, Value};
use csv::ReaderBuilder;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File the dashboard reads from the working directory.
pub const DATA_FILE_NAME: &str = "trabalho.csv";

/// Fatal dataset failures. Either one halts the session.
#[derive(Debug, Error)]
pub enum DatasetError {
    /// The file does not exist.
    #[error("Arquivo '{}' não encontrado no diretório: {}", .file, .dir.display())]
    NotFound { file: String, dir: PathBuf },
    /// The file exists but is not a usable table.
    #[error("Erro ao carregar o arquivo CSV: {0}")]
    Parse(#[from] ParseError),
}

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("{0}")]
    Csv(#[from] csv::Error),
    #[error("coluna 'Country' ausente no cabeçalho")]
    MissingCountryColumn,
}

/// Load `trabalho.csv` from the current working directory.
pub fn load_default() -> Result<RecordTable, DatasetError> {
    let dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    load_csv(dir.join(DATA_FILE_NAME))
}

/// Parse a CSV file with a header row into a [`RecordTable`].
pub fn load_csv<P: AsRef<Path>>(path: P) -> Result<RecordTable, DatasetError> {
    let path = path.as_ref();
    if !path.exists() {
        let file = path
            .file_name()
            .map(|f| f.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.to_string_lossy().into_owned());
        let dir = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .or_else(|| std::env::current_dir().ok())
            .unwrap_or_else(|| PathBuf::from("."));
        return Err(DatasetError::NotFound { file, dir });
    }

    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(ParseError::from)?;

    let headers: Vec<String> = rdr
        .headers()
        .map_err(ParseError::from)?
        .iter()
        .map(str::to_string)
        .collect();
    let country_idx = headers
        .iter()
        .position(|h| h == COUNTRY_COLUMN)
        .ok_or(ParseError::MissingCountryColumn)?;

    let mut rows = Vec::new();
    for rec in rdr.records() {
        let rec = rec.map_err(ParseError::from)?;
        // A blank country still counts as a row; it is just never selectable.
        let country = rec.get(country_idx).unwrap_or("").to_string();
        let values = rec
            .iter()
            .enumerate()
            .filter(|(j, _)| *j != country_idx)
            .map(|(_, cell)| Value::parse(cell))
            .collect();
        rows.push(Record { country, values });
    }

    log::debug!("loaded {} rows from {}", rows.len(), path.display());
    // The reader rejects ragged rows, so widths always line up with the header.
    RecordTable::new(headers, rows).ok_or_else(|| ParseError::MissingCountryColumn.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn loads_rows_and_columns() {
        let dir = tempdir().unwrap();
        let p = dir.path().join("t.csv");
        fs::write(&p, "Country,GDP,HDI\nA,100,0.8\nB,200,\n").unwrap();
        let t = load_csv(&p).unwrap();
        assert_eq!(t.len(), 2);
        assert_eq!(t.indicator_columns(), ["GDP".to_string(), "HDI".to_string()]);
        assert_eq!(t.rows()[1].values[1], Value::Missing);
    }

    #[test]
    fn ragged_rows_are_parse_errors() {
        let dir = tempdir().unwrap();
        let p = dir.path().join("bad.csv");
        fs::write(&p, "Country,GDP\nA,1,2\n").unwrap();
        let err = load_csv(&p).unwrap_err();
        assert!(matches!(err, DatasetError::Parse(ParseError::Csv(_))));
        assert!(err.to_string().starts_with("Erro ao carregar o arquivo CSV"));
    }
}
