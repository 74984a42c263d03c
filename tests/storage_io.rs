use prosperity_panel::Value;
use prosperity_panel::storage::{self, DatasetError, ParseError};
use std::fs;

#[test]
fn load_csv_reads_every_row_and_keeps_country_order() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("trabalho.csv");
    fs::write(
        &path,
        "Country,GDP,HDI,Notes\nBrasil,1.9,0.75,x\nChile,0.3,,y\nArgentina,0.6,0.84,\n",
    )
    .unwrap();

    let table = storage::load_csv(&path).unwrap();
    assert_eq!(table.len(), 3);
    assert_eq!(table.countries(), vec!["Brasil", "Chile", "Argentina"]);
    assert!(table.has_column("Notes"));

    let hdi = table.column("HDI").unwrap();
    assert_eq!(hdi[0], ("Brasil", &Value::Number(0.75)));
    assert_eq!(hdi[1], ("Chile", &Value::Missing));
}

#[test]
fn missing_file_names_file_and_directory() {
    let dir = tempfile::tempdir().unwrap();
    let err = storage::load_csv(dir.path().join("trabalho.csv")).unwrap_err();
    assert!(matches!(err, DatasetError::NotFound { .. }));
    let msg = err.to_string();
    assert!(msg.contains("'trabalho.csv'"), "{msg}");
    assert!(msg.contains(&dir.path().display().to_string()), "{msg}");
}

#[test]
fn table_without_country_column_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data.csv");
    fs::write(&path, "Pais,GDP\nBrasil,1\n").unwrap();
    let err = storage::load_csv(&path).unwrap_err();
    assert!(matches!(
        err,
        DatasetError::Parse(ParseError::MissingCountryColumn)
    ));
    assert!(err.to_string().starts_with("Erro ao carregar o arquivo CSV"));
}

#[test]
fn header_only_file_loads_as_empty_table() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data.csv");
    fs::write(&path, "Country,GDP\n").unwrap();
    let table = storage::load_csv(&path).unwrap();
    assert!(table.is_empty());
    assert!(table.countries().is_empty());
}

#[test]
fn blank_country_cell_still_loads_the_row() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("trabalho.csv");
    fs::write(&path, "Country,GDP\nA,100\n,200\nB,300\n").unwrap();

    let table = storage::load_csv(&path).unwrap();
    assert_eq!(table.len(), 3);
    assert_eq!(table.rows()[1].country, "");
    assert_eq!(table.rows()[1].values[0], Value::Number(200.0));
    assert_eq!(table.countries(), vec!["A", "B"]);
}
