use prosperity_panel::catalog;
use prosperity_panel::display::PieRequest;
use prosperity_panel::models::Record;
use prosperity_panel::viz::{self, Chart};
use prosperity_panel::{RecordTable, Value};
use std::fs;

fn sample_table() -> RecordTable {
    let rows = [
        ("Brasil", 1.9, Some(0.75)),
        ("Chile", 0.3, None),
        ("Argentina", 0.6, Some(0.84)),
        ("Uruguai", 0.07, Some(0.81)),
    ];
    RecordTable::new(
        vec!["Country".into(), "GDP".into(), "HDI".into()],
        rows.iter()
            .map(|(c, gdp, hdi)| Record {
                country: c.to_string(),
                values: vec![
                    Value::Number(*gdp),
                    hdi.map(Value::Number).unwrap_or(Value::Missing),
                ],
            })
            .collect(),
    )
    .unwrap()
}

fn sample_pie() -> Chart {
    let request = PieRequest {
        indicator: catalog::lookup("GDP").unwrap(),
        subset: sample_table(),
    };
    Chart::Pie(viz::pie_chart(&request).unwrap())
}

fn write_and_check(chart: &Chart, name: &str) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(name);
    viz::save_chart(chart, &path, 800, 480, "en").unwrap();
    let meta = fs::metadata(&path).expect("file created");
    assert!(meta.len() > 0, "{name} has content");
}

#[test]
fn overview_renders_svg_and_png() {
    let chart = Chart::Line(viz::overview_chart(&sample_table()));
    write_and_check(&chart, "overview.svg");
    write_and_check(&chart, "overview.png");
}

#[test]
fn pie_renders_svg_and_png() {
    let chart = sample_pie();
    write_and_check(&chart, "pie.svg");
    write_and_check(&chart, "pie.png");
}

#[test]
fn svg_carries_title_and_country_labels() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pie.svg");
    viz::save_chart(&sample_pie(), &path, 1000, 600, "pt").unwrap();
    let svg = fs::read_to_string(&path).unwrap();
    assert!(svg.contains("Brasil"));
    assert!(svg.contains("Produto Interno Bruto"));
}

#[test]
fn rgb_buffer_matches_canvas() {
    let buf = viz::render_rgb(&sample_pie(), 320, 200, "de").unwrap();
    assert_eq!(buf.len(), 320 * 200 * 3);
    // background is painted, so the buffer is not left zeroed
    assert!(buf.iter().any(|b| *b != 0));
    assert!(viz::render_rgb(&sample_pie(), 0, 200, "en").is_err());
}

#[test]
fn narrow_slice_keeps_its_percent_label() {
    let table = RecordTable::new(
        vec!["Country".into(), "GDP".into()],
        vec![
            Record {
                country: "Grande".into(),
                values: vec![Value::Number(990.0)],
            },
            Record {
                country: "Pequeno".into(),
                values: vec![Value::Number(10.0)],
            },
        ],
    )
    .unwrap();
    let request = PieRequest {
        indicator: catalog::lookup("GDP").unwrap(),
        subset: table,
    };
    let chart = Chart::Pie(viz::pie_chart(&request).unwrap());

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("narrow.svg");
    viz::save_chart(&chart, &path, 1000, 600, "en").unwrap();
    let svg = fs::read_to_string(&path).unwrap();
    assert!(svg.contains("99.0%"));
    assert!(svg.contains("1.0%"));
}
