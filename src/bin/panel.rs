use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use prosperity_panel::config::{ChartFormat, PanelConfig};
use prosperity_panel::dashboard::{self, Block};
use prosperity_panel::viz::Chart;
use prosperity_panel::{Selection, catalog, display, session, stats, viz};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "panel",
    version,
    about = "Render the country-indicator dashboard headlessly: overview or per-country pie charts"
)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Evaluate one selection and write its charts (and optionally print stats / JSON).
    Show(ShowArgs),
    /// List indicator codes and their descriptions.
    Catalog,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum OutFormat {
    Png,
    Svg,
}

#[derive(Args, Debug)]
struct ShowArgs {
    /// CSV file with a `Country` column (default: ./trabalho.csv)
    #[arg(long)]
    data: Option<PathBuf>,
    /// Indicator codes separated by comma or semicolon (e.g., GDP,HDI)
    #[arg(short, long, default_value = "")]
    indicators: String,
    /// Countries separated by comma or semicolon, as written in the `Country` column
    #[arg(short, long, default_value = "")]
    countries: String,
    /// Press the overview button (only meaningful without indicators).
    #[arg(long, default_value_t = false)]
    overview: bool,
    /// Directory to write charts into. Without it, charts are only listed.
    #[arg(long)]
    out_dir: Option<PathBuf>,
    /// Chart file format.
    #[arg(long, value_enum, default_value_t = OutFormat::Png)]
    format: OutFormat,
    /// Width of each chart (default 1000).
    #[arg(long, default_value_t = 1000)]
    width: u32,
    /// Height of each chart (default 600).
    #[arg(long, default_value_t = 600)]
    height: u32,
    /// Locale for tick and percent labels (en, de, fr, es, it, pt, nl).
    #[arg(long, default_value = "en")]
    locale: String,
    /// Print the composed page as JSON to stdout.
    #[arg(long, default_value_t = false)]
    json: bool,
    /// Print per-indicator statistics over the selected countries (or all rows).
    #[arg(long, default_value_t = false)]
    stats: bool,
}

fn fmt_opt(v: Option<f64>) -> String {
    match v {
        Some(x) if x.is_finite() => {
            // Format up to 4 decimals, then trim trailing zeros and trailing dot.
            let s = format!("{:.4}", x);
            s.trim_end_matches('0').trim_end_matches('.').to_string()
        }
        _ => "NA".to_string(),
    }
}

fn parse_list(s: &str) -> Vec<String> {
    s.split([',', ';'])
        .map(|x| x.trim().to_string())
        .filter(|x| !x.is_empty())
        .collect()
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    match cli.cmd {
        Command::Show(args) => cmd_show(args),
        Command::Catalog => {
            catalog::validate()?;
            for ind in catalog::entries() {
                println!("{:<8} {}", ind.code(), ind.description());
            }
            Ok(())
        }
    }
}

fn cmd_show(args: ShowArgs) -> Result<()> {
    let defaults = PanelConfig::default();
    let config = PanelConfig {
        data_file: args.data.unwrap_or(defaults.data_file),
        width: args.width,
        height: args.height,
        locale: args.locale,
        format: match args.format {
            OutFormat::Png => ChartFormat::Png,
            OutFormat::Svg => ChartFormat::Svg,
        },
    };

    let table = session::open(&config.data_file).inspect_err(|e| log::error!("{e}"))?;

    let selection = Selection::new()
        .with_indicator_codes(parse_list(&args.indicators))?
        .with_countries(parse_list(&args.countries))
        .with_overview(args.overview);
    let plan = display::select(&selection, &table);
    let page = dashboard::compose(&plan, &table);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&page)?);
    } else {
        for block in &page.blocks {
            match block {
                Block::Subheader(s) => println!("== {s} =="),
                Block::Heading(h) => println!("### {h}"),
                Block::Button(label) if !args.overview => {
                    println!("[{label}] (use --overview)")
                }
                Block::Button(_) => {}
                Block::Chart(chart) => println!("chart: {}", chart.title()),
                Block::Warning(w) => eprintln!("warning: {w}"),
            }
        }
    }

    if let Some(dir) = args.out_dir.as_ref() {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("creating output directory {}", dir.display()))?;
        for (i, chart) in page.charts().enumerate() {
            let slug = match chart {
                Chart::Line(_) => "overview",
                Chart::Pie(p) => p.indicator.as_str(),
            };
            let path = dir.join(config.chart_file_name(i, slug));
            viz::save_chart(chart, &path, config.width, config.height, &config.locale)?;
            eprintln!("Wrote chart to {}", path.display());
        }
    }

    if args.stats {
        let scope = if selection.countries().is_empty() {
            table.clone()
        } else {
            table.filter_countries(selection.countries())
        };
        for s in stats::indicator_summary(&scope) {
            println!(
                "{}  count={} missing={}  min={} max={} mean={} median={}",
                s.indicator,
                s.count,
                s.missing,
                fmt_opt(s.min),
                fmt_opt(s.max),
                fmt_opt(s.mean),
                fmt_opt(s.median)
            );
        }
    }

    Ok(())
}
