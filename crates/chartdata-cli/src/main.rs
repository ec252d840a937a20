use chartdata_core::{BarType, ChartType, PlainTableFormatter, TransformConfig, Transformer};
use serde::Serialize;
use std::io::Read;
use tracing_subscriber::EnvFilter;

#[derive(Debug)]
enum CliError {
    Usage(&'static str),
    Io(std::io::Error),
    Transform(chartdata_core::Error),
    Json(serde_json::Error),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{msg}"),
            CliError::Io(err) => write!(f, "I/O error: {err}"),
            CliError::Transform(err) => write!(f, "{err}"),
            CliError::Json(err) => write!(f, "JSON error: {err}"),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<chartdata_core::Error> for CliError {
    fn from(value: chartdata_core::Error) -> Self {
        Self::Transform(value)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

#[derive(Debug, Clone, Copy, Default)]
enum Command {
    #[default]
    Transform,
    Table,
    Types,
}

#[derive(Debug, Default)]
struct Args {
    command: Command,
    input: Option<String>,
    chart_type: Option<ChartType>,
    bar_type: Option<BarType>,
    config: Option<String>,
    pretty: bool,
}

fn usage() -> &'static str {
    "chartdata-cli\n\
\n\
USAGE:\n\
  chartdata-cli [transform] --type <chart> [--bar-type stacked|grouped] [--config <path>] [--pretty] [<path>|-]\n\
  chartdata-cli table --type <chart> [--bar-type stacked|grouped] [--config <path>] [--pretty] [<path>|-]\n\
  chartdata-cli types\n\
\n\
NOTES:\n\
  - If <path> is omitted or '-', input is read from stdin.\n\
  - transform prints the canonical {properties, data} document.\n\
  - table transforms first, then prints the row-oriented table document.\n\
  - --config merges a JSON object of overrides onto the built-in transform config.\n\
  - Set CHARTDATA_LOG (e.g. CHARTDATA_LOG=debug) to log to stderr.\n\
"
}

fn parse_args(argv: &[String]) -> Result<Args, CliError> {
    let mut args = Args::default();

    let mut it = argv.iter().skip(1).peekable();
    while let Some(a) = it.next() {
        match a.as_str() {
            "--help" | "-h" => return Err(CliError::Usage(usage())),
            "transform" => args.command = Command::Transform,
            "table" => args.command = Command::Table,
            "types" => args.command = Command::Types,
            "--pretty" => args.pretty = true,
            "--type" => {
                let Some(tag) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.chart_type = Some(tag.parse::<ChartType>()?);
            }
            "--bar-type" => {
                let Some(tag) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.bar_type = Some(tag.parse::<BarType>()?);
            }
            "--config" => {
                let Some(path) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.config = Some(path.clone());
            }
            "--" => {
                if let Some(rest) = it.next() {
                    if args.input.is_some() {
                        return Err(CliError::Usage(usage()));
                    }
                    args.input = Some(rest.clone());
                }
                if it.next().is_some() {
                    return Err(CliError::Usage(usage()));
                }
            }
            "-" => {
                if args.input.is_some() {
                    return Err(CliError::Usage(usage()));
                }
                args.input = Some("-".to_string());
            }
            other if other.starts_with('-') => return Err(CliError::Usage(usage())),
            path => {
                if args.input.is_some() {
                    return Err(CliError::Usage(usage()));
                }
                args.input = Some(path.to_string());
            }
        }
    }

    Ok(args)
}

fn read_input(input: Option<&str>) -> Result<String, CliError> {
    match input {
        None | Some("-") => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
        Some(path) => Ok(std::fs::read_to_string(path)?),
    }
}

fn write_json(value: &impl Serialize, pretty: bool) -> Result<(), CliError> {
    if pretty {
        serde_json::to_writer_pretty(std::io::stdout().lock(), value)?;
    } else {
        serde_json::to_writer(std::io::stdout().lock(), value)?;
    }
    println!();
    Ok(())
}

fn build_transformer(config: Option<&str>) -> Result<Transformer, CliError> {
    let transformer = Transformer::new();
    let Some(path) = config else {
        return Ok(transformer);
    };
    let text = std::fs::read_to_string(path)?;
    let overrides = TransformConfig::from_json_str(&text)?;
    tracing::debug!(path, "loaded transform config overrides");
    Ok(transformer.with_config(overrides))
}

fn run(args: Args) -> Result<(), CliError> {
    if let Command::Types = args.command {
        for chart_type in ChartType::ALL {
            println!("{chart_type}");
        }
        return Ok(());
    }

    let Some(chart_type) = args.chart_type else {
        return Err(CliError::Usage(usage()));
    };
    let transformer = build_transformer(args.config.as_deref())?;
    let text = read_input(args.input.as_deref())?;
    let doc = transformer.transform_str(&text, chart_type, args.bar_type)?;

    match args.command {
        Command::Table => {
            let table = transformer.transform_table_data(&doc, chart_type, &PlainTableFormatter);
            write_json(&table, args.pretty)
        }
        _ => write_json(&doc, args.pretty),
    }
}

fn init_tracing() {
    let filter =
        EnvFilter::try_from_env("CHARTDATA_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_tracing();

    let args = match parse_args(&std::env::args().collect::<Vec<_>>()) {
        Ok(v) => v,
        Err(CliError::Usage(msg)) => {
            eprintln!("{msg}");
            std::process::exit(2);
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    if let Err(err) = run(args) {
        match err {
            CliError::Usage(msg) => {
                eprintln!("{msg}");
                std::process::exit(2);
            }
            err => {
                eprintln!("{err}");
                std::process::exit(1);
            }
        }
    }
}
