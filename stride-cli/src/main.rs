use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use dotenvy::dotenv;
use log::{LevelFilter, debug, info};
use std::fmt;
use std::path::{Path, PathBuf};

use stride::logging::{init_logger, parse_level};
use stride::{InfoMessage, Package, process_packages};

const SAMPLE_PACKAGES: &[(&str, &[f64])] = &[
    ("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]),
    ("RUN", &[15000.0, 1.0, 75.0]),
    ("WLK", &[9000.0, 1.0, 75.0, 180.0]),
];

#[derive(Parser, Debug)]
#[command(version, about = "Stride - workout metrics calculator", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Option<Commands>,

    #[arg(short, long, global = true, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    #[arg(long, global = true, env = "STRIDE_LOG", default_value = "warn", value_parser = parse_log_level)]
    log_level: LevelFilter,

    /// Skip packages that fail instead of stopping at the first one
    #[arg(short, long, global = true)]
    keep_going: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the built-in sample packages
    Demo,
    /// Summarise a single package, e.g. `calc RUN 15000 1 75`
    Calc {
        code: String,
        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<f64>,
    },
    /// Summarise every package in a file (.json, or one package per line)
    File { path: PathBuf },
}

fn parse_log_level(s: &str) -> std::result::Result<LevelFilter, String> {
    parse_level(s).ok_or_else(|| format!("unknown log level: {}", s))
}

fn sample_packages() -> Vec<Package> {
    SAMPLE_PACKAGES
        .iter()
        .map(|(code, data)| Package::new(*code, *data))
        .collect()
}

fn load_packages(path: &Path) -> Result<Vec<Package>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    let packages = if is_json {
        Package::from_json(&text)
    } else {
        Package::parse_lines(&text)
    }
    .with_context(|| format!("failed to parse {}", path.display()))?;
    info!("loaded {} packages from {}", packages.len(), path.display());
    Ok(packages)
}

fn render(message: &InfoMessage, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(message.get_message()),
        OutputFormat::Json => Ok(serde_json::to_string(message)?),
    }
}

/// Summaries for `packages`, in order. Without `keep_going` the first bad
/// package aborts the run.
fn summarise(packages: &[Package], format: OutputFormat, keep_going: bool) -> Result<Vec<String>> {
    if keep_going {
        return process_packages(packages)
            .into_iter()
            .filter_map(|r| r.ok())
            .map(|m| render(&m, format))
            .collect();
    }

    let mut lines = Vec::with_capacity(packages.len());
    for package in packages {
        let training = package
            .read()
            .with_context(|| format!("failed to read package {}", package.workout_type))?;
        lines.push(render(&training.show_training_info(), format)?);
    }
    Ok(lines)
}

fn main() -> Result<()> {
    dotenv().ok();
    let args = Args::parse();
    init_logger(args.log_level);
    debug!("parsed args: {:?}", args);

    let packages = match args.command {
        None | Some(Commands::Demo) => sample_packages(),
        Some(Commands::Calc { code, values }) => vec![Package::new(code, values)],
        Some(Commands::File { path }) => load_packages(&path)?,
    };

    for line in summarise(&packages, args.format, args.keep_going)? {
        println!("{}", line);
    }
    Ok(())
}
