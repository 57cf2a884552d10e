// Keycase CLI
// Rewrites the keys of a JSON document into another naming convention

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};

use keycase_core::config::parse_convention;
use keycase_core::{Convention, Direction, KeyTransform, TransformSettings, Value};

/// Rewrite JSON keys between snake_case, CamelCase, camelCase and dash-case
#[derive(Parser, Debug)]
#[command(name = "keycase")]
#[command(version)]
#[command(about = "Rewrite JSON keys between naming conventions", long_about = None)]
struct Args {
    /// JSON file to read (stdin when omitted)
    #[arg(value_name = "INPUT")]
    input: Option<PathBuf>,

    /// Target convention: unaltered, underscore, camel, camel_lower, dash
    #[arg(short, long, value_name = "CONVENTION")]
    to: Option<String>,

    /// Take the convention from the settings file for this direction
    #[arg(short, long, value_enum, default_value_t = DirectionArg::Serialize)]
    direction: DirectionArg,

    /// TOML settings file
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Convert these identifiers instead of a document (can be used multiple times)
    #[arg(short, long, value_name = "IDENTIFIER")]
    key: Vec<String>,

    /// Print compact JSON instead of pretty-printed
    #[arg(long)]
    compact: bool,

    /// Print cache statistics to stderr when done
    #[arg(long)]
    stats: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
enum DirectionArg {
    Serialize,
    Deserialize,
}

impl From<DirectionArg> for Direction {
    fn from(arg: DirectionArg) -> Self {
        match arg {
            DirectionArg::Serialize => Direction::Serialize,
            DirectionArg::Deserialize => Direction::Deserialize,
        }
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}

/// Explicit --to wins; otherwise the settings file decides per direction
fn resolve_convention(args: &Args) -> Result<Convention> {
    if let Some(name) = &args.to {
        return Ok(parse_convention(name)?);
    }

    let settings = match &args.config {
        Some(path) => TransformSettings::from_file(path)
            .with_context(|| format!("failed to load settings from {}", path.display()))?,
        None => TransformSettings::load_default().context("failed to load default settings")?,
    };
    Ok(settings.convention_for(args.direction.into()))
}

fn read_input(path: Option<&PathBuf>) -> Result<serde_json::Value> {
    let value = match path {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open {}", path.display()))?;
            serde_json::from_reader(BufReader::new(file))
                .with_context(|| format!("invalid JSON in {}", path.display()))?
        }
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            if buf.trim().is_empty() {
                bail!("no input on stdin");
            }
            serde_json::from_str(&buf).context("invalid JSON on stdin")?
        }
    };
    Ok(value)
}

fn run(args: Args) -> Result<()> {
    let convention = resolve_convention(&args)?;
    log::debug!("using convention {convention}");

    let transform = KeyTransform::new();
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    if !args.key.is_empty() {
        for identifier in &args.key {
            writeln!(out, "{}", transform.convert_identifier(identifier, convention))?;
        }
    } else {
        let input = read_input(args.input.as_ref())?;
        let output = serde_json::Value::from(transform.apply_convention(Value::from(input), convention));
        if args.compact {
            serde_json::to_writer(&mut out, &output)?;
        } else {
            serde_json::to_writer_pretty(&mut out, &output)?;
        }
        writeln!(out)?;
    }
    out.flush()?;

    if args.stats {
        eprintln!("{}", serde_json::to_string(&transform.cache().stats())?);
    }
    Ok(())
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    if let Err(e) = run(args) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
