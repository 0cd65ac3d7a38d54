mod inputs;
mod logging;
mod output;
mod settings;

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::time::Instant;

use clap::{Args, Parser, Subcommand};
use datavary_engine::{DataSpec, TestGroup, VariationError, VariationOptions};
use datavary_registry::RegistryError;
use inputs::{load_data_spec, load_registry};
use logging::init_logging;
use output::{write_csv, write_json};
use settings::{OutputFormat, load_settings};
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("registry error: {0}")]
    Registry(#[from] RegistryError),
    #[error("variation error: {0}")]
    Variation(#[from] VariationError),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("toml error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("logging error: {0}")]
    Logging(String),
}

#[derive(Parser, Debug)]
#[command(name = "datavary", version, about = "Deterministic test-data variations")]
struct Cli {
    /// Settings file (defaults to ./datavary.toml when present).
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Build the variations for a field specification.
    Generate(GenerateArgs),
    /// List registered types and their pool sizes.
    Types(TypesArgs),
    /// Print the JSON Schema of field specification files.
    Schema,
}

#[derive(Args, Debug)]
struct GenerateArgs {
    /// Field specification file (.json or .toml).
    #[arg(long)]
    fields: PathBuf,
    /// Registry file layered over the built-in types.
    #[arg(long)]
    registry: Option<PathBuf>,
    /// Restrict variations to these fields (default: all declared fields).
    #[arg(long, value_delimiter = ',')]
    only: Vec<String>,
    /// Seed for the randomized built-in pools.
    #[arg(long)]
    seed: Option<u64>,
    /// Output format.
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,
    /// Output path (stdout when omitted).
    #[arg(long)]
    out: Option<PathBuf>,
    /// Fail when the invalid pass has rows without invalid values.
    #[arg(long, default_value_t = false)]
    strict: bool,
    /// Append JSON logs to this file.
    #[arg(long)]
    log_file: Option<PathBuf>,
    /// Title recorded for the generated test.
    #[arg(long, default_value = "variations")]
    title: String,
}

#[derive(Args, Debug)]
struct TypesArgs {
    #[arg(long)]
    registry: Option<PathBuf>,
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<(), CliError> {
    let cli = Cli::parse();

    match cli.command {
        Command::Generate(args) => run_generate(cli.config, args),
        Command::Types(args) => run_types(cli.config, args),
        Command::Schema => run_schema(),
    }
}

fn run_generate(config: Option<PathBuf>, args: GenerateArgs) -> Result<(), CliError> {
    let settings = load_settings(config.as_deref())?;
    init_logging(args.log_file.as_deref())?;

    let run_id = Uuid::new_v4().to_string();
    let started_at = chrono::Utc::now();
    let timer = Instant::now();
    tracing::info!(event = "run_started", run_id = %run_id, started_at = %started_at.to_rfc3339());

    let seed = args.seed.unwrap_or(settings.seed);
    let format = args.format.unwrap_or(settings.format);
    let strict = args.strict || settings.strict;
    let registry_path = args.registry.or(settings.registry);

    let registry = load_registry(seed, registry_path.as_deref())?;
    let spec = load_data_spec(&args.fields)?;
    if spec.is_empty() {
        return Err(CliError::InvalidConfig(
            "field specification declares no fields".to_string(),
        ));
    }

    let only = selected_fields(&spec, &args.only);
    let group =
        TestGroup::register(&registry, spec.clone())?.with_options(VariationOptions { strict });
    let plan = group.plan(&args.title, &only)?;
    let cases = plan.cases();

    let writer: Box<dyn Write> = match &args.out {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(io::stdout().lock()),
    };
    match format {
        OutputFormat::Json => write_json(writer, cases)?,
        OutputFormat::Csv => write_csv(writer, &only, cases)?,
    }

    tracing::info!(
        event = "run_finished",
        run_id = %run_id,
        seed,
        cases = cases.len(),
        duration_ms = timer.elapsed().as_millis() as u64
    );
    Ok(())
}

/// Requested fields in declaration order; every field when none are named.
fn selected_fields<'a>(spec: &'a DataSpec, only: &'a [String]) -> Vec<&'a str> {
    if only.is_empty() {
        spec.names().collect()
    } else {
        only.iter().map(String::as_str).collect()
    }
}

fn run_types(config: Option<PathBuf>, args: TypesArgs) -> Result<(), CliError> {
    let settings = load_settings(config.as_deref())?;
    let seed = args.seed.unwrap_or(settings.seed);
    let registry = load_registry(seed, args.registry.or(settings.registry).as_deref())?;

    let mut stdout = io::stdout().lock();
    for (name, entry) in registry.iter() {
        writeln!(
            stdout,
            "{name}\tvalid={}\tedge={}\tinvalid={}",
            entry.valid.len(),
            entry.edge.len(),
            entry.invalid.len()
        )?;
    }
    Ok(())
}

fn run_schema() -> Result<(), CliError> {
    let schema = schemars::schema_for!(DataSpec);
    println!("{}", serde_json::to_string_pretty(&schema)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use datavary_engine::GeneratorEntry;

    use super::*;

    fn spec() -> DataSpec {
        DataSpec::new()
            .field("postName", "title")
            .field("likeCount", "integer")
            .field("username", GeneratorEntry::new(["sample-username"]))
    }

    #[test]
    fn omitted_only_selects_every_declared_field() {
        let spec = spec();
        assert_eq!(
            selected_fields(&spec, &[]),
            vec!["postName", "likeCount", "username"]
        );
    }

    #[test]
    fn only_restricts_the_selection() {
        let spec = spec();
        let only = vec!["likeCount".to_string()];
        assert_eq!(selected_fields(&spec, &only), vec!["likeCount"]);
    }

    #[test]
    fn generate_args_split_only_on_commas() {
        let cli = Cli::try_parse_from([
            "datavary",
            "generate",
            "--fields",
            "spec.json",
            "--only",
            "postName,likeCount",
            "--format",
            "csv",
        ])
        .expect("parse args");
        match cli.command {
            Command::Generate(args) => {
                assert_eq!(args.only, vec!["postName", "likeCount"]);
                assert_eq!(args.format, Some(OutputFormat::Csv));
                assert!(!args.strict);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
