// holf command-line binary
// Applies one list operation with a named builtin callback to JSON input

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use holf::config::{HolfConfig, OutputFormat};
use holf::runtime::json::{parse_value, value_to_json};
use holf::runtime::{ExpandPolicy, StandardLibrary, Value};
use itertools::Itertools;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "holf")]
#[command(about = "Apply higher order list functions to JSON sequences")]
#[command(version)]
struct Cli {
    /// Path to configuration file (defaults to holf.toml or config/holf.toml)
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Output format, overrides the configuration file
    #[arg(short, long, global = true, value_enum)]
    output: Option<OutputFormat>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Map each element with FUNCTION
    Map {
        function: String,
        /// JSON array, `-` for stdin or `@FILE`
        input: String,
    },
    /// Aggregate the elements, starting from --init
    Fold {
        function: String,
        /// Initial accumulator (JSON)
        #[arg(long)]
        init: String,
        input: String,
    },
    /// Aggregate the elements, starting from the first one
    Reduce { function: String, input: String },
    /// Split the elements into buckets by the index FUNCTION returns
    Partition { function: String, input: String },
    /// Emit every intermediate accumulator, starting from --init
    Scan {
        function: String,
        #[arg(long)]
        init: String,
        input: String,
    },
    /// Map each element to an array and concatenate the arrays
    Collect { function: String, input: String },
    /// Generate --init, f(init), f(f(init)), ...
    Expand {
        function: String,
        /// First element (JSON)
        #[arg(long)]
        init: String,
        /// Number of elements to generate
        #[arg(long)]
        limit: Option<usize>,
        /// End the sequence when FUNCTION returns null
        #[arg(long, conflicts_with = "no_stop_on_nil")]
        stop_on_nil: bool,
        /// Treat null like any other element (the default unless configured)
        #[arg(long)]
        no_stop_on_nil: bool,
    },
    /// List the builtin functions
    Functions,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut config = load_config(cli.config.as_deref())?;
    if let Some(format) = cli.output {
        config.output.format = format;
    }

    let output = run(cli.command, &mut config)?;
    println!("{}", output);
    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_directive = if verbose { "holf=debug" } else { "holf=info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive)),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}

fn load_config(explicit: Option<&Path>) -> anyhow::Result<HolfConfig> {
    if let Some(path) = explicit {
        info!("Using configuration: {}", path.display());
        return Ok(HolfConfig::load(path)?);
    }

    let cwd = std::env::current_dir().context("Failed to determine current directory")?;
    let (path, config) = HolfConfig::discover(&cwd)?;
    match path {
        Some(path) => info!("Using configuration: {}", path.display()),
        None => debug!("No configuration file found, using defaults"),
    }
    Ok(config)
}

/// Runs one command and renders its result.
fn run(command: Command, config: &mut HolfConfig) -> anyhow::Result<String> {
    let (operation, function, args) = match command {
        Command::Functions => {
            let env = StandardLibrary::create_environment(config.expand_policy());
            return Ok(env.symbol_names().join("\n"));
        }
        Command::Map { function, input } => ("map", function, vec![read_input(&input)?]),
        Command::Reduce { function, input } => ("reduce", function, vec![read_input(&input)?]),
        Command::Partition { function, input } => {
            ("partition", function, vec![read_input(&input)?])
        }
        Command::Collect { function, input } => ("collect", function, vec![read_input(&input)?]),
        Command::Fold {
            function,
            init,
            input,
        } => ("fold", function, vec![parse_json(&init)?, read_input(&input)?]),
        Command::Scan {
            function,
            init,
            input,
        } => ("scan", function, vec![parse_json(&init)?, read_input(&input)?]),
        Command::Expand {
            function,
            init,
            limit,
            stop_on_nil,
            no_stop_on_nil,
        } => {
            if stop_on_nil {
                config.expand.policy = ExpandPolicy::StopOnNil;
            } else if no_stop_on_nil {
                config.expand.policy = ExpandPolicy::Infinite;
            }
            let limit = limit.unwrap_or(config.expand.limit);
            let limit = i64::try_from(limit).context("--limit is too large")?;
            ("expand", function, vec![parse_json(&init)?, Value::Integer(limit)])
        }
    };

    let env = StandardLibrary::create_environment(config.expand_policy());
    let Some(callback) = env.lookup(&function) else {
        bail!(
            "Unknown function '{}'. Run `holf functions` for the list of builtins",
            function
        );
    };

    let mut call_args = vec![callback];
    call_args.extend(args);
    let result = StandardLibrary::apply(&env, operation, call_args)
        .with_context(|| format!("{} with '{}' failed", operation, function))?;

    render(&result, config.output.format)
}

/// Reads a JSON input argument: `-` is stdin, `@path` a file, anything else
/// the JSON text itself.
fn read_input(source: &str) -> anyhow::Result<Value> {
    let text = if source == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read input from stdin")?;
        buffer
    } else if let Some(path) = source.strip_prefix('@') {
        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file {}", path))?
    } else {
        source.to_string()
    };
    parse_json(&text)
}

fn parse_json(text: &str) -> anyhow::Result<Value> {
    Ok(parse_value(text.trim())?)
}

fn render(value: &Value, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&value_to_json(value)?)?),
        OutputFormat::Plain => Ok(match value {
            Value::Vector(items) => items.iter().map(render_plain_item).join(", "),
            other => render_plain_item(other),
        }),
    }
}

fn render_plain_item(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn run_args(args: &[&str]) -> anyhow::Result<String> {
        let cli = Cli::try_parse_from(args)?;
        let mut config = HolfConfig::default();
        if let Some(format) = cli.output {
            config.output.format = format;
        }
        run(cli.command, &mut config)
    }

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_partition_plain_output() {
        let output = run_args(&["holf", "partition", "parity", "[1,2,3,4,5]"]).unwrap();
        assert_eq!(output, "[2 4], [1 3 5]");
    }

    #[test]
    fn test_fold_json_output() {
        let output =
            run_args(&["holf", "-o", "json", "fold", "concat", "--init", "\"\"", "[1,2,3]"])
                .unwrap();
        assert_eq!(output, "\"123\"");
    }

    #[test]
    fn test_expand_uses_limit() {
        let output =
            run_args(&["holf", "expand", "double", "--init", "1", "--limit", "5"]).unwrap();
        assert_eq!(output, "1, 2, 4, 8, 16");
    }

    #[test]
    fn test_expand_stops_on_nil_only_when_asked() {
        let args = ["holf", "expand", "identity", "--init", "null", "--limit", "3"];
        assert_eq!(run_args(&args).unwrap(), "nil, nil, nil");

        let mut stopping = args.to_vec();
        stopping.push("--stop-on-nil");
        assert_eq!(run_args(&stopping).unwrap(), "nil");
    }

    #[test]
    fn test_partition_with_huge_index_fails_cleanly() {
        let err = run_args(&["holf", "partition", "identity", "[9223372036854775807]"])
            .unwrap_err();
        assert!(format!("{:#}", err).contains("needs more buckets than can be allocated"));
    }

    #[test]
    fn test_unknown_function_is_reported() {
        let err = run_args(&["holf", "map", "nope", "[1]"]).unwrap_err();
        assert!(err.to_string().contains("Unknown function 'nope'"));
    }

    #[test]
    fn test_reduce_empty_input_fails() {
        let err = run_args(&["holf", "reduce", "max", "[]"]).unwrap_err();
        assert!(format!("{:#}", err).contains("Cannot reduce an empty list"));
    }
}
