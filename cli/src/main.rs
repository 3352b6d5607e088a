use clap::{ArgAction, Parser, Subcommand};
use medimetrics::config::Config;
use medimetrics::conversion;
use medimetrics::form::{self, FormProcessor};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "medimetrics")]
#[command(about = "Pharmaceutical and laboratory unit conversions", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Config file (default: ./medimetrics.toml if present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a value between two units
    #[command(allow_negative_numbers = true)]
    Convert {
        /// Value to convert, or a quantity such as "100 %w/v"
        #[arg(allow_hyphen_values = true)]
        value: String,

        /// FROM and TO units, or only TO when the value carries its unit
        #[arg(num_args = 1..=2, required = true)]
        units: Vec<String>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the selectable units
    Units {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the known conversion factors
    Table {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Convert { value, units, json } => {
            run_convert(&value, &units, json, cli.config.as_deref())
        }
        Commands::Units { json } => list_units(json),
        Commands::Table { json } => list_table(json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Work out (value text, from unit, to unit) from the positional arguments
fn split_convert_args<'a>(
    value: &'a str,
    units: &'a [String],
) -> Result<(&'a str, &'a str, &'a str), Box<dyn std::error::Error>> {
    match units {
        [from, to] => Ok((value, from.as_str(), to.as_str())),
        [to] => {
            let (value_text, from) = form::split_quantity(value).ok_or_else(|| {
                format!(
                    "'{}' has no unit; expected \"<value> <unit>\" or both FROM and TO units",
                    value
                )
            })?;
            Ok((value_text, from, to.as_str()))
        }
        _ => Err("Expected FROM and TO units".into()),
    }
}

fn run_convert(
    value: &str,
    units: &[String],
    json: bool,
    config_path: Option<&std::path::Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::discover(config_path, std::env::current_dir()?)?;
    let (value_text, from_unit, to_unit) = split_convert_args(value, units)?;

    let processor = FormProcessor::new(&config);
    let result = processor.submit(value_text, from_unit, to_unit)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("{}", result.display);
    }

    Ok(())
}

fn list_units(json: bool) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        let units = serde_json::json!({
            "from": form::FROM_UNITS,
            "to": form::TO_UNITS,
        });
        println!("{}", serde_json::to_string_pretty(&units)?);
        return Ok(());
    }

    println!("From units ({}):", form::FROM_UNITS.len());
    for unit in form::FROM_UNITS {
        println!("  - {}", unit);
    }

    println!("\nTo units ({}):", form::TO_UNITS.len());
    for unit in form::TO_UNITS {
        println!("  - {}", unit);
    }

    Ok(())
}

fn list_table(json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let entries: Vec<_> = conversion::entries().collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    println!("Conversion factors ({}):", entries.len());
    for entry in &entries {
        println!("  - {} -> {} (x{})", entry.from, entry.to, entry.factor);
    }
    println!("\nReverse directions are derived by dividing by the factor.");

    Ok(())
}
