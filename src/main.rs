//! List Placement CLI
//!
//! Usage:
//!   list-placement [OPTIONS] [FILE]
//!
//! Options:
//!   -c, --config <FILE>    Configuration file (TOML format)
//!       --order-key <KEY>  Attribute holding the order specifier
//!       --id-key <KEY>     Attribute holding the identifier
//!       --with-errors      Print `{ "errors": [...], "list": [...] }`
//!       --pretty           Pretty-print the output JSON
//!   -d, --debug            Print the placement plan to stderr
//!   -h, --help             Print help

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process;

use clap::Parser;
use serde_json::{json, Value};
use tracing::{debug, warn};

use list_placement::{plan, PlacementConfig};

#[derive(Parser)]
#[command(name = "list-placement")]
#[command(about = "Reorder a JSON array of records by their placement hints")]
struct Cli {
    /// Input file holding a JSON array (reads from stdin if not provided)
    input: Option<PathBuf>,

    /// Configuration file (TOML format)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Attribute holding the order specifier (overrides the config file)
    #[arg(long)]
    order_key: Option<String>,

    /// Attribute holding the unique identifier (overrides the config file)
    #[arg(long)]
    id_key: Option<String>,

    /// Print specifier errors alongside the list
    #[arg(long)]
    with_errors: bool,

    /// Pretty-print the output JSON
    #[arg(long)]
    pretty: bool,

    /// Debug mode: print candidates and positions for every record
    #[arg(short, long)]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    // Load config, then apply flag overrides
    let mut config = match &cli.config {
        Some(path) => match PlacementConfig::from_file(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error loading config '{}': {}", path.display(), e);
                process::exit(1);
            }
        },
        None => PlacementConfig::default(),
    };
    if let Some(key) = cli.order_key.clone() {
        config = config.with_order_key(key);
    }
    if let Some(key) = cli.id_key.clone() {
        config = config.with_id_key(key);
    }
    debug!(order_key = %config.order_key, id_key = %config.id_key, "configured");

    // Read input
    let source = match &cli.input {
        Some(path) => match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                eprintln!("Error reading file '{}': {}", path.display(), e);
                process::exit(1);
            }
        },
        None => {
            let mut buffer = String::new();
            match io::stdin().read_to_string(&mut buffer) {
                Ok(_) => buffer,
                Err(e) => {
                    eprintln!("Error reading from stdin: {}", e);
                    process::exit(1);
                }
            }
        }
    };

    let records: Vec<Value> = match serde_json::from_str(&source) {
        Ok(records) => records,
        Err(e) => {
            eprintln!("Error: input must be a JSON array of records: {}", e);
            process::exit(1);
        }
    };

    let plan = match plan(&config, &records) {
        Ok(plan) => plan,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    if cli.debug {
        eprintln!("=== Placement Plan ===");
        eprintln!("{}", plan);
        eprintln!("======================");
    }

    for err in plan.errors() {
        warn!(code = err.code(), tag = %err.tag(), "{}", err);
    }

    let list = Value::Array(plan.apply(records));
    let output = if cli.with_errors {
        let errors: Vec<Value> = plan.errors().iter().map(|e| e.to_pair()).collect();
        json!({ "errors": errors, "list": list })
    } else {
        list
    };

    let rendered = if cli.pretty {
        serde_json::to_string_pretty(&output)
    } else {
        serde_json::to_string(&output)
    };
    match rendered {
        Ok(text) => println!("{}", text),
        Err(e) => {
            eprintln!("Error writing output: {}", e);
            process::exit(1);
        }
    }
}

fn init_tracing(debug: bool) {
    let default = if debug { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default.into()),
        )
        .init();
}
