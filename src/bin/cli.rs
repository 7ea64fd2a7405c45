//! Command-line interface for the EnzymeML validator
//!
//! This binary validates EnzymeML documents and inspects the schema model:
//! - Validating one or more documents against structure and consistency rules
//! - Printing the fields of a schema type or the JSON Schema of the typed model
//!
//! # Usage
//!
//! ```bash
//! # Validate documents
//! enzymeml-validator validate doc.json other.json --format table
//!
//! # Also require initial values to match the first data point
//! enzymeml-validator validate doc.json --check-initial-values
//!
//! # Show the fields of a schema type
//! enzymeml-validator schema MeasurementData
//! ```

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use enzymeml_validator::{
    io::{validate_file, IOError},
    model::{schema_model, SchemaError, ROOT_TYPE},
    pipeline::{Outcome, ValidatorBuilder},
    prelude::EnzymeMLDocument,
    validation::consistency::ConsistencyOptions,
};
use itertools::Itertools;
use log::{debug, LevelFilter};
use rayon::prelude::*;
use tabled::{builder::Builder, settings::Style};

/// Main CLI configuration struct
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,
}

/// Available CLI commands
#[derive(Subcommand)]
enum Commands {
    /// Validate EnzymeML documents
    Validate {
        /// Paths to the EnzymeML documents
        #[arg(required = true)]
        paths: Vec<PathBuf>,

        /// Require initial values to match the first data point at t=0
        #[arg(long)]
        check_initial_values: bool,

        /// Output format of the validation reports
        #[arg(short, long, value_enum, default_value_t = Format::Pretty)]
        format: Format,
    },
    /// Show the schema model
    Schema {
        /// Name of the type to show
        #[arg(default_value = ROOT_TYPE)]
        type_name: String,

        /// Print the JSON Schema of the typed document model instead
        #[arg(long)]
        json_schema: bool,
    },
}

/// Output formats of the validation reports
#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Pretty,
    Json,
    Table,
}

/// Main entry point for the CLI application
pub fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logger(cli.verbose, cli.quiet);

    match cli.command {
        Commands::Validate {
            paths,
            check_initial_values,
            format,
        } => validate(&paths, check_initial_values, format),
        Commands::Schema {
            type_name,
            json_schema,
        } => {
            if json_schema {
                print_json_schema()
            } else {
                print_schema_type(&type_name)
            }
        }
    }
}

fn init_logger(verbose: u8, quiet: bool) {
    let level = match (quiet, verbose) {
        (true, _) => LevelFilter::Error,
        (false, 0) => LevelFilter::Warn,
        (false, 1) => LevelFilter::Info,
        (false, 2) => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn validate(paths: &[PathBuf], check_initial_values: bool, format: Format) -> ExitCode {
    let validator = ValidatorBuilder::default()
        .options(ConsistencyOptions {
            check_initial_values,
        })
        .build()
        .expect("Failed to build validator");

    // Each file is validated independently; reports are printed in argument order.
    let outcomes: Vec<(&PathBuf, Result<Outcome, IOError>)> = paths
        .par_iter()
        .map(|path| {
            debug!("Validating {}", path.display());
            (path, validate_file(path, &validator))
        })
        .collect();

    let mut all_valid = true;

    for (path, outcome) in outcomes {
        match outcome {
            Ok(outcome) => {
                all_valid &= outcome.is_valid();
                print_report(path, &outcome, format);
            }
            Err(error) => {
                all_valid = false;
                eprintln!("{} {}", path.display().to_string().bold(), error.to_string().red());
            }
        }
    }

    if all_valid {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn print_report(path: &Path, outcome: &Outcome, format: Format) {
    let presentation = outcome.presentation();

    match format {
        Format::Pretty => {
            println!("{}", path.display().to_string().underline());
            println!("{presentation}");
        }
        Format::Table => {
            println!("{}", path.display().to_string().underline());
            println!("{}", presentation.to_table());
        }
        Format::Json => {
            let report = serde_json::json!({
                "path": path,
                "valid": outcome.is_valid(),
                "report": presentation,
            });
            println!(
                "{}",
                serde_json::to_string_pretty(&report).expect("Failed to serialize report")
            );
        }
    }
}

fn print_schema_type(type_name: &str) -> ExitCode {
    let fields = match schema_model().fields_of(type_name) {
        Ok(fields) => fields,
        Err(SchemaError::NotAStruct(name)) => {
            return print_enum_values(&name);
        }
        Err(error) => {
            eprintln!("{}", error.to_string().red());
            eprintln!("Known types: {}", schema_model().type_names().join(", "));
            return ExitCode::FAILURE;
        }
    };

    let mut builder = Builder::default();
    builder.push_record(vec!["Field", "Type", "Required", "Nullable"]);

    for field in fields {
        builder.push_record(vec![
            field.name.to_string(),
            field.type_tag.to_string(),
            field.required.to_string(),
            field.nullable.to_string(),
        ]);
    }

    let mut table = builder.build();
    table.with(Style::rounded());
    println!("{}\n{table}", type_name.bold());

    ExitCode::SUCCESS
}

fn print_enum_values(type_name: &str) -> ExitCode {
    match schema_model().enum_of(type_name) {
        Ok(descriptor) => {
            println!("{}", type_name.bold());
            for value in descriptor.values {
                println!("  {value}");
            }
            ExitCode::SUCCESS
        }
        Err(error) => {
            eprintln!("{}", error.to_string().red());
            ExitCode::FAILURE
        }
    }
}

fn print_json_schema() -> ExitCode {
    let schema = schemars::schema_for!(EnzymeMLDocument);
    println!(
        "{}",
        serde_json::to_string_pretty(&schema).expect("Failed to serialize JSON schema")
    );
    ExitCode::SUCCESS
}
