mod build;
mod encoding;

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::exit;
use std::str::FromStr;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use dotenvy::dotenv;

use sedra_backend::export_helpers::OutputFormat;
use sedra_backend::logger;
use sedra_backend::types::RecordType;

#[derive(Parser, Debug)]
#[command(author, version, about = "Sedra database converter", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Output format: js or json
    #[arg(long, global = true, default_value = "js", value_parser = OutputFormat::from_str)]
    format: OutputFormat,

    /// Write JSON without pretty-printing
    #[arg(long, global = true, default_value_t = false)]
    minify: bool,

    /// Log level: silent, error, warn, info, debug.
    /// If not provided, the LOG_LEVEL environment variable will be used.
    #[arg(long, global = true, value_name = "LEVEL")]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Convert every Sedra record file found in the input directory
    Build {
        /// Directory with ROOTS.TXT, LEXEMES.TXT, WORDS.TXT, ENGLISH.TXT, ETYMOLOGY.TXT and BFBS.TXT.
        #[arg(long, value_name = "DIRECTORY_PATH", env = "SEDRA_DIR")]
        sedra_dir: PathBuf,

        /// Directory to write the converted modules to
        #[arg(long, value_name = "DIRECTORY_PATH", env = "SEDRA_OUTPUT_DIR", default_value = "build")]
        output_dir: PathBuf,

        /// Only convert these record types (roots, lexemes, words, english, etymology, ubs)
        #[arg(long, value_delimiter = ',', value_parser = RecordType::from_str)]
        only: Vec<RecordType>,
    },

    /// Convert a single record file
    #[command(arg_required_else_help = true)]
    Parse {
        /// Record type of the input file
        #[arg(value_parser = RecordType::from_str)]
        record_type: RecordType,

        /// Path to the Sedra record file
        #[arg(value_name = "FILE_PATH")]
        input: PathBuf,

        /// Directory to write the converted modules to. Prints to stdout if not given.
        #[arg(long, value_name = "DIRECTORY_PATH")]
        output_dir: Option<PathBuf>,
    },
}

fn parse_to_stdout(record_type: RecordType, input: &Path, format: OutputFormat, minify: bool) -> Result<()> {
    let modules = build::convert_file(record_type, input, format, minify)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for module in modules {
        writeln!(out, "// {}", module.file_name(format)).context("Failed to write to stdout")?;
        out.write_all(module.content.as_bytes()).context("Failed to write to stdout")?;
    }

    Ok(())
}

fn main() {
    // Attempt to load .env file. This might define SEDRA_DIR if it's not
    // already in the environment. Clap will pick it up via `env = "SEDRA_DIR"`.
    let dotenv_loaded = dotenv().is_ok();

    let cli = Cli::parse();

    if let Some(level) = &cli.log_level {
        if !logger::set_log_level_str(level) {
            eprintln!("Error: Invalid log level: {}", level);
            exit(1);
        }
    }

    if !dotenv_loaded {
        logger::debug("No .env file found or failed to load.");
    }

    let command_result = match cli.command {
        Commands::Build { sedra_dir, output_dir, only } => {
            if !sedra_dir.is_dir() {
                Err(anyhow::anyhow!("Directory does not exist or is not a directory: {:?}", sedra_dir))
            } else {
                let record_types: Vec<RecordType> = if only.is_empty() {
                    RecordType::ALL.to_vec()
                } else {
                    only
                };

                build::build_all(&sedra_dir, &output_dir, &record_types, cli.format, cli.minify)
                    .map(|stats| {
                        logger::info(&format!(
                            "Converted {} record files, skipped {}, wrote {} modules to {:?}",
                            stats.converted.len(),
                            stats.skipped.len(),
                            stats.modules_written,
                            output_dir
                        ));
                    })
            }
        }

        Commands::Parse { record_type, input, output_dir } => {
            if !input.is_file() {
                Err(anyhow::anyhow!("Input file does not exist: {:?}", input))
            } else {
                match output_dir {
                    Some(dir) => build::convert_file(record_type, &input, cli.format, cli.minify)
                        .and_then(|modules| build::write_modules(&dir, &modules, cli.format))
                        .map(|_| ()),
                    None => parse_to_stdout(record_type, &input, cli.format, cli.minify),
                }
            }
        }
    };

    if let Err(e) = command_result {
        eprintln!("Error executing command: {:#}", e);
        exit(1);
    }
}
