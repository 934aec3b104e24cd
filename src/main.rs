use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, ValueEnum};
use jsoncon::{JsonConfig, JsonconError};

/// Output format for converted documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/// Convert JSON with embedded .[ expressions ]. into flat config text.
#[derive(Parser)]
#[command(name = "jsoncon", version, about = "Convert JSON with embedded expressions into config text")]
struct Cli {
    /// Input files; each is converted independently. Reads stdin when empty.
    files: Vec<PathBuf>,

    /// Output format (text or json)
    #[arg(long, default_value = "text", value_enum)]
    format: OutputFormat,

    /// Increase log verbosity (-v info, -vv debug). RUST_LOG takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        _ => log::LevelFilter::Debug,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    let ok = if cli.files.is_empty() {
        run_stdin(cli.format)
    } else {
        run_files(&cli.files, cli.format)
    };

    if !ok {
        process::exit(1);
    }
}

fn run_stdin(format: OutputFormat) -> bool {
    let mut input = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut input) {
        eprintln!("Error: failed to read standard input - {}", e);
        return false;
    }

    match convert(&input, format) {
        Ok(output) => {
            print!("{}", output);
            true
        }
        Err(e @ JsonconError::MalformedInput { .. }) => {
            eprintln!("Error: Invalid JSON input - {}", e);
            false
        }
        Err(e) => {
            eprintln!("Error processing input: {}", e);
            false
        }
    }
}

/// Each file succeeds or fails on its own; a failure never stops the batch.
fn run_files(files: &[PathBuf], format: OutputFormat) -> bool {
    let mut all_ok = true;
    for path in files {
        match convert_file(path, format) {
            Ok(output) => print!("{}", output),
            Err(e) => {
                log::warn!(
                    "skipping {}: conversion failed with code {}",
                    path.display(),
                    e.code().unwrap_or_default()
                );
                match e {
                    JsonconError::FileError { .. } => {
                        eprintln!("Error: Cannot read file - {}: {}", path.display(), e)
                    }
                    JsonconError::MalformedInput { .. } => {
                        eprintln!("Error: Invalid JSON in file - {}: {}", path.display(), e)
                    }
                    _ => eprintln!("Error processing file - {}: {}", path.display(), e),
                }
                all_ok = false;
            }
        }
    }
    all_ok
}

fn convert_file(path: &Path, format: OutputFormat) -> Result<String, JsonconError> {
    log::info!("converting {}", path.display());
    let config = JsonConfig::from_file(path)?;
    render(&config, format)
}

fn convert(input: &str, format: OutputFormat) -> Result<String, JsonconError> {
    let config = JsonConfig::from_str(input)?;
    render(&config, format)
}

fn render(config: &JsonConfig, format: OutputFormat) -> Result<String, JsonconError> {
    match format {
        OutputFormat::Text => Ok(config.render()),
        OutputFormat::Json => config.to_json().map(|json| json + "\n"),
    }
}
