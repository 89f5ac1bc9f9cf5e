//! Colpick CLI - keep named columns from delimited files
//!
//! # Main Commands
//!
//! ```bash
//! colpick project input.csv out.csv -c code,units   # Project columns
//! ```
//!
//! # Debug Commands (for development)
//!
//! ```bash
//! colpick headers input.csv        # List header columns
//! colpick parse input.csv          # Just parse CSV to JSON
//! ```

use clap::{Parser, Subcommand};
use colpick::{open_reader, parse_csv_file, project_file, read_headers, ColumnSet, ProjectOptions};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "colpick")]
#[command(about = "Keep a fixed subset of named columns from delimited files", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Project the named columns into a new file
    Project {
        /// Input delimited file
        #[arg(env = "COLPICK_INPUT")]
        input: PathBuf,

        /// Output file (created or truncated)
        #[arg(env = "COLPICK_OUTPUT")]
        output: PathBuf,

        /// Column names to keep, in output order (comma-separated, repeatable)
        #[arg(short, long, required = true, env = "COLPICK_COLUMNS")]
        columns: Vec<String>,

        /// Field delimiter (comma if not specified)
        #[arg(short, long)]
        delimiter: Option<char>,
    },

    /// List the header column names of a file
    Headers {
        /// Input delimited file
        input: PathBuf,

        /// Field delimiter (comma if not specified)
        #[arg(short, long)]
        delimiter: Option<char>,
    },

    /// Parse a CSV file and output JSON
    Parse {
        /// Input CSV file
        input: PathBuf,

        /// Field delimiter (comma if not specified)
        #[arg(short, long)]
        delimiter: Option<char>,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() {
    // Load .env file (if present)
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Project {
            input,
            output,
            columns,
            delimiter,
        } => cmd_project(&input, &output, &columns, delimiter),

        Commands::Headers { input, delimiter } => cmd_headers(&input, delimiter),

        Commands::Parse {
            input,
            delimiter,
            output,
        } => cmd_parse(&input, delimiter, output.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("❌ Error: {}", e);
        std::process::exit(1);
    }
}

fn cmd_project(
    input: &Path,
    output: &Path,
    columns: &[String],
    delimiter: Option<char>,
) -> Result<(), Box<dyn std::error::Error>> {
    let columns = ColumnSet::parse(columns)?;
    let options = ProjectOptions {
        delimiter: delimiter_byte(delimiter)?,
    };

    eprintln!("📄 Projecting: {}", input.display());
    eprintln!("   Delimiter: '{}'", format_delimiter(options.delimiter));
    eprintln!("   Columns: {}", columns.names().join(", "));

    let summary = project_file(input, output, &columns, &options)?;

    eprintln!(
        "✅ Wrote {} rows ({} columns)",
        summary.rows_written,
        summary.columns.len()
    );
    eprintln!("💾 Output written to: {}", output.display());

    Ok(())
}

fn cmd_headers(input: &Path, delimiter: Option<char>) -> Result<(), Box<dyn std::error::Error>> {
    let mut reader = open_reader(input, delimiter_byte(delimiter)?)?;
    let headers = read_headers(&mut reader)?;

    eprintln!("📋 {} has {} columns:", input.display(), headers.len());
    for (i, col) in headers.iter().enumerate() {
        println!("[{:2}] {}", i + 1, col);
    }

    Ok(())
}

fn cmd_parse(
    input: &Path,
    delimiter: Option<char>,
    output: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    eprintln!("📄 Parsing CSV: {}", input.display());

    let result = parse_csv_file(input, delimiter_byte(delimiter)?)?;

    eprintln!("   Delimiter: '{}'", format_delimiter(result.delimiter));
    eprintln!("   Columns: {}", result.headers.join(", "));
    eprintln!("✅ Parsed {} records", result.records.len());

    let json = serde_json::to_string_pretty(&result.records)?;
    write_output(&json, output)?;

    Ok(())
}

fn delimiter_byte(delimiter: Option<char>) -> Result<u8, Box<dyn std::error::Error>> {
    match delimiter {
        None => Ok(b','),
        Some(c) if c.is_ascii() => Ok(c as u8),
        Some(c) => Err(format!("Delimiter must be a single ASCII character: '{}'", c).into()),
    }
}

fn format_delimiter(d: u8) -> String {
    match d {
        b'\t' => "\\t".to_string(),
        c => (c as char).to_string(),
    }
}

fn write_output(content: &str, path: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    match path {
        Some(p) => {
            fs::write(p, content)?;
            eprintln!("💾 Output written to: {}", p.display());
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
