//! docutext CLI - document text extraction tool

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use docutext::{
    detect_format_from_path, extract_file_with_options, Document, ExtractOptions,
};

#[derive(Parser)]
#[command(name = "docutext")]
#[command(version)]
#[command(about = "Extract text, tables, and languages from PDFs and images", long_about = None)]
struct Cli {
    /// Input PDF or image file
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output text file (stdout if not specified)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract text, tables, and languages from a document
    Extract {
        /// Input PDF or image file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output text file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Table CSV destination (next to the input if not specified)
        #[arg(long, value_name = "FILE")]
        tables: Option<PathBuf>,

        /// OCR recognition language (ISO 639-2, e.g. "eng", "deu")
        #[arg(long, value_name = "LANG", default_value = "eng", env = "DOCUTEXT_OCR_LANG")]
        ocr_lang: String,

        /// PDF rendering scale relative to 72 DPI
        #[arg(long, value_name = "SCALE")]
        scale: Option<f32>,

        /// OCR pages one at a time instead of in parallel
        #[arg(long)]
        sequential: bool,

        /// Emit the full result as JSON instead of plain text
        #[arg(long)]
        json: bool,
    },

    /// Show detected format information for a file
    Info {
        /// Input file
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Show version information
    Version,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Extract {
            input,
            output,
            tables,
            ocr_lang,
            scale,
            sequential,
            json,
        }) => cmd_extract(
            &input,
            output.as_deref(),
            tables,
            &ocr_lang,
            scale,
            sequential,
            json,
        ),
        Some(Commands::Info { input }) => cmd_info(&input),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            // Default behavior: extract if input is provided
            if let Some(input) = cli.input {
                cmd_extract(
                    &input,
                    cli.output.as_deref(),
                    None,
                    "eng",
                    None,
                    false,
                    false,
                )
            } else {
                println!("{}", "Usage: docutext <FILE> [-o OUTPUT]".yellow());
                println!("       docutext --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

#[allow(clippy::too_many_arguments)]
fn cmd_extract(
    input: &Path,
    output: Option<&Path>,
    tables: Option<PathBuf>,
    ocr_lang: &str,
    scale: Option<f32>,
    sequential: bool,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut options = ExtractOptions::new()
        .with_ocr_language(ocr_lang)
        .with_parallel(!sequential);
    if let Some(scale) = scale {
        options = options.with_raster_scale(scale);
    }
    if let Some(path) = tables {
        options = options.with_table_output(path);
    }

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap(),
    );
    pb.enable_steady_tick(std::time::Duration::from_millis(120));
    pb.set_message(format!("Extracting {}...", input.display()));

    let extracted = extract_file_with_options(input, options)?;

    pb.finish_and_clear();

    if json {
        let payload = serde_json::json!({
            "result": extracted.result,
            "table_file": extracted.table_file,
        });
        let rendered = serde_json::to_string_pretty(&payload)?;
        if let Some(path) = output {
            fs::write(path, &rendered)?;
            println!("{} {}", "Saved to".green(), path.display());
        } else {
            println!("{}", rendered);
        }
        return Ok(());
    }

    if let Some(path) = output {
        fs::write(path, &extracted.result.raw_text)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", extracted.result.raw_text);
    }

    println!(
        "{}: {}",
        "Languages".bold(),
        extracted.result.language_codes().join(", ")
    );
    if let Some(path) = &extracted.table_file {
        println!(
            "{}: {} table(s) written to {}",
            "Tables".bold(),
            extracted.result.tables.len(),
            path.display()
        );
    }

    Ok(())
}

fn cmd_info(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let format = detect_format_from_path(input)?;
    let document = Document::open(input)?;
    let size = fs::metadata(input)?.len();

    println!("{}", "Document Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    println!("{}: {}", "File".bold(), input.display());
    println!("{}: {}", "Format".bold(), format);
    let kind = if document.is_pdf() {
        "paged document"
    } else {
        "single image"
    };
    println!("{}: {}", "Kind".bold(), kind);
    println!("{}: {} bytes", "Size".bold(), size);

    Ok(())
}

fn cmd_version() {
    println!(
        "{} {}",
        "docutext".cyan().bold(),
        env!("CARGO_PKG_VERSION")
    );
}
