//! CLI tool for extracting multiple-choice questions from quiz documents.

use anyhow::{Context, Result};
use clap::Parser;
use mcq_core::{DocumentContent, DocumentFormat, QuizFormatter};
use mcq_pdf::PdfReader;
use mcq_text::TextReader;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Extract multiple-choice questions from quiz documents.
#[derive(Parser, Debug)]
#[command(name = "mcq-extract")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input quiz document(s) (.pdf or .txt)
    #[arg(required = true)]
    input: Vec<PathBuf>,

    /// Output directory (default: same as input file)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print output to stdout instead of writing to file
    #[arg(short, long)]
    print: bool,

    /// Emit the topic records as pretty-printed JSON instead of quiz text
    #[arg(short, long)]
    json: bool,

    /// Directory for extracted PDF images (image extraction is off without it)
    #[arg(short = 'i', long)]
    images_dir: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    if args.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    for input_path in &args.input {
        if args.verbose {
            eprintln!("Processing: {}", input_path.display());
        }

        match process_file(input_path, &args) {
            Ok(Some(output)) => {
                if args.print {
                    print!("{}", output);
                } else {
                    let output_path = get_output_path(input_path, args.output.as_ref(), args.json)?;
                    write_output(&output_path, &output)?;
                    if args.verbose {
                        eprintln!("Written to: {}", output_path.display());
                    }
                }
            }
            Ok(None) => {
                eprintln!("No MCQs found in {}", input_path.display());
            }
            Err(e) => {
                eprintln!("Error processing {}: {}", input_path.display(), e);
            }
        }
    }

    Ok(())
}

/// Process a single quiz document.
///
/// `Ok(None)` means the document parsed but contained no MCQs, which is
/// reported separately from read errors and is not a failure.
fn process_file(input_path: &Path, args: &Args) -> Result<Option<String>> {
    let content = read_document(input_path, args)?;

    if args.verbose {
        eprintln!(
            "  Found {} pages, {} images, {} links",
            content.pages.len(),
            content.images.len(),
            content.links.len()
        );
    }

    let topics = mcq_core::extract_document(&content);
    if topics.is_empty() {
        return Ok(None);
    }

    if args.verbose {
        let question_count: usize = topics.iter().map(|t| t.questions.len()).sum();
        eprintln!("  Extracted {} topics, {} questions", topics.len(), question_count);
    }

    let output = if args.json {
        let mut json = serde_json::to_string_pretty(&topics)?;
        json.push('\n');
        json
    } else {
        QuizFormatter::new().format_with_newline(&topics)
    };

    Ok(Some(output))
}

/// Read the document with the backend matching its detected format.
fn read_document(input_path: &Path, args: &Args) -> Result<DocumentContent> {
    let bytes = std::fs::read(input_path)
        .with_context(|| format!("Failed to open {}", input_path.display()))?;

    let format = detect_format(input_path, &bytes)?;

    let filename = input_path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("unknown");

    let content = match format {
        DocumentFormat::Pdf => {
            log::debug!("Reading as PDF");
            let mut reader = PdfReader::new();
            if let Some(dir) = &args.images_dir {
                std::fs::create_dir_all(dir).with_context(|| {
                    format!("Failed to create images directory: {}", dir.display())
                })?;
                reader = reader.with_image_dir(dir);
            }
            reader
                .read_bytes(&bytes, filename)
                .map_err(|e| anyhow::anyhow!("{}", e))?
        }
        DocumentFormat::Text => {
            log::debug!("Reading as plain text");
            TextReader::new()
                .read_bytes(&bytes, filename)
                .map_err(|e| anyhow::anyhow!("{}", e))?
        }
    };

    Ok(content)
}

/// Detect the document format from magic bytes, falling back to the
/// file extension.
fn detect_format(input_path: &Path, bytes: &[u8]) -> mcq_core::Result<DocumentFormat> {
    DocumentFormat::from_magic(bytes)
        .or_else(|| {
            input_path
                .extension()
                .and_then(|e| e.to_str())
                .and_then(DocumentFormat::from_extension)
        })
        .ok_or_else(|| mcq_core::Error::UnsupportedFormat(input_path.display().to_string()))
}

/// Determine the output path for a processed file.
fn get_output_path(input_path: &Path, output_dir: Option<&PathBuf>, json: bool) -> Result<PathBuf> {
    let stem = input_path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("output");

    let extension = if json { "json" } else { "txt" };
    let output_filename = format!("{}.{}", stem, extension);

    let output_path = match output_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create output directory: {}", dir.display()))?;
            dir.join(output_filename)
        }
        None => {
            if let Some(parent) = input_path.parent() {
                parent.join(output_filename)
            } else {
                PathBuf::from(output_filename)
            }
        }
    };

    Ok(output_path)
}

/// Write output to a file.
fn write_output(path: &Path, content: &str) -> Result<()> {
    let mut file =
        File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;

    file.write_all(content.as_bytes())
        .with_context(|| format!("Failed to write to {}", path.display()))?;

    Ok(())
}
