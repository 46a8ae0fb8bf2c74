//! CLI tool for turning multiple-choice question tables into PowerPoint decks.

use anyhow::{Context, Result};
use clap::Parser;
use quizdeck_core::{
    records_from_table, Deck, DeckBuilder, Error, InputFormat, OutlineFormatter,
};
use quizdeck_csv::CsvLoader;
use quizdeck_pptx::{PptxReader, PptxWriter};
use std::collections::HashSet;
use std::fs::File;
use std::io::{Cursor, Write};
use std::path::{Path, PathBuf};

/// Generate question/answer-reveal slide decks from CSV question tables.
///
/// Each input needs `question` and `correct` columns; every column whose
/// name starts with `option` holds an answer choice. Passing an existing
/// .pptx deck prints its outline instead.
#[derive(Parser, Debug)]
#[command(name = "quizdeck")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input question table(s) (.csv, .tsv) or deck(s) to inspect (.pptx)
    #[arg(required = true)]
    input: Vec<PathBuf>,

    /// Output directory (default: same as input file)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Field delimiter (default: tab for .tsv, comma otherwise)
    #[arg(short, long)]
    delimiter: Option<char>,

    /// Print the deck outline to stdout instead of writing a file
    #[arg(short, long)]
    print: bool,

    /// Print the deck as JSON to stdout instead of writing a file
    #[arg(long, conflicts_with = "print")]
    json: bool,

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

    run(&args)
}

/// Process every input in order, continuing past failures.
fn run(args: &Args) -> Result<()> {
    let mut written = HashSet::new();
    let mut failed = 0;
    for input_path in &args.input {
        log::info!("Processing: {}", input_path.display());

        if let Err(e) = process_file(input_path, args, &mut written) {
            eprintln!("Error processing {}: {:#}", input_path.display(), e);
            failed += 1;
        }
    }

    if failed > 0 {
        anyhow::bail!("{} of {} input(s) failed", failed, args.input.len());
    }

    Ok(())
}

/// Process a single input file.
///
/// `written` holds the decks produced so far in this run; an input whose
/// output would replace one of them is rejected.
fn process_file(input_path: &Path, args: &Args, written: &mut HashSet<PathBuf>) -> Result<()> {
    let data = std::fs::read(input_path)
        .with_context(|| format!("Failed to read {}", input_path.display()))?;

    let extension = input_path.extension().and_then(|e| e.to_str());
    let format = InputFormat::from_magic(&data)
        .or_else(|| extension.and_then(InputFormat::from_extension))
        .or_else(|| args.delimiter.map(|_| InputFormat::Csv))
        .ok_or_else(|| {
            Error::UnsupportedFormat(format!(
                "{} (expected .csv, .tsv or .pptx)",
                input_path.display()
            ))
        })?;

    if !format.is_tabular() {
        // Existing decks are only inspected, never rewritten.
        log::debug!("Reading existing deck");
        let deck = PptxReader::new().read(Cursor::new(data))?;
        if args.json {
            print_json(&deck)?;
        } else {
            print!("{}", OutlineFormatter::new().format_with_newline(&deck));
        }
        return Ok(());
    }

    let deck = build_deck(&data, extension.unwrap_or_default(), args)?;
    log::info!("  Built {} slides", deck.slide_count());

    if args.print {
        print!("{}", OutlineFormatter::new().format_with_newline(&deck));
    } else if args.json {
        print_json(&deck)?;
    } else {
        let output_path = get_output_path(input_path, args.output.as_ref())?;
        if !written.insert(output_path.clone()) {
            anyhow::bail!(
                "{} was already written from an earlier input",
                output_path.display()
            );
        }
        write_deck(&output_path, &deck)?;
        log::info!("Written to: {}", output_path.display());
    }

    Ok(())
}

/// Load, validate and build a deck from a question table.
fn build_deck(data: &[u8], extension: &str, args: &Args) -> Result<Deck> {
    let mut loader = CsvLoader::for_extension(extension);
    if let Some(d) = args.delimiter {
        if !d.is_ascii() {
            anyhow::bail!("Delimiter must be a single ASCII character, got {:?}", d);
        }
        loader = loader.with_delimiter(d as u8);
    }

    let table = loader.parse(data)?;
    log::debug!("Loaded {} rows", table.rows.len());

    // Rejects tables without `question` and `correct` before any deck is built.
    let records = records_from_table(&table)?;

    Ok(DeckBuilder::new().build(&records))
}

fn print_json(deck: &Deck) -> Result<()> {
    let json = serde_json::to_string_pretty(deck).context("Failed to serialize deck")?;
    println!("{}", json);
    Ok(())
}

/// Determine the output path for a processed file.
fn get_output_path(input_path: &Path, output_dir: Option<&PathBuf>) -> Result<PathBuf> {
    let output_filename = match input_path.file_stem().and_then(|s| s.to_str()) {
        Some(stem) => format!("{}.pptx", stem),
        None => quizdeck_pptx::DEFAULT_FILE_NAME.to_string(),
    };

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

/// Serialize a deck and write it to a file.
fn write_deck(path: &Path, deck: &Deck) -> Result<()> {
    let bytes = PptxWriter::new().write(deck)?;
    log::debug!(
        "Serialized {} bytes of {}",
        bytes.len(),
        quizdeck_pptx::MIME_TYPE
    );

    let mut file =
        File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;

    file.write_all(&bytes)
        .with_context(|| format!("Failed to write to {}", path.display()))?;

    Ok(())
}
