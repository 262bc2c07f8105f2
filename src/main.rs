use std::{io::Write, process::ExitCode};

use clap::Parser;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;
use wordcase::{word_change_demo, Format, WordCaseError};

#[derive(Parser, Debug)]
#[command(version, rename_all = "snake_case")]
/// Identifier naming convention converter
struct WordCaseArgs {
    /// Words to convert, joined with a single space
    input: Vec<String>,
    /// Output formats (repeat or separate with commas). Runs the demo when omitted
    #[arg(short, long, value_delimiter = ',')]
    format: Vec<String>,
    /// Reject unknown format tags instead of printing the normalized input
    #[arg(long, action)]
    strict: bool,
    /// Enable debug logs
    #[arg(short, long, action)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Resolve the requested tags, keeping the tag text for labelling
fn resolve_formats(tags: &[String], strict: bool) -> Result<Vec<(&str, Format)>, WordCaseError> {
    let mut formats = Vec::with_capacity(tags.len());
    for tag in tags {
        let format = if strict {
            tag.parse::<Format>()?
        } else {
            let format = Format::from_tag(tag);
            if format == Format::Raw && tag != "raw" {
                warn!("Unknown format '{tag}', printing normalized input");
            }
            format
        };
        formats.push((tag.as_str(), format));
    }
    Ok(formats)
}

fn run<W: Write>(args: &WordCaseArgs, out: &mut W) -> Result<(), WordCaseError> {
    let input = args.input.join(" ");
    if args.format.is_empty() {
        debug!("No format requested, running demo on {input:?}");
        word_change_demo(&input, out)?;
        return Ok(());
    }

    let formats = resolve_formats(&args.format, args.strict)?;
    let labelled = formats.len() > 1;
    for (tag, format) in formats {
        let converted = format.convert(&input);
        debug!("{input:?} -> {format} -> {converted:?}");
        if labelled {
            writeln!(out, "{tag}: {converted}")?;
        } else {
            writeln!(out, "{converted}")?;
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let args = WordCaseArgs::parse();
    init_tracing(args.verbose);

    let mut stdout = std::io::stdout().lock();
    match run(&args, &mut stdout) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            if e.is_tag_error() {
                ExitCode::from(2)
            } else {
                ExitCode::FAILURE
            }
        }
    }
}
