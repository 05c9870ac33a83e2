//! `qrlabels` — generate ZPL batches of QR serial-number labels.

use std::fs;
use std::io::Read;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use qr_labels_core::{LabelDescriptor, emit_batch, from_json_str, from_lines};

// ── CLI definition ──────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(
    name = "qrlabels",
    version,
    about = "qr-labels — generate printer-ready ZPL for batches of QR serial-number labels"
)]
struct Cli {
    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand, Debug)]
enum Cmd {
    /// Generate a ZPL document from a list of serial numbers.
    Generate {
        /// Input file holding the serial list ("-" for stdin). Accepts a
        /// JSON array or one serial per line, depending on --from.
        #[arg(conflicts_with = "serials")]
        file: Option<String>,

        /// Serial number passed directly; may be repeated. Mutually
        /// exclusive with FILE.
        #[arg(long = "serial", value_name = "SERIAL")]
        serials: Vec<String>,

        /// Input format. "auto" treats input starting with '[' as JSON.
        #[arg(long, value_enum, default_value_t = InputKind::Auto)]
        from: InputKind,

        /// Write the document to a file instead of stdout.
        #[arg(long, short)]
        output: Option<String>,
    },
}

/// Input format for the `generate` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum InputKind {
    /// Sniff: JSON if the first non-whitespace byte is '[', else lines.
    Auto,
    /// JSON array of descriptor objects or bare serial strings.
    Json,
    /// One serial number per line; blank lines are skipped.
    Lines,
}

// ── Main ────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.cmd {
        Cmd::Generate {
            file,
            serials,
            from,
            output,
        } => cmd_generate(file.as_deref(), &serials, from, output.as_deref()),
    }
}

// ── Commands ────────────────────────────────────────────────────────────

fn cmd_generate(
    file: Option<&str>,
    serials: &[String],
    from: InputKind,
    output: Option<&str>,
) -> Result<()> {
    let descriptors = if serials.is_empty() {
        let Some(file) = file else {
            bail!("no input: pass a FILE (\"-\" for stdin) or one or more --serial flags");
        };
        let input = read_input(file)?;
        parse_descriptors(&input, from)?
    } else {
        serials.iter().cloned().map(LabelDescriptor::from).collect()
    };

    let document = emit_batch(&descriptors);

    match output {
        Some(path) => fs::write(path, &document)
            .with_context(|| format!("failed to write output file: {path}"))?,
        None => println!("{document}"),
    }

    Ok(())
}

// ── Input handling ──────────────────────────────────────────────────────

fn read_input(file: &str) -> Result<String> {
    if file == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read stdin")?;
        Ok(buf)
    } else {
        fs::read_to_string(file).with_context(|| format!("failed to read input file: {file}"))
    }
}

fn parse_descriptors(input: &str, from: InputKind) -> Result<Vec<LabelDescriptor>> {
    let looks_like_json = input.trim_start().starts_with('[');
    let as_json = match from {
        InputKind::Json => true,
        InputKind::Lines => false,
        InputKind::Auto => looks_like_json,
    };

    if as_json {
        Ok(from_json_str(input).context("failed to parse descriptor list")?)
    } else {
        Ok(from_lines(input))
    }
}
