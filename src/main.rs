//! asn1meta — print the metadata index of annotated ASN.1 files.
//!
//! `asn1meta 'specs/*.asn'` prints the index as JSON;
//! `asn1meta -f tree specs/` prints an indented listing.

use anyhow::{Context, Result};
use asn1meta::driver;
use asn1meta::render;
use clap::Parser;
use std::fs;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "asn1meta",
    about = "Extract field metadata from annotated ASN.1 modules"
)]
struct Cli {
    /// Input files, directories or glob patterns. Later files win when
    /// they redefine the same type.
    #[arg(required = true)]
    patterns: Vec<String>,

    /// Output format: json (default), tree
    #[arg(short = 'f', long, default_value = "json")]
    format: String,

    /// Write the index to a file instead of stdout
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Report dropped annotation blocks and skipped directives on stderr
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Fail on a bad format before touching any file.
    let renderer = render::create_renderer(&cli.format)?;

    let expansion = driver::expand_patterns(&cli.patterns)?;
    for pattern in &expansion.unmatched {
        eprintln!("warning: no files matched: {}", pattern);
    }

    let scans = driver::scan_files(&expansion.files)?;
    if cli.verbose {
        for (path, scan) in &scans {
            for block in &scan.dropped {
                eprintln!("warning: {}:{}: {}", path.display(), block.line, block.reason);
            }
            for directive in &scan.skipped_directives {
                eprintln!(
                    "warning: {}:{}: malformed directive: {}",
                    path.display(),
                    directive.line,
                    directive.text
                );
            }
        }
    }

    let index = driver::build_index(scans.into_iter().map(|(_, scan)| scan));
    let output = renderer.render(&index)?;

    match cli.output {
        Some(path) => fs::write(&path, &output)
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => print!("{}", output),
    }

    Ok(())
}
