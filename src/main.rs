mod anchor;
mod assets;
mod error;
mod format;
mod toc;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use crate::error::MdTidyError;

/// Keep a docs repo tidy: regenerate the README `[TOC]` block from its
/// headings, then delete assets no markdown file references.
#[derive(Parser)]
#[command(name = "mdtidy", version, about)]
struct Cli {
    /// Markdown file whose [TOC] block is regenerated
    #[arg(long, default_value = "README.md")]
    readme: PathBuf,

    /// Assets directory to prune
    #[arg(long, default_value = "assets")]
    assets: PathBuf,

    /// Working directory scanned for *.md files
    #[arg(long, default_value = ".")]
    dir: PathBuf,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("mdtidy: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Both operations in fixed order. Expected conditions (missing file,
/// missing marker, missing dir, a failed delete) come back as outcomes
/// and are merely reported; only unanticipated I/O bubbles up.
fn run(cli: &Cli) -> Result<(), MdTidyError> {
    // Relative paths resolve inside --dir; absolute ones win as given.
    let readme = cli.dir.join(&cli.readme);
    let assets_dir = cli.dir.join(&cli.assets);

    let outcome = toc::update(&readme)?;
    println!("{}", format::toc_report(&readme, &outcome));

    let outcome = assets::clean(&cli.dir, &assets_dir)?;
    println!("{}", format::clean_report(&assets_dir, &outcome));

    Ok(())
}
