//! Git barcode sheet generator.
//!
//! Renders one A4 page of git commands, each as a Code 128 barcode or a QR
//! code with a label and description, and writes it to
//! `git-barcode-sheet-a4.png`. There are no options: the command table and
//! every page parameter are compiled in.

use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use owo_colors::OwoColorize;
use sheet_common::diagnostics::{self, Severity};
use sheet_layout::{GIT_COMMANDS, SheetConfig, StandardEncoder};
use sheet_render::{FontCache, render_sheet};

#[derive(Parser)]
#[command(name = "git-barcode-sheet", version)]
#[command(about = "Render a printable A4 sheet of scannable git commands")]
struct Cli {}

fn main() -> Result<()> {
    let Cli {} = Cli::parse();

    let config = SheetConfig::default();
    let mut fonts = FontCache::from_system().context("failed to load fonts")?;
    let encoder = StandardEncoder::new(config.error_correction);

    let rendered = render_sheet(&config, GIT_COMMANDS, &mut fonts, &encoder);

    let skipped = rendered.sheet.failed_cells().count();
    if skipped > 0 {
        diagnostics::report(
            Severity::Info,
            "sheet",
            &format!(
                "{} of {} cells left blank",
                skipped,
                rendered.sheet.cells.len()
            ),
        );
    }

    let out = Path::new(config.output_path);
    rendered.save(out)?;

    println!("{} {}", "Saved:".green().bold(), out.display());
    Ok(())
}
