//! Display preset or bank contents.

use std::path::PathBuf;

use clap::Args;
use onepatch_core::{Bank, Document, Format, Preset};

use super::common::read_document;

/// Display preset or bank information.
#[derive(Args)]
pub struct InfoArgs {
    /// Preset or bank file
    pub file: PathBuf,

    /// Input format, when the extension does not tell
    #[arg(long)]
    pub from: Option<Format>,

    /// Print as JSON
    #[arg(long)]
    pub json: bool,
}

/// Run the info command.
pub fn run(args: InfoArgs) -> anyhow::Result<()> {
    let (format, document) = read_document(&args.file, args.from)?;

    if args.json {
        let json = match &document {
            Document::Preset(preset) => serde_json::to_string_pretty(preset)?,
            Document::Bank(bank) => serde_json::to_string_pretty(bank)?,
        };
        println!("{json}");
        return Ok(());
    }

    println!("File:        {}", args.file.display());
    println!("Format:      {format}");
    match &document {
        Document::Preset(preset) => print_preset(preset),
        Document::Bank(bank) => print_bank(bank),
    }
    Ok(())
}

fn print_preset(preset: &Preset) {
    println!("Name:        {}", preset.name);
    println!("Version:     {}", preset.version);
    println!();
    println!("Parameters ({}):", preset.len());
    for param in preset.iter() {
        println!(
            "  {:24} {:>10}   ({:.6})",
            param.name(),
            param.formatted_value(),
            param.normalized_value()
        );
    }
}

fn print_bank(bank: &Bank) {
    println!("Presets:     {}", bank.len());
    println!();
    for (slot, preset) in bank.iter().enumerate() {
        println!("  {:3}. {:24} v{}", slot + 1, preset.name, preset.version);
    }
}
