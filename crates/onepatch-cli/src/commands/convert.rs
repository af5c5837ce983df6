//! Convert a preset or bank to another format.

use std::path::PathBuf;

use clap::Args;
use onepatch_core::{Document, Format, format};

use super::common::{file_stem, output_dir, read_document, target_format, write_output};
use crate::settings::Settings;

/// Convert a preset or bank file.
#[derive(Args)]
pub struct ConvertArgs {
    /// Input file (.fxp, .fxb, .aupreset or .repatch)
    pub input: PathBuf,

    /// Target format: fxp, fxb, au or reason
    #[arg(short, long)]
    pub to: Option<Format>,

    /// Input format, when the extension does not tell
    #[arg(long)]
    pub from: Option<Format>,

    /// Directory for converted files
    #[arg(short, long)]
    pub out_dir: Option<PathBuf>,

    /// Rename the preset (or the bank file) on the way out
    #[arg(short, long)]
    pub name: Option<String>,

    /// Overwrite existing files
    #[arg(short, long)]
    pub force: bool,
}

/// Run the convert command.
pub fn run(args: ConvertArgs, settings: &Settings) -> anyhow::Result<()> {
    let target = target_format(args.to, settings)?;
    let dir = output_dir(args.out_dir, settings);
    let overwrite = args.force || settings.overwrite;

    let (source, mut document) = read_document(&args.input, args.from)?;
    tracing::info!(input = %args.input.display(), %source, %target, "converting");

    let bank_stem = match (&mut document, &args.name) {
        (Document::Preset(preset), Some(name)) => {
            preset.name.clone_from(name);
            file_stem(&args.input)
        }
        (Document::Bank(_), Some(name)) if target == Format::Fxb => name.clone(),
        (Document::Bank(_), Some(_)) => {
            tracing::warn!("--name is ignored when splitting a bank");
            file_stem(&args.input)
        }
        (_, None) => file_stem(&args.input),
    };

    let mut written = Vec::new();
    for encoded in format::encode(&document, target, &bank_stem) {
        let path = dir.join(&encoded.file_name);
        write_output(&path, &encoded.bytes, overwrite)?;
        written.push(path);
    }

    for path in &written {
        println!("Wrote {}", path.display());
    }
    Ok(())
}
