//! Bank management commands.
//!
//! Packs single presets into an FXB bank and unpacks a bank into one file
//! per slot.

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Args, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use onepatch_core::{BANK_SIZE, Bank, Document, Format, decode_fxb, encode_fxb, format};

use super::common::{file_stem, output_dir, read_document, target_format, write_output};
use crate::settings::Settings;

/// Pack or unpack FXB banks.
#[derive(Args)]
pub struct BankArgs {
    #[command(subcommand)]
    command: BankCommand,
}

#[derive(Subcommand)]
enum BankCommand {
    /// Pack single presets into an FXB bank (empty slots get the init patch)
    Pack {
        /// Preset files, in slot order
        #[arg(required = true)]
        inputs: Vec<PathBuf>,

        /// Output bank file
        #[arg(short, long)]
        output: PathBuf,

        /// Overwrite an existing bank
        #[arg(short, long)]
        force: bool,
    },

    /// Write every slot of an FXB bank as its own file
    Unpack {
        /// Bank file
        bank: PathBuf,

        /// Target format: fxp, au or reason
        #[arg(short, long)]
        to: Option<Format>,

        /// Directory for the unpacked presets
        #[arg(short, long)]
        out_dir: Option<PathBuf>,

        /// Overwrite existing files
        #[arg(short, long)]
        force: bool,
    },
}

/// Run the bank command.
pub fn run(args: BankArgs, settings: &Settings) -> anyhow::Result<()> {
    match args.command {
        BankCommand::Pack {
            inputs,
            output,
            force,
        } => pack(&inputs, &output, force || settings.overwrite),
        BankCommand::Unpack {
            bank,
            to,
            out_dir,
            force,
        } => unpack(
            &bank,
            target_format(to, settings)?,
            &output_dir(out_dir, settings),
            force || settings.overwrite,
        ),
    }
}

fn pack(inputs: &[PathBuf], output: &Path, overwrite: bool) -> anyhow::Result<()> {
    if inputs.len() > BANK_SIZE {
        anyhow::bail!(
            "A bank holds at most {BANK_SIZE} presets, got {}.",
            inputs.len()
        );
    }

    let mut bank = Bank::default();
    for input in inputs {
        match read_document(input, None)? {
            (_, Document::Preset(preset)) => {
                tracing::debug!(input = %input.display(), name = %preset.name, "adding preset");
                bank.push(preset);
            }
            (_, Document::Bank(_)) => anyhow::bail!(
                "'{}' is already a bank. Unpack it first.",
                input.display()
            ),
        }
    }

    write_output(output, &encode_fxb(&bank), overwrite)?;
    println!(
        "Packed {} preset(s) into {} ({} init slot(s))",
        bank.len(),
        output.display(),
        BANK_SIZE - bank.len()
    );
    Ok(())
}

fn unpack(
    path: &Path,
    target: Format,
    dir: &Path,
    overwrite: bool,
) -> anyhow::Result<()> {
    if target.is_bank() {
        anyhow::bail!("Cannot unpack a bank into {target}. Choose fxp, au or reason.");
    }

    let bytes =
        std::fs::read(path).with_context(|| format!("failed to read '{}'", path.display()))?;
    let bank = decode_fxb(&bytes)
        .with_context(|| format!("failed to decode '{}' as fxb", path.display()))?;
    tracing::info!(bank = %path.display(), presets = bank.len(), %target, "unpacking");

    let count = bank.len();
    let files = format::encode(&Document::Bank(bank), target, &file_stem(path));
    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})")?
            .progress_chars("##-"),
    );

    for encoded in &files {
        write_output(&dir.join(&encoded.file_name), &encoded.bytes, overwrite)?;
        pb.inc(1);
    }
    pb.finish_and_clear();

    println!("Unpacked {count} preset(s) into {}", dir.display());
    Ok(())
}
