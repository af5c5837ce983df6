//! Show the effective settings.

use crate::settings::Loaded;

/// Run the config command.
pub fn run(loaded: &Loaded) -> anyhow::Result<()> {
    let status = if loaded.found { "" } else { " (not found, using defaults)" };
    println!("Settings file: {}{status}", loaded.path.display());
    println!();
    print!("{}", loaded.settings.to_toml()?);
    Ok(())
}
