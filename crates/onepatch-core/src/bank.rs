//! A bank of up to 100 presets.

use serde::Serialize;

use crate::factory_presets::init_preset;
use crate::preset::Preset;

/// Number of program slots in a kHs ONE bank.
pub const BANK_SIZE: usize = 100;

/// An ordered collection of presets, as stored in an FXB file.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Bank {
    /// Presets in slot order.
    pub presets: Vec<Preset>,
}

impl Bank {
    /// Create a bank from presets. Anything past slot 100 is kept in memory
    /// but dropped when the bank is encoded.
    pub fn new(presets: Vec<Preset>) -> Self {
        if presets.len() > BANK_SIZE {
            tracing::warn!(
                count = presets.len(),
                "bank holds more than {BANK_SIZE} presets; only the first {BANK_SIZE} will be written"
            );
        }
        Self { presets }
    }

    /// Append a preset. Returns `false` and leaves the bank unchanged when it is full.
    pub fn push(&mut self, preset: Preset) -> bool {
        if self.presets.len() >= BANK_SIZE {
            tracing::warn!(name = %preset.name, "bank already has {BANK_SIZE} presets; not adding");
            return false;
        }
        self.presets.push(preset);
        true
    }

    /// Number of presets.
    pub fn len(&self) -> usize {
        self.presets.len()
    }

    /// Check if the bank is empty.
    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }

    /// Iterate over presets in slot order.
    pub fn iter(&self) -> impl Iterator<Item = &Preset> {
        self.presets.iter()
    }

    /// Exactly [`BANK_SIZE`] presets: the first 100, padded with the init preset.
    pub fn normalized_presets(&self) -> Vec<Preset> {
        let mut presets: Vec<Preset> = self.presets.iter().take(BANK_SIZE).cloned().collect();
        if presets.len() < BANK_SIZE {
            tracing::debug!(count = presets.len(), "padding bank with init preset");
            let init = init_preset();
            presets.resize(BANK_SIZE, init);
        }
        presets
    }
}

impl FromIterator<Preset> for Bank {
    fn from_iter<I: IntoIterator<Item = Preset>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
