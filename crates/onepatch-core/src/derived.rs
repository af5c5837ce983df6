//! Reason-only views of the delay time and LFO 2 rate.
//!
//! The Reason device exposes `DELAY_TIME` and `LFO_2_RATE` as two knobs
//! each, one free-running and one tempo-synced, and lets `DELAY_SYNC` and
//! `LFO_2_SYNC` choose between them. The plugin chunk only stores the single
//! underlying value, so exporting fans it out ([`DerivedParams`]) and
//! importing folds the selected knob back in ([`TransferParams`]).

use crate::error::DecodeError;
use crate::preset::Preset;
use crate::schema::{
    DELAY_SYNC, DELAY_TIME, DELAY_TIME_16TH, DELAY_TIME_MS, LFO_2_RATE, LFO_2_RATE_FREE,
    LFO_2_RATE_SYNC, LFO_2_SYNC,
};

/// Derived values computed from a preset for export.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivedParams {
    /// `DELAY_TIME ** 0.25`, keeping the sign of `DELAY_TIME`.
    pub delay_time_ms: f64,
    /// `DELAY_TIME` unchanged.
    pub delay_time_16th: f64,
    /// `LFO_2_RATE` unchanged.
    pub lfo_2_rate_free: f64,
    /// `LFO_2_RATE` unchanged.
    pub lfo_2_rate_sync: f64,
}

impl DerivedParams {
    /// Fan the stored values out into their Reason views.
    pub fn from_preset(preset: &Preset) -> Self {
        let delay_time = preset.value(DELAY_TIME).unwrap_or_default();
        let lfo_2_rate = preset.value(LFO_2_RATE).unwrap_or_default();
        Self {
            delay_time_ms: delay_time.signum() * delay_time.abs().powf(0.25),
            delay_time_16th: delay_time,
            lfo_2_rate_free: lfo_2_rate,
            lfo_2_rate_sync: lfo_2_rate,
        }
    }

    /// Name/value pairs in patch order.
    pub fn entries(&self) -> [(&'static str, f64); 4] {
        [
            (DELAY_TIME_MS, self.delay_time_ms),
            (DELAY_TIME_16TH, self.delay_time_16th),
            (LFO_2_RATE_FREE, self.lfo_2_rate_free),
            (LFO_2_RATE_SYNC, self.lfo_2_rate_sync),
        ]
    }
}

/// Derived values collected while reading a Reason patch.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TransferParams {
    /// Value of `DELAY_TIME_MS`, if present.
    pub delay_time_ms: Option<f64>,
    /// Value of `DELAY_TIME_16TH`, if present.
    pub delay_time_16th: Option<f64>,
    /// Value of `LFO_2_RATE_FREE`, if present.
    pub lfo_2_rate_free: Option<f64>,
    /// Value of `LFO_2_RATE_SYNC`, if present.
    pub lfo_2_rate_sync: Option<f64>,
}

impl TransferParams {
    /// Record a derived value. Returns `false` if `name` is not a derived key.
    pub fn insert(&mut self, name: &str, value: f64) -> bool {
        let slot = match name {
            DELAY_TIME_MS => &mut self.delay_time_ms,
            DELAY_TIME_16TH => &mut self.delay_time_16th,
            LFO_2_RATE_FREE => &mut self.lfo_2_rate_free,
            LFO_2_RATE_SYNC => &mut self.lfo_2_rate_sync,
            _ => return false,
        };
        *slot = Some(value);
        true
    }

    /// Write `DELAY_TIME` and `LFO_2_RATE` back from the knobs the sync
    /// switches select. Only the selected key has to be present.
    pub fn reconcile(&self, preset: &mut Preset) -> Result<(), DecodeError> {
        let delay_time = if preset.is_on(DELAY_SYNC) {
            require(self.delay_time_16th, DELAY_TIME_16TH)?
        } else {
            let ms = require(self.delay_time_ms, DELAY_TIME_MS)?;
            ms.signum() * ms.powi(4)
        };
        preset.set_value(DELAY_TIME, delay_time)?;

        let lfo_2_rate = if preset.is_on(LFO_2_SYNC) {
            require(self.lfo_2_rate_sync, LFO_2_RATE_SYNC)?
        } else {
            require(self.lfo_2_rate_free, LFO_2_RATE_FREE)?
        };
        preset.set_value(LFO_2_RATE, lfo_2_rate)?;

        tracing::trace!(delay_time, lfo_2_rate, "reconciled derived parameters");
        Ok(())
    }
}

fn require(value: Option<f64>, name: &str) -> Result<f64, DecodeError> {
    value.ok_or_else(|| DecodeError::MissingTransferParameter(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forward_takes_fourth_root_of_delay() {
        let mut preset = Preset::new("Fwd");
        preset.set_value(DELAY_TIME, 0.0625).unwrap();
        preset.set_value(LFO_2_RATE, 0.3).unwrap();

        let derived = DerivedParams::from_preset(&preset);
        assert!((derived.delay_time_ms - 0.5).abs() < 1e-12);
        assert_eq!(derived.delay_time_16th, 0.0625);
        assert_eq!(derived.lfo_2_rate_free, 0.3);
        assert_eq!(derived.lfo_2_rate_sync, 0.3);
    }

    #[test]
    fn entries_are_in_patch_order() {
        let derived = DerivedParams::from_preset(&Preset::new("Order"));
        let names: Vec<_> = derived.entries().iter().map(|(n, _)| *n).collect();
        assert_eq!(
            names,
            [DELAY_TIME_MS, DELAY_TIME_16TH, LFO_2_RATE_FREE, LFO_2_RATE_SYNC]
        );
    }

    #[test]
    fn insert_rejects_other_names() {
        let mut transfer = TransferParams::default();
        assert!(transfer.insert(DELAY_TIME_MS, 0.5));
        assert!(!transfer.insert(DELAY_TIME, 0.5));
        assert_eq!(transfer.delay_time_ms, Some(0.5));
    }

    #[test]
    fn free_delay_uses_fourth_power() {
        let mut preset = Preset::new("Free");
        let transfer = TransferParams {
            delay_time_ms: Some(0.5),
            lfo_2_rate_free: Some(0.2),
            ..TransferParams::default()
        };
        transfer.reconcile(&mut preset).unwrap();
        assert!((preset.value(DELAY_TIME).unwrap() - 0.0625).abs() < 1e-12);
        assert_eq!(preset.value(LFO_2_RATE), Some(0.2));
    }

    #[test]
    fn negative_free_delay_keeps_its_sign() {
        let mut preset = Preset::new("Negative");
        preset.set_value(DELAY_TIME, -0.0625).unwrap();

        let derived = DerivedParams::from_preset(&preset);
        assert!((derived.delay_time_ms + 0.5).abs() < 1e-12);

        let mut back = Preset::new("Negative");
        let transfer = TransferParams {
            delay_time_ms: Some(derived.delay_time_ms),
            lfo_2_rate_free: Some(0.0),
            ..TransferParams::default()
        };
        transfer.reconcile(&mut back).unwrap();
        assert!((back.value(DELAY_TIME).unwrap() + 0.0625).abs() < 1e-12);
    }

    #[test]
    fn synced_values_pass_through() {
        let mut preset = Preset::new("Sync");
        preset.set_value(DELAY_SYNC, 1.0).unwrap();
        preset.set_value(LFO_2_SYNC, 1.0).unwrap();
        let transfer = TransferParams {
            delay_time_16th: Some(0.4),
            lfo_2_rate_sync: Some(0.7),
            ..TransferParams::default()
        };
        transfer.reconcile(&mut preset).unwrap();
        assert_eq!(preset.value(DELAY_TIME), Some(0.4));
        assert_eq!(preset.value(LFO_2_RATE), Some(0.7));
    }

    #[test]
    fn missing_selected_key_fails() {
        let mut preset = Preset::new("Missing");
        preset.set_value(DELAY_SYNC, 1.0).unwrap();
        let transfer = TransferParams {
            delay_time_ms: Some(0.5),
            lfo_2_rate_free: Some(0.2),
            ..TransferParams::default()
        };
        let err = transfer.reconcile(&mut preset).unwrap_err();
        assert!(matches!(err, DecodeError::MissingTransferParameter(ref n) if n == DELAY_TIME_16TH));
    }
}
