//! A single kHs ONE parameter and its three representations.
//!
//! Every parameter stores one normalized value. The other views are derived
//! from it on demand:
//!
//! - **Normalized**: what the plugin saves in FXP/FXB chunks, nominally `[0, 1]`
//! - **Logical**: the value a user sees; stepped parameters quantize to
//!   `0..steps-1`
//! - **Formatted**: the text written to Reason patches (`"true"`/`"false"`
//!   for booleans, a decimal number otherwise)
//!
//! Normalized values are never clamped. Presets saved by the plugin can hold
//! slightly out-of-range values and they are carried through unchanged.
//!
//! # Rounding
//!
//! Stepped parameters round half to even, so with four steps a normalized
//! `0.5` (logical `1.5`) becomes `2` and with six steps (`2.5`) becomes `2`.

use serde::Serialize;

use crate::error::DecodeError;

/// The value type a parameter exposes to hosts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamKind {
    /// A numeric value, continuous or stepped.
    Number,
    /// An on/off switch.
    Boolean,
}

impl ParamKind {
    /// The `type` attribute used in Reason patches.
    pub fn as_str(self) -> &'static str {
        match self {
            ParamKind::Number => "number",
            ParamKind::Boolean => "boolean",
        }
    }
}

/// Quantization of a parameter's logical value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Steps {
    /// Logical value equals the normalized value.
    Continuous,
    /// Logical value is one of `n` levels spanning `0..=n-1`.
    Discrete(u32),
}

impl Steps {
    /// Largest logical value, or `None` for continuous parameters.
    fn max_level(self) -> Option<f64> {
        match self {
            Steps::Continuous => None,
            Steps::Discrete(n) => Some(f64::from(n.saturating_sub(1))),
        }
    }
}

/// A named, typed parameter holding a normalized value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Parameter {
    name: &'static str,
    kind: ParamKind,
    steps: Steps,
    normalized_value: f64,
}

impl Parameter {
    /// Create a parameter at normalized `0.0`.
    pub const fn new(name: &'static str, kind: ParamKind, steps: Steps) -> Self {
        Self {
            name,
            kind,
            steps,
            normalized_value: 0.0,
        }
    }

    /// Stable identifier of this parameter.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Number or boolean.
    pub fn kind(&self) -> ParamKind {
        self.kind
    }

    /// Continuous or stepped.
    pub fn steps(&self) -> Steps {
        self.steps
    }

    /// The stored normalized value.
    #[inline]
    pub fn normalized_value(&self) -> f64 {
        self.normalized_value
    }

    /// Replace the normalized value. Non-finite values are rejected.
    pub fn set_normalized_value(&mut self, value: f64) -> Result<(), DecodeError> {
        if !value.is_finite() {
            return Err(DecodeError::invalid_value(self.name, value));
        }
        self.normalized_value = value;
        Ok(())
    }

    /// Whether a switch-like parameter is engaged (normalized above one half).
    #[inline]
    pub fn is_on(&self) -> bool {
        self.normalized_value > 0.5
    }

    /// The user-facing value, quantized for stepped parameters.
    pub fn logical_value(&self) -> f64 {
        match self.steps.max_level() {
            None => self.normalized_value,
            Some(max) => (self.normalized_value * max).round_ties_even(),
        }
    }

    /// Set from a user-facing value.
    pub fn set_logical_value(&mut self, value: f64) -> Result<(), DecodeError> {
        if !value.is_finite() {
            return Err(DecodeError::invalid_value(self.name, value));
        }
        self.normalized_value = match self.steps.max_level() {
            None => value,
            Some(max) if max > 0.0 => value / max,
            Some(_) => 0.0,
        };
        Ok(())
    }

    /// Text form used by the Reason patch format.
    pub fn formatted_value(&self) -> String {
        match self.kind {
            ParamKind::Boolean => String::from(if self.is_on() { "true" } else { "false" }),
            ParamKind::Number => format_number(self.logical_value()),
        }
    }

    /// Set from the Reason text form.
    pub fn set_formatted_value(&mut self, text: &str) -> Result<(), DecodeError> {
        let text = text.trim();
        match self.kind {
            ParamKind::Boolean => {
                self.normalized_value = if text == "true" { 1.0 } else { 0.0 };
                Ok(())
            }
            ParamKind::Number => {
                let value = text
                    .parse::<f64>()
                    .map_err(|_| DecodeError::invalid_value(self.name, text))?;
                self.set_logical_value(value)
            }
        }
    }
}

/// Render a number without a fractional part when it is whole.
pub(crate) fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}
