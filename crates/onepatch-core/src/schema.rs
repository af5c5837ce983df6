//! The fixed kHs ONE parameter catalog.
//!
//! [`PARAMETERS`] is the one immutable descriptor every [`Preset`](crate::Preset)
//! is built from. Its order is the order of the little-endian float array in
//! FXP/FXB chunks, so entries must never be reordered or removed.

use crate::param::{ParamKind, Steps};

/// Static description of one parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamSpec {
    /// Stable identifier, also the Reason `property` attribute.
    pub name: &'static str,
    /// Number or boolean.
    pub kind: ParamKind,
    /// Continuous or stepped.
    pub steps: Steps,
}

impl ParamSpec {
    /// A continuous number.
    pub const fn number(name: &'static str) -> Self {
        Self {
            name,
            kind: ParamKind::Number,
            steps: Steps::Continuous,
        }
    }

    /// A number quantized to `steps` levels.
    pub const fn stepped(name: &'static str, steps: u32) -> Self {
        Self {
            name,
            kind: ParamKind::Number,
            steps: Steps::Discrete(steps),
        }
    }

    /// An on/off switch.
    pub const fn boolean(name: &'static str) -> Self {
        Self {
            name,
            kind: ParamKind::Boolean,
            steps: Steps::Continuous,
        }
    }
}

/// Delay time, stored in the chunk.
pub const DELAY_TIME: &str = "DELAY_TIME";
/// Two-step switch selecting tempo-synced delay.
pub const DELAY_SYNC: &str = "DELAY_SYNC";
/// LFO 2 rate, stored in the chunk.
pub const LFO_2_RATE: &str = "LFO_2_RATE";
/// Switch selecting tempo-synced LFO 2.
pub const LFO_2_SYNC: &str = "LFO_2_SYNC";
/// Modulation envelope depth. Not exposed by the Reason device.
pub const MOD_ENV_DEPTH: &str = "MOD_ENV_DEPTH";

/// Free-running delay time as seen by Reason (fourth root of `DELAY_TIME`).
pub const DELAY_TIME_MS: &str = "DELAY_TIME_MS";
/// Tempo-synced delay time as seen by Reason.
pub const DELAY_TIME_16TH: &str = "DELAY_TIME_16TH";
/// Free-running LFO 2 rate as seen by Reason.
pub const LFO_2_RATE_FREE: &str = "LFO_2_RATE_FREE";
/// Tempo-synced LFO 2 rate as seen by Reason.
pub const LFO_2_RATE_SYNC: &str = "LFO_2_RATE_SYNC";

/// Specs of the Reason-only derived parameters, in patch order.
pub static DERIVED: [ParamSpec; 4] = [
    ParamSpec::number(DELAY_TIME_MS),
    ParamSpec::number(DELAY_TIME_16TH),
    ParamSpec::number(LFO_2_RATE_FREE),
    ParamSpec::number(LFO_2_RATE_SYNC),
];

/// Every stored parameter, in chunk order.
pub static PARAMETERS: &[ParamSpec] = &[
    // Oscillators
    ParamSpec::stepped("OSC_1_WAVEFORM", 3),
    ParamSpec::number("OSC_1_GAIN"),
    ParamSpec::number("OSC_1_PW"),
    ParamSpec::stepped("OSC_1_OCTAVE", 11),
    ParamSpec::stepped("OSC_1_SEMI", 23),
    ParamSpec::stepped("OSC_1_CENTS", 199),
    ParamSpec::stepped("OSC_2_WAVEFORM", 3),
    ParamSpec::number("OSC_2_GAIN"),
    ParamSpec::number("OSC_2_PW"),
    ParamSpec::stepped("OSC_2_OCTAVE", 11),
    ParamSpec::stepped("OSC_2_SEMI", 23),
    ParamSpec::stepped("OSC_2_CENTS", 199),
    ParamSpec::number("OSC_SUB_SHAPE"),
    ParamSpec::number("OSC_SUB_GAIN"),
    ParamSpec::stepped("OSC_SUB_OCTAVE", 11),

    // Envelopes
    ParamSpec::number("AMP_ENV_A"),
    ParamSpec::number("AMP_ENV_D"),
    ParamSpec::number("AMP_ENV_S"),
    ParamSpec::number("AMP_ENV_R"),
    ParamSpec::number("FILTER_ENV_A"),
    ParamSpec::number("FILTER_ENV_D"),
    ParamSpec::number("FILTER_ENV_S"),
    ParamSpec::number("FILTER_ENV_R"),

    // Filters and shaper
    ParamSpec::number("FILTER_1_CUTOFF"),
    ParamSpec::number("FILTER_1_Q"),
    ParamSpec::number("FILTER_1_ENV_AMT"),
    ParamSpec::stepped("FILTER_1_MODE", 4),
    ParamSpec::number("FILTER_1_KEY_TRACK"),
    ParamSpec::stepped("SHAPER_MODE", 4),
    ParamSpec::number("SHAPER_GAIN"),
    ParamSpec::number("SHAPER_MIX"),
    ParamSpec::number("FILTER_2_CUTOFF"),
    ParamSpec::number("FILTER_2_Q"),
    ParamSpec::number("FILTER_2_ENV_AMT"),
    ParamSpec::stepped("FILTER_2_MODE", 4),
    ParamSpec::number("FILTER_2_KEY_TRACK"),

    // Chorus
    ParamSpec::number("CHORUS_DELAY"),
    ParamSpec::number("CHORUS_RATE"),
    ParamSpec::number("CHORUS_DEPTH"),
    ParamSpec::number("CHORUS_WIDTH"),
    ParamSpec::number("CHORUS_MIX"),

    // Delay
    ParamSpec::number("DELAY_TIME"),
    ParamSpec::number("DELAY_FEEDBACK"),
    ParamSpec::number("DELAY_WIDTH"),
    ParamSpec::number("DELAY_SEND"),
    ParamSpec::stepped("DELAY_SYNC", 2),

    // Voice configuration
    ParamSpec::stepped("CONF_PITCH_BEND_RANGE", 49),
    ParamSpec::stepped("CONF_UNISON_VOICES", 8),
    ParamSpec::number("CONF_UNISON_DETUNE"),
    ParamSpec::number("CONF_UNISON_WIDTH"),
    ParamSpec::number("CONF_PORTAMENTO_TIME"),
    ParamSpec::stepped("CONF_POLYPHONY", 24),

    // Mod wheel
    ParamSpec::stepped("MOD_WHEEL_TARGET_1", 48),
    ParamSpec::number("MOD_WHEEL_AMT_1"),
    ParamSpec::stepped("MOD_WHEEL_TARGET_2", 48),
    ParamSpec::number("MOD_WHEEL_AMT_2"),
    ParamSpec::stepped("MOD_WHEEL_TARGET_3", 48),
    ParamSpec::number("MOD_WHEEL_AMT_3"),

    // Modulation envelope
    ParamSpec::number("MOD_ENV_A"),
    ParamSpec::number("MOD_ENV_D"),
    ParamSpec::number("MOD_ENV_S"),
    ParamSpec::number("MOD_ENV_R"),
    ParamSpec::stepped("MOD_ENV_TARGET_1", 26),
    ParamSpec::number("MOD_ENV_AMT_1"),
    ParamSpec::stepped("MOD_ENV_TARGET_2", 26),
    ParamSpec::number("MOD_ENV_AMT_2"),
    ParamSpec::stepped("MOD_ENV_TARGET_3", 26),
    ParamSpec::number("MOD_ENV_AMT_3"),
    ParamSpec::number("MOD_ENV_DEPTH"),

    // Velocity
    ParamSpec::stepped("VELOCITY_TARGET_1", 39),
    ParamSpec::number("VELOCITY_AMT_1"),
    ParamSpec::stepped("VELOCITY_TARGET_2", 39),
    ParamSpec::number("VELOCITY_AMT_2"),
    ParamSpec::stepped("VELOCITY_TARGET_3", 39),
    ParamSpec::number("VELOCITY_AMT_3"),

    // LFO 1
    ParamSpec::number("LFO_1_RATE"),
    ParamSpec::number("LFO_1_DEPTH"),
    ParamSpec::number("LFO_1_PHASE"),
    ParamSpec::stepped("LFO_1_WAVEFORM", 6),
    ParamSpec::stepped("LFO_1_TARGET_1", 23),
    ParamSpec::number("LFO_1_AMT_1"),
    ParamSpec::stepped("LFO_1_TARGET_2", 23),
    ParamSpec::number("LFO_1_AMT_2"),
    ParamSpec::stepped("LFO_1_TARGET_3", 23),
    ParamSpec::number("LFO_1_AMT_3"),
    ParamSpec::number("LFO_1_KEY_TRACK"),

    // LFO 2
    ParamSpec::number("LFO_2_RATE"),
    ParamSpec::number("LFO_2_DEPTH"),
    ParamSpec::number("LFO_2_PHASE"),
    ParamSpec::stepped("LFO_2_WAVEFORM", 6),
    ParamSpec::boolean("LFO_2_SYNC"),
    ParamSpec::boolean("LFO_2_SAMPLE_HOLD"),
    ParamSpec::stepped("LFO_2_TARGET_1", 46),
    ParamSpec::number("LFO_2_AMT_1"),
    ParamSpec::stepped("LFO_2_TARGET_2", 46),
    ParamSpec::number("LFO_2_AMT_2"),
    ParamSpec::stepped("LFO_2_TARGET_3", 46),
    ParamSpec::number("LFO_2_AMT_3"),

    // Master
    ParamSpec::number("MASTER_GAIN"),
    ParamSpec::boolean("MASTER_LIMITER_ENABLED"),
    ParamSpec::number("MASTER_EQ_GAIN_LOW"),
    ParamSpec::number("MASTER_EQ_GAIN_HIGH"),
    ParamSpec::number("MASTER_EQ_FREQ_LOW"),
    ParamSpec::number("MASTER_EQ_FREQ_HIGH"),

    // Late additions, kept at the end to preserve chunk order
    ParamSpec::boolean("CONF_LEGATO"),
    ParamSpec::boolean("CONF_AUTO_GLIDE"),
    ParamSpec::number("OSC_1_SYNC"),
    ParamSpec::number("OSC_2_SYNC"),
];

/// Number of stored parameters.
pub fn len() -> usize {
    PARAMETERS.len()
}

/// Position of `name` in chunk order.
pub fn index_of(name: &str) -> Option<usize> {
    PARAMETERS.iter().position(|spec| spec.name == name)
}

/// Look up the spec for a stored parameter.
pub fn spec(name: &str) -> Option<&'static ParamSpec> {
    PARAMETERS.iter().find(|spec| spec.name == name)
}

/// Look up the spec for a Reason-only derived parameter.
pub fn derived_spec(name: &str) -> Option<&'static ParamSpec> {
    DERIVED.iter().find(|spec| spec.name == name)
}

/// Whether `name` is one of the Reason-only derived parameters.
pub fn is_derived(name: &str) -> bool {
    derived_spec(name).is_some()
}
