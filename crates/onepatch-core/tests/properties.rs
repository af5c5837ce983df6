//! Property-based tests for the preset codecs.
//!
//! Verifies round-trip and quantization laws over randomized presets using
//! proptest.

use onepatch_core::{
    Parameter, ParamKind, Preset, Steps, decode_au, decode_fxp, decode_reason, encode_au,
    encode_fxp, encode_reason, schema,
};
use proptest::prelude::*;

/// A preset with every parameter set from `values` (cycled if short).
fn preset_from(name: &str, values: &[f64]) -> Preset {
    let mut preset = Preset::new(name);
    for (param, &value) in preset.iter_mut().zip(values.iter().cycle()) {
        param.set_normalized_value(value).unwrap();
    }
    preset
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// FXP round trip preserves every logical value at f32 precision.
    #[test]
    fn fxp_roundtrip_preserves_logical_values(
        values in prop::collection::vec(0.0f64..=1.0, schema::len()),
        name in "[A-Za-z0-9 ]{0,24}",
    ) {
        let original = preset_from(&name, &values);
        let decoded = decode_fxp(&encode_fxp(&original)).unwrap();

        prop_assert_eq!(&decoded.name, &name);
        for (a, b) in original.iter().zip(decoded.iter()) {
            let narrowed = f64::from(a.normalized_value() as f32);
            prop_assert_eq!(narrowed, b.normalized_value());
            let mut expected = a.clone();
            expected.set_normalized_value(narrowed).unwrap();
            prop_assert_eq!(expected.logical_value(), b.logical_value());
        }
    }

    /// AU wraps FXP, so the same precision law holds.
    #[test]
    fn au_roundtrip_matches_fxp(values in prop::collection::vec(0.0f64..=1.0, 16)) {
        let original = preset_from("AU", &values);
        let via_au = decode_au(&encode_au(&original)).unwrap();
        let via_fxp = decode_fxp(&encode_fxp(&original)).unwrap();
        prop_assert_eq!(via_au, via_fxp);
    }

    /// Free-running delay survives the fourth-root/fourth-power trip,
    /// including values outside the unit range.
    #[test]
    fn reason_free_delay_inverse_law(v in -0.5f64..1.5) {
        let mut preset = Preset::new("Free");
        preset.set_value("DELAY_TIME", v).unwrap();

        let decoded = decode_reason(&encode_reason(&preset), "Free").unwrap();
        let back = decoded.value("DELAY_TIME").unwrap();
        prop_assert!((back - v).abs() < 1e-12 * v.abs().max(1.0), "{} != {}", back, v);
    }

    /// Synced delay and LFO rate pass through untouched.
    #[test]
    fn reason_synced_values_are_exact(delay in 0.0f64..=1.0, rate in 0.0f64..=1.0) {
        let mut preset = Preset::new("Sync");
        preset.set_value("DELAY_SYNC", 1.0).unwrap();
        preset.set_value("LFO_2_SYNC", 1.0).unwrap();
        preset.set_value("DELAY_TIME", delay).unwrap();
        preset.set_value("LFO_2_RATE", rate).unwrap();

        let decoded = decode_reason(&encode_reason(&preset), "Sync").unwrap();
        prop_assert_eq!(decoded.value("DELAY_TIME"), Some(delay));
        prop_assert_eq!(decoded.value("LFO_2_RATE"), Some(rate));
    }

    /// Reason round trip preserves logical values of directly exported parameters.
    #[test]
    fn reason_roundtrip_preserves_logical_values(
        values in prop::collection::vec(0.0f64..=1.0, schema::len()),
    ) {
        let original = preset_from("Patch", &values);
        let decoded = decode_reason(&encode_reason(&original), "Patch").unwrap();

        for (a, b) in original.iter().zip(decoded.iter()) {
            if ["DELAY_TIME", "LFO_2_RATE", "MOD_ENV_DEPTH"].contains(&a.name()) {
                continue;
            }
            if a.kind() == ParamKind::Boolean {
                prop_assert_eq!(a.is_on(), b.is_on());
            } else {
                prop_assert_eq!(a.logical_value(), b.logical_value(), "{}", a.name());
            }
        }
    }

    /// Formatting then parsing reproduces the logical value.
    #[test]
    fn formatted_value_roundtrip(steps in 2u32..200, v in -0.5f64..1.5) {
        let mut p = Parameter::new("P", ParamKind::Number, Steps::Discrete(steps));
        p.set_normalized_value(v).unwrap();
        let logical = p.logical_value();
        let text = p.formatted_value();
        p.set_formatted_value(&text).unwrap();
        prop_assert_eq!(p.logical_value(), logical);
    }

    /// Stepped logical values are always whole numbers.
    #[test]
    fn stepped_logical_is_whole(steps in 2u32..200, v in 0.0f64..=1.0) {
        let mut p = Parameter::new("P", ParamKind::Number, Steps::Discrete(steps));
        p.set_normalized_value(v).unwrap();
        let logical = p.logical_value();
        prop_assert_eq!(logical.fract(), 0.0);
        prop_assert!(logical >= 0.0 && logical <= f64::from(steps - 1));
    }
}
