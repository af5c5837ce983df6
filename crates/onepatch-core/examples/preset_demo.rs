//! Preset demo: build a patch, inspect its parameters, and convert it.
//!
//! Run with: cargo run -p onepatch-core --example preset_demo

use onepatch_core::{
    Bank, DerivedParams, Format, Preset, decode_fxb, decode_reason, encode_fxb, format,
};

fn main() {
    // --- Building a preset ---
    println!("=== Preset ===\n");

    let mut preset = Preset::new("Demo Bass");
    preset.set_value("OSC_1_WAVEFORM", 1.0).unwrap();
    preset.set_value("OSC_1_OCTAVE", 0.4).unwrap();
    preset.set_value("FILTER_1_CUTOFF", 0.35).unwrap();
    preset.set_value("DELAY_TIME", 0.2).unwrap();
    preset.set_value("LFO_2_RATE", 0.6).unwrap();

    println!("{:<18} {:>10} {:>10} {:>10}", "Parameter", "Normalized", "Logical", "Formatted");
    println!("{:-<18} {:->10} {:->10} {:->10}", "", "", "", "");
    for name in ["OSC_1_WAVEFORM", "OSC_1_OCTAVE", "FILTER_1_CUTOFF", "LFO_2_SYNC"] {
        let p = preset.get(name).unwrap();
        println!(
            "{:<18} {:>10.4} {:>10.4} {:>10}",
            p.name(),
            p.normalized_value(),
            p.logical_value(),
            p.formatted_value()
        );
    }

    // --- Reason-only knobs ---
    println!("\n=== Derived Reason Parameters ===\n");

    for (name, value) in DerivedParams::from_preset(&preset).entries() {
        println!("  {name:<16} {value:.6}");
    }

    // --- Conversion ---
    println!("\n=== Conversion ===\n");

    for target in Format::ALL {
        let bytes = format::encode_preset(&preset, target);
        println!(
            "  {:<8} {:>6} bytes -> {}",
            target.to_string(),
            bytes.len(),
            format::suggested_file_name(&preset.name, target)
        );
    }

    let repatch = format::encode_preset(&preset, Format::Reason);
    let back = decode_reason(&repatch, "Demo Bass").unwrap();
    println!(
        "\n  DELAY_TIME after Reason round trip: {:.9} (was {:.9})",
        back.value("DELAY_TIME").unwrap(),
        preset.value("DELAY_TIME").unwrap()
    );

    // --- Banks ---
    println!("\n=== Bank ===\n");

    let bank: Bank = [preset, Preset::new("Second")].into_iter().collect();
    let decoded = decode_fxb(&encode_fxb(&bank)).unwrap();
    println!("  {} slots written, first three:", decoded.len());
    for (slot, p) in decoded.iter().take(3).enumerate() {
        println!("    {:3}. {}", slot + 1, p.name);
    }
}
