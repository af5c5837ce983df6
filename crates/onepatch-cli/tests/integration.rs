//! Integration tests for onepatch-cli.
//!
//! Tests invoke the `onepatch` binary against files in temporary
//! directories.

use std::path::Path;
use std::process::{Command, Output};

use onepatch_core::{Bank, Preset, decode_fxb, decode_fxp, decode_reason, encode_fxb, encode_fxp};
use tempfile::TempDir;

/// The `onepatch` binary, isolated from the user's settings.
fn onepatch(config_home: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_onepatch"));
    cmd.env("XDG_CONFIG_HOME", config_home)
        .env("HOME", config_home)
        .env_remove("RUST_LOG");
    cmd
}

fn run(cmd: &mut Command) -> Output {
    cmd.output().expect("failed to run onepatch")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

fn write_fxp(dir: &Path, file: &str, name: &str) -> std::path::PathBuf {
    let mut preset = Preset::new(name);
    preset.set_value("FILTER_1_CUTOFF", 0.5).unwrap();
    preset.set_value("DELAY_TIME", 0.0625).unwrap();
    let path = dir.join(file);
    std::fs::write(&path, encode_fxp(&preset)).unwrap();
    path
}

// ---------------------------------------------------------------------------
// convert
// ---------------------------------------------------------------------------

#[test]
fn cli_convert_fxp_to_reason() {
    let dir = TempDir::new().unwrap();
    let input = write_fxp(dir.path(), "lead.fxp", "Warm Lead");

    let output = run(onepatch(dir.path())
        .args(["convert", input.to_str().unwrap(), "--to", "reason", "--out-dir"])
        .arg(dir.path()));
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let out = dir.path().join("Warm Lead.repatch");
    assert!(out.exists(), "stdout: {}", stdout(&output));
    let preset = decode_reason(&std::fs::read(&out).unwrap(), "Warm Lead").unwrap();
    assert_eq!(preset.value("FILTER_1_CUTOFF"), Some(0.5));
    assert!((preset.value("DELAY_TIME").unwrap() - 0.0625).abs() < 1e-9);
}

#[test]
fn cli_convert_renames_and_sanitizes() {
    let dir = TempDir::new().unwrap();
    let input = write_fxp(dir.path(), "in.fxp", "Orig");

    let output = run(onepatch(dir.path())
        .args(["convert", input.to_str().unwrap(), "--to", "fxp", "--name", "Bass/Sub"])
        .arg("--out-dir")
        .arg(dir.path().join("out")));
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let out = dir.path().join("out").join("Bass_Sub.fxp");
    let preset = decode_fxp(&std::fs::read(out).unwrap()).unwrap();
    assert_eq!(preset.name, "Bass/Sub");
}

#[test]
fn cli_convert_refuses_to_overwrite() {
    let dir = TempDir::new().unwrap();
    let input = write_fxp(dir.path(), "pad.fxp", "Pad");
    std::fs::write(dir.path().join("Pad.aupreset"), b"keep me").unwrap();

    let args = ["convert", input.to_str().unwrap(), "--to", "au", "--out-dir"];
    let output = run(onepatch(dir.path()).args(args).arg(dir.path()));
    assert!(!output.status.success());
    assert!(stderr(&output).contains("--force"));
    assert_eq!(std::fs::read(dir.path().join("Pad.aupreset")).unwrap(), b"keep me");

    let output = run(onepatch(dir.path()).args(args).arg(dir.path()).arg("--force"));
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_ne!(std::fs::read(dir.path().join("Pad.aupreset")).unwrap(), b"keep me");
}

#[test]
fn cli_convert_needs_a_target() {
    let dir = TempDir::new().unwrap();
    let input = write_fxp(dir.path(), "x.fxp", "X");

    let output = run(onepatch(dir.path()).args(["convert", input.to_str().unwrap()]));
    assert!(!output.status.success());
    assert!(stderr(&output).contains("--to"));
}

#[test]
fn cli_convert_uses_settings_file() {
    let dir = TempDir::new().unwrap();
    let input = write_fxp(dir.path(), "keys.fxp", "Keys");
    let out_dir = dir.path().join("from-settings");
    let settings = dir.path().join("settings.toml");
    std::fs::write(
        &settings,
        format!(
            "default_format = \"au\"\noutput_dir = {:?}\n",
            out_dir.to_str().unwrap()
        ),
    )
    .unwrap();

    let output = run(onepatch(dir.path())
        .arg("--config")
        .arg(&settings)
        .args(["convert", input.to_str().unwrap()]));
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(out_dir.join("Keys.aupreset").exists());
}

#[test]
fn cli_convert_reports_corrupt_input() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("broken.fxp");
    std::fs::write(&input, b"not a preset at all").unwrap();

    let output = run(onepatch(dir.path())
        .args(["convert", input.to_str().unwrap(), "--to", "au"]));
    assert!(!output.status.success());
    let err = stderr(&output);
    assert!(err.contains("broken.fxp"), "stderr: {err}");
    assert!(err.contains("CcnK"), "stderr: {err}");
}

#[test]
fn cli_convert_unknown_extension_needs_from() {
    let dir = TempDir::new().unwrap();
    let fxp = write_fxp(dir.path(), "lead.fxp", "Lead");
    let odd = dir.path().join("lead.bin");
    std::fs::rename(&fxp, &odd).unwrap();

    let args = ["convert", odd.to_str().unwrap(), "--to", "reason", "--out-dir"];
    let output = run(onepatch(dir.path()).args(args).arg(dir.path()));
    assert!(!output.status.success());
    assert!(stderr(&output).contains("--from"));

    let output = run(onepatch(dir.path())
        .args(args)
        .arg(dir.path())
        .args(["--from", "fxp"]));
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(dir.path().join("Lead.repatch").exists());
}

#[test]
fn cli_convert_splits_bank_into_numbered_files() {
    let dir = TempDir::new().unwrap();
    let bank = Bank::new(vec![Preset::new("Dup/Name"), Preset::new("Dup/Name")]);
    let path = dir.path().join("dups.fxb");
    std::fs::write(&path, encode_fxb(&bank)).unwrap();

    let out_dir = dir.path().join("split");
    let output = run(onepatch(dir.path())
        .args(["convert", path.to_str().unwrap(), "--to", "au", "--out-dir"])
        .arg(&out_dir));
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    assert_eq!(std::fs::read_dir(&out_dir).unwrap().count(), 100);
    assert!(out_dir.join("001 Dup_Name.aupreset").exists());
    assert!(out_dir.join("002 Dup_Name.aupreset").exists());
    assert!(out_dir.join("100 Init.aupreset").exists());
}

// ---------------------------------------------------------------------------
// info
// ---------------------------------------------------------------------------

#[test]
fn cli_info_shows_parameters() {
    let dir = TempDir::new().unwrap();
    let input = write_fxp(dir.path(), "lead.fxp", "Warm Lead");

    let output = run(onepatch(dir.path()).args(["info", input.to_str().unwrap()]));
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let out = stdout(&output);
    assert!(out.contains("Name:        Warm Lead"));
    assert!(out.contains("Version:     1014"));
    assert!(out.contains("Parameters (108):"));
    assert!(out.contains("FILTER_1_CUTOFF"));
}

#[test]
fn cli_info_json() {
    let dir = TempDir::new().unwrap();
    let input = write_fxp(dir.path(), "lead.fxp", "Json Lead");

    let output = run(onepatch(dir.path()).args(["info", "--json", input.to_str().unwrap()]));
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let json: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(json["name"], "Json Lead");
    assert_eq!(json["parameters"].as_array().unwrap().len(), 108);
}

#[test]
fn cli_info_lists_bank_slots() {
    let dir = TempDir::new().unwrap();
    let bank = Bank::new(vec![Preset::new("First"), Preset::new("Second")]);
    let path = dir.path().join("set.fxb");
    std::fs::write(&path, encode_fxb(&bank)).unwrap();

    let output = run(onepatch(dir.path()).args(["info", path.to_str().unwrap()]));
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let out = stdout(&output);
    assert!(out.contains("Presets:     100"));
    assert!(out.contains("First"));
    assert!(out.contains("Second"));
    assert!(out.contains("Init"));
}

// ---------------------------------------------------------------------------
// bank
// ---------------------------------------------------------------------------

#[test]
fn cli_bank_pack_and_unpack() {
    let dir = TempDir::new().unwrap();
    let a = write_fxp(dir.path(), "a.fxp", "Alpha");
    let b = write_fxp(dir.path(), "b.fxp", "Beta");
    let bank_path = dir.path().join("set.fxb");

    let output = run(onepatch(dir.path())
        .args(["bank", "pack"])
        .arg(&a)
        .arg(&b)
        .arg("-o")
        .arg(&bank_path));
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let bank = decode_fxb(&std::fs::read(&bank_path).unwrap()).unwrap();
    assert_eq!(bank.len(), 100);
    assert_eq!(bank.presets[0].name, "Alpha");
    assert_eq!(bank.presets[1].name, "Beta");
    assert_eq!(bank.presets[2].name, "Init");

    let out_dir = dir.path().join("unpacked");
    let output = run(onepatch(dir.path())
        .args(["bank", "unpack"])
        .arg(&bank_path)
        .args(["--to", "fxp", "--out-dir"])
        .arg(&out_dir));
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let count = std::fs::read_dir(&out_dir).unwrap().count();
    assert_eq!(count, 100);
    let first = decode_fxp(&std::fs::read(out_dir.join("001 Alpha.fxp")).unwrap()).unwrap();
    assert_eq!(first.name, "Alpha");
    assert!(out_dir.join("100 Init.fxp").exists());
}

#[test]
fn cli_bank_pack_rejects_banks() {
    let dir = TempDir::new().unwrap();
    let inner = dir.path().join("inner.fxb");
    std::fs::write(&inner, encode_fxb(&Bank::default())).unwrap();

    let output = run(onepatch(dir.path())
        .args(["bank", "pack"])
        .arg(&inner)
        .arg("-o")
        .arg(dir.path().join("outer.fxb")));
    assert!(!output.status.success());
    assert!(stderr(&output).contains("already a bank"));
}

#[test]
fn cli_bank_unpack_rejects_fxb_target() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("set.fxb");
    std::fs::write(&path, encode_fxb(&Bank::default())).unwrap();

    let output = run(onepatch(dir.path())
        .args(["bank", "unpack"])
        .arg(&path)
        .args(["--to", "fxb"]));
    assert!(!output.status.success());
}

// ---------------------------------------------------------------------------
// config
// ---------------------------------------------------------------------------

#[test]
fn cli_config_shows_defaults() {
    let dir = TempDir::new().unwrap();
    let output = run(onepatch(dir.path()).arg("config"));
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let out = stdout(&output);
    assert!(out.contains("not found, using defaults"));
    assert!(out.contains("overwrite = false"));
}

#[test]
fn cli_config_rejects_bad_settings() {
    let dir = TempDir::new().unwrap();
    let settings = dir.path().join("bad.toml");
    std::fs::write(&settings, "default_format = \"wav\"\n").unwrap();

    let output = run(onepatch(dir.path()).arg("--config").arg(&settings).arg("config"));
    assert!(!output.status.success());
    assert!(stderr(&output).contains("default_format"));
}

#[test]
fn cli_help_lists_commands() {
    let dir = TempDir::new().unwrap();
    let output = run(onepatch(dir.path()).arg("--help"));
    assert!(output.status.success());
    let out = stdout(&output);
    for command in ["convert", "info", "bank", "config"] {
        assert!(out.contains(command), "help should list '{command}'");
    }
}
