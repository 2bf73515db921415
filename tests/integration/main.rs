// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Integration tests.
//!
//! Some help for laying out these tests was taken from:
//! https://matklad.github.io/2021/02/27/delete-cargo-integration-tests.html

use std::{
    fs::File,
    io::Write,
    path::{Path, PathBuf},
    process::Output,
    str::from_utf8,
};

use assert_cmd::{output::OutputError, Command};
use indoc::indoc;
use tempfile::TempDir;

const OPE: &str = indoc! {r#"
    :HEADER
    OBSERVATION_PERIOD=2025-11-12-17:00 2025-11-13-06:00
    :PARAMETER_LIST
    TARGET1=OBJECT="M42" RA=053517.3 DEC=-052700.0 EQUINOX=2000.0
    A=OBJECT="Vega" RA=183656.3 DEC=+384701.3 EQUINOX=2000.0
    :COMMAND
    SetupField $TARGET1 $DEF_IMST
"#};

fn airmass() -> Command {
    Command::cargo_bin("airmass").unwrap()
}

fn get_cmd_output(result: Result<Output, OutputError>) -> (String, String) {
    let output = match result {
        Ok(o) => o,
        Err(o) => o.as_output().unwrap().clone(),
    };
    (
        from_utf8(&output.stdout).unwrap().to_string(),
        from_utf8(&output.stderr).unwrap().to_string(),
    )
}

fn make_file_in_dir<T: AsRef<Path>, U: AsRef<Path>>(
    filename: T,
    dir: U,
    contents: &str,
) -> PathBuf {
    let path = dir.as_ref().join(filename);
    let mut f = File::create(&path).expect("couldn't make file");
    f.write_all(contents.as_bytes()).unwrap();
    path
}

#[test]
fn test_missing_catalog_fails() {
    let tmp_dir = TempDir::new().unwrap();
    let ope = tmp_dir.path().join("missing.ope");
    let cmd = airmass().arg("--ope").arg(&ope).ok();
    assert!(cmd.is_err());
    let (_, stderr) = get_cmd_output(cmd);
    assert!(stderr.starts_with("Error: "), "{stderr}");
    assert!(stderr.contains("missing.ope"), "{stderr}");
}

#[test]
fn test_empty_catalog_fails() {
    let tmp_dir = TempDir::new().unwrap();
    let ope = make_file_in_dir("empty.ope", tmp_dir.path(), ":PARAMETER_LIST\n");
    let cmd = airmass().arg("--ope").arg(&ope).ok();
    assert!(cmd.is_err());
    let (_, stderr) = get_cmd_output(cmd);
    assert!(stderr.contains("No celestial objects"), "{stderr}");
}

#[test]
fn test_one_refresh() {
    let tmp_dir = TempDir::new().unwrap();
    let ope = make_file_in_dir("targets.ope", tmp_dir.path(), OPE);
    let cmd = airmass()
        .arg("--ope")
        .arg(&ope)
        .arg("--num-refreshes")
        .arg("1")
        .ok();
    let ok = cmd.is_ok();
    let (stdout, stderr) = get_cmd_output(cmd);
    assert!(ok, "{stdout}\n{stderr}");
    assert!(stdout.contains("Object Name: TARGET1"), "{stdout}");
    assert!(stdout.contains("Object Name: A"), "{stdout}");
    assert!(stdout.contains("RA (J2000):  05h35m17.30s"), "{stdout}");
    assert!(stdout.contains("Airmass"), "{stdout}");
    assert!(!stdout.contains("Invalid Offset"), "{stdout}");
}

#[test]
fn test_invalid_offset_is_not_fatal() {
    let tmp_dir = TempDir::new().unwrap();
    let ope = make_file_in_dir("targets.ope", tmp_dir.path(), OPE);
    #[rustfmt::skip]
    let cmd = airmass()
        .args([
            "--offset", "later",
            "--object", "A",
            "--num-refreshes", "1",
        ])
        .arg("--ope")
        .arg(&ope)
        .ok();
    let ok = cmd.is_ok();
    let (stdout, stderr) = get_cmd_output(cmd);
    assert!(ok, "{stdout}\n{stderr}");
    assert!(stdout.contains("Invalid Offset"), "{stdout}");
    assert!(!stdout.contains("TARGET1"), "{stdout}");
}

#[test]
fn test_huge_offset_is_invalid() {
    let tmp_dir = TempDir::new().unwrap();
    let ope = make_file_in_dir("targets.ope", tmp_dir.path(), OPE);
    #[rustfmt::skip]
    let cmd = airmass()
        .args([
            "--offset", "-1e12",
            "--object", "A",
            "--num-refreshes", "1",
        ])
        .arg("--ope")
        .arg(&ope)
        .ok();
    let ok = cmd.is_ok();
    let (stdout, stderr) = get_cmd_output(cmd);
    assert!(ok, "{stdout}\n{stderr}");
    assert!(stdout.contains("too far from the current time"), "{stdout}");
    assert!(stdout.contains("Invalid Offset"), "{stdout}");
}

#[test]
fn test_dry_run() {
    let tmp_dir = TempDir::new().unwrap();
    let ope = make_file_in_dir("targets.ope", tmp_dir.path(), OPE);
    let cmd = airmass().arg("--ope").arg(&ope).arg("--dry-run").ok();
    let ok = cmd.is_ok();
    let (stdout, stderr) = get_cmd_output(cmd);
    assert!(ok, "{stdout}\n{stderr}");
    assert!(stdout.contains("Dry run"), "{stdout}");
    assert!(!stdout.contains("Observation Details"), "{stdout}");
}

#[test]
fn test_unknown_object_fails() {
    let tmp_dir = TempDir::new().unwrap();
    let ope = make_file_in_dir("targets.ope", tmp_dir.path(), OPE);
    let cmd = airmass()
        .arg("--ope")
        .arg(&ope)
        .args(["--object", "Z", "--dry-run"])
        .ok();
    assert!(cmd.is_err());
    let (_, stderr) = get_cmd_output(cmd);
    assert!(stderr.contains("'Z'"), "{stderr}");
}

#[test]
fn test_toml_args_file_and_save_toml() {
    let tmp_dir = TempDir::new().unwrap();
    let ope = make_file_in_dir("targets.ope", tmp_dir.path(), OPE);
    let args_file = make_file_in_dir(
        "args.toml",
        tmp_dir.path(),
        &format!(
            "[observe]\nope = {:?}\noffset = \"-30\"\nnum_refreshes = 1\n",
            ope.display().to_string()
        ),
    );
    let saved = tmp_dir.path().join("saved.toml");
    let cmd = airmass()
        .arg(&args_file)
        .arg("--save-toml")
        .arg(&saved)
        .ok();
    let ok = cmd.is_ok();
    let (stdout, stderr) = get_cmd_output(cmd);
    assert!(ok, "{stdout}\n{stderr}");
    assert!(stdout.contains("Future offset: -30 minutes"), "{stdout}");

    let saved = std::fs::read_to_string(saved).unwrap();
    assert!(saved.contains("[observe]"), "{saved}");
    assert!(saved.contains("offset = \"-30\""), "{saved}");
}
