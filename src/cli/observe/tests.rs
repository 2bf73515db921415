// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::io::Write;

use approx::assert_abs_diff_eq;
use clap::Parser;
use indoc::indoc;
use tempfile::{Builder, NamedTempFile};

use super::ObserveArgs;
use crate::{constants::DEFAULT_OFFSET_MINUTES, AirmassError};

const OPE: &str = indoc! {r#"
    :PARAMETER_LIST
    TARGET1=OBJECT="M42" RA=053517.3 DEC=-052700.0 EQUINOX=2000.0
    A=OBJECT="Vega" RA=183656.3 DEC=+384701.3 EQUINOX=2000.0
    B=OBJECT="Polaris" RA=023149.1 DEC=+891551.3 EQUINOX=2000.0
"#};

fn write_ope(contents: &str) -> NamedTempFile {
    let mut f = Builder::new().suffix(".ope").tempfile().unwrap();
    f.write_all(contents.as_bytes()).unwrap();
    f.flush().unwrap();
    f
}

fn args(extra: &[&str]) -> ObserveArgs {
    let mut v = vec!["airmass"];
    v.extend_from_slice(extra);
    ObserveArgs::parse_from(v)
}

#[test]
fn test_defaults_show_every_target_sorted() {
    let ope = write_ope(OPE);
    let path = ope.path().display().to_string();
    let params = args(&["--ope", &path]).parse().unwrap();

    let keys: Vec<&str> = params.targets.iter().map(|(k, _)| k.as_str()).collect();
    assert_eq!(keys, ["A", "B", "TARGET1"]);
    assert_eq!(params.offset_text, DEFAULT_OFFSET_MINUTES);
    assert_abs_diff_eq!(params.dut1, 0.0);
    assert!(params.num_refreshes.is_none());
    assert_abs_diff_eq!(params.site.latitude_rad.to_degrees(), 19.825556, epsilon = 1e-9);
}

#[test]
fn test_object_selection() {
    let ope = write_ope(OPE);
    let path = ope.path().display().to_string();
    let params = args(&["--ope", &path, "--object", "TARGET1", "A", "TARGET1"])
        .parse()
        .unwrap();
    let keys: Vec<&str> = params.targets.iter().map(|(k, _)| k.as_str()).collect();
    assert_eq!(keys, ["TARGET1", "A"]);

    let result = args(&["--ope", &path, "--object", "C"]).parse();
    match result {
        Err(AirmassError::Observe(s)) => {
            assert!(s.contains("'C'"));
            assert!(s.contains("A, B, TARGET1"));
        }
        Err(e) => panic!("Unexpected error: {e}"),
        Ok(_) => panic!("Expected an error"),
    }
}

#[test]
fn test_overrides() {
    let ope = write_ope(OPE);
    let path = ope.path().display().to_string();
    #[rustfmt::skip]
    let params = args(&[
        "--ope", &path,
        "--offset", "-15",
        "--site", "-70.7", "-30.2", "2700",
        "--dut1", "-0.1",
        "--num-refreshes", "3",
    ])
    .parse()
    .unwrap();

    assert_eq!(params.offset_text, "-15");
    assert_abs_diff_eq!(params.site.longitude_rad.to_degrees(), -70.7, epsilon = 1e-10);
    assert_abs_diff_eq!(params.site.latitude_rad.to_degrees(), -30.2, epsilon = 1e-10);
    assert_abs_diff_eq!(params.site.height_metres, 2700.0);
    assert_abs_diff_eq!(params.dut1, -0.1);
    assert_eq!(params.num_refreshes.map(|n| n.get()), Some(3));
}

#[test]
fn test_invalid_offset_is_not_fatal() {
    let ope = write_ope(OPE);
    let path = ope.path().display().to_string();
    let params = args(&["--ope", &path, "--offset", "soon"]).parse().unwrap();
    assert_eq!(params.offset_text, "soon");

    let params = args(&["--ope", &path, "--offset", "1e300"]).parse().unwrap();
    assert_eq!(params.offset_text, "1e300");
}

#[test]
fn test_bad_arguments() {
    let ope = write_ope(OPE);
    let path = ope.path().display().to_string();

    let result = args(&["--ope", &path, "--site", "0", "95", "0"]).parse();
    assert!(matches!(result, Err(AirmassError::Observe(_))));

    let result = args(&["--ope", &path, "--num-refreshes", "0"]).parse();
    assert!(matches!(result, Err(AirmassError::Observe(_))));
}

#[test]
fn test_catalog_errors() {
    let result = args(&["--ope", "/does/not/exist.ope"]).parse();
    assert!(matches!(result, Err(AirmassError::Generic(_))));

    let ope = write_ope("nothing to see here\n");
    let path = ope.path().display().to_string();
    match args(&["--ope", &path]).parse() {
        Err(AirmassError::Catalog(s)) => assert!(s.contains("No celestial objects")),
        Err(e) => panic!("Unexpected error: {e}"),
        Ok(_) => panic!("Expected an error"),
    }
}

#[test]
fn test_toml_arg_file_is_overridden_by_cli() {
    let ope = write_ope(OPE);
    let mut arg_file = Builder::new().suffix(".toml").tempfile().unwrap();
    write!(
        arg_file,
        "[observe]\nope = {:?}\noffset = \"45\"\nobject = [\"B\"]\n",
        ope.path().display().to_string()
    )
    .unwrap();
    arg_file.flush().unwrap();
    let arg_path = arg_file.path().display().to_string();

    let merged = args(&[&arg_path, "--offset", "5"]).merge().unwrap();
    assert!(merged.args_file.is_none());
    assert_eq!(merged.observe_args.offset.as_deref(), Some("5"));
    assert_eq!(merged.observe_args.object, Some(vec!["B".to_string()]));

    let params = merged.parse().unwrap();
    assert_eq!(params.targets.len(), 1);
    assert_eq!(params.targets[0].0, "B");
}

#[test]
fn test_json_arg_file() {
    let ope = write_ope(OPE);
    let mut arg_file = Builder::new().suffix(".json").tempfile().unwrap();
    write!(
        arg_file,
        r#"{{"observe": {{"ope": {:?}, "num_refreshes": 2}}}}"#,
        ope.path().display().to_string()
    )
    .unwrap();
    arg_file.flush().unwrap();
    let arg_path = arg_file.path().display().to_string();

    let merged = args(&[&arg_path]).merge().unwrap();
    assert_eq!(merged.observe_args.num_refreshes, Some(2));
    assert!(merged.parse().is_ok());
}

#[test]
fn test_unrecognised_arg_file() {
    let arg_file = Builder::new().suffix(".yaml").tempfile().unwrap();
    let arg_path = arg_file.path().display().to_string();
    let result = args(&[&arg_path]).merge();
    assert!(matches!(result, Err(AirmassError::ArgFile(_))));
}

#[test]
fn test_dry_run() {
    let ope = write_ope(OPE);
    let path = ope.path().display().to_string();
    assert!(args(&["--ope", &path]).run(true).is_ok());
    assert!(args(&["--ope", &path, "--num-refreshes", "1"]).run(false).is_ok());
}
