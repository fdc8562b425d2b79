//! Command-Line Interface Tests
//!
//! Runs the `sky-xref` binary against the embedded object database.

use assert_cmd::Command;
use predicates::prelude::*;

fn sky_xref() -> Command {
    Command::cargo_bin("sky-xref").unwrap()
}

#[test]
fn test_encode_reports_canonical_forms() {
    sky_xref()
        .args(["encode", "N526A", "M 51a"])
        .assert()
        .success()
        .stdout(predicate::str::contains("NGC 0526A"))
        .stdout(predicate::str::contains("N0526_A"))
        .stdout(predicate::str::contains("M51a"));
}

#[test]
fn test_encode_rejects_unknown_designation() {
    sky_xref()
        .args(["encode", "Not an index"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a recognized catalog designation"));
}

#[test]
fn test_decode_hex_identifier() {
    sky_xref()
        .args(["decode", "0x13983564dafc1"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("NGC 0526A"));
}

#[test]
fn test_decode_rejects_zero() {
    sky_xref().args(["decode", "0"]).assert().failure();
}

#[test]
fn test_encode_json_output() {
    let output = sky_xref()
        .args(["encode", "PSR J0002+6216", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let reports: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let report = &reports[0];
    assert_eq!(report["input"], "PSR J0002+6216");
    assert_eq!(report["family"], "coordinate");
    assert_eq!(report["normal"], "PSR J0002+6216");
}

#[test]
fn test_lookup_resolves_alias() {
    sky_xref()
        .args(["lookup", "M31"])
        .assert()
        .success()
        .stdout(predicate::str::contains("NGC 0224"))
        .stdout(predicate::str::contains("Andromeda Galaxy"));
}

#[test]
fn test_lookup_ambiguous_duplicate_is_not_found() {
    sky_xref()
        .args(["lookup", "IC 4988"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Not found"))
        .stdout(predicate::str::contains("NGC 5194"));
}

#[test]
fn test_lookup_missing_object() {
    sky_xref()
        .args(["lookup", "NGC 1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Not found: NGC 0001 is not in the object database"));
}

#[test]
fn test_xref_lists_transitive_aliases() {
    sky_xref()
        .args(["xref", "HIP 11767", "--format", "tsv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("WDS J02318+8916"))
        .stdout(predicate::str::contains("TYC 4628-237-1"));
}

#[test]
fn test_names_is_case_insensitive() {
    sky_xref()
        .args(["names", "andromeda galaxy"])
        .assert()
        .success()
        .stdout(predicate::str::contains("NGC 0224"));

    sky_xref()
        .args(["names", "Nowhere Nebula"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No object named"));
}

#[test]
fn test_catalogs_lists_registry() {
    sky_xref()
        .args(["catalogs"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Catalog Registry"))
        .stdout(predicate::str::contains("Sh2-"))
        .stdout(predicate::str::contains("TYC"));
}

#[test]
fn test_export_writes_reloadable_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("export.json");

    sky_xref()
        .args(["export"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported object database"));

    sky_xref()
        .args(["lookup", "HR 2491", "--catalog"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("HIP 32349"));
}
