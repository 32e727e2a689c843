//! Binary-level exercises of the gate's stdout and exit-code contract.

use assert_cmd::Command;
use predicates::prelude::*;

const UPDATE_LINE: &str = "  See update instrucitons at: https://github.com/Moddable-OpenSource/moddable/blob/public/documentation/devices/esp32.md";

/// Build a command for invoking the compiled `idfcheck` binary.
fn cli() -> Command {
    Command::cargo_bin("idfcheck").expect("Failed to locate idfcheck binary")
}

#[test]
fn rejects_when_no_arguments_supplied() {
    cli().assert().code(1).stdout("Not enough parameters\n");
}

#[test]
fn rejects_when_only_expected_version_supplied() {
    cli().arg("4.4.2").assert().code(1).stdout("Not enough parameters\n");
}

#[test]
fn identical_versions_stay_silent() {
    cli().args(["4.4.2", "4.4.2"]).assert().success().stdout(predicate::str::is_empty());
}

#[test]
fn patch_drift_recommends_an_update() {
    cli()
        .args(["4.4.2", "4.4.5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Recommend using ESP-IDF 4.4.2 (found 4.4.5)"))
        .stdout(predicate::str::contains(UPDATE_LINE));
}

#[test]
fn minor_drift_blocks_the_build() {
    cli()
        .args(["4.4.2", "4.3.2"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("*** Update required to ESP-IDF 4.4.2"))
        .stdout(predicate::str::contains(UPDATE_LINE));
}

#[test]
fn major_drift_blocks_the_build() {
    cli()
        .args(["5.0.0", "4.9.9"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("*** Update required to ESP-IDF 5.0.0"));
}

#[test]
fn two_segment_versions_compare_equal_after_padding() {
    cli().args(["4.4", "4.4"]).assert().success().stdout(predicate::str::is_empty());
}

#[test]
fn extra_arguments_are_ignored() {
    cli()
        .args(["4.4.2", "4.4.2", "esp32", "release"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn repeated_runs_report_identically() {
    let first = cli().args(["4.4.2", "4.4.5"]).assert().success();
    let second = cli().args(["4.4.2", "4.4.5"]).assert().success();
    assert_eq!(first.get_output().stdout, second.get_output().stdout);
    assert_eq!(first.get_output().status, second.get_output().status);
}

#[test]
fn help_documents_both_positional_arguments() {
    cli()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("EXPECTED"))
        .stdout(predicate::str::contains("GIVEN"));
}
