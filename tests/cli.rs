mod common;

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn writes_report_and_exits_zero() {
    let dir = tempfile::tempdir().unwrap();
    let template = common::full_template(dir.path());
    let input = common::write_calls(dir.path(), common::CALLS);
    let output = dir.path().join("out.xlsx");

    Command::cargo_bin("callreport")
        .unwrap()
        .arg(&template)
        .arg(&input)
        .arg(&output)
        .args(["--utc", "--date", "2024-06-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("out.xlsx"));

    assert!(output.exists());
    let cells = common::read_cells(&output, &[(2, 3), (2, 4)]);
    assert_eq!(cells, ["01.06.2024", "3"]);
}

#[test]
fn missing_tag_exits_non_zero() {
    let dir = tempfile::tempdir().unwrap();
    let template = dir.path().join("template.xlsx");
    common::write_template(&template, &[common::TABLE_ANCHOR]);
    let input = common::write_calls(dir.path(), common::CALLS);
    let output = dir.path().join("out.xlsx");

    Command::cargo_bin("callreport")
        .unwrap()
        .arg(&template)
        .arg(&input)
        .arg(&output)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("#reportName").and(predicate::str::contains("template.xlsx")));

    assert!(!output.exists());
}

#[test]
fn malformed_json_exits_non_zero() {
    let dir = tempfile::tempdir().unwrap();
    let template = common::full_template(dir.path());
    let input = common::write_calls(dir.path(), "not json");

    Command::cargo_bin("callreport")
        .unwrap()
        .arg(&template)
        .arg(&input)
        .arg(dir.path().join("out.xlsx"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("calls.json"));
}

#[test]
fn empty_call_log_names_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let template = common::full_template(dir.path());
    let input = common::write_calls(dir.path(), "[]");
    let output = dir.path().join("out.xlsx");

    Command::cargo_bin("callreport")
        .unwrap()
        .arg(&template)
        .arg(&input)
        .arg(&output)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("calls.json").and(predicate::str::contains("no calls")));

    assert!(!output.exists());
}

#[test]
fn large_call_id_survives_into_the_report() {
    let dir = tempfile::tempdir().unwrap();
    let template = common::full_template(dir.path());
    let input = common::write_calls(
        dir.path(),
        r#"[{"call_id": 9007199254740993, "from": "a", "to": "b", "talktime": 1, "timestamp": 0}]"#,
    );
    let output = dir.path().join("out.xlsx");

    Command::cargo_bin("callreport")
        .unwrap()
        .arg(&template)
        .arg(&input)
        .arg(&output)
        .assert()
        .success();

    let cells = common::read_cells(&output, &[(2, 9)]);
    assert_eq!(cells, ["9007199254740993"]);
}

#[test]
fn missing_arguments_is_a_usage_error() {
    Command::cargo_bin("callreport")
        .unwrap()
        .arg("template.xlsx")
        .assert()
        .failure()
        .code(2);
}
