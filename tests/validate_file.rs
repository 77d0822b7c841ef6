//! End-to-end validation of configuration files.

use std::path::Path;

use cms_config_validator::{validate, validate_path, Outcome, ValidationError, ValueKind};

mod common;

fn run(path: &Path) -> (bool, String) {
    let mut out = Vec::new();
    let passed = validate(path, &mut out).unwrap();
    (passed, String::from_utf8(out).unwrap())
}

fn error_lines(output: &str) -> Vec<&str> {
    output.lines().filter(|l| l.starts_with("ERROR: ")).collect()
}

#[test]
fn test_sample_config_passes() {
    let (passed, output) = run(&common::fixture_path());

    assert!(passed, "{output}");
    assert_eq!(output, "\nValidation PASSED: configuration looks correct.\n");
}

#[test]
fn test_missing_sections_are_reported() {
    for section in ["database", "admin_web_server", "contest_web_server", "proxy_service"] {
        let file = common::write_config(&common::without_section(section));
        let (passed, output) = run(file.path());

        assert!(!passed);
        assert!(
            output.contains(&format!("ERROR: Missing section [{section}]")),
            "{section}: {output}"
        );
    }
}

#[test]
fn test_missing_section_counts_each_field() {
    let file = common::write_config(&common::without_section("admin_web_server"));
    let (_, output) = run(file.path());

    assert_eq!(
        error_lines(&output),
        vec![
            "ERROR: Missing section [admin_web_server]",
            "ERROR: Missing section [admin_web_server]",
        ]
    );
    assert!(output.ends_with("\nValidation FAILED with 2 errors.\n"));
}

#[test]
fn test_integer_database_url() {
    let file = common::write_config(&common::with_value("database", "url", toml::Value::Integer(5432)));

    match validate_path(file.path()) {
        Outcome::Checked(report) => {
            assert_eq!(
                report.errors(),
                &[ValidationError::TypeMismatch {
                    section: "database".into(),
                    key: "url".into(),
                    expected: ValueKind::String,
                    actual: ValueKind::Integer,
                    value: "5432".into(),
                }]
            );
        }
        Outcome::Aborted(e) => panic!("unexpected fatal error: {e}"),
    }

    let (passed, output) = run(file.path());
    assert!(!passed);
    assert!(output.contains(
        "ERROR: Incorrect type for database.url: expected string, got integer (value: 5432)"
    ));
}

#[test]
fn test_boolean_port_is_rejected() {
    let file = common::write_config(&common::with_value(
        "proxy_service",
        "listen_port",
        toml::Value::Boolean(true),
    ));
    let (passed, output) = run(file.path());

    assert!(!passed);
    assert_eq!(
        error_lines(&output),
        vec!["ERROR: Incorrect type for proxy_service.listen_port: expected integer, got boolean (value: true)"]
    );
}

#[test]
fn test_non_table_section_reports_missing_keys() {
    // Top-level keys must precede the first table header.
    let config = format!(
        "admin_web_server = \"127.0.0.1:8889\"\n{}",
        common::without_section("admin_web_server")
    );
    let file = common::write_config(&config);
    let (passed, output) = run(file.path());

    assert!(!passed);
    assert_eq!(
        error_lines(&output),
        vec![
            "ERROR: Missing key 'listen_address' in section [admin_web_server]",
            "ERROR: Missing key 'listen_port' in section [admin_web_server]",
        ]
    );
}

#[test]
fn test_short_instance_reported_once() {
    let file = common::write_config(
        &common::valid_config().replace(
            "LogService = [[\"localhost\", 29000]]",
            "foo = [[\"host1\", 80], [\"host2\"]]",
        ),
    );
    let (passed, output) = run(file.path());

    assert!(!passed);
    assert_eq!(
        error_lines(&output),
        vec!["ERROR: [services].foo[1] must be [hostname, port]"]
    );
    assert!(!output.contains("[services].foo[0]"));
}

#[test]
fn test_missing_services() {
    let file = common::write_config(&common::without_section("services"));
    let (passed, output) = run(file.path());

    assert!(!passed);
    assert_eq!(
        error_lines(&output),
        vec!["ERROR: Missing [services] section - required for CMS topology."]
    );
    assert!(output.ends_with("\nValidation FAILED with 1 errors.\n"));
}

#[test]
fn test_errors_follow_catalog_order() {
    let config = common::valid_config()
        .replace("listen_port = 28600", "listen_port = \"28600\"")
        .replace("url = \"postgresql", "uri = \"postgresql");
    let file = common::write_config(&config);
    let (_, output) = run(file.path());

    assert_eq!(
        error_lines(&output),
        vec![
            "ERROR: Missing key 'url' in section [database]",
            "ERROR: Incorrect type for proxy_service.listen_port: expected integer, got string (value: 28600)",
        ]
    );
}

#[test]
fn test_validation_is_idempotent() {
    let file = common::write_config(&common::without_section("contest_web_server"));

    let first = run(file.path());
    let second = run(file.path());
    assert_eq!(first, second);
    assert!(!first.0);
}

#[test]
fn test_nonexistent_path_is_single_line() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.toml");
    let (passed, output) = run(&path);

    assert!(!passed);
    assert_eq!(output.lines().count(), 1);
    assert_eq!(output, format!("ERROR: Config file not found at {}\n", path.display()));
}

#[test]
fn test_parse_error_aborts_checks() {
    let file = common::write_config("[database\nurl = \"x\"\n");
    let (passed, output) = run(file.path());

    assert!(!passed);
    assert_eq!(output.lines().count(), 1);
    assert!(output.starts_with("ERROR: Failed to parse TOML file: "));
    assert!(!output.contains("Missing"));
}
