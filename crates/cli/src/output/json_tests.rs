#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::{JsonFormatter, create_report};
use crate::config::Severity;
use crate::lint::{LintOutcome, Problem};

fn passing(input: &str) -> LintOutcome {
    LintOutcome {
        input: input.to_string(),
        commit: None,
        valid: true,
        ignored: false,
        errors: vec![],
        warnings: vec![],
    }
}

fn failing(input: &str) -> LintOutcome {
    LintOutcome {
        valid: false,
        errors: vec![Problem {
            level: Severity::Error,
            name: "scope-enum".to_string(),
            message: "scope must be one of [repo]".to_string(),
        }],
        ..passing(input)
    }
}

#[test]
fn json_formatter_outputs_valid_json() {
    let mut buffer = Vec::new();
    let mut formatter = JsonFormatter::new(&mut buffer);

    let report = create_report(vec![passing("feat(repo): add config")]);
    formatter.write(&report).unwrap();

    let json: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
    assert_eq!(json["valid"], true);
    assert_eq!(json["error_count"], 0);
    assert!(json.get("timestamp").is_some());
    assert_eq!(json["results"][0]["input"], "feat(repo): add config");
}

#[test]
fn json_report_has_iso8601_timestamp() {
    let report = create_report(vec![]);

    // 2026-01-21T10:30:00Z
    assert!(report.timestamp.contains('T'));
    assert!(report.timestamp.ends_with('Z'));
}

#[test]
fn json_report_is_invalid_when_any_fails() {
    let report = create_report(vec![passing("a"), failing("fix(web): b")]);
    assert!(!report.valid);
    assert_eq!(report.error_count, 1);
}

#[test]
fn json_problem_has_required_fields() {
    let mut buffer = Vec::new();
    let mut formatter = JsonFormatter::new(&mut buffer);
    formatter
        .write(&create_report(vec![failing("fix(web): b").with_commit("abc1234")]))
        .unwrap();

    let json: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
    let result = &json["results"][0];
    assert_eq!(result["commit"], "abc1234");
    assert_eq!(result["valid"], false);
    let problem = &result["errors"][0];
    assert_eq!(problem["level"], "error");
    assert_eq!(problem["name"], "scope-enum");
    assert_eq!(problem["message"], "scope must be one of [repo]");
}
