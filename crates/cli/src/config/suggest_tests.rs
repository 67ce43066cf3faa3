// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use yare::parameterized;

use super::*;

#[parameterized(
    scopes = { "scopes", "scope-enum" },
    types = { "types", "type-enum" },
    underscore = { "scope_enum", "scope-enum" },
    uppercase = { "Header-Trim", "header-trim" },
    prefix = { "subject-ca", "subject-case" },
    suffix = { "header-max-length-x", "header-max-length" },
    full_stop = { "full-stop", "subject-full-stop" },
)]
fn suggests(unknown: &str, expected: &str) {
    assert_eq!(suggest_rule_name(unknown), Some(expected));
}

#[parameterized(
    empty = { "" },
    short = { "sc" },
    unrelated = { "signed-off-by" },
)]
fn no_suggestion(unknown: &str) {
    assert_eq!(suggest_rule_name(unknown), None);
}
