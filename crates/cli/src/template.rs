// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Commit message template generation.
//!
//! Generates `.gitmessage` content from the resolved rules.

use crate::config::{Applicability, Config};

/// Default template path.
pub const TEMPLATE_PATH: &str = ".gitmessage";

/// Generate .gitmessage content from configuration.
///
/// Template format:
/// ```text
/// # <type>(<scope>): <subject>
/// #
/// # Types: build, chore, ci, ...
/// # Scope: optional (repo, backend-python, pwa)
/// # Header: at most 100 characters
/// #
/// # Examples:
/// #   feat(repo): add new feature
/// #   fix: handle edge case
/// ```
pub fn generate_template(config: &Config) -> String {
    let types = config.type_list().unwrap_or_default();
    let scopes = config.scope_allow_list().unwrap_or_default();
    let scope_required = config
        .rules
        .get("scope-empty")
        .is_some_and(|r| r.is_enabled() && r.when == Applicability::Never);

    // Leading blank line so humans can start typing immediately
    let mut lines = vec![
        String::new(),
        "# <type>(<scope>): <subject>".to_string(),
        "#".to_string(),
    ];

    if types.is_empty() {
        lines.push("# Types: (any)".to_string());
    } else {
        lines.push(format!("# Types: {}", types.join(", ")));
    }

    let presence = if scope_required { "required" } else { "optional" };
    if scopes.is_empty() {
        lines.push(format!("# Scope: {}", presence));
    } else {
        lines.push(format!("# Scope: {} ({})", presence, scopes.join(", ")));
    }

    if let Some(max) = config
        .rules
        .get("header-max-length")
        .filter(|r| r.is_enabled())
        .and_then(|r| r.value.as_number())
    {
        lines.push(format!("# Header: at most {} characters", max));
    }

    lines.push("#".to_string());
    lines.push("# Examples:".to_string());

    let example_type = if types.iter().any(|t| t == "feat") {
        "feat"
    } else {
        types.first().map(String::as_str).unwrap_or("feat")
    };
    match scopes.first() {
        Some(scope) => lines.push(format!("#   {}({}): add new feature", example_type, scope)),
        None => lines.push(format!("#   {}: add new feature", example_type)),
    }

    if !scope_required {
        let fix_type = if types.iter().any(|t| t == "fix") {
            "fix"
        } else {
            types.get(1).map(String::as_str).unwrap_or("fix")
        };
        lines.push(format!("#   {}: handle edge case", fix_type));
    }

    // Trailing newline for clean file
    lines.push(String::new());

    lines.join("\n")
}

#[cfg(test)]
#[path = "template_tests.rs"]
mod tests;
