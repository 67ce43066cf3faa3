// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Letter-case detection for the `*-case` rules.
//!
//! A string is "in" a case when converting it to that case leaves it
//! unchanged. Strings without any letters are in no case.

/// Supported case names.
pub const CASE_NAMES: &[&str] = &[
    "lower-case",
    "upper-case",
    "camel-case",
    "kebab-case",
    "pascal-case",
    "sentence-case",
    "snake-case",
    "start-case",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Case {
    Lower,
    Upper,
    Camel,
    Kebab,
    Pascal,
    Sentence,
    Snake,
    Start,
}

impl Case {
    pub fn from_name(name: &str) -> Option<Self> {
        let case = match name {
            "lower-case" | "lowercase" => Case::Lower,
            "upper-case" | "uppercase" => Case::Upper,
            "camel-case" => Case::Camel,
            "kebab-case" => Case::Kebab,
            "pascal-case" => Case::Pascal,
            "sentence-case" | "sentencecase" => Case::Sentence,
            "snake-case" => Case::Snake,
            "start-case" => Case::Start,
            _ => return None,
        };
        Some(case)
    }

    /// Convert `input` to this case.
    pub fn apply(self, input: &str) -> String {
        match self {
            Case::Lower => input.to_lowercase(),
            Case::Upper => input.to_uppercase(),
            Case::Sentence => upper_first(input),
            Case::Camel => {
                let mut out = String::new();
                for (i, word) in words(input).iter().enumerate() {
                    if i == 0 {
                        out.push_str(&word.to_lowercase());
                    } else {
                        out.push_str(&capitalize(word));
                    }
                }
                out
            }
            Case::Pascal => words(input).iter().map(|w| capitalize(w)).collect(),
            Case::Kebab => join_lower(input, "-"),
            Case::Snake => join_lower(input, "_"),
            Case::Start => words(input)
                .iter()
                .map(|w| upper_first(w))
                .collect::<Vec<_>>()
                .join(" "),
        }
    }

    /// Whether `input` is already in this case.
    pub fn matches(self, input: &str) -> bool {
        if !input.chars().any(char::is_alphabetic) {
            return false;
        }
        self.apply(input) == input
    }
}

/// Split into words on non-alphanumeric characters and lower-to-upper
/// transitions (`fooBar` -> `foo`, `Bar`).
fn words(input: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut prev_lower = false;

    for c in input.chars() {
        if !c.is_alphanumeric() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            prev_lower = false;
            continue;
        }
        if c.is_uppercase() && prev_lower && !current.is_empty() {
            words.push(std::mem::take(&mut current));
        }
        prev_lower = c.is_lowercase() || c.is_numeric();
        current.push(c);
    }
    if !current.is_empty() {
        words.push(current);
    }
    words
}

fn upper_first(input: &str) -> String {
    let mut chars = input.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn capitalize(word: &str) -> String {
    upper_first(&word.to_lowercase())
}

fn join_lower(input: &str, sep: &str) -> String {
    words(input)
        .iter()
        .map(|w| w.to_lowercase())
        .collect::<Vec<_>>()
        .join(sep)
}

#[cfg(test)]
#[path = "case_tests.rs"]
mod tests;
