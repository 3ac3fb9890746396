//! Skill string canonicalization. All comparisons in the engine happen on
//! normalized strings; display formatting is cosmetic and one-way.

use std::collections::HashSet;

/// Canonical form of a skill string: trimmed, lower-cased.
/// Total — any input maps to some output — and idempotent.
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Title-cases a normalized skill for display ("machine learning" →
/// "Machine Learning"). Capitalizes the first character of each
/// space-delimited word; does not attempt to reconstruct original casing.
pub fn to_display(normalized: &str) -> String {
    normalized
        .split(' ')
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Builds the normalized skill set from a raw skill list. Duplicates that
/// differ only in case or surrounding whitespace collapse here, not before.
pub fn skill_set(raw_skills: &[String]) -> HashSet<String> {
    raw_skills.iter().map(|s| normalize(s)).collect()
}
