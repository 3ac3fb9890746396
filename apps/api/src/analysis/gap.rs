//! Missing-skill computation: role-specific gaps plus a bounded number of
//! generally valuable extras, formatted for display.

use std::collections::HashSet;

use crate::analysis::catalog::Catalog;
use crate::analysis::normalize::{normalize, to_display};

/// How many general-value skills may be appended after the role gaps.
/// Fixed policy, not runtime-configurable.
pub const GENERAL_EXTRAS_CAP: usize = 3;

/// Computes the display-formatted missing-skill list for a role.
///
/// Output ordering is a contract: role gaps first, in catalog-declared
/// order, then at most [`GENERAL_EXTRAS_CAP`] general extras, also in
/// catalog-declared order. Extras never repeat a skill the candidate has or
/// one already listed as a role gap. Unknown roles contribute no gaps, so
/// only extras survive. Pure function of its inputs and the catalog.
pub fn compute_missing(catalog: &Catalog, role: &str, skills: &HashSet<String>) -> Vec<String> {
    let missing: Vec<String> = catalog
        .desired_skills(role)
        .iter()
        .map(|d| normalize(d))
        .filter(|d| !skills.contains(d))
        .collect();

    let extras: Vec<String> = catalog
        .general_skills()
        .iter()
        .map(|g| normalize(g))
        .filter(|g| !skills.contains(g) && !missing.contains(g))
        .take(GENERAL_EXTRAS_CAP)
        .collect();

    missing
        .into_iter()
        .chain(extras)
        .map(|s| to_display(&s))
        .collect()
}
