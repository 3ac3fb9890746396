//! Role auto-detection by overlap scoring.

use std::collections::HashSet;

use crate::analysis::catalog::Catalog;
use crate::analysis::normalize::normalize;

/// Scores every catalog role by exact-match overlap with the candidate's
/// normalized skill set and returns the best one.
///
/// An empty skill set (or an empty catalog) yields `None` — no discrimination
/// is possible. Otherwise a strictly greater overlap replaces the running
/// best; ties keep the first-declared role. Because the initial score
/// sentinel sits below zero, a non-empty skill set against a non-empty
/// catalog always resolves to some role, even at zero overlap.
pub fn detect_best_role<'a>(catalog: &'a Catalog, skills: &HashSet<String>) -> Option<&'a str> {
    if skills.is_empty() {
        return None;
    }

    let mut best_role: Option<&str> = None;
    let mut best_score: i64 = -1;

    for role in catalog.roles() {
        let overlap = role
            .desired
            .iter()
            .filter(|d| skills.contains(&normalize(d)))
            .count() as i64;

        if overlap > best_score {
            best_score = overlap;
            best_role = Some(&role.name);
        }
    }

    best_role
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::catalog::RoleProfile;
    use crate::analysis::normalize::skill_set;

    fn catalog_of(roles: &[(&str, &[&str])]) -> Catalog {
        Catalog::new(
            roles
                .iter()
                .map(|(name, desired)| RoleProfile {
                    name: name.to_string(),
                    desired: desired.iter().map(|s| s.to_string()).collect(),
                })
                .collect(),
            vec![],
        )
    }

    fn skills_of(raw: &[&str]) -> HashSet<String> {
        skill_set(&raw.iter().map(|s| s.to_string()).collect::<Vec<_>>())
    }

    #[test]
    fn test_empty_skill_set_returns_none() {
        let catalog = Catalog::builtin();
        assert_eq!(detect_best_role(&catalog, &HashSet::new()), None);
    }

    #[test]
    fn test_empty_catalog_returns_none() {
        let catalog = catalog_of(&[]);
        assert_eq!(detect_best_role(&catalog, &skills_of(&["rust"])), None);
    }

    #[test]
    fn test_highest_overlap_wins() {
        let catalog = Catalog::builtin();
        let skills = skills_of(&["Excel", "Power BI", "Tableau", "DAX"]);
        assert_eq!(detect_best_role(&catalog, &skills), Some("BI Analyst"));
    }

    #[test]
    fn test_tie_keeps_first_declared_role() {
        let catalog = catalog_of(&[
            ("Role X", &["a", "b", "z"]),
            ("Role Y", &["a", "b", "w"]),
        ]);
        // Both roles overlap on exactly {a, b}.
        assert_eq!(detect_best_role(&catalog, &skills_of(&["a", "b"])), Some("Role X"));
    }

    #[test]
    fn test_later_role_with_strictly_greater_overlap_replaces() {
        let catalog = catalog_of(&[("Role X", &["a"]), ("Role Y", &["a", "b"])]);
        assert_eq!(detect_best_role(&catalog, &skills_of(&["a", "b"])), Some("Role Y"));
    }

    #[test]
    fn test_zero_overlap_still_resolves_to_first_role() {
        let catalog = catalog_of(&[("Role X", &["a"]), ("Role Y", &["b"])]);
        assert_eq!(
            detect_best_role(&catalog, &skills_of(&["cobol"])),
            Some("Role X")
        );
    }

    #[test]
    fn test_winner_score_is_maximal() {
        let catalog = Catalog::builtin();
        let skills = skills_of(&["python", "pandas", "docker", "linux"]);
        let winner = detect_best_role(&catalog, &skills).unwrap();

        let overlap = |role: &str| {
            catalog
                .desired_skills(role)
                .iter()
                .filter(|d| skills.contains(&normalize(d)))
                .count()
        };
        let winner_score = overlap(winner);
        for role in catalog.roles() {
            assert!(winner_score >= overlap(&role.name));
        }
    }

    #[test]
    fn test_matching_is_exact_after_normalization_no_substrings() {
        let catalog = catalog_of(&[("Role X", &["java"])]);
        // "javascript" must not count as partial credit for "java".
        let skills = skills_of(&["javascript"]);
        let winner = detect_best_role(&catalog, &skills);
        // Zero overlap, but the sentinel still resolves to the only role.
        assert_eq!(winner, Some("Role X"));
        assert!(!skills.contains("java"));
    }
}
