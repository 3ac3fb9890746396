use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::HashSet;

use crate::analysis::normalize::skill_set;

/// The mutable working state of one candidate session.
///
/// Raw skill and project strings are stored exactly as received; the
/// normalized skill set is always derived from the raw list on demand and
/// never stored. `last_missing` is the most recent analysis result, kept
/// only so the profile view can echo it back.
#[derive(Debug, Clone, Serialize)]
pub struct CandidateProfile {
    pub skills: Vec<String>,
    pub projects: Vec<String>,
    pub selected_role: Option<String>,
    pub last_missing: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl CandidateProfile {
    pub fn new() -> Self {
        Self {
            skills: Vec::new(),
            projects: Vec::new(),
            selected_role: None,
            last_missing: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Normalized skill set, derived from the raw list.
    pub fn skill_set(&self) -> HashSet<String> {
        skill_set(&self.skills)
    }

    /// Merge-on-upload: wholesale replacement of both lists with parser
    /// output (already defaulted to empty by the client adapter). Prior
    /// analysis results are cleared; the selected role survives.
    pub fn replace_from_parse(&mut self, skills: Vec<String>, projects: Vec<String>) {
        self.skills = skills;
        self.projects = projects;
        self.clear_results();
    }

    /// Manual add: splits a comma-separated string, trims each piece,
    /// drops empties, and unions by exact raw string into the existing
    /// list. Differently-cased variants of the same skill survive as
    /// distinct raw entries; they collapse only in `skill_set`.
    /// Returns how many entries were actually added.
    pub fn add_manual_skills(&mut self, input: &str) -> usize {
        let mut added = 0;
        for piece in input.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            if !self.skills.iter().any(|s| s == piece) {
                self.skills.push(piece.to_string());
                added += 1;
            }
        }
        added
    }

    pub fn clear_results(&mut self) {
        self.last_missing.clear();
    }
}

impl Default for CandidateProfile {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_profile_is_empty() {
        let profile = CandidateProfile::new();
        assert!(profile.skills.is_empty());
        assert!(profile.projects.is_empty());
        assert!(profile.selected_role.is_none());
        assert!(profile.skill_set().is_empty());
    }

    #[test]
    fn test_manual_add_trims_drops_empties_and_dedupes_exact() {
        let mut profile = CandidateProfile::new();
        let added = profile.add_manual_skills("Power BI, , Kubernetes ,Power BI");
        assert_eq!(added, 2);
        assert_eq!(profile.skills, vec!["Power BI", "Kubernetes"]);
    }

    #[test]
    fn test_manual_add_unions_against_existing_entries() {
        let mut profile = CandidateProfile::new();
        profile.add_manual_skills("Docker");
        let added = profile.add_manual_skills("Docker, Linux");
        assert_eq!(added, 1);
        assert_eq!(profile.skills, vec!["Docker", "Linux"]);
    }

    #[test]
    fn test_manual_add_keeps_case_variants_as_raw_entries() {
        let mut profile = CandidateProfile::new();
        profile.add_manual_skills("docker, Docker");
        // Distinct raw strings both survive; the derived set collapses them.
        assert_eq!(profile.skills, vec!["docker", "Docker"]);
        assert_eq!(profile.skill_set().len(), 1);
    }

    #[test]
    fn test_manual_add_all_empty_input_is_a_no_op() {
        let mut profile = CandidateProfile::new();
        assert_eq!(profile.add_manual_skills(" , ,,"), 0);
        assert!(profile.skills.is_empty());
    }

    #[test]
    fn test_replace_from_parse_is_wholesale_and_clears_results() {
        let mut profile = CandidateProfile::new();
        profile.add_manual_skills("COBOL");
        profile.last_missing = vec!["Css".to_string()];
        profile.selected_role = Some("Frontend Developer".to_string());

        profile.replace_from_parse(
            vec!["HTML".to_string()],
            vec!["Portfolio site".to_string()],
        );

        assert_eq!(profile.skills, vec!["HTML"]);
        assert_eq!(profile.projects, vec!["Portfolio site"]);
        assert!(profile.last_missing.is_empty());
        // Explicit role choice survives an upload.
        assert_eq!(profile.selected_role.as_deref(), Some("Frontend Developer"));
    }

    #[test]
    fn test_skill_set_is_derived_not_stored() {
        let mut profile = CandidateProfile::new();
        profile.replace_from_parse(vec!["  HTML ".to_string(), "html".to_string()], vec![]);
        let set = profile.skill_set();
        assert_eq!(set.len(), 1);
        assert!(set.contains("html"));
    }
}
