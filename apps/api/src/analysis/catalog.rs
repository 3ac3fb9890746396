//! The static skill catalog: role → desired-skill profiles plus a list of
//! generally valuable skills independent of any role.
//!
//! Built once at startup and carried in `AppState` as `Arc<Catalog>` — there
//! is no mutating API, so the data is frozen for the life of the process.
//! Role declaration order doubles as iteration order; the role detector's
//! tie-break (first-declared wins) depends on it staying stable.

/// A role name paired with its desired skills, in catalog-authoring order.
#[derive(Debug, Clone)]
pub struct RoleProfile {
    pub name: String,
    pub desired: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct Catalog {
    roles: Vec<RoleProfile>,
    general: Vec<String>,
}

impl Catalog {
    pub fn new(roles: Vec<RoleProfile>, general: Vec<String>) -> Self {
        Self { roles, general }
    }

    /// The built-in catalog: ten role profiles and twenty general-value
    /// skills. Declaration order is part of the contract.
    pub fn builtin() -> Self {
        let roles = vec![
            role(
                "Frontend Developer",
                &[
                    "html",
                    "css",
                    "javascript",
                    "react",
                    "typescript",
                    "next.js",
                    "tailwind",
                    "responsive design",
                    "accessibility",
                ],
            ),
            role(
                "Backend Developer",
                &[
                    "node.js",
                    "express",
                    "python",
                    "flask",
                    "django",
                    "sql",
                    "postgresql",
                    "mongodb",
                    "rest api",
                    "docker",
                ],
            ),
            role(
                "Full Stack Developer",
                &[
                    "html",
                    "css",
                    "javascript",
                    "react",
                    "node.js",
                    "express",
                    "sql",
                    "docker",
                    "next.js",
                    "typescript",
                ],
            ),
            role(
                "Data Scientist",
                &[
                    "python",
                    "pandas",
                    "numpy",
                    "scikit-learn",
                    "machine learning",
                    "statistics",
                    "data visualization",
                    "nlp",
                ],
            ),
            role(
                "ML Engineer",
                &[
                    "python",
                    "tensorflow",
                    "pytorch",
                    "machine learning",
                    "deep learning",
                    "mlops",
                    "docker",
                    "model deployment",
                ],
            ),
            role(
                "DevOps Engineer",
                &[
                    "linux",
                    "docker",
                    "kubernetes",
                    "ci/cd",
                    "terraform",
                    "aws",
                    "monitoring",
                    "observability",
                ],
            ),
            role(
                "BI Analyst",
                &[
                    "excel",
                    "power bi",
                    "tableau",
                    "sql",
                    "data visualization",
                    "dax",
                    "power query",
                ],
            ),
            role(
                "Embedded Engineer",
                &[
                    "embedded c",
                    "arduino",
                    "raspberry pi",
                    "microcontroller",
                    "electronics",
                    "pcb design",
                    "iot",
                ],
            ),
            role(
                "Product Manager",
                &[
                    "product management",
                    "agile",
                    "scrum",
                    "stakeholder management",
                    "roadmapping",
                    "communication",
                ],
            ),
            role(
                "Security Engineer",
                &[
                    "cybersecurity",
                    "networking",
                    "penetration testing",
                    "linux",
                    "ethical hacking",
                    "security fundamentals",
                ],
            ),
        ];

        let general = [
            "git",
            "github",
            "communication",
            "leadership",
            "problem solving",
            "project management",
            "sql",
            "docker",
            "testing",
            "unit testing",
            "ci/cd",
            "aws",
            "azure",
            "power bi",
            "tableau",
            "data visualization",
            "regex",
            "linux",
            "typescript",
            "api design",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect();

        Self { roles, general }
    }

    /// Roles in declaration order.
    pub fn roles(&self) -> &[RoleProfile] {
        &self.roles
    }

    pub fn contains_role(&self, name: &str) -> bool {
        self.roles.iter().any(|r| r.name == name)
    }

    /// Desired skills for a role. Unknown role names yield an empty slice,
    /// not an error — the gap calculator composes on that.
    pub fn desired_skills(&self, role: &str) -> &[String] {
        self.roles
            .iter()
            .find(|r| r.name == role)
            .map(|r| r.desired.as_slice())
            .unwrap_or(&[])
    }

    /// Generally valuable skills, in declaration order.
    pub fn general_skills(&self) -> &[String] {
        &self.general
    }
}

fn role(name: &str, desired: &[&str]) -> RoleProfile {
    RoleProfile {
        name: name.to_string(),
        desired: desired.iter().map(|s| s.to_string()).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_has_ten_roles_in_declared_order() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.roles().len(), 10);
        assert_eq!(catalog.roles()[0].name, "Frontend Developer");
        assert_eq!(catalog.roles()[9].name, "Security Engineer");
    }

    #[test]
    fn test_builtin_general_list() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.general_skills().len(), 20);
        assert_eq!(catalog.general_skills()[0], "git");
        assert_eq!(catalog.general_skills()[2], "communication");
    }

    #[test]
    fn test_desired_skills_known_role() {
        let catalog = Catalog::builtin();
        let desired = catalog.desired_skills("Frontend Developer");
        assert_eq!(desired[0], "html");
        assert_eq!(desired.len(), 9);
    }

    #[test]
    fn test_desired_skills_unknown_role_is_empty_not_error() {
        let catalog = Catalog::builtin();
        assert!(catalog.desired_skills("Astronaut").is_empty());
    }

    #[test]
    fn test_contains_role() {
        let catalog = Catalog::builtin();
        assert!(catalog.contains_role("BI Analyst"));
        assert!(!catalog.contains_role("bi analyst"));
    }
}
