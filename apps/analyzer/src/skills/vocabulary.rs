//! Static skill vocabulary, built once per process and never mutated.

use std::collections::BTreeSet;

use once_cell::sync::Lazy;

/// Recognized technology terms. All entries are lowercase.
const TECH_SKILLS: &[&str] = &[
    // JVM
    "java",
    "spring",
    "spring boot",
    "hibernate",
    "jakarta ee",
    "maven",
    "gradle",
    "junit",
    // Python
    "python",
    "fastapi",
    "django",
    "flask",
    // .NET
    "c#",
    "dotnet",
    ".net",
    "asp.net",
    "entity framework",
    // Web
    "javascript",
    "typescript",
    "node.js",
    "react",
    "next.js",
    "vue",
    "angular",
    // Infra
    "docker",
    "kubernetes",
    "helm",
    "terraform",
    "ansible",
    "aws",
    "gcp",
    "azure",
    // Data
    "postgresql",
    "mysql",
    "mariadb",
    "mongodb",
    "redis",
    "kafka",
    "rabbitmq",
    "elasticsearch",
    // Tooling
    "git",
    "github",
    "gitlab",
    "ci/cd",
    "jenkins",
    "github actions",
    "gitlab ci",
    // APIs
    "rest",
    "graphql",
    "grpc",
    // Shells
    "linux",
    "bash",
    "powershell",
    // Testing
    "pytest",
    "selenium",
    "cypress",
    "playwright",
];

/// Process-wide vocabulary. Read-only after first access.
pub static VOCABULARY: Lazy<SkillVocabulary> = Lazy::new(|| SkillVocabulary::new(TECH_SKILLS));

/// An immutable set of lowercase skill phrases.
#[derive(Debug, Clone)]
pub struct SkillVocabulary {
    terms: BTreeSet<&'static str>,
}

impl SkillVocabulary {
    pub fn new(terms: &[&'static str]) -> Self {
        Self {
            terms: terms.iter().copied().collect(),
        }
    }

    #[cfg(test)]
    pub fn contains(&self, term: &str) -> bool {
        self.terms.contains(term)
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Every phrase that occurs anywhere in `text`, including inside larger
    /// words. `text` must already be normalized.
    pub fn matches_in<'a>(&'a self, text: &'a str) -> impl Iterator<Item = &'static str> + 'a {
        self.terms.iter().copied().filter(move |term| text.contains(term))
    }
}
