//! Variant heuristics: cheap spelling/formatting rules that add a canonical
//! vocabulary token when a known variant shows up in the text.

/// A single rule: if any trigger occurs in the normalized text, `adds` is
/// added to the match set.
#[derive(Debug, Clone, Copy)]
pub struct HeuristicRule {
    pub triggers: &'static [&'static str],
    pub adds: &'static str,
}

impl HeuristicRule {
    pub fn applies(&self, text: &str) -> bool {
        self.triggers.iter().any(|trigger| text.contains(trigger))
    }
}

/// Order is irrelevant; every rule is evaluated independently.
pub const HEURISTIC_RULES: &[HeuristicRule] = &[
    HeuristicRule {
        triggers: &["postgre", "postgres"],
        adds: "postgresql",
    },
    HeuristicRule {
        triggers: &["react.js"],
        adds: "react",
    },
    HeuristicRule {
        triggers: &["nodejs", "node js"],
        adds: "node.js",
    },
    HeuristicRule {
        triggers: &[".net", "dotnet"],
        adds: ".net",
    },
];

/// Tokens added by every rule in `rules` that fires on `text`.
pub fn apply<'a>(
    rules: &'a [HeuristicRule],
    text: &'a str,
) -> impl Iterator<Item = &'static str> + 'a {
    rules
        .iter()
        .filter(move |rule| rule.applies(text))
        .map(|rule| rule.adds)
}
