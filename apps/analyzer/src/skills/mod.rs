//! Skill extraction core: normalize resume text, scan it against a fixed
//! vocabulary, apply variant heuristics, and assemble a sorted skill list.

pub mod heuristics;
pub mod matcher;
pub mod normalize;
pub mod vocabulary;

pub use matcher::extract_skills;
