//! Candidate profile — the request-scoped input the engine scores and
//! narrates against.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Developer specialization axis. Drives corpus filtering and fallback
/// narrative selection.
///
/// Any token other than `frontend` / `backend` (including the empty string)
/// parses as `Other`: the corpus is served unfiltered and the default
/// fallback narrative applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Frontend,
    Backend,
    Other,
}

impl Category {
    pub fn parse(token: &str) -> Self {
        match token {
            "frontend" => Category::Frontend,
            "backend" => Category::Backend,
            _ => Category::Other,
        }
    }

    /// Human-readable role label used in narrative prompts.
    pub fn role_label(self) -> &'static str {
        match self {
            Category::Frontend => "frontend developer",
            Category::Backend => "backend developer",
            Category::Other => "software developer",
        }
    }
}

/// A skill entry as submitted by the caller. Clients send either a bare
/// skill name or a `{skill, category}` record; the untagged union accepts
/// both without runtime type-sniffing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SkillEntry {
    Name(String),
    Tagged {
        skill: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        category: Option<String>,
    },
}

impl SkillEntry {
    pub fn name(&self) -> &str {
        match self {
            SkillEntry::Name(name) => name,
            SkillEntry::Tagged { skill, .. } => skill,
        }
    }
}

/// Free-text candidate attributes. Used only for narrative prompts, never
/// for scoring.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CandidateAttributes {
    #[serde(default)]
    pub career: Option<String>,
    #[serde(default)]
    pub education: Option<String>,
    #[serde(default)]
    pub major: Option<String>,
}

/// Full candidate profile for one recommendation request. The engine is
/// stateless per call: everything it needs arrives here as an explicit
/// parameter.
#[derive(Debug, Clone, Deserialize)]
pub struct CandidateProfile {
    pub category: String,
    #[serde(default)]
    pub skills: Vec<SkillEntry>,
    #[serde(default)]
    pub candidate: CandidateAttributes,
}

impl CandidateProfile {
    pub fn parsed_category(&self) -> Category {
        Category::parse(&self.category)
    }

    /// Normalizes skill entries to plain names, de-duplicating while
    /// preserving first-seen order. Duplicates are the caller's prerogative;
    /// de-duplication is the engine's responsibility.
    pub fn skill_names(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        self.skills
            .iter()
            .map(|entry| entry.name())
            .filter(|name| seen.insert(name.to_string()))
            .map(|name| name.to_string())
            .collect()
    }
}
