//! Category Classifier — partitions the corpus by developer specialization.
//!
//! A posting belongs to a category if its title contains one of the
//! category's title tokens OR its skill list intersects the category's
//! canonical skill set. The OR rule is deliberate: postings with generic
//! titles but a matching tech stack must not be excluded. Matching is
//! case-sensitive; no fuzzy matching.

use crate::corpus::{JobCorpus, JobPosting};
use crate::models::profile::Category;

/// Title substrings marking a frontend posting. The corpus is Korean-market
/// data, so localized tokens are part of the rule set.
const FRONTEND_TITLE_TOKENS: &[&str] = &["프론트엔드", "Front", "웹", "React", "UI"];

/// Canonical frontend skills.
const FRONTEND_SKILLS: &[&str] = &[
    "React",
    "Vue",
    "Angular",
    "JavaScript",
    "HTML",
    "CSS",
    "TypeScript",
];

/// Title substrings marking a backend posting.
const BACKEND_TITLE_TOKENS: &[&str] = &["백엔드", "Back", "서버", "Java", "Python", "Node"];

/// Canonical backend skills.
const BACKEND_SKILLS: &[&str] = &[
    "Java", "Spring", "Python", "Django", "Node.js", "Express", "PHP", "Laravel", "MySQL",
    "MongoDB",
];

/// Returns the subset of the corpus belonging to `category`, preserving
/// corpus order. `Other` returns the entire corpus unfiltered.
pub fn filter_by_category(corpus: &JobCorpus, category: Category) -> Vec<&JobPosting> {
    let (title_tokens, canonical_skills): (&[&str], &[&str]) = match category {
        Category::Frontend => (FRONTEND_TITLE_TOKENS, FRONTEND_SKILLS),
        Category::Backend => (BACKEND_TITLE_TOKENS, BACKEND_SKILLS),
        Category::Other => return corpus.postings().iter().collect(),
    };

    corpus
        .postings()
        .iter()
        .filter(|posting| matches_category(posting, title_tokens, canonical_skills))
        .collect()
}

fn matches_category(posting: &JobPosting, title_tokens: &[&str], canonical_skills: &[&str]) -> bool {
    let title_match = title_tokens.iter().any(|token| posting.title.contains(token));
    let skill_match = posting
        .skills
        .iter()
        .any(|skill| canonical_skills.contains(&skill.as_str()));
    title_match || skill_match
}
