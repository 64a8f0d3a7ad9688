//! Scorer — 0–100 skill-overlap score for one posting against a candidate.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::corpus::JobPosting;

/// A posting annotated with its match score and the matched skill subset.
/// Derived per request; never stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredJob {
    #[serde(flatten)]
    pub posting: JobPosting,
    /// `round(100 * |matched| / |required|)`, clamped at 100.
    /// Zero required skills → 0.
    pub match_score: u32,
    /// Subset of the posting's required skills also held by the candidate,
    /// in posting order, de-duplicated by posting-skill identity.
    pub matched_skills: Vec<String>,
}

/// Scores one posting against the candidate's normalized skill names.
/// Pure function; case-sensitive membership, no fuzzy matching.
pub fn score(posting: &JobPosting, candidate_skills: &[String]) -> ScoredJob {
    let candidate_set: HashSet<&str> = candidate_skills.iter().map(String::as_str).collect();

    let mut seen = HashSet::new();
    let matched_skills: Vec<String> = posting
        .skills
        .iter()
        .filter(|skill| candidate_set.contains(skill.as_str()))
        .filter(|skill| seen.insert(skill.as_str()))
        .cloned()
        .collect();

    let match_score = if posting.skills.is_empty() {
        0
    } else {
        let ratio = matched_skills.len() as f64 / posting.skills.len() as f64;
        ((ratio * 100.0).round() as u32).min(100)
    };

    ScoredJob {
        posting: posting.clone(),
        match_score,
        matched_skills,
    }
}

/// Scores every posting in the classifier's output, preserving its order.
pub fn score_all(postings: &[&JobPosting], candidate_skills: &[String]) -> Vec<ScoredJob> {
    postings
        .iter()
        .map(|posting| score(posting, candidate_skills))
        .collect()
}
