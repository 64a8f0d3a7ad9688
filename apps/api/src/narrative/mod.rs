//! Narrative Generation — the two self-assessment documents.
//!
//! Each document is produced by the same protocol: build prompt → one
//! provider call → parse JSON → success or static fallback. Narrative
//! content is non-critical relative to the job list, so provider anomalies
//! never fail the request.

pub mod fallback;
pub mod generator;
pub mod prompts;

use serde::{Deserialize, Serialize};

/// One strength in the skill analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Strength {
    pub skill: String,
    pub description: String,
}

/// How far the candidate is from market demand for one skill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DemandLevel {
    Missing,
    Weak,
}

/// One market-gap item in the skill analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketGap {
    pub skill: String,
    pub level: DemandLevel,
    pub description: String,
}

/// Skill analysis document: strengths, market gaps, career assessment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub strengths: Vec<Strength>,
    pub market: Vec<MarketGap>,
    pub career_analysis: String,
}

/// One step of the learning roadmap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoadmapStep {
    pub title: String,
    pub description: String,
}

/// Learning roadmap document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImprovementPlan {
    pub priority_skills: String,
    pub roadmap: Vec<RoadmapStep>,
}
