//! Recommendation aggregator — combines the matching pipeline and the two
//! narrative generations into the single response contract.
//!
//! Flow: classify → score → rank (synchronous, cheap), then the two
//! narrative generations concurrently. The three sub-computations share
//! nothing beyond the profile, so joining them is a performance choice with
//! identical observable output to sequential execution.

pub mod handlers;

use serde::Serialize;
use std::time::Duration;
use tracing::info;

use crate::corpus::JobCorpus;
use crate::llm_client::CompletionProvider;
use crate::matching::{classifier, ranker, scorer};
use crate::matching::scorer::ScoredJob;
use crate::models::profile::CandidateProfile;
use crate::narrative::generator::{generate_analysis, generate_improvement};
use crate::narrative::{AnalysisResult, ImprovementPlan};

/// The full recommendation payload returned to the caller.
#[derive(Debug, Serialize)]
pub struct Recommendation {
    pub jobs: Vec<ScoredJob>,
    pub analysis: AnalysisResult,
    pub improvement: ImprovementPlan,
}

/// Runs the engine for one candidate profile. Stateless: the corpus is
/// read-only and everything derived is request-local.
///
/// An unrecognized category degrades to the unfiltered corpus for jobs and
/// the default fallback table for narrative; it never errors.
pub async fn recommend(
    corpus: &JobCorpus,
    provider: &dyn CompletionProvider,
    provider_timeout: Duration,
    profile: &CandidateProfile,
) -> Recommendation {
    let category = profile.parsed_category();
    let skill_names = profile.skill_names();

    let filtered = classifier::filter_by_category(corpus, category);
    let jobs = ranker::rank(scorer::score_all(&filtered, &skill_names));
    info!(
        "Matched {} of {} postings for category token '{}'",
        jobs.len(),
        corpus.len(),
        profile.category
    );

    let (analysis, improvement) = tokio::join!(
        generate_analysis(
            provider,
            provider_timeout,
            category,
            &profile.candidate,
            &skill_names,
        ),
        generate_improvement(
            provider,
            provider_timeout,
            category,
            &profile.candidate,
            &skill_names,
        ),
    );

    Recommendation {
        jobs,
        analysis,
        improvement,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    use crate::corpus::JobPosting;
    use crate::llm_client::ProviderError;
    use crate::models::profile::{CandidateAttributes, Category, SkillEntry};
    use crate::narrative::fallback;

    const TIMEOUT: Duration = Duration::from_secs(5);

    /// Fails every call; narrative must come from the fallback tables.
    struct FailingProvider;

    #[async_trait]
    impl CompletionProvider for FailingProvider {
        async fn complete(
            &self,
            _system: &str,
            _prompt: &str,
            _temperature: f32,
        ) -> Result<String, ProviderError> {
            Err(ProviderError::Timeout)
        }
    }

    fn posting(id: u32, title: &str, skills: &[&str]) -> JobPosting {
        JobPosting {
            id,
            title: title.to_string(),
            company: "테스트컴퍼니(주)".to_string(),
            location: "서울".to_string(),
            experience_required: "1-3년".to_string(),
            salary: "협의".to_string(),
            skills: skills.iter().map(|s| s.to_string()).collect(),
            url: format!("https://example.com/job/{id}"),
        }
    }

    fn profile(category: &str, skills: &[&str]) -> CandidateProfile {
        CandidateProfile {
            category: category.to_string(),
            skills: skills
                .iter()
                .map(|s| SkillEntry::Name(s.to_string()))
                .collect(),
            candidate: CandidateAttributes::default(),
        }
    }

    #[tokio::test]
    async fn test_frontend_scenario_scores_and_matches() {
        let corpus = JobCorpus::new(vec![posting(
            1,
            "프론트엔드 개발자",
            &["React", "HTML5", "CSS3", "TypeScript"],
        )]);

        let result = recommend(
            &corpus,
            &FailingProvider,
            TIMEOUT,
            &profile("frontend", &["React", "HTML5"]),
        )
        .await;

        assert_eq!(result.jobs.len(), 1);
        assert_eq!(result.jobs[0].match_score, 50);
        assert_eq!(result.jobs[0].matched_skills, vec!["React", "HTML5"]);
    }

    #[tokio::test]
    async fn test_backend_scenario_full_match() {
        let required = &["Python", "Django", "PostgreSQL", "RESTful API", "Docker", "AWS"];
        let corpus = JobCorpus::new(vec![posting(1, "Python 백엔드 개발자", required)]);

        let result = recommend(
            &corpus,
            &FailingProvider,
            TIMEOUT,
            &profile("backend", required),
        )
        .await;

        assert_eq!(result.jobs[0].match_score, 100);
    }

    #[tokio::test]
    async fn test_provider_failure_leaves_job_list_intact() {
        let corpus = JobCorpus::new(vec![
            posting(1, "웹 퍼블리셔", &["HTML", "CSS"]),
            posting(2, "React 개발자", &["React", "TypeScript"]),
        ]);

        let result = recommend(
            &corpus,
            &FailingProvider,
            TIMEOUT,
            &profile("frontend", &["React", "TypeScript"]),
        )
        .await;

        // Narrative degraded to fallback...
        assert_eq!(result.analysis, fallback::analysis_for(Category::Frontend));
        assert_eq!(
            result.improvement,
            fallback::improvement_for(Category::Frontend)
        );
        // ...while jobs are unaffected and correctly ranked.
        assert_eq!(result.jobs[0].posting.id, 2);
        assert_eq!(result.jobs[0].match_score, 100);
        assert_eq!(result.jobs[1].match_score, 0);
    }

    #[tokio::test]
    async fn test_empty_category_token_serves_full_corpus_ranked() {
        let corpus = JobCorpus::new(vec![
            posting(1, "데이터 엔지니어", &["Spark"]),
            posting(2, "백엔드 개발자", &["Python", "Django"]),
            posting(3, "프론트엔드 개발자", &["React"]),
        ]);

        let result = recommend(
            &corpus,
            &FailingProvider,
            TIMEOUT,
            &profile("", &["Python", "Django"]),
        )
        .await;

        assert_eq!(result.jobs.len(), 3);
        let scores: Vec<u32> = result.jobs.iter().map(|j| j.match_score).collect();
        assert_eq!(scores, vec![100, 0, 0]);
        assert_eq!(result.jobs[0].posting.id, 2);
        // Unrecognized category narrates from the default (backend) table.
        assert_eq!(result.analysis, fallback::analysis_for(Category::Backend));
    }

    #[tokio::test]
    async fn test_duplicate_candidate_skills_do_not_inflate_score() {
        let corpus = JobCorpus::new(vec![posting(1, "React 개발자", &["React", "Redux"])]);

        let result = recommend(
            &corpus,
            &FailingProvider,
            TIMEOUT,
            &profile("frontend", &["React", "React", "React"]),
        )
        .await;

        assert_eq!(result.jobs[0].match_score, 50);
        assert_eq!(result.jobs[0].matched_skills, vec!["React"]);
    }
}
