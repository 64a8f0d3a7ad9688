//! Ranker — orders scored postings best-match-first.

use crate::matching::scorer::ScoredJob;

/// Sorts descending by `match_score`. The sort is stable, so ties keep the
/// relative order produced by the classifier. Zero-score postings are
/// retained: callers observe "no good matches" explicitly rather than
/// receiving a silently thinned list.
pub fn rank(mut scored: Vec<ScoredJob>) -> Vec<ScoredJob> {
    scored.sort_by(|a, b| b.match_score.cmp(&a.match_score));
    scored
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::JobPosting;

    fn scored(id: u32, match_score: u32) -> ScoredJob {
        ScoredJob {
            posting: JobPosting {
                id,
                title: "백엔드 개발자".to_string(),
                company: "테스트컴퍼니(주)".to_string(),
                location: "서울".to_string(),
                experience_required: "1-3년".to_string(),
                salary: "협의".to_string(),
                skills: vec![],
                url: format!("https://example.com/job/{id}"),
            },
            match_score,
            matched_skills: vec![],
        }
    }

    #[test]
    fn test_sorted_non_increasing() {
        let ranked = rank(vec![scored(1, 33), scored(2, 100), scored(3, 50)]);
        let scores: Vec<u32> = ranked.iter().map(|j| j.match_score).collect();
        assert_eq!(scores, vec![100, 50, 33]);
    }

    #[test]
    fn test_ties_preserve_classifier_order() {
        let ranked = rank(vec![
            scored(1, 50),
            scored(2, 80),
            scored(3, 50),
            scored(4, 50),
        ]);
        let ids: Vec<u32> = ranked.iter().map(|j| j.posting.id).collect();
        assert_eq!(ids, vec![2, 1, 3, 4]);
    }

    #[test]
    fn test_zero_score_postings_are_retained() {
        let ranked = rank(vec![scored(1, 0), scored(2, 0)]);
        assert_eq!(ranked.len(), 2);
    }

    #[test]
    fn test_empty_input_is_fine() {
        assert!(rank(vec![]).is_empty());
    }
}
