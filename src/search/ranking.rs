//! Ranking of scored candidates.

use crate::search::scoring::ScoredCandidate;

/// Drop non-positive scores, sort descending and keep the first `limit`.
///
/// The sort is stable, so equal scores keep their input order and
/// `rank(xs, k)` is always a prefix of `rank(xs, k + 1)`.
pub fn rank(mut scored: Vec<ScoredCandidate<'_>>, limit: usize) -> Vec<ScoredCandidate<'_>> {
    scored.retain(|candidate| candidate.score > 0.0);
    scored.sort_by(|a, b| b.score.total_cmp(&a.score));
    scored.truncate(limit);
    scored
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::CandidateRecord;

    fn scored<'a>(records: &'a [CandidateRecord], scores: &[f64]) -> Vec<ScoredCandidate<'a>> {
        records
            .iter()
            .zip(scores)
            .map(|(record, &score)| ScoredCandidate {
                record,
                score,
                reasons: Vec::new(),
            })
            .collect()
    }

    fn ids(ranked: &[ScoredCandidate<'_>]) -> Vec<String> {
        ranked.iter().map(|c| c.record.id.clone()).collect()
    }

    fn records(count: usize) -> Vec<CandidateRecord> {
        (0..count)
            .map(|i| CandidateRecord::new(format!("R{i}"), "").with_id(format!("r{i}")))
            .collect()
    }

    #[test]
    fn test_rank_filters_and_sorts() {
        let records = records(5);
        let ranked = rank(scored(&records, &[0.0, 5.0, -1.0, 12.0, 5.0]), 20);
        assert_eq!(ids(&ranked), vec!["r3", "r1", "r4"]);
    }

    #[test]
    fn test_rank_limit_is_prefix() {
        let records = records(6);
        let scores = [3.0, 9.0, 3.0, 1.0, 9.0, 3.0];

        for k in 0..6 {
            let shorter = ids(&rank(scored(&records, &scores), k));
            let longer = ids(&rank(scored(&records, &scores), k + 1));
            assert_eq!(shorter[..], longer[..shorter.len()]);
        }
        assert!(rank(scored(&records, &scores), 0).is_empty());
    }

    #[test]
    fn test_rank_empty() {
        assert!(rank(Vec::new(), 5).is_empty());
    }
}
