//! Summary sentence selection.

use crate::summarize::SummaryConfig;

/// Number of sentences to keep from a document of `sentence_count` sentences.
///
/// Roughly `ratio` of the document, never fewer than `min_sentences` and
/// never more than `max_sentences` (nor more than the document has).
pub fn summary_length(sentence_count: usize, config: &SummaryConfig) -> usize {
    let target = (sentence_count as f64 * config.ratio).floor() as usize;
    target.min(config.max_sentences).max(config.min_sentences).min(sentence_count)
}

/// Pick the indices of the `count` highest scores, returned in document order.
///
/// Equal scores keep their original relative order, so the earlier sentence
/// wins a tie and output is reproducible for identical input.
pub fn select_sentences(scores: &[f64], count: usize) -> Vec<usize> {
    let mut ranked: Vec<usize> = (0..scores.len()).collect();
    ranked.sort_by(|&a, &b| scores[b].total_cmp(&scores[a]));

    let mut selected: Vec<usize> = ranked.into_iter().take(count).collect();
    selected.sort_unstable();
    selected
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(4, 3)]
    #[case(9, 3)]
    #[case(10, 3)]
    #[case(13, 3)]
    #[case(14, 4)]
    #[case(16, 4)]
    #[case(17, 5)]
    #[case(1000, 5)]
    fn test_default_summary_length(#[case] sentence_count: usize, #[case] expected: usize) {
        assert_eq!(summary_length(sentence_count, &SummaryConfig::default()), expected);
    }

    #[test]
    fn test_summary_length_never_exceeds_document() {
        let config = SummaryConfig::builder().min_sentences(8).max_sentences(10).build();
        assert_eq!(summary_length(6, &config), 6);
    }

    #[test]
    fn test_custom_ratio() {
        let config = SummaryConfig::builder().ratio(0.5).max_sentences(20).build();
        assert_eq!(summary_length(20, &config), 10);
    }

    #[test]
    fn test_selects_top_scores_in_document_order() {
        let scores = [0.1, 0.9, 0.3, 0.8, 0.2, 0.7];
        assert_eq!(select_sentences(&scores, 3), vec![1, 3, 5]);
    }

    #[test]
    fn test_ties_prefer_earlier_sentences() {
        let scores = [1.0, 1.0, 1.0, 1.0, 1.0];
        assert_eq!(select_sentences(&scores, 3), vec![0, 1, 2]);

        let scores = [0.5, 2.0, 0.5, 2.0, 0.5];
        assert_eq!(select_sentences(&scores, 3), vec![0, 1, 3]);
    }

    #[test]
    fn test_count_larger_than_input() {
        assert_eq!(select_sentences(&[0.3, 0.1], 5), vec![0, 1]);
        assert!(select_sentences(&[], 3).is_empty());
    }
}
