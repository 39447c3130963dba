use super::*;
use crate::verdict::VerdictKind;

#[test]
fn test_bias_score_weights() {
    let counts = BiasSignalCounts {
        emotional: 1,
        manipulative: 1,
        political: 1,
        opinion: 1,
    };
    assert_eq!(bias_score(&counts), 30);
    assert_eq!(counts.bias_score(), 30);
}

#[test]
fn test_bias_score_empty_is_zero() {
    assert_eq!(bias_score(&BiasSignalCounts::default()), 0);
}

#[test]
fn test_bias_score_clamped() {
    let counts = BiasSignalCounts {
        emotional: 4,
        manipulative: 9,
        political: 0,
        opinion: 0,
    };
    assert_eq!(bias_score(&counts), 100);

    let huge = BiasSignalCounts {
        emotional: u32::MAX,
        manipulative: u32::MAX,
        political: u32::MAX,
        opinion: u32::MAX,
    };
    assert_eq!(bias_score(&huge), 100);
}

#[test]
fn test_three_misinformation_verdicts() {
    let kinds = [VerdictKind::Misinformation; 3];
    let counts = VerdictCounts::tally(&kinds);
    let score = misinformation_score(&counts);

    assert_eq!(score, 60);
    assert_eq!(final_reliability_score(score), 40);
}

#[test]
fn test_supported_verdicts_do_not_penalize() {
    let kinds = [
        VerdictKind::Supported,
        VerdictKind::Uncertain,
        VerdictKind::Supported,
    ];
    let counts = VerdictCounts::tally(&kinds);

    assert_eq!(counts.total(), 3);
    assert_eq!(counts.supported, 2);
    assert_eq!(counts.misinformation_score(), 5);
}

#[test]
fn test_misinformation_score_clamped_and_reliability_floor() {
    let counts = VerdictCounts {
        supported: 0,
        misinformation: 6,
        uncertain: 0,
    };
    assert_eq!(misinformation_score(&counts), 100);
    assert_eq!(final_reliability_score(100), 0);
    assert_eq!(final_reliability_score(0), 100);
    assert_eq!(final_reliability_score(u8::MAX), 0);
}

#[test]
fn test_scores_stay_in_range() {
    for misinformation in 0..12u32 {
        for uncertain in 0..25u32 {
            let counts = VerdictCounts {
                supported: 0,
                misinformation,
                uncertain,
            };
            let score = misinformation_score(&counts);
            assert!(score <= 100);
            assert_eq!(u32::from(final_reliability_score(score)), 100 - u32::from(score));
        }
    }
}
