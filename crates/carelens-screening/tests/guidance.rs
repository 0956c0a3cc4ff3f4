use carelens_core::models::tier::ConcernTier;
use carelens_screening::guidance::guidance;

#[test]
fn every_tier_has_a_complete_bundle() {
    for tier in [
        ConcernTier::Low,
        ConcernTier::Mild,
        ConcernTier::Moderate,
        ConcernTier::High,
    ] {
        let g = guidance(tier);
        assert!(!g.severity.is_empty());
        assert!(!g.urgency.is_empty());
        assert!(!g.color.is_empty());
        assert!(!g.message.is_empty());
        assert!(!g.recommendation.is_empty());
        assert!(!g.next_steps.is_empty());
    }
}

#[test]
fn bundles_are_distinct_per_tier() {
    let low = guidance(ConcernTier::Low);
    let high = guidance(ConcernTier::High);
    assert_ne!(low.severity, high.severity);
    assert_ne!(low.color, high.color);
    assert!(high.next_steps.len() >= low.next_steps.len());
}
