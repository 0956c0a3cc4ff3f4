//! Per-tier narrative bundles: labels, message, recommendation, and
//! ordered next steps. Static content, selected once per completed
//! screening.

use std::sync::LazyLock;

use carelens_core::models::tier::{ConcernTier, TierGuidance};

/// The static guidance bundle for a tier.
pub fn guidance(tier: ConcernTier) -> &'static TierGuidance {
    static BUNDLES: LazyLock<[TierGuidance; 4]> = LazyLock::new(|| {
        [
            bundle(
                "Low concern",
                "Routine",
                "green",
                "The responses suggest little to no change in memory or thinking beyond \
                 what is typical for normal aging.",
                "No immediate action is needed. Mention any lingering concerns at the next \
                 routine check-up.",
                &[
                    "Keep up regular physical and social activity",
                    "Repeat this screening in 6 to 12 months, or sooner if anything changes",
                ],
            ),
            bundle(
                "Mild concern",
                "Monitor",
                "yellow",
                "The responses suggest some changes in memory or thinking that are worth \
                 keeping an eye on.",
                "Track the changes you noticed and bring them up with a primary care \
                 provider at the next visit.",
                &[
                    "Write down specific examples of the changes, with dates",
                    "Schedule a routine visit with a primary care provider",
                    "Repeat this screening in 3 to 6 months",
                ],
            ),
            bundle(
                "Moderate concern",
                "Schedule soon",
                "orange",
                "The responses suggest noticeable changes in memory or thinking that go \
                 beyond normal aging.",
                "Schedule an appointment with a primary care provider soon for a clinical \
                 cognitive evaluation.",
                &[
                    "Book a primary care appointment within the next few weeks",
                    "Bring this report and a list of current medications",
                    "Ask whether a referral to a memory specialist is appropriate",
                    "Review home safety: medications, driving, finances",
                ],
            ),
            bundle(
                "High concern",
                "Prompt evaluation",
                "red",
                "The responses suggest significant changes in memory or thinking that \
                 warrant a professional evaluation without delay.",
                "Contact a primary care provider promptly to arrange a full cognitive \
                 evaluation, and discuss support at home in the meantime.",
                &[
                    "Call a primary care provider this week",
                    "Bring this report and a family member to the appointment",
                    "Ask about referral to a neurologist or memory clinic",
                    "Arrange supervision for medications, driving, and finances",
                    "Explore in-home support options in your area",
                ],
            ),
        ]
    });

    match tier {
        ConcernTier::Low => &BUNDLES[0],
        ConcernTier::Mild => &BUNDLES[1],
        ConcernTier::Moderate => &BUNDLES[2],
        ConcernTier::High => &BUNDLES[3],
    }
}

fn bundle(
    severity: &str,
    urgency: &str,
    color: &str,
    message: &str,
    recommendation: &str,
    next_steps: &[&str],
) -> TierGuidance {
    TierGuidance {
        severity: severity.to_string(),
        urgency: urgency.to_string(),
        color: color.to_string(),
        message: message.to_string(),
        recommendation: recommendation.to_string(),
        next_steps: next_steps.iter().map(|s| s.to_string()).collect(),
    }
}
