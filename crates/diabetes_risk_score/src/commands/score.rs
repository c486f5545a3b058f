//! Score command - computes the lifestyle risk score.

use risk_structs::LifestyleProfile;
use tracing::info;

use crate::report;

/// Runs the score command.
pub fn run(profile: &LifestyleProfile) {
    info!(activity = %profile.activity, "Scoring lifestyle profile");

    let score = lifestyle_scorer::score(profile);
    report::print_lifestyle_score(score);
}
