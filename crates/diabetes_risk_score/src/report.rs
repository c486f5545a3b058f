//! Report rendering for risk evaluation results.

use risk_structs::{LifestyleTier, RiskLabel, RiskResult};
use tracing::info;

/// Prints the classifier verdict.
pub fn print_model_result(label: RiskLabel) {
    match label {
        RiskLabel::High => info!("Model prediction: High risk of diabetes"),
        RiskLabel::Low => info!("Model prediction: Low risk of diabetes"),
    }
}

/// Prints the lifestyle score with its tier advice.
pub fn print_lifestyle_score(score: u8) {
    info!(
        "Lifestyle risk score: {score} / {}",
        lifestyle_scorer::MAX_SCORE
    );
    info!("{}", LifestyleTier::from_score(score).advice());
}

/// Prints the full combined report for one evaluation.
pub fn print_assessment(result: &RiskResult) {
    info!("=== Risk Analysis Results ===");
    print_model_result(result.label);
    print_lifestyle_score(result.lifestyle_score);

    info!("=== Overall Health Guidance ===");
    info!("{}", result.guidance().message());
    info!(
        "Disclaimer: this tool is for educational use. \
         Consult a healthcare professional for medical advice."
    );
}
