//! Assess command - combined classifier and lifestyle evaluation.

use anyhow::Result;
use burn::backend::NdArray;
use feature_extractor::extract_features;
use ml_model::{load_checkpoint, predict_label};
use risk_structs::{HealthProfile, LifestyleProfile, RiskResult};
use tracing::info;

use super::init_device;
use crate::report;

type Backend = NdArray;

/// Runs the assess command.
///
/// # Errors
///
/// Returns an error if the model artifact is unavailable.
pub fn run(
    model_path: &str,
    health: &HealthProfile,
    lifestyle: &LifestyleProfile,
) -> Result<()> {
    info!(model_path, "Running combined risk assessment");

    let device = init_device();
    let model = load_checkpoint::<Backend>(model_path, &device)?;

    let label = predict_label(&model, &extract_features(health), &device);
    let lifestyle_score = lifestyle_scorer::score(lifestyle);

    let result = RiskResult {
        label,
        lifestyle_score,
    };
    report::print_assessment(&result);

    Ok(())
}
