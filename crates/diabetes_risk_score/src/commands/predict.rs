//! Predict command - runs the classifier on one health profile.

use anyhow::Result;
use burn::backend::NdArray;
use feature_extractor::extract_features;
use ml_model::{load_checkpoint, predict, probability_to_label};
use risk_structs::HealthProfile;
use tracing::{debug, info};

use super::init_device;
use crate::report;

type Backend = NdArray;

/// Runs the predict command.
///
/// # Errors
///
/// Returns an error if the model artifact is unavailable; no default
/// label is produced in that case.
pub fn run(model_path: &str, profile: &HealthProfile) -> Result<()> {
    info!(model_path, "Predicting diabetes risk");

    // The checkpoint is loaded once and held as an immutable handle for
    // the rest of the evaluation.
    let device = init_device();
    let model = load_checkpoint::<Backend>(model_path, &device)?;

    let features = extract_features(profile);
    let probability = predict(&model, &features, &device);
    debug!(probability, "Raw classifier output");

    report::print_model_result(probability_to_label(probability));

    Ok(())
}
