//! Train command - fits the classifier on the labeled dataset.
//!
//! Implements the training collaborator: load the 9-column CSV, split it
//! with a fixed seed, fit the classifier, evaluate on the held-out side
//! and serialize the checkpoint to the configured path.

use std::path::Path;

use anyhow::Result;
use burn::backend::{Autodiff, NdArray};
use burn::module::AutodiffModule;
use feature_extractor::extract_training_samples;
use health_data::{DEFAULT_TRAIN_RATIO, train_test_split};
use ml_model::{
    ModelConfig, TrainingConfig, TrainingData, accuracy, create_model, save_checkpoint, train,
};
use tracing::{info, warn};

use super::init_device;

/// Training requires the Autodiff wrapper for automatic differentiation.
type TrainBackend = Autodiff<NdArray>;

/// Runs the train command.
///
/// # Errors
///
/// Returns an error if the dataset cannot be read, training fails, or
/// the checkpoint cannot be written.
pub fn run(
    data_path: &Path,
    model_path: &str,
    epochs: usize,
    batch_size: usize,
    learning_rate: f64,
    seed: u64,
) -> Result<()> {
    info!(data = %data_path.display(), model_path, "Starting training");

    // Step 1: Load the labeled dataset
    info!("Step 1: Loading dataset...");
    let records = health_data::load_records(data_path)?;
    if records.is_empty() {
        anyhow::bail!("No records found in {}", data_path.display());
    }
    info!(records = records.len(), "Loaded dataset");

    // Step 2: Seeded train/test split
    info!("Step 2: Splitting dataset...");
    let split = train_test_split(records, DEFAULT_TRAIN_RATIO, seed);
    info!(
        training = split.training.len(),
        evaluation = split.evaluation.len(),
        seed,
        "Dataset split"
    );

    // Step 3: Initialize model
    info!("Step 3: Initializing model...");
    let device = init_device();
    let model_config = ModelConfig::default();
    let training_config = TrainingConfig::new(model_config.clone())
        .with_learning_rate(learning_rate)
        .with_epochs(epochs)
        .with_batch_size(batch_size);

    let mut model = create_model::<TrainBackend>(&device, &model_config);
    info!(
        hidden_size_1 = model_config.hidden_size_1,
        hidden_size_2 = model_config.hidden_size_2,
        "Model architecture"
    );

    // Step 4: Train
    info!("Step 4: Starting training...");
    let mut data = TrainingData::new();
    data.add_samples(extract_training_samples(&split.training));

    let output = train(&mut model, &data, &training_config)?;
    info!(
        final_train_loss = output.final_train_loss,
        final_valid_loss = output.final_valid_loss,
        epochs_completed = output.epochs_completed,
        "Training completed"
    );

    // Step 5: Evaluate on the held-out split
    info!("Step 5: Evaluating on held-out records...");
    let eval_accuracy = if split.evaluation.is_empty() {
        warn!("No evaluation records available");
        None
    } else {
        let eval_samples = extract_training_samples(&split.evaluation);
        let valid_model = model.valid();
        let score = accuracy(&valid_model, &eval_samples, &device);
        info!(
            eval_records = eval_samples.len(),
            eval_accuracy = score,
            "Evaluation completed"
        );
        Some(score)
    };

    // Step 6: Save the checkpoint
    info!("Step 6: Saving checkpoint...");
    let metrics = serde_json::json!({
        "final_train_loss": output.final_train_loss,
        "final_valid_loss": output.final_valid_loss,
        "epochs_completed": output.epochs_completed,
        "eval_accuracy": eval_accuracy,
    });
    let checkpoint = save_checkpoint(&model, model_path, &training_config, &metrics)?;

    info!(
        checkpoint = %checkpoint.path,
        metadata = %checkpoint.metadata_path,
        "Model trained and saved"
    );

    Ok(())
}
