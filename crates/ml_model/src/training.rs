//! Training logic for the risk classifier.

use burn::data::dataset::Dataset;
use burn::nn::loss::MseLoss;
use burn::optim::{AdamConfig, GradientsParams, Optimizer};
use burn::prelude::*;
use burn::tensor::backend::AutodiffBackend;
use feature_extractor::TrainingSample;
use tracing::info;

use crate::dataset::{RiskBatcher, RiskDataset};
use crate::{DECISION_THRESHOLD, RiskModel, TrainingConfig, TrainingData};

/// Training stops after this many epochs without validation improvement.
const EARLY_STOPPING_PATIENCE: usize = 10;

/// Output from training.
#[derive(Debug, Clone)]
pub struct TrainingOutput {
    /// Final training loss.
    pub final_train_loss: f32,
    /// Final validation loss (if validation data was used).
    pub final_valid_loss: Option<f32>,
    /// Number of epochs completed.
    pub epochs_completed: usize,
}

/// Trains the classifier on the provided data.
///
/// Uses a plain epoch/batch loop with the Adam optimizer and MSE loss on
/// the sigmoid output against the 0/1 outcome targets. Batches are
/// reshuffled each epoch with the epoch index as seed, so a run is
/// reproducible. Early stopping watches the validation loss.
///
/// # Errors
///
/// Returns an error if no training samples are available.
pub fn train<B: AutodiffBackend>(
    model: &mut RiskModel<B>,
    data: &TrainingData,
    config: &TrainingConfig,
) -> anyhow::Result<TrainingOutput> {
    if data.is_empty() {
        return Err(anyhow::anyhow!("No training data provided"));
    }

    let device = model.linear1.weight.device();

    let (train_samples, valid_samples) = data.split(config.validation_split);

    if train_samples.is_empty() {
        return Err(anyhow::anyhow!("No training samples after split"));
    }

    let dataset = RiskDataset::from_slice(&train_samples);
    let batcher = RiskBatcher::<B>::new(device);

    let valid_dataset = if valid_samples.is_empty() {
        None
    } else {
        Some(RiskDataset::from_slice(&valid_samples))
    };

    let mut optimizer = AdamConfig::new().init();
    let loss_fn = MseLoss::new();

    let mut final_train_loss = 0.0;
    let mut final_valid_loss: Option<f32> = None;
    let mut best_valid_loss = f32::MAX;
    let mut epochs_without_improvement = 0;

    for epoch in 0..config.epochs {
        let mut epoch_loss = 0.0;
        let mut batch_count = 0;

        let num_samples = dataset.len();
        let mut indices: Vec<usize> = (0..num_samples).collect();
        shuffle_indices(&mut indices, epoch as u64);

        for batch_start in (0..num_samples).step_by(config.batch_size) {
            let batch_end = (batch_start + config.batch_size).min(num_samples);
            let Some(batch_indices) = indices.get(batch_start..batch_end) else {
                continue;
            };

            let items: Vec<_> = batch_indices
                .iter()
                .filter_map(|&i| dataset.get(i))
                .collect();

            if items.is_empty() {
                continue;
            }

            let batch = batcher.batch(items);

            let predictions = model.forward(batch.inputs);
            let loss = loss_fn.forward(predictions, batch.targets, burn::nn::loss::Reduction::Mean);

            let loss_value: f32 = loss
                .clone()
                .into_data()
                .to_vec()
                .unwrap_or_else(|_| vec![0.0])
                .first()
                .copied()
                .unwrap_or(0.0);

            epoch_loss += f64::from(loss_value);
            batch_count += 1;

            let grads = loss.backward();
            let grads = GradientsParams::from_grads(grads, model);

            *model = optimizer.step(config.learning_rate, model.clone(), grads);
        }

        final_train_loss = if batch_count > 0 {
            (epoch_loss / f64::from(batch_count)) as f32
        } else {
            0.0
        };

        if let Some(valid_ds) = &valid_dataset {
            let valid_loss = compute_validation_loss(model, valid_ds, &batcher, &loss_fn);
            final_valid_loss = Some(valid_loss);

            if valid_loss < best_valid_loss {
                best_valid_loss = valid_loss;
                epochs_without_improvement = 0;
            } else {
                epochs_without_improvement += 1;
                if epochs_without_improvement >= EARLY_STOPPING_PATIENCE {
                    log_progress(epoch + 1, final_train_loss, final_valid_loss);
                    info!(
                        patience = EARLY_STOPPING_PATIENCE,
                        "Early stopping: no validation improvement"
                    );
                    return Ok(TrainingOutput {
                        final_train_loss,
                        final_valid_loss,
                        epochs_completed: epoch + 1,
                    });
                }
            }
        }

        if epoch % 10 == 0 || epoch == config.epochs - 1 {
            log_progress(epoch + 1, final_train_loss, final_valid_loss);
        }
    }

    Ok(TrainingOutput {
        final_train_loss,
        final_valid_loss,
        epochs_completed: config.epochs,
    })
}

/// Computes the validation loss on a dataset.
fn compute_validation_loss<B: Backend>(
    model: &RiskModel<B>,
    dataset: &RiskDataset,
    batcher: &RiskBatcher<B>,
    loss_fn: &MseLoss,
) -> f32 {
    let num_samples = dataset.len();
    if num_samples == 0 {
        return 0.0;
    }

    let mut total_loss = 0.0;
    let mut batch_count = 0;

    const BATCH_SIZE: usize = 64;
    for batch_start in (0..num_samples).step_by(BATCH_SIZE) {
        let batch_end = (batch_start + BATCH_SIZE).min(num_samples);

        let items: Vec<_> = (batch_start..batch_end)
            .filter_map(|i| dataset.get(i))
            .collect();

        if items.is_empty() {
            continue;
        }

        let batch = batcher.batch(items);
        let predictions = model.forward(batch.inputs);
        let loss = loss_fn.forward(predictions, batch.targets, burn::nn::loss::Reduction::Mean);

        let loss_value: f32 = loss
            .into_data()
            .to_vec()
            .unwrap_or_else(|_| vec![0.0])
            .first()
            .copied()
            .unwrap_or(0.0);

        total_loss += f64::from(loss_value);
        batch_count += 1;
    }

    if batch_count > 0 {
        (total_loss / f64::from(batch_count)) as f32
    } else {
        0.0
    }
}

/// Fraction of samples whose thresholded prediction matches the outcome.
///
/// Used for the held-out evaluation after training.
pub fn accuracy<B: Backend>(
    model: &RiskModel<B>,
    samples: &[TrainingSample],
    device: &B::Device,
) -> f32 {
    if samples.is_empty() {
        return 0.0;
    }

    let dataset = RiskDataset::from_slice(samples);
    let batcher = RiskBatcher::<B>::new(device.clone());

    let mut correct = 0usize;

    const BATCH_SIZE: usize = 64;
    let num_samples = dataset.len();

    for batch_start in (0..num_samples).step_by(BATCH_SIZE) {
        let batch_end = (batch_start + BATCH_SIZE).min(num_samples);

        let items: Vec<_> = (batch_start..batch_end)
            .filter_map(|i| dataset.get(i))
            .collect();

        if items.is_empty() {
            continue;
        }

        let targets: Vec<f32> = items.iter().map(|item| item.target).collect();

        let batch = batcher.batch(items);
        let predictions = model
            .forward(batch.inputs)
            .into_data()
            .to_vec::<f32>()
            .unwrap_or_default();

        correct += predictions
            .iter()
            .zip(&targets)
            .filter(|(probability, target)| {
                let predicted = **probability >= DECISION_THRESHOLD;
                let actual = **target >= DECISION_THRESHOLD;
                predicted == actual
            })
            .count();
    }

    correct as f32 / num_samples as f32
}

/// Shuffles indices using a simple LCG-based shuffle.
fn shuffle_indices(indices: &mut [usize], seed: u64) {
    let mut rng_state = seed.wrapping_add(12345);

    for i in (1..indices.len()).rev() {
        // LCG: state = (a * state + c) mod m
        rng_state = rng_state.wrapping_mul(6364136223846793005).wrapping_add(1);
        let j = ((rng_state >> 33) as usize) % (i + 1);
        indices.swap(i, j);
    }
}

/// Logs training progress.
fn log_progress(epoch: usize, train_loss: f32, valid_loss: Option<f32>) {
    if let Some(vl) = valid_loss {
        info!(epoch, train_loss, valid_loss = vl, "Training progress");
    } else {
        info!(epoch, train_loss, "Training progress");
    }
}
