//! ML model crate for diabetes risk prediction.
//!
//! This crate uses the Burn deep learning framework to define, train,
//! and run inference with a small feedforward classifier over the 8
//! clinical features. The classifier outputs the probability of the
//! high-risk class; callers receive a binary label thresholded at
//! [`DECISION_THRESHOLD`].

use burn::nn::{Linear, LinearConfig, Relu, Sigmoid};
use burn::prelude::*;
use feature_extractor::{FEATURE_COUNT, ProfileFeatures, TrainingSample};
use risk_structs::RiskLabel;

mod checkpoint;
mod dataset;
mod training;

pub use checkpoint::*;
pub use dataset::*;
pub use training::*;

/// Probability at or above which a prediction becomes the high-risk label.
pub const DECISION_THRESHOLD: f32 = 0.5;

/// Configuration for the risk model architecture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelConfig {
    /// Number of hidden units in the first layer.
    pub hidden_size_1: usize,
    /// Number of hidden units in the second layer.
    pub hidden_size_2: usize,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            hidden_size_1: 16,
            hidden_size_2: 8,
        }
    }
}

/// Configuration for training the model.
#[derive(Debug, Clone)]
pub struct TrainingConfig {
    /// Learning rate for the optimizer.
    pub learning_rate: f64,
    /// Number of training epochs.
    pub epochs: usize,
    /// Batch size for training.
    pub batch_size: usize,
    /// Fraction of the training data held back for early stopping.
    pub validation_split: f64,
    /// Model architecture configuration.
    pub model: ModelConfig,
}

impl TrainingConfig {
    /// Creates a training configuration with default hyperparameters.
    #[must_use]
    pub const fn new(model: ModelConfig) -> Self {
        Self {
            learning_rate: 1e-3,
            epochs: 200,
            batch_size: 32,
            validation_split: 0.2,
            model,
        }
    }

    /// Sets the learning rate.
    #[must_use]
    pub const fn with_learning_rate(mut self, learning_rate: f64) -> Self {
        self.learning_rate = learning_rate;
        self
    }

    /// Sets the number of epochs.
    #[must_use]
    pub const fn with_epochs(mut self, epochs: usize) -> Self {
        self.epochs = epochs;
        self
    }

    /// Sets the batch size.
    #[must_use]
    pub const fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size;
        self
    }
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self::new(ModelConfig::default())
    }
}

/// The diabetes risk classifier.
///
/// A feedforward network over the fixed-order clinical feature vector,
/// ending in a sigmoid so the single output unit is the probability of
/// the high-risk class.
#[derive(Module, Debug)]
pub struct RiskModel<B: Backend> {
    pub(crate) linear1: Linear<B>,
    linear2: Linear<B>,
    linear_out: Linear<B>,
    activation: Relu,
    output: Sigmoid,
}

impl<B: Backend> RiskModel<B> {
    /// Creates a new risk model with the given configuration.
    pub fn new(device: &B::Device, config: &ModelConfig) -> Self {
        let linear1 = LinearConfig::new(FEATURE_COUNT, config.hidden_size_1).init(device);
        let linear2 = LinearConfig::new(config.hidden_size_1, config.hidden_size_2).init(device);
        let linear_out = LinearConfig::new(config.hidden_size_2, 1).init(device);

        Self {
            linear1,
            linear2,
            linear_out,
            activation: Relu::new(),
            output: Sigmoid::new(),
        }
    }

    /// Forward pass through the network.
    ///
    /// # Arguments
    ///
    /// * `input` - Tensor of shape [`batch_size`, `FEATURE_COUNT`]
    ///
    /// # Returns
    ///
    /// Tensor of shape [`batch_size`, 1] of high-risk probabilities.
    pub fn forward(&self, input: Tensor<B, 2>) -> Tensor<B, 2> {
        let x = self.linear1.forward(input);
        let x = self.activation.forward(x);
        let x = self.linear2.forward(x);
        let x = self.activation.forward(x);
        let x = self.linear_out.forward(x);
        self.output.forward(x)
    }
}

/// Training data container.
#[derive(Debug, Clone, Default)]
pub struct TrainingData {
    pub samples: Vec<TrainingSample>,
}

impl TrainingData {
    /// Creates a new empty training data container.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            samples: Vec::new(),
        }
    }

    /// Adds samples to the training data.
    pub fn add_samples(&mut self, samples: Vec<TrainingSample>) {
        self.samples.extend(samples);
    }

    /// Returns the number of samples.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.samples.len()
    }

    /// Returns true if there are no samples.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Splits the samples into training and validation parts.
    ///
    /// The validation part is taken from the tail; callers that need a
    /// random split shuffle before building the container.
    #[must_use]
    pub fn split(&self, validation_split: f64) -> (Vec<TrainingSample>, Vec<TrainingSample>) {
        let valid_count =
            ((self.samples.len() as f64) * validation_split.clamp(0.0, 0.5)).round() as usize;
        let train_count = self.samples.len() - valid_count;

        (
            self.samples[..train_count].to_vec(),
            self.samples[train_count..].to_vec(),
        )
    }
}

/// Creates a new model with the given configuration.
pub fn create_model<B: Backend>(device: &B::Device, config: &ModelConfig) -> RiskModel<B> {
    RiskModel::new(device, config)
}

/// Predicts the high-risk probability for a single profile.
///
/// # Arguments
///
/// * `model` - The trained model.
/// * `features` - The marshaled profile features to predict on.
/// * `device` - The device to run inference on.
pub fn predict<B: Backend>(
    model: &RiskModel<B>,
    features: &ProfileFeatures,
    device: &B::Device,
) -> f32 {
    let input = Tensor::<B, 1>::from_floats(features.features.as_slice(), device).unsqueeze();

    let output = model.forward(input);

    output
        .into_data()
        .to_vec::<f32>()
        .unwrap_or_else(|_| vec![0.0])
        .first()
        .copied()
        .unwrap_or(0.0)
}

/// Predicts the binary risk label for a single profile.
pub fn predict_label<B: Backend>(
    model: &RiskModel<B>,
    features: &ProfileFeatures,
    device: &B::Device,
) -> RiskLabel {
    probability_to_label(predict(model, features, device))
}

/// Maps a probability to the binary label at the decision threshold.
#[must_use]
pub fn probability_to_label(probability: f32) -> RiskLabel {
    if probability >= DECISION_THRESHOLD {
        RiskLabel::High
    } else {
        RiskLabel::Low
    }
}

#[cfg(test)]
mod tests {
    use burn::backend::NdArray;

    use super::*;

    type TestBackend = NdArray;

    #[test]
    fn test_model_creation() {
        let device = Default::default();
        let config = ModelConfig::default();
        let _model: RiskModel<TestBackend> = create_model(&device, &config);
    }

    #[test]
    fn test_predict_is_probability() {
        let device = Default::default();
        let model: RiskModel<TestBackend> = create_model(&device, &ModelConfig::default());

        let probability = predict(&model, &ProfileFeatures::default(), &device);
        assert!((0.0..=1.0).contains(&probability));
    }

    #[test]
    fn test_predict_label_is_binary() {
        let device = Default::default();
        let model: RiskModel<TestBackend> = create_model(&device, &ModelConfig::default());

        let label = predict_label(&model, &ProfileFeatures::default(), &device);
        assert!(matches!(label, RiskLabel::Low | RiskLabel::High));
    }

    #[test]
    fn test_probability_threshold() {
        assert_eq!(probability_to_label(0.49), RiskLabel::Low);
        assert_eq!(probability_to_label(0.5), RiskLabel::High);
        assert_eq!(probability_to_label(0.99), RiskLabel::High);
    }

    #[test]
    fn test_training_data() {
        let mut data = TrainingData::new();
        assert!(data.is_empty());
        assert_eq!(data.len(), 0);

        data.add_samples(vec![]);
        assert!(data.is_empty());
    }

    #[test]
    fn test_training_data_split() {
        let mut data = TrainingData::new();
        data.add_samples(
            (0..10)
                .map(|i| TrainingSample {
                    features: ProfileFeatures::default(),
                    outcome: (i % 2) as f32,
                })
                .collect(),
        );

        let (train, valid) = data.split(0.2);
        assert_eq!(train.len(), 8);
        assert_eq!(valid.len(), 2);
    }

    #[test]
    fn test_training_config_default() {
        let config = TrainingConfig::default();
        assert!(config.learning_rate > 0.0);
        assert!(config.epochs > 0);
        assert!(config.batch_size > 0);
    }
}
