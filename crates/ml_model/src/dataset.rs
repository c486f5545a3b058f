//! Dataset and batching for Burn training.

use burn::prelude::*;
use feature_extractor::{FEATURE_COUNT, TrainingSample};

/// A single item in the risk dataset.
#[derive(Debug, Clone)]
pub struct RiskDatasetItem {
    /// Scaled feature vector for this record.
    pub features: [f32; FEATURE_COUNT],
    /// Target outcome, 0.0 or 1.0.
    pub target: f32,
}

impl From<&TrainingSample> for RiskDatasetItem {
    fn from(sample: &TrainingSample) -> Self {
        Self {
            features: sample.features.features,
            target: sample.outcome,
        }
    }
}

/// Dataset for risk classifier training.
#[derive(Debug, Clone)]
pub struct RiskDataset {
    items: Vec<RiskDatasetItem>,
}

impl RiskDataset {
    /// Creates a dataset from a slice of training samples.
    #[must_use]
    pub fn from_slice(samples: &[TrainingSample]) -> Self {
        let items = samples.iter().map(RiskDatasetItem::from).collect();
        Self { items }
    }
}

impl burn::data::dataset::Dataset<RiskDatasetItem> for RiskDataset {
    fn get(&self, index: usize) -> Option<RiskDatasetItem> {
        self.items.get(index).cloned()
    }

    fn len(&self) -> usize {
        self.items.len()
    }

    fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// A batch of training data.
#[derive(Debug, Clone)]
pub struct RiskBatch<B: Backend> {
    /// Input features tensor of shape `[batch_size, FEATURE_COUNT]`.
    pub inputs: Tensor<B, 2>,
    /// Target outcome tensor of shape `[batch_size, 1]`.
    pub targets: Tensor<B, 2>,
}

/// Batcher for creating training batches.
#[derive(Debug, Clone)]
pub struct RiskBatcher<B: Backend> {
    device: B::Device,
}

impl<B: Backend> RiskBatcher<B> {
    /// Creates a new batcher for the given device.
    #[must_use]
    pub const fn new(device: B::Device) -> Self {
        Self { device }
    }

    /// Creates a batch from a vector of items.
    pub fn batch(&self, items: Vec<RiskDatasetItem>) -> RiskBatch<B> {
        let batch_size = items.len();

        let mut features_data = Vec::with_capacity(batch_size * FEATURE_COUNT);
        let mut targets_data = Vec::with_capacity(batch_size);

        for item in items {
            features_data.extend_from_slice(&item.features);
            targets_data.push(item.target);
        }

        let inputs = Tensor::<B, 1>::from_floats(features_data.as_slice(), &self.device)
            .reshape([batch_size, FEATURE_COUNT]);

        let targets = Tensor::<B, 1>::from_floats(targets_data.as_slice(), &self.device)
            .reshape([batch_size, 1]);

        RiskBatch { inputs, targets }
    }
}
