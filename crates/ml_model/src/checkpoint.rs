//! Checkpoint persistence for the risk classifier.
//!
//! The model artifact is written with Burn's named-mpk file recorder
//! (producing `<path>.mpk`) next to a JSON sidecar (`<path>.config.json`)
//! carrying the architecture, training configuration and metrics.

use std::path::{Path, PathBuf};

use burn::prelude::*;
use burn::record::{FullPrecisionSettings, NamedMpkFileRecorder, RecorderError};
use chrono::Utc;
use tracing::debug;

use crate::{ModelConfig, RiskModel, TrainingConfig, create_model};

/// Extension the named-mpk recorder appends to the weight file.
const WEIGHT_EXT: &str = "mpk";

/// Errors from loading or saving model checkpoints.
///
/// [`Missing`](ModelError::Missing) and [`Decode`](ModelError::Decode)
/// both mean the model is unavailable: a prediction request must surface
/// the error instead of falling back to a default label.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    /// No checkpoint exists at the configured path.
    #[error("model not loaded: no checkpoint at {path}")]
    Missing { path: String },

    /// A checkpoint exists but could not be deserialized.
    #[error("model not loaded: failed to decode checkpoint at {path}")]
    Decode {
        path: String,
        #[source]
        source: RecorderError,
    },

    /// The weight file could not be written.
    #[error("failed to save checkpoint to {path}")]
    Save {
        path: String,
        #[source]
        source: RecorderError,
    },

    /// The metadata sidecar could not be written.
    #[error("failed to write checkpoint metadata to {path}")]
    Metadata {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl ModelError {
    /// True when the underlying model artifact is unavailable.
    #[must_use]
    pub const fn is_unavailable(&self) -> bool {
        matches!(self, Self::Missing { .. } | Self::Decode { .. })
    }
}

/// Reference to a saved model checkpoint.
#[derive(Debug, Clone)]
pub struct ModelCheckpoint {
    /// Base path of the checkpoint (without the weight extension).
    pub path: String,
    /// Path of the JSON metadata sidecar.
    pub metadata_path: String,
}

/// Saves the model weights and the metadata sidecar.
///
/// `path` is the checkpoint base path; the recorder appends the weight
/// extension itself.
///
/// # Errors
///
/// Returns [`ModelError::Save`] or [`ModelError::Metadata`] if either
/// file cannot be written.
pub fn save_checkpoint<B: Backend>(
    model: &RiskModel<B>,
    path: &str,
    config: &TrainingConfig,
    metrics: &serde_json::Value,
) -> Result<ModelCheckpoint, ModelError> {
    if let Some(parent) = Path::new(path).parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|source| ModelError::Metadata {
            path: parent.display().to_string(),
            source,
        })?;
    }

    let recorder = NamedMpkFileRecorder::<FullPrecisionSettings>::new();
    model
        .clone()
        .save_file(path, &recorder)
        .map_err(|source| ModelError::Save {
            path: path.to_string(),
            source,
        })?;

    let metadata = serde_json::json!({
        "model": {
            "hidden_size_1": config.model.hidden_size_1,
            "hidden_size_2": config.model.hidden_size_2,
        },
        "training": {
            "learning_rate": config.learning_rate,
            "epochs": config.epochs,
            "batch_size": config.batch_size,
            "validation_split": config.validation_split,
        },
        "metrics": metrics,
        "trained_at": Utc::now().to_rfc3339(),
    });

    let metadata_path = metadata_path(path);
    let body = serde_json::to_string_pretty(&metadata).map_err(|source| ModelError::Metadata {
        path: metadata_path.clone(),
        source: std::io::Error::other(source),
    })?;
    std::fs::write(&metadata_path, body).map_err(|source| ModelError::Metadata {
        path: metadata_path.clone(),
        source,
    })?;

    Ok(ModelCheckpoint {
        path: path.to_string(),
        metadata_path,
    })
}

/// Loads a model checkpoint from disk.
///
/// The architecture is read from the metadata sidecar when present so a
/// checkpoint trained with non-default hidden sizes still loads; without
/// a sidecar the default architecture is assumed.
///
/// # Errors
///
/// Returns [`ModelError::Missing`] if the weight file does not exist and
/// [`ModelError::Decode`] if it cannot be deserialized.
pub fn load_checkpoint<B: Backend>(
    path: &str,
    device: &B::Device,
) -> Result<RiskModel<B>, ModelError> {
    let weight_file = PathBuf::from(format!("{path}.{WEIGHT_EXT}"));
    if !weight_file.exists() {
        return Err(ModelError::Missing {
            path: weight_file.display().to_string(),
        });
    }

    let model_config = load_model_config(path).unwrap_or_default();
    debug!(
        hidden_size_1 = model_config.hidden_size_1,
        hidden_size_2 = model_config.hidden_size_2,
        "Loading checkpoint"
    );

    let recorder = NamedMpkFileRecorder::<FullPrecisionSettings>::new();
    create_model::<B>(device, &model_config)
        .load_file(path, &recorder, device)
        .map_err(|source| ModelError::Decode {
            path: weight_file.display().to_string(),
            source,
        })
}

/// Path of the metadata sidecar for a checkpoint base path.
#[must_use]
pub fn metadata_path(path: &str) -> String {
    format!("{path}.config.json")
}

/// Reads the architecture section of the metadata sidecar, if present.
fn load_model_config(path: &str) -> Option<ModelConfig> {
    let content = std::fs::read_to_string(metadata_path(path)).ok()?;
    let value: serde_json::Value = serde_json::from_str(&content).ok()?;
    let model = value.get("model")?;

    Some(ModelConfig {
        hidden_size_1: model.get("hidden_size_1")?.as_u64()? as usize,
        hidden_size_2: model.get("hidden_size_2")?.as_u64()? as usize,
    })
}
