//! Application configuration for the diabetes risk tool.

use std::path::PathBuf;
use std::sync::LazyLock;

/// Checkpoint base path used when `MODEL_PATH` is not set. The recorder
/// appends the weight extension to this path.
const DEFAULT_MODEL_PATH: &str = "models/diabetes_risk";

/// Dataset path used when `DATA_PATH` is not set.
const DEFAULT_DATA_PATH: &str = "data/diabetes.csv";

/// Global configuration instance, lazily initialized.
pub static CONFIG: LazyLock<Config> = LazyLock::new(Config::from_env);

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base path of the trained model checkpoint
    pub model_path: PathBuf,

    /// Path of the training dataset CSV
    pub data_path: PathBuf,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// Optional environment variables (a `.env` file is honored):
    /// - `MODEL_PATH`: base path of the model checkpoint
    ///   (default: `models/diabetes_risk`)
    /// - `DATA_PATH`: path of the training dataset CSV
    ///   (default: `data/diabetes.csv`)
    fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let model_path = std::env::var("MODEL_PATH")
            .map_or_else(|_| PathBuf::from(DEFAULT_MODEL_PATH), PathBuf::from);

        let data_path = std::env::var("DATA_PATH")
            .map_or_else(|_| PathBuf::from(DEFAULT_DATA_PATH), PathBuf::from);

        Self {
            model_path,
            data_path,
        }
    }
}
