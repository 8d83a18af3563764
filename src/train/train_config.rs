use serde::{Serialize, Deserialize};

/// Hyperparameters for `Network::train_with`.
///
/// # Fields
/// - `epochs`        — full passes over the training data; every epoch always runs
/// - `learning_rate` — SGD step size applied to each example's error
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainConfig {
    pub epochs: usize,
    pub learning_rate: f64,
}

impl TrainConfig {
    pub fn new(epochs: usize, learning_rate: f64) -> Self {
        TrainConfig { epochs, learning_rate }
    }
}

impl Default for TrainConfig {
    fn default() -> Self {
        TrainConfig::new(1000, 0.02)
    }
}
