use serde::{Serialize, Deserialize};

use crate::error::Result;

/// Topology of a two-layer network plus an optional rng seed.
///
/// Saved to / loaded from JSON independently of any trained weights, which
/// are never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkConfig {
    pub num_inputs: usize,
    pub num_hidden_nodes: usize,
    pub num_outputs: usize,
    /// Seed for weight initialization and epoch shuffling; entropy when `None`.
    pub seed: Option<u64>,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        NetworkConfig {
            num_inputs: 2,
            num_hidden_nodes: 2,
            num_outputs: 1,
            seed: None,
        }
    }
}

impl NetworkConfig {
    /// Serializes the config to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    /// Deserializes a `NetworkConfig` from a JSON file. Missing fields take their defaults.
    pub fn load_json(path: &str) -> Result<NetworkConfig> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        Ok(serde_json::from_reader(reader)?)
    }
}
