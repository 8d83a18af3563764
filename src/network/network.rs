use std::io::Write;

use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};
use tracing::{debug, info, warn};

use crate::{
    error::{AnnError, Result},
    layers::dense::Layer,
    loss::mse::MseLoss,
    network::config::NetworkConfig,
    render::{format_values, RenderOptions, SEPARATOR},
    train::train_config::TrainConfig,
};

/// Where a network is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NetworkState {
    /// No layers sized.
    Uninitialized,
    /// Layers sized, no training data.
    Configured,
    /// Training data assigned, not trained since.
    DataLoaded,
    /// At least one epoch has run on the current data.
    Trained,
}

/// Two-layer (hidden → output) ReLU network trained with per-example SGD.
pub struct Network {
    hidden_layer: Layer,
    output_layer: Layer,
    training_inputs: Vec<Vec<f64>>,
    training_targets: Vec<Vec<f64>>,
    training_order: Vec<usize>,
    epochs_trained: usize,
    rng: StdRng,
}

impl Default for Network {
    fn default() -> Self {
        Network::with_rng(StdRng::from_entropy())
    }
}

impl Network {
    pub fn new(num_inputs: usize, num_hidden_nodes: usize, num_outputs: usize) -> Network {
        let mut network = Network::default();
        network.init(num_inputs, num_hidden_nodes, num_outputs);
        network
    }

    /// Like `new`, but initialization and shuffling replay exactly for a given `seed`.
    pub fn with_seed(num_inputs: usize, num_hidden_nodes: usize, num_outputs: usize, seed: u64) -> Network {
        let mut network = Network::with_rng(StdRng::seed_from_u64(seed));
        network.init(num_inputs, num_hidden_nodes, num_outputs);
        network
    }

    pub fn from_config(config: &NetworkConfig) -> Network {
        match config.seed {
            Some(seed) => Network::with_seed(config.num_inputs, config.num_hidden_nodes, config.num_outputs, seed),
            None => Network::new(config.num_inputs, config.num_hidden_nodes, config.num_outputs),
        }
    }

    /// Builds a network from existing layers. Each layer must be internally
    /// consistent and a non-empty output layer must take one input per hidden node.
    pub fn from_layers(hidden_layer: Layer, output_layer: Layer, rng: StdRng) -> Result<Network> {
        hidden_layer.validate()?;
        output_layer.validate()?;
        if output_layer.num_nodes() > 0 && output_layer.num_weights() != hidden_layer.num_nodes() {
            return Err(AnnError::shape("layer coupling", hidden_layer.num_nodes(), output_layer.num_weights()));
        }
        let mut network = Network::with_rng(rng);
        network.hidden_layer = hidden_layer;
        network.output_layer = output_layer;
        Ok(network)
    }

    fn with_rng(rng: StdRng) -> Network {
        Network {
            hidden_layer: Layer::default(),
            output_layer: Layer::default(),
            training_inputs: Vec::new(),
            training_targets: Vec::new(),
            training_order: Vec::new(),
            epochs_trained: 0,
            rng,
        }
    }

    pub fn hidden_layer(&self) -> &Layer {
        &self.hidden_layer
    }

    pub fn output_layer(&self) -> &Layer {
        &self.output_layer
    }

    pub fn training_inputs(&self) -> &[Vec<f64>] {
        &self.training_inputs
    }

    pub fn training_targets(&self) -> &[Vec<f64>] {
        &self.training_targets
    }

    pub fn training_order(&self) -> &[usize] {
        &self.training_order
    }

    pub fn num_inputs(&self) -> usize {
        self.hidden_layer.num_weights()
    }

    pub fn num_hidden_nodes(&self) -> usize {
        self.hidden_layer.num_nodes()
    }

    pub fn num_outputs(&self) -> usize {
        self.output_layer.num_nodes()
    }

    pub fn num_training_sets(&self) -> usize {
        self.training_order.len()
    }

    pub fn epochs_trained(&self) -> usize {
        self.epochs_trained
    }

    /// Current prediction, as left by the last forward pass.
    pub fn output(&self) -> &[f64] {
        &self.output_layer.output
    }

    pub fn state(&self) -> NetworkState {
        if self.num_hidden_nodes() == 0 && self.num_outputs() == 0 {
            NetworkState::Uninitialized
        } else if self.training_order.is_empty() {
            NetworkState::Configured
        } else if self.epochs_trained == 0 {
            NetworkState::DataLoaded
        } else {
            NetworkState::Trained
        }
    }

    /// Clears everything and sizes fresh hidden and output layers.
    pub fn init(&mut self, num_inputs: usize, num_hidden_nodes: usize, num_outputs: usize) {
        self.clear();
        self.hidden_layer.resize(num_hidden_nodes, num_inputs, &mut self.rng);
        self.output_layer.resize(num_outputs, num_hidden_nodes, &mut self.rng);
    }

    /// Empties both layers and all training state.
    pub fn clear(&mut self) {
        self.hidden_layer.clear();
        self.output_layer.clear();
        self.training_inputs.clear();
        self.training_targets.clear();
        self.training_order.clear();
        self.epochs_trained = 0;
    }

    /// Replaces the training data. The longer of `inputs` / `targets` is
    /// truncated to the length of the shorter.
    pub fn set_training_data(&mut self, inputs: &[Vec<f64>], targets: &[Vec<f64>]) {
        let count = inputs.len().min(targets.len());
        if inputs.len() != targets.len() {
            warn!(inputs = inputs.len(), targets = targets.len(), count, "truncating mismatched training data");
        }

        self.training_inputs = inputs[..count].to_vec();
        self.training_targets = targets[..count].to_vec();
        self.training_order = (0..count).collect();
        self.epochs_trained = 0;
    }

    /// Forward pass; the prediction is left in the output layer.
    pub fn feedforward(&mut self, input: &[f64]) {
        self.hidden_layer.feedforward(input);
        self.output_layer.feedforward(&self.hidden_layer.output);
    }

    /// Output layer error first; the hidden layer consumes it.
    pub fn backpropagate(&mut self, reference: &[f64]) -> Result<()> {
        self.output_layer.backpropagate(reference)?;
        self.hidden_layer.backpropagate_from(&self.output_layer)
    }

    /// Each layer steps against its own input: the network input for the
    /// hidden layer, the hidden output for the output layer.
    pub fn optimize(&mut self, input: &[f64], learning_rate: f64) {
        self.hidden_layer.optimize(input, learning_rate);
        self.output_layer.optimize(&self.hidden_layer.output, learning_rate);
    }

    /// Runs all `num_epochs` epochs of per-example SGD over the training data,
    /// reshuffling the example order before each epoch.
    ///
    /// Returns the mean squared error of the last epoch (0 if nothing ran).
    pub fn train(&mut self, num_epochs: usize, learning_rate: f64) -> Result<f64> {
        info!(
            epochs = num_epochs,
            learning_rate,
            examples = self.num_training_sets(),
            "training started"
        );

        // Put back before returning, on success or error.
        let inputs = std::mem::take(&mut self.training_inputs);
        let targets = std::mem::take(&mut self.training_targets);
        let result = self.run_epochs(num_epochs, learning_rate, &inputs, &targets);
        self.training_inputs = inputs;
        self.training_targets = targets;

        let last_loss = result?;
        info!(loss = last_loss, "training finished");
        Ok(last_loss)
    }

    fn run_epochs(
        &mut self,
        num_epochs: usize,
        learning_rate: f64,
        inputs: &[Vec<f64>],
        targets: &[Vec<f64>],
    ) -> Result<f64> {
        let mut last_loss = 0.0;
        for epoch in 1..=num_epochs {
            self.training_order.shuffle(&mut self.rng);

            let mut total_loss = 0.0;
            for k in 0..self.training_order.len() {
                let idx = self.training_order[k];
                let (input, target) = (&inputs[idx], &targets[idx]);

                self.feedforward(input);
                total_loss += MseLoss::loss(self.output(), target);
                self.backpropagate(target)?;
                self.optimize(input, learning_rate);
            }

            if !self.training_order.is_empty() {
                last_loss = total_loss / self.training_order.len() as f64;
            }
            self.epochs_trained += 1;
            debug!(epoch, loss = last_loss, "epoch finished");
        }
        Ok(last_loss)
    }

    pub fn train_with(&mut self, config: &TrainConfig) -> Result<f64> {
        self.train(config.epochs, config.learning_rate)
    }

    /// Forward pass, returning the prediction.
    pub fn predict(&mut self, input: &[f64]) -> &[f64] {
        self.feedforward(input);
        self.output()
    }

    /// Predicts every input and writes one `Input: ...\tOutput: ...` line per
    /// input between two separator lines. Writes nothing for no inputs.
    pub fn render<W: Write>(&mut self, inputs: &[Vec<f64>], out: &mut W, opts: &RenderOptions) -> Result<()> {
        if inputs.is_empty() {
            return Ok(());
        }

        writeln!(out, "{SEPARATOR}")?;
        for input in inputs {
            let prediction = self.predict(input);
            let line = format!(
                "Input: {}\tOutput: {}",
                format_values(input, opts),
                format_values(prediction, opts)
            );
            writeln!(out, "{line}")?;
        }
        writeln!(out, "{SEPARATOR}\n")?;
        Ok(())
    }

    /// `render` over the stored training inputs.
    pub fn render_training<W: Write>(&mut self, out: &mut W, opts: &RenderOptions) -> Result<()> {
        let inputs = self.training_inputs.clone();
        self.render(&inputs, out, opts)
    }
}
