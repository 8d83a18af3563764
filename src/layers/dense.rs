use std::io::Write;

use rand::Rng;
use tracing::trace;

use crate::{
    activation::relu::ReLU,
    error::{AnnError, Result},
    math::matrix::Matrix,
    render::{format_values, RenderOptions, SEPARATOR},
};

/// Fully-connected ReLU layer of `num_nodes` nodes, each with `num_weights` inputs.
///
/// `output`, `error` and `bias` always hold one value per node and `weights`
/// holds one row per node.
#[derive(Debug, Clone, Default)]
pub struct Layer{
    pub output: Vec<f64>,
    pub error: Vec<f64>,
    pub bias: Vec<f64>,
    pub weights: Matrix,
}

impl Layer {
    pub fn new<R: Rng + ?Sized>(num_nodes: usize, num_weights: usize, rng: &mut R) -> Layer {
        let mut layer = Layer::default();
        layer.resize(num_nodes, num_weights, rng);
        layer
    }

    pub fn num_nodes(&self) -> usize {
        self.output.len()
    }

    /// Inputs per node; 0 for a layer without rows.
    pub fn num_weights(&self) -> usize {
        if self.weights.is_empty() { 0 } else { self.weights.cols }
    }

    /// Checks that `error`, `bias` and the weight rows all match `num_nodes`
    /// and that every weight row has the same width.
    pub fn validate(&self) -> Result<()> {
        let n = self.num_nodes();
        let lengths = [
            ("layer error", self.error.len()),
            ("layer bias", self.bias.len()),
            ("layer weight rows", self.weights.rows),
            ("layer weight data", self.weights.data.len()),
        ];
        for (context, len) in lengths {
            if len != n {
                return Err(AnnError::shape(context, n, len));
            }
        }
        if let Some(row) = self.weights.data.iter().find(|row| row.len() != self.weights.cols) {
            return Err(AnnError::shape("layer weight columns", self.weights.cols, row.len()));
        }
        Ok(())
    }

    pub fn clear(&mut self) {
        self.output.clear();
        self.error.clear();
        self.bias.clear();
        self.weights = Matrix::default();
    }

    /// Drops all state and reallocates with fresh random bias and weights in [0, 1).
    pub fn resize<R: Rng + ?Sized>(&mut self, num_nodes: usize, num_weights: usize, rng: &mut R) {
        trace!(num_nodes, num_weights, "resizing dense layer");
        self.clear();
        self.output = vec![0.0; num_nodes];
        self.error = vec![0.0; num_nodes];
        self.bias = (0..num_nodes).map(|_| rng.gen::<f64>()).collect();
        self.weights = Matrix::random(num_nodes, num_weights, rng);
    }

    /// `output[i] = relu(bias[i] + Σ weights[i][j] * input[j])`.
    /// Only the first `min(num_weights, input.len())` inputs contribute.
    pub fn feedforward(&mut self, input: &[f64]) {
        for (i, out) in self.output.iter_mut().enumerate() {
            let sum = self.bias[i]
                + self.weights.row(i).iter().zip(input.iter())
                    .map(|(w, x)| w * x)
                    .sum::<f64>();
            *out = ReLU::function(sum);
        }
    }

    /// Error of an output layer against the expected `reference` values.
    pub fn backpropagate(&mut self, reference: &[f64]) -> Result<()> {
        if reference.len() < self.num_nodes() {
            return Err(AnnError::shape("output layer reference", self.num_nodes(), reference.len()));
        }

        for ((err, &out), &target) in self.error.iter_mut().zip(self.output.iter()).zip(reference.iter()) {
            *err = (target - out) * ReLU::derivative(out);
        }
        Ok(())
    }

    /// Error of a hidden layer, pulled back through the errors and weights of `next`.
    /// An empty `next` layer passes back no error.
    pub fn backpropagate_from(&mut self, next: &Layer) -> Result<()> {
        if next.num_nodes() > 0 && next.num_weights() != self.num_nodes() {
            return Err(AnnError::shape("hidden layer coupling", self.num_nodes(), next.num_weights()));
        }

        for (i, err) in self.error.iter_mut().enumerate() {
            let dev: f64 = next.error.iter().zip(next.weights.data.iter())
                .map(|(e, row)| e * row[i])
                .sum();
            *err = dev * ReLU::derivative(self.output[i]);
        }
        Ok(())
    }

    /// SGD step: moves bias and weights along the stored error, scaled by `learning_rate`.
    pub fn optimize(&mut self, input: &[f64], learning_rate: f64) {
        for (i, row) in self.weights.data.iter_mut().enumerate() {
            let step = self.error[i] * learning_rate;
            self.bias[i] += step;
            for (w, x) in row.iter_mut().zip(input.iter()) {
                *w += step * x;
            }
        }
    }

    pub fn render<W: Write>(&self, out: &mut W, opts: &RenderOptions) -> Result<()> {
        writeln!(out, "{SEPARATOR}")?;
        writeln!(out, "Number of nodes: {}", self.num_nodes())?;
        writeln!(out, "Number of weights per node: {}\n", self.num_weights())?;
        writeln!(out, "Output: {}", format_values(&self.output, opts))?;
        writeln!(out, "Error: {}", format_values(&self.error, opts))?;
        writeln!(out, "Bias: {}", format_values(&self.bias, opts))?;
        writeln!(out, "\nWeights:")?;
        for (i, row) in self.weights.data.iter().enumerate() {
            writeln!(out, "Node {}: {}", i + 1, format_values(row, opts))?;
        }
        writeln!(out, "{SEPARATOR}\n")?;
        Ok(())
    }
}
