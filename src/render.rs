//! Fixed-point text rendering shared by `Layer::render` and `Network::render`.

use serde::{Serialize, Deserialize};

/// 80 dashes, written above and below every rendered block.
pub const SEPARATOR: &str =
    "--------------------------------------------------------------------------------";

/// Formatting knobs for rendered values.
///
/// - `decimals`  — digits after the decimal point
/// - `threshold` — values strictly inside `(-threshold, threshold)` print as 0
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    pub decimals: usize,
    pub threshold: f64,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions { decimals: 1, threshold: 0.001 }
    }
}

/// Snaps near-zero values to exactly 0.
pub fn snap(value: f64, threshold: f64) -> f64 {
    if value > -threshold && value < threshold { 0.0 } else { value }
}

/// Formats `values` as `"v0 v1 ... "`, each value followed by one space.
pub fn format_values(values: &[f64], opts: &RenderOptions) -> String {
    values.iter()
        .map(|&value| format!("{:.*} ", opts.decimals, snap(value, opts.threshold)))
        .collect()
}
