/// Rectified linear unit, the only activation this crate uses.
pub struct ReLU;

impl ReLU {
    /// `x` if positive, otherwise 0.
    pub fn function(x: f64) -> f64 {
        if x > 0.0 { x } else { 0.0 }
    }

    /// Derivative expressed in terms of the node's *output* `y = relu(x)`.
    /// A node that was not activated (y == 0) passes no gradient.
    pub fn derivative(y: f64) -> f64 {
        if y > 0.0 { 1.0 } else { 0.0 }
    }
}
