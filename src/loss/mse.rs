pub struct MseLoss;

impl MseLoss {
    /// Scalar MSE: mean((predicted - expected)²) over the overlapping outputs.
    pub fn loss(predicted: &[f64], expected: &[f64]) -> f64 {
        let n = predicted.len().min(expected.len());
        if n == 0 {
            return 0.0;
        }
        predicted.iter().zip(expected.iter())
            .map(|(a, b)| (a - b).powi(2))
            .sum::<f64>() / n as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_of_squared_deviation() {
        assert_eq!(MseLoss::loss(&[1.0, 0.0], &[0.0, 0.0]), 0.5);
        assert_eq!(MseLoss::loss(&[], &[]), 0.0);
    }
}
