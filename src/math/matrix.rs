use rand::Rng;
use serde::{Serialize, Deserialize};

/// Row-major matrix of `f64`. A layer stores one row per node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Matrix{
    pub rows: usize,
    pub cols: usize,
    pub data: Vec<Vec<f64>>
}

impl Matrix{
    pub fn zeros(rows: usize, cols: usize) -> Matrix {
        Matrix{
            rows,
            cols,
            data: vec![vec![0.0; cols]; rows]
        }
    }

    /// Every entry drawn uniformly from [0, 1).
    pub fn random<R: Rng + ?Sized>(rows: usize, cols: usize, rng: &mut R) -> Matrix {
        let mut res = Matrix::zeros(rows, cols);

        for i in 0..rows {
            for j in 0..cols {
                res.data[i][j] = rng.gen::<f64>();
            }
        }

        res
    }

    pub fn from_data(data: Vec<Vec<f64>>) -> Matrix {
        Matrix {
            rows: data.len(),
            cols: data.first().map_or(0, |row| row.len()),
            data
        }
    }

    pub fn row(&self, i: usize) -> &[f64] {
        &self.data[i]
    }

    pub fn is_empty(&self) -> bool {
        self.rows == 0
    }
}

impl Default for Matrix {
    fn default() -> Self {
        Matrix { rows: 0, cols: 0, data: vec![] }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn random_entries_are_in_unit_interval() {
        let mut rng = StdRng::seed_from_u64(7);
        let m = Matrix::random(4, 3, &mut rng);

        assert_eq!(m.rows, 4);
        assert_eq!(m.cols, 3);
        assert!(m.data.iter().flatten().all(|&x| (0.0..1.0).contains(&x)));
    }

    #[test]
    fn same_seed_gives_same_matrix() {
        let a = Matrix::random(2, 2, &mut StdRng::seed_from_u64(3));
        let b = Matrix::random(2, 2, &mut StdRng::seed_from_u64(3));
        assert_eq!(a, b);
    }

    #[test]
    fn from_data_handles_empty_rows() {
        let m = Matrix::from_data(vec![]);
        assert!(m.is_empty());
        assert_eq!(m.cols, 0);
    }
}
