pub mod relu;

pub use relu::ReLU;
