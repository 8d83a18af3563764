pub mod math;
pub mod activation;
pub mod layers;
pub mod network;
pub mod loss;
pub mod train;
pub mod render;
pub mod error;

// Convenience re-exports
pub use math::matrix::Matrix;
pub use activation::relu::ReLU;
pub use layers::dense::Layer;
pub use network::network::{Network, NetworkState};
pub use network::config::NetworkConfig;
pub use loss::mse::MseLoss;
pub use train::train_config::TrainConfig;
pub use render::RenderOptions;
pub use error::{AnnError, Result};
