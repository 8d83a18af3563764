pub mod train_config;

pub use train_config::TrainConfig;
