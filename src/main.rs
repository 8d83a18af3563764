// Trains a 2-2-1 network on XOR and prints its predictions for the
// training inputs.
use dense_ann::{Network, NetworkConfig, RenderOptions, TrainConfig};

fn main() -> dense_ann::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let inputs = vec![
        vec![0.0, 0.0],
        vec![0.0, 1.0],
        vec![1.0, 0.0],
        vec![1.0, 1.0],
    ];
    let targets = vec![
        vec![0.0],
        vec![1.0],
        vec![1.0],
        vec![0.0],
    ];

    let mut network = Network::from_config(&NetworkConfig::default());
    network.set_training_data(&inputs, &targets);
    network.train_with(&TrainConfig::default())?;

    let stdout = std::io::stdout();
    network.render_training(&mut stdout.lock(), &RenderOptions::default())
}
