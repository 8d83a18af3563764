use dense_ann::{Network, NetworkState, TrainConfig};

fn xor_data() -> (Vec<Vec<f64>>, Vec<Vec<f64>>) {
    let inputs = vec![
        vec![0.0, 0.0],
        vec![0.0, 1.0],
        vec![1.0, 0.0],
        vec![1.0, 1.0],
    ];
    let targets = vec![vec![0.0], vec![1.0], vec![1.0], vec![0.0]];
    (inputs, targets)
}

/// Trains a fresh 2-2-1 network and reports whether every prediction lands
/// within 0.3 of its target.
fn solves_xor(seed: u64, config: &TrainConfig) -> bool {
    let (inputs, targets) = xor_data();
    let mut network = Network::with_seed(2, 2, 1, seed);
    network.set_training_data(&inputs, &targets);
    network.train_with(config).unwrap();
    assert_eq!(network.state(), NetworkState::Trained);

    inputs.iter().zip(targets.iter())
        .all(|(input, target)| (network.predict(input)[0] - target[0]).abs() < 0.3)
}

// Random initialization in [0, 1) leaves many seeds stuck in a dead or
// linear regime, so convergence is only asserted across seeds.
#[test]
fn xor_converges_for_some_seeds_at_default_settings() {
    let config = TrainConfig::default();
    let solved = (0..100).filter(|&seed| solves_xor(seed, &config)).count();
    assert!(solved >= 10, "only {solved} of 100 seeds learned XOR");
}

#[test]
fn xor_converges_more_often_with_longer_training() {
    let config = TrainConfig::new(5000, 0.02);
    let solved = (0..16).filter(|&seed| solves_xor(seed, &config)).count();
    assert!(solved >= 8, "only {solved} of 16 seeds learned XOR in 5000 epochs");
}

#[test]
fn predictions_have_one_value_per_output() {
    let (inputs, targets) = xor_data();
    let mut network = Network::with_seed(2, 4, 1, 99);
    network.set_training_data(&inputs, &targets);
    network.train(10, 0.02).unwrap();

    for input in &inputs {
        let prediction = network.predict(input);
        assert_eq!(prediction.len(), 1);
        assert!(prediction[0] >= 0.0);
    }
}

#[test]
fn reinit_discards_training_state() {
    let (inputs, targets) = xor_data();
    let mut network = Network::with_seed(2, 2, 1, 7);
    network.set_training_data(&inputs, &targets);
    network.train(2, 0.02).unwrap();

    network.init(3, 5, 2);
    assert_eq!(network.num_inputs(), 3);
    assert_eq!(network.num_hidden_nodes(), 5);
    assert_eq!(network.num_outputs(), 2);
    assert_eq!(network.num_training_sets(), 0);
    assert_eq!(network.state(), NetworkState::Configured);
}
