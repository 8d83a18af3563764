use dense_ann::{Network, RenderOptions};

#[test]
fn render_training_prints_every_example_between_separators() {
    let mut network = Network::with_seed(2, 2, 1, 1);
    network.set_training_data(
        &[vec![0.0, 0.0], vec![0.0, 1.0], vec![1.0, 0.0]],
        &[vec![0.0], vec![1.0], vec![1.0]],
    );

    let mut buf = Vec::new();
    network.render_training(&mut buf, &RenderOptions::default()).unwrap();
    let text = String::from_utf8(buf).unwrap();
    let lines: Vec<&str> = text.lines().collect();

    let dashes = "-".repeat(80);
    assert_eq!(lines.len(), 6);
    assert_eq!(lines[0], dashes);
    assert_eq!(lines[4], dashes);
    assert_eq!(lines[5], "");
    assert!(lines[1].starts_with("Input: 0.0 0.0 \tOutput: "));
    assert!(lines[2].starts_with("Input: 0.0 1.0 \tOutput: "));
    assert!(lines[3].starts_with("Input: 1.0 0.0 \tOutput: "));
}

#[test]
fn decimals_control_precision() {
    let mut network = Network::with_seed(1, 1, 1, 1);
    let mut buf = Vec::new();
    network
        .render(&[vec![0.5]], &mut buf, &RenderOptions { decimals: 3, threshold: 0.001 })
        .unwrap();
    let text = String::from_utf8(buf).unwrap();
    assert!(text.contains("Input: 0.500 \tOutput: "));
}
