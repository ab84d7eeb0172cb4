use neurobreed_lib::config::StrategyConfig;
use neurobreed_lib::genetics::{
    ConstantGeneCreator, LogisticSigmoidActivator, NormalBreeder, StandardGeneCreator,
};
use neurobreed_lib::{Layer, Network, NetworkError, Neuron, Strategies, WeightedSum};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::sync::Arc;

const DIAGONAL: [f64; 3] = [0.57735, 0.57735, 0.57735];

fn layer(strategies: &Arc<Strategies>, input_size: usize, genes: Vec<Vec<f64>>) -> Layer {
    let neurons = genes
        .into_iter()
        .map(|g| Neuron::with_genes(g, Arc::clone(strategies)))
        .collect();
    Layer::from_neurons(input_size, neurons).unwrap()
}

fn reference_network(weighted_sum: WeightedSum) -> Network {
    let strategies = Arc::new(
        Strategies::new(
            LogisticSigmoidActivator,
            StandardGeneCreator,
            NormalBreeder::new(0.015, Arc::new(StandardGeneCreator)),
        )
        .with_weighted_sum(weighted_sum),
    );

    let hidden = layer(
        &strategies,
        3,
        vec![
            vec![0.5, -0.25, 0.75],
            vec![-0.6, 0.1, 0.3],
            vec![0.9, 0.8, -0.7],
            vec![-0.2, -0.4, 0.05],
        ],
    );
    let output = layer(
        &strategies,
        4,
        vec![
            vec![0.3, -0.5, 0.8, 0.1],
            vec![-0.7, 0.6, 0.2, -0.9],
            vec![0.45, 0.35, -0.15, 0.55],
        ],
    );
    Network::from_layers(3, vec![hidden, output]).unwrap()
}

fn assert_close(actual: &[f64], expected: &[f64]) {
    assert_eq!(actual.len(), expected.len());
    for (i, (a, e)) in actual.iter().zip(expected).enumerate() {
        assert!(
            (a - e).abs() < 1e-9,
            "component {} differs: {} vs {}",
            i,
            a,
            e
        );
    }
}

#[test]
fn test_reference_output_raw_sum() {
    let network = reference_network(WeightedSum::Raw);
    let output = network.evaluate(&DIAGONAL).unwrap();
    assert_close(
        &output,
        &[
            0.15967031379548424,
            -0.016675739815948165,
            -0.011253587752564354,
        ],
    );
}

#[test]
fn test_reference_output_mean_sum() {
    let network = reference_network(WeightedSum::Mean);
    let output = network.evaluate(&DIAGONAL).unwrap();
    assert_close(
        &output,
        &[
            0.01373112302935775,
            -0.0014903955459503182,
            -0.0008796376933255523,
        ],
    );
}

#[test]
fn test_constructed_network_reference_output() {
    // Every gene is 0.5: each hidden neuron activates 1.5 * 0.57735 and each
    // output neuron activates 2.0 times the common hidden value.
    let strategies = Arc::new(Strategies::new(
        LogisticSigmoidActivator,
        ConstantGeneCreator(0.5),
        NormalBreeder::new(0.015, Arc::new(StandardGeneCreator)),
    ));
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let network = Network::new_random_with_rng(3, &[4, 3], &strategies, &mut rng);

    let hidden = network.layers()[0].evaluate(&DIAGONAL).unwrap();
    assert_close(&hidden, &[0.40783582112982475; 4]);
    let output = network.evaluate(&DIAGONAL).unwrap();
    assert_close(&output, &[0.38663355646886766; 3]);
}

#[test]
fn test_reference_output_error() {
    let network = reference_network(WeightedSum::Raw);
    let error = neurobreed_lib::metrics::score(&network, &DIAGONAL, &[0.45882, 0.10196, 0.69804])
        .unwrap();
    assert!((error - 1.0616397759000122).abs() < 1e-9);
}

#[test]
fn test_seeded_networks_match() {
    let strategies = StrategyConfig::default().build();
    let mut rng1 = ChaCha8Rng::seed_from_u64(2024);
    let mut rng2 = ChaCha8Rng::seed_from_u64(2024);
    let network1 = Network::new_random_with_rng(3, &[4, 3], &strategies, &mut rng1);
    let network2 = Network::new_random_with_rng(3, &[4, 3], &strategies, &mut rng2);

    let output1 = network1.evaluate(&DIAGONAL).unwrap();
    let output2 = network2.evaluate(&DIAGONAL).unwrap();
    assert_eq!(output1, output2, "Seeded construction should be deterministic");
    assert!(output1.iter().all(|&v| v > -1.0 && v < 1.0));
}

#[test]
fn test_repeated_evaluation_is_stable() {
    let strategies = StrategyConfig::default().build();
    let mut rng = ChaCha8Rng::seed_from_u64(9);
    let network = Network::new_random_with_rng(16, &[64, 64, 4], &strategies, &mut rng);
    let inputs = vec![0.25; 16];
    let first = network.evaluate(&inputs).unwrap();
    for _ in 0..20 {
        assert_eq!(network.evaluate(&inputs).unwrap(), first);
    }
}

#[test]
fn test_mismatched_input_reports_declared_size() {
    let strategies = StrategyConfig::default().build();
    let network = Network::new(5, &[2], &strategies);
    for len in [0, 4, 6, 10] {
        let inputs = vec![0.1; len];
        assert_eq!(
            network.evaluate(&inputs),
            Err(NetworkError::DimensionMismatch {
                expected: 5,
                actual: len
            })
        );
    }
}

#[test]
fn test_evaluation_from_many_threads() {
    let strategies = StrategyConfig::default().build();
    let mut rng = ChaCha8Rng::seed_from_u64(77);
    let network = Arc::new(Network::new_random_with_rng(3, &[8, 3], &strategies, &mut rng));
    let expected = network.evaluate(&DIAGONAL).unwrap();

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let network = Arc::clone(&network);
            std::thread::spawn(move || network.evaluate(&DIAGONAL).unwrap())
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
