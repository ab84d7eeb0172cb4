use neurobreed_lib::config::{BreederKind, GeneCreatorKind, StrategyConfig};
use neurobreed_lib::{output_error, Network, NetworkError, WeightedSum};
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

prop_compose! {
    fn arb_strategy()(
        normal_creator in any::<bool>(),
        normal_breeder in any::<bool>(),
        mean_sum in any::<bool>(),
        mutation_rate in 0.0f64..=1.0f64,
        std_dev in 0.0f64..2.0f64
    ) -> StrategyConfig {
        StrategyConfig {
            gene_creator: if normal_creator {
                GeneCreatorKind::Normal
            } else {
                GeneCreatorKind::Standard
            },
            breeder: if normal_breeder { BreederKind::Normal } else { BreederKind::Gaussian },
            weighted_sum: if mean_sum { WeightedSum::Mean } else { WeightedSum::Raw },
            mutation_rate,
            std_dev,
            ..Default::default()
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn test_evaluate_output_matches_last_layer(
        inputs in 1usize..8,
        layer_sizes in prop::collection::vec(1usize..8, 1..4),
        seed in any::<u64>(),
        strategy in arb_strategy()
    ) {
        let strategies = strategy.build();
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let network = Network::new_random_with_rng(inputs, &layer_sizes, &strategies, &mut rng);
        let output = network.evaluate(&vec![0.5; inputs]).unwrap();

        prop_assert_eq!(output.len(), *layer_sizes.last().unwrap());
        for &v in &output {
            prop_assert!(v > -1.0 && v < 1.0, "output {} out of range", v);
        }
    }

    #[test]
    fn test_wrong_input_length_fails(
        inputs in 1usize..8,
        supplied in 0usize..12,
        seed in any::<u64>()
    ) {
        prop_assume!(inputs != supplied);
        let strategies = StrategyConfig::default().build();
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let network = Network::new_random_with_rng(inputs, &[3, 2], &strategies, &mut rng);
        prop_assert_eq!(
            network.evaluate(&vec![0.5; supplied]),
            Err(NetworkError::mismatch(inputs, supplied))
        );
    }

    #[test]
    fn test_breeding_preserves_topology(
        inputs in 1usize..6,
        layer_sizes in prop::collection::vec(1usize..6, 0..4),
        seed in any::<u64>(),
        strategy in arb_strategy()
    ) {
        let strategies = strategy.build();
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let a = Network::new_random_with_rng(inputs, &layer_sizes, &strategies, &mut rng);
        let b = Network::new_random_with_rng(inputs, &layer_sizes, &strategies, &mut rng);
        let child = a.breed_with_rng(&b, &mut rng).unwrap();

        prop_assert_eq!(child.input_size(), inputs);
        prop_assert_eq!(child.topology(), layer_sizes);
    }

    #[test]
    fn test_output_error_properties(
        a in prop::collection::vec(-10.0f64..10.0, 0..16),
        b in prop::collection::vec(-10.0f64..10.0, 0..16)
    ) {
        prop_assert_eq!(output_error(&a, &a), Ok(0.0));
        if a.len() == b.len() {
            let sum: f64 = a.iter().zip(&b).map(|(x, y)| (x - y).abs()).sum();
            let error = output_error(&a, &b).unwrap();
            prop_assert!((error - sum.sqrt()).abs() < 1e-12);
            prop_assert!(error >= 0.0);
        } else {
            prop_assert_eq!(output_error(&a, &b), Err(NetworkError::mismatch(a.len(), b.len())));
        }
    }
}
