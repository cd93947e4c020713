//! Tests for Hebbian weight accumulation and its matrix invariants.

use crate::memory::Network;
use crate::pattern::{Encoding, Pattern};

use super::helpers::{checkerboard, digit_zero, weight_snapshot};

#[test]
fn test_fresh_network_has_zero_weights() {
    let network = Network::new(4).unwrap();
    assert!(
        weight_snapshot(&network).iter().all(|&w| w == 0),
        "weight matrix must start zero-initialized"
    );
}

#[test]
fn test_hand_computed_outer_product() {
    let pattern = Pattern::from_rows(&[vec![1, -1], vec![-1, 1]]).unwrap();
    let mut network = Network::new(2).unwrap();
    network.train(&pattern).unwrap();

    let weights = network.weights();
    // w[A][B] = pattern[A] * pattern[B] for distinct neurons
    assert_eq!(weights.weight((0, 0), (0, 1)), -1);
    assert_eq!(weights.weight((0, 0), (1, 0)), -1);
    assert_eq!(weights.weight((0, 0), (1, 1)), 1);
    assert_eq!(weights.weight((0, 1), (1, 0)), 1);
}

#[test]
fn test_diagonal_stays_zero() {
    let mut network = Network::new(10).unwrap();
    network.train(&digit_zero(Encoding::Bipolar)).unwrap();
    network
        .train(&checkerboard(10, Encoding::Bipolar))
        .unwrap();

    for i in 0..10 {
        for j in 0..10 {
            assert_eq!(
                network.weights().weight((i, j), (i, j)),
                0,
                "self-connection ({i}, {j}) must stay zero"
            );
        }
    }
}

#[test]
fn test_matrix_is_symmetric() {
    let mut network = Network::new(6).unwrap();
    network.train(&checkerboard(6, Encoding::Bipolar)).unwrap();
    let mut striped = Pattern::filled(6, -1).unwrap();
    for col in 0..6 {
        striped.set(2, col, 1);
    }
    network.train(&striped).unwrap();

    let weights = network.weights();
    for a in 0..36 {
        for b in 0..36 {
            let coord_a = (a / 6, a % 6);
            let coord_b = (b / 6, b % 6);
            assert_eq!(
                weights.weight(coord_a, coord_b),
                weights.weight(coord_b, coord_a),
                "weight matrix must be symmetric at {coord_a:?}/{coord_b:?}"
            );
        }
    }
}

#[test]
fn test_retraining_doubles_contribution() {
    let pattern = digit_zero(Encoding::Bipolar);

    let mut once = Network::new(10).unwrap();
    once.train(&pattern).unwrap();
    let mut twice = Network::new(10).unwrap();
    twice.train(&pattern).unwrap();
    twice.train(&pattern).unwrap();

    let single = weight_snapshot(&once);
    let double = weight_snapshot(&twice);
    for (one, two) in single.iter().zip(double.iter()) {
        assert_eq!(*two, one * 2, "second training must exactly double weights");
    }
    println!("[PASS] test_retraining_doubles_contribution");
}

#[test]
fn test_training_order_is_commutative() {
    let a = digit_zero(Encoding::Bipolar);
    let b = checkerboard(10, Encoding::Bipolar);

    let mut forward = Network::new(10).unwrap();
    forward.train(&a).unwrap();
    forward.train(&b).unwrap();
    let mut reverse = Network::new(10).unwrap();
    reverse.train(&b).unwrap();
    reverse.train(&a).unwrap();

    assert_eq!(
        weight_snapshot(&forward),
        weight_snapshot(&reverse),
        "training order must not affect the final matrix"
    );
    println!("[PASS] test_training_order_is_commutative");
}

#[test]
fn test_binary_encoding_accumulates_products() {
    // In the {0, 1} domain only co-active pairs contribute.
    let pattern = Pattern::from_rows(&[vec![1, 1], vec![0, 0]]).unwrap();
    let mut network = Network::with_config(
        2,
        crate::config::NetworkConfig {
            encoding: Encoding::Binary,
            ..Default::default()
        },
    )
    .unwrap();
    network.train(&pattern).unwrap();

    let weights = network.weights();
    assert_eq!(weights.weight((0, 0), (0, 1)), 1);
    assert_eq!(weights.weight((0, 0), (1, 0)), 0);
    assert_eq!(weights.weight((1, 0), (1, 1)), 0);
}
