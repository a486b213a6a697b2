//! End-to-end tests for the public `Network` API.

mod common;

use common::FixedSource;
use randnet_core::{
    LinkInvariant, Network, NetworkBuilder, NetworkError, NetworkErrorCode, SeededRandom,
};
use randnet_test_support::tracing::RecordingLayer;
use rstest::{fixture, rstest};
use tracing_subscriber::layer::SubscriberExt;

#[fixture]
fn seeded() -> Network {
    Network::with_source(SeededRandom::new(2024))
}

#[rstest]
fn five_nodes_wire_within_bounds(mut seeded: Network) {
    seeded.resize(5);
    let entries = seeded.random_connect(2.0).expect("mean is valid");

    assert_eq!(entries % 2, 0);
    for node in 0..5 {
        assert!(seeded.degree(node) <= 4);
        assert!(!seeded.neighbors(node).contains(&node));
    }
}

#[rstest]
fn empty_network_wires_to_nothing(mut seeded: Network) {
    seeded.resize(0);
    assert_eq!(seeded.random_connect(3.0), Ok(0));
}

#[rstest]
fn value_bounds_follow_size(mut seeded: Network) {
    seeded.resize(4);
    assert!(seeded.value(3).is_ok());
    let err = seeded.value(4).expect_err("index == size must fail");
    assert_eq!(err, NetworkError::IndexOutOfRange { index: 4, size: 4 });
    assert_eq!(err.code(), NetworkErrorCode::IndexOutOfRange);
}

#[rstest]
fn duplicate_and_self_links_fail_quietly(mut seeded: Network) {
    seeded.resize(3);
    assert!(seeded.add_link(0, 2));
    assert!(!seeded.add_link(0, 2));
    assert!(!seeded.add_link(1, 1));
    assert_eq!(seeded.link_count(), 2);
    assert!(seeded.degree(0) >= 1 && seeded.degree(2) >= 1);
    assert!(seeded.neighbors(0).contains(&2));
    assert!(seeded.neighbors(2).contains(&0));
}

#[rstest]
#[case::greedy_pairs(4, 2, 6)]
#[case::complete(5, 4, 20)]
#[case::saturated_targets(4, 10, 12)]
#[case::isolated(6, 0, 0)]
fn uniform_targets_wire_deterministically(
    #[case] size: usize,
    #[case] degree: usize,
    #[case] expected_entries: usize,
) {
    let mut network = Network::with_source(FixedSource::new(0.25, degree));
    network.resize(size);

    assert_eq!(network.random_connect(1.0), Ok(expected_entries));
    network
        .invariants()
        .check_all()
        .expect("wiring keeps invariants");
}

#[rstest]
fn scan_settles_the_last_node_short_of_target() {
    // Probes always land on the node itself, so partners come from the scan.
    let mut network = Network::with_source(FixedSource::new(0.0, 2));
    network.resize(4);

    assert_eq!(network.random_connect(2.0), Ok(6));
    assert_eq!(network.neighbors(0), vec![1, 2]);
    assert_eq!(network.neighbors(1), vec![0, 2]);
    assert_eq!(network.neighbors(2), vec![0, 1]);
    assert!(network.neighbors(3).is_empty());
    assert_eq!(network.degree_histogram(), vec![1, 0, 3]);
}

#[rstest]
fn resize_reseeds_values_and_keeps_links() {
    let mut network = Network::with_source(FixedSource::new(0.5, 0));
    network.resize(3);
    assert_eq!(network.set_values(&[3.0, 2.0]), 2);
    assert!(network.add_link(0, 2));

    network.resize(2);
    assert_eq!(network.values(), &[0.5, 0.5]);
    assert_eq!(network.degree(2), 1);
    assert!(
        network
            .invariants()
            .check(LinkInvariant::EndpointBounds)
            .is_err()
    );
}

#[rstest]
fn builder_wires_reproducibly() {
    let build = || {
        NetworkBuilder::new()
            .with_size(25)
            .with_seed(5)
            .with_mean_degree(3.0)
            .build()
            .expect("configuration is valid")
    };
    let a = build();
    let b = build();
    assert_eq!(a.sorted_values(), b.sorted_values());
    assert_eq!(a.degree_histogram(), b.degree_histogram());
}

#[rstest]
fn wiring_is_instrumented(mut seeded: Network) {
    seeded.resize(6);
    let layer = RecordingLayer::default();
    let subscriber = tracing_subscriber::registry().with(layer.clone());

    let entries = tracing::subscriber::with_default(subscriber, || seeded.random_connect(1.5))
        .expect("mean is valid");

    let spans = layer.spans();
    let span = spans
        .iter()
        .find(|span| span.name == "network.random_connect")
        .expect("network.random_connect span must exist");
    assert_eq!(span.fields.get("size"), Some(&"6".to_owned()));
    assert_eq!(span.fields.get("mean_degree"), Some(&"1.5".to_owned()));

    let summary = layer
        .events()
        .into_iter()
        .find(|event| {
            event.fields.get("message").map(String::as_str) == Some("random wiring complete")
        })
        .expect("completion event must be recorded");
    assert_eq!(summary.fields.get("links"), Some(&entries.to_string()));
}

#[rstest]
fn invalid_mean_is_reported_on_the_span(mut seeded: Network) {
    seeded.resize(3);
    let layer = RecordingLayer::default();
    let subscriber = tracing_subscriber::registry().with(layer.clone());

    let err = tracing::subscriber::with_default(subscriber, || seeded.random_connect(-1.0))
        .expect_err("negative mean must fail");
    assert_eq!(err.code(), NetworkErrorCode::InvalidMeanDegree);
    assert!(
        layer
            .events()
            .iter()
            .any(|event| event.level == tracing::Level::ERROR),
        "instrumented error must be logged"
    );
}
