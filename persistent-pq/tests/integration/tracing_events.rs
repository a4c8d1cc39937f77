//! Smoke test of the `tracing` instrumentation.

use persistent_pq::{Options, Variant};

#[test]
fn construction_and_empty_pop_are_traced() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new("persistent_pq=trace"))
        .with_test_writer()
        .try_init();

    let queue = Options::new()
        .add_elements([1, 2, 3])
        .set_variant(Variant::Set)
        .build(|x: &i32| *x);

    assert!(queue.empty_like().try_pop().is_err());
    assert!(queue.try_pop().is_ok());
}
