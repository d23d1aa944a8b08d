use std::sync::mpsc;
use std::time::Duration;

use rand::SeedableRng;
use rand::rngs::StdRng;
use walkers_terminal::counter::{count_from_json, spawn_counter, synthetic_count};
use walkers_terminal::state::Delta;

#[test]
fn presence_payload_counts_online_users() {
    assert_eq!(count_from_json("null").expect("null"), 0);
    assert_eq!(count_from_json(r#"{"a":true,"b":{"at":1},"c":1}"#).expect("object"), 3);
    assert_eq!(count_from_json(r#"[null,{"id":1},{"id":2}]"#).expect("array"), 2);
}

#[test]
fn malformed_presence_payload_is_an_error() {
    assert!(count_from_json("42").is_err());
    assert!(count_from_json("{not json").is_err());
}

#[test]
fn synthetic_counts_stay_in_demo_range() {
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..500 {
        let n = synthetic_count(&mut rng);
        assert!((1200..1250).contains(&n));
    }
}

#[test]
fn counter_without_endpoint_reports_demo_values() {
    let (tx, rx) = mpsc::channel();
    spawn_counter(tx, None, Duration::from_millis(10));
    let delta = rx.recv_timeout(Duration::from_secs(5)).expect("counter delta");
    match delta {
        Delta::CounterUpdate { count, demo } => {
            assert!(demo);
            assert!((1200..1250).contains(&count));
        }
        Delta::Log(line) => panic!("unexpected log: {line}"),
    }
}
