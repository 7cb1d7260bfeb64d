//! Debounced input driving a real engine.

use std::time::{Duration, Instant};

use clinisearch::{
    build_index, ControllerState, QueryController, RecordCollections, SearchConfig, SearchService,
};

use crate::common::{clinical_corpus, falls_corpus};

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

#[test]
fn test_typing_a_word_runs_one_query() {
    let t0 = Instant::now();
    let mut controller = QueryController::new(build_index(&falls_corpus()));

    for (offset, prefix) in ["f", "fa", "fal", "fall", "falls"].into_iter().enumerate() {
        controller.on_query_input_at(prefix, t0 + ms(80 * offset as u64));
        assert!(controller.poll_at(t0 + ms(80 * offset as u64 + 10)).is_none());
    }

    let outcome = controller.poll_at(t0 + ms(320 + 300)).unwrap();
    assert_eq!(outcome.query, "falls");
    assert_eq!(outcome.results.len(), 2);
    assert_eq!(controller.state(), ControllerState::Idle);
    assert!(controller.poll_at(t0 + ms(5000)).is_none());
}

#[test]
fn test_backspacing_to_one_char_emits_empty() {
    let t0 = Instant::now();
    let mut controller = QueryController::new(build_index(&falls_corpus()));
    controller.on_query_input_at("fa", t0);
    controller.on_query_input_at("f", t0 + ms(50));
    let outcome = controller.poll_at(t0 + ms(350)).unwrap();
    assert!(!outcome.executed);
    assert!(outcome.results.is_empty());
}

#[test]
fn test_service_as_engine() {
    let config = SearchConfig {
        debounce_ms: 100,
        ..SearchConfig::default()
    };
    let service = SearchService::new(&clinical_corpus(), RecordCollections::default(), config.clone());
    let mut controller = QueryController::from_config(service, &config);

    let t0 = Instant::now();
    controller.on_query_input_at("cardiology", t0);
    assert_eq!(controller.next_deadline(), Some(t0 + ms(100)));
    let outcome = controller.poll_at(t0 + ms(100)).unwrap();
    assert_eq!(outcome.results[0].id, "0.0");
}
