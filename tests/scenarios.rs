// Worked examples with hand-checked cache contents for each policy.

mod common;

use cachesim::prelude::*;

fn run(kind: PolicyKind, capacity: usize, seq: &[i32]) -> Trace<i32> {
    common::init_logger();
    CacheSimulator::new(capacity, seq.to_vec()).unwrap().run(kind)
}

#[test]
fn lru_evicts_least_recently_touched() {
    let trace = run(PolicyKind::Lru, 3, &[1, 2, 3, 2, 1, 4, 5, 1]);

    assert_eq!(trace[4].cache_after(), &[3, 2, 1]);
    let step = &trace[5];
    assert_eq!(*step.key(), 4);
    assert!(step.is_miss());
    assert_eq!(step.cache_before(), &[3, 2, 1]);
    assert_eq!(step.cache_after(), &[2, 1, 4]);
    assert_eq!(step.evicted(), vec![&3]);
}

#[test]
fn fifo_evicts_earliest_inserted() {
    let trace = run(PolicyKind::Fifo, 2, &[1, 2, 3]);
    assert_eq!(trace[2].cache_after(), &[2, 3]);
    assert_eq!(trace[2].evicted(), vec![&1]);
}

#[test]
fn lfu_evicts_lowest_count() {
    let trace = run(PolicyKind::Lfu, 2, &[1, 2, 1, 3]);
    assert!(trace[2].hit());
    assert_eq!(trace[3].cache_after(), &[1, 3]);
    assert_eq!(trace[3].evicted(), vec![&2]);
}

#[test]
fn lifo_evicts_last_inserted() {
    let trace = run(PolicyKind::Lifo, 2, &[1, 2, 3]);
    assert_eq!(trace[2].cache_after(), &[1, 3]);
    assert_eq!(trace[2].evicted(), vec![&2]);
}

#[test]
fn mru_evicts_previous_most_recent() {
    let trace = run(PolicyKind::Mru, 2, &[1, 2, 3]);
    assert_eq!(trace[1].cache_after(), &[1, 2]);
    assert_eq!(trace[2].cache_after(), &[1, 3]);
    assert_eq!(trace[2].evicted(), vec![&2]);
}

#[test]
fn all_policies_on_reference_workload() {
    let sim = CacheSimulator::new(3, vec![1, 2, 3, 2, 1, 4, 5, 1]).unwrap();

    let finals: Vec<(PolicyKind, Vec<i32>, usize)> = sim
        .run_all()
        .into_iter()
        .map(|(kind, t)| (kind, t.final_cache().to_vec(), t.hits()))
        .collect();

    assert_eq!(
        finals,
        vec![
            (PolicyKind::Lru, vec![4, 5, 1], 3),
            (PolicyKind::Mru, vec![3, 2, 1], 2),
            (PolicyKind::Fifo, vec![4, 5, 1], 2),
            (PolicyKind::Lfu, vec![1, 2, 5], 3),
            (PolicyKind::Lifo, vec![1, 2, 5], 3),
        ]
    );
}

#[test]
fn string_keys_work_end_to_end() {
    let sim = parse_simulator::<String>("2", "home, about, home, blog").unwrap();
    let trace = sim.lru();
    assert_eq!(trace.final_cache(), &["home".to_string(), "blog".to_string()]);

    let report = trace.report().to_string();
    assert!(report.contains("blog   | [home, blog] | MISS"));
}

#[test]
fn malformed_text_fails_before_running() {
    let err = parse_simulator::<i32>("3", "1,2,three").unwrap_err();
    assert!(err.is_input());

    let err = parse_simulator::<i32>("-1", "1,2").unwrap_err();
    assert!(err.is_configuration());
}
