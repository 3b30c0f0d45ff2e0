//! Reproducibility QA: falsification-style hypothesis tests over
//! serialized run state.

use warnsdorff::prelude::*;

fn run_to_end(seed: u64) -> Vec<String> {
    let mut tour = TourController::new(TourConfig::builder().seed(seed).build());
    tour.start(0);

    let mut states = vec![serde_json::to_string(&tour.snapshot()).expect("serialize")];
    loop {
        let outcome = tour.tick();
        states.push(serde_json::to_string(&tour.snapshot()).expect("serialize"));
        if !matches!(outcome, Some(StepOutcome::Moved(_))) {
            break;
        }
    }
    states
}

// H0: Different seeds produce identical runs
// Falsification: Run with seeds 42, 43, 44; compare serialized state
#[test]
fn h0_1_different_seeds_produce_different_runs() {
    let outputs: Vec<Vec<String>> = [42, 43, 44].iter().map(|&s| run_to_end(s)).collect();

    assert_ne!(outputs[0], outputs[1], "Seed 42 and 43 produced identical runs");
    assert_ne!(outputs[1], outputs[2], "Seed 43 and 44 produced identical runs");
    assert_ne!(outputs[0], outputs[2], "Seed 42 and 44 produced identical runs");
}

// H0: Same seed produces different runs across repetitions
// Falsification: Run 20 repetitions with seed 42; compare all
#[test]
fn h0_2_same_seed_produces_identical_runs() {
    let first = run_to_end(42);
    for i in 1..20 {
        let run = run_to_end(42);
        assert_eq!(first, run, "Run {i} diverged from run 0 with the same seed");
    }
}

// H0: reset() loses the run
// Falsification: Run, reset, run again; compare state sequences
#[test]
fn h0_3_reset_replays_bit_identical() {
    let mut tour = TourController::new(TourConfig::builder().seed(7).build());

    tour.start(0);
    let mut first = Vec::new();
    for _ in 0..20 {
        tour.tick();
        first.push(tour.snapshot().compute_hash());
    }

    tour.reset();
    tour.start(0);
    let mut second = Vec::new();
    for _ in 0..20 {
        tour.tick();
        second.push(tour.snapshot().compute_hash());
    }

    assert_eq!(first, second, "Reset did not produce an identical replay");
}

// H0: snapshot hashing is sensitive only to state
// Falsification: identical states must hash identically; a moved
// knight must change the hash
#[test]
fn h0_4_snapshot_hash_tracks_state() {
    let mut a = TourController::new(TourConfig::builder().seed(11).build());
    let b = TourController::new(TourConfig::builder().seed(11).build());

    assert_eq!(a.snapshot().compute_hash(), b.snapshot().compute_hash());

    a.start(0);
    a.tick();
    assert_ne!(a.snapshot().compute_hash(), b.snapshot().compute_hash());
}

// H0: board size changes leak across runs
// Falsification: a 6x6 run and an 8x8 run from the same seed stay
// within their own bounds
#[test]
fn h0_5_board_size_respected() {
    for size in [6u8, 8, 12] {
        let mut tour = TourController::new(
            TourConfig::builder().seed(42).board_size(size).build(),
        );
        tour.start(0);
        while matches!(tour.tick(), Some(StepOutcome::Moved(_))) {}

        let snapshot = tour.snapshot();
        assert_eq!(snapshot.size, size);
        assert_eq!(snapshot.counts.len(), usize::from(size) * usize::from(size));
        assert!(snapshot.knight.x < size && snapshot.knight.y < size);
        assert!(tour.board().visited_cells() <= usize::from(size) * usize::from(size));
    }
}
