//! Tests for the single-step evaluator.

use rand::SeedableRng;
use rand::rngs::StdRng;
use strictly_bubble::{
    ALREADY_COMPLETE, Decision, InvariantSet, ListSpec, Session, SessionInvariants, Verdict,
    is_sorted,
};

/// Answers every pair correctly until the session finishes.
fn play_perfectly(session: &mut Session) -> u32 {
    let mut comparisons = 0;
    while let Some((left, right)) = session.current_pair() {
        let outcome = session.step(Decision::for_pair(left, right));
        assert_eq!(outcome.verdict(), Verdict::Correct);
        assert!(SessionInvariants::check_all(session).is_ok());
        comparisons += 1;
    }
    comparisons
}

fn wrong(session: &Session) -> Decision {
    let (left, right) = session.current_pair().expect("Pair expected");
    match Decision::for_pair(left, right) {
        Decision::Swap => Decision::DontSwap,
        Decision::DontSwap => Decision::Swap,
    }
}

#[test]
fn test_perfect_play_sorts_descending_in_worst_case_comparisons() {
    for n in 2..=9u32 {
        let mut session = Session::from_values((1..=n).rev().collect());
        let comparisons = play_perfectly(&mut session);
        assert!(session.is_done());
        assert!(is_sorted(session.array()));
        assert_eq!(comparisons, n * (n - 1) / 2, "n = {}", n);
    }
}

#[test]
fn test_perfect_play_never_exceeds_worst_case_comparisons() {
    let mut rng = StdRng::seed_from_u64(2024);
    for _ in 0..200 {
        let mut session = Session::generate(ListSpec::new(7, 1, 40), &mut rng).unwrap();
        let original = session.array().to_vec();
        let comparisons = play_perfectly(&mut session);

        let mut expected = original;
        expected.sort_unstable();
        assert_eq!(session.array(), expected.as_slice());
        assert!(comparisons <= 21);
        assert_eq!(session.steps(), comparisons);
    }
}

#[test]
fn test_trace_example_completes_on_sixth_comparison() {
    let mut session = Session::from_values(vec![5, 3, 4, 1]);
    let comparisons = play_perfectly(&mut session);
    assert_eq!(comparisons, 6);
    assert_eq!(session.array(), &[1, 3, 4, 5]);
}

#[test]
fn test_incorrect_decision_never_mutates_or_advances() {
    let mut rng = StdRng::seed_from_u64(99);
    for _ in 0..50 {
        let mut session = Session::generate(ListSpec::default(), &mut rng).unwrap();
        while !session.is_done() {
            let before = session.clone();
            let outcome = session.step(wrong(&session));

            assert_eq!(outcome.verdict(), Verdict::Incorrect);
            assert_eq!(session.array(), before.array());
            assert_eq!(session.pass(), before.pass());
            assert_eq!(session.inner(), before.inner());
            assert_eq!(session.current_pair(), before.current_pair());
            assert!(!session.is_done());
            assert_eq!(session.steps(), before.steps() + 1);

            let (left, right) = session.current_pair().unwrap();
            session.step(Decision::for_pair(left, right));
        }
    }
}

#[test]
fn test_finished_session_is_idempotent() {
    let mut session = Session::from_values(vec![2, 1]);
    session.step(Decision::Swap);
    assert!(session.is_done());
    let finished = session.clone();

    for decision in [Decision::Swap, Decision::DontSwap, Decision::Swap] {
        let outcome = session.step(decision);
        assert_eq!(outcome.verdict(), Verdict::AlreadyComplete);
        assert_eq!(outcome.snapshot().feedback(), ALREADY_COMPLETE);
        assert_eq!(outcome.snapshot().array(), &[1, 2]);
        assert_eq!(outcome.snapshot().chart().highlight(), None);
    }
    assert_eq!(session, finished);
}

#[test]
fn test_history_counts_one_line_per_call_plus_opening() {
    let mut session = Session::from_values(vec![9, 4, 7, 1, 5]);
    let mut calls = 0;
    while !session.is_done() {
        if calls % 3 == 0 {
            session.step(wrong(&session));
        } else {
            let (left, right) = session.current_pair().unwrap();
            session.step(Decision::for_pair(left, right));
        }
        calls += 1;
        assert_eq!(session.history().len(), calls + 1);
    }

    session.step(Decision::Swap);
    session.step(Decision::DontSwap);
    assert_eq!(session.history().len(), calls + 1);
    assert_eq!(session.steps() as usize, calls);
}

#[test]
fn test_snapshot_reports_display_values() {
    let mut session = Session::from_values(vec![4, 8, 2]);
    let outcome = session.step(Decision::DontSwap);
    let snapshot = outcome.snapshot();

    assert_eq!(snapshot.array(), &[4, 8, 2]);
    assert_eq!(snapshot.steps_text(), "Steps: 1");
    assert_eq!(
        snapshot.history_text(),
        "Step 0: New list generated: [4, 8, 2]\n\
         Step 1: Correct! 4 ≤ 8, so no swap was needed. → [4, 8, 2]"
    );
    let highlight = snapshot.chart().highlight().unwrap();
    assert_eq!((highlight.first, highlight.second), (1, 2));
}

#[test]
fn test_generating_short_lists_finishes_immediately() {
    let mut rng = StdRng::seed_from_u64(5);
    for len in [0, 1] {
        let mut session = Session::generate(ListSpec::new(len, 1, 19), &mut rng).unwrap();
        assert!(session.is_done());
        assert_eq!(session.highlight(), None);
        assert_eq!(session.step(Decision::Swap).verdict(), Verdict::AlreadyComplete);
        assert_eq!(session.steps(), 0);
    }
}
