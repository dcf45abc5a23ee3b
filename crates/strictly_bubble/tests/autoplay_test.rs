//! Tests for the auto-play sequencer.

use strictly_bubble::{
    AUTO_SORT_COMPLETE, AutoPlay, Decision, Highlight, Session, Snapshot, commands,
};

fn run(values: Vec<u32>) -> Vec<Snapshot> {
    AutoPlay::new(Session::from_values(values)).collect()
}

#[test]
fn test_canonical_trace() {
    let snapshots = run(vec![5, 3, 4, 1]);

    let expected: [(&str, [u32; 4], (usize, usize)); 6] = [
        ("Swapped 3 and 5", [3, 5, 4, 1], (0, 1)),
        ("Swapped 4 and 5", [3, 4, 5, 1], (1, 2)),
        ("Swapped 1 and 5", [3, 4, 1, 5], (2, 3)),
        ("No swap needed for 3 and 4", [3, 4, 1, 5], (0, 1)),
        ("Swapped 1 and 4", [3, 1, 4, 5], (1, 2)),
        ("Swapped 1 and 3", [1, 3, 4, 5], (0, 1)),
    ];

    assert_eq!(snapshots.len(), expected.len() + 1);
    for (snapshot, (feedback, array, (first, second))) in snapshots.iter().zip(expected) {
        assert_eq!(snapshot.feedback(), feedback);
        assert_eq!(snapshot.array(), &array);
        assert_eq!(snapshot.chart().highlight(), Some(Highlight::new(first, second)));
    }

    let last = snapshots.last().unwrap();
    assert_eq!(last.feedback(), AUTO_SORT_COMPLETE);
    assert_eq!(last.array(), &[1, 3, 4, 5]);
    assert_eq!(last.chart().highlight(), None);
    assert_eq!(last.steps_text(), "Steps: 6");
}

#[test]
fn test_history_lines() {
    let mut auto = AutoPlay::new(Session::from_values(vec![2, 1, 3]));
    auto.by_ref().for_each(drop);
    let session = auto.into_session();

    assert_eq!(
        session.history().lines(),
        [
            "Step 0: New list generated: [2, 1, 3]",
            "Step 1: Swapped 1 and 2 → [1, 2, 3]",
            "Step 2: No swap needed for 2 and 3 → [1, 2, 3]",
            "Step 3: No swap needed for 1 and 2 → [1, 2, 3]",
            "Step 3: Auto sort complete! 🎉",
        ]
    );
    assert!(session.is_done());
}

#[test]
fn test_sequence_is_fused() {
    let mut auto = AutoPlay::new(Session::from_values(vec![3, 1, 2]));
    let produced = auto.by_ref().count();
    assert_eq!(produced, 4);
    assert!(auto.next().is_none());
    assert!(auto.next().is_none());
}

#[test]
fn test_step_numbers_continue_from_interactive_play() {
    let mut session = Session::from_values(vec![4, 2, 3, 1]);
    session.step(Decision::DontSwap); // incorrect, still counted
    session.step(Decision::Swap);

    let snapshots: Vec<Snapshot> = commands::auto_sort(session).collect();
    assert_eq!(snapshots[0].steps(), 3);
    assert_eq!(snapshots.last().unwrap().array(), &[1, 2, 3, 4]);
}

#[test]
fn test_interrupted_run_resumes_interactively() {
    let mut auto = AutoPlay::new(Session::from_values(vec![6, 5, 4, 3, 2]));
    for _ in 0..5 {
        auto.next();
    }
    let mut session = auto.into_session();
    assert!(!session.is_done());

    while let Some((left, right)) = session.current_pair() {
        session.step(Decision::for_pair(left, right));
    }
    assert_eq!(session.array(), &[2, 3, 4, 5, 6]);
    assert_eq!(session.steps(), 10);
}

#[test]
fn test_snapshots_serialize_as_json() {
    let snapshot = run(vec![2, 1]).remove(0);
    let json = serde_json::to_value(&snapshot).unwrap();
    assert_eq!(json["array"], serde_json::json!([1, 2]));
    assert_eq!(json["feedback"], "Swapped 1 and 2");
    assert_eq!(json["chart"]["bars"][0]["role"], "First");
}
