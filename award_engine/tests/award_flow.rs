//! End-to-end flows: evaluate, persist, notify, replay.

use chrono::{TimeZone, Utc};
use std::collections::HashSet;

use award_engine::{AwardEngine, HistoryStore, MemoryHistoryStore, NotificationQueue};
use badge_catalog::{BadgeCatalog, GameAction, StudentId, SubjectArea};

fn engine() -> AwardEngine {
    AwardEngine::new(BadgeCatalog::builtin().expect("builtin catalog loads"))
}

fn midday_action(student: StudentId, score: i64) -> GameAction {
    let noon = Utc.with_ymd_and_hms(2026, 3, 14, 12, 0, 0).unwrap();
    GameAction::new(student, "counting-quiz", SubjectArea::Math)
        .with_results(10, 8)
        .with_score(score)
        .with_completed_at(noon)
}

/// The caller's two-phase protocol: evaluate, then persist.
fn play(
    engine: &AwardEngine,
    store: &mut MemoryHistoryStore,
    action: &GameAction,
) -> award_engine::AwardOutcome {
    let outcome = engine.process(store, action);
    let ids: Vec<_> = outcome.earned_badges.iter().map(|b| b.id.clone()).collect();
    store
        .append_badges(action.student_id, &ids, action.completed_at)
        .expect("memory store never fails");
    store.record_activity(action).expect("memory store never fails");
    outcome
}

#[test]
fn first_perfect_activity_awards_achievement_and_special_badges() {
    let engine = engine();
    let mut store = MemoryHistoryStore::new();
    let student = StudentId::new();

    let action = midday_action(student, 100).with_results(10, 10).with_hints(0);
    let outcome = play(&engine, &mut store, &action);

    let slugs: Vec<_> = outcome.earned_badges.iter().map(|b| b.id.as_str()).collect();
    assert!(slugs.contains(&"perfect-score"));
    assert!(slugs.contains(&"first-steps"));

    let expected: u32 = outcome.earned_badges.iter().map(|b| b.points).sum();
    assert_eq!(outcome.total_points, expected);
}

#[test]
fn replaying_a_persisted_action_awards_nothing() {
    let engine = engine();
    let mut store = MemoryHistoryStore::new();
    let student = StudentId::new();

    let action = midday_action(student, 100).with_results(10, 10).with_hints(0);
    let first = play(&engine, &mut store, &action);
    assert!(!first.earned_badges.is_empty());

    let replay = play(&engine, &mut store, &action);
    assert!(replay.earned_badges.is_empty());
    assert_eq!(replay.total_points, first.total_points);
    assert_eq!(replay.message, "no new badges");
}

#[test]
fn no_badge_is_ever_awarded_twice_across_a_long_session() {
    let engine = engine();
    let mut store = MemoryHistoryStore::new();
    let student = StudentId::new();

    let scores = [100, 40, 85, 90, 95, 100, 70, 88, 92, 100, 83, 99];
    let mut all_awarded = Vec::new();

    for score in scores {
        let outcome = play(&engine, &mut store, &midday_action(student, score));
        all_awarded.extend(outcome.earned_badges.into_iter().map(|b| b.id));
    }

    let unique: HashSet<_> = all_awarded.iter().collect();
    assert_eq!(all_awarded.len(), unique.len(), "duplicate award in {:?}", all_awarded);

    let history = store.load_history(student).unwrap();
    assert_eq!(history.earned.len(), all_awarded.len());
}

#[test]
fn total_points_never_decrease() {
    let engine = engine();
    let mut store = MemoryHistoryStore::new();
    let student = StudentId::new();

    let mut previous = 0;
    for score in [100, 20, 95, 0, 85, 100, 60, 90] {
        let outcome = play(&engine, &mut store, &midday_action(student, score));
        assert!(
            outcome.total_points >= previous,
            "points fell from {} to {}",
            previous,
            outcome.total_points
        );
        previous = outcome.total_points;
    }
}

#[test]
fn five_streak_badge_lands_exactly_on_the_fifth_call() {
    let engine = engine();
    let mut store = MemoryHistoryStore::new();
    let student = StudentId::new();

    for round in 1..=5 {
        let outcome = play(&engine, &mut store, &midday_action(student, 85));
        let has_streak_five = outcome
            .earned_badges
            .iter()
            .any(|b| b.id.as_str() == "streak-five");
        assert_eq!(has_streak_five, round == 5, "round {}", round);
    }
}

#[test]
fn a_low_score_resets_the_streak() {
    let engine = engine();
    let mut store = MemoryHistoryStore::new();
    let student = StudentId::new();

    for _ in 0..4 {
        play(&engine, &mut store, &midday_action(student, 85));
    }
    // The non-qualifying action breaks the run...
    play(&engine, &mut store, &midday_action(student, 30));
    // ...so the next qualifying one starts over at 1.
    let outcome = play(&engine, &mut store, &midday_action(student, 90));
    assert!(!outcome
        .earned_badges
        .iter()
        .any(|b| b.id.as_str() == "streak-five"));
}

#[test]
fn malformed_report_is_clamped_and_still_processed() {
    let engine = engine();
    let mut store = MemoryHistoryStore::new();
    let student = StudentId::new();

    let action = midday_action(student, -5).with_results(-2, 7).with_hints(-1);
    let outcome = play(&engine, &mut store, &action);

    // A zeroed score earns nothing score-based, but processing completed and
    // the first-activity badge still lands.
    assert!(!outcome.earned_badges.iter().any(|b| b.id.as_str() == "high-flyer"));
    assert!(outcome.earned_badges.iter().any(|b| b.id.as_str() == "first-steps"));
}

#[test]
fn earned_badges_flow_into_the_notification_queue_in_order() {
    let engine = engine();
    let mut store = MemoryHistoryStore::new();
    let mut queue = NotificationQueue::new();
    let student = StudentId::new();

    let action = midday_action(student, 100).with_results(10, 10).with_hints(0);
    let outcome = play(&engine, &mut store, &action);
    let ids = queue.enqueue_all(&outcome.earned_badges);

    assert_eq!(queue.len(), outcome.earned_badges.len());
    let queued: Vec<_> = queue.iter().map(|n| n.badge.id.clone()).collect();
    let earned: Vec<_> = outcome.earned_badges.iter().map(|b| b.id.clone()).collect();
    assert_eq!(queued, earned);

    // Dismissing out of order leaves the rest untouched.
    assert!(queue.dismiss(ids[1]));
    assert!(!queue.dismiss(ids[1]));
    assert_eq!(queue.len(), outcome.earned_badges.len() - 1);
}

#[test]
fn mastery_builds_up_across_a_subject() {
    let engine = engine();
    let mut store = MemoryHistoryStore::new();
    let student = StudentId::new();
    let noon = Utc.with_ymd_and_hms(2026, 3, 14, 12, 0, 0).unwrap();

    let logic_action = |score: i64| {
        GameAction::new(student, "robot-factory", SubjectArea::Logic)
            .with_results(6, 5)
            .with_score(score)
            .with_completed_at(noon)
    };

    for round in 1..=5 {
        let outcome = play(&engine, &mut store, &logic_action(90));
        let has_mastery = outcome
            .earned_badges
            .iter()
            .any(|b| b.id.as_str() == "logic-master");
        assert_eq!(has_mastery, round == 5, "round {}", round);
    }
}
