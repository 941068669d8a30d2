// ABOUTME: Integration tests for derived session metrics over parsed workouts
// ABOUTME: Covers the load floor, zero-volume default, duration formula, and monotonicity
//
// SPDX-License-Identifier: MIT OR Apache-2.0

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]
#![allow(clippy::float_cmp)]

use chrono::NaiveDate;
use strong_metrics::{
    estimated_duration_minutes, total_volume, training_load, Exercise, SessionMetrics, Set,
    Workout, WorkoutParser, MIN_TRAINING_LOAD, ZERO_VOLUME_LOAD,
};

fn workout(exercises: Vec<Exercise>) -> Workout {
    Workout {
        title: "Session".to_owned(),
        performed_at: NaiveDate::from_ymd_opt(2025, 10, 8)
            .unwrap()
            .and_hms_opt(21, 16, 0)
            .unwrap(),
        exercises,
    }
}

fn weighted(weight_kg: f64, reps: u32) -> Set {
    Set::Weighted { weight_kg, reps, warmup: false }
}

#[test]
fn scenario_night_session_metrics() {
    let text = "\
Treino da noite
quarta-feira, 8 de outubro de 2025 às 21:16

Back Extension
Série 1: +0 kg × 20 reps
Série 2: +10 kg × 20 reps

Pull Up
Série 1: 9 reps
";
    let parsed = WorkoutParser::new().parse(text).unwrap();
    let metrics = SessionMetrics::for_workout(&parsed.workout);

    assert_eq!(metrics.total_volume_kg, 200.0);
    assert_eq!(metrics.training_load, 10);
    assert_eq!(metrics.duration_minutes, 2 * 3 + 2);
}

#[test]
fn load_floor_holds_for_any_positive_volume() {
    for volume_target in [1.0_f64, 200.0, 999.0, 9_999.0] {
        let w = workout(vec![Exercise {
            name: "Lift".into(),
            sets: vec![weighted(volume_target, 1)],
        }]);
        assert!(
            training_load(&w) >= MIN_TRAINING_LOAD,
            "volume {volume_target} broke the load floor"
        );
    }
}

#[test]
fn zero_volume_gets_the_fixed_default() {
    let w = workout(vec![Exercise {
        name: "Plank".into(),
        sets: vec![Set::Timed { duration_seconds: 60 }],
    }]);
    assert_eq!(total_volume(&w), 0.0);
    assert_eq!(training_load(&w), ZERO_VOLUME_LOAD);
}

#[test]
fn duration_is_exactly_two_per_set_plus_one_per_exercise() {
    let w = workout(vec![
        Exercise { name: "A".into(), sets: vec![weighted(50.0, 5); 4] },
        Exercise { name: "B".into(), sets: vec![Set::Bodyweight { reps: 10 }; 2] },
        Exercise { name: "C".into(), sets: vec![Set::Timed { duration_seconds: 30 }] },
    ]);
    assert_eq!(estimated_duration_minutes(&w), 2 * 7 + 3);
}

#[test]
fn minimal_workout_duration_is_three_minutes() {
    let w = workout(vec![Exercise {
        name: "Pull Up".into(),
        sets: vec![Set::Bodyweight { reps: 1 }],
    }]);
    assert_eq!(estimated_duration_minutes(&w), 3);
}

#[test]
fn adding_a_weighted_set_strictly_increases_volume() {
    let mut w = workout(vec![Exercise {
        name: "Squat".into(),
        sets: vec![weighted(80.0, 5)],
    }]);
    let before = total_volume(&w);
    w.exercises[0].sets.push(weighted(0.5, 1));
    assert!(total_volume(&w) > before);
}

#[test]
fn bodyweight_and_timed_sets_add_no_volume() {
    let mut w = workout(vec![Exercise {
        name: "Squat".into(),
        sets: vec![weighted(80.0, 5)],
    }]);
    let before = total_volume(&w);
    w.exercises[0].sets.push(Set::Bodyweight { reps: 20 });
    w.exercises[0].sets.push(Set::Timed { duration_seconds: 600 });
    assert_eq!(total_volume(&w), before);
}

#[test]
fn warmup_sets_still_count_toward_volume() {
    let w = workout(vec![Exercise {
        name: "Squat".into(),
        sets: vec![Set::Weighted { weight_kg: 40.0, reps: 10, warmup: true }],
    }]);
    assert_eq!(total_volume(&w), 400.0);
}
