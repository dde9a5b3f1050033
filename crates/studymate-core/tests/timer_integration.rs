//! Timer stack integration: elapsed engine, countdown adapter, pomodoro
//! cycle, and attention tracker driven together on a shared manual clock.

use studymate_core::attention::AttentionTracker;
use studymate_core::timer::{Countdown, ElapsedTimer, ManualClock, PomodoroCycle, PomodoroMode};
use studymate_core::Event;

#[test]
fn pomodoro_session_driven_by_countdown_completions() {
    let clock = ManualClock::new();
    let mut cycle = PomodoroCycle::new();
    let mut tracker = AttentionTracker::with_clock(clock.clone());

    for round in 1..=4u32 {
        let mut countdown = Countdown::with_clock(cycle.mode().duration_secs(), clock.clone());
        countdown.start();
        tracker.set_active(true);

        // A quick glance away mid-session: interruption, no distraction.
        clock.advance(60_000);
        assert!(tracker.visibility_hidden().is_some());
        clock.advance(1_000);
        assert!(tracker.poll().is_none());
        tracker.visibility_visible();

        clock.advance(cycle.mode().duration_secs() * 1000);
        let completion = countdown.tick();
        assert!(matches!(completion, Some(Event::CountdownCompleted { .. })));
        tracker.set_active(false);

        let event = cycle.complete();
        match event {
            Event::PomodoroAdvanced {
                mode,
                completed_work,
                ..
            } => {
                assert_eq!(completed_work, round);
                if round == 4 {
                    assert_eq!(mode, PomodoroMode::LongBreak);
                } else {
                    assert_eq!(mode, PomodoroMode::ShortBreak);
                }
            }
            other => panic!("unexpected event: {other:?}"),
        }

        // Finish the break to get back to work.
        cycle.complete();
        assert_eq!(cycle.mode(), PomodoroMode::Work);
    }

    assert_eq!(tracker.interruptions(), 4);
    assert!(!tracker.is_distracted());
}

#[test]
fn elapsed_accumulation_is_additive_across_intervals() {
    let clock = ManualClock::new();
    let mut timer = ElapsedTimer::with_clock(clock.clone());

    // A single start/wait/pause interval reads back exactly the wait.
    timer.start();
    clock.advance(7_000);
    timer.pause();
    assert_eq!(timer.tick(), 7);

    // Repeating start/pause N times accumulates additively.
    for _ in 0..5 {
        timer.start();
        clock.advance(3_000);
        timer.pause();
        clock.advance(100_000);
    }
    assert_eq!(timer.tick(), 7 + 5 * 3);
}

#[test]
fn countdown_remaining_never_goes_negative() {
    let clock = ManualClock::new();
    let mut countdown = Countdown::with_clock(5, clock.clone());
    countdown.start();
    clock.advance(60_000);
    let mut completions = 0;
    for _ in 0..10 {
        if countdown.tick().is_some() {
            completions += 1;
        }
        clock.advance(1_000);
    }
    assert_eq!(completions, 1);
    assert_eq!(countdown.remaining_secs(), 0);
}

#[test]
fn sustained_hide_during_active_session_flags_distraction() {
    let clock = ManualClock::new();
    let mut tracker = AttentionTracker::with_clock(clock.clone());
    tracker.set_active(true);

    tracker.visibility_hidden();
    clock.advance(3_500);
    assert!(matches!(
        tracker.poll(),
        Some(Event::DistractionFlagged { hidden_ms: 3_500, .. })
    ));
    assert_eq!(tracker.interruptions(), 1);
}
