//! Property-based tests for carbon-timing.
//!
//! These tests verify the deadline invariants of `CountdownTimer` for
//! arbitrary durations and clock advances.

use std::time::Duration;

use carbon_timing::{Clock, CountdownTimer, ManualClock};
use quickcheck_macros::quickcheck;

#[quickcheck]
fn prop_done_iff_clock_reached_deadline(duration_ms: u16, advance_ms: u16) -> bool {
    let clock = ManualClock::new();
    let timer = CountdownTimer::with_clock(clock.clone(), Duration::from_millis(u64::from(duration_ms)));

    clock.advance(Duration::from_millis(u64::from(advance_ms)));

    timer.is_done() == (advance_ms >= duration_ms)
}

#[quickcheck]
fn prop_once_done_stays_done(duration_ms: u16, steps: Vec<u8>) -> bool {
    let clock = ManualClock::new();
    let timer = CountdownTimer::with_clock(clock.clone(), Duration::from_millis(u64::from(duration_ms)));

    let mut seen_done = false;
    for step in steps {
        clock.advance(Duration::from_millis(u64::from(step)));
        let done = timer.is_done();
        if seen_done && !done {
            return false;
        }
        seen_done |= done;
    }
    true
}

#[quickcheck]
fn prop_remaining_plus_now_is_deadline_while_armed(duration_ms: u16, advance_ms: u16) -> bool {
    let clock = ManualClock::new();
    let timer = CountdownTimer::with_clock(clock.clone(), Duration::from_millis(u64::from(duration_ms)));

    clock.advance(Duration::from_millis(u64::from(advance_ms)));

    if timer.is_done() {
        timer.remaining() == Duration::ZERO
    } else {
        clock.now() + timer.remaining() == timer.deadline()
    }
}

#[quickcheck]
fn prop_reset_measures_from_current_time(start_ms: u32, duration_ms: u16) -> bool {
    let clock = ManualClock::starting_at(Duration::from_millis(u64::from(start_ms)));
    let mut timer = CountdownTimer::expired(clock.clone());

    timer.reset(Duration::from_millis(u64::from(duration_ms)));

    timer.deadline() == clock.now() + Duration::from_millis(u64::from(duration_ms))
}

mod proptest_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn repeated_polling_never_changes_answer(
            duration_ms in 0u64..1_000,
            advance_ms in 0u64..1_000,
            polls in 1usize..50,
        ) {
            let clock = ManualClock::new();
            let timer = CountdownTimer::with_clock(clock.clone(), Duration::from_millis(duration_ms));
            clock.advance(Duration::from_millis(advance_ms));

            let first = timer.is_done();
            for _ in 0..polls {
                prop_assert_eq!(timer.is_done(), first);
            }
        }
    }
}
