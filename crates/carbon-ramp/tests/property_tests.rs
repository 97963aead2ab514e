//! Property-Based Tests for Ramp
//!
//! These tests drive a ramp on a manual clock and check bounds, step size
//! and convergence for arbitrary start points, targets and step sizes.

use std::time::Duration;

use carbon_ramp::prelude::*;
use carbon_timing::ManualClock;
use proptest::prelude::*;

const PERIOD: Duration = Duration::from_millis(10);

/// Jump the output to `start` through a disabled tick.
fn seed_output(ramp: &mut Ramp<ManualClock>, start: f64) {
    ramp.set_enabled(false);
    ramp.set_target(start);
    ramp.tick();
    ramp.set_enabled(true);
}

/// Tick once per period for `ticks` periods and collect every output.
fn drive(start: f64, target: f64, step: f64, ticks: usize) -> Vec<f64> {
    let clock = ManualClock::new();
    let mut ramp = Ramp::with_clock(clock.clone(), 0.0, step, PERIOD);
    seed_output(&mut ramp, start);
    ramp.set_target(target);

    let mut outputs = Vec::with_capacity(ticks);
    for _ in 0..ticks {
        ramp.tick();
        outputs.push(ramp.output());
        clock.advance(PERIOD);
    }
    outputs
}

proptest! {
    #[test]
    fn output_stays_between_start_and_target(
        start in -10.0f64..10.0,
        target in -10.0f64..10.0,
        step in 0.01f64..2.0,
    ) {
        let low = start.min(target);
        let high = start.max(target);
        for output in drive(start, target, step, 50) {
            prop_assert!(output >= low && output <= high);
        }
    }

    #[test]
    fn each_tick_moves_at_most_one_step(
        start in -10.0f64..10.0,
        target in -10.0f64..10.0,
        step in 0.01f64..2.0,
    ) {
        let mut previous = start;
        for output in drive(start, target, step, 50) {
            prop_assert!((output - previous).abs() <= step + 1e-9);
            previous = output;
        }
    }

    #[test]
    fn converges_within_expected_ticks(
        start in -10.0f64..10.0,
        target in -10.0f64..10.0,
        step in 0.05f64..2.0,
    ) {
        let needed = ((target - start).abs() / step).ceil() as usize + 2;
        let outputs = drive(start, target, step, needed);
        let last = outputs.last().copied().unwrap_or(start);
        prop_assert!((last - target).abs() < f64::EPSILON);
    }

    #[test]
    fn enabled_ramp_never_jumps_to_initial_target(
        target in -10.0f64..10.0,
        step in 0.01f64..2.0,
    ) {
        let mut ramp = Ramp::with_clock(ManualClock::new(), target, step, PERIOD);
        prop_assert_eq!(ramp.output(), 0.0);
        ramp.tick();
        prop_assert!(ramp.output().abs() <= step + 1e-12);
    }

    #[test]
    fn disabled_ramp_tracks_target_every_tick(
        targets in prop::collection::vec(-10.0f64..10.0, 1..30),
    ) {
        let mut ramp = Ramp::with_clock(ManualClock::new(), 0.0, 0.01, PERIOD);
        ramp.set_enabled(false);
        for target in targets {
            ramp.set_target(target);
            ramp.tick();
            prop_assert!(ramp.is_settled());
        }
    }

    #[test]
    fn map_range_hits_both_endpoints(
        old_min in -1000.0f64..0.0,
        old_max in 1.0f64..1000.0,
        new_min in -1000.0f64..1000.0,
        new_max in -1000.0f64..1000.0,
    ) {
        let at_min = map_range(old_min, old_min, old_max, new_min, new_max);
        let at_max = map_range(old_max, old_min, old_max, new_min, new_max);
        prop_assert!((at_min - new_min).abs() < 1e-9);
        prop_assert!((at_max - new_max).abs() < 1e-6);
    }
}
