//! Insta snapshot tests for latch firing traces.
//!
//! Each trace prints `^` where the latch fired and `.` where it stayed quiet.

use carbon_latch::prelude::*;

fn trace(fired: impl IntoIterator<Item = bool>) -> String {
    fired
        .into_iter()
        .map(|f| if f { '^' } else { '.' })
        .collect()
}

#[test]
fn rising_edge_trace_snapshot() {
    let mut latch = EdgeLatch::new();
    let fired = [false, true, true, false, true].map(|v| latch.on_rising_edge(v));

    insta::assert_snapshot!(trace(fired), @".^..^");
}

#[test]
fn falling_edge_trace_snapshot() {
    let mut latch = EdgeLatch::new();
    let fired = [true, true, false, false, true, false].map(|v| latch.on_falling_edge(v));

    insta::assert_snapshot!(trace(fired), @"..^..^");
}

#[test]
fn either_edge_trace_snapshot() {
    let mut latch = EdgeLatch::new();
    let fired = [true, false, true, true, false, false, true].map(|v| latch.on_either_edge(v));

    insta::assert_snapshot!(trace(fired), @".^^.^.^");
}

#[test]
fn threshold_enter_trace_snapshot() {
    let mut latch = ThresholdLatch::new();
    let fired = [20.0, 5.0, -20.0, 0.0].map(|v| latch.on_enter(v, 10.0, -10.0));

    insta::assert_snapshot!(trace(fired), @".^.^");
}

#[test]
fn threshold_exit_joystick_deadband_snapshot() {
    let mut latch = ThresholdLatch::new();
    let stick = [0.0, 0.02, 0.3, 0.6, 0.04, -0.01, -0.5, -0.05];
    let fired = stick.map(|v| latch.on_exit_symmetric(v, 0.1));

    insta::assert_snapshot!(trace(fired), @"..^...^.");
}
