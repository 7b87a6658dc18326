//! Behavior of the Euler walk against the small-angle baseline.
//!
//! The linearization sin θ ≈ θ is locally valid: for small release angles
//! the two results track each other closely, while a horizontal release
//! drifts apart over a long horizon. That divergence is the expected
//! validation result of the comparison.

use std::f64::consts::FRAC_PI_2;

use approx::assert_relative_eq;
use plumb_core::{Pendulum, SimConfig, State, compare};

#[test]
fn small_release_angle_tracks_the_linear_solution() {
    let pendulum = Pendulum::default();
    let config = SimConfig {
        initial: State::released_at(0.01),
        dt: 0.001,
        steps: 10_000,
    };

    let comparison = compare(&pendulum, config).unwrap();

    // 10 seconds is roughly five periods; first-order error stays well
    // inside the tolerance at this amplitude and step size.
    assert!(comparison.max_angle_difference() < 1e-2);
}

#[test]
fn horizontal_release_diverges_from_the_linear_solution() {
    let pendulum = Pendulum::default();
    let config = SimConfig {
        initial: State::released_at(FRAC_PI_2),
        dt: 0.001,
        steps: 10_000,
    };

    let comparison = compare(&pendulum, config).unwrap();

    // The nonlinear period is noticeably longer at this amplitude, so the
    // traces fall out of phase within a few swings.
    assert!(comparison.max_angle_difference() > 1.0);
}

#[test]
fn both_operations_use_the_same_time_grid() {
    let pendulum = Pendulum::default();
    let config = SimConfig {
        initial: State::new(0.5, 0.25),
        dt: 0.01,
        steps: 500,
    };

    let comparison = compare(&pendulum, config).unwrap();

    assert_eq!(comparison.euler.len(), comparison.small_angle.len());
    for (&accumulated, &direct) in comparison
        .euler
        .times()
        .iter()
        .zip(comparison.small_angle.times())
    {
        // The integrator accumulates t += dt; the reference evaluates i·dt.
        // They agree up to floating-point rounding.
        assert_relative_eq!(accumulated, direct, epsilon = 1e-9);
    }
}

#[test]
fn shared_initial_condition_appears_in_both() {
    let pendulum = Pendulum::default();
    let initial = State::new(0.4, -0.1);
    let config = SimConfig {
        initial,
        dt: 0.02,
        steps: 50,
    };

    let comparison = compare(&pendulum, config).unwrap();

    assert_eq!(comparison.euler.states()[0], initial);
    assert_eq!(comparison.small_angle.states()[0], initial);
}
