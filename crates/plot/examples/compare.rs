//! Forward Euler vs. the small-angle solution, side by side.
//!
//! Releases a pendulum horizontally (θ₀ = π/2, ω₀ = 0), integrates the full
//! nonlinear equation with forward Euler, evaluates the linearized solution
//! on the same grid, and shows both trajectories in one window. At this
//! amplitude the small-angle period is noticeably short, so the traces fall
//! out of phase within a few swings — which is the point of the comparison.
//!
//! # Usage
//!
//! ```text
//! cargo run --example compare
//! cargo run --example compare -- 0.01
//! cargo run --example compare -- 0.001 20000
//! ```
//!
//! The first argument overrides the step size in seconds (default 0.001),
//! the second the step count (default 10000).

use std::{error::Error, f64::consts::FRAC_PI_2};

use plumb_core::{Pendulum, SimConfig, State, compare};
use plumb_plot::{Panel, PlotApp, ShowConfig};

fn main() -> Result<(), Box<dyn Error>> {
    let dt = std::env::args()
        .nth(1)
        .as_deref()
        .map(str::parse::<f64>)
        .transpose()
        .unwrap_or_else(|_| {
            eprintln!("Invalid step size — expected a number, e.g. 0.001");
            std::process::exit(1);
        })
        .unwrap_or(0.001);

    let steps = std::env::args()
        .nth(2)
        .as_deref()
        .map(str::parse::<usize>)
        .transpose()
        .unwrap_or_else(|_| {
            eprintln!("Invalid step count — expected an integer, e.g. 10000");
            std::process::exit(1);
        })
        .unwrap_or(10_000);

    let pendulum = Pendulum::default();
    let config = SimConfig {
        initial: State::released_at(FRAC_PI_2),
        dt,
        steps,
    };

    let comparison = compare(&pendulum, config)?;

    #[allow(clippy::cast_precision_loss)]
    let horizon = steps as f64 * dt;
    println!("Integrated {steps} steps of {dt} s ({horizon:.3} s horizon).");
    println!(
        "Max |θ_euler − θ_ref| = {:.6} rad",
        comparison.max_angle_difference()
    );

    PlotApp::new()
        .add_panel(
            Panel::new("Forward Euler (nonlinear)")
                .series("θ (rad)", &comparison.euler.points()),
        )
        .add_panel(
            Panel::new("Small-angle solution")
                .series("θ (rad)", &comparison.small_angle.points()),
        )
        .run(
            ShowConfig::new()
                .title("Pendulum: forward Euler vs. small-angle solution")
                .legend(),
        )?;

    Ok(())
}
