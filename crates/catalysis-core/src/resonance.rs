// ─────────────────────────────────────────────────────────────────────
// SCPN Catalysis Core — Resonance
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Damped, driven coupled-oscillator resonance model.
//!
//! Port of `resonance_ode` / `run_resonance`.
//! Reduces a dimensionless two-oscillator trajectory to peak amplitude,
//! floored minimum separation and a tunnelling rate boost.

use catalysis_math::ode::{solve_ivp, OdeSystem, SolverOptions};
use catalysis_types::config::ResonanceConfig;
use catalysis_types::constants::{LAMBDA_B, MIN_SEPARATION, OMEGA_0, R_DD, X_0};
use catalysis_types::error::CatalysisResult;
use ndarray::{Array1, Array2};

/// Dimensionless integration horizon. Python: linspace(0, 200, 20000).
const TAU_MAX: f64 = 200.0;

/// Number of uniform τ samples.
const N_TAU: usize = 20_000;

/// Relative tolerance for the resonance solve. Python: rtol=1e-6.
const RESONANCE_RTOL: f64 = 1e-6;

/// Two coupled oscillators in dimensionless units; the second is detuned,
/// damped and sinusoidally driven.
struct CoupledOscillators {
    detune: f64,
    damping: f64,
    coupling: f64,
    drive_amplitude: f64,
    drive_frequency: f64,
}

impl OdeSystem for CoupledOscillators {
    fn dim(&self) -> usize {
        4
    }

    fn rhs(&self, tau: f64, y: &[f64], dydt: &mut [f64]) {
        let (x1, v1, x2, v2) = (y[0], y[1], y[2], y[3]);
        dydt[0] = v1;
        dydt[1] = -x1 - self.damping * v1 - self.coupling * (x1 - x2);
        dydt[2] = v2;
        dydt[3] = -self.detune * self.detune * x2 - self.damping * v2
            - self.coupling * (x2 - x1)
            + self.drive_amplitude * (self.drive_frequency * tau).sin();
    }
}

/// Scalar outputs reduced from a completed resonance trajectory.
#[derive(Debug, Clone, Copy)]
pub struct ResonanceResult {
    /// Peak |x1| excursion (Å).
    pub peak_amplitude: f64,
    /// Floored minimum inter-particle distance (Å), never below 0.1 Å.
    pub effective_min_distance: f64,
    /// Tunnelling rate enhancement factor; order-of-magnitude quantity.
    pub rate_boost: f64,
}

/// Full state history plus reduced outputs, for downstream visualization.
#[derive(Debug, Clone)]
pub struct ResonanceTrajectory {
    /// Dimensionless time grid.
    pub tau: Array1<f64>,
    /// State history `[N_TAU × 4]`: rows are (x1, v1, x2, v2).
    pub states: Array2<f64>,
    pub result: ResonanceResult,
}

impl ResonanceTrajectory {
    /// Time grid in picoseconds (τ/ω₀ · 1e12), the plotting convention.
    pub fn time_ps(&self) -> Array1<f64> {
        self.tau.mapv(|t| t / OMEGA_0 * 1e12)
    }

    /// Oscillator position deviations in Å: (x1·x₀, x2·x₀) per sample.
    pub fn positions_angstrom(&self) -> (Array1<f64>, Array1<f64>) {
        let scale = X_0 * 1e10;
        let x1 = self.states.column(0).mapv(|x| x * scale);
        let x2 = self.states.column(2).mapv(|x| x * scale);
        (x1, x2)
    }
}

/// Run the resonance simulation and reduce it to scalar outputs.
pub fn run_resonance(config: &ResonanceConfig) -> CatalysisResult<ResonanceResult> {
    Ok(run_resonance_trajectory(config)?.result)
}

/// Run the resonance simulation keeping the full trajectory.
pub fn run_resonance_trajectory(
    config: &ResonanceConfig,
) -> CatalysisResult<ResonanceTrajectory> {
    let lambda_tf = LAMBDA_B / config.surface_factor.sqrt();

    let system = CoupledOscillators {
        detune: config.detune,
        damping: config.damping,
        coupling: config.coupling,
        drive_amplitude: config.drive_amplitude,
        drive_frequency: config.om_d(),
    };

    let tau = Array1::linspace(0.0, TAU_MAX, N_TAU).to_vec();
    let options = SolverOptions {
        rtol: RESONANCE_RTOL,
        ..Default::default()
    };
    let states = solve_ivp(&system, &[1.0, 0.0, 0.0, 0.0], &tau, &options)?;

    let mut peak = 0.0f64;
    let mut min_dd = f64::INFINITY;
    for row in states.rows() {
        peak = peak.max(row[0].abs());
        min_dd = min_dd.min((row[0] - row[2]).abs());
    }

    // Floor at ~0.1 Å: assumed minimum physical approach distance.
    let effective_min = (min_dd * X_0).max(MIN_SEPARATION);
    let delta_r = R_DD - effective_min;
    let rate_boost = (delta_r / lambda_tf).exp();

    Ok(ResonanceTrajectory {
        tau: Array1::from(tau),
        states,
        result: ResonanceResult {
            peak_amplitude: peak * X_0 * 1e10,
            effective_min_distance: effective_min * 1e10,
            rate_boost,
        },
    })
}
