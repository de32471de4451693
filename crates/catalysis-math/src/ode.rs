// ─────────────────────────────────────────────────────────────────────
// SCPN Catalysis Core — ODE Integrator
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Adaptive-step initial-value problem solver.
//!
//! Cash-Karp embedded Runge-Kutta 4(5) with local error control, sampled
//! onto a caller-supplied output grid. Covers the mildly stiff regime of
//! the kinetics chain and the bounded oscillatory resonance dynamics.

use catalysis_types::error::{CatalysisError, CatalysisResult};
use ndarray::Array2;

/// Right-hand side contract for an autonomous or driven ODE system.
pub trait OdeSystem {
    /// State dimensionality.
    fn dim(&self) -> usize;
    /// Evaluate dy/dt at (t, y) into `dydt`.
    fn rhs(&self, t: f64, y: &[f64], dydt: &mut [f64]);
}

/// Step-controller options.
#[derive(Debug, Clone, Copy)]
pub struct SolverOptions {
    /// Relative error tolerance per step.
    pub rtol: f64,
    /// Absolute error tolerance per step.
    pub atol: f64,
    /// Total accepted/rejected step budget for one solve.
    pub max_steps: usize,
}

impl Default for SolverOptions {
    fn default() -> Self {
        SolverOptions {
            rtol: 1e-8,
            atol: 1e-12,
            max_steps: 2_000_000,
        }
    }
}

// Cash-Karp tableau.
const B21: f64 = 1.0 / 5.0;
const B31: f64 = 3.0 / 40.0;
const B32: f64 = 9.0 / 40.0;
const B41: f64 = 3.0 / 10.0;
const B42: f64 = -9.0 / 10.0;
const B43: f64 = 6.0 / 5.0;
const B51: f64 = -11.0 / 54.0;
const B52: f64 = 5.0 / 2.0;
const B53: f64 = -70.0 / 27.0;
const B54: f64 = 35.0 / 27.0;
const B61: f64 = 1631.0 / 55296.0;
const B62: f64 = 175.0 / 512.0;
const B63: f64 = 575.0 / 13824.0;
const B64: f64 = 44275.0 / 110592.0;
const B65: f64 = 253.0 / 4096.0;

const A2: f64 = 1.0 / 5.0;
const A3: f64 = 3.0 / 10.0;
const A4: f64 = 3.0 / 5.0;
const A5: f64 = 1.0;
const A6: f64 = 7.0 / 8.0;

// 5th-order solution weights.
const C1: f64 = 37.0 / 378.0;
const C3: f64 = 250.0 / 621.0;
const C4: f64 = 125.0 / 594.0;
const C6: f64 = 512.0 / 1771.0;

// (5th - 4th)-order error weights.
const E1: f64 = C1 - 2825.0 / 27648.0;
const E3: f64 = C3 - 18575.0 / 48384.0;
const E4: f64 = C4 - 13525.0 / 55296.0;
const E5: f64 = -277.0 / 14336.0;
const E6: f64 = C6 - 1.0 / 4.0;

/// Step-size controller exponents and limits.
const SAFETY: f64 = 0.9;
const SHRINK_EXP: f64 = -0.25;
const GROW_EXP: f64 = -0.2;
const MAX_GROW: f64 = 5.0;
const MIN_SHRINK: f64 = 0.1;

/// Solve an initial-value problem over a strictly increasing output grid.
///
/// Returns the state trajectory with shape `[t_grid.len(), system.dim()]`;
/// row `i` is the solution at `t_grid[i]` and row 0 is `y0`.
pub fn solve_ivp<S: OdeSystem>(
    system: &S,
    y0: &[f64],
    t_grid: &[f64],
    options: &SolverOptions,
) -> CatalysisResult<Array2<f64>> {
    if t_grid.len() < 2 {
        return Err(CatalysisError::InvalidInput(format!(
            "ODE time grid needs at least 2 points, got {}",
            t_grid.len()
        )));
    }
    if !t_grid.windows(2).all(|w| w[1] > w[0]) {
        return Err(CatalysisError::InvalidInput(
            "ODE time grid must be strictly increasing".to_string(),
        ));
    }
    let dim = system.dim();
    if y0.len() != dim {
        return Err(CatalysisError::InvalidInput(format!(
            "Initial state dimension mismatch: expected {}, got {}",
            dim,
            y0.len()
        )));
    }
    if !y0.iter().all(|v| v.is_finite()) {
        return Err(CatalysisError::InvalidInput(
            "Initial state contains non-finite values".to_string(),
        ));
    }
    if options.rtol <= 0.0 || options.atol <= 0.0 {
        return Err(CatalysisError::InvalidInput(
            "Solver tolerances must be positive".to_string(),
        ));
    }

    let span = t_grid[t_grid.len() - 1] - t_grid[0];
    let h_min = span * 1e-14;

    let mut out = Array2::zeros((t_grid.len(), dim));
    for (j, &v) in y0.iter().enumerate() {
        out[[0, j]] = v;
    }

    let mut y = y0.to_vec();
    let mut t = t_grid[0];
    let mut h = (t_grid[1] - t_grid[0]) / 10.0;
    let mut steps = 0usize;

    let mut k1 = vec![0.0; dim];
    let mut k2 = vec![0.0; dim];
    let mut k3 = vec![0.0; dim];
    let mut k4 = vec![0.0; dim];
    let mut k5 = vec![0.0; dim];
    let mut k6 = vec![0.0; dim];
    let mut y_stage = vec![0.0; dim];
    let mut y_next = vec![0.0; dim];

    for (i, &t_target) in t_grid.iter().enumerate().skip(1) {
        while t < t_target {
            if steps >= options.max_steps {
                return Err(CatalysisError::Numerical {
                    t,
                    message: format!("Step budget of {} exhausted", options.max_steps),
                });
            }
            steps += 1;

            let h_try = h.min(t_target - t);

            // Six Cash-Karp stages.
            system.rhs(t, &y, &mut k1);
            for j in 0..dim {
                y_stage[j] = y[j] + h_try * B21 * k1[j];
            }
            system.rhs(t + A2 * h_try, &y_stage, &mut k2);
            for j in 0..dim {
                y_stage[j] = y[j] + h_try * (B31 * k1[j] + B32 * k2[j]);
            }
            system.rhs(t + A3 * h_try, &y_stage, &mut k3);
            for j in 0..dim {
                y_stage[j] = y[j] + h_try * (B41 * k1[j] + B42 * k2[j] + B43 * k3[j]);
            }
            system.rhs(t + A4 * h_try, &y_stage, &mut k4);
            for j in 0..dim {
                y_stage[j] =
                    y[j] + h_try * (B51 * k1[j] + B52 * k2[j] + B53 * k3[j] + B54 * k4[j]);
            }
            system.rhs(t + A5 * h_try, &y_stage, &mut k5);
            for j in 0..dim {
                y_stage[j] = y[j]
                    + h_try
                        * (B61 * k1[j] + B62 * k2[j] + B63 * k3[j] + B64 * k4[j] + B65 * k5[j]);
            }
            system.rhs(t + A6 * h_try, &y_stage, &mut k6);

            // 5th-order candidate and embedded error estimate.
            let mut err_ratio = 0.0f64;
            for j in 0..dim {
                y_next[j] =
                    y[j] + h_try * (C1 * k1[j] + C3 * k3[j] + C4 * k4[j] + C6 * k6[j]);
                let err = h_try
                    * (E1 * k1[j] + E3 * k3[j] + E4 * k4[j] + E5 * k5[j] + E6 * k6[j]);
                let scale = options.atol + options.rtol * y[j].abs().max(y_next[j].abs());
                err_ratio = err_ratio.max((err / scale).abs());
            }

            if !err_ratio.is_finite() {
                return Err(CatalysisError::Numerical {
                    t,
                    message: "Non-finite local error estimate".to_string(),
                });
            }

            if err_ratio <= 1.0 {
                t += h_try;
                y.copy_from_slice(&y_next);
                // Only let the controller regrow h from an unclipped step;
                // a step clipped to the output grid says nothing about accuracy.
                if h_try >= h {
                    let grow = if err_ratio > 0.0 {
                        (SAFETY * err_ratio.powf(GROW_EXP)).min(MAX_GROW)
                    } else {
                        MAX_GROW
                    };
                    h = h_try * grow.max(1.0);
                }
            } else {
                h = h_try * (SAFETY * err_ratio.powf(SHRINK_EXP)).max(MIN_SHRINK);
                if h < h_min {
                    return Err(CatalysisError::Numerical {
                        t,
                        message: format!("Step size underflow: h={h:.3e}"),
                    });
                }
            }
        }

        for (j, &v) in y.iter().enumerate() {
            out[[i, j]] = v;
        }
    }

    Ok(out)
}
