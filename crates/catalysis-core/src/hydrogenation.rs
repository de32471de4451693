// ─────────────────────────────────────────────────────────────────────
// SCPN Catalysis Core — Hydrogenation
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Sequential nitroarene hydrogenation kinetics.
//!
//! Port of `hydrogenation_ode` / `simulate_hydrogenation`.
//! Four-species first-order chain nitro → nitroso → hydroxylamine → amine,
//! with rate constants from the boost-aware barrier model.

use crate::barrier::{rate_constants, RateConstants};
use catalysis_math::ode::{solve_ivp, OdeSystem, SolverOptions};
use catalysis_types::config::{BarrierTable, KineticsConfig};
use catalysis_types::error::{CatalysisError, CatalysisResult};
use ndarray::{Array1, Array2};

/// First-order sequential reaction chain.
struct SequentialChain {
    k1: f64,
    k2: f64,
    k3: f64,
}

impl OdeSystem for SequentialChain {
    fn dim(&self) -> usize {
        4
    }

    fn rhs(&self, _t: f64, y: &[f64], dydt: &mut [f64]) {
        let (nitro, nitroso, hydroxyl, _amine) = (y[0], y[1], y[2], y[3]);
        dydt[0] = -self.k1 * nitro;
        dydt[1] = self.k1 * nitro - self.k2 * nitroso;
        dydt[2] = self.k2 * nitroso - self.k3 * hydroxyl;
        dydt[3] = self.k3 * hydroxyl;
    }
}

/// Species trajectories and derived yield curves.
#[derive(Debug, Clone)]
pub struct HydrogenationResult {
    /// Time grid (min).
    pub time: Array1<f64>,
    /// Concentrations `[n_samples × 4]`: (nitro, nitroso, hydroxylamine, amine).
    pub species: Array2<f64>,
    /// Amine yield curve (%).
    pub yield_percent: Array1<f64>,
    /// Nitro conversion curve (%).
    pub conversion_percent: Array1<f64>,
    /// Yield/conversion ratio; 0 where conversion is exactly 0.
    pub selectivity: Array1<f64>,
    /// Final amine yield (%).
    pub final_yield: f64,
    /// Rate constants used for this run.
    pub rates: RateConstants,
}

/// Simulate the hydrogenation chain for a given rate boost.
pub fn simulate_hydrogenation(
    boost: f64,
    config: &KineticsConfig,
    barriers: &BarrierTable,
) -> CatalysisResult<HydrogenationResult> {
    if config.t_max <= 0.0 {
        return Err(CatalysisError::InvalidInput(format!(
            "Integration horizon must be positive, got {}",
            config.t_max
        )));
    }
    if config.n_samples < 2 {
        return Err(CatalysisError::InvalidInput(format!(
            "Kinetics needs at least 2 time samples, got {}",
            config.n_samples
        )));
    }

    let rates = rate_constants(barriers, config.temperature, boost, config.mode)?;
    let chain = SequentialChain {
        k1: rates.k1,
        k2: rates.k2,
        k3: rates.k3,
    };

    let time = Array1::linspace(0.0, config.t_max, config.n_samples).to_vec();
    let species = solve_ivp(
        &chain,
        &[1.0, 0.0, 0.0, 0.0],
        &time,
        &SolverOptions::default(),
    )?;

    let yield_percent: Array1<f64> = species.column(3).mapv(|amine| amine * 100.0);
    let conversion_percent: Array1<f64> = species.column(0).mapv(|nitro| (1.0 - nitro) * 100.0);
    let selectivity = Array1::from_shape_fn(yield_percent.len(), |i| {
        if conversion_percent[i] > 0.0 {
            yield_percent[i] / conversion_percent[i]
        } else {
            0.0
        }
    });

    let final_yield = yield_percent[yield_percent.len() - 1];

    Ok(HydrogenationResult {
        time: Array1::from(time),
        species,
        yield_percent,
        conversion_percent,
        selectivity,
        final_yield,
        rates,
    })
}
