// ─────────────────────────────────────────────────────────────────────
// SCPN Catalysis Core — Barrier
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Arrhenius rates and boost-dependent barrier reduction.
//!
//! Port of `arrhenius_rate` / `enhanced_barrier`.

use catalysis_types::config::{BarrierTable, RateMode};
use catalysis_types::constants::{ARRHENIUS_PREFACTOR, K_BOLTZMANN_EV};
use catalysis_types::error::{CatalysisError, CatalysisResult};

/// Maximum fraction of a barrier the boost may remove. Python: 0.3.
const MAX_REDUCTION_FRAC: f64 = 0.3;

/// Logarithmic reduction scale (eV). Python: 0.05.
const LOG_REDUCTION_SCALE_EV: f64 = 0.05;

/// Absolute barrier floor (eV). Python: 0.05.
const BARRIER_FLOOR_EV: f64 = 0.05;

/// Arrhenius rate constant A·exp(−Ea/kB·T).
pub fn arrhenius_rate(ea_ev: f64, temperature: f64, prefactor: f64) -> f64 {
    prefactor * (-ea_ev / (K_BOLTZMANN_EV * temperature)).exp()
}

/// Boost-reduced activation energy.
///
/// The log-scaled reduction is capped at 30% of the raw barrier and the
/// result never drops below 0.05 eV. Both clamps are domain policy, not
/// defects of the boost value.
pub fn enhanced_barrier(ea_ev: f64, boost: f64) -> CatalysisResult<f64> {
    if boost <= -1.0 {
        return Err(CatalysisError::InvalidInput(format!(
            "Boost must exceed -1 for log reduction, got {boost}"
        )));
    }
    let reduction = (MAX_REDUCTION_FRAC * ea_ev).min(LOG_REDUCTION_SCALE_EV * (boost + 1.0).ln());
    Ok((ea_ev - reduction).max(BARRIER_FLOOR_EV))
}

/// Rate constants for the hydrogenation chain at a given boost.
#[derive(Debug, Clone, Copy)]
pub struct RateConstants {
    /// nitro → nitroso (min⁻¹).
    pub k1: f64,
    /// nitroso → hydroxylamine (min⁻¹).
    pub k2: f64,
    /// hydroxylamine → amine (min⁻¹).
    pub k3: f64,
    /// H2 dissociation rate (min⁻¹); tabulated reference, not in the chain.
    pub h2_diss: f64,
}

/// Derive the chain rate constants from the barrier table.
///
/// `RateMode::Enhanced` applies the boost reduction per step;
/// `RateMode::Standard` uses the raw tabulated barriers.
pub fn rate_constants(
    barriers: &BarrierTable,
    temperature: f64,
    boost: f64,
    mode: RateMode,
) -> CatalysisResult<RateConstants> {
    if temperature <= 0.0 {
        return Err(CatalysisError::InvalidInput(format!(
            "Temperature must be positive, got {temperature} K"
        )));
    }

    let effective = |ea: f64| -> CatalysisResult<f64> {
        match mode {
            RateMode::Enhanced => enhanced_barrier(ea, boost),
            RateMode::Standard => Ok(ea),
        }
    };

    Ok(RateConstants {
        k1: arrhenius_rate(
            effective(barriers.nitro_to_nitroso)?,
            temperature,
            ARRHENIUS_PREFACTOR,
        ),
        k2: arrhenius_rate(
            effective(barriers.nitroso_to_hydroxyl)?,
            temperature,
            ARRHENIUS_PREFACTOR,
        ),
        k3: arrhenius_rate(
            effective(barriers.hydroxyl_to_amine)?,
            temperature,
            ARRHENIUS_PREFACTOR,
        ),
        h2_diss: arrhenius_rate(effective(barriers.h2_diss)?, temperature, ARRHENIUS_PREFACTOR),
    })
}
