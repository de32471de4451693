// ─────────────────────────────────────────────────────────────────────
// SCPN Catalysis Core — Bundle Boost
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Bundle-inspired topological boost proxy.
//!
//! Port of `bundle_alpha_boost` / `barrier_eq`.
//! A standalone algebraic modifier: never composed into the resonance or
//! kinetics pipeline, callable on its own.

use catalysis_types::constants::{COULOMB_EV_M, E_TH, LAMBDA_B, R_DD};
use catalysis_types::error::{CatalysisError, CatalysisResult};

/// Default fiber dimension. Python: fiber_dim=14.
pub const DEFAULT_FIBER_DIM: usize = 14;

/// Default base dimension. Python: base_dim=4.
pub const DEFAULT_BASE_DIM: usize = 4;

/// Multiplicative boost from a traceless diagonal-matrix construction.
///
/// Builds a diagonal F×F matrix with B entries `α` and F−B entries `1/α`,
/// removes the trace average, and returns `max(1, |det|^(1/F))`. A singular
/// projection (α = 1) lands on the max-with-1 floor.
pub fn bundle_alpha_boost(
    base_alpha: f64,
    fiber_dim: usize,
    base_dim: usize,
) -> CatalysisResult<f64> {
    if fiber_dim == 0 {
        return Err(CatalysisError::InvalidInput(
            "Fiber dimension must be non-zero".to_string(),
        ));
    }
    if base_dim > fiber_dim {
        return Err(CatalysisError::InvalidInput(format!(
            "Base dimension {base_dim} exceeds fiber dimension {fiber_dim}"
        )));
    }
    if base_alpha == 0.0 || !base_alpha.is_finite() {
        return Err(CatalysisError::InvalidInput(format!(
            "Base alpha must be finite and non-zero, got {base_alpha}"
        )));
    }

    let f = fiber_dim as f64;
    let mut diag = vec![base_alpha; base_dim];
    diag.resize(fiber_dim, 1.0 / base_alpha);

    // Traceless projection keeps the matrix diagonal, so the determinant
    // is the product of the shifted entries.
    let mean = diag.iter().sum::<f64>() / f;
    let det: f64 = diag.iter().map(|d| d - mean).product();

    Ok(det.abs().powf(1.0 / f).max(1.0))
}

/// Screened Coulomb barrier residual against the thermal threshold.
///
/// V_scr(α_eff) − E_th with α_eff = α · surface_factor · bundle_boost;
/// the root in α is the barrier-elimination point.
pub fn screened_barrier_residual(alpha: f64, surface_factor: f64, bundle_boost: f64) -> f64 {
    let eff_alpha = alpha * surface_factor * bundle_boost;
    let v_scr = (COULOMB_EV_M / R_DD) * (-R_DD * eff_alpha.sqrt() / LAMBDA_B).exp();
    v_scr - E_TH
}
