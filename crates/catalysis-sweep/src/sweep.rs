// ─────────────────────────────────────────────────────────────────────
// SCPN Catalysis Core — Sweep
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Resonance boost surface over a (surface_factor × detune) grid.
//!
//! Every cell is an independent simulation; no memoization.

use catalysis_core::resonance::run_resonance;
use catalysis_math::stats;
use catalysis_types::config::{ResonanceConfig, SweepConfig};
use catalysis_types::error::{CatalysisError, CatalysisResult};
use ndarray::{Array1, Array2};

/// 2D rate-boost surface indexed `[surface_factor_idx, detune_idx]`.
#[derive(Debug, Clone)]
pub struct BoostSurface {
    pub surface_factors: Array1<f64>,
    pub detunes: Array1<f64>,
    pub boosts: Array2<f64>,
}

impl BoostSurface {
    /// Median boost over the whole surface, the Monte Carlo representative.
    pub fn median(&self) -> f64 {
        stats::median(self.boosts.as_slice().unwrap_or(&[]))
    }
}

/// Sweep the resonance model over the configured grids.
pub fn run_boost_sweep(config: &SweepConfig) -> CatalysisResult<BoostSurface> {
    let surface_factors = config.surface_factors.values();
    let detunes = config.detunes.values();
    if surface_factors.is_empty() || detunes.is_empty() {
        return Err(CatalysisError::InvalidInput(
            "Sweep grids must be non-empty".to_string(),
        ));
    }

    let mut boosts = Array2::zeros((surface_factors.len(), detunes.len()));
    for (i, &sf) in surface_factors.iter().enumerate() {
        for (j, &detune) in detunes.iter().enumerate() {
            let result = run_resonance(&ResonanceConfig {
                surface_factor: sf,
                detune,
                ..Default::default()
            })?;
            boosts[[i, j]] = result.rate_boost;
        }
    }

    Ok(BoostSurface {
        surface_factors: Array1::from(surface_factors),
        detunes: Array1::from(detunes),
        boosts,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalysis_types::config::GridSpec;

    fn small_sweep() -> SweepConfig {
        SweepConfig {
            surface_factors: GridSpec::new(5.0, 50.0, 3),
            detunes: GridSpec::new(0.95, 1.05, 2),
        }
    }

    #[test]
    fn test_surface_shape_and_indexing() {
        let surface = run_boost_sweep(&small_sweep()).unwrap();
        assert_eq!(surface.boosts.shape(), &[3, 2]);
        assert_eq!(surface.surface_factors.len(), 3);
        assert_eq!(surface.detunes.len(), 2);
        assert!((surface.surface_factors[0] - 5.0).abs() < 1e-12);
        assert!((surface.detunes[0] - 0.95).abs() < 1e-12);
    }

    #[test]
    fn test_surface_cells_positive_finite() {
        let surface = run_boost_sweep(&small_sweep()).unwrap();
        for &b in surface.boosts.iter() {
            assert!(b.is_finite());
            assert!(b > 0.0);
        }
    }

    #[test]
    fn test_sweep_cell_reproducible() {
        // Cell (sf=5, detune=0.95) must be identical across repeated sweeps.
        let a = run_boost_sweep(&small_sweep()).unwrap();
        let b = run_boost_sweep(&small_sweep()).unwrap();
        assert_eq!(a.boosts[[0, 0]].to_bits(), b.boosts[[0, 0]].to_bits());
    }

    #[test]
    fn test_cell_matches_direct_resonance_run() {
        let surface = run_boost_sweep(&small_sweep()).unwrap();
        let direct = run_resonance(&ResonanceConfig {
            surface_factor: 5.0,
            detune: 0.95,
            ..Default::default()
        })
        .unwrap();
        assert!((surface.boosts[[0, 0]] - direct.rate_boost).abs() < 1e-12);
    }

    #[test]
    fn test_median_within_surface_range() {
        let surface = run_boost_sweep(&small_sweep()).unwrap();
        let median = surface.median();
        let min = surface.boosts.iter().cloned().fold(f64::INFINITY, f64::min);
        let max = surface
            .boosts
            .iter()
            .cloned()
            .fold(f64::NEG_INFINITY, f64::max);
        assert!(median >= min && median <= max);
    }

    #[test]
    fn test_empty_grid_rejected() {
        let config = SweepConfig {
            surface_factors: GridSpec::new(0.0, 1.0, 0),
            detunes: GridSpec::new(0.95, 1.05, 2),
        };
        assert!(run_boost_sweep(&config).is_err());
    }
}
