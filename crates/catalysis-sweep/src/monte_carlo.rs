// ─────────────────────────────────────────────────────────────────────
// SCPN Catalysis Core — Monte Carlo
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Monte Carlo propagation of boost and yield-measurement uncertainty.
//!
//! Each trial draws a multiplicative boost perturbation and an additive
//! yield noise term independently, then records one final-yield observation.

use catalysis_core::hydrogenation::simulate_hydrogenation;
use catalysis_math::stats;
use catalysis_types::config::{BarrierTable, KineticsConfig, MonteCarloConfig};
use catalysis_types::error::{CatalysisError, CatalysisResult};
use rand::Rng;
use rand_distr::{Distribution, Normal};

/// Aggregate view of a Monte Carlo observation sequence.
#[derive(Debug, Clone, Copy)]
pub struct McSummary {
    pub mean: f64,
    pub std: f64,
    pub min: f64,
    pub max: f64,
}

impl McSummary {
    pub fn from_observations(observations: &[f64]) -> CatalysisResult<Self> {
        if observations.is_empty() {
            return Err(CatalysisError::InvalidInput(
                "Cannot summarize an empty observation sequence".to_string(),
            ));
        }
        let (mean, std) = stats::mean_std(observations);
        Ok(McSummary {
            mean,
            std,
            min: observations.iter().cloned().fold(f64::INFINITY, f64::min),
            max: observations
                .iter()
                .cloned()
                .fold(f64::NEG_INFINITY, f64::max),
        })
    }
}

/// Run the yield Monte Carlo with a thread-local generator.
pub fn run_yield_monte_carlo(
    median_boost: f64,
    mc: &MonteCarloConfig,
    kinetics: &KineticsConfig,
    barriers: &BarrierTable,
) -> CatalysisResult<Vec<f64>> {
    let mut rng = rand::thread_rng();
    run_yield_monte_carlo_with_rng(median_boost, mc, kinetics, barriers, &mut rng)
}

/// Seedable variant for reproducible trials.
pub fn run_yield_monte_carlo_with_rng<R: Rng + ?Sized>(
    median_boost: f64,
    mc: &MonteCarloConfig,
    kinetics: &KineticsConfig,
    barriers: &BarrierTable,
    rng: &mut R,
) -> CatalysisResult<Vec<f64>> {
    if mc.n_trials == 0 {
        return Err(CatalysisError::InvalidInput(
            "Monte Carlo needs at least one trial".to_string(),
        ));
    }

    let boost_noise = Normal::new(1.0, mc.boost_noise_frac).map_err(|e| {
        CatalysisError::InvalidInput(format!("Invalid boost noise width: {e}"))
    })?;
    let yield_noise = Normal::new(0.0, mc.yield_noise_sigma).map_err(|e| {
        CatalysisError::InvalidInput(format!("Invalid yield noise width: {e}"))
    })?;

    let mut observations = Vec::with_capacity(mc.n_trials);
    for _ in 0..mc.n_trials {
        let noisy_boost = median_boost * boost_noise.sample(rng);
        let run = simulate_hydrogenation(noisy_boost, kinetics, barriers)?;
        observations.push(run.final_yield + yield_noise.sample(rng));
    }

    Ok(observations)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn mc_config(n_trials: usize) -> MonteCarloConfig {
        MonteCarloConfig {
            n_trials,
            ..Default::default()
        }
    }

    #[test]
    fn test_observation_count() {
        let mut rng = StdRng::seed_from_u64(7);
        let obs = run_yield_monte_carlo_with_rng(
            1e4,
            &mc_config(50),
            &KineticsConfig::default(),
            &BarrierTable::default(),
            &mut rng,
        )
        .unwrap();
        assert_eq!(obs.len(), 50);
        assert!(obs.iter().all(|y| y.is_finite()));
    }

    #[test]
    fn test_seeded_runs_reproducible() {
        let run = |seed: u64| {
            let mut rng = StdRng::seed_from_u64(seed);
            run_yield_monte_carlo_with_rng(
                1e4,
                &mc_config(20),
                &KineticsConfig::default(),
                &BarrierTable::default(),
                &mut rng,
            )
            .unwrap()
        };
        let a = run(42);
        let b = run(42);
        assert_eq!(a, b, "Same seed must reproduce the observation sequence");

        let c = run(43);
        assert_ne!(a, c, "Different seeds should decorrelate the trials");
    }

    #[test]
    fn test_high_boost_yields_cluster_near_full_conversion() {
        let mut rng = StdRng::seed_from_u64(2026);
        let obs = run_yield_monte_carlo_with_rng(
            1e6,
            &mc_config(30),
            &KineticsConfig::default(),
            &BarrierTable::default(),
            &mut rng,
        )
        .unwrap();
        let summary = McSummary::from_observations(&obs).unwrap();
        // Capped barrier reduction saturates the chain well before t_max;
        // the spread left is the ±5% measurement noise.
        assert!(summary.mean > 80.0, "Mean yield too low: {}", summary.mean);
        assert!(summary.std < 20.0, "Spread too wide: {}", summary.std);
    }

    #[test]
    fn test_zero_trials_rejected() {
        let mut rng = StdRng::seed_from_u64(1);
        let err = run_yield_monte_carlo_with_rng(
            1e4,
            &mc_config(0),
            &KineticsConfig::default(),
            &BarrierTable::default(),
            &mut rng,
        )
        .unwrap_err();
        match err {
            CatalysisError::InvalidInput(_) => {}
            _ => panic!("Expected InvalidInput for zero trials"),
        }
    }

    #[test]
    fn test_summary_bounds() {
        let obs = vec![90.0, 95.0, 100.0, 85.0];
        let s = McSummary::from_observations(&obs).unwrap();
        assert!((s.min - 85.0).abs() < 1e-12);
        assert!((s.max - 100.0).abs() < 1e-12);
        assert!((s.mean - 92.5).abs() < 1e-12);
        assert!(s.std > 0.0);
    }

    #[test]
    fn test_summary_empty_rejected() {
        assert!(McSummary::from_observations(&[]).is_err());
    }
}
