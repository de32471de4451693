// ─────────────────────────────────────────────────────────────────────
// SCPN Catalysis Core — End-to-End Pipeline Tests
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! End-to-end tests of the resonance → barrier → kinetics → Monte Carlo
//! pipeline on a reduced sweep grid.

use catalysis_core::hydrogenation::simulate_hydrogenation;
use catalysis_sweep::monte_carlo::{run_yield_monte_carlo_with_rng, McSummary};
use catalysis_sweep::sweep::run_boost_sweep;
use catalysis_types::config::{
    BarrierTable, GridSpec, KineticsConfig, MonteCarloConfig, RateMode, SweepConfig,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn reduced_sweep() -> SweepConfig {
    SweepConfig {
        surface_factors: GridSpec::new(5.0, 100.0, 4),
        detunes: GridSpec::new(0.95, 1.05, 5),
    }
}

#[test]
fn test_pipeline_sweep_to_monte_carlo() {
    let surface = run_boost_sweep(&reduced_sweep()).unwrap();
    assert_eq!(surface.boosts.shape(), &[4, 5]);

    let median_boost = surface.median();
    assert!(median_boost.is_finite());
    assert!(median_boost > 0.0);

    let kinetics = KineticsConfig::default();
    let barriers = BarrierTable::default();

    let enhanced = simulate_hydrogenation(median_boost, &kinetics, &barriers).unwrap();
    let standard = simulate_hydrogenation(
        1.0,
        &KineticsConfig {
            mode: RateMode::Standard,
            ..Default::default()
        },
        &barriers,
    )
    .unwrap();
    assert!(
        enhanced.final_yield >= standard.final_yield,
        "Enhancement must never slow the chain: {} vs {}",
        enhanced.final_yield,
        standard.final_yield
    );

    let mut rng = StdRng::seed_from_u64(2026);
    let observations = run_yield_monte_carlo_with_rng(
        median_boost,
        &MonteCarloConfig {
            n_trials: 25,
            ..Default::default()
        },
        &kinetics,
        &barriers,
        &mut rng,
    )
    .unwrap();
    assert_eq!(observations.len(), 25);

    let summary = McSummary::from_observations(&observations).unwrap();
    assert!(summary.min <= summary.mean && summary.mean <= summary.max);
    assert!(summary.std >= 0.0);
}

#[test]
fn test_pipeline_reproducible_with_fixed_seed() {
    let surface = run_boost_sweep(&reduced_sweep()).unwrap();
    let median_boost = surface.median();

    let run = || {
        let mut rng = StdRng::seed_from_u64(7);
        run_yield_monte_carlo_with_rng(
            median_boost,
            &MonteCarloConfig {
                n_trials: 10,
                ..Default::default()
            },
            &KineticsConfig::default(),
            &BarrierTable::default(),
            &mut rng,
        )
        .unwrap()
    };

    assert_eq!(run(), run(), "Fixed seed must fix the whole pipeline output");
}
