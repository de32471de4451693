// ─────────────────────────────────────────────────────────────────────
// SCPN Catalysis Core — Demo
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Demo entry point: boost surface sweep, standard vs enhanced
//! hydrogenation at 298 K, and Monte Carlo yield uncertainty.
//!
//! Usage: `catalysis-demo [config.json]` — without an argument the
//! built-in defaults reproduce the reference scenario.

use catalysis_core::hydrogenation::simulate_hydrogenation;
use catalysis_sweep::monte_carlo::{run_yield_monte_carlo, McSummary};
use catalysis_sweep::sweep::run_boost_sweep;
use catalysis_types::config::{KineticsConfig, RateMode, SimulationConfig};
use catalysis_types::error::CatalysisResult;

fn main() -> CatalysisResult<()> {
    let config = match std::env::args().nth(1) {
        Some(path) => SimulationConfig::from_file(&path)?,
        None => SimulationConfig::default(),
    };

    println!(
        "Building resonance boost surface ({} surface factors x {} detunes)...",
        config.sweep.surface_factors.n, config.sweep.detunes.n
    );
    let surface = run_boost_sweep(&config.sweep)?;
    let median_boost = surface.median();
    println!("Median rate boost: {median_boost:.3e}");

    println!("\nRunning standard simulation (25 C, no enhancement):");
    let standard_kinetics = KineticsConfig {
        mode: RateMode::Standard,
        ..config.kinetics.clone()
    };
    let standard = simulate_hydrogenation(1.0, &standard_kinetics, &config.barriers)?;
    println!(
        "  final amine yield after {:.0} min: {:.2}%",
        standard_kinetics.t_max, standard.final_yield
    );

    println!("\nRunning enhanced simulation (25 C, median resonance boost):");
    let enhanced_kinetics = KineticsConfig {
        mode: RateMode::Enhanced,
        ..config.kinetics.clone()
    };
    let enhanced = simulate_hydrogenation(median_boost, &enhanced_kinetics, &config.barriers)?;
    println!(
        "  final amine yield after {:.0} min: {:.2}%",
        enhanced_kinetics.t_max, enhanced.final_yield
    );

    println!(
        "\nMonte Carlo uncertainty ({} trials, ±{:.0}% boost, ±{:.0} pt yield noise):",
        config.monte_carlo.n_trials,
        config.monte_carlo.boost_noise_frac * 100.0,
        config.monte_carlo.yield_noise_sigma
    );
    let observations = run_yield_monte_carlo(
        median_boost,
        &config.monte_carlo,
        &enhanced_kinetics,
        &config.barriers,
    )?;
    let summary = McSummary::from_observations(&observations)?;
    println!(
        "  yield {:.1}% ± {:.1}% (min {:.1}, max {:.1})",
        summary.mean, summary.std, summary.min, summary.max
    );

    Ok(())
}
