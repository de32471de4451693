// ─────────────────────────────────────────────────────────────────────
// SCPN Catalysis Core — Config
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use serde::{Deserialize, Serialize};

/// Resonance simulation parameters for the coupled-oscillator model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResonanceConfig {
    /// Surface enhancement factor scaling the screening length.
    #[serde(default = "default_surface_factor")]
    pub surface_factor: f64,
    /// Frequency detuning of the second oscillator.
    #[serde(default = "default_detune")]
    pub detune: f64,
    /// Damping coefficient g. Python: g=0.01.
    #[serde(default = "default_damping")]
    pub damping: f64,
    /// Inter-oscillator coupling k. Python: k=0.1.
    #[serde(default = "default_coupling")]
    pub coupling: f64,
    /// Drive amplitude A. Python: A=0.1.
    #[serde(default = "default_drive_amplitude")]
    pub drive_amplitude: f64,
    /// Drive frequency om_d. When absent, the midpoint (1 + detune)/2 is used.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub drive_frequency: Option<f64>,
}

fn default_surface_factor() -> f64 {
    1.0
}
fn default_detune() -> f64 {
    1.05
}
fn default_damping() -> f64 {
    0.01
}
fn default_coupling() -> f64 {
    0.1
}
fn default_drive_amplitude() -> f64 {
    0.1
}

impl Default for ResonanceConfig {
    fn default() -> Self {
        ResonanceConfig {
            surface_factor: default_surface_factor(),
            detune: default_detune(),
            damping: default_damping(),
            coupling: default_coupling(),
            drive_amplitude: default_drive_amplitude(),
            drive_frequency: None,
        }
    }
}

impl ResonanceConfig {
    /// Effective drive frequency: explicit value or the (1 + detune)/2 default.
    pub fn om_d(&self) -> f64 {
        self.drive_frequency
            .unwrap_or((1.0 + self.detune) / 2.0)
    }
}

/// Whether rate constants use raw or boost-reduced barriers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RateMode {
    Standard,
    Enhanced,
}

/// Hydrogenation kinetics run parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KineticsConfig {
    /// Reaction temperature (K). Python: T=298.
    #[serde(default = "default_temperature")]
    pub temperature: f64,
    /// Integration horizon (min). Python: t_max=120.
    #[serde(default = "default_t_max")]
    pub t_max: f64,
    /// Number of uniform time samples. Python: 300.
    #[serde(default = "default_n_samples")]
    pub n_samples: usize,
    #[serde(default = "default_rate_mode")]
    pub mode: RateMode,
}

fn default_temperature() -> f64 {
    298.0
}
fn default_t_max() -> f64 {
    120.0
}
fn default_n_samples() -> usize {
    300
}
fn default_rate_mode() -> RateMode {
    RateMode::Enhanced
}

impl Default for KineticsConfig {
    fn default() -> Self {
        KineticsConfig {
            temperature: default_temperature(),
            t_max: default_t_max(),
            n_samples: default_n_samples(),
            mode: default_rate_mode(),
        }
    }
}

/// Literature activation energies (eV) for the hydrogenation chain.
///
/// `h2_diss` is tabulated reference data only: it never feeds the
/// sequential kinetics ODE.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BarrierTable {
    #[serde(default = "default_h2_diss")]
    pub h2_diss: f64,
    #[serde(default = "default_nitro_to_nitroso")]
    pub nitro_to_nitroso: f64,
    #[serde(default = "default_nitroso_to_hydroxyl")]
    pub nitroso_to_hydroxyl: f64,
    #[serde(default = "default_hydroxyl_to_amine")]
    pub hydroxyl_to_amine: f64,
}

fn default_h2_diss() -> f64 {
    0.30
}
fn default_nitro_to_nitroso() -> f64 {
    0.45
}
fn default_nitroso_to_hydroxyl() -> f64 {
    0.35
}
fn default_hydroxyl_to_amine() -> f64 {
    0.40
}

impl Default for BarrierTable {
    fn default() -> Self {
        BarrierTable {
            h2_diss: default_h2_diss(),
            nitro_to_nitroso: default_nitro_to_nitroso(),
            nitroso_to_hydroxyl: default_nitroso_to_hydroxyl(),
            hydroxyl_to_amine: default_hydroxyl_to_amine(),
        }
    }
}

/// Uniform 1D parameter grid, linspace-style (endpoints inclusive).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GridSpec {
    pub start: f64,
    pub stop: f64,
    pub n: usize,
}

impl GridSpec {
    pub fn new(start: f64, stop: f64, n: usize) -> Self {
        GridSpec { start, stop, n }
    }

    /// Materialize the grid points.
    pub fn values(&self) -> Vec<f64> {
        if self.n == 0 {
            return Vec::new();
        }
        if self.n == 1 {
            return vec![self.start];
        }
        let step = (self.stop - self.start) / (self.n - 1) as f64;
        (0..self.n).map(|i| self.start + step * i as f64).collect()
    }
}

/// Boost-surface sweep grids.
/// Python: surface_factors = linspace(5, 100, 15), detunes = linspace(0.95, 1.05, 30).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SweepConfig {
    #[serde(default = "default_surface_factor_grid")]
    pub surface_factors: GridSpec,
    #[serde(default = "default_detune_grid")]
    pub detunes: GridSpec,
}

fn default_surface_factor_grid() -> GridSpec {
    GridSpec::new(5.0, 100.0, 15)
}
fn default_detune_grid() -> GridSpec {
    GridSpec::new(0.95, 1.05, 30)
}

impl Default for SweepConfig {
    fn default() -> Self {
        SweepConfig {
            surface_factors: default_surface_factor_grid(),
            detunes: default_detune_grid(),
        }
    }
}

/// Monte Carlo uncertainty propagation parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonteCarloConfig {
    /// Number of independent trials. Python: 50.
    #[serde(default = "default_n_trials")]
    pub n_trials: usize,
    /// Multiplicative boost noise σ (fraction of 1.0). Python: 0.1.
    #[serde(default = "default_boost_noise_frac")]
    pub boost_noise_frac: f64,
    /// Additive yield measurement noise σ (percentage points). Python: 5.
    #[serde(default = "default_yield_noise_sigma")]
    pub yield_noise_sigma: f64,
}

fn default_n_trials() -> usize {
    50
}
fn default_boost_noise_frac() -> f64 {
    0.1
}
fn default_yield_noise_sigma() -> f64 {
    5.0
}

impl Default for MonteCarloConfig {
    fn default() -> Self {
        MonteCarloConfig {
            n_trials: default_n_trials(),
            boost_noise_frac: default_boost_noise_frac(),
            yield_noise_sigma: default_yield_noise_sigma(),
        }
    }
}

/// Top-level simulation configuration bundle.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SimulationConfig {
    #[serde(default)]
    pub resonance: ResonanceConfig,
    #[serde(default)]
    pub kinetics: KineticsConfig,
    #[serde(default)]
    pub barriers: BarrierTable,
    #[serde(default)]
    pub sweep: SweepConfig,
    #[serde(default)]
    pub monte_carlo: MonteCarloConfig,
}

impl SimulationConfig {
    /// Load from a JSON file; absent fields fall back to demo defaults.
    pub fn from_file(path: &str) -> crate::error::CatalysisResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&contents)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resonance_defaults() {
        let cfg = ResonanceConfig::default();
        assert!((cfg.surface_factor - 1.0).abs() < 1e-12);
        assert!((cfg.detune - 1.05).abs() < 1e-12);
        assert!((cfg.damping - 0.01).abs() < 1e-12);
        assert!((cfg.coupling - 0.1).abs() < 1e-12);
        assert!((cfg.drive_amplitude - 0.1).abs() < 1e-12);
        assert!(cfg.drive_frequency.is_none());
    }

    #[test]
    fn test_om_d_defaults_to_detune_midpoint() {
        let cfg = ResonanceConfig::default();
        assert!((cfg.om_d() - (1.0 + 1.05) / 2.0).abs() < 1e-12);

        let explicit = ResonanceConfig {
            drive_frequency: Some(0.7),
            ..Default::default()
        };
        assert!((explicit.om_d() - 0.7).abs() < 1e-12);
    }

    #[test]
    fn test_barrier_table_defaults() {
        let b = BarrierTable::default();
        assert!((b.h2_diss - 0.30).abs() < 1e-12);
        assert!((b.nitro_to_nitroso - 0.45).abs() < 1e-12);
        assert!((b.nitroso_to_hydroxyl - 0.35).abs() < 1e-12);
        assert!((b.hydroxyl_to_amine - 0.40).abs() < 1e-12);
    }

    #[test]
    fn test_grid_spec_values() {
        let g = GridSpec::new(0.95, 1.05, 30);
        let v = g.values();
        assert_eq!(v.len(), 30);
        assert!((v[0] - 0.95).abs() < 1e-12);
        assert!((v[29] - 1.05).abs() < 1e-12);
        for w in v.windows(2) {
            assert!(w[1] > w[0], "Grid must be strictly increasing");
        }

        assert_eq!(GridSpec::new(5.0, 100.0, 1).values(), vec![5.0]);
        assert!(GridSpec::new(0.0, 1.0, 0).values().is_empty());
    }

    #[test]
    fn test_empty_json_yields_defaults() {
        let cfg: SimulationConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg.monte_carlo.n_trials, 50);
        assert_eq!(cfg.kinetics.n_samples, 300);
        assert_eq!(cfg.kinetics.mode, RateMode::Enhanced);
        assert_eq!(cfg.sweep.surface_factors.n, 15);
        assert_eq!(cfg.sweep.detunes.n, 30);
    }

    #[test]
    fn test_roundtrip_serialization() {
        let cfg = SimulationConfig::default();
        let json = serde_json::to_string_pretty(&cfg).unwrap();
        let cfg2: SimulationConfig = serde_json::from_str(&json).unwrap();
        assert!((cfg.resonance.detune - cfg2.resonance.detune).abs() < 1e-15);
        assert!((cfg.barriers.nitro_to_nitroso - cfg2.barriers.nitro_to_nitroso).abs() < 1e-15);
        assert_eq!(cfg.monte_carlo.n_trials, cfg2.monte_carlo.n_trials);
        assert_eq!(cfg.kinetics.mode, cfg2.kinetics.mode);
    }

    #[test]
    fn test_rate_mode_serde_lowercase() {
        let json = serde_json::to_string(&RateMode::Enhanced).unwrap();
        assert_eq!(json, "\"enhanced\"");
        let mode: RateMode = serde_json::from_str("\"standard\"").unwrap();
        assert_eq!(mode, RateMode::Standard);
    }
}
