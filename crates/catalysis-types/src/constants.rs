// ─────────────────────────────────────────────────────────────────────
// SCPN Catalysis Core — Constants
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
/// Fixed D-D separation in the surface-active volume (m). Python: r_dd = 2.75e-10.
pub const R_DD: f64 = 2.75e-10;

/// Bulk Thomas-Fermi screening length (m). Python: lambda_b = 0.577e-10.
pub const LAMBDA_B: f64 = 0.577e-10;

/// Thermal energy at 300 K (eV = 38.8 meV). Python: E_th = 0.0388.
pub const E_TH: f64 = 0.0388;

/// Scaling length for oscillation amplitude (m). Python: x_0 = 0.1e-10.
pub const X_0: f64 = 0.1e-10;

/// Approximate lattice vibration frequency (rad/s). Python: omega_0 = 1e14.
pub const OMEGA_0: f64 = 1e14;

/// Minimum physical approach distance (m), ~0.1 Å.
pub const MIN_SEPARATION: f64 = 0.1e-10;

/// Boltzmann constant (eV/K).
pub const K_BOLTZMANN_EV: f64 = 8.617e-5;

/// Coulomb energy scale e²/(4πε₀) (eV·m). Python: 1.44e-9.
pub const COULOMB_EV_M: f64 = 1.44e-9;

/// Arrhenius pre-exponential scale (min⁻¹). Python: A = 1e6.
pub const ARRHENIUS_PREFACTOR: f64 = 1e6;
