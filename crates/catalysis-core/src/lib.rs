// ─────────────────────────────────────────────────────────────────────
// SCPN Catalysis Core — Catalysis Core
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Physics and kinetics models.
//!
//! Port of `catalysis_resonance_sim.py`: coupled-oscillator resonance,
//! bundle (topological) boost, Arrhenius barrier model, hydrogenation chain.

pub mod barrier;
pub mod bundle;
pub mod hydrogenation;
pub mod resonance;
