// ─────────────────────────────────────────────────────────────────────
// SCPN Catalysis Core — Stats
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Small statistics helpers for sweep aggregation and Monte Carlo summaries.

use catalysis_types::error::{CatalysisError, CatalysisResult};

/// Median with numpy semantics: mean of the two middle values for even n.
pub fn try_median(values: &[f64]) -> CatalysisResult<f64> {
    if values.is_empty() {
        return Err(CatalysisError::InvalidInput(
            "Median of an empty sample".to_string(),
        ));
    }
    let mut sorted = values.to_vec();
    sorted.sort_unstable_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let n = sorted.len();
    let mid = n / 2;
    if n % 2 == 1 {
        Ok(sorted[mid])
    } else {
        Ok(0.5 * (sorted[mid - 1] + sorted[mid]))
    }
}

/// Median of a non-empty sample.
pub fn median(values: &[f64]) -> f64 {
    try_median(values).expect("median of empty sample")
}

/// Sample mean and population standard deviation.
pub fn mean_std(values: &[f64]) -> (f64, f64) {
    let n = values.len().max(1) as f64;
    let mean = values.iter().sum::<f64>() / n;
    let var = values.iter().map(|v| (v - mean) * (v - mean)).sum::<f64>() / n;
    (mean, var.sqrt())
}
