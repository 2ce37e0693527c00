// ─────────────────────────────────────────────────────────────────────
// SCPN Plasma Source — Profile Builder
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Discretized emission profile: normalized cumulative weight and
//! per-bin thermal broadening scale.
//!
//! Algorithm (one deterministic pass over N bins):
//! 1. r_i = i · Δr, Δr = a / N
//! 2. w_i = n(r_i)² · <σv>(T(r_i))
//! 3. thermal_i = sqrt(T(r_i) / 1000)
//! 4. cdf_i = Σ_{j≤i} w_j / Σ_j w_j

use crate::profiles::{dt_reactivity, RadialProfile};
use ndarray::Array1;
use plasma_types::config::PlasmaConfig;
use plasma_types::constants::KEV_PER_MEV;
use plasma_types::error::{SourceError, SourceResult};

/// Frozen radial emission profile. Never mutated after [`DerivedProfile::build`].
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedProfile {
    bin_width: f64,
    cumulative_weight: Array1<f64>,
    thermal_scale: Array1<f64>,
}

impl DerivedProfile {
    pub fn build(config: &PlasmaConfig) -> SourceResult<Self> {
        let n_bins = config.number_of_bins();
        if n_bins == 0 {
            return Err(SourceError::ConfigError(
                "number_of_bins must be >= 1".to_string(),
            ));
        }
        let bin_width = config.minor_radius() / n_bins as f64;

        let density = RadialProfile::ion_density(config);
        let temperature = RadialProfile::ion_temperature(config);

        let mut weight: Array1<f64> = Array1::zeros(n_bins);
        let mut thermal_scale: Array1<f64> = Array1::zeros(n_bins);
        for i in 0..n_bins {
            let r = bin_width * i as f64;
            let n_i = density.value(r);
            let t_i = temperature.value(r);
            if !t_i.is_finite() || t_i <= 0.0 {
                return Err(SourceError::ConfigError(format!(
                    "ion temperature must be finite and > 0 inside the plasma, \
                     got {t_i} keV at bin {i} (r = {r} m)"
                )));
            }
            weight[i] = n_i.powi(2) * dt_reactivity(t_i)?;
            thermal_scale[i] = (t_i / KEV_PER_MEV).sqrt();
        }

        let total = weight.iter().fold(0.0, |acc, &w| acc + w);
        if !total.is_finite() || total <= 0.0 {
            return Err(SourceError::ConfigError(format!(
                "total emission weight must be finite and > 0, got {total}"
            )));
        }

        // Same summation order as `total`, so the last entry is exactly 1.
        let mut running = 0.0;
        let cumulative_weight = weight.mapv(|w| {
            running += w;
            running / total
        });

        tracing::debug!(
            source = config.name(),
            bins = n_bins,
            bin_width,
            total_weight = total,
            "built radial emission profile"
        );

        Ok(DerivedProfile {
            bin_width,
            cumulative_weight,
            thermal_scale,
        })
    }

    pub fn number_of_bins(&self) -> usize {
        self.cumulative_weight.len()
    }

    /// Δr [m].
    pub fn bin_width(&self) -> f64 {
        self.bin_width
    }

    /// Normalized cumulative emission weight, non-decreasing, last entry 1.
    pub fn cumulative_weight(&self) -> &Array1<f64> {
        &self.cumulative_weight
    }

    /// sqrt(T_i [MeV]) per bin.
    pub fn thermal_scale(&self) -> &Array1<f64> {
        &self.thermal_scale
    }

    /// Emission probability of each bin (difference of the cumulative array).
    pub fn bin_probability(&self) -> Array1<f64> {
        let mut prev = 0.0;
        self.cumulative_weight.mapv(|c| {
            let p = c - prev;
            prev = c;
            p
        })
    }
}
