// ─────────────────────────────────────────────────────────────────────
// SCPN Plasma Source — Energy Sampler
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Doppler-broadened D-T neutron birth energy.
//!
//! Box–Muller on two uniforms gives a standard normal ξ, then
//!   E = 14.08 + (5.59/2.35) · sqrt(T_i [MeV]) · ξ   [MeV]
//! No lower clamp is applied.

use crate::builder::DerivedProfile;
use plasma_types::constants::{DOPPLER_WIDTH_COEFF, DT_NEUTRON_ENERGY_MEV};
use plasma_types::error::{SourceError, SourceResult};
use std::f64::consts::TAU;

/// Standard normal deviate from `u_radius ∈ (0, 1)` and `u_angle ∈ [0, 1)`.
pub fn box_muller(u_radius: f64, u_angle: f64) -> SourceResult<f64> {
    if !u_radius.is_finite() || u_radius <= 0.0 {
        return Err(SourceError::DomainError(format!(
            "Box-Muller radial draw must be finite and > 0, got {u_radius}"
        )));
    }
    Ok((-2.0 * u_radius.ln()).sqrt() * (TAU * u_angle).cos())
}

/// Gaussian energy width [MeV] for `bin`.
pub fn energy_sigma(profile: &DerivedProfile, bin: usize) -> SourceResult<f64> {
    profile
        .thermal_scale()
        .get(bin)
        .map(|scale| DOPPLER_WIDTH_COEFF * scale)
        .ok_or(SourceError::BinOutOfRange {
            bin,
            bins: profile.number_of_bins(),
        })
}

/// Sample the neutron energy [MeV] at radial bin `bin`.
pub fn sample_energy(
    profile: &DerivedProfile,
    bin: usize,
    u_radius: f64,
    u_angle: f64,
) -> SourceResult<f64> {
    let sigma = energy_sigma(profile, bin)?;
    let xi = box_muller(u_radius, u_angle)?;
    Ok(sigma * xi + DT_NEUTRON_ENERGY_MEV)
}
