// ─────────────────────────────────────────────────────────────────────
// SCPN Plasma Source — Constants
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────

/// Fit coefficients of the D-T reactivity parametrization <σv>(T).
///
/// T is the ion temperature in keV and the result is in m³/s:
///   u    = 1 - T (c2 + T (c3 - c4 T)) / (1 + T (c5 + c6 T))
///   <σv> = c0 / (u^(5/6) T^(2/3)) · exp(-c1 (u/T)^(1/3))
///
/// Empirical D-T fit used by parametric tokamak neutron source models.
/// Undefined for T <= 0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReactivityFit {
    /// Prefactor [m³/s · keV^(2/3)].
    pub c0: f64,
    /// Gamow exponent scale [keV^(1/3)].
    pub c1: f64,
    /// Numerator coefficients [1/keV, 1/keV², 1/keV³].
    pub c2: f64,
    pub c3: f64,
    pub c4: f64,
    /// Denominator coefficients [1/keV, 1/keV²].
    pub c5: f64,
    pub c6: f64,
}

pub const DT_REACTIVITY_FIT: ReactivityFit = ReactivityFit {
    c0: 2.5663271e-18,
    c1: 19.983026,
    c2: 2.5077133e-2,
    c3: 2.5773408e-3,
    c4: 6.1880463e-5,
    c5: 6.6024089e-2,
    c6: 8.1215505e-3,
};

/// Mean D-T neutron birth energy [MeV].
pub const DT_NEUTRON_ENERGY_MEV: f64 = 14.08;

/// Doppler width coefficient: FWHM 5.59 sqrt(T) / 2.35 → Gaussian sigma.
pub const DOPPLER_WIDTH_COEFF: f64 = 5.59 / 2.35;

/// keV → MeV.
pub const KEV_PER_MEV: f64 = 1000.0;

/// m → cm.
pub const CM_PER_M: f64 = 100.0;

/// MeV → eV.
pub const EV_PER_MEV: f64 = 1.0e6;

/// Uniform draws consumed per neutron sample.
pub const DRAWS_PER_SAMPLE: usize = 8;
