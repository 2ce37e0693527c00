// ─────────────────────────────────────────────────────────────────────
// SCPN Plasma Source — Physical Profiles
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Closed-form ion density/temperature profiles and D-T reactivity.
//!
//! L-mode:  f(r) = f_0 · (1 - (r/a)^p)
//! H-mode:  f(r) = f_ped + (f_0 - f_ped) · (1 - (r/r_ped)²)^p      r ≤ r_ped
//!          f(r) = f_sep + (f_ped - f_sep) · (a - r)/(a - r_ped)   r > r_ped

use plasma_types::config::{PlasmaConfig, ProfileKind};
use plasma_types::constants::DT_REACTIVITY_FIT;
use plasma_types::error::{SourceError, SourceResult};

/// L-mode density is always parabolic.
const L_MODE_DENSITY_EXPONENT: f64 = 2.0;

/// Peaked core joined to a linear edge at the pedestal radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PedestalProfile {
    pub origin: f64,
    pub pedestal: f64,
    pub separatrix: f64,
    pub pedestal_radius: f64,
    pub minor_radius: f64,
    pub peaking: f64,
}

impl PedestalProfile {
    /// Core branch, valid for r ≤ r_ped.
    pub fn core(&self, r: f64) -> f64 {
        let shape = (1.0 - (r / self.pedestal_radius).powi(2)).powf(self.peaking);
        self.pedestal + (self.origin - self.pedestal) * shape
    }

    /// Scrape-off branch, valid for r > r_ped.
    pub fn edge(&self, r: f64) -> f64 {
        self.separatrix
            + (self.pedestal - self.separatrix) * (self.minor_radius - r)
                / (self.minor_radius - self.pedestal_radius)
    }

    pub fn value(&self, r: f64) -> f64 {
        if r <= self.pedestal_radius {
            self.core(r)
        } else {
            self.edge(r)
        }
    }
}

/// Radial profile of a single plasma quantity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RadialProfile {
    Peaked {
        origin: f64,
        minor_radius: f64,
        exponent: f64,
    },
    Pedestal(PedestalProfile),
}

impl RadialProfile {
    pub fn ion_density(config: &PlasmaConfig) -> Self {
        match config.profile_kind() {
            ProfileKind::LMode => RadialProfile::Peaked {
                origin: config.ion_density_origin(),
                minor_radius: config.minor_radius(),
                exponent: L_MODE_DENSITY_EXPONENT,
            },
            ProfileKind::HMode => RadialProfile::Pedestal(PedestalProfile {
                origin: config.ion_density_origin(),
                pedestal: config.ion_density_pedestal(),
                separatrix: config.ion_density_separatrix(),
                pedestal_radius: config.pedestal_radius(),
                minor_radius: config.minor_radius(),
                peaking: config.ion_density_peaking(),
            }),
        }
    }

    pub fn ion_temperature(config: &PlasmaConfig) -> Self {
        match config.profile_kind() {
            ProfileKind::LMode => RadialProfile::Peaked {
                origin: config.ion_temperature_origin(),
                minor_radius: config.minor_radius(),
                exponent: config.ion_temperature_peaking(),
            },
            ProfileKind::HMode => RadialProfile::Pedestal(PedestalProfile {
                origin: config.ion_temperature_origin(),
                pedestal: config.ion_temperature_pedestal(),
                separatrix: config.ion_temperature_separatrix(),
                pedestal_radius: config.pedestal_radius(),
                minor_radius: config.minor_radius(),
                peaking: config.ion_temperature_peaking(),
            }),
        }
    }

    pub fn value(&self, r: f64) -> f64 {
        match self {
            RadialProfile::Peaked {
                origin,
                minor_radius,
                exponent,
            } => origin * (1.0 - (r / minor_radius).powf(*exponent)),
            RadialProfile::Pedestal(p) => p.value(r),
        }
    }
}

/// Ion density [m⁻³] at minor radius `r` [m].
pub fn ion_density(config: &PlasmaConfig, r: f64) -> f64 {
    RadialProfile::ion_density(config).value(r)
}

/// Ion temperature [keV] at minor radius `r` [m].
pub fn ion_temperature(config: &PlasmaConfig, r: f64) -> f64 {
    RadialProfile::ion_temperature(config).value(r)
}

/// D-T reactivity <σv> [m³/s] at ion temperature `t_kev`.
pub fn dt_reactivity(t_kev: f64) -> SourceResult<f64> {
    if !t_kev.is_finite() || t_kev <= 0.0 {
        return Err(SourceError::DomainError(format!(
            "D-T reactivity requires finite ion temperature > 0 keV, got {t_kev}"
        )));
    }
    let c = DT_REACTIVITY_FIT;
    let t = t_kev;
    let u = 1.0 - t * (c.c2 + t * (c.c3 - c.c4 * t)) / (1.0 + t * (c.c5 + c.c6 * t));
    let sigma_v = c.c0 / (u.powf(5.0 / 6.0) * t.powf(2.0 / 3.0))
        * (-c.c1 * (u / t).powf(1.0 / 3.0)).exp();
    Ok(sigma_v)
}

#[cfg(test)]
mod tests {
    use super::*;
    use plasma_types::config::PlasmaParams;

    fn l_mode_config() -> PlasmaConfig {
        PlasmaConfig::from_params(&PlasmaParams {
            profile_kind: ProfileKind::LMode,
            ion_density_origin: 1e20,
            ion_temperature_origin: 20.0,
            ion_temperature_peaking: 1.5,
            minor_radius: 1.0,
            pedestal_radius: 0.8,
            ..PlasmaParams::default()
        })
        .expect("valid L-mode config")
    }

    #[test]
    fn test_l_mode_density_endpoints() {
        let cfg = l_mode_config();
        assert_eq!(ion_density(&cfg, 0.0), 1e20);
        assert_eq!(ion_density(&cfg, 1.0), 0.0);
        let mid = ion_density(&cfg, 0.5);
        assert!((mid - 0.75e20).abs() < 1e6, "n(0.5) = {mid}");
    }

    #[test]
    fn test_l_mode_temperature_uses_own_exponent() {
        let cfg = l_mode_config();
        assert_eq!(ion_temperature(&cfg, 0.0), 20.0);
        let expected = 20.0 * (1.0 - 0.5_f64.powf(1.5));
        assert!((ion_temperature(&cfg, 0.5) - expected).abs() < 1e-12);
        assert!(ion_temperature(&cfg, 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_h_mode_continuity_at_pedestal() {
        let cfg = PlasmaConfig::from_params(&PlasmaParams::spherical_tokamak()).expect("valid");
        let r_ped = cfg.pedestal_radius();
        for profile in [
            RadialProfile::ion_density(&cfg),
            RadialProfile::ion_temperature(&cfg),
        ] {
            let RadialProfile::Pedestal(p) = profile else {
                panic!("H-mode config must yield pedestal profiles");
            };
            let core = p.core(r_ped);
            let edge = p.edge(r_ped);
            assert!(
                (core - p.pedestal).abs() <= 1e-12 * p.pedestal.abs(),
                "core branch {core} != pedestal {}",
                p.pedestal
            );
            assert!(
                (edge - p.pedestal).abs() <= 1e-12 * p.pedestal.abs(),
                "edge branch {edge} != pedestal {}",
                p.pedestal
            );
            assert_eq!(p.value(r_ped), core);
        }
    }

    #[test]
    fn test_h_mode_edge_reaches_separatrix() {
        let cfg = PlasmaConfig::from_params(&PlasmaParams::spherical_tokamak()).expect("valid");
        let a = cfg.minor_radius();
        assert!((ion_density(&cfg, a) - 3.0e19).abs() < 1.0);
        assert!((ion_temperature(&cfg, a) - 0.1).abs() < 1e-12);
        assert_eq!(ion_temperature(&cfg, 0.0), 25.0);
    }

    #[test]
    fn test_reactivity_rejects_non_positive_temperature() {
        for t in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            assert!(
                matches!(dt_reactivity(t), Err(SourceError::DomainError(_))),
                "T={t} should be a domain error"
            );
        }
    }

    #[test]
    fn test_reactivity_20kev() {
        let sv = dt_reactivity(20.0).expect("positive T");
        assert!(
            (sv - 4.28e-22).abs() / 4.28e-22 < 0.01,
            "<σv>(20 keV) = {sv}"
        );
    }

    #[test]
    fn test_reactivity_rises_then_peaks() {
        let mut prev = 0.0;
        for t in 1..=60 {
            let sv = dt_reactivity(t as f64).expect("positive T");
            assert!(sv > prev, "<σv> should rise through {t} keV");
            prev = sv;
        }
        let at_64 = dt_reactivity(64.0).expect("positive T");
        let at_100 = dt_reactivity(100.0).expect("positive T");
        assert!(at_100 < at_64, "<σv> should fall past the peak");
    }
}
