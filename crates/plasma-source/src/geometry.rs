// ─────────────────────────────────────────────────────────────────────
// SCPN Plasma Source — Flux-Surface and Toroidal Mapping
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Analytic D-shaped flux surfaces and toroidal sector mapping.
//!
//!   α     = 2π u
//!   Δ(m)  = Δ_0 · (1 - (m/a)²)
//!   R     = R_0 + m cos(α + δ sin α) + Δ(m)
//!   Z     = κ m sin α
//!   φ     = φ_min + (φ_max - φ_min) u'
//!   x, y  = R sin φ, R cos φ

use plasma_types::config::PlasmaConfig;
use std::f64::consts::TAU;

/// Shafranov shift at minor radius `m` [m]: maximal on axis, zero at the edge.
pub fn shafranov_shift_at(config: &PlasmaConfig, minor: f64) -> f64 {
    config.shafranov_shift() * (1.0 - (minor / config.minor_radius()).powi(2))
}

/// Map minor radius and poloidal fraction to (R, Z) [m].
pub fn flux_surface_point(config: &PlasmaConfig, minor: f64, u_poloidal: f64) -> (f64, f64) {
    let alpha = TAU * u_poloidal;
    let shift = shafranov_shift_at(config, minor);
    let r = config.major_radius()
        + minor * (alpha + config.triangularity() * alpha.sin()).cos()
        + shift;
    let z = config.elongation() * minor * alpha.sin();
    (r, z)
}

/// Toroidal angle [rad] for fraction `u_toroidal` of the configured sector.
pub fn toroidal_angle(config: &PlasmaConfig, u_toroidal: f64) -> f64 {
    let extent = config.max_toroidal_angle() - config.min_toroidal_angle();
    extent * u_toroidal + config.min_toroidal_angle()
}

/// Map major radius and toroidal fraction to Cartesian (x, y) [m].
pub fn toroidal_point(config: &PlasmaConfig, major: f64, u_toroidal: f64) -> (f64, f64) {
    let phi = toroidal_angle(config, u_toroidal);
    (major * phi.sin(), major * phi.cos())
}

#[cfg(test)]
mod tests {
    use super::*;
    use plasma_types::config::PlasmaParams;
    use std::f64::consts::PI;

    fn config(params: PlasmaParams) -> PlasmaConfig {
        PlasmaConfig::from_params(&params).expect("valid config")
    }

    fn shifted() -> PlasmaConfig {
        config(PlasmaParams {
            shafranov_shift: 0.37,
            ..PlasmaParams::eu_demo()
        })
    }

    #[test]
    fn test_axis_maps_to_shifted_major_radius() {
        let cfg = shifted();
        for u in [0.0, 0.13, 0.5, 0.77, 0.999] {
            let (r, z) = flux_surface_point(&cfg, 0.0, u);
            assert_eq!(r, 9.07 + 0.37);
            assert_eq!(z, 0.0);
        }
    }

    #[test]
    fn test_shift_vanishes_at_edge() {
        let cfg = shifted();
        assert!(shafranov_shift_at(&cfg, cfg.minor_radius()).abs() < 1e-15);
        assert_eq!(shafranov_shift_at(&cfg, 0.0), 0.37);
    }

    #[test]
    fn test_outboard_and_top_points() {
        let cfg = shifted();
        let a = cfg.minor_radius();
        // α = 0: outboard midplane.
        let (r, z) = flux_surface_point(&cfg, a, 0.0);
        assert!((r - (9.07 + a)).abs() < 1e-12);
        assert_eq!(z, 0.0);
        // α = π/2: top of the D, pulled inward by triangularity.
        let (r, z) = flux_surface_point(&cfg, a, 0.25);
        let expected_r = 9.07 + a * (PI / 2.0 + 0.333).cos();
        assert!((r - expected_r).abs() < 1e-12);
        assert!((z - 1.59 * a).abs() < 1e-12);
        assert!(r < 9.07, "top of a positive-δ D sits inboard of R0");
    }

    #[test]
    fn test_full_turn_toroidal_mapping() {
        let cfg = config(PlasmaParams::default());
        let (x, y) = toroidal_point(&cfg, 2.0, 0.0);
        assert!(x.abs() < 1e-15);
        assert!((y - 2.0).abs() < 1e-15);
        let (x, y) = toroidal_point(&cfg, 2.0, 0.25);
        assert!((x - 2.0).abs() < 1e-12);
        assert!(y.abs() < 1e-12);
    }

    #[test]
    fn test_sector_confines_toroidal_angle() {
        let cfg = config(PlasmaParams {
            min_toroidal_angle_deg: 30.0,
            max_toroidal_angle_deg: 60.0,
            ..PlasmaParams::default()
        });
        for k in 0..100 {
            let u = k as f64 / 100.0;
            let phi = toroidal_angle(&cfg, u);
            assert!(phi >= 30f64.to_radians() - 1e-15);
            assert!(phi < 60f64.to_radians());
            let (x, y) = toroidal_point(&cfg, 3.0, u);
            assert!(((x * x + y * y).sqrt() - 3.0).abs() < 1e-12);
            assert!(x > 0.0 && y > 0.0);
        }
    }
}
