// ─────────────────────────────────────────────────────────────────────
// SCPN Plasma Source — Direction Sampler
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use std::f64::consts::TAU;

/// Isotropic unit vector: θ = 2π u₁, φ = acos(1 - 2u₂).
pub fn isotropic_direction(u_azimuth: f64, u_polar: f64) -> [f64; 3] {
    let theta = TAU * u_azimuth;
    let phi = (1.0 - 2.0 * u_polar).acos();
    let sin_phi = phi.sin();
    [sin_phi * theta.cos(), sin_phi * theta.sin(), phi.cos()]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn norm(v: [f64; 3]) -> f64 {
        (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt()
    }

    #[test]
    fn test_poles() {
        let up = isotropic_direction(0.3, 0.0);
        assert!((up[2] - 1.0).abs() < 1e-15);
        assert!(up[0].abs() < 1e-15 && up[1].abs() < 1e-15);

        let down = isotropic_direction(0.3, 1.0);
        assert!((down[2] + 1.0).abs() < 1e-15);
    }

    #[test]
    fn test_unit_norm_on_grid() {
        for i in 1..50 {
            for j in 1..50 {
                let d = isotropic_direction(i as f64 / 50.0, j as f64 / 50.0);
                assert!((norm(d) - 1.0).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn test_cos_polar_is_uniform_in_u() {
        // w = cos φ = 1 - 2u₂ exactly maps the polar draw.
        for k in 0..=10 {
            let u = k as f64 / 10.0;
            let d = isotropic_direction(0.0, u);
            assert!((d[2] - (1.0 - 2.0 * u)).abs() < 1e-12);
        }
    }
}
