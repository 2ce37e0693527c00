// ─────────────────────────────────────────────────────────────────────
// SCPN Plasma Source — Sample
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────

/// One sampled neutron birth state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub position: [f64; 3],  // [m]
    pub direction: [f64; 3], // unit vector
    pub energy_mev: f64,
}

impl Sample {
    /// Cylindrical major radius R = sqrt(x² + y²) [m].
    pub fn major_radius_m(&self) -> f64 {
        self.position[0].hypot(self.position[1])
    }

    /// Vertical coordinate Z [m].
    pub fn height_m(&self) -> f64 {
        self.position[2]
    }

    pub fn direction_norm(&self) -> f64 {
        let [u, v, w] = self.direction;
        (u * u + v * v + w * w).sqrt()
    }

    pub fn is_finite(&self) -> bool {
        self.position.iter().all(|v| v.is_finite())
            && self.direction.iter().all(|v| v.is_finite())
            && self.energy_mev.is_finite()
    }
}
