// ─────────────────────────────────────────────────────────────────────
// SCPN Plasma Source — Sampler
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Full neutron birth sample from eight uniform draws.
//!
//! Draw slots (fixed contract, independent of the generator):
//!
//! | slot | consumer                              |
//! |------|---------------------------------------|
//! | 0    | radial bin (inverse CDF)              |
//! | 1    | radial offset inside the bin          |
//! | 2    | poloidal angle fraction               |
//! | 3    | toroidal angle fraction               |
//! | 4    | energy, Box–Muller radius (> 0)       |
//! | 5    | energy, Box–Muller angle              |
//! | 6    | direction azimuth                     |
//! | 7    | direction polar                       |

use crate::builder::DerivedProfile;
use crate::direction::isotropic_direction;
use crate::energy::sample_energy;
use crate::geometry::{flux_surface_point, toroidal_point};
use crate::radial::sample_radius;
use plasma_types::config::{PlasmaConfig, PlasmaParams};
use plasma_types::constants::DRAWS_PER_SAMPLE;
use plasma_types::error::SourceResult;
use plasma_types::sample::Sample;

pub const SLOT_RADIAL_BIN: usize = 0;
pub const SLOT_RADIAL_OFFSET: usize = 1;
pub const SLOT_POLOIDAL: usize = 2;
pub const SLOT_TOROIDAL: usize = 3;
pub const SLOT_ENERGY_RADIUS: usize = 4;
pub const SLOT_ENERGY_ANGLE: usize = 5;
pub const SLOT_DIRECTION_AZIMUTH: usize = 6;
pub const SLOT_DIRECTION_POLAR: usize = 7;

/// Uniform draws for one sample, in slot order.
pub type SourceDraws = [f64; DRAWS_PER_SAMPLE];

/// Parametric plasma neutron source: frozen config plus its emission profile.
///
/// Immutable once built; `sample` takes `&self` and may be called from any
/// number of threads.
#[derive(Debug, Clone)]
pub struct PlasmaSource {
    config: PlasmaConfig,
    profile: DerivedProfile,
}

impl PlasmaSource {
    pub fn new(config: PlasmaConfig) -> SourceResult<Self> {
        let profile = DerivedProfile::build(&config)?;
        tracing::info!(
            source = config.name(),
            profile_kind = ?config.profile_kind(),
            bins = profile.number_of_bins(),
            "plasma neutron source ready"
        );
        Ok(PlasmaSource { config, profile })
    }

    pub fn from_params(params: &PlasmaParams) -> SourceResult<Self> {
        Self::new(PlasmaConfig::from_params(params)?)
    }

    pub fn config(&self) -> &PlasmaConfig {
        &self.config
    }

    pub fn profile(&self) -> &DerivedProfile {
        &self.profile
    }

    /// Sample one neutron birth state. Pure in `draws`.
    pub fn sample(&self, draws: SourceDraws) -> SourceResult<Sample> {
        let radial = sample_radius(
            &self.profile,
            draws[SLOT_RADIAL_BIN],
            draws[SLOT_RADIAL_OFFSET],
        )?;
        let (major, z) = flux_surface_point(&self.config, radial.radius, draws[SLOT_POLOIDAL]);
        let (x, y) = toroidal_point(&self.config, major, draws[SLOT_TOROIDAL]);
        let energy_mev = sample_energy(
            &self.profile,
            radial.bin,
            draws[SLOT_ENERGY_RADIUS],
            draws[SLOT_ENERGY_ANGLE],
        )?;
        let direction = isotropic_direction(
            draws[SLOT_DIRECTION_AZIMUTH],
            draws[SLOT_DIRECTION_POLAR],
        );
        Ok(Sample {
            position: [x, y, z],
            direction,
            energy_mev,
        })
    }
}
