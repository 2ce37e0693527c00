// ─────────────────────────────────────────────────────────────────────
// SCPN Plasma Source — Transport Host Adapter
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Glue between the sampler and a Monte Carlo transport code.
//!
//! Draws the eight uniforms from the host generator in slot order and
//! converts samples to source sites in transport units (cm, eV).

use crate::sampler::{PlasmaSource, SourceDraws};
use plasma_types::constants::{CM_PER_M, EV_PER_MEV};
use plasma_types::error::SourceResult;
use plasma_types::sample::Sample;
use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParticleKind {
    Neutron,
}

/// Source site as banked by a transport code.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SourceSite {
    pub position_cm: [f64; 3],
    pub direction: [f64; 3],
    pub energy_ev: f64,
    pub weight: f64,
    pub particle: ParticleKind,
    /// 0 = prompt.
    pub delayed_group: u32,
}

impl From<Sample> for SourceSite {
    fn from(sample: Sample) -> Self {
        SourceSite {
            position_cm: sample.position.map(|v| v * CM_PER_M),
            direction: sample.direction,
            energy_ev: sample.energy_mev * EV_PER_MEV,
            weight: 1.0,
            particle: ParticleKind::Neutron,
            delayed_group: 0,
        }
    }
}

/// Eight `[0, 1)` uniforms, drawn in slot order.
pub fn draw_uniforms<R: Rng + ?Sized>(rng: &mut R) -> SourceDraws {
    std::array::from_fn(|_| rng.gen::<f64>())
}

impl PlasmaSource {
    /// Sample using the host generator. Consumes exactly eight draws.
    pub fn sample_with_rng<R: Rng + ?Sized>(&self, rng: &mut R) -> SourceResult<Sample> {
        self.sample(draw_uniforms(rng))
    }

    pub fn sample_site<R: Rng + ?Sized>(&self, rng: &mut R) -> SourceResult<SourceSite> {
        self.sample_with_rng(rng).map(SourceSite::from)
    }

    /// Bank `n` source sites. The first per-call error aborts the batch.
    pub fn sample_sites<R: Rng + ?Sized>(
        &self,
        n: usize,
        rng: &mut R,
    ) -> SourceResult<Vec<SourceSite>> {
        (0..n).map(|_| self.sample_site(rng)).collect()
    }
}
