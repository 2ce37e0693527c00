// ─────────────────────────────────────────────────────────────────────
// SCPN Plasma Source — Crate Root
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Parametric D-T neutron source for tokamak plasmas.
//!
//! Profiles → emission CDF (built once) → per-sample radial draw,
//! flux-surface mapping, Doppler-broadened energy, isotropic direction.

pub mod builder;
pub mod direction;
pub mod energy;
pub mod geometry;
pub mod host;
pub mod profiles;
pub mod radial;
pub mod sampler;
pub mod stats;

pub use builder::DerivedProfile;
pub use host::{ParticleKind, SourceSite};
pub use sampler::{PlasmaSource, SourceDraws};
