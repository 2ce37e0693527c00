// ─────────────────────────────────────────────────────────────────────
// SCPN Plasma Source — Radial Sampler
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Inverse-CDF sampling of the emission minor radius.

use crate::builder::DerivedProfile;
use ndarray::Array1;
use plasma_types::error::{SourceError, SourceResult};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadialDraw {
    /// Sampled minor radius [m].
    pub radius: f64,
    /// Matched CDF bin, used for the energy width.
    pub bin: usize,
}

/// Smallest `i` with `u <= cdf[i]`, or `None`.
///
/// Lower-bound bisection; agrees with a forward linear scan for any
/// non-decreasing `cdf`, NaN draws included (they match nothing).
pub fn find_bin(cdf: &Array1<f64>, u: f64) -> Option<usize> {
    let mut lo = 0;
    let mut hi = cdf.len();
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        if cdf[mid] < u {
            lo = mid + 1;
        } else {
            hi = mid;
        }
    }
    if lo < cdf.len() && u <= cdf[lo] {
        Some(lo)
    } else {
        None
    }
}

/// Sample a minor radius from two uniform draws.
///
/// For a matched bin `i > 0` the radius is drawn from `[(i-1)Δr, iΔr)`, i.e.
/// one bin inward of the matched CDF entry, while `bin` still reports `i`.
/// Bin 0 draws from `[0, Δr)`.
pub fn sample_radius(
    profile: &DerivedProfile,
    u_bin: f64,
    u_offset: f64,
) -> SourceResult<RadialDraw> {
    let cdf = profile.cumulative_weight();
    let bin_width = profile.bin_width();
    let Some(bin) = find_bin(cdf, u_bin) else {
        let last_cumulative = cdf.iter().next_back().copied().unwrap_or(0.0);
        tracing::warn!(
            draw = u_bin,
            last_cumulative,
            "radial draw beyond final cumulative weight"
        );
        return Err(SourceError::SamplingBoundary {
            draw: u_bin,
            last_cumulative,
        });
    };

    let radius = if bin > 0 {
        (bin - 1) as f64 * bin_width + bin_width * u_offset
    } else {
        bin_width * u_offset
    };
    Ok(RadialDraw { radius, bin })
}
