// ─────────────────────────────────────────────────────────────────────
// SCPN Plasma Source — Population Statistics
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Summary statistics over a batch of sampled neutrons, for checking a
//! source against its configuration.

use plasma_types::error::{SourceError, SourceResult};
use plasma_types::sample::Sample;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SourcePopulationSummary {
    pub count: usize,
    pub mean_energy_mev: f64,
    pub std_energy_mev: f64,
    pub min_energy_mev: f64,
    pub max_energy_mev: f64,
    pub mean_major_radius_m: f64,
    pub max_abs_height_m: f64,
}

pub fn summarize_samples(samples: &[Sample]) -> SourceResult<SourcePopulationSummary> {
    if samples.is_empty() {
        return Ok(SourcePopulationSummary {
            count: 0,
            mean_energy_mev: 0.0,
            std_energy_mev: 0.0,
            min_energy_mev: 0.0,
            max_energy_mev: 0.0,
            mean_major_radius_m: 0.0,
            max_abs_height_m: 0.0,
        });
    }

    let mut sum_e = 0.0;
    let mut min_e = f64::INFINITY;
    let mut max_e = f64::NEG_INFINITY;
    let mut sum_r = 0.0;
    let mut max_abs_z = 0.0_f64;
    for (idx, sample) in samples.iter().enumerate() {
        if !sample.is_finite() {
            return Err(SourceError::PhysicsViolation(format!(
                "sample[{idx}] contains non-finite components"
            )));
        }
        sum_e += sample.energy_mev;
        min_e = min_e.min(sample.energy_mev);
        max_e = max_e.max(sample.energy_mev);
        sum_r += sample.major_radius_m();
        max_abs_z = max_abs_z.max(sample.height_m().abs());
    }

    let count = samples.len();
    let n = count as f64;
    let mean_e = sum_e / n;
    // Two-pass variance; the mean is ~14 MeV against sub-MeV widths.
    let var_e = samples
        .iter()
        .map(|s| (s.energy_mev - mean_e).powi(2))
        .sum::<f64>()
        / n;

    Ok(SourcePopulationSummary {
        count,
        mean_energy_mev: mean_e,
        std_energy_mev: var_e.sqrt(),
        min_energy_mev: min_e,
        max_energy_mev: max_e,
        mean_major_radius_m: sum_r / n,
        max_abs_height_m: max_abs_z,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sampler::PlasmaSource;
    use plasma_types::config::PlasmaParams;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn sample_at(energy_mev: f64, position: [f64; 3]) -> Sample {
        Sample {
            position,
            direction: [0.0, 0.0, 1.0],
            energy_mev,
        }
    }

    #[test]
    fn test_empty_population() {
        let summary = summarize_samples(&[]).expect("empty is valid");
        assert_eq!(summary.count, 0);
        assert_eq!(summary.mean_energy_mev, 0.0);
    }

    #[test]
    fn test_known_population() {
        let samples = [
            sample_at(13.0, [3.0, 4.0, -1.0]),
            sample_at(15.0, [0.0, 5.0, 2.0]),
        ];
        let summary = summarize_samples(&samples).expect("finite samples");
        assert_eq!(summary.count, 2);
        assert!((summary.mean_energy_mev - 14.0).abs() < 1e-12);
        assert!((summary.std_energy_mev - 1.0).abs() < 1e-12);
        assert_eq!(summary.min_energy_mev, 13.0);
        assert_eq!(summary.max_energy_mev, 15.0);
        assert!((summary.mean_major_radius_m - 5.0).abs() < 1e-12);
        assert_eq!(summary.max_abs_height_m, 2.0);
    }

    #[test]
    fn test_rejects_non_finite_sample() {
        let samples = [sample_at(f64::NAN, [1.0, 0.0, 0.0])];
        assert!(matches!(
            summarize_samples(&samples),
            Err(SourceError::PhysicsViolation(_))
        ));
    }

    #[test]
    fn test_sampled_population_matches_geometry() {
        let src = PlasmaSource::from_params(&PlasmaParams::spherical_tokamak()).expect("builds");
        let mut rng = StdRng::seed_from_u64(11);
        let samples: Vec<Sample> = (0..20_000)
            .map(|_| src.sample_with_rng(&mut rng))
            .collect::<SourceResult<_>>()
            .expect("valid draws");
        let summary = summarize_samples(&samples).expect("finite samples");

        assert_eq!(summary.count, 20_000);
        assert!((summary.mean_energy_mev - 14.08).abs() < 0.02);
        assert!(summary.std_energy_mev > 0.0);
        assert!(summary.max_abs_height_m <= 2.9 * 1.118 + 1e-12);
        // Emission is core-peaked, so the mean sits near R0.
        assert!((summary.mean_major_radius_m - 1.9).abs() < 0.3);
    }
}
