// ─────────────────────────────────────────────────────────────────────
// SCPN Plasma Source — Errors
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SourceError {
    /// Rejected at construction; a source is never built from these parameters.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Inverse-CDF search found no bin for the draw (normalization drift).
    #[error(
        "Sample position greater than plasma radius: draw {draw} exceeds final cumulative weight {last_cumulative}"
    )]
    SamplingBoundary { draw: f64, last_cumulative: f64 },

    #[error("Domain error: {0}")]
    DomainError(String),

    #[error("Radial bin {bin} out of range for profile with {bins} bins")]
    BinOutOfRange { bin: usize, bins: usize },

    #[error("Physics constraint violated: {0}")]
    PhysicsViolation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl SourceError {
    /// True for per-call failures the host may skip and redraw.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            SourceError::SamplingBoundary { .. } | SourceError::DomainError(_)
        )
    }
}

pub type SourceResult<T> = Result<T, SourceError>;
