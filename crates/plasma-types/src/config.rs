// ─────────────────────────────────────────────────────────────────────
// SCPN Plasma Source — Config
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use crate::error::{SourceError, SourceResult};
use serde::{Deserialize, Serialize};

/// Radial profile family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProfileKind {
    /// Parabolic density, peaked temperature, no pedestal.
    #[serde(rename = "l-mode")]
    LMode,
    /// Peaked core inside the pedestal, linear edge out to the separatrix.
    #[serde(rename = "h-mode")]
    HMode,
}

impl ProfileKind {
    /// Legacy integer flag: 0 = L-mode, anything else = H/A-mode.
    pub fn from_legacy_id(id: i64) -> Self {
        if id == 0 {
            ProfileKind::LMode
        } else {
            ProfileKind::HMode
        }
    }

    pub fn legacy_id(self) -> i64 {
        match self {
            ProfileKind::LMode => 0,
            ProfileKind::HMode => 1,
        }
    }
}

/// Plasma source parameters as supplied by the user.
///
/// Densities in m⁻³, temperatures in keV, lengths in m, toroidal bounds in degrees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlasmaParams {
    #[serde(default = "default_name")]
    pub name: String,
    pub ion_density_pedestal: f64,
    pub ion_density_separatrix: f64,
    pub ion_density_origin: f64,
    pub ion_temperature_pedestal: f64,
    pub ion_temperature_separatrix: f64,
    pub ion_temperature_origin: f64,
    pub pedestal_radius: f64,
    pub ion_density_peaking: f64,
    pub ion_temperature_peaking: f64,
    pub minor_radius: f64,
    pub major_radius: f64,
    pub elongation: f64,
    pub triangularity: f64,
    pub shafranov_shift: f64,
    pub profile_kind: ProfileKind,
    pub number_of_bins: usize,
    #[serde(default = "default_min_toroidal_angle_deg")]
    pub min_toroidal_angle_deg: f64,
    #[serde(default = "default_max_toroidal_angle_deg")]
    pub max_toroidal_angle_deg: f64,
}

fn default_name() -> String {
    "plasma".to_string()
}
fn default_min_toroidal_angle_deg() -> f64 {
    0.0
}
fn default_max_toroidal_angle_deg() -> f64 {
    360.0
}

impl PlasmaParams {
    /// Compact spherical tokamak, H-mode.
    pub fn spherical_tokamak() -> Self {
        PlasmaParams {
            name: "spherical-tokamak".to_string(),
            ion_density_pedestal: 1.09e20,
            ion_density_separatrix: 3.0e19,
            ion_density_origin: 1.09e20,
            ion_temperature_pedestal: 6.09,
            ion_temperature_separatrix: 0.1,
            ion_temperature_origin: 25.0,
            pedestal_radius: 0.8,
            ion_density_peaking: 1.0,
            ion_temperature_peaking: 2.06,
            minor_radius: 1.118,
            major_radius: 1.9,
            elongation: 2.9,
            triangularity: 0.55,
            shafranov_shift: 0.0,
            profile_kind: ProfileKind::HMode,
            number_of_bins: 100,
            min_toroidal_angle_deg: default_min_toroidal_angle_deg(),
            max_toroidal_angle_deg: default_max_toroidal_angle_deg(),
        }
    }

    /// EU DEMO baseline, H-mode.
    pub fn eu_demo() -> Self {
        PlasmaParams {
            name: "eu-demo".to_string(),
            ion_temperature_origin: 45.9,
            ion_temperature_peaking: 8.06,
            minor_radius: 2.93,
            major_radius: 9.07,
            elongation: 1.59,
            triangularity: 0.333,
            ..Self::spherical_tokamak()
        }
    }

    /// Load from a JSON file.
    pub fn from_file(path: impl AsRef<std::path::Path>) -> SourceResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    pub fn from_json_str(json: &str) -> SourceResult<Self> {
        let params: Self = serde_json::from_str(json)?;
        Ok(params)
    }
}

impl Default for PlasmaParams {
    fn default() -> Self {
        Self::spherical_tokamak()
    }
}

/// Validated, immutable plasma configuration. Toroidal bounds are in radians.
#[derive(Debug, Clone, PartialEq)]
pub struct PlasmaConfig {
    name: String,
    ion_density_pedestal: f64,
    ion_density_separatrix: f64,
    ion_density_origin: f64,
    ion_temperature_pedestal: f64,
    ion_temperature_separatrix: f64,
    ion_temperature_origin: f64,
    pedestal_radius: f64,
    ion_density_peaking: f64,
    ion_temperature_peaking: f64,
    minor_radius: f64,
    major_radius: f64,
    elongation: f64,
    triangularity: f64,
    shafranov_shift: f64,
    profile_kind: ProfileKind,
    number_of_bins: usize,
    min_toroidal_angle: f64,
    max_toroidal_angle: f64,
}

fn require_finite(value: f64, label: &str) -> SourceResult<()> {
    if !value.is_finite() {
        return Err(SourceError::ConfigError(format!(
            "{label} must be finite, got {value}"
        )));
    }
    Ok(())
}

fn require_non_negative(value: f64, label: &str) -> SourceResult<()> {
    require_finite(value, label)?;
    if value < 0.0 {
        return Err(SourceError::ConfigError(format!(
            "{label} must be >= 0, got {value}"
        )));
    }
    Ok(())
}

impl PlasmaConfig {
    pub fn from_params(params: &PlasmaParams) -> SourceResult<Self> {
        if params.number_of_bins == 0 {
            return Err(SourceError::ConfigError(
                "number_of_bins must be >= 1".to_string(),
            ));
        }

        require_non_negative(params.ion_density_pedestal, "ion_density_pedestal")?;
        require_non_negative(params.ion_density_separatrix, "ion_density_separatrix")?;
        require_non_negative(params.ion_density_origin, "ion_density_origin")?;
        require_non_negative(params.ion_temperature_pedestal, "ion_temperature_pedestal")?;
        require_non_negative(
            params.ion_temperature_separatrix,
            "ion_temperature_separatrix",
        )?;
        require_non_negative(params.ion_temperature_origin, "ion_temperature_origin")?;

        require_finite(params.ion_density_peaking, "ion_density_peaking")?;
        require_finite(params.ion_temperature_peaking, "ion_temperature_peaking")?;
        require_finite(params.major_radius, "major_radius")?;
        require_finite(params.elongation, "elongation")?;
        require_finite(params.triangularity, "triangularity")?;
        require_finite(params.shafranov_shift, "shafranov_shift")?;

        require_finite(params.minor_radius, "minor_radius")?;
        if params.minor_radius <= 0.0 {
            return Err(SourceError::ConfigError(format!(
                "minor_radius must be > 0, got {}",
                params.minor_radius
            )));
        }

        require_finite(params.pedestal_radius, "pedestal_radius")?;
        if !(0.0..=params.minor_radius).contains(&params.pedestal_radius) {
            return Err(SourceError::ConfigError(format!(
                "pedestal_radius must lie in [0, minor_radius={}], got {}",
                params.minor_radius, params.pedestal_radius
            )));
        }

        require_finite(params.min_toroidal_angle_deg, "min_toroidal_angle_deg")?;
        require_finite(params.max_toroidal_angle_deg, "max_toroidal_angle_deg")?;
        if params.min_toroidal_angle_deg >= params.max_toroidal_angle_deg {
            return Err(SourceError::ConfigError(format!(
                "min_toroidal_angle_deg ({}) must be < max_toroidal_angle_deg ({})",
                params.min_toroidal_angle_deg, params.max_toroidal_angle_deg
            )));
        }

        Ok(PlasmaConfig {
            name: params.name.clone(),
            ion_density_pedestal: params.ion_density_pedestal,
            ion_density_separatrix: params.ion_density_separatrix,
            ion_density_origin: params.ion_density_origin,
            ion_temperature_pedestal: params.ion_temperature_pedestal,
            ion_temperature_separatrix: params.ion_temperature_separatrix,
            ion_temperature_origin: params.ion_temperature_origin,
            pedestal_radius: params.pedestal_radius,
            ion_density_peaking: params.ion_density_peaking,
            ion_temperature_peaking: params.ion_temperature_peaking,
            minor_radius: params.minor_radius,
            major_radius: params.major_radius,
            elongation: params.elongation,
            triangularity: params.triangularity,
            shafranov_shift: params.shafranov_shift,
            profile_kind: params.profile_kind,
            number_of_bins: params.number_of_bins,
            min_toroidal_angle: params.min_toroidal_angle_deg.to_radians(),
            max_toroidal_angle: params.max_toroidal_angle_deg.to_radians(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn ion_density_pedestal(&self) -> f64 {
        self.ion_density_pedestal
    }
    pub fn ion_density_separatrix(&self) -> f64 {
        self.ion_density_separatrix
    }
    pub fn ion_density_origin(&self) -> f64 {
        self.ion_density_origin
    }
    pub fn ion_temperature_pedestal(&self) -> f64 {
        self.ion_temperature_pedestal
    }
    pub fn ion_temperature_separatrix(&self) -> f64 {
        self.ion_temperature_separatrix
    }
    pub fn ion_temperature_origin(&self) -> f64 {
        self.ion_temperature_origin
    }
    pub fn pedestal_radius(&self) -> f64 {
        self.pedestal_radius
    }
    pub fn ion_density_peaking(&self) -> f64 {
        self.ion_density_peaking
    }
    pub fn ion_temperature_peaking(&self) -> f64 {
        self.ion_temperature_peaking
    }
    pub fn minor_radius(&self) -> f64 {
        self.minor_radius
    }
    pub fn major_radius(&self) -> f64 {
        self.major_radius
    }
    pub fn elongation(&self) -> f64 {
        self.elongation
    }
    pub fn triangularity(&self) -> f64 {
        self.triangularity
    }
    pub fn shafranov_shift(&self) -> f64 {
        self.shafranov_shift
    }
    pub fn profile_kind(&self) -> ProfileKind {
        self.profile_kind
    }
    pub fn number_of_bins(&self) -> usize {
        self.number_of_bins
    }
    /// [rad]
    pub fn min_toroidal_angle(&self) -> f64 {
        self.min_toroidal_angle
    }
    /// [rad]
    pub fn max_toroidal_angle(&self) -> f64 {
        self.max_toroidal_angle
    }
}

impl TryFrom<PlasmaParams> for PlasmaConfig {
    type Error = SourceError;

    fn try_from(params: PlasmaParams) -> SourceResult<Self> {
        PlasmaConfig::from_params(&params)
    }
}

impl TryFrom<&PlasmaParams> for PlasmaConfig {
    type Error = SourceError;

    fn try_from(params: &PlasmaParams) -> SourceResult<Self> {
        PlasmaConfig::from_params(params)
    }
}
