use chrono::NaiveDateTime;
use clap::ValueEnum;
use ndarray::{Array2, Array3, ArrayD};
use serde::{Deserialize, Serialize};

use crate::models::Station;

/// How latitude/longitude relate to the vertical levels of a volume.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum PointMode {
    /// One `rows × cols` geolocation grid reused for every level.
    #[default]
    SharedGrid,
    /// Geolocation is `levels × rows × cols`; every cell is its own point.
    PerLevelGrid,
}

/// Whether the missing-data mask of a profile is honoured.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum MissingDataPolicy {
    /// Every declared level is written, masks are ignored.
    None,
    /// Levels whose reflectivity is masked are skipped.
    #[default]
    Mask,
}

/// Latitude/longitude of the horizontal points of one radar.
///
/// Stored with a dynamic dimension so the encoder can reject a grid whose
/// rank does not match the requested [`PointMode`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObservationGrid {
    pub latitude: ArrayD<f64>,
    pub longitude: ArrayD<f64>,
}

impl ObservationGrid {
    pub fn new(latitude: ArrayD<f64>, longitude: ArrayD<f64>) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Grid shared by all levels.
    pub fn shared(latitude: Array2<f64>, longitude: Array2<f64>) -> Self {
        Self::new(latitude.into_dyn(), longitude.into_dyn())
    }

    /// Grid with its own geolocation per level.
    pub fn per_level(latitude: Array3<f64>, longitude: Array3<f64>) -> Self {
        Self::new(latitude.into_dyn(), longitude.into_dyn())
    }
}

/// Per-level measurements, every array shaped `levels × rows × cols`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerticalProfile {
    /// Height of each sample [m]
    pub elevation: Array3<f64>,
    pub radial_velocity: Array3<f64>,
    pub radial_velocity_qc: Array3<i32>,
    pub radial_velocity_error: Array3<f64>,
    pub reflectivity: Array3<f64>,
    pub reflectivity_qc: Array3<i32>,
    pub reflectivity_error: Array3<f64>,

    /// `true` where reflectivity is missing
    #[serde(default)]
    pub missing: Option<Array3<bool>>,
}

impl VerticalProfile {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        elevation: Array3<f64>,
        radial_velocity: Array3<f64>,
        radial_velocity_qc: Array3<i32>,
        radial_velocity_error: Array3<f64>,
        reflectivity: Array3<f64>,
        reflectivity_qc: Array3<i32>,
        reflectivity_error: Array3<f64>,
    ) -> Self {
        Self {
            elevation,
            radial_velocity,
            radial_velocity_qc,
            radial_velocity_error,
            reflectivity,
            reflectivity_qc,
            reflectivity_error,
            missing: None,
        }
    }

    pub fn with_missing_mask(mut self, missing: Array3<bool>) -> Self {
        self.missing = Some(missing);
        self
    }

    /// Declared level capacity: the leading dimension of the elevation array.
    pub fn level_capacity(&self) -> usize {
        self.elevation.dim().0
    }
}

/// Everything one radar contributes to an FM-128 file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadarObservationSet {
    pub station: Station,
    pub timestamp: NaiveDateTime,
    pub grid: ObservationGrid,
    pub profile: VerticalProfile,
}

impl RadarObservationSet {
    pub fn new(
        station: Station,
        timestamp: NaiveDateTime,
        grid: ObservationGrid,
        profile: VerticalProfile,
    ) -> Self {
        Self {
            station,
            timestamp,
            grid,
            profile,
        }
    }
}
