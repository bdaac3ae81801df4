use chrono::NaiveDateTime;
use std::fmt;

use crate::utils::constants::{POINT_LABEL, RADAR_LABEL, TIMESTAMP_FORMAT};

/// Per-radar header line of an FM-128 file.
#[derive(Debug, Clone, PartialEq)]
pub struct RadarHeader {
    pub name: String,
    pub longitude: f64,
    pub latitude: f64,
    pub elevation: f64,
    pub timestamp: NaiveDateTime,
    pub point_count: usize,
    pub max_levels: usize,
}

impl fmt::Display for RadarHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:>5}  {:>12}{:8.3}  {:8.3}  {:8.1}  {:>19}{:6}{:6}",
            RADAR_LABEL,
            self.name,
            Fixed(self.longitude),
            Fixed(self.latitude),
            Fixed(self.elevation),
            format_timestamp(&self.timestamp),
            self.point_count,
            self.max_levels
        )
    }
}

/// Header line introducing one horizontal point.
#[derive(Debug, Clone, PartialEq)]
pub struct PointHeader {
    pub timestamp: NaiveDateTime,
    pub latitude: f64,
    pub longitude: f64,
    /// Station elevation, repeated on every point
    pub elevation: f64,
    pub level_count: usize,
}

impl fmt::Display for PointHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:>12}   {:>19}  {:12.3}  {:12.3}  {:8.1}  {:6}",
            POINT_LABEL,
            format_timestamp(&self.timestamp),
            Fixed(self.latitude),
            Fixed(self.longitude),
            Fixed(self.elevation),
            self.level_count
        )
    }
}

/// One vertical level at a point.
#[derive(Debug, Clone, PartialEq)]
pub struct MeasurementLine {
    pub elevation: f64,
    pub radial_velocity: f64,
    pub radial_velocity_qc: i32,
    pub radial_velocity_error: f64,
    pub reflectivity: f64,
    pub reflectivity_qc: i32,
    pub reflectivity_error: f64,
}

impl fmt::Display for MeasurementLine {
    // The two trailing spaces are part of the record layout.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "   {:12.1}{:12.3}{:4}{:12.3}  {:12.3}{:4}{:12.3}  ",
            Fixed(self.elevation),
            Fixed(self.radial_velocity),
            self.radial_velocity_qc,
            Fixed(self.radial_velocity_error),
            Fixed(self.reflectivity),
            self.reflectivity_qc,
            Fixed(self.reflectivity_error)
        )
    }
}

/// A point header together with the measurement lines that follow it.
#[derive(Debug, Clone, PartialEq)]
pub struct PointSection {
    pub header: PointHeader,
    pub measurements: Vec<MeasurementLine>,
}

/// One radar block of a parsed file.
#[derive(Debug, Clone, PartialEq)]
pub struct RadarSection {
    pub header: RadarHeader,
    pub points: Vec<PointSection>,
}

impl RadarSection {
    pub fn measurement_count(&self) -> usize {
        self.points.iter().map(|p| p.measurements.len()).sum()
    }
}

/// Parsed content of a whole FM-128 file.
#[derive(Debug, Clone, PartialEq)]
pub struct Fm128Document {
    pub declared_radar_count: usize,
    pub radars: Vec<RadarSection>,
}

impl Fm128Document {
    pub fn total_points(&self) -> usize {
        self.radars.iter().map(|r| r.points.len()).sum()
    }

    pub fn total_measurements(&self) -> usize {
        self.radars.iter().map(RadarSection::measurement_count).sum()
    }
}

/// Float field rendered the way C `printf` does, so NaN reads `nan`.
struct Fixed(f64);

impl fmt::Display for Fixed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_nan() {
            let width = f.width().unwrap_or(0);
            write!(f, "{:>width$}", "nan")
        } else {
            fmt::Display::fmt(&self.0, f)
        }
    }
}

pub fn format_timestamp(timestamp: &NaiveDateTime) -> String {
    timestamp.format(TIMESTAMP_FORMAT).to_string()
}
