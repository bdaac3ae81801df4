use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use ndarray::IxDyn;
use tracing::{debug, info, warn};
use validator::Validate;

use crate::error::{RadarError, Result};
use crate::models::{
    MeasurementLine, MissingDataPolicy, PointHeader, PointMode, RadarHeader, RadarObservationSet,
};
use crate::processors::{check_radar, LevelCounter, VolumeShape};
use crate::settings::EncoderSettings;
use crate::utils::constants::{
    FILE_SEPARATOR, MAX_COUNT_FIELD, MAX_RADAR_COUNT, RADAR_SEPARATOR, TOTAL_RADAR_LABEL,
};

/// Non-fatal conditions met while encoding. The file is still complete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EncodeWarning {
    EmptyInput,
    NoValidPoints { radar: usize, name: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RadarSummary {
    pub name: String,
    pub point_count: usize,
    pub max_levels: usize,
    pub measurement_count: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EncodeSummary {
    pub radars: Vec<RadarSummary>,
    pub warnings: Vec<EncodeWarning>,
}

impl EncodeSummary {
    pub fn total_points(&self) -> usize {
        self.radars.iter().map(|r| r.point_count).sum()
    }

    pub fn total_measurements(&self) -> usize {
        self.radars.iter().map(|r| r.measurement_count).sum()
    }

    pub fn summary(&self) -> String {
        let mut text = format!(
            "Radars: {}\nPoints: {}\nMeasurements: {}\n",
            self.radars.len(),
            self.total_points(),
            self.total_measurements()
        );
        for radar in &self.radars {
            text.push_str(&format!(
                "  {:>12}: {} points, max {} levels, {} measurements\n",
                radar.name, radar.point_count, radar.max_levels, radar.measurement_count
            ));
        }
        if !self.warnings.is_empty() {
            text.push_str(&format!("Warnings: {}\n", self.warnings.len()));
        }
        text
    }
}

/// Encodes radar observation sets into an FM-128 RADAR ASCII file.
pub struct Fm128Writer {
    point_mode: PointMode,
    missing_data_policy: MissingDataPolicy,
}

impl Fm128Writer {
    pub fn new() -> Self {
        Self {
            point_mode: PointMode::default(),
            missing_data_policy: MissingDataPolicy::default(),
        }
    }

    pub fn from_settings(settings: &EncoderSettings) -> Self {
        Self {
            point_mode: settings.point_mode,
            missing_data_policy: settings.missing_data_policy,
        }
    }

    pub fn with_point_mode(mut self, point_mode: PointMode) -> Self {
        self.point_mode = point_mode;
        self
    }

    pub fn with_missing_data_policy(mut self, policy: MissingDataPolicy) -> Self {
        self.missing_data_policy = policy;
        self
    }

    /// Create or truncate `path` and write all radars to it.
    ///
    /// The stream is flushed before returning on both the success and the
    /// error path. There is no rollback: after an error the file holds the
    /// sections written so far and should be discarded.
    pub fn write_file(&self, radars: &[RadarObservationSet], path: &Path) -> Result<EncodeSummary> {
        info!(
            "Writing {} radar(s) to {} ({:?}, {:?})",
            radars.len(),
            path.display(),
            self.point_mode,
            self.missing_data_policy
        );

        let file = File::create(path)?;
        let mut out = BufWriter::new(file);

        let written = self.write_to(radars, &mut out);
        let flushed = out.flush();

        let summary = written?;
        flushed?;
        Ok(summary)
    }

    /// Write all radars to an arbitrary sink.
    pub fn write_to<W: Write>(&self, radars: &[RadarObservationSet], out: &mut W) -> Result<EncodeSummary> {
        let mut summary = EncodeSummary::default();

        if radars.len() > MAX_RADAR_COUNT {
            return Err(RadarError::TooManyRadars {
                count: radars.len(),
                max: MAX_RADAR_COUNT,
            });
        }

        writeln!(out, "{}{:3}", TOTAL_RADAR_LABEL, radars.len())?;
        writeln!(out, "{}", FILE_SEPARATOR)?;
        writeln!(out)?;

        if radars.is_empty() {
            warn!("No radars supplied, writing global header only");
            summary.warnings.push(EncodeWarning::EmptyInput);
        }

        for (index, radar) in radars.iter().enumerate() {
            let section = self.write_radar(index, radar, out)?;

            if section.point_count == 0 {
                warn!("Radar {} ({}) has no valid points", index, radar.station.name);
                summary.warnings.push(EncodeWarning::NoValidPoints {
                    radar: index,
                    name: radar.station.name.clone(),
                });
            }
            summary.radars.push(section);
        }

        Ok(summary)
    }

    fn write_radar<W: Write>(
        &self,
        index: usize,
        radar: &RadarObservationSet,
        out: &mut W,
    ) -> Result<RadarSummary> {
        radar
            .station
            .validate()
            .map_err(|source| RadarError::InvalidStation { radar: index, source })?;
        let shape = check_radar(index, radar, self.point_mode)?;
        let counter = LevelCounter::new(&radar.profile, shape, self.missing_data_policy);

        let header = RadarHeader {
            name: radar.station.name.clone(),
            longitude: radar.station.longitude,
            latitude: radar.station.latitude,
            elevation: radar.station.elevation,
            timestamp: radar.timestamp,
            point_count: counter.point_count(self.point_mode),
            max_levels: counter.max_levels(self.point_mode),
        };

        // Point level counts never exceed max_levels, so checking the header covers them.
        check_count_field(index, "point count", header.point_count)?;
        check_count_field(index, "max levels", header.max_levels)?;

        debug!(
            "Radar {} ({}): shape {:?}, {} points, max {} levels",
            index,
            header.name,
            shape.as_vec(),
            header.point_count,
            header.max_levels
        );

        writeln!(out, "{}", header)?;
        writeln!(out, "{}", RADAR_SEPARATOR)?;
        writeln!(out)?;

        let measurement_count = match self.point_mode {
            PointMode::SharedGrid => write_shared_points(radar, shape, &counter, out)?,
            PointMode::PerLevelGrid => write_per_level_points(radar, shape, &counter, out)?,
        };

        Ok(RadarSummary {
            name: header.name,
            point_count: header.point_count,
            max_levels: header.max_levels,
            measurement_count,
        })
    }
}

impl Default for Fm128Writer {
    fn default() -> Self {
        Self::new()
    }
}

/// Encode `radars` into `output_path` with the default missing-data policy.
pub fn encode(radars: &[RadarObservationSet], output_path: &Path, point_mode: PointMode) -> Result<EncodeSummary> {
    Fm128Writer::new()
        .with_point_mode(point_mode)
        .write_file(radars, output_path)
}

fn check_count_field(radar: usize, field: &'static str, value: usize) -> Result<()> {
    if value > MAX_COUNT_FIELD {
        return Err(RadarError::FieldOverflow {
            radar,
            field,
            value,
            max: MAX_COUNT_FIELD,
        });
    }
    Ok(())
}

// Points in row-major order, each followed by its present levels.
fn write_shared_points<W: Write>(
    radar: &RadarObservationSet,
    shape: VolumeShape,
    counter: &LevelCounter<'_>,
    out: &mut W,
) -> Result<usize> {
    let mut written = 0;

    for row in 0..shape.rows {
        for col in 0..shape.cols {
            let levels = counter.levels_at(row, col);
            if levels == 0 {
                continue;
            }

            let header = PointHeader {
                timestamp: radar.timestamp,
                latitude: radar.grid.latitude[IxDyn(&[row, col])],
                longitude: radar.grid.longitude[IxDyn(&[row, col])],
                elevation: radar.station.elevation,
                level_count: levels,
            };
            writeln!(out, "{}", header)?;

            for level in 0..shape.levels {
                if !counter.is_present(level, row, col) {
                    continue;
                }
                writeln!(out, "{}", measurement(radar, level, row, col))?;
                written += 1;
            }
        }
    }

    Ok(written)
}

// Every (level, row, col) cell is a single-level point, level-major.
fn write_per_level_points<W: Write>(
    radar: &RadarObservationSet,
    shape: VolumeShape,
    counter: &LevelCounter<'_>,
    out: &mut W,
) -> Result<usize> {
    let mut written = 0;

    for level in 0..shape.levels {
        for row in 0..shape.rows {
            for col in 0..shape.cols {
                if !counter.is_present(level, row, col) {
                    continue;
                }

                let header = PointHeader {
                    timestamp: radar.timestamp,
                    latitude: radar.grid.latitude[IxDyn(&[level, row, col])],
                    longitude: radar.grid.longitude[IxDyn(&[level, row, col])],
                    elevation: radar.station.elevation,
                    level_count: 1,
                };
                writeln!(out, "{}", header)?;
                writeln!(out, "{}", measurement(radar, level, row, col))?;
                written += 1;
            }
        }
    }

    Ok(written)
}

fn measurement(radar: &RadarObservationSet, level: usize, row: usize, col: usize) -> MeasurementLine {
    let p = &radar.profile;
    let idx = [level, row, col];
    MeasurementLine {
        elevation: p.elevation[idx],
        radial_velocity: p.radial_velocity[idx],
        radial_velocity_qc: p.radial_velocity_qc[idx],
        radial_velocity_error: p.radial_velocity_error[idx],
        reflectivity: p.reflectivity[idx],
        reflectivity_qc: p.reflectivity_qc[idx],
        reflectivity_error: p.reflectivity_error[idx],
    }
}
