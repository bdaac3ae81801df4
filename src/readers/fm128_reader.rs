use chrono::NaiveDateTime;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use crate::error::{RadarError, Result};
use crate::models::{
    Fm128Document, MeasurementLine, PointHeader, PointSection, RadarHeader, RadarSection,
};
use crate::utils::constants::*;

/// Parses FM-128 RADAR ASCII files back into typed records using the fixed
/// column layout. Counts are taken as declared; use the integrity checker
/// to compare them with what actually follows.
pub struct Fm128Reader;

impl Fm128Reader {
    pub fn new() -> Self {
        Self
    }

    pub fn read_file(&self, path: &Path) -> Result<Fm128Document> {
        let text = fs::read_to_string(path)?;
        self.parse_str(&text)
    }

    pub fn parse_str(&self, text: &str) -> Result<Fm128Document> {
        let mut declared_radar_count = None;
        let mut radars: Vec<RadarSection> = Vec::new();

        for (index, line) in text.lines().enumerate() {
            let line_no = index + 1;

            if line.trim().is_empty() || line.starts_with('#') {
                continue;
            }

            if let Some(count) = line.strip_prefix(TOTAL_RADAR_LABEL) {
                declared_radar_count = Some(parse_value::<usize>(count, line_no, "radar count")?);
            } else if line.starts_with(POINT_LABEL) {
                let point = PointSection {
                    header: self.parse_point_header(line, line_no)?,
                    measurements: Vec::new(),
                };
                radars
                    .last_mut()
                    .ok_or_else(|| format_error(line_no, "point header before any radar header"))?
                    .points
                    .push(point);
            } else if line.starts_with(RADAR_LABEL) {
                radars.push(RadarSection {
                    header: self.parse_radar_header(line, line_no)?,
                    points: Vec::new(),
                });
            } else {
                let measurement = self.parse_measurement(line, line_no)?;
                radars
                    .last_mut()
                    .and_then(|r| r.points.last_mut())
                    .ok_or_else(|| format_error(line_no, "measurement line before any point header"))?
                    .measurements
                    .push(measurement);
            }
        }

        let declared_radar_count = declared_radar_count
            .ok_or_else(|| format_error(1, "missing 'TOTAL RADAR' header"))?;

        Ok(Fm128Document {
            declared_radar_count,
            radars,
        })
    }

    fn parse_radar_header(&self, line: &str, line_no: usize) -> Result<RadarHeader> {
        Ok(RadarHeader {
            name: column(line, RADAR_NAME_COLUMNS, line_no, "radar name")?.to_string(),
            longitude: field(line, RADAR_LON_COLUMNS, line_no, "station longitude")?,
            latitude: field(line, RADAR_LAT_COLUMNS, line_no, "station latitude")?,
            elevation: field(line, RADAR_ELV_COLUMNS, line_no, "station elevation")?,
            timestamp: timestamp(line, RADAR_TIME_COLUMNS, line_no)?,
            point_count: field(line, RADAR_POINTS_COLUMNS, line_no, "point count")?,
            max_levels: field(line, RADAR_LEVELS_COLUMNS, line_no, "max levels")?,
        })
    }

    fn parse_point_header(&self, line: &str, line_no: usize) -> Result<PointHeader> {
        Ok(PointHeader {
            timestamp: timestamp(line, POINT_TIME_COLUMNS, line_no)?,
            latitude: field(line, POINT_LAT_COLUMNS, line_no, "latitude")?,
            longitude: field(line, POINT_LON_COLUMNS, line_no, "longitude")?,
            elevation: field(line, POINT_ELV_COLUMNS, line_no, "elevation")?,
            level_count: field(line, POINT_LEVELS_COLUMNS, line_no, "level count")?,
        })
    }

    fn parse_measurement(&self, line: &str, line_no: usize) -> Result<MeasurementLine> {
        Ok(MeasurementLine {
            elevation: field(line, LEVEL_ELV_COLUMNS, line_no, "elevation")?,
            radial_velocity: field(line, LEVEL_RV_COLUMNS, line_no, "radial velocity")?,
            radial_velocity_qc: field(line, LEVEL_RV_QC_COLUMNS, line_no, "radial velocity qc")?,
            radial_velocity_error: field(line, LEVEL_RV_ERR_COLUMNS, line_no, "radial velocity error")?,
            reflectivity: field(line, LEVEL_RF_COLUMNS, line_no, "reflectivity")?,
            reflectivity_qc: field(line, LEVEL_RF_QC_COLUMNS, line_no, "reflectivity qc")?,
            reflectivity_error: field(line, LEVEL_RF_ERR_COLUMNS, line_no, "reflectivity error")?,
        })
    }
}

impl Default for Fm128Reader {
    fn default() -> Self {
        Self::new()
    }
}

fn format_error(line: usize, message: impl Into<String>) -> RadarError {
    RadarError::InvalidFormat {
        line,
        message: message.into(),
    }
}

fn column<'a>(line: &'a str, (start, end): (usize, usize), line_no: usize, name: &str) -> Result<&'a str> {
    line.get(start..end)
        .map(str::trim)
        .ok_or_else(|| format_error(line_no, format!("line too short for {}", name)))
}

fn field<T: FromStr>(line: &str, columns: (usize, usize), line_no: usize, name: &str) -> Result<T> {
    parse_value(column(line, columns, line_no, name)?, line_no, name)
}

fn parse_value<T: FromStr>(raw: &str, line_no: usize, name: &str) -> Result<T> {
    raw.trim()
        .parse::<T>()
        .map_err(|_| format_error(line_no, format!("invalid {}: '{}'", name, raw.trim())))
}

fn timestamp(line: &str, columns: (usize, usize), line_no: usize) -> Result<NaiveDateTime> {
    let raw = column(line, columns, line_no, "timestamp")?;
    NaiveDateTime::parse_from_str(raw, TIMESTAMP_FORMAT)
        .map_err(|e| format_error(line_no, format!("invalid timestamp '{}': {}", raw, e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const SAMPLE: &str = concat!(
        "TOTAL RADAR =   1\n",
        "#-----------------------------#\n",
        "\n",
        "RADAR         radar  10.600    50.300      11.4  2002-02-02 00:00:00     1     2\n",
        "#---------------------------------------------------------#\n",
        "\n",
        "FM-128 RADAR   2002-02-02 00:00:00        51.200        11.200      11.4       2\n",
        "          422.0       7.000   0       2.000         4.200   0       1.300  \n",
        "          844.5      -3.250   1       2.000       -12.000   2       1.300  \n",
    );

    #[test]
    fn test_parse_sample() {
        let document = Fm128Reader::new().parse_str(SAMPLE).unwrap();

        assert_eq!(document.declared_radar_count, 1);
        assert_eq!(document.radars.len(), 1);

        let radar = &document.radars[0];
        assert_eq!(radar.header.name, "radar");
        assert_eq!(radar.header.longitude, 10.6);
        assert_eq!(radar.header.latitude, 50.3);
        assert_eq!(radar.header.point_count, 1);
        assert_eq!(radar.header.max_levels, 2);
        assert_eq!(radar.header.timestamp.to_string(), "2002-02-02 00:00:00");

        let point = &radar.points[0];
        assert_eq!(point.header.latitude, 51.2);
        assert_eq!(point.header.level_count, 2);
        assert_eq!(point.measurements.len(), 2);
        assert_eq!(point.measurements[1].elevation, 844.5);
        assert_eq!(point.measurements[1].radial_velocity, -3.25);
        assert_eq!(point.measurements[1].radial_velocity_qc, 1);
        assert_eq!(point.measurements[1].reflectivity, -12.0);
        assert_eq!(point.measurements[1].reflectivity_qc, 2);
    }

    #[test]
    fn test_trailing_whitespace_is_optional() {
        let trimmed: String = SAMPLE.lines().map(|l| format!("{}\n", l.trim_end())).collect();
        let document = Fm128Reader::new().parse_str(&trimmed).unwrap();
        assert_eq!(document.total_measurements(), 2);
    }

    #[test]
    fn test_reports_line_of_bad_field() {
        let broken = SAMPLE.replace("       7.000", "       x.xxx");
        let err = Fm128Reader::new().parse_str(&broken).unwrap_err();
        match err {
            RadarError::InvalidFormat { line, message } => {
                assert_eq!(line, 8);
                assert!(message.contains("radial velocity"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_measurement_without_point_rejected() {
        let text = "TOTAL RADAR =   0\n          422.0       7.000   0       2.000         4.200   0       1.300  \n";
        let err = Fm128Reader::new().parse_str(text).unwrap_err();
        assert!(matches!(err, RadarError::InvalidFormat { line: 2, .. }));
    }

    #[test]
    fn test_missing_global_header() {
        let err = Fm128Reader::new().parse_str("").unwrap_err();
        assert!(matches!(err, RadarError::InvalidFormat { .. }));
    }

    #[test]
    fn test_read_file() -> Result<()> {
        let mut temp_file = NamedTempFile::new()?;
        write!(temp_file, "{}", SAMPLE)?;

        let document = Fm128Reader::new().read_file(temp_file.path())?;
        assert_eq!(document.total_points(), 1);
        Ok(())
    }
}
