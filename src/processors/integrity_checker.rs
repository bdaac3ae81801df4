use crate::models::{Fm128Document, RadarSection};

#[derive(Debug, Clone)]
pub struct IntegrityReport {
    pub declared_radars: usize,
    pub total_radars: usize,
    pub total_points: usize,
    pub total_measurements: usize,
    pub violations: Vec<Violation>,
    pub radar_statistics: Vec<RadarStatistics>,
}

impl IntegrityReport {
    pub fn is_consistent(&self) -> bool {
        self.violations.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct Violation {
    pub radar_index: Option<usize>,
    pub point_index: Option<usize>,
    pub violation_type: ViolationType,
    pub details: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViolationType {
    RadarCountMismatch,
    PointCountMismatch,
    LevelCountMismatch,
    LevelsExceedMaximum,
}

#[derive(Debug, Clone, Default)]
pub struct RadarStatistics {
    pub name: String,
    pub points: usize,
    pub measurements: usize,
    pub min_reflectivity: Option<f64>,
    pub max_reflectivity: Option<f64>,
}

/// Checks the counting invariants of a parsed FM-128 file: every declared
/// count must equal the number of records that actually follow it.
pub struct IntegrityChecker {
    max_reported: usize,
}

impl IntegrityChecker {
    pub fn new() -> Self {
        Self { max_reported: 10 }
    }

    pub fn with_max_reported(max_reported: usize) -> Self {
        Self { max_reported }
    }

    pub fn check_document(&self, document: &Fm128Document) -> IntegrityReport {
        let mut report = IntegrityReport {
            declared_radars: document.declared_radar_count,
            total_radars: document.radars.len(),
            total_points: document.total_points(),
            total_measurements: document.total_measurements(),
            violations: Vec::new(),
            radar_statistics: Vec::with_capacity(document.radars.len()),
        };

        if document.declared_radar_count != document.radars.len() {
            report.violations.push(Violation {
                radar_index: None,
                point_index: None,
                violation_type: ViolationType::RadarCountMismatch,
                details: format!(
                    "header declares {} radars, file contains {}",
                    document.declared_radar_count,
                    document.radars.len()
                ),
            });
        }

        for (index, radar) in document.radars.iter().enumerate() {
            self.check_radar(index, radar, &mut report);
            report.radar_statistics.push(radar_statistics(radar));
        }

        report
    }

    fn check_radar(&self, index: usize, radar: &RadarSection, report: &mut IntegrityReport) {
        let header = &radar.header;

        if header.point_count != radar.points.len() {
            report.violations.push(Violation {
                radar_index: Some(index),
                point_index: None,
                violation_type: ViolationType::PointCountMismatch,
                details: format!(
                    "radar '{}' declares {} points, found {}",
                    header.name,
                    header.point_count,
                    radar.points.len()
                ),
            });
        }

        for (point_index, point) in radar.points.iter().enumerate() {
            let declared = point.header.level_count;
            let found = point.measurements.len();

            if declared != found {
                report.violations.push(Violation {
                    radar_index: Some(index),
                    point_index: Some(point_index),
                    violation_type: ViolationType::LevelCountMismatch,
                    details: format!("point declares {} levels, found {}", declared, found),
                });
            }

            if found > header.max_levels {
                report.violations.push(Violation {
                    radar_index: Some(index),
                    point_index: Some(point_index),
                    violation_type: ViolationType::LevelsExceedMaximum,
                    details: format!(
                        "{} levels exceed the radar maximum of {}",
                        found, header.max_levels
                    ),
                });
            }
        }
    }

    pub fn generate_summary(&self, report: &IntegrityReport) -> String {
        let mut summary = String::new();

        summary.push_str("=== FM-128 Integrity Report ===\n");
        summary.push_str(&format!(
            "Radars: {} (declared {})\n",
            report.total_radars, report.declared_radars
        ));
        summary.push_str(&format!("Points: {}\n", report.total_points));
        summary.push_str(&format!("Measurements: {}\n", report.total_measurements));

        for stats in &report.radar_statistics {
            let range = match (stats.min_reflectivity, stats.max_reflectivity) {
                (Some(min), Some(max)) => format!("{:.1} to {:.1} dBZ", min, max),
                _ => "no data".to_string(),
            };
            summary.push_str(&format!(
                "  {:>12}: {} points, {} levels, reflectivity {}\n",
                stats.name, stats.points, stats.measurements, range
            ));
        }

        summary.push_str(&format!("\nViolations: {}\n", report.violations.len()));

        if !report.violations.is_empty() {
            let shown = report.violations.len().min(self.max_reported);
            summary.push_str(&format!("\nFirst {} Violations:\n", shown));
            for (i, violation) in report
                .violations
                .iter()
                .take(self.max_reported)
                .enumerate()
            {
                let location = match (violation.radar_index, violation.point_index) {
                    (Some(r), Some(p)) => format!("radar {} point {}", r, p),
                    (Some(r), None) => format!("radar {}", r),
                    _ => "file".to_string(),
                };
                summary.push_str(&format!(
                    "  {}. {:?} at {}: {}\n",
                    i + 1,
                    violation.violation_type,
                    location,
                    violation.details
                ));
            }
        }

        summary
    }
}

impl Default for IntegrityChecker {
    fn default() -> Self {
        Self::new()
    }
}

fn radar_statistics(radar: &RadarSection) -> RadarStatistics {
    let mut stats = RadarStatistics {
        name: radar.header.name.clone(),
        points: radar.points.len(),
        measurements: radar.measurement_count(),
        ..Default::default()
    };

    for line in radar.points.iter().flat_map(|p| &p.measurements) {
        let rf = line.reflectivity;
        if rf.is_nan() {
            continue;
        }
        stats.min_reflectivity = Some(stats.min_reflectivity.map_or(rf, |m| m.min(rf)));
        stats.max_reflectivity = Some(stats.max_reflectivity.map_or(rf, |m| m.max(rf)));
    }

    stats
}
