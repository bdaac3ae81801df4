pub mod integrity_checker;
pub mod level_counter;
pub mod shape_checker;

pub use integrity_checker::{IntegrityChecker, IntegrityReport, RadarStatistics, Violation, ViolationType};
pub use level_counter::{valid_level_count, valid_point_count, LevelCounter};
pub use shape_checker::{check_radar, VolumeShape};
