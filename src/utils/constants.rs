/// Timestamp layout used in radar and point headers
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Record prefixes
pub const TOTAL_RADAR_LABEL: &str = "TOTAL RADAR = ";
pub const RADAR_LABEL: &str = "RADAR";
pub const POINT_LABEL: &str = "FM-128 RADAR";

/// Section separators
pub const FILE_SEPARATOR: &str = "#-----------------------------#";
pub const RADAR_SEPARATOR: &str = "#---------------------------------------------------------#";

/// Largest values that fit the `%3d` radar count and `%6d` count fields
pub const MAX_RADAR_COUNT: usize = 999;
pub const MAX_COUNT_FIELD: usize = 999_999;

/// Column layout of the radar header line
pub const RADAR_NAME_COLUMNS: (usize, usize) = (7, 19);
pub const RADAR_LON_COLUMNS: (usize, usize) = (19, 27);
pub const RADAR_LAT_COLUMNS: (usize, usize) = (29, 37);
pub const RADAR_ELV_COLUMNS: (usize, usize) = (39, 47);
pub const RADAR_TIME_COLUMNS: (usize, usize) = (49, 68);
pub const RADAR_POINTS_COLUMNS: (usize, usize) = (68, 74);
pub const RADAR_LEVELS_COLUMNS: (usize, usize) = (74, 80);

/// Column layout of the point header line
pub const POINT_TIME_COLUMNS: (usize, usize) = (15, 34);
pub const POINT_LAT_COLUMNS: (usize, usize) = (36, 48);
pub const POINT_LON_COLUMNS: (usize, usize) = (50, 62);
pub const POINT_ELV_COLUMNS: (usize, usize) = (64, 72);
pub const POINT_LEVELS_COLUMNS: (usize, usize) = (74, 80);

/// Column layout of the measurement line
pub const LEVEL_ELV_COLUMNS: (usize, usize) = (3, 15);
pub const LEVEL_RV_COLUMNS: (usize, usize) = (15, 27);
pub const LEVEL_RV_QC_COLUMNS: (usize, usize) = (27, 31);
pub const LEVEL_RV_ERR_COLUMNS: (usize, usize) = (31, 43);
pub const LEVEL_RF_COLUMNS: (usize, usize) = (45, 57);
pub const LEVEL_RF_QC_COLUMNS: (usize, usize) = (57, 61);
pub const LEVEL_RF_ERR_COLUMNS: (usize, usize) = (61, 73);

/// Defaults
pub const DEFAULT_OUTPUT_FILE: &str = "fm128_radar.out";
pub const ENV_PREFIX: &str = "FM128";
