use crate::error::{RadarError, Result};
use crate::models::{PointMode, RadarObservationSet};

/// Dimensions of one radar volume.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VolumeShape {
    pub levels: usize,
    pub rows: usize,
    pub cols: usize,
}

impl VolumeShape {
    pub fn as_vec(&self) -> Vec<usize> {
        vec![self.levels, self.rows, self.cols]
    }

    fn geolocation_shape(&self, mode: PointMode) -> Vec<usize> {
        match mode {
            PointMode::SharedGrid => vec![self.rows, self.cols],
            PointMode::PerLevelGrid => self.as_vec(),
        }
    }
}

/// Check every array of one radar against its elevation array.
///
/// `index` is the position of the radar in the caller's sequence and is
/// carried into the error so a bad grid can be traced upstream.
pub fn check_radar(index: usize, radar: &RadarObservationSet, mode: PointMode) -> Result<VolumeShape> {
    let profile = &radar.profile;
    let (levels, rows, cols) = profile.elevation.dim();
    let shape = VolumeShape { levels, rows, cols };
    let expected = shape.as_vec();

    let fields: [(&'static str, &[usize]); 6] = [
        ("radial_velocity", profile.radial_velocity.shape()),
        ("radial_velocity_qc", profile.radial_velocity_qc.shape()),
        ("radial_velocity_error", profile.radial_velocity_error.shape()),
        ("reflectivity", profile.reflectivity.shape()),
        ("reflectivity_qc", profile.reflectivity_qc.shape()),
        ("reflectivity_error", profile.reflectivity_error.shape()),
    ];
    for (field, got) in fields {
        expect_shape(index, field, &expected, got)?;
    }

    if let Some(mask) = &profile.missing {
        expect_shape(index, "missing", &expected, mask.shape())?;
    }

    let geolocation = shape.geolocation_shape(mode);
    expect_shape(index, "latitude", &geolocation, radar.grid.latitude.shape())?;
    expect_shape(index, "longitude", &geolocation, radar.grid.longitude.shape())?;

    Ok(shape)
}

fn expect_shape(radar: usize, field: &'static str, expected: &[usize], got: &[usize]) -> Result<()> {
    if expected != got {
        return Err(RadarError::DimensionMismatch {
            radar,
            field,
            expected: expected.to_vec(),
            got: got.to_vec(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ObservationGrid, Station, VerticalProfile};
    use chrono::NaiveDate;
    use ndarray::{Array2, Array3};

    fn radar(levels: usize, rows: usize, cols: usize, grid: ObservationGrid) -> RadarObservationSet {
        let shape = (levels, rows, cols);
        let profile = VerticalProfile::new(
            Array3::from_elem(shape, 422.0),
            Array3::from_elem(shape, 7.0),
            Array3::zeros(shape),
            Array3::from_elem(shape, 2.0),
            Array3::from_elem(shape, 4.2),
            Array3::zeros(shape),
            Array3::from_elem(shape, 1.3),
        );
        RadarObservationSet::new(
            Station::new("radar", 50.3, 10.6, 11.4),
            NaiveDate::from_ymd_opt(2002, 2, 2)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap(),
            grid,
            profile,
        )
    }

    #[test]
    fn test_shared_grid_accepted() {
        let grid = ObservationGrid::shared(Array2::zeros((3, 4)), Array2::zeros((3, 4)));
        let shape = check_radar(0, &radar(2, 3, 4, grid), PointMode::SharedGrid).unwrap();
        assert_eq!(
            shape,
            VolumeShape {
                levels: 2,
                rows: 3,
                cols: 4
            }
        );
    }

    #[test]
    fn test_per_level_mode_requires_level_dimension() {
        let grid = ObservationGrid::shared(Array2::zeros((3, 4)), Array2::zeros((3, 4)));
        let err = check_radar(2, &radar(2, 3, 4, grid), PointMode::PerLevelGrid).unwrap_err();
        match err {
            RadarError::DimensionMismatch {
                radar,
                field,
                expected,
                got,
            } => {
                assert_eq!(radar, 2);
                assert_eq!(field, "latitude");
                assert_eq!(expected, vec![2, 3, 4]);
                assert_eq!(got, vec![3, 4]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_measurement_shape_mismatch_names_field() {
        let grid = ObservationGrid::shared(Array2::zeros((3, 4)), Array2::zeros((3, 4)));
        let mut set = radar(2, 3, 4, grid);
        set.profile.reflectivity_error = Array3::zeros((2, 4, 3));

        let err = check_radar(0, &set, PointMode::SharedGrid).unwrap_err();
        assert!(matches!(
            err,
            RadarError::DimensionMismatch {
                field: "reflectivity_error",
                ..
            }
        ));
    }

    #[test]
    fn test_mask_shape_checked() {
        let grid = ObservationGrid::shared(Array2::zeros((3, 4)), Array2::zeros((3, 4)));
        let mut set = radar(2, 3, 4, grid);
        set.profile.missing = Some(Array3::from_elem((1, 3, 4), false));

        let err = check_radar(0, &set, PointMode::SharedGrid).unwrap_err();
        assert!(matches!(
            err,
            RadarError::DimensionMismatch { field: "missing", .. }
        ));
    }

    #[test]
    fn test_longitude_checked_separately() {
        let grid = ObservationGrid::shared(Array2::zeros((3, 4)), Array2::zeros((3, 5)));
        let err = check_radar(0, &radar(2, 3, 4, grid), PointMode::SharedGrid).unwrap_err();
        assert!(matches!(
            err,
            RadarError::DimensionMismatch { field: "longitude", .. }
        ));
    }
}
