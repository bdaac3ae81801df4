use ndarray::{s, ArrayView1, ArrayView3};

use crate::models::{MissingDataPolicy, PointMode, VerticalProfile};
use crate::processors::VolumeShape;

/// Number of levels at one point that will be written.
///
/// Without a mask every declared level counts.
pub fn valid_level_count(missing: Option<ArrayView1<'_, bool>>, declared_levels: usize) -> usize {
    match missing {
        Some(mask) => mask.iter().filter(|&&m| !m).count(),
        None => declared_levels,
    }
}

/// Number of `rows × cols` points with at least one present level.
pub fn valid_point_count(missing: Option<ArrayView3<'_, bool>>, shape: VolumeShape) -> usize {
    if shape.levels == 0 {
        return 0;
    }
    match missing {
        Some(mask) => {
            let mut count = 0;
            for row in 0..shape.rows {
                for col in 0..shape.cols {
                    if mask.slice(s![.., row, col]).iter().any(|&m| !m) {
                        count += 1;
                    }
                }
            }
            count
        }
        None => shape.rows * shape.cols,
    }
}

/// Resolves which samples of one radar volume are present, applying the
/// caller's [`MissingDataPolicy`] once instead of per level.
pub struct LevelCounter<'a> {
    missing: Option<ArrayView3<'a, bool>>,
    shape: VolumeShape,
}

impl<'a> LevelCounter<'a> {
    pub fn new(profile: &'a VerticalProfile, shape: VolumeShape, policy: MissingDataPolicy) -> Self {
        let missing = match policy {
            MissingDataPolicy::Mask => profile.missing.as_ref().map(|m| m.view()),
            MissingDataPolicy::None => None,
        };
        Self { missing, shape }
    }

    pub fn is_present(&self, level: usize, row: usize, col: usize) -> bool {
        match &self.missing {
            Some(mask) => !mask[[level, row, col]],
            None => true,
        }
    }

    pub fn levels_at(&self, row: usize, col: usize) -> usize {
        let at_point = self.missing.as_ref().map(|m| m.slice(s![.., row, col]));
        valid_level_count(at_point, self.shape.levels)
    }

    /// Points that will get a point header under `mode`.
    pub fn point_count(&self, mode: PointMode) -> usize {
        match mode {
            PointMode::SharedGrid => valid_point_count(self.missing.clone(), self.shape),
            PointMode::PerLevelGrid => match &self.missing {
                Some(mask) => mask.iter().filter(|&&m| !m).count(),
                None => self.shape.levels * self.shape.rows * self.shape.cols,
            },
        }
    }

    /// Level capacity declared in the radar header. A per-level grid turns
    /// each cell into its own single-level point, so it declares 1 rather
    /// than the elevation array's level dimension.
    pub fn max_levels(&self, mode: PointMode) -> usize {
        match mode {
            PointMode::SharedGrid => self.shape.levels,
            PointMode::PerLevelGrid => 1,
        }
    }
}
