use tracing::debug;

use super::{InflationStats, Kernel, inflate};
use crate::grid::Costmap;
use crate::region::{extract, merge};
use crate::types::{COST_INFLATED, COST_OCCUPIED, CellRegion, CostmapError};

/// Outcome of one [`RegionInflator::inflate_region`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InflationReport {
    pub region: CellRegion,
    pub stats: InflationStats,
}

/// Inflates obstacles inside a window of a costmap.
///
/// The window is copied out, inflated on its own (kernel taps stop at the
/// window edge) and written back over the same cells. Nothing outside the
/// window is read or written.
#[derive(Debug, Clone)]
pub struct RegionInflator {
    occupied_value: u8,
    inflated_value: u8,
    kernel: Kernel,
    strict_values: bool,
}

impl RegionInflator {
    /// Inflator using [`COST_OCCUPIED`] and [`COST_INFLATED`].
    pub fn new(kernel: Kernel) -> Self {
        Self {
            occupied_value: COST_OCCUPIED,
            inflated_value: COST_INFLATED,
            kernel,
            strict_values: false,
        }
    }

    pub fn with_values(mut self, occupied_value: u8, inflated_value: u8) -> Self {
        self.occupied_value = occupied_value;
        self.inflated_value = inflated_value;
        self
    }

    /// When set, equal occupied and inflated values fail with
    /// [`CostmapError::InvalidValue`] instead of only being logged.
    pub fn strict(mut self, strict_values: bool) -> Self {
        self.strict_values = strict_values;
        self
    }

    pub fn occupied_value(&self) -> u8 {
        self.occupied_value
    }

    pub fn inflated_value(&self) -> u8 {
        self.inflated_value
    }

    pub fn kernel(&self) -> &Kernel {
        &self.kernel
    }

    /// Reject an occupied value equal to the inflated value.
    pub fn validate(&self) -> Result<(), CostmapError> {
        if self.occupied_value == self.inflated_value {
            return Err(CostmapError::InvalidValue(format!(
                "occupied and inflated values are both {}",
                self.occupied_value
            )));
        }
        Ok(())
    }

    /// Inflate a standalone sub-grid in place.
    pub fn inflate(&self, sub: &mut Costmap) -> Result<InflationStats, CostmapError> {
        if self.strict_values {
            self.validate()?;
        }
        Ok(inflate(
            sub,
            self.occupied_value,
            &self.kernel,
            self.inflated_value,
        ))
    }

    /// Extract `region` from `grid`, inflate it and merge it back.
    ///
    /// On error `grid` is left untouched.
    pub fn inflate_region(
        &self,
        grid: &mut Costmap,
        region: CellRegion,
    ) -> Result<InflationReport, CostmapError> {
        let mut sub = extract(grid, region)?;
        debug!(
            ?region,
            width = sub.width(),
            height = sub.height(),
            "extracted region"
        );

        let stats = self.inflate(&mut sub)?;
        debug!(
            occupied = stats.occupied,
            inflated = stats.inflated,
            kernel = self.kernel.size(),
            "inflated region"
        );

        merge(grid, region, &sub)?;
        Ok(InflationReport { region, stats })
    }
}

#[cfg(test)]
mod tests {
    use glam::UVec2;

    use super::*;
    use crate::grid::Grid2d;
    use crate::types::{COST_FREE, MapInfo};

    fn grid_with_obstacle(at: UVec2) -> Costmap {
        let mut grid = Grid2d::filled(MapInfo::new(20, 20), COST_FREE).unwrap();
        grid.set(at, COST_OCCUPIED).unwrap();
        grid
    }

    #[test]
    fn inflates_only_inside_region() {
        let mut grid = grid_with_obstacle(UVec2::new(10, 10));
        let inflator = RegionInflator::new(Kernel::uniform(5).unwrap());
        let region = CellRegion::new(9, 9, 15, 15);

        let report = inflator.inflate_region(&mut grid, region).unwrap();

        // Inside the window the 5x5 footprint is clipped at x = 9, y = 9.
        assert_eq!(report.stats.occupied, 1);
        assert_eq!(report.stats.inflated, 4 * 4 - 1);
        assert_eq!(grid.get(UVec2::new(9, 9)).copied(), Some(COST_INFLATED));
        assert_eq!(grid.get(UVec2::new(12, 12)).copied(), Some(COST_INFLATED));
        assert_eq!(grid.get(UVec2::new(13, 12)).copied(), Some(COST_FREE));
        // The same footprint outside the window is untouched.
        assert_eq!(grid.get(UVec2::new(8, 8)).copied(), Some(COST_FREE));
        assert_eq!(grid.get(UVec2::new(10, 10)).copied(), Some(COST_OCCUPIED));
    }

    #[test]
    fn obstacles_outside_region_do_not_contribute() {
        let mut grid = grid_with_obstacle(UVec2::new(5, 5));
        let before = grid.clone();
        let inflator = RegionInflator::new(Kernel::uniform(7).unwrap());

        let report = inflator
            .inflate_region(&mut grid, CellRegion::new(6, 6, 12, 12))
            .unwrap();

        assert_eq!(report.stats, InflationStats::default());
        assert_eq!(grid, before);
    }

    #[test]
    fn invalid_region_is_reported_without_writes() {
        let mut grid = grid_with_obstacle(UVec2::new(5, 5));
        let before = grid.clone();
        let inflator = RegionInflator::new(Kernel::uniform(3).unwrap());

        let result = inflator.inflate_region(&mut grid, CellRegion::new(15, 15, 25, 19));
        assert!(matches!(result, Err(CostmapError::InvalidRegion(_))));
        assert_eq!(grid, before);
    }

    #[test]
    fn strict_mode_rejects_equal_values() {
        let mut grid = grid_with_obstacle(UVec2::new(5, 5));
        let before = grid.clone();
        let inflator = RegionInflator::new(Kernel::uniform(3).unwrap())
            .with_values(42, 42)
            .strict(true);

        let result = inflator.inflate_region(&mut grid, CellRegion::new(0, 0, 19, 19));
        assert!(matches!(result, Err(CostmapError::InvalidValue(_))));
        assert_eq!(grid, before);
    }

    #[test]
    fn lenient_mode_allows_equal_values() {
        let mut grid = grid_with_obstacle(UVec2::new(5, 5));
        let inflator = RegionInflator::new(Kernel::uniform(3).unwrap())
            .with_values(COST_OCCUPIED, COST_OCCUPIED);
        assert!(inflator.validate().is_err());

        let report = inflator
            .inflate_region(&mut grid, CellRegion::new(0, 0, 19, 19))
            .unwrap();
        assert_eq!(report.stats.inflated, 8);
    }
}
