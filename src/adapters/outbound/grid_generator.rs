use rand::Rng;

use crate::common::DomainResult;
use crate::domains::planning::{GridCoord, GridScenario, GridSource, OccupancyGrid};

/// Grid source producing random occupancy fields: independent per-cell
/// obstacles plus a handful of rectangular blocks for structure, with
/// start and target placed near opposite corners and forced free.
pub struct RandomGridSource {
    width: i32,
    height: i32,
    obstacle_density: f64,
}

impl RandomGridSource {
    pub fn new(width: i32, height: i32, obstacle_density: f64) -> Self {
        Self {
            width,
            height,
            obstacle_density,
        }
    }
}

impl GridSource for RandomGridSource {
    fn build(&self) -> DomainResult<GridScenario> {
        let mut grid = OccupancyGrid::empty(self.width, self.height)?;
        let mut rng = rand::thread_rng();
        let density = self.obstacle_density.clamp(0.0, 1.0);

        for y in 0..self.height {
            for x in 0..self.width {
                if density > 0.0 && rng.gen_bool(density) {
                    grid.block(GridCoord::new(x, y));
                }
            }
        }

        // One rectangular block per ~400 cells.
        let rect_count = ((self.width * self.height) as f64 / 400.0).round() as i32;
        for _ in 0..rect_count {
            let rect_w = rng.gen_range(2..12).min(self.width);
            let rect_h = rng.gen_range(2..8).min(self.height);
            let rect_x = rng.gen_range(0..=self.width - rect_w);
            let rect_y = rng.gen_range(0..=self.height - rect_h);
            for y in rect_y..rect_y + rect_h {
                for x in rect_x..rect_x + rect_w {
                    grid.block(GridCoord::new(x, y));
                }
            }
        }

        let start = GridCoord::new(
            ((self.width as f64 * 0.05) as i32).clamp(1.min(self.width - 1), self.width - 1),
            ((self.height as f64 * 0.05) as i32).clamp(1.min(self.height - 1), self.height - 1),
        );
        let target = GridCoord::new(
            ((self.width as f64 * 0.9) as i32).clamp(0, (self.width - 2).max(0)),
            ((self.height as f64 * 0.85) as i32).clamp(0, (self.height - 2).max(0)),
        );
        grid.clear(start);
        grid.clear(target);

        Ok(GridScenario {
            name: format!("random-field-{}x{}", self.width, self.height),
            grid,
            start,
            target,
        })
    }
}
