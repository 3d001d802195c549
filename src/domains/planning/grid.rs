use super::types::GridCoord;
use crate::common::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};

/// Flat row-major occupancy map: cell `(x, y)` lives at index
/// `y * width + x`. A cell value of 0 is free, anything else is blocked.
/// The grid is immutable for the duration of one planning request; the
/// planner only reads it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OccupancyGrid {
    width: i32,
    height: i32,
    cells: Vec<u8>,
}

impl OccupancyGrid {
    pub fn new(width: i32, height: i32, cells: Vec<u8>) -> DomainResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(DomainError::MalformedGrid {
                reason: format!("grid dimensions must be positive, got {}x{}", width, height),
            });
        }
        let expected = width as usize * height as usize;
        if cells.len() != expected {
            return Err(DomainError::MalformedGrid {
                reason: format!(
                    "expected {} cells for a {}x{} grid, got {}",
                    expected,
                    width,
                    height,
                    cells.len()
                ),
            });
        }
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// A grid of the given size with every cell free.
    pub fn empty(width: i32, height: i32) -> DomainResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(DomainError::MalformedGrid {
                reason: format!("grid dimensions must be positive, got {}x{}", width, height),
            });
        }
        let cells = vec![0; width as usize * height as usize];
        Self::new(width, height, cells)
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    pub fn in_bounds(&self, cell: GridCoord) -> bool {
        cell.x >= 0 && cell.x < self.width && cell.y >= 0 && cell.y < self.height
    }

    /// Row-major index of an in-bounds cell.
    pub fn index_of(&self, cell: GridCoord) -> usize {
        (cell.y * self.width + cell.x) as usize
    }

    /// Inverse of [`index_of`](Self::index_of).
    pub fn coord_of(&self, index: usize) -> GridCoord {
        GridCoord::new(index as i32 % self.width, index as i32 / self.width)
    }

    pub fn is_blocked(&self, cell: GridCoord) -> bool {
        self.cells[self.index_of(cell)] != 0
    }

    pub fn is_free(&self, cell: GridCoord) -> bool {
        !self.is_blocked(cell)
    }

    pub fn block(&mut self, cell: GridCoord) {
        let index = self.index_of(cell);
        self.cells[index] = 1;
    }

    pub fn clear(&mut self, cell: GridCoord) {
        let index = self.index_of(cell);
        self.cells[index] = 0;
    }
}
