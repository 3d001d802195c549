use super::grid::OccupancyGrid;
use super::types::GridCoord;

/// Walks the integer line from `from` to `to` inclusive and reports
/// whether every traversed cell is in bounds and free.
///
/// Classic Bresenham error accumulation. Both axis conditions may fire
/// in the same iteration, so a strictly diagonal line visits only the
/// diagonal cells; the visited sequence is deterministic for fixed
/// endpoints.
pub fn has_line_of_sight(grid: &OccupancyGrid, from: GridCoord, to: GridCoord) -> bool {
    let dx = (to.x - from.x).abs();
    let dy = (to.y - from.y).abs();
    let sx = if from.x < to.x { 1 } else { -1 };
    let sy = if from.y < to.y { 1 } else { -1 };
    let mut err = dx - dy;

    let mut x = from.x;
    let mut y = from.y;
    loop {
        let cell = GridCoord::new(x, y);
        if !grid.in_bounds(cell) || grid.is_blocked(cell) {
            return false;
        }
        if x == to.x && y == to.y {
            return true;
        }
        let e2 = err * 2;
        if e2 > -dy {
            err -= dy;
            x += sx;
        }
        if e2 < dx {
            err += dx;
            y += sy;
        }
    }
}
