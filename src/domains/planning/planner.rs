use super::grid::OccupancyGrid;
use super::heap::MinHeap;
use super::types::GridCoord;
use super::visibility::has_line_of_sight;

/// Sentinel for a cell no path has reached yet.
const UNREACHED: usize = usize::MAX;

/// Any-angle planner over a borrowed occupancy grid.
///
/// Theta* extends A* by trying to link each neighbor straight to the
/// expanded cell's parent whenever the two are mutually visible, so
/// returned paths are not confined to the eight grid directions.
pub struct ThetaStarPlanner<'a> {
    grid: &'a OccupancyGrid,
}

impl<'a> ThetaStarPlanner<'a> {
    pub fn new(grid: &'a OccupancyGrid) -> Self {
        Self { grid }
    }

    /// Plan a path from `start` to `target`, both assumed in bounds and
    /// free (the service boundary rejects anything else before the
    /// search starts). Returns `None` when the target is unreachable.
    ///
    /// All search state is allocated fresh per call and discarded with
    /// the result; two calls with the same inputs return the same path.
    pub fn plan(&self, start: GridCoord, target: GridCoord) -> Option<Vec<GridCoord>> {
        let cell_count = self.grid.cell_count();
        let start_idx = self.grid.index_of(start);
        let target_idx = self.grid.index_of(target);

        let mut g_score = vec![f64::INFINITY; cell_count];
        let mut parent = vec![UNREACHED; cell_count];
        let mut closed = vec![false; cell_count];
        let mut open = MinHeap::new();

        g_score[start_idx] = 0.0;
        // The start is its own parent; reconstruction stops there.
        parent[start_idx] = start_idx;
        open.push(start_idx, start.distance_to(&target));

        while let Some(current_idx) = open.pop() {
            if closed[current_idx] {
                // Stale duplicate left behind by lazy deletion.
                continue;
            }
            closed[current_idx] = true;
            if current_idx == target_idx {
                break;
            }

            let current = self.grid.coord_of(current_idx);
            let parent_idx = parent[current_idx];
            let parent_cell = self.grid.coord_of(parent_idx);

            for neighbor in self.free_neighbors(current) {
                let neighbor_idx = self.grid.index_of(neighbor);

                if has_line_of_sight(self.grid, parent_cell, neighbor) {
                    // Any-angle shortcut: link the neighbor past the
                    // current cell, straight to its parent.
                    let tentative = g_score[parent_idx] + parent_cell.distance_to(&neighbor);
                    if tentative < g_score[neighbor_idx] {
                        g_score[neighbor_idx] = tentative;
                        parent[neighbor_idx] = parent_idx;
                        open.push(neighbor_idx, tentative + neighbor.distance_to(&target));
                    }
                } else {
                    // Standard discretized grid edge.
                    let tentative = g_score[current_idx] + current.distance_to(&neighbor);
                    if tentative < g_score[neighbor_idx] {
                        g_score[neighbor_idx] = tentative;
                        parent[neighbor_idx] = current_idx;
                        open.push(neighbor_idx, tentative + neighbor.distance_to(&target));
                    }
                }
            }
        }

        if parent[target_idx] == UNREACHED {
            return None;
        }
        Some(self.reconstruct(&parent, target_idx))
    }

    /// In-bounds, unblocked cells of the 8-connected neighborhood.
    fn free_neighbors(&self, cell: GridCoord) -> Vec<GridCoord> {
        let mut neighbors = Vec::with_capacity(8);
        for dy in -1..=1 {
            for dx in -1..=1 {
                if dx == 0 && dy == 0 {
                    continue;
                }
                let candidate = GridCoord::new(cell.x + dx, cell.y + dy);
                if self.grid.in_bounds(candidate) && self.grid.is_free(candidate) {
                    neighbors.push(candidate);
                }
            }
        }
        neighbors
    }

    fn reconstruct(&self, parent: &[usize], target_idx: usize) -> Vec<GridCoord> {
        let mut path = Vec::new();
        let mut current = target_idx;
        while parent[current] != current {
            path.push(self.grid.coord_of(current));
            current = parent[current];
        }
        path.push(self.grid.coord_of(current));
        path.reverse();
        path
    }
}
