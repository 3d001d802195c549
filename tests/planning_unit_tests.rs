use kestrel_planner::domains::planning::*;

#[cfg(test)]
mod min_heap_tests {
    use super::*;

    #[test]
    fn test_pop_order_is_non_decreasing() {
        let mut heap = MinHeap::new();
        let priorities = [4.2, 0.5, 3.3, 0.5, 9.0, 1.25, 7.7, 2.0];
        for (item, priority) in priorities.iter().enumerate() {
            heap.push(item, *priority);
        }

        let mut last = f64::NEG_INFINITY;
        let mut popped = 0;
        while let Some(item) = heap.pop() {
            let priority = priorities[item];
            assert!(
                priority >= last,
                "popped priority {} after {}",
                priority,
                last
            );
            last = priority;
            popped += 1;
        }
        assert_eq!(popped, priorities.len());
    }

    #[test]
    fn test_empty_heap_pops_none() {
        let mut heap: MinHeap<usize> = MinHeap::new();
        assert!(heap.is_empty());
        assert_eq!(heap.pop(), None);
    }

    #[test]
    fn test_duplicate_items_are_kept() {
        // Lazy deletion: a superseded entry stays in the heap and comes
        // out after the better one.
        let mut heap = MinHeap::new();
        heap.push(7usize, 10.0);
        heap.push(7usize, 2.0);
        assert_eq!(heap.len(), 2);
        assert_eq!(heap.pop(), Some(7));
        assert_eq!(heap.pop(), Some(7));
        assert_eq!(heap.pop(), None);
    }

    #[test]
    fn test_len_tracks_push_and_pop() {
        let mut heap = MinHeap::new();
        assert_eq!(heap.len(), 0);
        heap.push("a", 1.0);
        heap.push("b", 0.5);
        assert_eq!(heap.len(), 2);
        heap.pop();
        assert_eq!(heap.len(), 1);
        assert!(!heap.is_empty());
    }
}

#[cfg(test)]
mod grid_tests {
    use super::*;

    #[test]
    fn test_grid_rejects_wrong_cell_count() {
        let result = OccupancyGrid::new(4, 4, vec![0; 15]);
        assert!(result.is_err());
    }

    #[test]
    fn test_grid_rejects_non_positive_dimensions() {
        assert!(OccupancyGrid::new(0, 4, vec![]).is_err());
        assert!(OccupancyGrid::new(4, -1, vec![]).is_err());
        assert!(OccupancyGrid::empty(0, 0).is_err());
    }

    #[test]
    fn test_index_and_coord_round_trip() {
        let grid = OccupancyGrid::empty(7, 5).unwrap();
        for index in 0..grid.cell_count() {
            let cell = grid.coord_of(index);
            assert!(grid.in_bounds(cell));
            assert_eq!(grid.index_of(cell), index);
        }
    }

    #[test]
    fn test_block_and_clear() {
        let mut grid = OccupancyGrid::empty(3, 3).unwrap();
        let cell = GridCoord::new(1, 2);
        assert!(grid.is_free(cell));
        grid.block(cell);
        assert!(grid.is_blocked(cell));
        grid.clear(cell);
        assert!(grid.is_free(cell));
    }

    #[test]
    fn test_nonzero_cell_values_are_blocked() {
        let grid = OccupancyGrid::new(2, 1, vec![0, 255]).unwrap();
        assert!(grid.is_free(GridCoord::new(0, 0)));
        assert!(grid.is_blocked(GridCoord::new(1, 0)));
    }
}

#[cfg(test)]
mod visibility_tests {
    use super::*;

    #[test]
    fn test_clear_diagonal_has_line_of_sight() {
        let grid = OccupancyGrid::empty(5, 5).unwrap();
        assert!(has_line_of_sight(
            &grid,
            GridCoord::new(0, 0),
            GridCoord::new(4, 4)
        ));
    }

    #[test]
    fn test_blocked_cell_on_diagonal_breaks_line_of_sight() {
        let mut grid = OccupancyGrid::empty(5, 5).unwrap();
        grid.block(GridCoord::new(2, 2));
        assert!(!has_line_of_sight(
            &grid,
            GridCoord::new(0, 0),
            GridCoord::new(4, 4)
        ));
    }

    #[test]
    fn test_blocked_endpoint_breaks_line_of_sight() {
        let mut grid = OccupancyGrid::empty(5, 5).unwrap();
        grid.block(GridCoord::new(4, 4));
        assert!(!has_line_of_sight(
            &grid,
            GridCoord::new(0, 0),
            GridCoord::new(4, 4)
        ));
    }

    #[test]
    fn test_out_of_bounds_endpoint_has_no_line_of_sight() {
        let grid = OccupancyGrid::empty(5, 5).unwrap();
        assert!(!has_line_of_sight(
            &grid,
            GridCoord::new(0, 0),
            GridCoord::new(5, 2)
        ));
    }

    #[test]
    fn test_walk_matches_reference_rasterization() {
        // From (0,0) to (4,2) the error-accumulation walk visits
        // (0,0), (1,0), (2,1), (3,1), (4,2) and nothing else.
        let mut grid = OccupancyGrid::empty(5, 5).unwrap();
        grid.block(GridCoord::new(1, 1));
        grid.block(GridCoord::new(2, 0));
        grid.block(GridCoord::new(3, 2));
        assert!(has_line_of_sight(
            &grid,
            GridCoord::new(0, 0),
            GridCoord::new(4, 2)
        ));

        // Blocking a visited cell flips the result.
        grid.block(GridCoord::new(2, 1));
        assert!(!has_line_of_sight(
            &grid,
            GridCoord::new(0, 0),
            GridCoord::new(4, 2)
        ));
    }

    #[test]
    fn test_line_of_sight_is_symmetric() {
        let mut grid = OccupancyGrid::empty(8, 8).unwrap();
        grid.block(GridCoord::new(3, 3));
        grid.block(GridCoord::new(5, 1));
        let probes = [
            (GridCoord::new(0, 0), GridCoord::new(7, 7)),
            (GridCoord::new(0, 7), GridCoord::new(7, 0)),
            (GridCoord::new(1, 2), GridCoord::new(6, 5)),
            (GridCoord::new(2, 2), GridCoord::new(2, 6)),
            (GridCoord::new(0, 4), GridCoord::new(7, 4)),
        ];
        for (a, b) in probes {
            assert_eq!(
                has_line_of_sight(&grid, a, b),
                has_line_of_sight(&grid, b, a),
                "asymmetric visibility between {:?} and {:?}",
                a,
                b
            );
        }
    }

    #[test]
    fn test_single_cell_line_of_sight() {
        let grid = OccupancyGrid::empty(3, 3).unwrap();
        let cell = GridCoord::new(1, 1);
        assert!(has_line_of_sight(&grid, cell, cell));
    }
}

#[cfg(test)]
mod planner_tests {
    use super::*;

    #[test]
    fn test_empty_grid_yields_direct_path() {
        let grid = OccupancyGrid::empty(5, 5).unwrap();
        let planner = ThetaStarPlanner::new(&grid);
        let path = planner
            .plan(GridCoord::new(0, 0), GridCoord::new(4, 4))
            .expect("open grid must be solvable");

        // Line of sight always succeeds, so the path is the straight
        // connection with no intermediate waypoints.
        assert_eq!(path, vec![GridCoord::new(0, 0), GridCoord::new(4, 4)]);
    }

    #[test]
    fn test_fully_blocked_row_yields_no_path() {
        let mut grid = OccupancyGrid::empty(5, 5).unwrap();
        for x in 0..5 {
            grid.block(GridCoord::new(x, 2));
        }
        let planner = ThetaStarPlanner::new(&grid);
        let path = planner.plan(GridCoord::new(0, 0), GridCoord::new(0, 4));
        assert_eq!(path, None);
    }

    #[test]
    fn test_identical_start_and_target() {
        let grid = OccupancyGrid::empty(5, 5).unwrap();
        let planner = ThetaStarPlanner::new(&grid);
        let cell = GridCoord::new(2, 3);
        let path = planner.plan(cell, cell).unwrap();
        assert_eq!(path, vec![cell]);
    }

    #[test]
    fn test_path_routes_through_gap() {
        // Vertical wall at x = 5 with a single gap at y = 7.
        let mut grid = OccupancyGrid::empty(10, 10).unwrap();
        for y in 0..10 {
            if y != 7 {
                grid.block(GridCoord::new(5, y));
            }
        }
        let start = GridCoord::new(0, 0);
        let target = GridCoord::new(9, 0);
        let planner = ThetaStarPlanner::new(&grid);
        let path = planner.plan(start, target).expect("gap must be passable");

        assert_eq!(*path.first().unwrap(), start);
        assert_eq!(*path.last().unwrap(), target);
        assert!(path.contains(&GridCoord::new(5, 7)) || path.len() > 2);
    }

    #[test]
    fn test_consecutive_waypoints_are_mutually_visible() {
        let mut grid = OccupancyGrid::empty(12, 12).unwrap();
        for y in 2..12 {
            grid.block(GridCoord::new(4, y));
        }
        for y in 0..9 {
            grid.block(GridCoord::new(8, y));
        }
        let start = GridCoord::new(0, 11);
        let target = GridCoord::new(11, 0);
        let planner = ThetaStarPlanner::new(&grid);
        let path = planner.plan(start, target).expect("maze must be solvable");

        assert_eq!(*path.first().unwrap(), start);
        assert_eq!(*path.last().unwrap(), target);
        for pair in path.windows(2) {
            assert_ne!(pair[0], pair[1], "duplicate consecutive waypoint");
            assert!(
                has_line_of_sight(&grid, pair[0], pair[1]),
                "waypoints {:?} and {:?} are not mutually visible",
                pair[0],
                pair[1]
            );
        }
    }

    #[test]
    fn test_planning_is_idempotent() {
        let mut grid = OccupancyGrid::empty(9, 9).unwrap();
        grid.block(GridCoord::new(4, 3));
        grid.block(GridCoord::new(4, 4));
        grid.block(GridCoord::new(4, 5));
        let planner = ThetaStarPlanner::new(&grid);
        let first = planner.plan(GridCoord::new(0, 4), GridCoord::new(8, 4));
        let second = planner.plan(GridCoord::new(0, 4), GridCoord::new(8, 4));
        assert_eq!(first, second);
    }

    #[test]
    fn test_unreachable_enclosed_target() {
        // Target boxed in on all sides.
        let mut grid = OccupancyGrid::empty(7, 7).unwrap();
        let target = GridCoord::new(3, 3);
        for dy in -1..=1 {
            for dx in -1..=1 {
                if dx != 0 || dy != 0 {
                    grid.block(GridCoord::new(target.x + dx, target.y + dy));
                }
            }
        }
        let planner = ThetaStarPlanner::new(&grid);
        assert_eq!(planner.plan(GridCoord::new(0, 0), target), None);
    }
}

#[cfg(test)]
mod coord_tests {
    use super::*;

    #[test]
    fn test_distance_is_euclidean() {
        let a = GridCoord::new(0, 0);
        let b = GridCoord::new(3, 4);
        assert!((a.distance_to(&b) - 5.0).abs() < 1e-12);
        assert_eq!(a.distance_to(&a), 0.0);
    }

    #[test]
    fn test_coord_serialization() {
        let cell = GridCoord::new(11, -2);
        let serialized = serde_json::to_string(&cell).unwrap();
        let deserialized: GridCoord = serde_json::from_str(&serialized).unwrap();
        assert_eq!(cell, deserialized);
    }
}
