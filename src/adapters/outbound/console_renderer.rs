use crate::domains::planning::{GridCoord, GridScenario, PathPlanResponse, PathRenderer};

/// Text renderer for grids and planning responses: `#` blocked, `.`
/// free, `*` path waypoint, `S` start, `T` target, followed by a
/// status line.
pub struct ConsoleRenderer;

impl PathRenderer for ConsoleRenderer {
    fn render(&self, scenario: &GridScenario, response: &PathPlanResponse) -> String {
        let grid = &scenario.grid;
        let waypoints: &[GridCoord] = match response {
            PathPlanResponse::Ok {
                path: Some(path), ..
            } => path,
            _ => &[],
        };

        let mut out = String::with_capacity((grid.width() as usize + 1) * grid.height() as usize);
        for y in 0..grid.height() {
            for x in 0..grid.width() {
                let cell = GridCoord::new(x, y);
                let glyph = if cell == scenario.start {
                    'S'
                } else if cell == scenario.target {
                    'T'
                } else if waypoints.contains(&cell) {
                    '*'
                } else if grid.is_blocked(cell) {
                    '#'
                } else {
                    '.'
                };
                out.push(glyph);
            }
            out.push('\n');
        }

        match response {
            PathPlanResponse::Ok {
                path: Some(path),
                time_ms,
            } => {
                out.push_str(&format!(
                    "path: {} waypoints in {:.1} ms\n",
                    path.len(),
                    time_ms
                ));
            }
            PathPlanResponse::Ok {
                path: None,
                time_ms,
            } => {
                out.push_str(&format!("no path found ({:.1} ms)\n", time_ms));
            }
            PathPlanResponse::Error { message } => {
                out.push_str(&format!("error: {}\n", message));
            }
        }
        out
    }
}
