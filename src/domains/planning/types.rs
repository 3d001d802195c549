use super::grid::OccupancyGrid;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridCoord {
    pub x: i32,
    pub y: i32,
}

impl GridCoord {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another cell.
    pub fn distance_to(&self, other: &GridCoord) -> f64 {
        let dx = (self.x - other.x) as f64;
        let dy = (self.y - other.y) as f64;
        (dx * dx + dy * dy).sqrt()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathPlanRequest {
    pub request_id: String,
    pub grid: OccupancyGrid,
    pub start: GridCoord,
    pub target: GridCoord,
    pub created_at: DateTime<Utc>,
}

impl PathPlanRequest {
    pub fn new(grid: OccupancyGrid, start: GridCoord, target: GridCoord) -> Self {
        Self {
            request_id: format!("req-{}", Uuid::new_v4()),
            grid,
            start,
            target,
            created_at: Utc::now(),
        }
    }
}

/// Planning outcome in the shape the caller consumes it: a rejected
/// request carries a message, a served request carries the (possibly
/// absent) path and the search time in milliseconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum PathPlanResponse {
    Ok {
        path: Option<Vec<GridCoord>>,
        time_ms: f64,
    },
    Error {
        message: String,
    },
}

/// A grid together with the endpoints a caller wants connected.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridScenario {
    pub name: String,
    pub grid: OccupancyGrid,
    pub start: GridCoord,
    pub target: GridCoord,
}
