use super::types::{GridScenario, PathPlanRequest, PathPlanResponse};
use crate::common::{ApplicationResult, DomainResult};
use async_trait::async_trait;

/// Port the planning domain depends on for obtaining occupancy grids
/// with initial endpoints. Adapters provide random generation, file
/// loading, or editor-driven sources.
pub trait GridSource: Send + Sync {
    fn build(&self) -> DomainResult<GridScenario>;
}

/// Port for presenting a planning response to the outside world.
pub trait PathRenderer: Send + Sync {
    fn render(&self, scenario: &GridScenario, response: &PathPlanResponse) -> String;
}

/// Async boundary port for issuing planning requests, so frontends and
/// tests can inject an alternative backend.
#[async_trait]
pub trait PathPlanningPort: Send + Sync {
    async fn plan(&self, request: PathPlanRequest) -> ApplicationResult<PathPlanResponse>;
}
