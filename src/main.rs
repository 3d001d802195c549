use kestrel_planner::Config;
use std::error::Error;
use tracing::{info, warn};

use kestrel_planner::adapters::outbound::{ConsoleRenderer, RandomGridSource};
use kestrel_planner::application::PlanningService;
use kestrel_planner::domains::planning::{GridSource, PathPlanRequest, PathRenderer};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    info!("Starting Kestrel Planner");

    let config = match Config::from_file("config.toml").await {
        Ok(config) => config,
        Err(e) => {
            warn!("Could not load config.toml ({}), using defaults", e);
            Config::default()
        }
    };
    info!(
        "Grid: {}x{}, obstacle density {}",
        config.grid.width, config.grid.height, config.grid.obstacle_density
    );

    let source = RandomGridSource::new(
        config.grid.width,
        config.grid.height,
        config.grid.obstacle_density,
    );
    let scenario = source.build()?;
    info!(
        "Generated scenario {}: start ({}, {}), target ({}, {})",
        scenario.name, scenario.start.x, scenario.start.y, scenario.target.x, scenario.target.y
    );

    let service = PlanningService::spawn(config.service.queue_capacity);

    let request = PathPlanRequest::new(scenario.grid.clone(), scenario.start, scenario.target);
    let response = service.plan(request).await?;

    let renderer = ConsoleRenderer;
    println!("{}", renderer.render(&scenario, &response));

    service.shutdown().await;
    info!("Done");

    Ok(())
}
