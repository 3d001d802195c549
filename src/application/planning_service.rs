use std::time::Instant;

use async_trait::async_trait;
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::common::{ApplicationError, ApplicationResult};
use crate::domains::planning::{
    GridCoord, OccupancyGrid, PathPlanRequest, PathPlanResponse, PathPlanningPort, ThetaStarPlanner,
};

/// One unit of work for the planning task: a request plus the channel
/// the response goes back on.
struct PlanningJob {
    request: PathPlanRequest,
    respond_to: oneshot::Sender<PathPlanResponse>,
}

/// Channel-isolated Theta* planning service.
///
/// Each request is moved into a dedicated worker task over an mpsc
/// channel and answered over a oneshot channel, so an expensive search
/// never runs on the caller's task and caller and planner share no
/// mutable state. Requests are served strictly in arrival order; work
/// already queued is not cancelled.
pub struct PlanningService {
    job_sender: mpsc::Sender<PlanningJob>,
    worker: JoinHandle<()>,
}

impl PlanningService {
    /// Spawn the worker task and return the handle requests go through.
    pub fn spawn(queue_capacity: usize) -> Self {
        let (job_sender, job_receiver) = mpsc::channel(queue_capacity);
        let worker = tokio::spawn(run_worker(job_receiver));
        Self { job_sender, worker }
    }

    pub async fn plan(&self, request: PathPlanRequest) -> ApplicationResult<PathPlanResponse> {
        let (respond_to, response) = oneshot::channel();
        self.job_sender
            .send(PlanningJob {
                request,
                respond_to,
            })
            .await
            .map_err(|_| {
                ApplicationError::ServiceUnavailable("planning worker is gone".to_string())
            })?;
        response.await.map_err(|_| {
            ApplicationError::ServiceUnavailable("planning worker dropped the request".to_string())
        })
    }

    /// Close the request channel and wait for the worker to drain its
    /// queue.
    pub async fn shutdown(self) {
        drop(self.job_sender);
        let _ = self.worker.await;
    }
}

#[async_trait]
impl PathPlanningPort for PlanningService {
    async fn plan(&self, request: PathPlanRequest) -> ApplicationResult<PathPlanResponse> {
        PlanningService::plan(self, request).await
    }
}

async fn run_worker(mut jobs: mpsc::Receiver<PlanningJob>) {
    info!("Planning worker started");
    while let Some(job) = jobs.recv().await {
        let request_id = job.request.request_id.clone();
        debug!("Processing plan request {}", request_id);
        let response = handle_request(job.request);
        if job.respond_to.send(response).is_err() {
            warn!("Caller of request {} went away before the response", request_id);
        }
    }
    info!("Planning worker stopped");
}

/// Validate and answer one request. Validation failures become error
/// responses with no search performed; an unreachable target is a
/// normal `ok` response with no path.
fn handle_request(request: PathPlanRequest) -> PathPlanResponse {
    if let Some(message) = validate_endpoints(&request.grid, request.start, request.target) {
        info!("Rejected request {}: {}", request.request_id, message);
        return PathPlanResponse::Error { message };
    }

    let started = Instant::now();
    let path = ThetaStarPlanner::new(&request.grid).plan(request.start, request.target);
    let time_ms = started.elapsed().as_secs_f64() * 1000.0;

    match &path {
        Some(path) => info!(
            "Request {} solved: {} waypoints in {:.2} ms",
            request.request_id,
            path.len(),
            time_ms
        ),
        None => info!("Request {} has no path ({:.2} ms)", request.request_id, time_ms),
    }
    PathPlanResponse::Ok { path, time_ms }
}

fn validate_endpoints(grid: &OccupancyGrid, start: GridCoord, target: GridCoord) -> Option<String> {
    if !grid.in_bounds(start) || !grid.in_bounds(target) {
        return Some("start/target out of bounds".to_string());
    }
    if grid.is_blocked(start) || grid.is_blocked(target) {
        return Some("start or target inside obstacle".to_string());
    }
    None
}
