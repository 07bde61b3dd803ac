//! HTTP routes for ROI endpoints.

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{calculate_roi, health_check, list_plans, RoiAppState};

/// Creates the ROI router with all routes.
///
/// # Routes
///
/// - `POST /api/calculate-roi` - Compute an ROI projection
/// - `GET /api/plans` - List license plans
/// - `GET /api/health` - Liveness check
pub fn roi_routes(state: RoiAppState) -> Router {
    Router::new()
        .route("/api/calculate-roi", post(calculate_roi))
        .route("/api/plans", get(list_plans))
        .route("/api/health", get(health_check))
        .with_state(state)
}
