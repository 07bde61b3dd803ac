//! HTTP handlers for ROI endpoints.
//!
//! These handlers connect Axum routes to application layer command/query handlers.

use std::sync::Arc;

use axum::extract::{Json, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::handlers::{
    CalculateRoiCommand, CalculateRoiHandler, ListPlansHandler, PlanCatalogView,
};
use crate::domain::foundation::DomainError;
use crate::domain::roi::{ROICalculator, RoiError};
use crate::ports::PlanCatalog;

use super::dto::{CalculateRoiRequest, CalculateRoiResponse, ErrorResponse, HealthResponse};

// ════════════════════════════════════════════════════════════════════════════════
// Error Type
// ════════════════════════════════════════════════════════════════════════════════

/// ROI API error that implements IntoResponse.
#[derive(Debug)]
pub struct RoiApiError(DomainError);

impl IntoResponse for RoiApiError {
    fn into_response(self) -> axum::response::Response {
        // Every domain error code describes input the engine refused.
        (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ErrorResponse::from(self.0)),
        )
            .into_response()
    }
}

impl From<RoiError> for RoiApiError {
    fn from(error: RoiError) -> Self {
        RoiApiError(error.into())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state for the ROI endpoints.
///
/// Cloned per request; the calculator only holds an `Arc` to the catalog.
#[derive(Clone)]
pub struct RoiAppState {
    pub calculator: ROICalculator,
}

impl RoiAppState {
    pub fn new(catalog: Arc<dyn PlanCatalog>) -> Self {
        Self {
            calculator: ROICalculator::new(catalog),
        }
    }

    pub fn calculate_roi_handler(&self) -> CalculateRoiHandler {
        CalculateRoiHandler::new(self.calculator.clone())
    }

    pub fn list_plans_handler(&self) -> ListPlansHandler {
        ListPlansHandler::new(self.calculator.catalog().clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// POST /api/calculate-roi
///
/// Computes an ROI projection for the submitted parameters.
pub async fn calculate_roi(
    State(state): State<RoiAppState>,
    Json(request): Json<CalculateRoiRequest>,
) -> Result<Json<CalculateRoiResponse>, RoiApiError> {
    let cmd = CalculateRoiCommand {
        input: request.into(),
    };

    let record = state.calculate_roi_handler().handle(cmd)?;

    Ok(Json(record.into()))
}

/// GET /api/plans
///
/// Lists the license plans available for plan-based pricing.
pub async fn list_plans(State(state): State<RoiAppState>) -> Json<PlanCatalogView> {
    Json(state.list_plans_handler().handle())
}

/// GET /api/health
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
