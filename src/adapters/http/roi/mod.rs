//! ROI HTTP adapter module.
//!
//! Provides REST API endpoints for ROI calculations and the plan catalog.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::{CalculateRoiRequest, CalculateRoiResponse, ErrorResponse, HealthResponse};
pub use handlers::{RoiApiError, RoiAppState};
pub use routes::roi_routes;
