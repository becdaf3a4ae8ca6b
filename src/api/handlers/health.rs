//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::domain::entities::ResourceCount;
use crate::state::AppState;

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: All components healthy
/// - **503 Service Unavailable**: One or more components degraded
///
/// # Components Checked
///
/// 1. **Chart renderer**: Draws an empty chart
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "chart_renderer": {
///       "status": "ok",
///       "message": "Rendered 500x400 test chart"
///     }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let renderer_check = check_chart_renderer(&state);

    let all_healthy = renderer_check.status == "ok";

    let response = HealthResponse {
        status: if all_healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            chart_renderer: renderer_check,
        },
    };

    if all_healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

/// Checks that the chart backend can draw.
fn check_chart_renderer(state: &AppState) -> CheckStatus {
    let renderer = state.comparison_service.renderer();
    let size = renderer.dimensions();

    match renderer.render_svg(&ResourceCount::new(), true) {
        Ok(_) => CheckStatus {
            status: "ok".to_string(),
            message: Some(format!(
                "Rendered {}x{} test chart",
                size.width, size.height
            )),
        },
        Err(e) => CheckStatus {
            status: "error".to_string(),
            message: Some(format!("Chart renderer error: {}", e)),
        },
    }
}
