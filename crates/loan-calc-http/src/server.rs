use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use loan_calc_core::amortization::build_schedule;
use loan_calc_core::{LoanCalcError, LoanRequest, LoanResponse};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;

use crate::config::ServiceConfig;
use crate::CALCULATE_PATH;

/// JSON body of every non-2xx response the service produces itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Engine failure mapped onto an HTTP status.
#[derive(Debug)]
pub struct ServiceError(LoanCalcError);

impl From<LoanCalcError> for ServiceError {
    fn from(e: LoanCalcError) -> Self {
        ServiceError(e)
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        match self.0 {
            LoanCalcError::InvalidInput { reason, .. } => {
                error_response(StatusCode::BAD_REQUEST, &reason)
            }
            other @ LoanCalcError::Computation(_) => {
                tracing::error!(error = %other, "loan calculation failed");
                error_response(StatusCode::INTERNAL_SERVER_ERROR, &other.to_string())
            }
        }
    }
}

pub fn router() -> Router {
    Router::new()
        .route(CALCULATE_PATH, post(calculate_handler))
        .fallback(not_found_handler)
}

/// Bind to the configured address and serve until the process exits.
pub async fn serve(config: &ServiceConfig) -> std::io::Result<()> {
    let listener = TcpListener::bind(config.bind).await?;
    serve_listener(listener).await
}

/// Serve on an already-bound listener.
pub async fn serve_listener(listener: TcpListener) -> std::io::Result<()> {
    let addr = listener.local_addr()?;
    tracing::info!(%addr, path = CALCULATE_PATH, "loan calculation service listening");
    axum::serve(listener, router()).await
}

async fn calculate_handler(
    Json(request): Json<LoanRequest>,
) -> Result<Json<LoanResponse>, ServiceError> {
    tracing::debug!(
        amount = %request.amount,
        interest_rate = %request.interest_rate,
        term_in_months = request.term_in_months,
        interest_rate_type = %request.interest_rate_type,
        "calculate request"
    );

    let response = build_schedule(&request).inspect_err(|e| {
        tracing::warn!(error = %e, "rejected calculate request");
    })?;

    tracing::info!(
        term_in_months = response.term_in_months,
        monthly_payment = %response.monthly_payment,
        "calculated schedule"
    );
    Ok(Json(response))
}

async fn not_found_handler() -> Response {
    error_response(StatusCode::NOT_FOUND, "Not found")
}

fn error_response(status: StatusCode, msg: &str) -> Response {
    let mut response = (
        status,
        Json(ErrorResponse {
            error: msg.to_string(),
        }),
    )
        .into_response();
    response.headers_mut().insert(
        header::CACHE_CONTROL,
        header::HeaderValue::from_static("no-store"),
    );
    response
}
