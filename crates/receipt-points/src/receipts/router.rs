use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use tracing::{error, warn};

use super::domain::{BreakdownView, PointsView, ProcessedView, Receipt};
use super::repository::ReceiptStore;
use super::service::{ReceiptError, ReceiptService};

/// Router exposing receipt submission and lookup endpoints.
pub fn receipt_router<S>(service: Arc<ReceiptService<S>>) -> Router
where
    S: ReceiptStore + 'static,
{
    Router::new()
        .route("/receipts/process", post(process_handler::<S>))
        .route("/receipts/:id/points", get(points_handler::<S>))
        .route("/receipts/:id/breakdown", get(breakdown_handler::<S>))
        .fallback(unknown_endpoint)
        .with_state(service)
}

/// The body is decoded by hand so any undecodable payload is a 400,
/// regardless of content type.
pub(crate) async fn process_handler<S>(
    State(service): State<Arc<ReceiptService<S>>>,
    body: Bytes,
) -> Result<Json<ProcessedView>, ReceiptError>
where
    S: ReceiptStore + 'static,
{
    let receipt: Receipt = serde_json::from_slice(&body).map_err(|err| {
        warn!(error = %err, "error decoding receipt JSON");
        ReceiptError::from(err)
    })?;

    let record = service.process(receipt)?;
    Ok(Json(ProcessedView { id: record.id }))
}

pub(crate) async fn points_handler<S>(
    State(service): State<Arc<ReceiptService<S>>>,
    Path(id): Path<String>,
) -> Result<Json<PointsView>, ReceiptError>
where
    S: ReceiptStore + 'static,
{
    let points = service.points(&id)?;
    Ok(Json(PointsView { points }))
}

pub(crate) async fn breakdown_handler<S>(
    State(service): State<Arc<ReceiptService<S>>>,
    Path(id): Path<String>,
) -> Result<Json<BreakdownView>, ReceiptError>
where
    S: ReceiptStore + 'static,
{
    service.breakdown(&id).map(Json)
}

async fn unknown_endpoint() -> Response {
    let payload = json!({ "error": "Invalid endpoint" });
    (StatusCode::NOT_FOUND, Json(payload)).into_response()
}

impl ReceiptError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ReceiptError::MalformedRequest(_)
            | ReceiptError::Validation(_)
            | ReceiptError::InvalidIdentifier(_) => StatusCode::BAD_REQUEST,
            ReceiptError::NotFound(_) => StatusCode::NOT_FOUND,
            ReceiptError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ReceiptError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = match &self {
            ReceiptError::Store(err) => {
                error!(error = %err, "receipt store failure");
                "internal server error".to_string()
            }
            other => other.to_string(),
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
