use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Extension, Json};
use receipt_points::receipts::{receipt_router, ReceiptService, ReceiptStore};
use serde_json::json;
use std::sync::atomic::Ordering;
use std::sync::Arc;

/// Receipt endpoints plus the operational health, readiness, and metrics routes.
pub(crate) fn with_receipt_routes<S>(service: Arc<ReceiptService<S>>) -> axum::Router
where
    S: ReceiptStore + 'static,
{
    receipt_router(service)
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use metrics_exporter_prometheus::PrometheusBuilder;
    use receipt_points::receipts::InMemoryReceiptStore;
    use std::sync::atomic::AtomicBool;
    use tower::ServiceExt;

    fn app_state() -> AppState {
        let recorder = PrometheusBuilder::new().build_recorder();
        AppState {
            readiness: Arc::new(AtomicBool::new(false)),
            metrics: Arc::new(recorder.handle()),
        }
    }

    async fn read_json(response: axum::response::Response) -> serde_json::Value {
        let body = axum::body::to_bytes(response.into_body(), 1024)
            .await
            .expect("read body");
        serde_json::from_slice(&body).expect("json")
    }

    fn router() -> axum::Router {
        let service = Arc::new(ReceiptService::new(Arc::new(InMemoryReceiptStore::new())));
        with_receipt_routes(service)
    }

    #[tokio::test]
    async fn health_route_reports_ok() {
        let response = router()
            .oneshot(Request::get("/health").body(Body::empty()).expect("request"))
            .await
            .expect("route executes");

        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), 1024)
            .await
            .expect("read body");
        let payload: serde_json::Value = serde_json::from_slice(&body).expect("json");
        assert_eq!(payload, json!({ "status": "ok" }));
    }

    #[tokio::test]
    async fn receipt_routes_are_mounted_alongside_operational_routes() {
        let response = router()
            .oneshot(
                Request::get("/receipts/not-a-uuid/points")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("route executes");

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn ready_route_flips_once_the_listener_is_bound() {
        let state = app_state();
        let app = router().layer(Extension(state.clone()));

        let response = app
            .clone()
            .oneshot(Request::get("/ready").body(Body::empty()).expect("request"))
            .await
            .expect("route executes");
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(read_json(response).await, json!({ "status": "initializing" }));

        state.readiness.store(true, Ordering::Release);

        let response = app
            .oneshot(Request::get("/ready").body(Body::empty()).expect("request"))
            .await
            .expect("route executes");
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(read_json(response).await, json!({ "status": "ready" }));
    }

    #[tokio::test]
    async fn metrics_route_serves_prometheus_text() {
        let app = router().layer(Extension(app_state()));

        let response = app
            .oneshot(Request::get("/metrics").body(Body::empty()).expect("request"))
            .await
            .expect("route executes");

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response
                .headers()
                .get(header::CONTENT_TYPE)
                .and_then(|value| value.to_str().ok()),
            Some("text/plain; version=0.0.4")
        );
        let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
            .await
            .expect("read body");
        assert!(std::str::from_utf8(&body).is_ok());
    }
}
