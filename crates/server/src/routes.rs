use axum::{
    routing::{get, post},
    Json, Router,
};
use sea_orm::DatabaseConnection;
use tower_http::{
    cors::CorsLayer,
    trace::{TraceLayer, DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, DefaultOnFailure},
};
use tracing::Level;

use common::types::Health;

pub mod service_requests;
pub mod customers;
pub mod jobs;
pub mod job_orders;

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
}

/// Liveness only; never touches the database.
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Build the full application router
pub fn build_router(cors: CorsLayer, state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route(
            "/service-requests",
            get(service_requests::list_by_email).post(service_requests::create),
        )
        .route("/service-requests/:id", get(service_requests::get_by_id))
        .route("/customers", post(customers::create))
        .route("/customers/:id", get(customers::get_by_id).delete(customers::remove))
        .route("/customers/:id/job-orders", get(job_orders::list_for_customer))
        .route("/jobs", post(jobs::create))
        .route("/jobs/:id", get(jobs::get_by_id))
        .route("/jobs_By", get(jobs::get_by_any))
        .route("/job-orders", post(job_orders::create))
        .route("/job-orders/:id", get(job_orders::get_by_id))
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                // span per request with method and path, INFO level
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(
                    DefaultOnRequest::new()
                        .level(Level::INFO),
                )
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                // 5xx and friends logged as ERROR
                .on_failure(
                    DefaultOnFailure::new()
                        .level(Level::ERROR),
                )
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    fn app() -> Router {
        // Disconnected handle: enough for routes that never touch the DB
        build_router(CorsLayer::very_permissive(), AppState { db: DatabaseConnection::default() })
    }

    #[tokio::test]
    async fn health_responds_ok_without_database() {
        let res = app()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn jobs_by_with_neither_param_is_bad_request_without_database() {
        let res = app()
            .oneshot(Request::builder().uri("/jobs_By").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn db_backed_route_reports_server_error_when_disconnected() {
        let res = app()
            .oneshot(Request::builder().uri("/customers/1").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
