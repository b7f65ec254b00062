use axum::{Router, middleware, routing::get};
use axum_helpers::{create_router, health_router};
use core_config::AppInfo;
use database::postgres::DatabaseConnection;
use domain_demo::{DemoRepository, DemoService, PgDemoRepository, handlers};
use messaging::QueueProducer;
use observability::{metrics_handler, middleware::metrics_middleware};
use tower_http::cors::CorsLayer;

use crate::openapi::ApiDoc;
use crate::state::AppState;

pub mod health;

/// Creates the API routes without the `/api` prefix.
/// The `/api` prefix will be added by the `create_router` helper.
pub fn routes(state: &AppState) -> Router {
    let repository = PgDemoRepository::new(state.db.clone());
    let producer = QueueProducer::new(state.channel.clone(), &state.config.queue.destination);
    demo_routes(DemoService::new(repository, producer))
}

/// Demo routes over any repository.
pub fn demo_routes<R: DemoRepository + 'static>(service: DemoService<R>) -> Router {
    handlers::router(service)
}

/// Router with the /ready endpoint that pings the database.
pub fn ready_router(db: DatabaseConnection) -> Router {
    Router::new()
        .route("/ready", get(health::ready_handler))
        .with_state(db)
}

/// Compose the full application.
///
/// - `/api/...`: demo endpoints, docs and middleware from `create_router`
/// - `/health`, `/ready`: liveness and readiness
/// - `/`: greeting for load-balancer health checks
/// - `/metrics`: Prometheus scrape target
pub fn app(api_routes: Router, ready: Router, app_info: AppInfo, cors: CorsLayer) -> Router {
    create_router::<ApiDoc>(api_routes, cors)
        .merge(health_router(app_info))
        .merge(ready)
        .route("/", get(handlers::greeting))
        .route("/metrics", get(metrics_handler))
        .layer(middleware::from_fn(metrics_middleware))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use axum_helpers::create_permissive_cors_layer;
    use core_config::app_info;
    use domain_demo::{FixedRecordGenerator, GREETING, InMemoryDemoRepository};
    use http_body_util::BodyExt;
    use messaging::{FailingChannel, UnavailableChannel};
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase};
    use std::collections::BTreeMap;
    use std::sync::Arc;
    use tower::ServiceExt;

    fn healthy_db() -> DatabaseConnection {
        let row: BTreeMap<&str, sea_orm::Value> = [("?column?", 1i32.into())].into();
        MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![row]])
            .into_connection()
    }

    fn failing_db() -> DatabaseConnection {
        MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Custom("connection refused".to_string())])
            .into_connection()
    }

    fn test_app(db: DatabaseConnection) -> Router {
        let producer = QueueProducer::new(Arc::new(UnavailableChannel), "demo.records");
        let service = DemoService::new(InMemoryDemoRepository::new(), producer)
            .with_generator(FixedRecordGenerator::new(5, 9));

        app(
            demo_routes(service),
            ready_router(db),
            app_info!(),
            create_permissive_cors_layer(),
        )
    }

    async fn call(app: Router, method: &str, uri: &str) -> (StatusCode, Vec<u8>) {
        let response = app
            .oneshot(
                Request::builder()
                    .method(method)
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, bytes.to_vec())
    }

    #[tokio::test]
    async fn test_root_greeting() {
        let (status, body) = call(test_app(healthy_db()), "GET", "/").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, GREETING.as_bytes());
    }

    #[tokio::test]
    async fn test_api_greeting() {
        let (status, body) = call(test_app(healthy_db()), "GET", "/api").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, GREETING.as_bytes());
    }

    #[tokio::test]
    async fn test_create_and_list_under_api_prefix() {
        let app = test_app(healthy_db());

        let (status, _) = call(app.clone(), "POST", "/api/demo?useQueue=false").await;
        assert_eq!(status, StatusCode::CREATED);

        let (status, _) = call(app.clone(), "POST", "/api/demo?useQueue=true").await;
        assert_eq!(status, StatusCode::CREATED);

        let (status, body) = call(app, "GET", "/api/demo").await;
        assert_eq!(status, StatusCode::OK);
        let records: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(records.as_array().unwrap().len(), 1);
        assert_eq!(records[0]["eventId"], 5);
    }

    #[tokio::test]
    async fn test_queue_path_with_failing_channel_is_201() {
        let producer = QueueProducer::new(Arc::new(FailingChannel::new("nats down")), "demo.records");
        let service = DemoService::new(InMemoryDemoRepository::new(), producer);
        let app = app(
            demo_routes(service),
            ready_router(healthy_db()),
            app_info!(),
            create_permissive_cors_layer(),
        );

        let (status, _) = call(app, "POST", "/api/demo?useQueue=true").await;
        assert_eq!(status, StatusCode::CREATED);
    }

    #[tokio::test]
    async fn test_health_reports_app_info() {
        let (status, body) = call(test_app(healthy_db()), "GET", "/health").await;

        assert_eq!(status, StatusCode::OK);
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["name"], "demo_api");
        assert_eq!(json["status"], "healthy");
    }

    #[tokio::test]
    async fn test_ready_when_database_answers() {
        let (status, body) = call(test_app(healthy_db()), "GET", "/ready").await;

        assert_eq!(status, StatusCode::OK);
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["status"], "ready");
        assert_eq!(json["database"], "connected");
    }

    #[tokio::test]
    async fn test_not_ready_when_database_fails() {
        let (status, body) = call(test_app(failing_db()), "GET", "/ready").await;

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["database"], "disconnected");
    }

    #[tokio::test]
    async fn test_metrics_endpoint_responds() {
        let (status, _) = call(test_app(healthy_db()), "GET", "/metrics").await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_unknown_route_is_json_404() {
        let (status, body) = call(test_app(healthy_db()), "GET", "/nope").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["code"], 1003);
    }
}
