//! End-to-end tests: reference backend service and gateway on ephemeral
//! ports, driven over real HTTP.

#![allow(clippy::panic)]

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use reqwest::StatusCode;
use serde_json::{Value, json};
use tokio::net::TcpListener;

use employee_dashboard::api;
use employee_dashboard::app_state::AppState;
use employee_dashboard::client::{EmployeeBackend, HttpEmployeeBackend};
use employee_dashboard::lifecycle::ShutdownSignal;
use employee_dashboard::observability::{TraceRecorder, TracingRecorder};
use employee_dashboard::service::{EmployeeDispatcher, LatencyInjector};
use employee_dashboard::store::{self, EmployeeStore};

async fn serve(app: Router) -> SocketAddr {
    let Ok(listener) = TcpListener::bind("127.0.0.1:0").await else {
        panic!("bind failed");
    };
    let Ok(addr) = listener.local_addr() else {
        panic!("no local addr");
    };
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    addr
}

async fn start_gateway(backend_url: &str) -> String {
    let Ok(backend) = HttpEmployeeBackend::new(backend_url, Duration::from_secs(2)) else {
        panic!("client construction failed");
    };
    let dispatcher = EmployeeDispatcher::new(
        Arc::new(backend) as Arc<dyn EmployeeBackend>,
        LatencyInjector::disabled(),
        Arc::new(TracingRecorder) as Arc<dyn TraceRecorder>,
        ShutdownSignal::never(),
    );
    let app = api::build_app(AppState::new(dispatcher), Duration::from_secs(10));
    format!("http://{}", serve(app).await)
}

async fn start_stack() -> String {
    let backend_addr = serve(store::build_app(Arc::new(EmployeeStore::new()))).await;
    start_gateway(&format!("http://{backend_addr}")).await
}

async fn call(request: reqwest::RequestBuilder) -> (StatusCode, Vec<u8>) {
    let Ok(response) = request.send().await else {
        panic!("gateway unreachable");
    };
    let status = response.status();
    let Ok(body) = response.bytes().await else {
        panic!("body read failed");
    };
    (status, body.to_vec())
}

fn json_of(body: &[u8]) -> Value {
    let Ok(value) = serde_json::from_slice(body) else {
        panic!("body is not JSON: {}", String::from_utf8_lossy(body));
    };
    value
}

#[tokio::test]
async fn full_crud_lifecycle_through_gateway() {
    let gateway = start_stack().await;
    let client = reqwest::Client::new();
    let employees = format!("{gateway}/employees");

    // Empty store.
    let (status, body) = call(client.get(&employees)).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(body.is_empty());

    // Create.
    let (status, body) = call(
        client.post(&employees).json(&json!({"name": "Grace", "team": "compilers"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json_of(&body),
        json!({"id": 1, "name": "Grace", "team": "compilers"})
    );

    // Get.
    let (status, body) = call(client.get(format!("{employees}/1"))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json_of(&body).get("name"), Some(&json!("Grace")));

    // Update: body id is overridden by the path id.
    let (status, body) = call(
        client
            .put(format!("{employees}/1"))
            .json(&json!({"id": 55, "name": "Grace Hopper"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json_of(&body), json!({"id": 1, "name": "Grace Hopper"}));

    // List.
    let (status, body) = call(client.get(&employees)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json_of(&body), json!([{"id": 1, "name": "Grace Hopper"}]));

    // Delete twice: existence is the backend's business.
    for _ in 0..2 {
        let (status, body) = call(client.delete(format!("{employees}/1"))).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.is_empty());
    }

    // Gone.
    let (status, body) = call(client.get(format!("{employees}/1"))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.is_empty());
}

#[tokio::test]
async fn update_of_unknown_employee_is_a_server_error() {
    let gateway = start_stack().await;
    let client = reqwest::Client::new();

    let (status, body) = call(
        client
            .put(format!("{gateway}/employees/99"))
            .json(&json!({"name": "Nobody"})),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json_of(&body).pointer("/error/code"), Some(&json!(3002)));
}

#[tokio::test]
async fn unreachable_backend_follows_failure_policy() {
    // Grab a free port, then release it so nothing listens there.
    let Ok(probe) = TcpListener::bind("127.0.0.1:0").await else {
        panic!("bind failed");
    };
    let Ok(dead_addr) = probe.local_addr() else {
        panic!("no local addr");
    };
    drop(probe);

    let gateway = start_gateway(&format!("http://{dead_addr}")).await;
    let client = reqwest::Client::new();
    let employees = format!("{gateway}/employees");

    let (status, _) = call(client.get(&employees)).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

    let (status, body) = call(client.get(format!("{employees}/1"))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.is_empty());

    let (status, _) = call(client.post(&employees).json(&json!({"name": "Ada"}))).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

    let (status, _) = call(
        client
            .put(format!("{employees}/1"))
            .json(&json!({"name": "Ada"})),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

    let (status, _) = call(client.delete(format!("{employees}/1"))).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn health_endpoint_answers_without_backend() {
    let gateway = start_gateway("http://127.0.0.1:9").await;
    let client = reqwest::Client::new();
    let (status, body) = call(client.get(format!("{gateway}/health"))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json_of(&body).get("status"), Some(&json!("healthy")));
}
