//! End-to-end tests for the dashboard API.
//!
//! Each test spins up the full Axum app on a random port with a short
//! simulation delay and drives it over HTTP.
//!
//! Run with: `cargo test --test api_test`

use std::net::SocketAddr;
use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde_json::{json, Value};
use tamperhunter::config::AppConfig;
use tamperhunter::models::simulation::ResponsePayload;
use tamperhunter::services::attack_simulation::RandomIdGenerator;
use tamperhunter::services::simulator::SimulationService;
use tamperhunter::AppState;
use tokio::net::TcpListener;

/// Start the app on a random port, returning the base URL and server handle.
async fn start_server(delay: Duration) -> (String, tokio::task::JoinHandle<()>) {
    let config = AppConfig::default();
    let simulations = SimulationService::new(
        delay,
        config.default_website_id.clone(),
        Box::new(RandomIdGenerator::seeded(7)),
    );
    let app = tamperhunter::routes::router(AppState::with_simulator(config, simulations));

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr: SocketAddr = listener.local_addr().unwrap();
    let base_url = format!("http://{addr}");

    let handle = tokio::spawn(async move {
        axum::serve(listener, app).await.ok();
    });

    (base_url, handle)
}

/// Helper: extract `data` from the API envelope, panic with message on error.
fn extract_data(body: &Value) -> &Value {
    if let Some(err) = body.get("error").filter(|e| !e.is_null()) {
        panic!(
            "API error: {} - {}",
            err["code"].as_str().unwrap_or("?"),
            err["message"].as_str().unwrap_or("?"),
        );
    }
    body.get("data").expect("missing 'data' field")
}

fn checkout(params: Value) -> Value {
    json!({
        "targetEndpoint": "/api/checkout/process",
        "method": "POST",
        "parameters": params,
    })
}

#[tokio::test]
async fn health_and_dashboard_stats() {
    let (base, _handle) = start_server(Duration::from_millis(10)).await;
    let client = Client::new();

    let resp = client.get(format!("{base}/health/live")).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.text().await.unwrap(), "OK");

    let body: Value = client
        .get(format!("{base}/health/ready"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(extract_data(&body)["websites"], 4);

    let body: Value = client
        .get(format!("{base}/api/v1/dashboard/stats"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let stats = extract_data(&body);
    assert_eq!(stats["totalWebsites"], 4);
    assert_eq!(stats["newAlerts"], 2);
    assert_eq!(stats["criticalVulnerabilities"], 1);
    assert_eq!(stats["monitoringStatus"], "active");
}

#[tokio::test]
async fn simulation_success_and_rejection() {
    let (base, _handle) = start_server(Duration::from_millis(20)).await;
    let client = Client::new();

    let resp = client
        .post(format!("{base}/api/v1/simulations"))
        .json(&checkout(json!([
            {"name": "product_id", "value": "12345", "manipulated": false},
            {"name": "price", "value": "19.99", "manipulated": true},
            {"name": "total", "value": "19.99", "manipulated": true},
        ])))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.unwrap();
    let result = extract_data(&body);
    assert_eq!(result["success"], true);
    assert_eq!(result["responseCode"], 200);
    assert_eq!(result["websiteId"], "w1");
    assert_eq!(result["method"], "POST");

    let payload = tokio_test::assert_ok!(serde_json::from_str::<ResponsePayload>(
        result["responseData"].as_str().unwrap()
    ));
    match payload {
        ResponsePayload::Success {
            order_id,
            total_charged,
        } => {
            assert!(order_id.starts_with("ORD-"));
            assert_eq!(total_charged, "19.99");
        }
        other => panic!("expected success payload, got {other:?}"),
    }

    let body: Value = client
        .post(format!("{base}/api/v1/simulations"))
        .json(&checkout(json!([
            {"name": "shipping_cost", "value": "0", "manipulated": true},
        ])))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let result = extract_data(&body);
    assert_eq!(result["success"], false);
    assert_eq!(result["responseCode"], 403);
    assert!(result["responseData"]
        .as_str()
        .unwrap()
        .contains("Tampering detected"));

    let body: Value = client
        .get(format!("{base}/api/v1/simulations/latest"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(extract_data(&body)["responseCode"], 403);

    let body: Value = client
        .get(format!("{base}/api/v1/simulations/history"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(extract_data(&body).as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn simulation_without_manipulation_is_rejected() {
    let (base, _handle) = start_server(Duration::from_millis(10)).await;
    let client = Client::new();

    let resp = client
        .post(format!("{base}/api/v1/simulations"))
        .json(&checkout(json!([
            {"name": "price", "value": "199.99", "manipulated": false},
        ])))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"]["code"], "NO_MANIPULATION_SELECTED");

    let body: Value = client
        .get(format!("{base}/api/v1/simulations/latest"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(body["data"].is_null());
}

#[tokio::test]
async fn concurrent_simulation_gets_conflict() {
    let (base, _handle) = start_server(Duration::from_millis(500)).await;
    let client = Client::new();
    let body = checkout(json!([{"name": "total", "value": "1.00", "manipulated": true}]));

    let first = {
        let client = client.clone();
        let url = format!("{base}/api/v1/simulations");
        let body = body.clone();
        tokio::spawn(async move { client.post(url).json(&body).send().await.unwrap().status() })
    };
    tokio::time::sleep(Duration::from_millis(100)).await;

    let resp = client
        .post(format!("{base}/api/v1/simulations"))
        .json(&body)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CONFLICT);
    let err: Value = resp.json().await.unwrap();
    assert_eq!(err["error"]["code"], "SIMULATION_IN_PROGRESS");

    assert_eq!(first.await.unwrap(), StatusCode::OK);
}

#[tokio::test]
async fn website_lifecycle() {
    let (base, _handle) = start_server(Duration::from_millis(10)).await;
    let client = Client::new();

    let body: Value = client
        .post(format!("{base}/api/v1/websites/detect-name"))
        .json(&json!({"url": "https://www.deal-hub.example.com"}))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(extract_data(&body)["name"], "Deal Hub");

    let resp = client
        .post(format!("{base}/api/v1/websites"))
        .json(&json!({"url": "https://deal-hub.example.com", "name": ""}))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = client
        .post(format!("{base}/api/v1/websites"))
        .json(&json!({
            "url": "https://deal-hub.example.com",
            "name": "Deal Hub",
            "scanFrequency": "weekly",
        }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let site = extract_data(&body);
    assert_eq!(site["status"], "active");
    assert_eq!(site["scanFrequency"], "weekly");
    let id = site["id"].as_str().unwrap().to_string();

    let body: Value = client
        .post(format!("{base}/api/v1/websites/{id}/pause"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(extract_data(&body)["status"], "paused");

    let body: Value = client
        .post(format!("{base}/api/v1/websites/{id}/resume"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(extract_data(&body)["status"], "active");

    let resp = client
        .delete(format!("{base}/api/v1/websites/{id}"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = client
        .get(format!("{base}/api/v1/websites/{id}"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body: Value = client
        .post(format!("{base}/api/v1/websites/{id}/restore"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(extract_data(&body)["name"], "Deal Hub");

    let resp = client
        .get(format!("{base}/api/v1/websites/{id}"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn removed_website_products_are_hidden() {
    let (base, _handle) = start_server(Duration::from_millis(10)).await;
    let client = Client::new();

    let resp = client
        .delete(format!("{base}/api/v1/websites/w1"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = client
        .get(format!("{base}/api/v1/products"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let ids: Vec<&str> = extract_data(&body)
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|p| p["id"].as_str())
        .collect();
    assert_eq!(ids, vec!["p3"]);
}

#[tokio::test]
async fn oversized_body_is_rejected() {
    let (base, _handle) = start_server(Duration::from_millis(10)).await;
    let client = Client::new();

    let resp = client
        .post(format!("{base}/api/v1/websites"))
        .json(&json!({
            "url": "https://big.example.com",
            "name": "x".repeat(70 * 1024),
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::PAYLOAD_TOO_LARGE);
}

#[tokio::test]
async fn huge_page_number_returns_empty_page() {
    let (base, _handle) = start_server(Duration::from_millis(10)).await;
    let client = Client::new();

    let resp = client
        .get(format!(
            "{base}/api/v1/alerts?page={}&perPage=100",
            i64::MAX
        ))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.unwrap();
    let page = extract_data(&body);
    assert_eq!(page["items"].as_array().unwrap().len(), 0);
    assert_eq!(page["total"], 3);
}

#[tokio::test]
async fn alert_triage_and_reports() {
    let (base, _handle) = start_server(Duration::from_millis(10)).await;
    let client = Client::new();

    let body: Value = client
        .get(format!("{base}/api/v1/alerts?status=new"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(extract_data(&body)["total"], 2);

    let body: Value = client
        .post(format!("{base}/api/v1/alerts/a1/review"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(extract_data(&body)["newStatus"], "reviewing");

    let resp = client
        .post(format!("{base}/api/v1/alerts/a1/review"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = client
        .get(format!("{base}/api/v1/vulnerabilities"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let reports = extract_data(&body).as_array().unwrap();
    assert_eq!(reports.len(), 3);
    assert_eq!(reports[0]["severity"], "critical");

    let body: Value = client
        .get(format!("{base}/api/v1/products/p1/price-history"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(extract_data(&body)["points"].as_array().unwrap().len(), 5);

    let body: Value = client
        .post(format!("{base}/api/v1/monitoring/toggle"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(extract_data(&body)["status"], "paused");
}
