//! End-to-end tests over the HTTP surface: the server is spawned on an
//! ephemeral port and driven through a real client.

use std::net::SocketAddr;
use std::sync::Arc;

use serde_json::{json, Value};

use freight_cost_planner::app::{router, AppState};
use freight_cost_planner::infra::ReferenceCatalog;

async fn spawn_server() -> SocketAddr {
    let catalog = ReferenceCatalog::load_embedded().expect("embedded catalog loads");
    let app = router(Arc::new(AppState::new(catalog)));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("server runs");
    });
    addr
}

fn fob_request() -> Value {
    json!({
        "tradeTerm": "FOB",
        "cargoDetails": { "volume": 30.0, "weight": 22000.0, "value": 50000.0 },
        "route": { "originPort": "CNSHA", "destinationPort": "DEHAM" },
        "costs": [
            { "type": "packing", "amount": 50.0 },
            { "type": "oceanFreight", "amount": 1200.0 },
            { "type": "insurance", "amount": 50.0 }
        ]
    })
}

async fn post_calculate(addr: SocketAddr, body: &Value) -> reqwest::Response {
    reqwest::Client::new()
        .post(format!("http://{addr}/api/freight/calculate"))
        .json(body)
        .send()
        .await
        .expect("request sent")
}

#[tokio::test]
async fn fcl_quote_round_trip() {
    let addr = spawn_server().await;
    let response = post_calculate(addr, &fob_request()).await;
    assert_eq!(response.status(), 200);

    let body: Value = response.json().await.expect("json body");
    assert_eq!(body["summary"]["tradeTerm"], "FOB");
    assert_eq!(body["summary"]["shippingMode"], "FCL");
    assert_eq!(body["summary"]["route"]["originPort"], "CNSHA");
    assert_eq!(body["container"]["mode"], "FCL");
    assert_eq!(body["container"]["containerType"], "40GP");
    assert_eq!(body["container"]["containerCount"], 1);
    assert_eq!(body["container"]["warnings"], json!([]));

    let utilization = body["container"]["utilizationPercent"]
        .as_f64()
        .expect("utilization");
    assert!((utilization - 22_000.0 / 26_000.0 * 100.0).abs() < 1e-9);

    assert_eq!(body["sellerTotal"], 50.0);
    assert_eq!(body["buyerTotal"], 1250.0);
    assert_eq!(body["costBreakdown"]["seller"][0]["costType"], "packing");
    assert_eq!(body["costBreakdown"]["buyer"][0]["payer"], "buyer");
    // totals live at the top level only
    assert!(body["costBreakdown"].get("sellerTotal").is_none());
}

#[tokio::test]
async fn lcl_quote_bills_by_revenue_ton() {
    let addr = spawn_server().await;
    let request = json!({
        "tradeTerm": "CIF",
        "cargoDetails": { "volume": 10.0, "weight": 9400.0, "value": 50000.0 },
        "route": { "originPort": "CNNGB", "destinationPort": "USLAX" },
        "costs": [ { "type": "oceanFreight", "amount": 120.0 } ]
    });
    let response = post_calculate(addr, &request).await;
    assert_eq!(response.status(), 200);

    let body: Value = response.json().await.expect("json body");
    assert_eq!(body["summary"]["shippingMode"], "LCL");
    assert_eq!(body["container"]["mode"], "LCL");
    assert_eq!(body["container"]["revenueTon"], 10.0);
    assert_eq!(body["container"]["appliedRate"], 120.0);
    assert_eq!(body["container"]["freightAmount"], 1200.0);
    // no insurance line: 0.1% of declared value
    assert_eq!(body["container"]["insuranceAmount"], 50.0);
    assert_eq!(body["container"]["totalAmount"], 1250.0);
}

#[tokio::test]
async fn oversize_cargo_is_a_successful_multi_container_answer() {
    let addr = spawn_server().await;
    let request = json!({
        "tradeTerm": "FOB",
        "cargoDetails": { "volume": 90.0, "weight": 20000.0, "value": 0.0 },
        "route": { "originPort": "CNSHA", "destinationPort": "NLRTM" },
        "costs": []
    });
    let response = post_calculate(addr, &request).await;
    assert_eq!(response.status(), 200);

    let body: Value = response.json().await.expect("json body");
    assert_eq!(body["container"]["mode"], "FCL_MULTI");
    assert_eq!(body["container"]["requiredVolume"], 90.0);
    assert_eq!(body["container"]["maxSingleContainerVolume"], 86.0);
}

#[tokio::test]
async fn unknown_cost_type_is_a_client_error() {
    let addr = spawn_server().await;
    let mut request = fob_request();
    request["costs"][0]["type"] = json!("bribery");
    let response = post_calculate(addr, &request).await;
    assert_eq!(response.status(), 400);

    let body: Value = response.json().await.expect("json body");
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn unknown_trade_term_is_a_client_error() {
    let addr = spawn_server().await;
    let mut request = fob_request();
    request["tradeTerm"] = json!("DDP");
    let response = post_calculate(addr, &request).await;
    assert_eq!(response.status(), 400);
}

#[tokio::test]
async fn negative_cargo_field_is_a_client_error() {
    let addr = spawn_server().await;
    let mut request = fob_request();
    request["cargoDetails"]["weight"] = json!(-5.0);
    let response = post_calculate(addr, &request).await;
    assert_eq!(response.status(), 400);
}

#[tokio::test]
async fn malformed_body_is_a_client_error_not_a_500() {
    let addr = spawn_server().await;
    let response = reqwest::Client::new()
        .post(format!("http://{addr}/api/freight/calculate"))
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await
        .expect("request sent");
    assert_eq!(response.status(), 400);
}

#[tokio::test]
async fn reference_tables_are_served() {
    let addr = spawn_server().await;
    let client = reqwest::Client::new();

    let containers: Value = client
        .get(format!("http://{addr}/api/freight/containers"))
        .send()
        .await
        .expect("request sent")
        .json()
        .await
        .expect("json body");
    let codes: Vec<&str> = containers
        .as_array()
        .expect("array")
        .iter()
        .map(|c| c["code"].as_str().expect("code"))
        .collect();
    assert_eq!(codes, vec!["20GP", "40GP", "40HQ", "45HQ"]);

    let ports: Value = client
        .get(format!("http://{addr}/api/freight/ports"))
        .send()
        .await
        .expect("request sent")
        .json()
        .await
        .expect("json body");
    assert!(ports
        .as_array()
        .expect("array")
        .iter()
        .any(|p| p["code"] == "CNSHA"));

    let cost_types: Value = client
        .get(format!("http://{addr}/api/freight/cost-types"))
        .send()
        .await
        .expect("request sent")
        .json()
        .await
        .expect("json body");
    let rows = cost_types.as_array().expect("array");
    assert_eq!(rows.len(), 7);
    let ocean = rows
        .iter()
        .find(|row| row["code"] == "oceanFreight")
        .expect("oceanFreight row");
    assert_eq!(ocean["fob"], "buyer");
    assert_eq!(ocean["cif"], "seller");
}

#[tokio::test]
async fn health_reports_name_and_version() {
    let addr = spawn_server().await;
    let body: Value = reqwest::Client::new()
        .get(format!("http://{addr}/api/health"))
        .send()
        .await
        .expect("request sent")
        .json()
        .await
        .expect("json body");
    assert_eq!(body["status"], "ok");
    assert_eq!(body["name"], "Freight Cost Planner");
    assert!(body["version"].is_string());
}
