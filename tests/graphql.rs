use std::sync::Arc;

use metro_rs::{
    services::{
        build::build_graph,
        system::{MetroSystem, SystemSettings},
    },
    structures::Config,
    web::app::app,
};
use poem::test::TestClient;
use serde_json::json;

fn delhi_metro() -> Arc<MetroSystem> {
    let seed = concat!(env!("CARGO_MANIFEST_DIR"), "/data/delhi-metro.yml");
    let config = Config::parse(&format!(
        r#"
network:
  inputs:
    - ingestor: seed/yaml
      name: delhi-metro
      url: path:{seed}
accounts:
  starting_balance: 50.0
admin:
  username: admin
  password: secret
"#
    ))
    .unwrap();

    let graph = build_graph(&config.network).unwrap();
    Arc::new(MetroSystem::new(
        graph,
        SystemSettings {
            accounts: config.accounts,
            admin: config.admin,
            default_routing: config.default_routing,
        },
    ))
}

#[tokio::test]
async fn ping() {
    let cli = TestClient::new(app(delhi_metro()));

    let resp = cli
        .post("/graphql")
        .body_json(&json!({ "query": "{ ping }" }))
        .send()
        .await;
    resp.assert_status_is_ok();
    resp.assert_json(json!({ "data": { "ping": "pong" } })).await;
}

#[tokio::test]
async fn station_map_lists_seeded_network() {
    let cli = TestClient::new(app(delhi_metro()));

    let resp = cli
        .post("/graphql")
        .body_json(&json!({ "query": "{ stations { id name connections { fare } } }" }))
        .send()
        .await;
    resp.assert_status_is_ok();

    let json = resp.json().await;
    let stations = json.value().object().get("data").object().get("stations").array();
    stations.assert_len(13);
    stations.get(0).object().get("name").assert_string("Shahid Sthal");
    stations.get(4).object().get("name").assert_string("Rajiv Chowk");
}

#[tokio::test]
async fn fare_between_seeded_stations() {
    let cli = TestClient::new(app(delhi_metro()));

    // Shahid Sthal -> ITO -> Chandni Chowk -> Rajiv Chowk = 10 + 8 + 13.
    let resp = cli
        .post("/graphql")
        .body_json(&json!({
            "query": "{ fare(source: \"shahid sthal\", destination: \"RAJIV CHOWK\") }"
        }))
        .send()
        .await;
    resp.assert_status_is_ok();
    resp.assert_json(json!({ "data": { "fare": 31 } })).await;
}

#[tokio::test]
async fn book_and_recharge() {
    let cli = TestClient::new(app(delhi_metro()));

    let resp = cli
        .post("/graphql")
        .body_json(&json!({
            "query": "mutation { \
                login(username: \"angel\") { balance } \
                bookTicket(username: \"angel\", source: \"Shahid Sthal\", destination: \"Kashmere Gate\") { fare balance } \
                rechargeCard(username: \"angel\", amount: 20) }"
        }))
        .send()
        .await;
    resp.assert_status_is_ok();
    resp.assert_json(json!({
        "data": {
            "login": { "balance": 50.0 },
            "bookTicket": { "fare": 15, "balance": 35.0 },
            "rechargeCard": 55.0
        }
    }))
    .await;
}

#[tokio::test]
async fn unreachable_station_reports_no_route() {
    let cli = TestClient::new(app(delhi_metro()));

    // Karol Bagh has no connections in the seed.
    let resp = cli
        .post("/graphql")
        .body_json(&json!({
            "query": "{ fare(source: \"ITO\", destination: \"Karol Bagh\") }"
        }))
        .send()
        .await;
    resp.assert_status_is_ok();

    let json = resp.json().await;
    let error = json.value().object().get("errors").array().get(0).object();
    error
        .get("extensions")
        .object()
        .get("code")
        .assert_string("NO_ROUTE");
}
