//! Position extraction and the clearinghouseState request

mod common;

use common::{asset_position, clearinghouse_body, spawn_server, test_env, ADDRESS_A, ADDRESS_B};
use hyperliquid_top_traders::interfaces::{ClearinghouseState, Direction, LeverageType};
use hyperliquid_top_traders::services::{extract_positions, fetch_positions};
use serde_json::json;

fn state(value: serde_json::Value) -> ClearinghouseState {
    serde_json::from_value(value).expect("valid clearinghouse state")
}

#[test]
fn test_long_and_short_positions() {
    let positions = extract_positions(state(json!({
        "assetPositions": [asset_position("BTC", "1.5"), asset_position("ETH", "-2.25")]
    })));

    assert_eq!(positions.len(), 2);

    let btc = &positions[0];
    assert_eq!(btc.coin, "BTC");
    assert_eq!(btc.direction, Direction::Long);
    assert_eq!(btc.size, 1.5);
    assert_eq!(btc.entry_px, "64000.5");
    assert_eq!(btc.leverage, 20.0);
    assert_eq!(btc.leverage_type, LeverageType::Isolated);
    assert_eq!(btc.position_value, "96000.75");
    assert_eq!(btc.unrealized_pnl, "-15.2");
    assert_eq!(btc.return_on_equity, "-0.0031");
    assert_eq!(btc.liquidation_px, "60123.4");

    let eth = &positions[1];
    assert_eq!(eth.direction, Direction::Short);
    assert_eq!(eth.size, 2.25);
}

#[test]
fn test_zero_size_positions_are_excluded() {
    let positions = extract_positions(state(json!({
        "assetPositions": [
            asset_position("BTC", "0.0"),
            asset_position("SOL", "-0"),
            asset_position("ETH", "3")
        ]
    })));

    assert_eq!(positions.len(), 1);
    assert_eq!(positions[0].coin, "ETH");
    assert!(positions.iter().all(|p| p.size > 0.0));
}

#[test]
fn test_missing_fields_use_defaults() {
    let positions = extract_positions(state(json!({
        "assetPositions": [{"position": {"coin": "DOGE", "szi": "-100"}}]
    })));

    assert_eq!(positions.len(), 1);
    let doge = &positions[0];
    assert_eq!(doge.direction, Direction::Short);
    assert_eq!(doge.size, 100.0);
    assert_eq!(doge.entry_px, "0");
    assert_eq!(doge.leverage, 0.0);
    assert_eq!(doge.leverage_type, LeverageType::Cross);
    assert_eq!(doge.position_value, "0");
    assert_eq!(doge.unrealized_pnl, "0");
    assert_eq!(doge.return_on_equity, "0");
    assert_eq!(doge.liquidation_px, "");
}

#[test]
fn test_null_liquidation_price_is_empty() {
    let positions = extract_positions(state(json!({
        "assetPositions": [{"position": {
            "coin": "ARB",
            "szi": "10",
            "liquidationPx": null,
            "leverage": {"type": "cross", "value": 5}
        }}]
    })));

    assert_eq!(positions[0].liquidation_px, "");
    assert_eq!(positions[0].leverage_type, LeverageType::Cross);
    assert_eq!(positions[0].leverage, 5.0);
}

#[test]
fn test_fractional_leverage_is_kept() {
    let positions = extract_positions(state(json!({
        "assetPositions": [
            {"position": {"coin": "HYPE", "szi": "4", "leverage": {"type": "cross", "value": 2.5}}},
            {"position": {"coin": "kPEPE", "szi": "4", "leverage": {"type": "cross", "value": "7.5"}}}
        ]
    })));

    assert_eq!(positions[0].leverage, 2.5);
    assert_eq!(positions[1].leverage, 7.5);
    let value = serde_json::to_value(&positions[0]).unwrap();
    assert_eq!(value["leverage"], 2.5);
}

#[test]
fn test_non_finite_size_is_excluded() {
    let positions = extract_positions(state(json!({
        "assetPositions": [asset_position("BTC", "NaN"), asset_position("ETH", "inf")]
    })));

    assert!(positions.is_empty());
}

#[test]
fn test_empty_or_missing_position_objects_are_skipped() {
    let positions = extract_positions(state(json!({
        "assetPositions": [
            {"position": {}},
            {"type": "oneWay"},
            {"position": null},
            asset_position("BTC", "0.1")
        ]
    })));

    assert_eq!(positions.len(), 1);
    assert_eq!(positions[0].coin, "BTC");
}

#[test]
fn test_missing_asset_positions() {
    assert!(extract_positions(state(json!({}))).is_empty());
    assert!(extract_positions(state(json!({"assetPositions": null}))).is_empty());
}

#[test]
fn test_position_serializes_camel_case() {
    let positions = extract_positions(state(json!({
        "assetPositions": [asset_position("BTC", "-1")]
    })));
    let value = serde_json::to_value(&positions[0]).unwrap();

    assert_eq!(value["direction"], "Short");
    assert_eq!(value["size"], 1.0);
    assert_eq!(value["entryPx"], "64000.5");
    assert_eq!(value["leverage"], 20.0);
    assert_eq!(value["leverageType"], "isolated");
    assert_eq!(value["positionValue"], "96000.75");
    assert_eq!(value["unrealizedPnl"], "-15.2");
    assert_eq!(value["returnOnEquity"], "-0.0031");
    assert_eq!(value["liquidationPx"], "60123.4");
}

#[tokio::test]
async fn test_fetch_positions_sends_clearinghouse_request() {
    let (base_url, log) = spawn_server(|_| {
        (200, clearinghouse_body(vec![asset_position("BTC", "2")]))
    })
    .await;
    let env = test_env(&base_url, "unused.json".into());

    let positions = fetch_positions(&env, ADDRESS_A).await;
    assert_eq!(positions.len(), 1);
    assert_eq!(positions[0].coin, "BTC");

    let requests = log.lock().unwrap().clone();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "POST");
    assert_eq!(requests[0].path, "/info");
    assert_eq!(requests[0].content_type.as_deref(), Some("application/json"));
    assert_eq!(
        requests[0].json(),
        json!({"type": "clearinghouseState", "user": ADDRESS_A})
    );
}

#[tokio::test]
async fn test_fetch_positions_http_error_yields_empty() {
    let (base_url, _log) = spawn_server(|_| (500, "{}".to_string())).await;
    let env = test_env(&base_url, "unused.json".into());

    assert!(fetch_positions(&env, ADDRESS_B).await.is_empty());
}

#[tokio::test]
async fn test_fetch_positions_malformed_body_yields_empty() {
    let (base_url, _log) = spawn_server(|_| (200, "<html>oops</html>".to_string())).await;
    let env = test_env(&base_url, "unused.json".into());

    assert!(fetch_positions(&env, ADDRESS_B).await.is_empty());
}

#[tokio::test]
async fn test_fetch_positions_unreachable_yields_empty() {
    let env = test_env("http://127.0.0.1:1", "unused.json".into());

    assert!(fetch_positions(&env, ADDRESS_A).await.is_empty());
}
