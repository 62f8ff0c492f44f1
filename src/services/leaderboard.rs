use serde_json::Value;
use std::time::Duration;

use crate::config::Env;
use crate::error::FetchError;
use crate::interfaces::{LeaderboardResponse, RankedTrader, TraderRecord, Window, WindowPerformance};
use crate::utils::{fetch_data, Logger};

/// Fetch every leaderboard row. Any failure is logged and yields an empty list.
pub async fn fetch_leaderboard(env: &Env) -> Vec<TraderRecord> {
    Logger::info("Fetching leaderboard...");

    match request_leaderboard(env).await {
        Ok(traders) => {
            Logger::success(&format!("Got {} traders from leaderboard", traders.len()));
            traders
        }
        Err(e) => {
            Logger::error(&format!("Error fetching leaderboard: {}", e));
            Vec::new()
        }
    }
}

async fn request_leaderboard(env: &Env) -> Result<Vec<TraderRecord>, FetchError> {
    let timeout = Duration::from_millis(env.leaderboard_timeout_ms);
    let response: LeaderboardResponse = fetch_data(&env.leaderboard_url, timeout).await?;
    Ok(parse_leaderboard_rows(response.leaderboard_rows))
}

/// Decode rows one at a time, skipping any that are structurally broken.
pub fn parse_leaderboard_rows(rows: Vec<Value>) -> Vec<TraderRecord> {
    let total = rows.len();
    let traders: Vec<TraderRecord> = rows
        .into_iter()
        .filter_map(|v| serde_json::from_value(v).ok())
        .collect();

    if traders.len() < total {
        tracing::warn!(skipped = total - traders.len(), "undecodable leaderboard rows");
    }
    traders
}

/// First matching window entry, or all zeros when the trader has none.
pub fn get_window_performance(trader: &TraderRecord, window: Window) -> WindowPerformance {
    trader
        .window_performances
        .iter()
        .find(|(key, _)| key == window.key())
        .map(|(_, performance)| *performance)
        .unwrap_or_default()
}

/// Top `limit` traders by window PnL, highest first. Zero-PnL traders are dropped.
pub fn rank_traders(traders: &[TraderRecord], window: Window, limit: usize) -> Vec<RankedTrader> {
    let mut ranked: Vec<RankedTrader> = traders
        .iter()
        .filter_map(|trader| {
            let performance = get_window_performance(trader, window);
            (performance.pnl != 0.0).then(|| RankedTrader::new(trader, performance))
        })
        .collect();

    // Stable: equal PnL keeps leaderboard order.
    ranked.sort_by(|a, b| b.pnl.total_cmp(&a.pnl));
    ranked.truncate(limit);
    ranked
}
