use anyhow::Result;
use std::collections::{HashMap, HashSet};

use crate::config::Env;
use crate::interfaces::{Position, RankedTrader, Snapshot, Window};
use crate::services::{build_snapshot, fetch_leaderboard, fetch_positions, rank_traders, write_snapshot};
use crate::utils::Logger;

/// Fetch, rank, enrich and persist one snapshot.
///
/// Returns `Ok(None)` when the leaderboard could not be fetched; the output
/// file is left untouched in that case. Errors are only returned for a
/// failed write.
pub async fn run_top_traders(env: &Env) -> Result<Option<Snapshot>> {
    let traders = fetch_leaderboard(env).await;
    if traders.is_empty() {
        Logger::error("Failed to fetch leaderboard");
        return Ok(None);
    }

    println!();
    Logger::info(&format!("Processing daily top {}...", env.top_n));
    let mut daily = rank_traders(&traders, Window::Day, env.top_n);
    Logger::info(&format!("Processing weekly top {}...", env.top_n));
    let mut weekly = rank_traders(&traders, Window::Week, env.top_n);

    let addresses = unique_addresses(&daily, &weekly);
    println!();
    Logger::info(&format!(
        "Fetching positions for {} unique traders...",
        addresses.len()
    ));

    let mut positions_map: HashMap<String, Vec<Position>> = HashMap::with_capacity(addresses.len());
    for (i, address) in addresses.iter().enumerate() {
        Logger::progress(i + 1, addresses.len(), address);
        let positions = fetch_positions(env, address).await;
        positions_map.insert(address.clone(), positions);
    }

    attach_positions(&mut daily, &positions_map);
    attach_positions(&mut weekly, &positions_map);

    Logger::separator();
    print_top(&format!("Daily Top {}:", env.summary_count), &daily, env.summary_count);
    println!();
    print_top(&format!("Weekly Top {}:", env.summary_count), &weekly, env.summary_count);

    let snapshot = build_snapshot(daily, weekly);
    write_snapshot(&env.data_file, &snapshot).await?;
    println!();
    Logger::success(&format!("Saved to {}", env.data_file.display()));

    Ok(Some(snapshot))
}

/// Addresses from both lists, first occurrence wins.
pub fn unique_addresses(daily: &[RankedTrader], weekly: &[RankedTrader]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut addresses = Vec::new();
    for trader in daily.iter().chain(weekly) {
        if seen.insert(trader.address.as_str()) {
            addresses.push(trader.address.clone());
        }
    }
    addresses
}

pub fn attach_positions(traders: &mut [RankedTrader], positions: &HashMap<String, Vec<Position>>) {
    for trader in traders {
        trader.positions = positions.get(&trader.address).cloned().unwrap_or_default();
    }
}

pub fn print_top(title: &str, traders: &[RankedTrader], count: usize) {
    println!("{}", title);
    for (i, trader) in traders.iter().take(count).enumerate() {
        Logger::trader_line(
            i + 1,
            trader.display_name.as_deref(),
            &trader.address,
            trader.pnl,
            trader.roi,
        );
    }
}
