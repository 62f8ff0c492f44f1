//! Rank leaderboard traders for any window without writing a snapshot

use anyhow::{Context, Result};
use hyperliquid_top_traders::config::load_env;
use hyperliquid_top_traders::interfaces::Window;
use hyperliquid_top_traders::services::{fetch_leaderboard, rank_traders};
use hyperliquid_top_traders::utils::{format_percent, format_usd, init_tracing, trader_label, Logger};

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let env = load_env()?;
    Logger::init(&env);

    let mut args = std::env::args().skip(1);
    let window = match args.next() {
        Some(raw) => raw.parse::<Window>()?,
        None => Window::Day,
    };
    let limit = match args.next() {
        Some(raw) => raw
            .parse::<usize>()
            .with_context(|| format!("Invalid limit \"{}\"", raw))?,
        None => env.top_n,
    };

    println!("🔍 Finding Top Traders ({})", window);
    println!("════════════════════════════════════════════════════\n");

    let traders = fetch_leaderboard(&env).await;
    if traders.is_empty() {
        println!("❌ No traders found in leaderboard");
        return Ok(());
    }

    let ranked = rank_traders(&traders, window, limit);
    if ranked.is_empty() {
        println!("❌ No traders with non-zero {} PnL", window);
        return Ok(());
    }

    println!("\n{}", "━".repeat(65));
    println!("📊 TOP {} TRADERS ({}):\n", ranked.len(), window);

    for (i, trader) in ranked.iter().enumerate() {
        println!("{}. {}", i + 1, trader_label(trader.display_name.as_deref(), &trader.address));
        println!("   Address: {}", trader.address);
        println!("   P&L: {}", format_usd(trader.pnl));
        println!("   ROI: {}", format_percent(trader.roi));
        println!("   Volume: {}", format_usd(trader.volume));
        println!("   Account Value: {}\n", format_usd(trader.account_value));
    }

    println!("{}", "━".repeat(65));
    println!("\n💡 Inspect open positions with: cargo run --bin check_positions -- <address>");

    Ok(())
}
