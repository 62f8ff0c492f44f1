//! Print the open positions of one wallet

use anyhow::{Context, Result};
use colored::*;
use hyperliquid_top_traders::config::load_env;
use hyperliquid_top_traders::interfaces::Direction;
use hyperliquid_top_traders::services::fetch_positions;
use hyperliquid_top_traders::utils::{init_tracing, Logger};
use regex::Regex;

fn is_valid_ethereum_address(address: &str) -> bool {
    Regex::new(r"^0x[a-fA-F0-9]{40}$")
        .map(|re| re.is_match(address))
        .unwrap_or(false)
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let env = load_env()?;
    Logger::init(&env);

    let address = std::env::args()
        .nth(1)
        .context("Usage: check_positions <address>")?
        .trim()
        .to_lowercase();

    if !is_valid_ethereum_address(&address) {
        eprintln!("\n❌ Invalid Wallet Address\n");
        eprintln!("Address:         {}", address);
        eprintln!("Expected format: 0x followed by 40 hexadecimal characters\n");
        anyhow::bail!("Invalid address format: {}", address);
    }

    println!("\n📊 OPEN POSITIONS: {}\n", address);

    let positions = fetch_positions(&env, &address).await;
    if positions.is_empty() {
        println!("❌ No open positions");
        return Ok(());
    }

    println!("✅ Found positions: {}\n", positions.len());

    for pos in &positions {
        let direction = match pos.direction {
            Direction::Long => "Long".green().bold(),
            Direction::Short => "Short".red().bold(),
        };
        println!("{}", "━".repeat(50));
        println!("Coin: {} {}", pos.coin, direction);
        println!("Size: {}", pos.size);
        println!("Entry Price: {}", pos.entry_px);
        println!("Leverage: {}x ({:?})", pos.leverage, pos.leverage_type);
        println!("Position Value: ${}", pos.position_value);
        println!("Unrealized PnL: ${}", pos.unrealized_pnl);
        println!("Return on Equity: {}", pos.return_on_equity);
        if !pos.liquidation_px.is_empty() {
            println!("Liquidation Price: {}", pos.liquidation_px);
        }
    }
    println!("{}\n", "━".repeat(50));

    Ok(())
}
