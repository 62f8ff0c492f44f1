//! Standalone health check utility

use anyhow::Result;
use colored::*;
use hyperliquid_top_traders::config::load_env;
use hyperliquid_top_traders::utils::{init_tracing, log_health_check, perform_health_check, Logger};

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let env = load_env()?;
    Logger::init(&env);

    println!("\n{}", "━".repeat(60).cyan().bold());
    println!("{}", "     🏥 HYPERLIQUID TOP TRADERS - HEALTH CHECK".cyan().bold());
    println!("{}\n", "━".repeat(60).cyan().bold());

    println!("Leaderboard URL: {}", env.leaderboard_url);
    println!("Info URL:        {}\n", env.info_url);

    let result = perform_health_check(&env).await;
    log_health_check(&result);

    if !result.healthy {
        println!("\n{}", "📋 Troubleshooting:".yellow().bold());
        if !result.checks.leaderboard_api.is_ok() {
            println!("   • Check LEADERBOARD_URL in .env and your internet connection");
        }
        if !result.checks.info_api.is_ok() {
            println!("   • Check INFO_URL in .env; the info API may be down");
        }
        println!();
        std::process::exit(1);
    }

    Ok(())
}
