use anyhow::Result;
use hyperliquid_top_traders::config::load_env;
use hyperliquid_top_traders::services::run_top_traders;
use hyperliquid_top_traders::utils::{init_tracing, Logger};

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let env = load_env()?;
    Logger::init(&env);

    Logger::header("Hyperliquid Top Traders Fetcher");

    // A failed leaderboard fetch is already logged; exit normally without output.
    run_top_traders(&env).await?;

    Ok(())
}
