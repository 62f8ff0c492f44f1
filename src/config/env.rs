use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;

pub const DEFAULT_LEADERBOARD_URL: &str = "https://stats-data.hyperliquid.xyz/Mainnet/leaderboard";
pub const DEFAULT_INFO_URL: &str = "https://api.hyperliquid.xyz/info";
pub const DEFAULT_DATA_FILE: &str = "data.json";

#[derive(Debug, Clone)]
pub struct Env {
    pub leaderboard_url: String,
    pub info_url: String,
    pub data_file: PathBuf,
    pub top_n: usize,
    pub summary_count: usize,
    pub leaderboard_timeout_ms: u64,
    pub positions_timeout_ms: u64,
    pub log_to_file: bool,
    pub log_dir: PathBuf,
}

impl Default for Env {
    fn default() -> Self {
        Self {
            leaderboard_url: DEFAULT_LEADERBOARD_URL.to_string(),
            info_url: DEFAULT_INFO_URL.to_string(),
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            top_n: 10,
            summary_count: 3,
            leaderboard_timeout_ms: 30_000,
            positions_timeout_ms: 15_000,
            log_to_file: false,
            log_dir: PathBuf::from("logs"),
        }
    }
}

fn validate_urls() -> Result<()> {
    for key in ["LEADERBOARD_URL", "INFO_URL"] {
        if let Ok(url) = env::var(key) {
            if !url.starts_with("http") {
                eprintln!("\n❌ Invalid {}\n", key);
                eprintln!("Current value: {}", url);
                eprintln!("Must start with: http:// or https://\n");
                anyhow::bail!("Invalid {}: must be a valid HTTP/HTTPS URL", key);
            }
        }
    }

    Ok(())
}

fn validate_numeric_config() -> Result<()> {
    let top_n = env::var("TOP_N")
        .unwrap_or_else(|_| "10".to_string())
        .parse::<usize>()
        .context("Invalid TOP_N")?;
    if top_n < 1 || top_n > 100 {
        anyhow::bail!("Invalid TOP_N: must be between 1 and 100");
    }

    env::var("SUMMARY_COUNT")
        .unwrap_or_else(|_| "3".to_string())
        .parse::<usize>()
        .context("Invalid SUMMARY_COUNT")?;

    for key in ["LEADERBOARD_TIMEOUT_MS", "POSITIONS_TIMEOUT_MS"] {
        if let Ok(raw) = env::var(key) {
            let timeout = raw
                .parse::<u64>()
                .with_context(|| format!("Invalid {}", key))?;
            if timeout < 1000 {
                anyhow::bail!("Invalid {}: must be at least 1000ms", key);
            }
        }
    }

    Ok(())
}

fn validate_data_file() -> Result<()> {
    if let Ok(path) = env::var("DATA_FILE") {
        if path.trim().is_empty() {
            anyhow::bail!("Invalid DATA_FILE: must not be empty");
        }
    }

    Ok(())
}

pub fn load_env() -> Result<Env> {
    dotenvy::dotenv().ok(); // Load .env file if it exists

    validate_urls()?;
    validate_numeric_config()?;
    validate_data_file()?;

    let defaults = Env::default();

    Ok(Env {
        leaderboard_url: env::var("LEADERBOARD_URL").unwrap_or(defaults.leaderboard_url),
        info_url: env::var("INFO_URL").unwrap_or(defaults.info_url),
        data_file: env::var("DATA_FILE")
            .map(PathBuf::from)
            .unwrap_or(defaults.data_file),
        top_n: env::var("TOP_N")
            .ok()
            .and_then(|v| v.parse::<usize>().ok())
            .unwrap_or(defaults.top_n),
        summary_count: env::var("SUMMARY_COUNT")
            .ok()
            .and_then(|v| v.parse::<usize>().ok())
            .unwrap_or(defaults.summary_count),
        leaderboard_timeout_ms: env::var("LEADERBOARD_TIMEOUT_MS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(defaults.leaderboard_timeout_ms),
        positions_timeout_ms: env::var("POSITIONS_TIMEOUT_MS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(defaults.positions_timeout_ms),
        log_to_file: env::var("LOG_TO_FILE")
            .unwrap_or_else(|_| "false".to_string())
            .parse::<bool>()
            .unwrap_or(false),
        log_dir: env::var("LOG_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.log_dir),
    })
}
