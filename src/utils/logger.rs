use chrono::Local;
use colored::*;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use tracing_subscriber::EnvFilter;

use crate::config::Env;
use crate::utils::format::{address_prefix, format_percent, format_usd, trader_label};

static LOG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Install the `tracing` subscriber. `RUST_LOG` controls the filter, default `warn`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

pub struct Logger;

impl Logger {
    /// Enable file logging when configured. Only the first call has an effect.
    pub fn init(env: &Env) {
        let dir = env.log_to_file.then(|| env.log_dir.clone());
        let _ = LOG_DIR.set(dir);
    }

    fn get_log_file_name(dir: &Path) -> PathBuf {
        let date = Local::now().format("%Y-%m-%d").to_string();
        dir.join(format!("top-traders-{}.log", date))
    }

    fn write_to_file(message: &str) {
        let Some(Some(dir)) = LOG_DIR.get() else {
            return;
        };

        if let Err(_) = (|| -> std::io::Result<()> {
            fs::create_dir_all(dir)?;
            let log_file = Self::get_log_file_name(dir);
            let timestamp = Local::now().to_rfc3339();
            let log_entry = format!("[{}] {}\n", timestamp, message);

            let mut file = fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(log_file)?;
            file.write_all(log_entry.as_bytes())?;
            Ok(())
        })() {
            // Silently fail to avoid infinite loops
        }
    }

    pub fn header(title: &str) {
        println!("{}", "=".repeat(50).cyan());
        println!("{}", title.cyan().bold());
        println!("{}", "=".repeat(50).cyan());
        Self::write_to_file(&format!("HEADER: {}", title));
    }

    pub fn separator() {
        println!("\n{}", "=".repeat(50).bright_black());
    }

    pub fn info(message: &str) {
        println!("{} {}", "ℹ".blue(), message);
        Self::write_to_file(&format!("INFO: {}", message));
    }

    pub fn success(message: &str) {
        println!("{} {}", "✓".green(), message);
        Self::write_to_file(&format!("SUCCESS: {}", message));
    }

    pub fn warning(message: &str) {
        println!("{} {}", "⚠".yellow(), message);
        Self::write_to_file(&format!("WARNING: {}", message));
    }

    pub fn error(message: &str) {
        println!("{} {}", "✗".red(), message);
        Self::write_to_file(&format!("ERROR: {}", message));
    }

    /// `[3/12] 0x12345678...`
    pub fn progress(index: usize, total: usize, address: &str) {
        let counter = format!("[{}/{}]", index, total);
        println!("  {} {}...", counter.bright_black(), address_prefix(address));
        Self::write_to_file(&format!("PROGRESS: {} {}...", counter, address_prefix(address)));
    }

    /// `#1 Whale: $1,234 (12.34%)`
    pub fn trader_line(rank: usize, display_name: Option<&str>, address: &str, pnl: f64, roi: f64) {
        let name = trader_label(display_name, address);
        let pnl_str = format_usd(pnl);
        let pnl_colored = if pnl >= 0.0 {
            pnl_str.green().bold()
        } else {
            pnl_str.red().bold()
        };
        println!(
            "  {} {}: {} ({})",
            format!("#{}", rank).yellow(),
            name,
            pnl_colored,
            format_percent(roi)
        );
        Self::write_to_file(&format!(
            "RANK: #{} {}: {} ({})",
            rank,
            name,
            pnl_str,
            format_percent(roi)
        ));
    }
}
