pub mod logger;
pub mod fetch_data;
pub mod format;
pub mod health_check;

// Re-export commonly used items
pub use logger::{init_tracing, Logger};
pub use fetch_data::{fetch_data, post_data};
pub use format::{address_prefix, format_percent, format_usd, trader_label};
pub use health_check::{perform_health_check, log_health_check};
