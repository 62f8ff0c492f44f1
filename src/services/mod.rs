pub mod leaderboard;
pub mod positions;
pub mod snapshot;
pub mod top_traders;

pub use leaderboard::{fetch_leaderboard, get_window_performance, parse_leaderboard_rows, rank_traders};
pub use positions::{extract_positions, fetch_positions};
pub use snapshot::{build_snapshot, format_timestamp, write_snapshot};
pub use top_traders::{attach_positions, run_top_traders, unique_addresses};
