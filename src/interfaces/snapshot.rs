use serde::{Deserialize, Serialize};

use super::leaderboard::{TraderRecord, WindowPerformance};
use super::positions::Position;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedTrader {
    pub address: String,
    pub display_name: Option<String>,
    pub account_value: f64,
    pub pnl: f64,
    pub roi: f64,
    pub volume: f64,
    #[serde(default)]
    pub positions: Vec<Position>,
}

impl RankedTrader {
    pub fn new(record: &TraderRecord, performance: WindowPerformance) -> Self {
        Self {
            address: record.address.clone(),
            display_name: record.display_name.clone(),
            account_value: record.account_value,
            pnl: performance.pnl,
            roi: performance.roi,
            volume: performance.volume,
            positions: Vec::new(),
        }
    }
}

/// Contents of the output file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub daily: Vec<RankedTrader>,
    pub weekly: Vec<RankedTrader>,
    pub last_updated: String,
}
