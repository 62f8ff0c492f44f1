use serde::Deserialize;
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

use super::de;

/// Reporting window published by the leaderboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Window {
    Day,
    Week,
    Month,
    AllTime,
}

impl Window {
    /// Key used in `windowPerformances`.
    pub fn key(&self) -> &'static str {
        match self {
            Window::Day => "day",
            Window::Week => "week",
            Window::Month => "month",
            Window::AllTime => "allTime",
        }
    }
}

impl fmt::Display for Window {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Window {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "day" | "daily" => Ok(Window::Day),
            "week" | "weekly" => Ok(Window::Week),
            "month" | "monthly" => Ok(Window::Month),
            "alltime" | "all" => Ok(Window::AllTime),
            other => anyhow::bail!("Unknown window \"{}\". Use day, week, month or allTime", other),
        }
    }
}

/// PnL, ROI and volume aggregated over one window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
pub struct WindowPerformance {
    #[serde(default, deserialize_with = "de::f64_or_zero")]
    pub pnl: f64,
    #[serde(default, deserialize_with = "de::f64_or_zero")]
    pub roi: f64,
    #[serde(default, rename = "vlm", deserialize_with = "de::f64_or_zero")]
    pub volume: f64,
}

/// One row of `leaderboardRows`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TraderRecord {
    #[serde(default, rename = "ethAddress", deserialize_with = "de::string_or_empty")]
    pub address: String,
    #[serde(default, deserialize_with = "de::optional_string")]
    pub display_name: Option<String>,
    #[serde(default, deserialize_with = "de::f64_or_zero")]
    pub account_value: f64,
    /// `[windowKey, {pnl, roi, vlm}]` pairs in upstream order.
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub window_performances: Vec<(String, WindowPerformance)>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardResponse {
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub leaderboard_rows: Vec<Value>,
}
