use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::de;

pub const CLEARINGHOUSE_STATE: &str = "clearinghouseState";

/// Body of a POST to the info endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct InfoRequest<'a> {
    #[serde(rename = "type")]
    pub request_type: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<&'a str>,
}

impl<'a> InfoRequest<'a> {
    pub fn clearinghouse_state(user: &'a str) -> Self {
        Self {
            request_type: CLEARINGHOUSE_STATE,
            user: Some(user),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClearinghouseState {
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub asset_positions: Vec<Value>,
}

#[derive(Debug, Default, Deserialize)]
pub struct AssetPosition {
    #[serde(default)]
    pub position: Value,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Long,
    Short,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeverageType {
    #[default]
    Cross,
    Isolated,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Leverage {
    #[serde(default, deserialize_with = "de::f64_or_zero")]
    pub value: f64,
    #[serde(default, rename = "type", deserialize_with = "de::leverage_type")]
    pub kind: LeverageType,
}

/// Upstream `position` object.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPosition {
    #[serde(default, deserialize_with = "de::f64_or_zero")]
    pub szi: f64,
    #[serde(default, deserialize_with = "de::string_or_empty")]
    pub coin: String,
    #[serde(default = "de::zero_string", deserialize_with = "de::decimal_string")]
    pub entry_px: String,
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub leverage: Leverage,
    #[serde(default = "de::zero_string", deserialize_with = "de::decimal_string")]
    pub position_value: String,
    #[serde(default = "de::zero_string", deserialize_with = "de::decimal_string")]
    pub unrealized_pnl: String,
    #[serde(default = "de::zero_string", deserialize_with = "de::decimal_string")]
    pub return_on_equity: String,
    #[serde(default, deserialize_with = "de::string_or_empty")]
    pub liquidation_px: String,
}

impl RawPosition {
    /// `None` when the signed size is exactly zero.
    pub fn into_position(self) -> Option<Position> {
        if self.szi == 0.0 {
            return None;
        }

        let direction = if self.szi > 0.0 {
            Direction::Long
        } else {
            Direction::Short
        };

        Some(Position {
            coin: self.coin,
            direction,
            size: self.szi.abs(),
            entry_px: self.entry_px,
            leverage: self.leverage.value,
            leverage_type: self.leverage.kind,
            position_value: self.position_value,
            unrealized_pnl: self.unrealized_pnl,
            return_on_equity: self.return_on_equity,
            liquidation_px: self.liquidation_px,
        })
    }
}

/// Open position as written to the snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    pub coin: String,
    pub direction: Direction,
    pub size: f64,
    pub entry_px: String,
    pub leverage: f64,
    pub leverage_type: LeverageType,
    pub position_value: String,
    pub unrealized_pnl: String,
    pub return_on_equity: String,
    pub liquidation_px: String,
}
