use std::time::Duration;

use crate::config::Env;
use crate::error::FetchError;
use crate::interfaces::{AssetPosition, ClearinghouseState, InfoRequest, Position, RawPosition};
use crate::utils::{address_prefix, post_data, Logger};

/// Open positions for one wallet. Any failure is logged and yields an empty list.
pub async fn fetch_positions(env: &Env, address: &str) -> Vec<Position> {
    match request_positions(env, address).await {
        Ok(positions) => positions,
        Err(e) => {
            Logger::error(&format!(
                "Error fetching positions for {}...: {}",
                address_prefix(address),
                e
            ));
            Vec::new()
        }
    }
}

async fn request_positions(env: &Env, address: &str) -> Result<Vec<Position>, FetchError> {
    let timeout = Duration::from_millis(env.positions_timeout_ms);
    let request = InfoRequest::clearinghouse_state(address);
    let state: ClearinghouseState = post_data(&env.info_url, &request, timeout).await?;
    Ok(extract_positions(state))
}

/// Non-zero positions in upstream order. Entries without a position object are ignored.
pub fn extract_positions(state: ClearinghouseState) -> Vec<Position> {
    state
        .asset_positions
        .into_iter()
        .filter_map(|v| serde_json::from_value::<AssetPosition>(v).ok())
        .filter(|asset| {
            asset
                .position
                .as_object()
                .is_some_and(|fields| !fields.is_empty())
        })
        .filter_map(|asset| serde_json::from_value::<RawPosition>(asset.position).ok())
        .filter_map(RawPosition::into_position)
        .collect()
}
