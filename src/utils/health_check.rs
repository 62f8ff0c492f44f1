use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;

use crate::config::Env;
use crate::interfaces::InfoRequest;
use crate::utils::{fetch_data, post_data, logger::Logger};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthCheckResult {
    pub healthy: bool,
    pub checks: HealthChecks,
    pub timestamp: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthChecks {
    pub leaderboard_api: CheckResult,
    pub info_api: CheckResult,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckResult {
    pub status: String, // "ok" | "error"
    pub message: String,
}

impl CheckResult {
    fn ok(message: impl Into<String>) -> Self {
        Self {
            status: "ok".to_string(),
            message: message.into(),
        }
    }

    fn error(message: impl Into<String>) -> Self {
        Self {
            status: "error".to_string(),
            message: message.into(),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}

pub async fn perform_health_check(env: &Env) -> HealthCheckResult {
    let leaderboard_timeout = Duration::from_millis(env.leaderboard_timeout_ms);
    let leaderboard_api = match fetch_data::<Value>(&env.leaderboard_url, leaderboard_timeout).await {
        Ok(body) => {
            let rows = body
                .get("leaderboardRows")
                .and_then(Value::as_array)
                .map_or(0, Vec::len);
            CheckResult::ok(format!("Reachable ({} rows)", rows))
        }
        Err(e) => CheckResult::error(format!("Request failed: {}", e)),
    };

    let info_timeout = Duration::from_millis(env.positions_timeout_ms);
    let meta = InfoRequest {
        request_type: "meta",
        user: None,
    };
    let info_api = match post_data::<_, Value>(&env.info_url, &meta, info_timeout).await {
        Ok(_) => CheckResult::ok("Reachable"),
        Err(e) => CheckResult::error(format!("Request failed: {}", e)),
    };

    HealthCheckResult {
        healthy: leaderboard_api.is_ok() && info_api.is_ok(),
        checks: HealthChecks {
            leaderboard_api,
            info_api,
        },
        timestamp: chrono::Utc::now().timestamp(),
    }
}

pub fn log_health_check(result: &HealthCheckResult) {
    Logger::header("HEALTH CHECK");

    let report = |name: &str, check: &CheckResult| {
        if check.is_ok() {
            Logger::success(&format!("{}: {}", name, check.message));
        } else {
            Logger::error(&format!("{}: {}", name, check.message));
        }
    };
    report("Leaderboard API", &result.checks.leaderboard_api);
    report("Info API", &result.checks.info_api);

    if result.healthy {
        Logger::success("All checks passed");
    } else {
        Logger::warning("One or more checks failed");
    }
}
