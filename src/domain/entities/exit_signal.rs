use crate::domain::entities::selection::ParamMap;
use serde::{Deserialize, Serialize};

/// Request to evaluate an exit strategy. `holding_ids: None` (or empty) asks
/// the backend to check every active holding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExitSignalRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub holding_ids: Option<Vec<i64>>,
    pub strategy_id: String,
    #[serde(default)]
    pub params: ParamMap,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExitSignalItem {
    pub holding_id: i64,
    pub ts_code: String,
    #[serde(default)]
    pub name: Option<String>,
    /// e.g. `TAKE_PROFIT_FIXED`, `STOP_LOSS_FIXED`
    pub signal_type: String,
    pub trigger_date: String,
    pub trigger_price: f64,
    #[serde(default)]
    pub target_price: Option<f64>,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExitSignalResponse {
    pub signals: Vec<ExitSignalItem>,
    pub strategy_used: String,
    #[serde(default)]
    pub params_used: ParamMap,
    pub request_timestamp: String,
    #[serde(default)]
    pub data_timestamp: Option<String>,
}
