use serde::{Deserialize, Serialize};

pub type ParamMap = serde_json::Map<String, serde_json::Value>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectionPoolRequest {
    pub strategy_id: String,
    #[serde(default)]
    pub params: ParamMap,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectedPoolItem {
    pub ts_code: String,
    pub name: String,
    #[serde(default)]
    pub current_price: Option<f64>,
    #[serde(default)]
    pub roe: Option<f64>,
    #[serde(default)]
    pub pb: Option<f64>,
    #[serde(default)]
    pub pe_ttm: Option<f64>,
    /// Fraction, e.g. 0.02 for 2%.
    #[serde(default)]
    pub dividend_yield_ratio: Option<f64>,
    /// Total market value in 亿元.
    #[serde(default)]
    pub total_mv: Option<f64>,
    #[serde(default)]
    pub momentum_6m: Option<f64>,
    #[serde(default)]
    pub composite_score: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectionPoolResponse {
    pub items: Vec<SelectedPoolItem>,
    pub strategy_used: String,
    #[serde(default)]
    pub params_used: ParamMap,
    pub timestamp: String,
}
