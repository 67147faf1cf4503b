use crate::domain::entities::selection::ParamMap;
use crate::domain::error::DomainError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategySetting {
    pub id: String,
    #[serde(default)]
    pub params: ParamMap,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BacktestConfig {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default = "default_initial_cash")]
    pub initial_cash: f64,
    /// Commission in basis points.
    #[serde(default = "default_commission_bps")]
    pub commission_bps: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub benchmark_ticker: Option<String>,
}

fn default_initial_cash() -> f64 {
    1_000_000.0
}

fn default_commission_bps() -> f64 {
    2.5
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BacktestRequest {
    pub selection_strategy: StrategySetting,
    pub timing_strategy: StrategySetting,
    pub exit_strategy: StrategySetting,
    pub backtest_config: BacktestConfig,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_tickers: Option<Vec<String>>,
}

impl BacktestRequest {
    pub fn validate(&self) -> Result<(), DomainError> {
        let cfg = &self.backtest_config;
        if cfg.end_date <= cfg.start_date {
            return Err(DomainError::InvalidInput(format!(
                "end_date {} must be after start_date {}",
                cfg.end_date, cfg.start_date
            )));
        }
        if !(cfg.initial_cash > 0.0) {
            return Err("initial_cash must be positive".into());
        }
        if cfg.commission_bps < 0.0 {
            return Err("commission_bps must not be negative".into());
        }
        if matches!(&self.target_tickers, Some(t) if t.is_empty()) {
            return Err("target_tickers, when given, must not be empty".into());
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceSummary {
    pub total_return: f64,
    pub annual_return: f64,
    pub max_drawdown: f64,
    pub sharpe_ratio: f64,
    #[serde(default)]
    pub sortino_ratio: Option<f64>,
    #[serde(default)]
    pub alpha: Option<f64>,
    #[serde(default)]
    pub beta: Option<f64>,
    #[serde(default)]
    pub win_rate: Option<f64>,
    #[serde(default)]
    pub profit_loss_ratio: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquityPoint {
    pub date: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradesSummary {
    #[serde(default)]
    pub total_trades: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BacktestResult {
    pub performance_summary: PerformanceSummary,
    /// Keyed by series, `strategy` and (optionally) `benchmark`.
    pub equity_curve: BTreeMap<String, Vec<EquityPoint>>,
    #[serde(default)]
    pub trades_summary: Option<TradesSummary>,
    #[serde(default)]
    pub config_used: ParamMap,
    pub timestamp: String,
    #[serde(default = "default_status")]
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
}

fn default_status() -> String {
    "completed".to_string()
}

impl BacktestResult {
    pub fn strategy_curve(&self) -> &[EquityPoint] {
        self.equity_curve
            .get("strategy")
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}
