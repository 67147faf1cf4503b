use crate::domain::entities::selection::ParamMap;
use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimingSignalRequest {
    pub target_tickers: Vec<String>,
    pub strategy_id: String,
    #[serde(default)]
    pub params: ParamMap,
}

impl TimingSignalRequest {
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.target_tickers.is_empty() {
            return Err("target_tickers must contain at least one ticker".into());
        }
        if self.strategy_id.trim().is_empty() {
            return Err("strategy_id is required".into());
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimingSignalItem {
    pub ts_code: String,
    #[serde(default)]
    pub name: Option<String>,
    /// e.g. `BUY_RSI_OVERSOLD`, `SELL_RSI_OVERBOUGHT`
    pub signal_type: String,
    pub trigger_date: String,
    #[serde(default)]
    pub trigger_price: Option<f64>,
    #[serde(default)]
    pub signal_strength: Option<f64>,
    #[serde(default)]
    pub indicator_values: Option<ParamMap>,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimingSignalResponse {
    pub signals: Vec<TimingSignalItem>,
    pub strategy_used: String,
    #[serde(default)]
    pub params_used: ParamMap,
    pub request_timestamp: String,
    #[serde(default)]
    pub data_timestamp: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_tickers_rejected() {
        let req = TimingSignalRequest {
            target_tickers: vec![],
            strategy_id: "ma_cross".into(),
            params: ParamMap::new(),
        };
        assert!(matches!(req.validate(), Err(DomainError::InvalidInput(_))));
    }

    #[test]
    fn test_valid_request() {
        let req = TimingSignalRequest {
            target_tickers: vec!["000001.SZ".into()],
            strategy_id: "rsi_oversold_rebound".into(),
            params: ParamMap::new(),
        };
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_signal_response_decodes_without_price() {
        let raw = serde_json::json!({
            "signals": [
                {
                    "ts_code": "000001.SZ",
                    "name": "平安银行",
                    "signal_type": "BUY_RSI_OVERSOLD",
                    "trigger_date": "2024-05-06",
                    "trigger_price": 10.52,
                    "signal_strength": 0.8,
                    "indicator_values": {"rsi": 25.5}
                },
                {
                    "ts_code": "600036.SH",
                    "signal_type": "OBSERVE_MA_CROSS",
                    "trigger_date": "2024-05-06"
                }
            ],
            "strategy_used": "rsi_oversold_rebound",
            "params_used": {"rsi_period": 14},
            "request_timestamp": "2024-05-06T15:00:00"
        });
        let resp: TimingSignalResponse = serde_json::from_value(raw).unwrap();
        assert_eq!(resp.signals.len(), 2);
        assert_eq!(resp.signals[0].indicator_values.as_ref().unwrap()["rsi"], 25.5);
        assert_eq!(resp.signals[1].trigger_price, None);
        assert_eq!(resp.signals[1].name, None);
        assert_eq!(resp.data_timestamp, None);
    }
}
