use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A tunable strategy parameter as advertised by the backend.
///
/// `value` and the bounds are left as raw JSON: the backend mixes numbers,
/// booleans and strings depending on the parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategyParam {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub value: serde_json::Value,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_value: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_value: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub step: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Preset strategy listing. Selection, timing and exit engines all return
/// this shape from their `/strategies` endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategyConfig {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub params: Vec<StrategyParam>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub historical_performance_summary: Option<BTreeMap<String, String>>,
}

impl StrategyConfig {
    /// Default parameter values keyed by name, ready to send back in a request.
    pub fn default_params(&self) -> serde_json::Map<String, serde_json::Value> {
        self.params
            .iter()
            .map(|p| (p.name.clone(), p.value.clone()))
            .collect()
    }
}

/// Which engine a strategy listing belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyKind {
    Selection,
    Timing,
    Exit,
}

impl std::fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StrategyKind::Selection => write!(f, "selection"),
            StrategyKind::Timing => write!(f, "timing"),
            StrategyKind::Exit => write!(f, "exit"),
        }
    }
}

impl std::str::FromStr for StrategyKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "selection" => Ok(StrategyKind::Selection),
            "timing" => Ok(StrategyKind::Timing),
            "exit" => Ok(StrategyKind::Exit),
            _ => Err(format!("Unknown strategy kind: {s}")),
        }
    }
}
