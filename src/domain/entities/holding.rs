use crate::domain::error::DomainError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Body for creating or replacing a holding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoldingDraft {
    /// Exchange-qualified code, e.g. `000001.SZ`.
    pub ts_code: String,
    pub cost_price: f64,
    pub quantity: i64,
    pub open_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl HoldingDraft {
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.ts_code.trim().is_empty() {
            return Err("ts_code is required".into());
        }
        if !(self.cost_price > 0.0) {
            return Err(DomainError::InvalidInput(format!(
                "cost_price must be positive, got {}",
                self.cost_price
            )));
        }
        if self.quantity <= 0 {
            return Err(DomainError::InvalidInput(format!(
                "quantity must be positive, got {}",
                self.quantity
            )));
        }
        Ok(())
    }
}

/// A stored holding with the backend-computed market fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Holding {
    pub id: i64,
    pub ts_code: String,
    pub cost_price: f64,
    pub quantity: i64,
    pub open_date: NaiveDate,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub current_price: Option<f64>,
    #[serde(default)]
    pub profit_loss_amount: Option<f64>,
    #[serde(default)]
    pub profit_loss_percent: Option<f64>,
}

/// Pagination for the holdings listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct HoldingQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}
