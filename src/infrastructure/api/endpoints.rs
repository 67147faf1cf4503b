//! One method per backend capability. Each issues exactly one request.

use crate::domain::entities::holding::HoldingQuery;
use crate::domain::entities::strategy::StrategyKind;
use crate::domain::error::ApiError;
use crate::infrastructure::api::client::{ApiClient, ApiResponse};
use serde::Serialize;

pub const SELECTION_STRATEGIES: &str = "/selection/strategies";
pub const SELECTION_GENERATE_POOL: &str = "/selection/generate_pool";
pub const TIMING_STRATEGIES: &str = "/timing/strategies";
pub const TIMING_GENERATE_SIGNALS: &str = "/timing/generate_signals";
pub const EXIT_STRATEGIES: &str = "/exit/strategies";
pub const EXIT_HOLDINGS: &str = "/exit/holdings";
pub const EXIT_CHECK_SIGNALS: &str = "/exit/check_signals";
pub const BACKTEST_RUN: &str = "/backtesting_lab/run_backtest";

fn holding_path(id: i64) -> String {
    format!("{EXIT_HOLDINGS}/{id}")
}

impl ApiClient {
    // Selection

    pub async fn fetch_selection_strategies(&self) -> Result<ApiResponse, ApiError> {
        self.get(SELECTION_STRATEGIES).await
    }

    pub async fn generate_selection_pool<B: Serialize + ?Sized>(&self, body: &B) -> Result<ApiResponse, ApiError> {
        self.post(SELECTION_GENERATE_POOL, body).await
    }

    // Timing

    pub async fn fetch_timing_strategies(&self) -> Result<ApiResponse, ApiError> {
        self.get(TIMING_STRATEGIES).await
    }

    pub async fn generate_timing_signals<B: Serialize + ?Sized>(&self, body: &B) -> Result<ApiResponse, ApiError> {
        self.post(TIMING_GENERATE_SIGNALS, body).await
    }

    // Exit

    pub async fn fetch_exit_strategies(&self) -> Result<ApiResponse, ApiError> {
        self.get(EXIT_STRATEGIES).await
    }

    pub async fn create_holding<B: Serialize + ?Sized>(&self, body: &B) -> Result<ApiResponse, ApiError> {
        self.post(EXIT_HOLDINGS, body).await
    }

    /// List holdings; `None` sends no query string at all.
    pub async fn fetch_holdings(&self, query: Option<&HoldingQuery>) -> Result<ApiResponse, ApiError> {
        match query {
            Some(q) => self.get_with_query(EXIT_HOLDINGS, q).await,
            None => self.get(EXIT_HOLDINGS).await,
        }
    }

    pub async fn fetch_holding_by_id(&self, id: i64) -> Result<ApiResponse, ApiError> {
        self.get(&holding_path(id)).await
    }

    pub async fn update_holding<B: Serialize + ?Sized>(&self, id: i64, body: &B) -> Result<ApiResponse, ApiError> {
        self.put(&holding_path(id), body).await
    }

    pub async fn delete_holding(&self, id: i64) -> Result<ApiResponse, ApiError> {
        self.delete(&holding_path(id)).await
    }

    pub async fn check_exit_signals_for_holdings<B: Serialize + ?Sized>(
        &self,
        body: &B,
    ) -> Result<ApiResponse, ApiError> {
        self.post(EXIT_CHECK_SIGNALS, body).await
    }

    // Backtesting

    pub async fn run_backtest<B: Serialize + ?Sized>(&self, body: &B) -> Result<ApiResponse, ApiError> {
        self.post(BACKTEST_RUN, body).await
    }

    /// Strategy listing for any engine.
    pub async fn fetch_strategies(&self, kind: StrategyKind) -> Result<ApiResponse, ApiError> {
        match kind {
            StrategyKind::Selection => self.fetch_selection_strategies().await,
            StrategyKind::Timing => self.fetch_timing_strategies().await,
            StrategyKind::Exit => self.fetch_exit_strategies().await,
        }
    }
}
