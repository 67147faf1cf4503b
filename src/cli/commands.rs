use crate::domain::error::DomainError;
use clap::{Parser, Subcommand};
use serde::de::DeserializeOwned;

#[derive(Parser)]
#[command(name = "trinity", about = "三位一体量化助手 client: strategy engines, holdings and backtests")]
pub struct Cli {
    /// Override the API base URL (default: $TRINITY_API_BASE_URL or http://localhost:8000/api/v1)
    #[arg(long, global = true)]
    pub base_url: Option<String>,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List preset strategies of an engine
    Strategies {
        /// Engine (selection, timing, exit)
        kind: String,
    },
    /// Generate a selection pool
    Pool {
        /// JSON with strategy_id and params
        json: String,
    },
    /// Generate timing signals
    Signals {
        /// JSON with target_tickers, strategy_id and params
        json: String,
    },
    /// Manage holdings
    Holdings {
        #[command(subcommand)]
        action: HoldingCommand,
    },
    /// Check exit signals for holdings
    CheckExits {
        /// JSON with strategy_id, params and optional holding_ids
        json: String,
    },
    /// Run a backtest
    Backtest {
        /// JSON with selection_strategy, timing_strategy, exit_strategy and backtest_config
        json: String,
    },
    /// Navigate the application shell and print the resulting title and views
    Navigate {
        #[arg(required = true)]
        paths: Vec<String>,
    },
    /// List navigable routes
    Routes,
}

#[derive(Subcommand)]
pub enum HoldingCommand {
    /// List holdings
    List {
        #[arg(long)]
        skip: Option<u32>,
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Show one holding
    Get { id: i64 },
    /// Add a holding
    Create {
        /// JSON with ts_code, cost_price, quantity, open_date and optional notes
        json: String,
    },
    /// Replace a holding
    Update {
        id: i64,
        /// JSON with ts_code, cost_price, quantity, open_date and optional notes
        json: String,
    },
    /// Delete a holding
    Delete { id: i64 },
}

/// Decode a JSON payload argument into its typed request.
pub fn parse_payload<T: DeserializeOwned>(json: &str) -> Result<T, DomainError> {
    Ok(serde_json::from_str(json)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::holding::HoldingDraft;
    use crate::domain::entities::selection::SelectionPoolRequest;

    #[test]
    fn test_parse_holdings_update() {
        let cli = Cli::try_parse_from([
            "trinity",
            "--base-url",
            "http://127.0.0.1:9000/api/v1",
            "holdings",
            "update",
            "7",
            r#"{"ts_code":"000001.SZ"}"#,
        ])
        .unwrap();
        assert_eq!(cli.base_url.as_deref(), Some("http://127.0.0.1:9000/api/v1"));
        match cli.command {
            Commands::Holdings {
                action: HoldingCommand::Update { id, .. },
            } => assert_eq!(id, 7),
            _ => panic!("wrong command"),
        }
    }

    #[test]
    fn test_navigate_requires_path() {
        assert!(Cli::try_parse_from(["trinity", "navigate"]).is_err());
    }

    #[test]
    fn test_parse_payload() {
        let req: SelectionPoolRequest =
            parse_payload(r#"{"strategy_id":"value_roe_pe","params":{"min_roe":15}}"#).unwrap();
        assert_eq!(req.strategy_id, "value_roe_pe");
        assert_eq!(req.params["min_roe"], 15);

        let err = parse_payload::<HoldingDraft>(r#"{"ts_code":"000001.SZ""#).unwrap_err();
        assert!(matches!(err, DomainError::Parse(_)), "got {err:?}");
    }
}
