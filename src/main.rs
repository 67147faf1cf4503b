use clap::Parser;
use trinity_quant::cli::commands::{parse_payload, Cli, Commands, HoldingCommand};
use trinity_quant::config::ClientConfig;
use trinity_quant::domain::entities::backtest::BacktestRequest;
use trinity_quant::domain::entities::exit_signal::ExitSignalRequest;
use trinity_quant::domain::entities::holding::{HoldingDraft, HoldingQuery};
use trinity_quant::domain::entities::selection::SelectionPoolRequest;
use trinity_quant::domain::entities::strategy::StrategyKind;
use trinity_quant::domain::entities::timing::TimingSignalRequest;
use trinity_quant::domain::error::ApiError;
use trinity_quant::infrastructure::api::client::ApiResponse;
use trinity_quant::Trinity;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "trinity_quant=info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = match ClientConfig::from_env() {
        Ok(cfg) => match &cli.base_url {
            Some(url) => cfg.with_base_url(url),
            None => Ok(cfg),
        },
        Err(e) => Err(e),
    };
    let trinity = match config.map_err(Into::into).and_then(Trinity::new) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("Error initializing client: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = run_command(trinity, cli.command).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run_command(mut trinity: Trinity, cmd: Commands) -> Result<(), Box<dyn std::error::Error>> {
    match cmd {
        Commands::Strategies { kind } => {
            let kind: StrategyKind = kind.parse().map_err(|e: String| e)?;
            print_response(trinity.api().fetch_strategies(kind).await)?;
        }
        Commands::Pool { json } => {
            let req: SelectionPoolRequest = parse_payload(&json)?;
            print_response(trinity.api().generate_selection_pool(&req).await)?;
        }
        Commands::Signals { json } => {
            let req: TimingSignalRequest = parse_payload(&json)?;
            req.validate()?;
            print_response(trinity.api().generate_timing_signals(&req).await)?;
        }
        Commands::Holdings { action } => match action {
            HoldingCommand::List { skip, limit } => {
                let query = HoldingQuery { skip, limit };
                let query = (skip.is_some() || limit.is_some()).then_some(&query);
                print_response(trinity.api().fetch_holdings(query).await)?;
            }
            HoldingCommand::Get { id } => {
                print_response(trinity.api().fetch_holding_by_id(id).await)?;
            }
            HoldingCommand::Create { json } => {
                let draft: HoldingDraft = parse_payload(&json)?;
                draft.validate()?;
                print_response(trinity.api().create_holding(&draft).await)?;
            }
            HoldingCommand::Update { id, json } => {
                let draft: HoldingDraft = parse_payload(&json)?;
                draft.validate()?;
                print_response(trinity.api().update_holding(id, &draft).await)?;
            }
            HoldingCommand::Delete { id } => {
                trinity.api().delete_holding(id).await.map_err(|e| e.status_message())?;
                println!("Holding {id} deleted");
            }
        },
        Commands::CheckExits { json } => {
            let req: ExitSignalRequest = parse_payload(&json)?;
            print_response(trinity.api().check_exit_signals_for_holdings(&req).await)?;
        }
        Commands::Backtest { json } => {
            let req: BacktestRequest = parse_payload(&json)?;
            req.validate()?;
            print_response(trinity.api().run_backtest(&req).await)?;
        }
        Commands::Navigate { paths } => {
            for path in paths {
                let nav = trinity.navigate(&path).await?;
                let out = serde_json::json!({
                    "requested": path,
                    "path": nav.location.path,
                    "title": trinity.title(),
                    "views": nav.views,
                });
                println!("{}", serde_json::to_string_pretty(&out)?);
            }
        }
        Commands::Routes => {
            println!("{}", serde_json::to_string_pretty(&trinity.menu())?);
        }
    }
    Ok(())
}

fn print_response(result: Result<ApiResponse, ApiError>) -> Result<(), Box<dyn std::error::Error>> {
    let resp = result.map_err(|e| e.status_message())?;
    println!("{}", serde_json::to_string_pretty(&resp.data)?);
    Ok(())
}
