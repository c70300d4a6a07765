use anyhow::Context;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use chembot::kernel::event::{TurnError, TurnEvent};
use chembot::kernel::telemetry::event::TelemetryEvent;
use chembot::kernel::telemetry::recorder::TelemetryRecorder;
use chembot::{ChemBotConfig, Reactor};

/// Reads one JSON turn event per stdin line and writes one JSON line per event:
/// the turn response, or a `TurnError` when the line cannot be answered.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr; stdout carries responses only.
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).context("setting default subscriber failed")?;

    let config = ChemBotConfig::from_env()?;
    tracing::info!("ChemBot starting against {}", config.rest_root());

    let reactor = Reactor::with_pubchem(&config)?;
    let mut telemetry = TelemetryRecorder::new();

    let stdin = tokio::io::stdin();
    let mut lines = BufReader::new(stdin).lines();

    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }

        let event: TurnEvent = match serde_json::from_str(&line) {
            Ok(event) => event,
            Err(e) => {
                tracing::error!("Discarding malformed turn event: {}", e);
                println!("{}", serde_json::to_string(&TurnError::new(e))?);
                continue;
            }
        };

        let kind = Reactor::intent_kind(&event.intent_name);
        match reactor.handle_turn(event).await {
            Ok(response) => {
                if let Some(kind) = kind {
                    telemetry.record(TelemetryEvent::turn(kind, &response.dialog_action));
                }
                println!("{}", serde_json::to_string(&response)?);
            }
            Err(e) => {
                telemetry.record(TelemetryEvent::UnsupportedIntent);
                tracing::error!("{}", e);
                println!("{}", serde_json::to_string(&TurnError::new(e))?);
            }
        }
    }

    tracing::info!("Session telemetry: {:?}", telemetry.snapshot());
    Ok(())
}
