mod core;
mod tests;

use std::process;

use clap::Parser;

use crate::core::coordinator;
use crate::core::error::CountError;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Two workers share one counter: the first raises it to the ceiling, the
/// second brings it back down to zero once the climb has finished.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {}

#[tokio::main]
async fn main() {
    let _args = parse_command_line_args();

    let _guard = match init_tracing() {
        Ok(guard) => guard,
        Err(e) => report_failure_and_exit(e),
    };

    if let Err(e) = coordinator::run().await {
        report_failure_and_exit(e);
    }
}

fn parse_command_line_args() -> Args {
    Args::parse()
}

fn init_tracing() -> Result<WorkerGuard, CountError> {
    let app_name = concat!(env!("CARGO_PKG_NAME"), "-", env!("CARGO_PKG_VERSION")).to_string();
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .map_err(|e| CountError::Unexpected(e.into()))?;

    let file_appender = tracing_appender::rolling::daily("./logs", "trace.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let bunyan_formatting_layer = BunyanFormattingLayer::new(app_name, non_blocking);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(JsonStorageLayer)
        .with(bunyan_formatting_layer) // Remove this line if you don't need file output
        .try_init()
        .map_err(|e| CountError::Unexpected(e.into()))?;

    Ok(guard)
}

fn report_failure_and_exit(error: CountError) -> ! {
    tracing::error!(?error, "Counting run failed");
    eprintln!("{error}");
    eprintln!("{error:?}");
    process::exit(1);
}
