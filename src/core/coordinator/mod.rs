use std::sync::Arc;

use tracing::{info, instrument};

use crate::core::counter::SharedCounter;
use crate::core::error::CountError;
use crate::core::worker::{CountWorker, WorkerRole};

#[instrument(name = "run_counting", level = "info")]
pub async fn run() -> Result<(), CountError> {
    let counter = Arc::new(SharedCounter::new());
    drive(counter).await
}

#[instrument(name = "drive_workers", level = "info", skip(counter))]
pub async fn drive(counter: Arc<SharedCounter>) -> Result<(), CountError> {
    let up = tokio::spawn(CountWorker::new(Arc::clone(&counter), WorkerRole::CountUp).run());
    let down = tokio::spawn(CountWorker::new(Arc::clone(&counter), WorkerRole::CountDown).run());

    up.await?;
    down.await?;

    info!("Both workers finished");
    println!("Counting completed!");

    Ok(())
}
