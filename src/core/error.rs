use thiserror::Error;
use tokio::task::JoinError;

#[derive(Debug, Error)]
pub enum CountError {
    // The wait for a worker ended before the worker did.
    #[error("A thread was interrupted!")]
    WorkerInterrupted(#[from] JoinError),

    #[error("An error occurred!")]
    Unexpected(#[from] Box<dyn std::error::Error + Send + Sync>),
}
