use std::sync::Arc;

use tracing::instrument;

use crate::core::counter::SharedCounter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkerRole {
    CountUp,
    CountDown,
}

impl WorkerRole {
    // Labels are fixed at creation, so the first lines printed can never
    // carry the wrong thread number.
    pub fn label(&self) -> &'static str {
        match self {
            WorkerRole::CountUp => "Thread 1: ",
            WorkerRole::CountDown => "Thread 2: ",
        }
    }
}

#[derive(Debug)]
pub struct CountWorker {
    counter: Arc<SharedCounter>,
    role: WorkerRole,
}

impl CountWorker {
    pub fn new(counter: Arc<SharedCounter>, role: WorkerRole) -> Self {
        tracing::info!(?role, "Creating count worker");
        Self { counter, role }
    }

    #[instrument(name = "run_worker", level = "info", skip(self), fields(role = ?self.role))]
    pub async fn run(self) {
        let label = self.role.label();
        match self.role {
            WorkerRole::CountUp => self.counter.count_up(label).await,
            WorkerRole::CountDown => self.counter.count_down(label).await,
        }
    }
}
