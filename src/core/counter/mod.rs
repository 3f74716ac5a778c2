use tokio::sync::{Mutex, Notify};
use tracing::instrument;

pub const COUNT_CEILING: i64 = 20;

// Rising -> Transitioning -> Falling -> Done, driven only by the two workers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Rising,
    Transitioning,
    Falling,
    Done,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterSnapshot {
    pub count: i64,
    pub counting_up_complete: bool,
}

impl CounterSnapshot {
    pub fn phase(&self) -> Phase {
        match (self.counting_up_complete, self.count) {
            (false, _) => Phase::Rising,
            (true, n) if n >= COUNT_CEILING => Phase::Transitioning,
            (true, n) if n > 0 => Phase::Falling,
            (true, _) => Phase::Done,
        }
    }
}

#[derive(Debug)]
struct CounterState {
    count: i64,
    counting_up_complete: bool,
}

#[derive(Debug)]
pub struct SharedCounter {
    state: Mutex<CounterState>,
    completion: Notify,
}

impl SharedCounter {
    pub fn new() -> Self {
        tracing::info!("Creating a new shared counter at zero");
        Self {
            state: Mutex::new(CounterState {
                count: 0,
                counting_up_complete: false,
            }),
            completion: Notify::new(),
        }
    }

    #[instrument(name = "increment_counter", level = "debug", skip(self))]
    pub async fn increment(&self, label: &str) -> Option<i64> {
        let mut state = self.state.lock().await;
        if state.count >= COUNT_CEILING {
            return None;
        }
        state.count += 1;
        println!("{label}{}", state.count);
        tracing::debug!(count = state.count, "Counter incremented");
        if state.count == COUNT_CEILING {
            state.counting_up_complete = true;
            self.completion.notify_one();
            tracing::info!("Counting up complete, handing over to the down worker");
        }
        Some(state.count)
    }

    #[instrument(name = "decrement_counter", level = "debug", skip(self))]
    pub async fn decrement(&self, label: &str) -> Option<i64> {
        loop {
            // Register for the completion signal before checking the flag;
            // a notify_one fired in between leaves a permit for the await.
            let handoff = self.completion.notified();
            {
                let mut state = self.state.lock().await;
                if state.counting_up_complete {
                    if state.count <= 0 {
                        return None;
                    }
                    state.count -= 1;
                    println!("{label}{}", state.count);
                    tracing::debug!(count = state.count, "Counter decremented");
                    return Some(state.count);
                }
            }
            handoff.await;
        }
    }

    #[instrument(name = "count_up", level = "info", skip(self))]
    pub async fn count_up(&self, label: &str) {
        while self.increment(label).await.is_some() {}
        tracing::info!("Count up finished");
    }

    #[instrument(name = "count_down", level = "info", skip(self))]
    pub async fn count_down(&self, label: &str) {
        while self.decrement(label).await.is_some() {}
        tracing::info!("Count down finished");
    }

    pub async fn snapshot(&self) -> CounterSnapshot {
        let state = self.state.lock().await;
        CounterSnapshot {
            count: state.count,
            counting_up_complete: state.counting_up_complete,
        }
    }
}
