#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use tracing_test::traced_test;

    use crate::core::counter::{CounterSnapshot, Phase, SharedCounter, COUNT_CEILING};

    #[tokio::test]
    async fn test_new() {
        let counter = SharedCounter::new();
        let snapshot = counter.snapshot().await;

        assert_eq!(snapshot.count, 0);
        assert!(!snapshot.counting_up_complete);
        assert_eq!(snapshot.phase(), Phase::Rising);
    }

    #[tokio::test]
    async fn test_increment_reports_values_in_order() {
        let counter = SharedCounter::new();

        let mut reported = Vec::new();
        while let Some(value) = counter.increment("Thread 1: ").await {
            reported.push(value);
        }

        assert_eq!(reported, (1..=COUNT_CEILING).collect::<Vec<_>>());
    }

    #[tokio::test]
    async fn test_ceiling_sets_completion_and_freezes_state() {
        let counter = SharedCounter::new();
        counter.count_up("Thread 1: ").await;

        let snapshot = counter.snapshot().await;
        assert_eq!(snapshot.count, COUNT_CEILING);
        assert!(snapshot.counting_up_complete);
        assert_eq!(snapshot.phase(), Phase::Transitioning);

        // A worker that keeps asking after the ceiling must not move anything.
        assert_eq!(counter.increment("Thread 1: ").await, None);
        assert_eq!(counter.snapshot().await, snapshot);
    }

    #[tokio::test]
    async fn test_decrement_reports_values_in_order() {
        let counter = SharedCounter::new();
        counter.count_up("Thread 1: ").await;

        let mut reported = Vec::new();
        while let Some(value) = counter.decrement("Thread 2: ").await {
            reported.push(value);
        }

        assert_eq!(reported, (0..COUNT_CEILING).rev().collect::<Vec<_>>());

        let snapshot = counter.snapshot().await;
        assert_eq!(snapshot.count, 0);
        assert_eq!(snapshot.phase(), Phase::Done);
        assert_eq!(counter.decrement("Thread 2: ").await, None);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_count_down_waits_for_the_climb() {
        let counter = Arc::new(SharedCounter::new());

        let down = {
            let counter = Arc::clone(&counter);
            tokio::spawn(async move { counter.count_down("Thread 2: ").await })
        };

        counter.count_up("Thread 1: ").await;
        down.await.expect("count down worker failed");

        let snapshot = counter.snapshot().await;
        assert_eq!(snapshot.count, 0);
        assert_eq!(snapshot.phase(), Phase::Done);
    }

    #[test]
    fn test_phase_mapping() {
        let rising = CounterSnapshot {
            count: 3,
            counting_up_complete: false,
        };
        let transitioning = CounterSnapshot {
            count: COUNT_CEILING,
            counting_up_complete: true,
        };
        let falling = CounterSnapshot {
            count: 7,
            counting_up_complete: true,
        };
        let done = CounterSnapshot {
            count: 0,
            counting_up_complete: true,
        };

        assert_eq!(rising.phase(), Phase::Rising);
        assert_eq!(transitioning.phase(), Phase::Transitioning);
        assert_eq!(falling.phase(), Phase::Falling);
        assert_eq!(done.phase(), Phase::Done);
    }

    #[tokio::test]
    #[traced_test]
    async fn test_handoff_is_logged() {
        let counter = SharedCounter::new();
        counter.count_up("Thread 1: ").await;

        assert!(logs_contain("Counting up complete"));
    }
}
