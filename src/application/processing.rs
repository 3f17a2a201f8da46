use crate::domain::order::LineItem;
use std::fmt;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tracing::debug;

/// Fixed simulated handling time per item.
const PROCESS_DELAY: Duration = Duration::from_secs(2);

/// Deadline after which an item reports as timed out. Longer than
/// `PROCESS_DELAY`, so with the shipped constants completion always wins and
/// the timeout branch stays inert.
const PROCESS_DEADLINE: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessingStatus {
    Completed,
    TimedOut,
}

/// Outcome of one item's simulated processing. `Display` renders the status
/// line shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessingResult {
    pub item: String,
    pub status: ProcessingStatus,
}

impl fmt::Display for ProcessingResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.status {
            ProcessingStatus::Completed => write!(f, "Order {} has been processed.", self.item),
            ProcessingStatus::TimedOut => {
                write!(f, "Order {} failed to process: timed out.", self.item)
            }
        }
    }
}

/// Simulates order processing: one concurrent worker per line item, results
/// collected in completion order.
pub struct OrderProcessor {
    delay: Duration,
    deadline: Duration,
}

impl Default for OrderProcessor {
    fn default() -> Self {
        Self::new(PROCESS_DELAY, PROCESS_DEADLINE)
    }
}

impl OrderProcessor {
    pub fn new(delay: Duration, deadline: Duration) -> Self {
        Self { delay, deadline }
    }

    /// Launches one worker per item and returns the sink to drain. Results
    /// arrive in completion order; the sink closes only once the watcher has
    /// joined every worker, so `recv` returning `None` means every launched
    /// item has reported.
    pub fn run(&self, items: Vec<LineItem>) -> mpsc::Receiver<ProcessingResult> {
        let (sink, results) = mpsc::channel(items.len().max(1));
        let mut workers: Vec<JoinHandle<()>> = Vec::with_capacity(items.len());

        for item in items {
            let sink = sink.clone();
            let delay = self.delay;
            let deadline = self.deadline;
            workers.push(tokio::spawn(async move {
                let started = Instant::now();
                tokio::time::sleep(delay).await;
                let status = if started.elapsed() > deadline {
                    ProcessingStatus::TimedOut
                } else {
                    ProcessingStatus::Completed
                };
                debug!(item = %item.name, ?status, "processing finished");
                let _ = sink
                    .send(ProcessingResult {
                        item: item.name,
                        status,
                    })
                    .await;
            }));
        }

        // The watcher holds the last sender until every worker has joined.
        tokio::spawn(async move {
            for worker in workers {
                let _ = worker.await;
            }
            drop(sink);
        });

        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_empty_order_closes_the_sink_immediately() {
        let mut results = OrderProcessor::default().run(Vec::new());
        assert!(results.recv().await.is_none());
    }

    #[test]
    fn test_status_messages() {
        let completed = ProcessingResult {
            item: "nasi goreng".to_string(),
            status: ProcessingStatus::Completed,
        };
        assert_eq!(completed.to_string(), "Order nasi goreng has been processed.");

        let timed_out = ProcessingResult {
            item: "teh manis".to_string(),
            status: ProcessingStatus::TimedOut,
        };
        assert_eq!(
            timed_out.to_string(),
            "Order teh manis failed to process: timed out."
        );
    }
}
