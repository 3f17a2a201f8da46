mod common;

use rust_decimal_macros::dec;
use std::time::Duration;
use warung::application::processing::{OrderProcessor, ProcessingResult, ProcessingStatus};

// Short delays keep the suite fast; margins are wide enough that scheduling
// jitter cannot flip a status.
fn fast_processor() -> OrderProcessor {
    OrderProcessor::new(Duration::from_millis(10), Duration::from_secs(1))
}

async fn drain(mut results: tokio::sync::mpsc::Receiver<ProcessingResult>) -> Vec<ProcessingResult> {
    let mut seen = Vec::new();
    while let Some(result) = results.recv().await {
        seen.push(result);
    }
    seen
}

#[tokio::test]
async fn test_every_item_reports_once_then_the_sink_closes() {
    let items = vec![
        common::line("nasi goreng", dec!(20000), 5),
        common::line("teh manis", dec!(5000), 1),
        common::line("jus jeruk", dec!(10000), 2),
    ];

    let seen = drain(fast_processor().run(items)).await;

    assert_eq!(seen.len(), 3);
    let mut names: Vec<_> = seen.iter().map(|result| result.item.clone()).collect();
    names.sort();
    assert_eq!(names, ["jus jeruk", "nasi goreng", "teh manis"]);
}

#[tokio::test]
async fn test_delay_within_deadline_reports_completed() {
    let seen = drain(fast_processor().run(vec![
        common::line("ayam bakar", dec!(25000), 1),
        common::line("mie goreng", dec!(15000), 2),
    ]))
    .await;

    assert!(
        seen.iter()
            .all(|result| result.status == ProcessingStatus::Completed)
    );
    assert!(
        seen.iter()
            .all(|result| result.to_string().ends_with("has been processed."))
    );
}

#[tokio::test]
async fn test_delay_past_the_deadline_reports_timeout() {
    let processor = OrderProcessor::new(Duration::from_millis(50), Duration::from_millis(1));
    let seen = drain(processor.run(vec![common::line("nasi goreng", dec!(20000), 1)])).await;

    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].status, ProcessingStatus::TimedOut);
    assert_eq!(
        seen[0].to_string(),
        "Order nasi goreng failed to process: timed out."
    );
}

// The one test that waits out the real two-second delay: the shipped
// constants leave the timeout branch inert.
#[tokio::test]
async fn test_default_processor_always_completes() {
    let seen = drain(OrderProcessor::default().run(vec![common::line(
        "teh manis",
        dec!(5000),
        1,
    )]))
    .await;

    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].to_string(), "Order teh manis has been processed.");
}

#[tokio::test]
async fn test_empty_order_produces_no_results() {
    let seen = drain(OrderProcessor::default().run(Vec::new())).await;
    assert!(seen.is_empty());
}
