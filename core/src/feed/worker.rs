//! Feed Worker
//!
//! Spawns refresh fetches onto the runtime and reports results over a
//! bounded channel, so a slow or stalled response never delays the
//! one-second tick. There is no sequencing between overlapping
//! refreshes: the last response to resolve wins.

use std::sync::Arc;

use tokio::sync::mpsc;

use super::{select_cards, FeedSource};
use crate::events::FeedEvent;

/// Channel depth; refreshes are rare (one per `refresh_interval`) so a
/// small buffer is plenty.
const EVENT_BUFFER: usize = 8;

/// Handle for requesting non-blocking feed refreshes.
pub struct FeedWorker {
    source: Arc<dyn FeedSource>,
    user_name: Option<String>,
    raw_markup: bool,
    tx: mpsc::Sender<FeedEvent>,
}

impl FeedWorker {
    /// Create a worker and the receiver the surface drains.
    #[must_use]
    pub fn channel(
        source: Arc<dyn FeedSource>,
        user_name: Option<String>,
        raw_markup: bool,
    ) -> (Self, mpsc::Receiver<FeedEvent>) {
        let (tx, rx) = mpsc::channel(EVENT_BUFFER);
        (
            Self {
                source,
                user_name,
                raw_markup,
                tx,
            },
            rx,
        )
    }

    /// Kick off one refresh in the background. Returns immediately; the
    /// outcome arrives later as a [`FeedEvent`] on the receiver.
    pub fn request_refresh(&self) {
        let source = Arc::clone(&self.source);
        let user_name = self.user_name.clone();
        let raw_markup = self.raw_markup;
        let tx = self.tx.clone();

        tokio::spawn(async move {
            let result = match source.fetch().await {
                Ok(feed) => select_cards(&feed, user_name.as_deref(), raw_markup),
                Err(err) => Err(err),
            };

            let event = match result {
                Ok(cards) => {
                    tracing::debug!(count = cards.len(), "feed refresh succeeded");
                    FeedEvent::Replaced { cards }
                }
                Err(err) => {
                    tracing::warn!(error = %err, "feed refresh failed");
                    FeedEvent::Failed {
                        reason: err.to_string(),
                    }
                }
            };

            // Receiver gone means the surface is shutting down.
            let _ = tx.send(event).await;
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::{Feed, FeedError};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;
    use tokio::time::timeout;

    /// Scripted source: cycles through canned outcomes per fetch.
    struct ScriptedSource {
        responses: Vec<Result<String, String>>,
        calls: AtomicUsize,
    }

    impl ScriptedSource {
        fn new(responses: Vec<Result<String, String>>) -> Self {
            Self {
                responses,
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl FeedSource for ScriptedSource {
        async fn fetch(&self) -> Result<Feed, FeedError> {
            let idx = self.calls.fetch_add(1, Ordering::SeqCst);
            let scripted = self
                .responses
                .get(idx.min(self.responses.len() - 1))
                .expect("scripted response");
            match scripted {
                Ok(json) => match serde_json::from_str::<serde_json::Value>(json) {
                    Ok(serde_json::Value::Object(map)) => Ok(map),
                    _ => Err(FeedError::MalformedFeed),
                },
                Err(_) => Err(FeedError::EmptyFeed),
            }
        }
    }

    #[tokio::test]
    async fn successful_refresh_delivers_replacement() {
        let source = Arc::new(ScriptedSource::new(vec![Ok(
            r#"{"alice": [["Title1","Body1"],["Title2","Body2"]]}"#.to_string(),
        )]));
        let (worker, mut rx) = FeedWorker::channel(source, Some("alice".to_string()), false);

        worker.request_refresh();

        let event = timeout(Duration::from_secs(1), rx.recv())
            .await
            .expect("event within a second")
            .expect("channel open");

        match event {
            FeedEvent::Replaced { cards } => {
                assert_eq!(cards.len(), 2);
                assert_eq!(cards[0].title(), "Title1");
            }
            FeedEvent::Failed { reason } => panic!("unexpected failure: {reason}"),
        }
    }

    #[tokio::test]
    async fn failed_refresh_delivers_failure_event() {
        let source = Arc::new(ScriptedSource::new(vec![Err("down".to_string())]));
        let (worker, mut rx) = FeedWorker::channel(source, None, false);

        worker.request_refresh();

        let event = timeout(Duration::from_secs(1), rx.recv())
            .await
            .expect("event within a second")
            .expect("channel open");

        assert!(matches!(event, FeedEvent::Failed { .. }));
    }

    #[tokio::test]
    async fn overlapping_refreshes_each_report() {
        let source = Arc::new(ScriptedSource::new(vec![
            Ok(r#"{"alice": [["First"]]}"#.to_string()),
            Ok(r#"{"alice": [["Second"]]}"#.to_string()),
        ]));
        let (worker, mut rx) = FeedWorker::channel(source, Some("alice".to_string()), false);

        worker.request_refresh();
        worker.request_refresh();

        let mut titles = Vec::new();
        for _ in 0..2 {
            let event = timeout(Duration::from_secs(1), rx.recv())
                .await
                .expect("event within a second")
                .expect("channel open");
            if let FeedEvent::Replaced { cards } = event {
                titles.push(cards[0].title().to_string());
            }
        }

        titles.sort();
        assert_eq!(titles, ["First", "Second"]);
    }
}
