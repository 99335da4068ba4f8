use crate::core::{InvoiceCategory, InvoiceSource};
use std::sync::Arc;
use tokio::task::JoinError;

/// Fetches both categories concurrently and returns `(inbound, outbound)`.
///
/// Each category runs as its own task; the pair keeps positional order no
/// matter which task finishes first, and a fast failure on one side never
/// cancels the other. The source itself resolves failures to `None`, so the
/// only error left to contain here is a panicked task.
pub async fn fetch_both<S>(source: Arc<S>) -> (Option<String>, Option<String>)
where
    S: InvoiceSource + 'static,
{
    let inbound = tokio::spawn({
        let source = Arc::clone(&source);
        async move { source.fetch_latest(InvoiceCategory::Inbound).await }
    });
    let outbound =
        tokio::spawn(async move { source.fetch_latest(InvoiceCategory::Outbound).await });

    let (inbound, outbound) = tokio::join!(inbound, outbound);
    (
        settle(inbound, InvoiceCategory::Inbound),
        settle(outbound, InvoiceCategory::Outbound),
    )
}

fn settle(
    joined: Result<Option<String>, JoinError>,
    category: InvoiceCategory,
) -> Option<String> {
    match joined {
        Ok(result) => result,
        Err(e) => {
            tracing::warn!("{} fetch task did not complete: {}", category, e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::time::Duration;

    struct MockSource {
        inbound: Option<String>,
        outbound: Option<String>,
        inbound_delay: Duration,
        outbound_delay: Duration,
    }

    impl MockSource {
        fn new(inbound: Option<&str>, outbound: Option<&str>) -> Self {
            Self {
                inbound: inbound.map(str::to_string),
                outbound: outbound.map(str::to_string),
                inbound_delay: Duration::ZERO,
                outbound_delay: Duration::ZERO,
            }
        }

        fn with_inbound_delay(mut self, delay: Duration) -> Self {
            self.inbound_delay = delay;
            self
        }

        fn with_outbound_delay(mut self, delay: Duration) -> Self {
            self.outbound_delay = delay;
            self
        }
    }

    #[async_trait]
    impl InvoiceSource for MockSource {
        async fn fetch_latest(&self, category: InvoiceCategory) -> Option<String> {
            match category {
                InvoiceCategory::Inbound => {
                    tokio::time::sleep(self.inbound_delay).await;
                    self.inbound.clone()
                }
                InvoiceCategory::Outbound => {
                    tokio::time::sleep(self.outbound_delay).await;
                    self.outbound.clone()
                }
            }
        }
    }

    #[tokio::test]
    async fn fetch_both_returns_positional_pair() {
        let source = Arc::new(MockSource::new(Some("123"), Some("87")));
        let (inbound, outbound) = fetch_both(source).await;
        assert_eq!(inbound.as_deref(), Some("123"));
        assert_eq!(outbound.as_deref(), Some("87"));
    }

    #[tokio::test]
    async fn ordering_is_stable_when_inbound_finishes_last() {
        let source = Arc::new(
            MockSource::new(Some("123"), Some("87"))
                .with_inbound_delay(Duration::from_millis(50)),
        );
        let (inbound, outbound) = fetch_both(source).await;
        assert_eq!(inbound.as_deref(), Some("123"));
        assert_eq!(outbound.as_deref(), Some("87"));
    }

    #[tokio::test]
    async fn ordering_is_stable_when_outbound_finishes_last() {
        let source = Arc::new(
            MockSource::new(Some("123"), Some("87"))
                .with_outbound_delay(Duration::from_millis(50)),
        );
        let (inbound, outbound) = fetch_both(source).await;
        assert_eq!(inbound.as_deref(), Some("123"));
        assert_eq!(outbound.as_deref(), Some("87"));
    }

    #[tokio::test]
    async fn one_failed_category_does_not_abort_the_other() {
        let source = Arc::new(
            MockSource::new(Some("42"), None).with_outbound_delay(Duration::from_millis(30)),
        );
        let (inbound, outbound) = fetch_both(source).await;
        assert_eq!(inbound.as_deref(), Some("42"));
        assert!(outbound.is_none());
    }

    #[tokio::test]
    async fn both_absent_still_yields_a_pair() {
        let source = Arc::new(MockSource::new(None, None));
        let (inbound, outbound) = fetch_both(source).await;
        assert!(inbound.is_none());
        assert!(outbound.is_none());
    }

    struct PanickingSource;

    #[async_trait]
    impl InvoiceSource for PanickingSource {
        async fn fetch_latest(&self, category: InvoiceCategory) -> Option<String> {
            match category {
                InvoiceCategory::Inbound => panic!("boom"),
                InvoiceCategory::Outbound => Some("9".to_string()),
            }
        }
    }

    #[tokio::test]
    async fn panicked_task_settles_as_absence() {
        let (inbound, outbound) = fetch_both(Arc::new(PanickingSource)).await;
        assert!(inbound.is_none());
        assert_eq!(outbound.as_deref(), Some("9"));
    }
}
