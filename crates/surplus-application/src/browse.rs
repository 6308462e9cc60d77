//! Browse/filter controller.
//!
//! Holds the distance threshold and the view state. Every query carries a
//! generation number; a response that arrives after a newer query was issued
//! is discarded, so the state always reflects the latest filter.

use std::sync::{Arc, Mutex, MutexGuard};
use surplus_core::browse::{DistanceThreshold, DonationSource, FoodItem};
use surplus_core::{Result, error_message};

#[derive(Debug, Clone, PartialEq)]
pub enum BrowseState {
    Loading,
    Loaded(Vec<FoodItem>),
    /// Nothing within the threshold; the view offers to widen it.
    Empty,
    /// The query failed; the view offers a retry.
    Failed(String),
}

impl BrowseState {
    pub fn items(&self) -> &[FoodItem] {
        match self {
            BrowseState::Loaded(items) => items,
            _ => &[],
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, BrowseState::Loading)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct QueryTicket {
    generation: u64,
    threshold: DistanceThreshold,
}

struct Inner {
    threshold: DistanceThreshold,
    state: BrowseState,
    generation: u64,
}

/// Shareable controller; clones observe the same state.
#[derive(Clone)]
pub struct BrowseController {
    source: Arc<dyn DonationSource>,
    inner: Arc<Mutex<Inner>>,
}

impl BrowseController {
    pub fn new(source: Arc<dyn DonationSource>) -> Self {
        Self::with_threshold(source, DistanceThreshold::default())
    }

    pub fn with_threshold(source: Arc<dyn DonationSource>, threshold: DistanceThreshold) -> Self {
        Self {
            source,
            inner: Arc::new(Mutex::new(Inner {
                threshold,
                state: BrowseState::Loading,
                generation: 0,
            })),
        }
    }

    pub fn source_name(&self) -> &str {
        self.source.name()
    }

    pub fn threshold(&self) -> DistanceThreshold {
        self.lock().threshold
    }

    pub fn state(&self) -> BrowseState {
        self.lock().state.clone()
    }

    /// Runs the query for the current threshold (initial load).
    pub async fn refresh(&self) -> BrowseState {
        let ticket = self.begin_query(None);
        self.run(ticket).await
    }

    /// Clamps and applies a new threshold, replacing the result set.
    pub async fn set_threshold(&self, km: f64) -> BrowseState {
        let ticket = self.begin_query(Some(DistanceThreshold::new(km)));
        self.run(ticket).await
    }

    /// Re-issues the same query after a failure.
    pub async fn retry(&self) -> BrowseState {
        tracing::debug!("[Browse] retry at {}", self.threshold());
        self.refresh().await
    }

    /// Widens the threshold to its maximum, the empty-state action.
    pub async fn widen_to_max(&self) -> BrowseState {
        self.set_threshold(DistanceThreshold::MAX_KM).await
    }

    async fn run(&self, ticket: QueryTicket) -> BrowseState {
        let result = self.source.fetch_within(ticket.threshold).await;
        self.complete(ticket, result);
        self.state()
    }

    fn begin_query(&self, threshold: Option<DistanceThreshold>) -> QueryTicket {
        let mut inner = self.lock();
        if let Some(threshold) = threshold {
            inner.threshold = threshold;
        }
        inner.generation += 1;
        inner.state = BrowseState::Loading;
        QueryTicket {
            generation: inner.generation,
            threshold: inner.threshold,
        }
    }

    /// Applies a result; returns false when it belonged to a superseded query.
    fn complete(&self, ticket: QueryTicket, result: Result<Vec<FoodItem>>) -> bool {
        let mut inner = self.lock();
        if ticket.generation != inner.generation {
            tracing::debug!(
                "[Browse] dropping stale result (generation {} < {})",
                ticket.generation,
                inner.generation
            );
            return false;
        }
        inner.state = match result {
            Ok(items) if items.is_empty() => BrowseState::Empty,
            Ok(items) => BrowseState::Loaded(items),
            Err(err) => {
                tracing::warn!("[Browse] {} query failed: {}", self.source.name(), err);
                BrowseState::Failed(error_message(&err))
            }
        };
        true
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        // state stays consistent even if a holder panicked
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::collections::{HashMap, VecDeque};
    use surplus_core::SurplusError;
    use surplus_infrastructure::FixtureDonationSource;
    use tokio::sync::oneshot;

    fn ids(state: &BrowseState) -> Vec<String> {
        state.items().iter().map(|i| i.id.clone()).collect()
    }

    /// Fails a queued number of times before delegating to the fixture.
    struct FlakySource {
        failures: Mutex<u32>,
        inner: FixtureDonationSource,
    }

    #[async_trait]
    impl DonationSource for FlakySource {
        fn name(&self) -> &str {
            "flaky"
        }

        async fn fetch_within(&self, threshold: DistanceThreshold) -> Result<Vec<FoodItem>> {
            {
                let mut failures = self.failures.lock().unwrap();
                if *failures > 0 {
                    *failures -= 1;
                    return Err(SurplusError::transport(None, "Failed to fetch available foods"));
                }
            }
            self.inner.fetch_within(threshold).await
        }
    }

    /// Holds each query until the test releases it.
    #[derive(Default)]
    struct GatedSource {
        gates: Mutex<HashMap<u64, VecDeque<oneshot::Receiver<()>>>>,
    }

    impl GatedSource {
        fn gate(&self, km: f64) -> oneshot::Sender<()> {
            let (tx, rx) = oneshot::channel();
            self.gates
                .lock()
                .unwrap()
                .entry(km.to_bits())
                .or_default()
                .push_back(rx);
            tx
        }
    }

    #[async_trait]
    impl DonationSource for GatedSource {
        fn name(&self) -> &str {
            "gated"
        }

        async fn fetch_within(&self, threshold: DistanceThreshold) -> Result<Vec<FoodItem>> {
            let gate = self
                .gates
                .lock()
                .unwrap()
                .get_mut(&threshold.km().to_bits())
                .and_then(VecDeque::pop_front);
            if let Some(gate) = gate {
                let _ = gate.await;
            }
            FixtureDonationSource::new().fetch_within(threshold).await
        }
    }

    #[tokio::test]
    async fn initial_load_uses_default_threshold() {
        let controller = BrowseController::new(Arc::new(FixtureDonationSource::new()));
        assert!(controller.state().is_loading());

        let state = controller.refresh().await;
        assert_eq!(controller.threshold().km(), 5.0);
        assert_eq!(state.items().len(), 6);
    }

    #[tokio::test]
    async fn threshold_change_replaces_results() {
        let controller = BrowseController::new(Arc::new(FixtureDonationSource::new()));
        controller.refresh().await;

        let state = controller.set_threshold(2.0).await;
        assert_eq!(ids(&state), vec!["2", "5"]);

        let clamped = controller.set_threshold(99.0).await;
        assert_eq!(controller.threshold().km(), 20.0);
        assert_eq!(clamped.items().len(), 6);
    }

    #[tokio::test]
    async fn zero_threshold_is_subset_of_max() {
        let controller = BrowseController::new(Arc::new(FixtureDonationSource::new()));
        let narrow = ids(&controller.set_threshold(0.0).await);
        let wide = ids(&controller.set_threshold(20.0).await);
        assert!(narrow.iter().all(|id| wide.contains(id)));
    }

    #[tokio::test]
    async fn empty_state_then_widen() {
        let controller = BrowseController::new(Arc::new(FixtureDonationSource::new()));
        assert_eq!(controller.set_threshold(1.0).await, BrowseState::Empty);

        let widened = controller.widen_to_max().await;
        assert!(controller.threshold().is_max());
        assert_eq!(widened.items().len(), 6);
    }

    #[tokio::test]
    async fn failure_then_retry_reissues_same_query() {
        let source = Arc::new(FlakySource {
            failures: Mutex::new(1),
            inner: FixtureDonationSource::new(),
        });
        let controller = BrowseController::with_threshold(source, DistanceThreshold::new(3.0));

        assert_eq!(
            controller.refresh().await,
            BrowseState::Failed("Failed to fetch available foods".into())
        );
        let state = controller.retry().await;
        assert_eq!(controller.threshold().km(), 3.0);
        assert_eq!(ids(&state), vec!["1", "2", "5", "6"]);
    }

    #[tokio::test]
    async fn stale_response_is_discarded() {
        let source = Arc::new(GatedSource::default());
        let slow = source.gate(20.0);
        let fast = source.gate(2.0);
        let controller = BrowseController::new(source);

        let older = {
            let controller = controller.clone();
            tokio::spawn(async move { controller.set_threshold(20.0).await })
        };
        while controller.threshold().km() != 20.0 {
            tokio::task::yield_now().await;
        }
        let newer = {
            let controller = controller.clone();
            tokio::spawn(async move { controller.set_threshold(2.0).await })
        };
        while controller.threshold().km() != 2.0 {
            tokio::task::yield_now().await;
        }

        fast.send(()).unwrap();
        let newest = newer.await.unwrap();
        assert_eq!(ids(&newest), vec!["2", "5"]);

        slow.send(()).unwrap();
        older.await.unwrap();
        assert_eq!(ids(&controller.state()), vec!["2", "5"]);
        assert_eq!(controller.threshold().km(), 2.0);
    }

    #[test]
    fn complete_rejects_old_generation() {
        let controller = BrowseController::new(Arc::new(FixtureDonationSource::new()));
        let first = controller.begin_query(None);
        let second = controller.begin_query(Some(DistanceThreshold::new(1.0)));

        assert!(!controller.complete(first, Ok(Vec::new())));
        assert!(controller.state().is_loading());
        assert!(controller.complete(second, Ok(Vec::new())));
        assert_eq!(controller.state(), BrowseState::Empty);
    }
}
