use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use backon::{ExponentialBuilder, Retryable};
use doublezero_controlplane_model::ledger::LedgerClient;
use doublezero_controlplane_model::{BucketKey, Error as ModelError, MetricsSink};
use solana_sdk::pubkey::Pubkey;
use tokio::sync::Semaphore;
use tokio_util::sync::CancellationToken;

use crate::scheduler::SamplesBuffer;

pub const DEFAULT_SUBMIT_INTERVAL: Duration = Duration::from_secs(60);
const MAX_SAMPLES_PER_WRITE: usize = 1_000;
const DEFAULT_SAMPLING_INTERVAL_MICROSECONDS: u64 = 10_000_000;
const MAX_CONCURRENT_SUBMISSIONS: usize = 10;

/// Whether a ledger error is worth retrying within this tick, or should be
/// dropped and picked back up next tick.
fn is_transient(err: &ModelError) -> bool {
    matches!(err, ModelError::LedgerTransient(_) | ModelError::SubmitTransient(_))
}

/// Tracks which (origin, target, link, epoch) buckets already have a
/// samples account, so repeated ticks don't re-issue the initialize
/// instruction once it has succeeded.
pub struct Submitter<L: LedgerClient> {
    ledger: Arc<L>,
    metrics: Arc<dyn MetricsSink>,
    initialized: std::sync::Mutex<HashMap<BucketKey, Pubkey>>,
    backoff: ExponentialBuilder,
    concurrency: Arc<Semaphore>,
}

impl<L: LedgerClient + 'static> Submitter<L> {
    pub fn new(ledger: Arc<L>, metrics: Arc<dyn MetricsSink>) -> Self {
        Self {
            ledger,
            metrics,
            initialized: std::sync::Mutex::new(HashMap::new()),
            backoff: ExponentialBuilder::default()
                .with_min_delay(Duration::from_millis(200))
                .with_max_delay(Duration::from_secs(10))
                .with_max_times(5),
            concurrency: Arc::new(Semaphore::new(MAX_CONCURRENT_SUBMISSIONS)),
        }
    }

    async fn ensure_account(&self, key: BucketKey) -> Option<Pubkey> {
        if let Some(account) = self.initialized.lock().unwrap().get(&key) {
            return Some(*account);
        }

        let init = || {
            let ledger = self.ledger.clone();
            async move {
                tokio::task::spawn_blocking(move || {
                    ledger.initialize_device_latency_samples(
                        key.origin,
                        key.target,
                        key.link,
                        key.epoch,
                        DEFAULT_SAMPLING_INTERVAL_MICROSECONDS,
                    )
                })
                .await
                .unwrap_or_else(|e| Err(ModelError::Internal(e.to_string())))
                .map_err(|e| {
                    log::debug!("initialize_device_latency_samples attempt failed: {e}");
                    e
                })
            }
        };

        match init
            .retry(self.backoff.clone())
            .when(is_transient)
            .await
        {
            Ok(account) => {
                self.initialized.lock().unwrap().insert(key, account);
                Some(account)
            }
            Err(err) => {
                log::warn!("failed to initialize samples account for {key:?}: {err}");
                self.metrics
                    .increment_counter("doublezero_collector_submitter_failed_to_initialize_account", vec![]);
                None
            }
        }
    }

    async fn write_bucket(&self, key: BucketKey, account: Pubkey, samples: Vec<u32>, start_timestamp_us: u64) {
        for chunk in samples.chunks(MAX_SAMPLES_PER_WRITE) {
            let chunk = chunk.to_vec();
            let write = || {
                let ledger = self.ledger.clone();
                let chunk = chunk.clone();
                async move {
                    tokio::task::spawn_blocking(move || {
                        ledger.write_device_latency_samples(account, start_timestamp_us, &chunk)
                    })
                    .await
                    .unwrap_or_else(|e| Err(ModelError::Internal(e.to_string())))
                    .map_err(|e| {
                        log::debug!("write_device_latency_samples attempt failed: {e}");
                        e
                    })
                }
            };
            let result = write.retry(self.backoff.clone()).when(is_transient).await;
            if let Err(err) = result {
                log::warn!("dropping {} samples for {key:?}: retries exhausted: {err}", chunk.len());
                self.metrics
                    .increment_counter("doublezero_collector_submitter_retries_exhausted", vec![]);
                return;
            }
        }
    }

    async fn submit_one(&self, key: BucketKey, samples: Vec<u32>, start_timestamp_us: u64) {
        let _permit = self.concurrency.acquire().await.expect("semaphore never closed");
        let Some(account) = self.ensure_account(key).await else {
            return;
        };
        self.write_bucket(key, account, samples, start_timestamp_us).await;
    }

    /// Drains the shared buffer and submits every bucket concurrently
    /// (bounded by the submitter's semaphore).
    pub async fn flush(&self, buffer: &SamplesBuffer, start_timestamp_us: u64) {
        let drained: HashMap<BucketKey, Vec<u32>> = std::mem::take(&mut *buffer.lock().unwrap());
        if drained.is_empty() {
            return;
        }
        let futures: Vec<_> = drained
            .into_iter()
            .map(|(key, samples)| self.submit_one(key, samples, start_timestamp_us))
            .collect();
        futures_util::future::join_all(futures).await;
    }

    /// Runs the periodic submission loop until cancelled, then performs one
    /// final flush so the last interval's samples aren't lost on shutdown.
    pub async fn run(&self, buffer: Arc<SamplesBuffer>, interval: Duration, cancel: CancellationToken) {
        let mut ticker = tokio::time::interval(interval);
        loop {
            tokio::select! {
                _ = cancel.cancelled() => break,
                _ = ticker.tick() => {
                    let now_us = wall_clock_micros();
                    self.flush(&buffer, now_us).await;
                }
            }
        }

        log::info!("submitter: flushing remaining samples before shutdown");
        let now_us = wall_clock_micros();
        self.flush(&buffer, now_us).await;
        if !buffer.lock().unwrap().is_empty() {
            self.metrics
                .increment_counter("doublezero_collector_submit_samples_on_close", vec![]);
        }
    }
}

fn wall_clock_micros() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_micros() as u64
}

#[cfg(test)]
mod tests {
    use super::*;
    use doublezero_controlplane_model::ledger::MockLedgerClient;
    use doublezero_controlplane_model::MockMetricsSink;
    use std::sync::Mutex;

    fn key() -> BucketKey {
        BucketKey {
            origin: Pubkey::new_unique(),
            target: Pubkey::new_unique(),
            link: Pubkey::new_unique(),
            epoch: 1,
        }
    }

    #[tokio::test]
    async fn flush_initializes_then_writes() {
        let mut ledger = MockLedgerClient::new();
        let account = Pubkey::new_unique();
        ledger
            .expect_initialize_device_latency_samples()
            .returning(move |_, _, _, _, _| Ok(account));
        ledger
            .expect_write_device_latency_samples()
            .returning(|_, _, _| Ok(()));

        let mut metrics = MockMetricsSink::new();
        metrics.expect_increment_counter().returning(|_, _| ());

        let submitter = Submitter::new(Arc::new(ledger), Arc::new(metrics));
        let buffer: SamplesBuffer = Mutex::new(HashMap::from([(key(), vec![100u32, 200u32])]));
        submitter.flush(&buffer, 0).await;
        assert!(buffer.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn exhausted_write_retries_increment_metric_and_drop_bucket() {
        let mut ledger = MockLedgerClient::new();
        let account = Pubkey::new_unique();
        ledger
            .expect_initialize_device_latency_samples()
            .returning(move |_, _, _, _, _| Ok(account));
        ledger
            .expect_write_device_latency_samples()
            .returning(|_, _, _| Err(ModelError::SubmitTransient("down".to_string())));

        let mut metrics = MockMetricsSink::new();
        metrics
            .expect_increment_counter()
            .withf(|name, _| name == "doublezero_collector_submitter_retries_exhausted")
            .returning(|_, _| ());

        let mut builder = Submitter::new(Arc::new(ledger), Arc::new(metrics));
        builder.backoff = ExponentialBuilder::default()
            .with_min_delay(Duration::from_millis(1))
            .with_max_delay(Duration::from_millis(2))
            .with_max_times(1);

        let buffer: SamplesBuffer = Mutex::new(HashMap::from([(key(), vec![1u32])]));
        builder.flush(&buffer, 0).await;
    }
}
