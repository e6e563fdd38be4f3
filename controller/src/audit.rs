use std::sync::Mutex;

use chrono::{DateTime, Utc};
use solana_sdk::pubkey::Pubkey;

/// Append-only in-memory audit trail of `GetConfig`/`GetConfigHash` calls.
/// Buffer loss on shutdown is acceptable; this is observability, not a
/// durability guarantee.
pub trait AuditSink: Send + Sync {
    fn record(&self, timestamp: DateTime<Utc>, pubkey: Pubkey);
    fn flush(&self) -> Vec<(DateTime<Utc>, Pubkey)>;
}

#[derive(Default)]
pub struct InMemoryAuditSink {
    buffer: Mutex<Vec<(DateTime<Utc>, Pubkey)>>,
}

impl AuditSink for InMemoryAuditSink {
    fn record(&self, timestamp: DateTime<Utc>, pubkey: Pubkey) {
        self.buffer.lock().unwrap().push((timestamp, pubkey));
    }

    fn flush(&self) -> Vec<(DateTime<Utc>, Pubkey)> {
        std::mem::take(&mut self.buffer.lock().unwrap())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flush_drains_and_resets_the_buffer() {
        let sink = InMemoryAuditSink::default();
        let pk = Pubkey::new_unique();
        sink.record(Utc::now(), pk);
        sink.record(Utc::now(), pk);

        let flushed = sink.flush();
        assert_eq!(flushed.len(), 2);
        assert!(sink.flush().is_empty());
    }
}
