pub mod chain;
pub mod errors;
pub mod ledger;
pub mod martian;
pub mod metrics_sink;
pub mod model;
pub mod solana_ledger;

pub use errors::{BucketKey, Error, Result};
pub use ledger::{LedgerClient, ProgramSnapshot};
#[cfg(any(test, feature = "mock"))]
pub use ledger::MockLedgerClient;
pub use martian::is_bgp_martian;
pub use metrics_sink::{MetricsSink, PrometheusMetricsSink};
#[cfg(any(test, feature = "mock"))]
pub use metrics_sink::MockMetricsSink;
pub use solana_ledger::SolanaLedgerClient;
