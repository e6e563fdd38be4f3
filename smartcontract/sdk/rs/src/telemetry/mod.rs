pub mod client;
pub mod stats;

pub use client::get_all_device_latency_samples;
pub use stats::{calculate_stats, LinkLatencyStats};
