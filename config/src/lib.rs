mod constants;
mod env;

pub use env::{Environment, NetworkConfig};
