pub const DOUBLEZERO_URL: &str =
    "https://doublezerolocalnet.rpcpool.com/f50e62d0-06e7-410e-867e-6873e358ed30";

pub const LOCALHOST_URL: &str = "http://localhost:8899";
pub const DEVNET_URL: &str = "https://api.devnet.solana.com";
pub const TESTNET_URL: &str = "https://api.testnet.solana.com";
pub const MAINNET_BETA_URL: &str = "https://api.mainnet-beta.solana.com";

pub const DOUBLEZERO_WS: &str =
    "wss://doublezerolocalnet.rpcpool.com/f50e62d0-06e7-410e-867e-6873e358ed30";
pub const LOCALHOST_WS: &str = "ws://localhost:8899";
pub const DEVNET_WS: &str = "wss://api.devnet.solana.com";
pub const TESTNET_WS: &str = "wss://api.testnet.solana.com";
pub const MAINNET_BETA_WS: &str = "wss://api.mainnet-beta.solana.com";
