use eyre::Ok;
use serde::{Deserialize, Serialize};
use solana_sdk::pubkey::Pubkey;
use std::fmt;

use crate::constants::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Environment {
    MainnetBeta,
    Testnet,
    #[default]
    Devnet,
    Local,
}

impl std::str::FromStr for Environment {
    type Err = eyre::Report;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "m" | "mainnet-beta" => Ok(Environment::MainnetBeta),
            "t" | "testnet" => Ok(Environment::Testnet),
            "d" | "devnet" => Ok(Environment::Devnet),
            "l" | "local" => Ok(Environment::Local),
            _ => Err(eyre::eyre!(
                "Invalid environment {}, must be one of: mainnet-beta, testnet, devnet",
                s
            )),
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Environment::MainnetBeta => write!(f, "mainnet-beta"),
            Environment::Testnet => write!(f, "testnet"),
            Environment::Devnet => write!(f, "devnet"),
            Environment::Local => write!(f, "local"),
        }
    }
}

impl Environment {
    pub fn from_program_id(program_id: &str) -> eyre::Result<Environment> {
        if program_id.eq(&SERVICEABILITY_MAINNET_BETA_PUBKEY.to_string()) {
            return Ok(Environment::MainnetBeta);
        } else if program_id.eq(&SERVICEABILITY_TESTNET_PUBKEY.to_string()) {
            return Ok(Environment::Testnet);
        } else if program_id.eq(&SERVICEABILITY_DEVNET_PUBKEY.to_string()) {
            return Ok(Environment::Devnet);
        } else if program_id.eq(&SERVICEABILITY_LOCALNET_PUBKEY.to_string()) {
            return Ok(Environment::Local);
        }
        Err(eyre::eyre!(
            "Could not match environment from Program ID: {program_id}"
        ))
    }

    pub fn config(&self) -> eyre::Result<NetworkConfig> {
        let mut config = match self {
            Environment::MainnetBeta => NetworkConfig {
                ledger_public_rpc_url: DOUBLEZERO_LEDGER_RPC_URL.to_string(),
                ledger_public_ws_rpc_url: DOUBLEZERO_LEDGER_WS_RPC_URL.to_string(),
                serviceability_program_id: SERVICEABILITY_MAINNET_BETA_PUBKEY,
                telemetry_program_id: TELEMETRY_MAINNET_BETA_PUBKEY,
                internet_latency_collector_pk: INTERNET_LATENCY_COLLECTOR_MAINNET_BETA_PUBKEY,
            },
            Environment::Testnet => NetworkConfig {
                ledger_public_rpc_url: DOUBLEZERO_TESTNET_LEDGER_RPC_URL.to_string(),
                ledger_public_ws_rpc_url: DOUBLEZERO_TESTNET_LEDGER_WS_RPC_URL.to_string(),
                serviceability_program_id: SERVICEABILITY_TESTNET_PUBKEY,
                telemetry_program_id: TELEMETRY_TESTNET_PUBKEY,
                internet_latency_collector_pk: INTERNET_LATENCY_COLLECTOR_TESTNET_PUBKEY,
            },
            Environment::Devnet => NetworkConfig {
                ledger_public_rpc_url: DOUBLEZERO_DEVNET_LEDGER_RPC_URL.to_string(),
                ledger_public_ws_rpc_url: DOUBLEZERO_DEVNET_LEDGER_WS_RPC_URL.to_string(),
                serviceability_program_id: SERVICEABILITY_DEVNET_PUBKEY,
                telemetry_program_id: TELEMETRY_DEVNET_PUBKEY,
                internet_latency_collector_pk: INTERNET_LATENCY_COLLECTOR_DEVNET_PUBKEY,
            },
            Environment::Local => NetworkConfig {
                ledger_public_rpc_url: DOUBLEZERO_LOCALNET_LEDGER_RPC_URL.to_string(),
                ledger_public_ws_rpc_url: DOUBLEZERO_LOCALNET_LEDGER_WS_RPC_URL.to_string(),
                serviceability_program_id: SERVICEABILITY_LOCALNET_PUBKEY,
                telemetry_program_id: TELEMETRY_LOCALNET_PUBKEY,
                internet_latency_collector_pk: INTERNET_LATENCY_COLLECTOR_LOCALNET_PUBKEY,
            },
        };

        if std::env::var("DZ_LEDGER_RPC_URL").is_ok() {
            config.ledger_public_rpc_url = std::env::var("DZ_LEDGER_RPC_URL").unwrap();
        }
        if std::env::var("DZ_LEDGER_WS_RPC_URL").is_ok() {
            config.ledger_public_ws_rpc_url = std::env::var("DZ_LEDGER_WS_RPC_URL").unwrap();
        }

        Ok(config)
    }
}

#[derive(Debug, Clone)]
pub struct NetworkConfig {
    pub ledger_public_rpc_url: String,
    pub ledger_public_ws_rpc_url: String,
    pub serviceability_program_id: Pubkey,
    pub telemetry_program_id: Pubkey,
    pub internet_latency_collector_pk: Pubkey,
}
