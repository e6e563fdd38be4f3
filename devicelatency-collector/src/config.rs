use clap::Parser;
use doublezero_config::Environment;
use eyre::{bail, eyre};
use solana_sdk::pubkey::Pubkey;
use std::str::FromStr;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(name = "doublezero-devicelatency-collector")]
#[command(about = "Probes direct-link peers via TWAMP-Light and submits RTT telemetry", long_about = None)]
pub struct Args {
    /// One of mainnet-beta|mainnet|testnet|devnet|localnet.
    #[arg(long)]
    pub env: Option<String>,

    #[arg(long)]
    pub program_id: Option<String>,

    #[arg(long)]
    pub solana_rpc_endpoint: Option<String>,

    /// Path to the keypair used to sign telemetry writes.
    #[arg(long)]
    pub keypair: String,

    /// Pubkey of the device this collector runs on.
    #[arg(long)]
    pub device_pubkey: String,

    #[arg(long, default_value_t = 862)]
    pub twamp_listen_port: u16,

    #[arg(long, default_value_t = 10)]
    pub probe_interval_secs: u64,

    #[arg(long, default_value_t = 60)]
    pub submit_interval_secs: u64,

    #[arg(long, default_value_t = 300)]
    pub sender_ttl_secs: u64,

    #[arg(long, default_value_t = 30)]
    pub max_consecutive_losses: u32,

    #[arg(long, default_value_t = 30)]
    pub peer_discovery_interval_secs: u64,
}

/// The validated, exhaustive configuration record the collector runs with.
#[derive(Debug, Clone)]
pub struct Options {
    pub ledger_rpc_url: String,
    pub program_id: Pubkey,
    pub keypair_path: String,
    pub device_pubkey: Pubkey,
    pub twamp_listen_port: u16,
    pub probe_interval: Duration,
    pub submit_interval: Duration,
    pub sender_ttl: Duration,
    pub max_consecutive_losses: u32,
    pub peer_discovery_interval: Duration,
}

impl Options {
    pub fn new(args: Args) -> eyre::Result<Self> {
        let (ledger_rpc_url, program_id) = match (&args.env, &args.program_id, &args.solana_rpc_endpoint) {
            (Some(env), None, None) => {
                let env: Environment = env.parse().map_err(|e| eyre!("invalid --env: {e}"))?;
                let net = env.config()?;
                (net.ledger_public_rpc_url, net.serviceability_program_id)
            }
            (None, Some(program_id), Some(rpc)) => {
                let program_id = Pubkey::from_str(program_id).map_err(|e| eyre!("invalid --program-id: {e}"))?;
                (rpc.clone(), program_id)
            }
            _ => bail!("exactly one of --env or (--program-id and --solana-rpc-endpoint) must be set"),
        };

        let device_pubkey =
            Pubkey::from_str(&args.device_pubkey).map_err(|e| eyre!("invalid --device-pubkey: {e}"))?;

        if args.submit_interval_secs <= args.probe_interval_secs {
            bail!("--submit-interval-secs must exceed --probe-interval-secs");
        }

        Ok(Self {
            ledger_rpc_url,
            program_id,
            keypair_path: args.keypair,
            device_pubkey,
            twamp_listen_port: args.twamp_listen_port,
            probe_interval: Duration::from_secs(args.probe_interval_secs),
            submit_interval: Duration::from_secs(args.submit_interval_secs),
            sender_ttl: Duration::from_secs(args.sender_ttl_secs),
            max_consecutive_losses: args.max_consecutive_losses,
            peer_discovery_interval: Duration::from_secs(args.peer_discovery_interval_secs),
        })
    }
}
