use clap::Parser;
use doublezero_config::Environment;
use eyre::{bail, eyre};
use solana_sdk::pubkey::Pubkey;
use std::net::SocketAddr;
use std::str::FromStr;

#[derive(Parser, Debug)]
#[command(name = "doublezero-controller")]
#[command(about = "Renders device configuration from the DoubleZero ledger", long_about = None)]
pub struct Args {
    #[arg(long, default_value = "0.0.0.0")]
    pub listen_addr: String,

    #[arg(long, default_value_t = 9090)]
    pub listen_port: u16,

    /// One of mainnet-beta|mainnet|testnet|devnet|localnet.
    #[arg(long)]
    pub env: Option<String>,

    #[arg(long)]
    pub program_id: Option<String>,

    #[arg(long)]
    pub solana_rpc_endpoint: Option<String>,

    #[arg(long, default_value_t = false)]
    pub no_hardware: bool,

    #[arg(long, default_value_t = 10)]
    pub refresh_interval_secs: u64,

    #[arg(long, default_value_t = 862)]
    pub twamp_listen_port: u16,
}

/// The validated, exhaustive configuration record the controller runs with.
/// Built once at start-up by `Options::new`; nothing downstream re-parses
/// CLI flags or environment variables.
#[derive(Debug, Clone)]
pub struct Options {
    pub listen_addr: SocketAddr,
    pub ledger_rpc_url: String,
    pub program_id: Pubkey,
    pub no_hardware: bool,
    pub refresh_interval_secs: u64,
    pub twamp_listen_port: u16,
}

impl Options {
    pub fn new(args: Args) -> eyre::Result<Self> {
        let (ledger_rpc_url, program_id) = match (&args.env, &args.program_id, &args.solana_rpc_endpoint) {
            (Some(env), None, None) => {
                let env: Environment = env
                    .parse()
                    .map_err(|e| eyre!("invalid --env: {e}"))?;
                let net = env.config()?;
                (net.ledger_public_rpc_url, net.serviceability_program_id)
            }
            (None, Some(program_id), Some(rpc)) => {
                let program_id = Pubkey::from_str(program_id)
                    .map_err(|e| eyre!("invalid --program-id: {e}"))?;
                (rpc.clone(), program_id)
            }
            _ => bail!("exactly one of --env or (--program-id and --solana-rpc-endpoint) must be set"),
        };

        let listen_addr = format!("{}:{}", args.listen_addr, args.listen_port)
            .parse()
            .map_err(|e| eyre!("invalid listen address: {e}"))?;

        Ok(Self {
            listen_addr,
            ledger_rpc_url,
            program_id,
            no_hardware: args.no_hardware,
            refresh_interval_secs: args.refresh_interval_secs,
            twamp_listen_port: args.twamp_listen_port,
        })
    }
}
