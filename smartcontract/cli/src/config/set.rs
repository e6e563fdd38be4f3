use crate::doublezerocommand::CliCommand;
use clap::{ArgGroup, Args};
use doublezero_config::Environment;
use doublezero_sdk::{
    commands::user::get::GetUserCommand, convert_program_moniker, convert_url_moniker,
    convert_url_to_ws, convert_ws_moniker, read_doublezero_config, utils::read_keypair_from_file,
    write_doublezero_config,
};
use solana_sdk::signature::Signer;
use std::{io::Write, path::PathBuf};

#[derive(Args, Debug)]
#[clap(group(
    ArgGroup::new("mandatory")
        .args(&["env", "url", "ws", "keypair", "program_id"])
        .required(true)
        .multiple(true)
))]
pub struct SetConfigCliCommand {
    /// DZ env shorthand to set the config to (testnet, devnet, or mainnet)
    #[arg(long, value_name = "ENV")]
    pub env: Option<String>,
    /// URL of the JSON RPC endpoint (devnet, testnet, mainnet, localhost)
    #[arg(long)]
    pub url: Option<String>,
    /// URL of the WS RPC endpoint (devnet, testnet, mainnet, localhost)
    #[arg(long)]
    pub ws: Option<String>,
    /// Keypair of the user
    #[arg(long)]
    pub keypair: Option<PathBuf>,
    /// Pubkey of the smart contract (devnet, testnet)
    #[arg(long)]
    pub program_id: Option<String>,
    /// Force the config to be set even if the user is connected
    #[arg(long)]
    pub force: bool,
}

impl SetConfigCliCommand {
    pub fn execute<W: Write>(self, client: &dyn CliCommand, out: &mut W) -> eyre::Result<bool> {
        let (ledger_url, ledger_ws, program_id) = if let Some(env) = self.env {
            if self.url.is_some() || self.ws.is_some() || self.program_id.is_some() {
                writeln!(
                    out,
                    "Invalid flag combination: Use either --env for environment shortcuts OR individual --url/--ws/--program-id flags, but not both."
                )?;
                return Ok(false);
            }

            let config = env.parse::<Environment>()?.config()?;
            (
                Some(config.ledger_public_rpc_url),
                Some(config.ledger_public_ws_rpc_url),
                Some(config.serviceability_program_id.to_string()),
            )
        } else {
            (self.url, self.ws, self.program_id)
        };

        if ledger_url.is_none()
            && ledger_ws.is_none()
            && self.keypair.is_none()
            && program_id.is_none()
        {
            writeln!(out, "No arguments provided")?;
            return Ok(false);
        }

        let (filename, mut config) = read_doublezero_config()?;

        // Before the config can be changed, we need to check if the user has any open connections
        // and refuse to make any changes if so. Otherwise, the doublezerod state will reflect the
        // wrong environment.
        let keypair = read_keypair_from_file(config.keypair_path.clone()).map_err(|e| {
            eyre::eyre!(
                "Failed to read keypair from file: {}\nPlease check that the keypair exists and is valid",
                e
            )
        })?;

        if let Ok((_, user)) = client.get_user(GetUserCommand {
            pubkey: keypair.pubkey(),
        }) {
            if !self.force {
                writeln!(
                out,
                "Cannot change network config while connected as user. Please disconnect first. Current status: {}",
                user.status
                )?;
                return Ok(false);
            } else {
                writeln!(out, "WARNING: Changing network config while connected as user because --force was provided. This will disconnect you from the current network. Current status: {}", user.status)?;
            }
        }

        if let Some(url) = ledger_url {
            config.json_rpc_url = convert_url_moniker(url);
            config.websocket_url = None;
        }
        if let Some(ws) = ledger_ws {
            config.websocket_url = Some(convert_ws_moniker(ws));
        }
        if let Some(keypair) = self.keypair {
            config.keypair_path = keypair;
        }
        if let Some(program_id) = program_id {
            config.program_id = Some(convert_program_moniker(program_id));
        }

        write_doublezero_config(&config)?;

        writeln!(
            out,
            "Config File: {}\nRPC URL: {}\nWebSocket URL: {}\nKeypair Path: {}\nProgram ID: {}\n",
            filename.display(),
            config.json_rpc_url,
            config.websocket_url.unwrap_or(format!(
                "{} (computed)",
                convert_url_to_ws(&config.json_rpc_url)?
            )),
            config.keypair_path.display(),
            config.program_id.unwrap_or(format!(
                "{} (computed)",
                doublezero_sdk::testnet::program_id::id()
            ))
        )?;

        Ok(true)
    }
}
