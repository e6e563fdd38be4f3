use crate::{
    requirements::check_doublezero,
    servicecontroller::{ServiceController, ServiceControllerImpl, UpdateConfigRequest},
};
use clap::{ArgGroup, Args};
use doublezero_cli::doublezerocommand::CliCommand;
use doublezero_sdk::read_doublezero_config;
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
    env: Option<String>,
    /// URL of the JSON RPC endpoint (devnet, testnet, mainnet, localhost)
    #[arg(long)]
    url: Option<String>,
    /// URL of the WS RPC endpoint (devnet, testnet, mainnet, localhost)
    #[arg(long)]
    ws: Option<String>,
    /// Keypair of the user
    #[arg(long)]
    keypair: Option<PathBuf>,
    /// Pubkey of the smart contract (devnet, testnet)
    #[arg(long)]
    program_id: Option<String>,
    /// Force the config to be set even if the user is connected
    #[arg(long)]
    force: bool,
}

impl SetConfigCliCommand {
    pub async fn execute<W: Write>(
        self,
        client: &dyn CliCommand,
        out: &mut W,
        socket_path: Option<String>,
    ) -> eyre::Result<()> {
        let updated = doublezero_cli::config::set::SetConfigCliCommand {
            env: self.env,
            url: self.url,
            ws: self.ws,
            keypair: self.keypair,
            program_id: self.program_id,
            force: self.force,
        }
        .execute(client, out)?;
        if !updated {
            return Ok(());
        }

        let (_, config) = read_doublezero_config()?;

        // Notify running daemon of the new config (best-effort)
        {
            let program_id = config
                .program_id
                .clone()
                .unwrap_or_else(|| doublezero_sdk::testnet::program_id::id().to_string());

            let controller = ServiceControllerImpl::new(socket_path);
            if let Err(e) = check_doublezero(&controller, None) {
                writeln!(out, "WARNING: could not update daemon config: {e}")?;
            } else {
                let req = UpdateConfigRequest {
                    ledger_rpc_url: config.json_rpc_url.clone(),
                    serviceability_program_id: program_id.clone(),
                };
                let result = controller.update_config(req).await;
                if let Err(e) = result {
                    writeln!(out, "WARNING: could not update daemon config: {e}")?;
                }
            }
        }

        Ok(())
    }
}
