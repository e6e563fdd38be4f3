use crate::doublezerocommand::CliCommand;
use clap::Args;
use doublezero_sdk::commands::link::get::GetLinkCommand;
use doublezero_sdk::networkv4_to_string;
use std::io::Write;

#[derive(Args, Debug)]
pub struct GetLinkCliCommand {
    #[arg(long)]
    pub code: String,
}

impl GetLinkCliCommand {
    pub fn execute<C: CliCommand, W: Write>(self, client: &C, out: &mut W) -> eyre::Result<()> {
        let (pubkey, tunnel) = client.get_link(GetLinkCommand {
            pubkey_or_code: self.code,
        })?;

        writeln!(out,
            "account: {}\r\ncode: {}\r\nside_a: {}\r\nside_z: {}\r\ntunnel_type: {}\r\nbandwidth: {}\r\nmtu: {}\r\ndelay: {}ms\r\njitter: {}ms\r\ntunnel_net: {}\r\nstatus: {}\r\nowner: {}",
            pubkey,
            tunnel.code,
            tunnel.side_a_pk,
            tunnel.side_z_pk,
            tunnel.link_type,
            tunnel.bandwidth,
            tunnel.mtu,
            tunnel.delay_ns as f32 / 1000000.0,
            tunnel.jitter_ns as f32 / 1000000.0,
            networkv4_to_string(&tunnel.tunnel_net),
            tunnel.status,
            tunnel.owner
            )?;

        Ok(())
    }
}
