use crate::{
    doublezerocommand::CliCommand,
    helpers::parse_pubkey,
    poll_for_activation::{poll_for_multicastgroup_activated, poll_for_user_activated},
    requirements::{CHECK_BALANCE, CHECK_ID_JSON},
    validators::{validate_pubkey, validate_pubkey_or_code},
};
use clap::Args;
use doublezero_sdk::commands::{
    multicastgroup::{get::GetMulticastGroupCommand, subscribe::SubscribeMulticastGroupCommand},
    user::get::GetUserCommand,
};
use std::io::Write;

#[derive(Args, Debug)]
pub struct SubscribeUserCliCommand {
    /// User Pubkey to subscribe
    #[arg(long, value_parser = validate_pubkey)]
    pub user: String,
    /// Multicast group Pubkey or code to subscribe to (can be specified multiple times)
    #[arg(long = "group", value_parser = validate_pubkey_or_code, num_args = 1..)]
    pub groups: Vec<String>,
    /// Subscribe as a publisher
    #[arg(long)]
    pub publisher: bool,
    /// Subscribe as a subscriber
    #[arg(long)]
    pub subscriber: bool,
    /// Wait for the subscription to complete.
    #[arg(short, long, default_value_t = false)]
    pub wait: bool,
}

impl SubscribeUserCliCommand {
    pub fn execute<C: CliCommand, W: Write>(self, client: &C, out: &mut W) -> eyre::Result<()> {
        // Check requirements
        client.check_requirements(CHECK_ID_JSON | CHECK_BALANCE)?;

        let (user_pk, user) = client.get_user(GetUserCommand {
            pubkey: parse_pubkey(&self.user).ok_or_else(|| eyre::eyre!("Invalid user pubkey"))?,
        })?;

        // Resolve all group pubkeys
        let mut group_pks = Vec::new();
        for group in &self.groups {
            let group_pk = match parse_pubkey(group) {
                Some(pk) => pk,
                None => {
                    let (pubkey, _) = client
                        .get_multicastgroup(GetMulticastGroupCommand {
                            pubkey_or_code: group.to_string(),
                        })
                        .map_err(|_| eyre::eyre!("MulticastGroup not found ({})", group))?;
                    pubkey
                }
            };
            group_pks.push(group_pk);
        }

        // Subscribe to each group
        for group_pk in &group_pks {
            let signature = client.subscribe_multicastgroup(SubscribeMulticastGroupCommand {
                user_pk,
                group_pk: *group_pk,
                client_ip: user.client_ip,
                publisher: self.publisher,
                subscriber: self.subscriber,
            })?;
            writeln!(out, "Subscribed to {group_pk}: {signature}")?;
        }

        if self.wait {
            let user = poll_for_user_activated(client, &user_pk)?;
            writeln!(out, "User status: {}", user.status)?;
            for group_pk in &group_pks {
                let mgroup = poll_for_multicastgroup_activated(client, group_pk)?;
                writeln!(out, "Multicast group {group_pk} status: {}", mgroup.status)?;
            }
        }

        Ok(())
    }
}
