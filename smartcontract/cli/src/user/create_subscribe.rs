use crate::{
    doublezerocommand::CliCommand,
    helpers::parse_pubkey,
    poll_for_activation::poll_for_user_activated,
    requirements::{CHECK_BALANCE, CHECK_ID_JSON},
    validators::validate_pubkey_or_code,
};
use clap::Args;
use doublezero_sdk::{
    commands::{
        device::get::GetDeviceCommand, multicastgroup::get::GetMulticastGroupCommand,
        user::create_subscribe::CreateSubscribeUserCommand,
    },
    *,
};
use std::{io::Write, net::Ipv4Addr};

#[derive(Args, Debug)]
pub struct CreateSubscribeUserCliCommand {
    /// Device Pubkey or code to associate with the user
    #[arg(long, value_parser = validate_pubkey_or_code)]
    pub device: String,
    /// Client IP address in IPv4 format
    #[arg(long)]
    pub client_ip: Ipv4Addr,
    /// Allocate a new address for the user
    #[arg(short, long, default_value_t = false)]
    pub allocate_addr: bool,
    /// Multicast group publisher Pubkey or code
    #[arg(long)]
    pub publisher: Option<String>,
    /// Multicast group subscriber Pubkey or code
    #[arg(long)]
    pub subscriber: Option<String>,
    /// Wait for the user to be activated
    #[arg(short, long, default_value_t = false)]
    pub wait: bool,
}

impl CreateSubscribeUserCliCommand {
    pub fn execute<C: CliCommand, W: Write>(self, client: &C, out: &mut W) -> eyre::Result<()> {
        // Check requirements
        client.check_requirements(CHECK_ID_JSON | CHECK_BALANCE)?;

        let device_pk = match parse_pubkey(&self.device) {
            Some(pk) => pk,
            None => {
                let (pubkey, _) = client
                    .get_device(GetDeviceCommand {
                        pubkey_or_code: self.device.clone(),
                    })
                    .map_err(|_| eyre::eyre!("Device not found"))?;
                pubkey
            }
        };

        let publisher_pk = match self.publisher {
            None => None,
            Some(publisher) => match parse_pubkey(&publisher) {
                Some(pk) => Some(pk),
                None => {
                    let (pubkey, _) = client
                        .get_multicastgroup(GetMulticastGroupCommand {
                            pubkey_or_code: publisher.to_string(),
                        })
                        .map_err(|_| eyre::eyre!("MulticastGroup not found {}", publisher))?;
                    Some(pubkey)
                }
            },
        };

        let subscriber_pk = match self.subscriber {
            None => None,
            Some(subscriber) => match parse_pubkey(&subscriber) {
                Some(pk) => Some(pk),
                None => {
                    let (pubkey, _) = client
                        .get_multicastgroup(GetMulticastGroupCommand {
                            pubkey_or_code: subscriber.to_string(),
                        })
                        .map_err(|_| eyre::eyre!("MulticastGroup not found ({})", subscriber))?;
                    Some(pubkey)
                }
            },
        };

        let (signature, pubkey) = client.create_subscribe_user(CreateSubscribeUserCommand {
            user_type: UserType::Multicast,
            device_pk,
            cyoa_type: UserCYOA::GREOverDIA,
            client_ip: self.client_ip,
            publisher: publisher_pk.is_some(),
            subscriber: subscriber_pk.is_some(),
            mgroup_pk: publisher_pk
                .or(subscriber_pk)
                .ok_or(eyre::eyre!("Subscriber is required if publisher is not"))?,
            tunnel_endpoint: Ipv4Addr::UNSPECIFIED,
        })?;
        writeln!(out, "Signature: {signature}",)?;

        if self.wait {
            let user = poll_for_user_activated(client, &pubkey)?;
            writeln!(out, "Status: {0}", user.status)?;
        }

        Ok(())
    }
}
