use crate::{
    activator::DeviceMap, idallocator::IDAllocator, ipblockallocator::IPBlockAllocator,
    states::devicestate::DeviceState,
};
use doublezero_sdk::{
    commands::{
        device::get::GetDeviceCommand,
        user::{
            activate::ActivateUserCommand, ban::BanUserCommand,
            closeaccount::CloseAccountUserCommand, reject::RejectUserCommand,
        },
    },
    DoubleZeroClient, NetworkV4, User, UserStatus, UserType,
};
use log::info;
use solana_client::rpc_response::RpcContactInfo;
use solana_sdk::{pubkey::Pubkey, signature::Signature};
use std::{
    collections::{hash_map::Entry, HashMap},
    fmt::Write,
    net::{IpAddr, Ipv4Addr},
    str::FromStr,
};

#[allow(clippy::too_many_arguments)]
pub fn process_user_event(
    client: &dyn DoubleZeroClient,
    pubkey: &Pubkey,
    devices: &mut DeviceMap,
    user_tunnel_ips: &mut IPBlockAllocator,
    tunnel_tunnel_ids: &mut IDAllocator,
    user: &User,
    clusters: Vec<RpcContactInfo>,
    state_transitions: &mut HashMap<&'static str, usize>,
) {
    match user.status {
        // Create User
        UserStatus::Pending => {
            let mut log_msg = String::new();
            write!(
                &mut log_msg,
                "Event:User(Pending) {} ({}) ",
                pubkey, user.client_ip
            )
            .unwrap();

            let device_state = match get_or_insert_device_state(
                client,
                pubkey,
                devices,
                user,
                state_transitions,
            ) {
                Some(ds) => ds,
                None => {
                    // Reject user since we couldn't get their user block
                    let res =
                        reject_user(client, pubkey, "Error: Device not found", state_transitions);

                    match res {
                        Ok(signature) => {
                            write!(
                                &mut log_msg,
                                " Reject(Device not found) Rejected {signature}"
                            )
                            .unwrap();
                        }
                        Err(e) => {
                            write!(&mut log_msg, " Reject(Device not found) Error: {e}").unwrap();
                        }
                    }
                    info!("{log_msg}");
                    return;
                }
            };

            write!(&mut log_msg, " for: {}", device_state.device.code).unwrap();

            let ip: IpAddr = user.client_ip.into();
            let cluster = clusters.iter().find(|c| match c.gossip {
                Some(addr) => addr.ip() == ip,
                None => false,
            });

            write!(
                &mut log_msg,
                " ValidatorPubkey: {} ",
                &cluster
                    .map(|c| c.pubkey.to_string())
                    .unwrap_or_else(|| "None".to_string())
            )
            .unwrap();

            // Try to get tunnel network
            let tunnel_net = match user_tunnel_ips.next_available_block(0, 2) {
                Some(net) => net,
                None => {
                    // Reject user since we couldn't get their user block
                    let res = reject_user(
                        client,
                        pubkey,
                        "Error: No available user block",
                        state_transitions,
                    );

                    match res {
                        Ok(signature) => {
                            write!(
                                &mut log_msg,
                                " Reject(No available user block) Rejected {signature}"
                            )
                            .unwrap();
                        }
                        Err(e) => {
                            write!(&mut log_msg, " Reject(No available user block) Error: {e}")
                                .unwrap();
                        }
                    }
                    info!("{log_msg}");
                    return;
                }
            };

            write!(&mut log_msg, " tunnel_net: {} ", &tunnel_net).unwrap();

            let tunnel_id = device_state.get_next_tunnel_id();

            let need_dz_ip = match user.user_type {
                UserType::IBRLWithAllocatedIP | UserType::EdgeFiltering => true,
                UserType::IBRL => false,
                UserType::Multicast => !user.publishers.is_empty(),
            };

            let dz_ip = if need_dz_ip {
                match device_state.get_next_dz_ip() {
                    Some(ip) => ip,
                    None => {
                        let res = reject_user(
                            client,
                            pubkey,
                            "Error: No available dz_ip to allocate",
                            state_transitions,
                        );

                        match res {
                            Ok(signature) => {
                                write!(
                                    &mut log_msg,
                                    " Reject(No available dz_ip to allocate) Rejected {signature}"
                                )
                                .unwrap();
                            }
                            Err(e) => {
                                write!(
                                    &mut log_msg,
                                    " Reject(No available dz_ip to allocate) Error: {e}"
                                )
                                .unwrap();
                            }
                        }
                        info!("{log_msg}");
                        return;
                    }
                }
            } else {
                user.client_ip
            };

            write!(&mut log_msg, " tunnel_id: {} dz_ip: {} ", tunnel_id, &dz_ip).unwrap();

            let validator_pubkey = if let Some(v) = &cluster {
                Pubkey::from_str(&v.pubkey).ok()
            } else {
                None
            };

            // Activate the user
            let res = ActivateUserCommand {
                user_pubkey: *pubkey,
                tunnel_id,
                tunnel_net: tunnel_net.into(),
                dz_ip,
                validator_pubkey,
            }
            .execute(client);

            match res {
                Ok(signature) => {
                    write!(&mut log_msg, " Activated   {signature}").unwrap();
                    *state_transitions
                        .entry("user-pending-to-activated")
                        .or_insert(0) += 1;
                }
                Err(e) => {
                    write!(&mut log_msg, " Error: {e}").unwrap();
                }
            }

            info!("{log_msg}");
        }
        UserStatus::Updating => {
            let mut log_msg = String::new();

            write!(
                &mut log_msg,
                "Event:User(Updating) {} ({}) ",
                pubkey, user.client_ip
            )
            .unwrap();

            let device_state = match get_or_insert_device_state(
                client,
                pubkey,
                devices,
                user,
                state_transitions,
            ) {
                Some(ds) => ds,
                None => return,
            };

            write!(
                &mut log_msg,
                " Activating User: {}, for: {}",
                &user.client_ip, device_state.device.code
            )
            .unwrap();

            let need_dz_ip = match user.user_type {
                UserType::IBRLWithAllocatedIP | UserType::EdgeFiltering => true,
                UserType::IBRL => false,
                UserType::Multicast => !user.publishers.is_empty(),
            };

            let dz_ip = if need_dz_ip && user.dz_ip == user.client_ip {
                match device_state.get_next_dz_ip() {
                    Some(ip) => ip,
                    None => {
                        let res = reject_user(
                            client,
                            pubkey,
                            "Error: No available dz_ip to allocate",
                            state_transitions,
                        );

                        match res {
                            Ok(signature) => {
                                write!(
                                    &mut log_msg,
                                    " Reject(No available user block) Rejected {signature}"
                                )
                                .unwrap();
                            }
                            Err(e) => {
                                write!(&mut log_msg, " Reject(No available user block) Error: {e}")
                                    .unwrap();
                            }
                        }
                        info!("{log_msg}");
                        return;
                    }
                }
            } else {
                user.dz_ip
            };

            write!(
                &mut log_msg,
                " tunnel_net: {} tunnel_id: {} dz_ip: {} ",
                &user.tunnel_net, user.tunnel_id, &dz_ip
            )
            .unwrap();

            // Activate the user
            let res = ActivateUserCommand {
                user_pubkey: *pubkey,
                tunnel_id: user.tunnel_id,
                tunnel_net: user.tunnel_net,
                dz_ip,
                validator_pubkey: Some(user.validator_pubkey),
            }
            .execute(client);
            match res {
                Ok(signature) => {
                    write!(&mut log_msg, "Reactivated   {signature}").unwrap();

                    *state_transitions
                        .entry("user-updating-to-activated")
                        .or_insert(0) += 1;
                }
                Err(e) => {
                    write!(&mut log_msg, " Error {e}").unwrap();
                }
            }

            info!("{log_msg}");
        }

        // Delete User
        UserStatus::Deleting | UserStatus::PendingBan => {
            let mut log_msg = String::new();

            write!(
                &mut log_msg,
                "Event:User(Deleting) {} ({}) ",
                pubkey, user.client_ip
            )
            .unwrap();

            if let Some(device_state) = devices.get_mut(&user.device_pk) {
                write!(
                    &mut log_msg,
                    "for {} tunnel_net: {} tunnel_id: {} dz_ip: {}",
                    device_state.device.code, &user.tunnel_net, user.tunnel_id, &user.dz_ip
                )
                .unwrap();

                if user.tunnel_id != 0 {
                    tunnel_tunnel_ids.unassign(user.tunnel_id);
                }
                if user.tunnel_net != NetworkV4::default() {
                    user_tunnel_ips.unassign_block(user.tunnel_net.into());
                }
                if user.dz_ip != Ipv4Addr::UNSPECIFIED {
                    device_state.release(user.dz_ip, user.tunnel_id).unwrap();
                }

                if user.status == UserStatus::Deleting {
                    let res = CloseAccountUserCommand {
                        pubkey: *pubkey,
                        owner: user.owner,
                    }
                    .execute(client);

                    match res {
                        Ok(signature) => {
                            write!(&mut log_msg, " Deactivated {signature}").unwrap();

                            *state_transitions
                                .entry("user-deleting-to-deactivated")
                                .or_insert(0) += 1;
                        }
                        Err(e) => info!("Error: {e}"),
                    }
                } else if user.status == UserStatus::PendingBan {
                    let res = BanUserCommand { pubkey: *pubkey }.execute(client);

                    match res {
                        Ok(signature) => {
                            write!(&mut log_msg, " Banned {signature}").unwrap();

                            *state_transitions
                                .entry("user-pending-ban-to-banned")
                                .or_insert(0) += 1;
                        }
                        Err(e) => {
                            write!(&mut log_msg, " Error {e}").unwrap();
                        }
                    }
                }
            }

            info!("{log_msg}");
        }
        _ => {}
    }
}

fn reject_user(
    client: &dyn DoubleZeroClient,
    pubkey: &Pubkey,
    reason: &str,
    state_transitions: &mut HashMap<&str, usize>,
) -> eyre::Result<Signature> {
    let signature = RejectUserCommand {
        pubkey: *pubkey,
        reason: reason.to_string(),
    }
    .execute(client)?;

    *state_transitions
        .entry("user-pending-to-rejected")
        .or_insert(0) += 1;

    Ok(signature)
}

fn get_or_insert_device_state<'a>(
    client: &dyn DoubleZeroClient,
    _pubkey: &Pubkey,
    devices: &'a mut DeviceMap,
    user: &User,
    _state_transitions: &mut HashMap<&'static str, usize>,
) -> Option<&'a mut DeviceState> {
    match devices.entry(user.device_pk) {
        Entry::Occupied(entry) => Some(entry.into_mut()),
        Entry::Vacant(entry) => {
            let res = GetDeviceCommand {
                pubkey_or_code: user.device_pk.to_string(),
            }
            .execute(client);

            match res {
                Ok((_, device)) => {
                    info!(
                        "Add Device: {} public_ip: {} dz_prefixes: {} ",
                        device.code, &device.public_ip, &device.dz_prefixes,
                    );
                    Some(entry.insert(DeviceState::new(&device)))
                }
                Err(_) => None,
            }
        }
    }
}
