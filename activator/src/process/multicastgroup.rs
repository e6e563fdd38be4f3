use crate::ipblockallocator::IPBlockAllocator;
use doublezero_sdk::{
    commands::multicastgroup::{
        activate::ActivateMulticastGroupCommand, deactivate::DeactivateMulticastGroupCommand,
    },
    DoubleZeroClient, MulticastGroup, MulticastGroupStatus,
};
use eyre;
use ipnetwork::Ipv4Network;
use log::info;
use solana_sdk::pubkey::Pubkey;
use std::{
    collections::{hash_map::Entry, HashMap},
    fmt::Write,
    net::Ipv4Addr,
};

/// Stateless variant of process_multicastgroup_event for onchain allocation mode.
/// Does not use any local allocators - all allocation is handled by the smart contract.
pub fn process_multicastgroup_event_stateless(
    client: &dyn DoubleZeroClient,
    pubkey: &Pubkey,
    multicastgroup: &MulticastGroup,
    multicastgroups: &mut HashMap<Pubkey, MulticastGroup>,
) -> eyre::Result<()> {
    match multicastgroup.status {
        MulticastGroupStatus::Pending => {
            let mut log_msg = String::new();
            write!(
                &mut log_msg,
                "Event:MulticastGroup(Pending) {} ({}) ",
                pubkey, multicastgroup.code
            )
            .unwrap();

            write!(&mut log_msg, "using onchain allocation ").unwrap();

            let res = ActivateMulticastGroupCommand {
                mgroup_pubkey: *pubkey,
                multicast_ip: Ipv4Addr::UNSPECIFIED,
                use_onchain_allocation: true,
            }
            .execute(client);

            match res {
                Ok(signature) => {
                    write!(&mut log_msg, "Activated (onchain): {signature} ").unwrap();

                    multicastgroups.insert(*pubkey, multicastgroup.clone());
                    metrics::counter!("doublezero_activator_state_transition", "state_transition" => "multicastgroup-pending-to-activated").increment(1);
                }
                Err(e) => {
                    write!(&mut log_msg, "Error: {e} ").unwrap();
                }
            }
            info!("{log_msg}");
        }
        MulticastGroupStatus::Activated => {
            if let Entry::Vacant(entry) = multicastgroups.entry(*pubkey) {
                info!("Add MulticastGroup: {} ", multicastgroup.code);
                entry.insert(multicastgroup.clone());
                // No local IP tracking in stateless mode
            }
        }
        MulticastGroupStatus::Deleting => {
            let mut log_msg = String::new();
            write!(
                &mut log_msg,
                "Event:MulticastGroup(Deleting) {} ({}) ",
                pubkey, multicastgroup.code
            )
            .unwrap();

            let res = DeactivateMulticastGroupCommand {
                pubkey: *pubkey,
                owner: multicastgroup.owner,
                use_onchain_deallocation: true,
            }
            .execute(client);

            match res {
                Ok(signature) => {
                    write!(&mut log_msg, " Deactivated (onchain) {signature}").unwrap();
                    // No local deallocation needed - onchain handles it

                    multicastgroups.remove(pubkey);
                    metrics::counter!("doublezero_activator_state_transition", "state_transition" => "multicastgroup-deleting-to-deactivated").increment(1);
                }
                Err(e) => {
                    write!(&mut log_msg, " Error {e}",).unwrap();
                }
            }
            info!("{log_msg}");
        }
        _ => {}
    }

    Ok(())
}

/// Stateful multicast group event processor for offchain allocation mode.
/// Uses local allocator for multicast IPs.
pub fn process_multicastgroup_event(
    client: &dyn DoubleZeroClient,
    pubkey: &Pubkey,
    multicastgroup: &MulticastGroup,
    multicastgroups: &mut HashMap<Pubkey, MulticastGroup>,
    multicastgroup_tunnel_ips: &mut IPBlockAllocator,
) -> eyre::Result<()> {
    match multicastgroup.status {
        MulticastGroupStatus::Pending => {
            let mut log_msg = String::new();
            write!(
                &mut log_msg,
                "Event:MulticastGroup(Pending) {} ({}) ",
                pubkey, multicastgroup.code
            )
            .unwrap();

            // Allocate locally
            let multicast_ip = match multicastgroup_tunnel_ips.next_available_block(0, 1) {
                Some(block) => {
                    let ip = block.ip();
                    write!(&mut log_msg, "multicast_ip: {ip} ").unwrap();
                    ip
                }
                None => {
                    write!(&mut log_msg, "Error: No available multicast block").unwrap();
                    info!("{log_msg}");
                    return Ok(());
                }
            };

            let res = ActivateMulticastGroupCommand {
                mgroup_pubkey: *pubkey,
                multicast_ip,
                use_onchain_allocation: false,
            }
            .execute(client);

            match res {
                Ok(signature) => {
                    write!(&mut log_msg, "Activated: {signature} ").unwrap();

                    multicastgroups.insert(*pubkey, multicastgroup.clone());
                    metrics::counter!("doublezero_activator_state_transition", "state_transition" => "multicastgroup-pending-to-activated").increment(1);
                }
                Err(e) => {
                    write!(&mut log_msg, "Error: {e} ").unwrap();
                }
            }
            info!("{log_msg}");
        }
        MulticastGroupStatus::Activated => {
            if let Entry::Vacant(entry) = multicastgroups.entry(*pubkey) {
                info!("Add MulticastGroup: {} ", multicastgroup.code);

                entry.insert(multicastgroup.clone());
                multicastgroup_tunnel_ips
                    .assign_block(Ipv4Network::new(multicastgroup.multicast_ip, 32)?);
            }
        }
        MulticastGroupStatus::Deleting => {
            let mut log_msg = String::new();
            write!(
                &mut log_msg,
                "Event:MulticastGroup(Deleting) {} ({}) ",
                pubkey, multicastgroup.code
            )
            .unwrap();

            let res = DeactivateMulticastGroupCommand {
                pubkey: *pubkey,
                owner: multicastgroup.owner,
                use_onchain_deallocation: false,
            }
            .execute(client);

            match res {
                Ok(signature) => {
                    write!(&mut log_msg, " Deactivated {signature}").unwrap();
                    // Off-chain: activator tracks local allocations
                    multicastgroup_tunnel_ips
                        .unassign_block(Ipv4Network::new(multicastgroup.multicast_ip, 32)?);

                    multicastgroups.remove(pubkey);
                    metrics::counter!("doublezero_activator_state_transition", "state_transition" => "multicastgroup-deleting-to-deactivated").increment(1);
                }
                Err(e) => {
                    write!(&mut log_msg, " Error {e}",).unwrap();
                }
            }
            info!("{log_msg}");
        }
        _ => {}
    }

    Ok(())
}
