use doublezero_sdk::{Exchange, Location};
use solana_sdk::pubkey::Pubkey;
use std::collections::HashMap;

use crate::states::devicestate::DeviceState;

pub fn record_device_ip_metrics(
    device_pk: &Pubkey,
    device_state: &DeviceState,
    locations: &HashMap<Pubkey, Location>,
    exchanges: &HashMap<Pubkey, Exchange>,
) {
    let (assigned, total_ips) = ip_count(device_state);
    let mut labels = Vec::new();
    labels.push(("device_pk", device_pk.to_string()));
    labels.push(("code", device_state.device.code.clone()));

    if let Some(location) = locations.get(&device_state.device.location_pk) {
        labels.push(("location", location.name.clone()));
        labels.push(("location_code", location.code.clone()));
        labels.push(("location_country", location.country.clone()));
    }

    if let Some(exchange) = exchanges.get(&device_state.device.exchange_pk) {
        labels.push(("exchange", exchange.name.clone()));
        labels.push(("exchange_code", exchange.code.clone()));
    }

    metrics::counter!("doublezero_activator_device_assigned_ips", &labels)
        .absolute(assigned as u64);
    metrics::counter!("doublezero_activator_device_total_ips", &labels).absolute(total_ips as u64);
}

fn ip_count(device: &DeviceState) -> (u32, u32) {
    device.dz_ips.iter().fold((0, 0), |acc, alloc| {
        let (count, total) = (
            alloc.assigned_ips.count_ones() as u32,
            alloc.total_ips as u32,
        );
        (acc.0 + count, acc.1 + total)
    })
}
