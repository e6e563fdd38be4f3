use std::net::Ipv4Addr;

use crate::ledger::{
    LedgerClient, ProgramSnapshot, RawConfig, RawContributor, RawDevice, RawExchange, RawInterface,
    RawLink, RawLocation, RawMulticastGroup, RawUser,
};
use crate::model::{InterfaceType, LinkStatus, LoopbackType};
use crate::{Error, Result};
use solana_client::{
    rpc_client::RpcClient,
    rpc_config::{RpcAccountInfoConfig, RpcProgramAccountsConfig, RpcSendTransactionConfig},
    rpc_filter::{Memcmp, MemcmpEncodedBytes, RpcFilterType},
};
use solana_sdk::{
    account::Account,
    instruction::{AccountMeta, Instruction},
    pubkey::Pubkey,
    signature::{Keypair, Signer},
    system_instruction, system_program,
    transaction::Transaction,
};

use crate::chain::{
    self, derive_device_latency_samples_account, derive_device_latency_samples_account_seed,
    AccountType as ChainAccountType, InitializeDeviceLatencySamplesArgs,
    InterfaceType as ChainInterfaceType, LinkStatus as ChainLinkStatus,
    LoopbackType as ChainLoopbackType, TelemetryInstruction, UserStatus as ChainUserStatus,
    UserType as ChainUserType, DEVICE_LATENCY_SAMPLES_ALLOCATED_SIZE,
};

/// `LedgerClient` backed by a real Solana RPC endpoint. Reads every
/// serviceability account type with the filter-by-discriminant-byte pattern,
/// decodes via the local borsh mirrors in [`crate::chain`], and converts into
/// the `Raw*` conversion types. Writes build and submit the telemetry
/// program's own instruction encoding directly.
///
/// Tenant accounts have no dedicated `AccountType` discriminant in this
/// build of the on-chain program, so they're not fetched here; tenant
/// lookups fall back to the unassigned-tenant default wherever they're
/// consumed.
pub struct SolanaLedgerClient {
    rpc: RpcClient,
    program_id: Pubkey,
    payer: Option<Keypair>,
}

impl SolanaLedgerClient {
    pub fn new(rpc_url: String, program_id: Pubkey, payer: Option<Keypair>) -> Self {
        Self {
            rpc: RpcClient::new(rpc_url),
            program_id,
            payer,
        }
    }

    fn accounts_of_type(&self, account_type: ChainAccountType) -> Result<Vec<(Pubkey, Account)>> {
        let filters = vec![RpcFilterType::Memcmp(Memcmp::new(
            0,
            MemcmpEncodedBytes::Bytes(vec![account_type as u8]),
        ))];
        let config = RpcProgramAccountsConfig {
            filters: Some(filters),
            account_config: RpcAccountInfoConfig::default(),
            with_context: None,
            sort_results: None,
        };
        self.rpc
            .get_program_accounts_with_config(&self.program_id, config)
            .map_err(|e| Error::LedgerTransient(e.to_string()))
    }

    fn payer(&self) -> Result<&Keypair> {
        self.payer
            .as_ref()
            .ok_or_else(|| Error::Internal("no signer configured for ledger writes".to_string()))
    }
}

fn to_raw_interface(iface: &chain::Interface) -> RawInterface {
    let interface_type = if iface.interface_type == ChainInterfaceType::Loopback {
        InterfaceType::Loopback
    } else if iface.name.contains('.') {
        InterfaceType::SubInterface
    } else {
        InterfaceType::Physical
    };
    let loopback_type = match iface.loopback_type {
        ChainLoopbackType::Vpnv4 => LoopbackType::Vpnv4,
        ChainLoopbackType::Ipv4 => LoopbackType::Ipv4,
        _ => LoopbackType::None,
    };
    RawInterface {
        name: iface.name.clone(),
        interface_type,
        loopback_type,
        prefix: Some(iface.ip_net),
        node_segment_idx: iface.node_segment_idx,
    }
}

fn to_raw_link_status(status: ChainLinkStatus) -> LinkStatus {
    match status {
        ChainLinkStatus::Activated => LinkStatus::Activated,
        ChainLinkStatus::SoftDrained => LinkStatus::SoftDrained,
        ChainLinkStatus::HardDrained => LinkStatus::HardDrained,
        _ => LinkStatus::Pending,
    }
}

impl LedgerClient for SolanaLedgerClient {
    fn program_id(&self) -> Pubkey {
        self.program_id
    }

    fn get_program_data(&self) -> Result<ProgramSnapshot> {
        let mut snapshot = ProgramSnapshot::default();

        for (pubkey, account) in self.accounts_of_type(ChainAccountType::Device)? {
            let d = chain::Device::try_from(&account.data[..])
                .map_err(|e| Error::Internal(format!("decoding device {pubkey}: {e}")))?;
            snapshot.devices.push(RawDevice {
                pubkey,
                public_ip: d.public_ip,
                contributor_pk: d.contributor_pk,
                exchange_pk: d.exchange_pk,
                location_pk: d.location_pk,
                mgmt_vrf: d.mgmt_vrf,
                local_asn: None,
                interfaces: d.interfaces.iter().map(to_raw_interface).collect(),
            });
        }

        for (pubkey, account) in self.accounts_of_type(ChainAccountType::Link)? {
            let l = chain::Link::try_from(&account.data[..])
                .map_err(|e| Error::Internal(format!("decoding link {pubkey}: {e}")))?;
            snapshot.links.push(RawLink {
                pubkey,
                side_a_device_pk: l.side_a_pk,
                side_a_interface_name: l.side_a_iface_name,
                side_z_device_pk: l.side_z_pk,
                side_z_interface_name: l.side_z_iface_name,
                delay_ns: l.delay_ns as i64,
                delay_override_ns: l.delay_override_ns as i64,
                status: to_raw_link_status(l.status),
                tunnel_net: l.tunnel_net,
            });
        }

        for (pubkey, account) in self.accounts_of_type(ChainAccountType::User)? {
            let u = chain::User::try_from(&account.data[..])
                .map_err(|e| Error::Internal(format!("decoding user {pubkey}: {e}")))?;
            snapshot.users.push(RawUser {
                pubkey,
                activated: matches!(u.status, ChainUserStatus::Activated),
                device_pk: u.device_pk,
                client_ip: u.client_ip,
                service_ip: u.dz_ip,
                tunnel_id: u.tunnel_id,
                tunnel_net: u.tunnel_net,
                tunnel_endpoint: (u.tunnel_endpoint != Ipv4Addr::UNSPECIFIED)
                    .then_some(u.tunnel_endpoint),
                tenant_pk: (u.tenant_pk != Pubkey::default()).then_some(u.tenant_pk),
                is_multicast: matches!(u.user_type, ChainUserType::Multicast),
                subscriber_group_pks: u.subscribers,
                publisher_group_pks: u.publishers,
            });
        }

        for (pubkey, account) in self.accounts_of_type(ChainAccountType::Exchange)? {
            let e = chain::Exchange::try_from(&account.data[..])
                .map_err(|e| Error::Internal(format!("decoding exchange {pubkey}: {e}")))?;
            snapshot.exchanges.push(RawExchange {
                pubkey,
                code: e.code,
                bgp_community: e.bgp_community as u32,
            });
        }

        for (pubkey, account) in self.accounts_of_type(ChainAccountType::Contributor)? {
            let c = chain::Contributor::try_from(&account.data[..])
                .map_err(|e| Error::Internal(format!("decoding contributor {pubkey}: {e}")))?;
            snapshot
                .contributors
                .push(RawContributor { pubkey, code: c.code });
        }

        for (pubkey, account) in self.accounts_of_type(ChainAccountType::Location)? {
            let l = chain::Location::try_from(&account.data[..])
                .map_err(|e| Error::Internal(format!("decoding location {pubkey}: {e}")))?;
            snapshot.locations.push(RawLocation { pubkey, code: l.code });
        }

        for (pubkey, account) in self.accounts_of_type(ChainAccountType::MulticastGroup)? {
            let g = chain::MulticastGroup::try_from(&account.data[..]).map_err(|e| {
                Error::Internal(format!("decoding multicast group {pubkey}: {e}"))
            })?;
            snapshot.multicast_groups.push(RawMulticastGroup {
                pubkey,
                multicast_ip: g.multicast_ip,
                max_bandwidth: g.max_bandwidth,
            });
        }

        if let Some((_, account)) = self
            .accounts_of_type(ChainAccountType::Config)?
            .into_iter()
            .next()
        {
            let cfg = chain::GlobalConfig::try_from(&account.data[..])
                .map_err(|e| Error::Internal(format!("decoding global config: {e}")))?;
            snapshot.config = RawConfig {
                local_asn: cfg.local_asn,
                multicast_group_block: cfg.multicastgroup_block,
                user_tunnel_block: cfg.user_tunnel_block,
                tunnel_tunnel_block: cfg.device_tunnel_block,
            };
        }

        // Tenant accounts have no AccountType discriminant in this build;
        // snapshot.tenants stays empty and users fall back to the default
        // unicast tenant (vrf 1, metro routing on).

        Ok(snapshot)
    }

    fn get_current_epoch(&self) -> Result<u64> {
        self.rpc
            .get_epoch_info()
            .map(|info| info.epoch)
            .map_err(|e| Error::LedgerTransient(e.to_string()))
    }

    fn initialize_device_latency_samples(
        &self,
        origin: Pubkey,
        target: Pubkey,
        link: Pubkey,
        epoch: u64,
        sampling_interval_us: u64,
    ) -> Result<Pubkey> {
        let payer = self.payer()?;
        let seed = derive_device_latency_samples_account_seed(
            &self.program_id,
            &origin,
            &target,
            &link,
            epoch,
        );
        let account = derive_device_latency_samples_account(
            &payer.pubkey(),
            &self.program_id,
            &origin,
            &target,
            &link,
            epoch,
        )
        .map_err(|e| Error::Internal(format!("deriving latency samples account: {e}")))?;

        let rent = self
            .rpc
            .get_minimum_balance_for_rent_exemption(DEVICE_LATENCY_SAMPLES_ALLOCATED_SIZE)
            .map_err(|e| Error::SubmitTransient(e.to_string()))?;
        let create_account = system_instruction::create_account_with_seed(
            &payer.pubkey(),
            &account,
            &payer.pubkey(),
            &seed,
            rent,
            DEVICE_LATENCY_SAMPLES_ALLOCATED_SIZE as u64,
            &self.program_id,
        );

        let args = InitializeDeviceLatencySamplesArgs {
            epoch,
            sampling_interval_microseconds: sampling_interval_us,
        };
        let data = TelemetryInstruction::InitializeDeviceLatencySamples(args).pack();

        let accounts = vec![
            AccountMeta::new(account, false),
            AccountMeta::new_readonly(payer.pubkey(), true),
            AccountMeta::new_readonly(origin, false),
            AccountMeta::new_readonly(target, false),
            AccountMeta::new_readonly(link, false),
        ];
        let init = Instruction::new_with_bytes(self.program_id, &data, accounts);

        self.submit_all(&[create_account, init])?;
        Ok(account)
    }

    fn write_device_latency_samples(
        &self,
        account: Pubkey,
        start_timestamp_us: u64,
        samples: &[u32],
    ) -> Result<()> {
        let payer = self.payer()?;
        let args = chain::WriteDeviceLatencySamplesArgs {
            start_timestamp_microseconds: start_timestamp_us,
            samples: samples.to_vec(),
        };
        let data = TelemetryInstruction::WriteDeviceLatencySamples(args).pack();

        let accounts = vec![
            AccountMeta::new(account, false),
            AccountMeta::new_readonly(payer.pubkey(), true),
            AccountMeta::new_readonly(system_program::id(), false),
        ];

        self.submit_all(&[Instruction::new_with_bytes(self.program_id, &data, accounts)])
    }
}

impl SolanaLedgerClient {
    fn submit_all(&self, instructions: &[Instruction]) -> Result<()> {
        let payer = self.payer()?;
        let blockhash = self
            .rpc
            .get_latest_blockhash()
            .map_err(|e| Error::SubmitTransient(e.to_string()))?;
        let tx = Transaction::new_signed_with_payer(
            instructions,
            Some(&payer.pubkey()),
            &[payer],
            blockhash,
        );
        self.rpc
            .send_and_confirm_transaction_with_config(&tx, RpcSendTransactionConfig::default())
            .map_err(|e| Error::SubmitTransient(e.to_string()))?;
        Ok(())
    }
}
