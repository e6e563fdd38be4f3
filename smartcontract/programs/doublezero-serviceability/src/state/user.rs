use crate::{
    error::{DoubleZeroError, Validate},
    helper::{deserialize_vec_with_capacity, is_global},
    state::{
        accesspass::{AccessPass, AccessPassStatus, AccessPassType},
        accounttype::AccountType,
    },
};
use borsh::{BorshDeserialize, BorshSerialize};
use doublezero_program_common::types::NetworkV4;
use solana_program::{
    account_info::AccountInfo, entrypoint::ProgramResult, msg, program_error::ProgramError,
    pubkey::Pubkey,
};
use std::{fmt, net::Ipv4Addr};

#[repr(u8)]
#[derive(BorshSerialize, BorshDeserialize, Debug, Copy, Clone, PartialEq, Default)]
#[borsh(use_discriminant = true)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UserType {
    #[default]
    IBRL = 0,
    IBRLWithAllocatedIP = 1,
    EdgeFiltering = 2,
    Multicast = 3,
}

impl From<u8> for UserType {
    fn from(value: u8) -> Self {
        match value {
            0 => UserType::IBRL,
            1 => UserType::IBRLWithAllocatedIP,
            2 => UserType::EdgeFiltering,
            3 => UserType::Multicast,
            // TODO: leaving this as it unwinds a lot of things and doesn't seem worth the effort at this time
            _ => panic!("Unknown UserType"),
        }
    }
}

impl fmt::Display for UserType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserType::IBRL => write!(f, "IBRL"),
            UserType::IBRLWithAllocatedIP => write!(f, "IBRLWithAllocatedIP"),
            UserType::EdgeFiltering => write!(f, "EdgeFiltering"),
            UserType::Multicast => write!(f, "Multicast"),
        }
    }
}

#[repr(u8)]
#[derive(BorshSerialize, BorshDeserialize, Debug, Copy, Clone, PartialEq, Default)]
#[borsh(use_discriminant = true)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UserCYOA {
    #[default]
    None = 0,
    GREOverDIA = 1,
    GREOverFabric = 2,
    GREOverPrivatePeering = 3,
    GREOverPublicPeering = 4,
    GREOverCable = 5,
}

impl From<u8> for UserCYOA {
    fn from(value: u8) -> Self {
        match value {
            1 => UserCYOA::GREOverDIA,
            2 => UserCYOA::GREOverFabric,
            3 => UserCYOA::GREOverPrivatePeering,
            4 => UserCYOA::GREOverPublicPeering,
            5 => UserCYOA::GREOverCable,
            _ => UserCYOA::None,
        }
    }
}

impl fmt::Display for UserCYOA {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserCYOA::None => write!(f, "none"),
            UserCYOA::GREOverDIA => write!(f, "GREOverDIA"),
            UserCYOA::GREOverFabric => write!(f, "GREOverFabric"),
            UserCYOA::GREOverPrivatePeering => write!(f, "GREOverPrivatePeering"),
            UserCYOA::GREOverPublicPeering => write!(f, "GREOverPublicPeering"),
            UserCYOA::GREOverCable => write!(f, "GREOverCable"),
        }
    }
}

#[repr(u8)]
#[derive(BorshSerialize, BorshDeserialize, Debug, Copy, Clone, PartialEq, Default)]
#[borsh(use_discriminant = true)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UserStatus {
    #[default]
    Pending = 0,
    Activated = 1,
    SuspendedDeprecated = 2, // deprecated
    Deleting = 3,
    Rejected = 4,
    PendingBan = 5,
    Banned = 6,
    Updating = 7,
    OutOfCredits = 8,
}

impl From<u8> for UserStatus {
    fn from(value: u8) -> Self {
        match value {
            0 => UserStatus::Pending,
            1 => UserStatus::Activated,
            2 => UserStatus::SuspendedDeprecated,
            3 => UserStatus::Deleting,
            4 => UserStatus::Rejected,
            5 => UserStatus::PendingBan,
            6 => UserStatus::Banned,
            7 => UserStatus::Updating,
            8 => UserStatus::OutOfCredits,
            _ => UserStatus::Pending,
        }
    }
}

impl fmt::Display for UserStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserStatus::Pending => write!(f, "pending"),
            UserStatus::Activated => write!(f, "activated"),
            UserStatus::SuspendedDeprecated => write!(f, "suspended"),
            UserStatus::Deleting => write!(f, "deleting"),
            UserStatus::Rejected => write!(f, "rejected"),
            UserStatus::PendingBan => write!(f, "pending ban"),
            UserStatus::Updating => write!(f, "updating"),
            UserStatus::Banned => write!(f, "banned"),
            UserStatus::OutOfCredits => write!(f, "out_of_credits"),
        }
    }
}

#[derive(BorshSerialize, Debug, PartialEq, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct User {
    pub account_type: AccountType, // 1
    #[cfg_attr(
        feature = "serde",
        serde(
            serialize_with = "doublezero_program_common::serializer::serialize_pubkey_as_string",
            deserialize_with = "doublezero_program_common::serializer::deserialize_pubkey_from_string"
        )
    )]
    pub owner: Pubkey, // 32
    pub index: u128,               // 16
    pub bump_seed: u8,             // 1
    pub user_type: UserType,       // 1
    #[cfg_attr(
        feature = "serde",
        serde(
            serialize_with = "doublezero_program_common::serializer::serialize_pubkey_as_string",
            deserialize_with = "doublezero_program_common::serializer::deserialize_pubkey_from_string"
        )
    )]
    pub tenant_pk: Pubkey, // 32
    #[cfg_attr(
        feature = "serde",
        serde(
            serialize_with = "doublezero_program_common::serializer::serialize_pubkey_as_string",
            deserialize_with = "doublezero_program_common::serializer::deserialize_pubkey_from_string"
        )
    )]
    pub device_pk: Pubkey, // 32
    pub cyoa_type: UserCYOA,       // 1
    pub client_ip: Ipv4Addr,       // 4
    pub dz_ip: Ipv4Addr,           // 4
    pub tunnel_id: u16,            // 2
    pub tunnel_net: NetworkV4,     // 5
    pub status: UserStatus,        // 1
    #[cfg_attr(
        feature = "serde",
        serde(
            serialize_with = "doublezero_program_common::serializer::serialize_pubkeylist_as_string",
            deserialize_with = "doublezero_program_common::serializer::deserialize_pubkeylist_from_string"
        )
    )]
    pub publishers: Vec<Pubkey>, // 4 + 32 * len
    #[cfg_attr(
        feature = "serde",
        serde(
            serialize_with = "doublezero_program_common::serializer::serialize_pubkeylist_as_string",
            deserialize_with = "doublezero_program_common::serializer::deserialize_pubkeylist_from_string"
        )
    )]
    pub subscribers: Vec<Pubkey>, // 4 + 32 * len
    #[cfg_attr(
        feature = "serde",
        serde(
            serialize_with = "doublezero_program_common::serializer::serialize_pubkey_as_string",
            deserialize_with = "doublezero_program_common::serializer::deserialize_pubkey_from_string"
        )
    )]
    pub validator_pubkey: Pubkey, // 32
    /// Tunnel endpoint IP (device-side GRE endpoint). 0.0.0.0 means use device.public_ip for backwards compatibility.
    pub tunnel_endpoint: Ipv4Addr, // 4
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "account_type: {}, owner: {}, index: {}, user_type: {}, device_pk: {}, cyoa_type: {}, client_ip: {}, dz_ip: {}, tunnel_id: {}, tunnel_net: {}, status: {}, tunnel_endpoint: {}",
            self.account_type,
            self.owner,
            self.index,
            self.user_type,
            self.device_pk,
            self.cyoa_type,
            &self.client_ip,
            &self.dz_ip,
            self.tunnel_id,
            &self.tunnel_net,
            self.status,
<<<<<<< HEAD
=======
            &self.tunnel_endpoint
>>>>>>> 42711d2f (DNM: feat(cli): remove multiple tunnel restriction (#2725))
        )
    }
}

impl TryFrom<&[u8]> for User {
    type Error = ProgramError;

    fn try_from(mut data: &[u8]) -> Result<Self, ProgramError> {
        let out = Self {
            account_type: BorshDeserialize::deserialize(&mut data).unwrap_or_default(),
            owner: BorshDeserialize::deserialize(&mut data).unwrap_or_default(),
            index: BorshDeserialize::deserialize(&mut data).unwrap_or_default(),
            bump_seed: BorshDeserialize::deserialize(&mut data).unwrap_or_default(),
            user_type: BorshDeserialize::deserialize(&mut data).unwrap_or_default(),
            tenant_pk: BorshDeserialize::deserialize(&mut data).unwrap_or_default(),
            device_pk: BorshDeserialize::deserialize(&mut data).unwrap_or_default(),
            cyoa_type: BorshDeserialize::deserialize(&mut data).unwrap_or_default(),
            client_ip: BorshDeserialize::deserialize(&mut data).unwrap_or([0, 0, 0, 0].into()),
            dz_ip: BorshDeserialize::deserialize(&mut data).unwrap_or([0, 0, 0, 0].into()),
            tunnel_id: BorshDeserialize::deserialize(&mut data).unwrap_or_default(),
            tunnel_net: BorshDeserialize::deserialize(&mut data).unwrap_or_default(),
            status: BorshDeserialize::deserialize(&mut data).unwrap_or_default(),
            publishers: deserialize_vec_with_capacity(&mut data).unwrap_or_default(),
            subscribers: deserialize_vec_with_capacity(&mut data).unwrap_or_default(),
            validator_pubkey: BorshDeserialize::deserialize(&mut data).unwrap_or_default(),
            // Tunnel endpoint - defaults to 0.0.0.0 for backwards compatibility (use device.public_ip)
            tunnel_endpoint: BorshDeserialize::deserialize(&mut data)
                .unwrap_or([0, 0, 0, 0].into()),
        };

        if out.account_type != AccountType::User {
            return Err(ProgramError::InvalidAccountData);
        }

        Ok(out)
    }
}

impl TryFrom<&AccountInfo<'_>> for User {
    type Error = ProgramError;

    fn try_from(account: &AccountInfo) -> Result<Self, Self::Error> {
        let data = account.try_borrow_data()?;
        let res = Self::try_from(&data[..]);
        if res.is_err() {
            msg!("Failed to deserialize User: {:?}", res.as_ref().err());
        }
        res
    }
}

impl Validate for User {
    fn validate(&self) -> Result<(), DoubleZeroError> {
        // Account type must be User
        if self.account_type != AccountType::User {
            msg!("account_type: {}", self.account_type);
            return Err(DoubleZeroError::InvalidAccountType);
        }
        // Device public key must be valid
        if self.device_pk == Pubkey::default() {
            msg!("device_pk: {}", self.device_pk);
            return Err(DoubleZeroError::InvalidDevicePubkey);
        }
        // client_ip must be global unicast
        if !is_global(self.client_ip) {
            msg!("client_ip: {}", self.client_ip);
            return Err(DoubleZeroError::InvalidClientIp);
        }
        // dz_ip must be global unicast
        if self.status != UserStatus::Pending && !is_global(self.dz_ip) {
            msg!("dz_ip: {}", self.dz_ip);
            return Err(DoubleZeroError::InvalidDzIp);
        }
        // tunnel net must be private
        if self.status != UserStatus::Pending && !self.tunnel_net.ip().is_link_local() {
            msg!("tunnel_net: {}", self.tunnel_net);
            return Err(DoubleZeroError::InvalidTunnelNet);
        }
        // tunnel_id must be less than or equal to 1024
        if self.tunnel_id > 1024 {
            msg!("tunnel_id: {}", self.tunnel_id);
            return Err(DoubleZeroError::InvalidTunnelId);
        }
        // tunnel_endpoint must be global unicast if set (non-zero)
        // Validation against device interfaces is done at the instruction level
        if self.tunnel_endpoint != Ipv4Addr::UNSPECIFIED && !is_global(self.tunnel_endpoint) {
            msg!("tunnel_endpoint: {}", self.tunnel_endpoint);
            return Err(DoubleZeroError::InvalidTunnelEndpoint);
        }

        Ok(())
    }
}

impl User {
    // ============================================================
    // Capability helper methods
    // These derive user capabilities from actual state rather than
    // relying on UserType categorization. This enables users to have
    // multiple tunnel types concurrently (unicast + multicast).
    // ============================================================

    pub fn has_unicast_tunnel(&self) -> bool {
        self.tunnel_id != 0
    }

<<<<<<< HEAD
=======
    pub fn has_tunnel_endpoint(&self) -> bool {
        self.tunnel_endpoint != Ipv4Addr::UNSPECIFIED
    }

>>>>>>> 42711d2f (DNM: feat(cli): remove multiple tunnel restriction (#2725))
    pub fn has_allocated_dz_ip(&self) -> bool {
        self.dz_ip != Ipv4Addr::UNSPECIFIED && self.dz_ip != self.client_ip
    }

    pub fn is_publisher(&self) -> bool {
        !self.publishers.is_empty()
    }

    pub fn is_subscriber(&self) -> bool {
        !self.subscribers.is_empty()
    }

    pub fn is_multicast_participant(&self) -> bool {
        self.is_publisher() || self.is_subscriber()
    }

    pub fn needs_allocated_dz_ip(&self) -> bool {
        match self.user_type {
            UserType::IBRLWithAllocatedIP | UserType::EdgeFiltering => true,
            UserType::IBRL => false,
            UserType::Multicast => self.is_publisher(),
        }
    }

    pub fn needs_multicast(&self) -> bool {
        self.is_subscriber()
    }

    pub fn get_multicast_groups(&self) -> Vec<Pubkey> {
        let mut groups: Vec<Pubkey> = vec![];

        groups.extend(self.publishers.iter().cloned());
<<<<<<< HEAD
        // Add subscribers that aren't already in the list
=======

>>>>>>> 42711d2f (DNM: feat(cli): remove multiple tunnel restriction (#2725))
        for sub in &self.subscribers {
            if !groups.contains(sub) {
                groups.push(*sub);
            }
        }

        groups
    }

    pub fn try_activate(&mut self, accesspass: &mut AccessPass) -> ProgramResult {
        accesspass.update_status()?;

        self.validator_pubkey = match &accesspass.accesspass_type {
            AccessPassType::SolanaValidator(pk) => *pk,
            _ => Pubkey::default(),
        };

        self.status = if accesspass.status == AccessPassStatus::Expired {
            UserStatus::OutOfCredits
        } else {
            UserStatus::Activated
        };

        Ok(())
    }
}
