pub use crate::config::{
    create_new_pubkey_user, default_program_id, get_doublezero_pubkey, read_doublezero_config,
    write_doublezero_config, ClientConfig,
};
pub use doublezero_serviceability::{
    addresses::*,
    pda::{
        get_contributor_pda, get_device_pda, get_exchange_pda, get_globalconfig_pda, get_link_pda,
        get_location_pda, get_multicastgroup_pda, get_resource_extension_pda, get_user_old_pda,
    },
    programversion::ProgramVersion,
    resource::{IdOrIp, ResourceType},
    state::{
        accountdata::AccountData,
        accounttype::AccountType,
        contributor::{Contributor, ContributorStatus},
        device::{Device, DeviceStatus, DeviceType},
        exchange::{Exchange, ExchangeStatus, BGP_COMMUNITY_MAX, BGP_COMMUNITY_MIN},
        globalconfig::GlobalConfig,
        globalstate::GlobalState,
        interface::{
            CurrentInterfaceVersion, Interface, InterfaceStatus, InterfaceType, LoopbackType,
        },
        link::{Link, LinkLinkType, LinkStatus},
        location::{Location, LocationStatus},
        multicastgroup::{MulticastGroup, MulticastGroupStatus},
        programconfig::ProgramConfig,
        resource_extension::ResourceExtensionOwned,
        user::{User, UserCYOA, UserStatus, UserType},
    },
};

mod asyncclient;
mod client;
mod config;
mod consts;
mod dztransaction;
mod errors;

pub mod commands;
pub mod doublezeroclient;
pub mod keypair;
pub mod record;
pub mod rpckeyedaccount_decode;
pub mod telemetry;
pub mod tests;
pub mod utils;

pub use crate::{asyncclient::AsyncDZClient, client::DZClient};

pub use crate::{
    config::{convert_program_moniker, convert_url_moniker, convert_url_to_ws, convert_ws_moniker},
    doublezeroclient::{DoubleZeroClient, MockDoubleZeroClient},
    errors::*,
};

pub use crate::commands::{
    globalconfig::get::GetGlobalConfigCommand,
    globalstate::get::GetGlobalStateCommand,
    location::{create::CreateLocationCommand, get::GetLocationCommand},
};
