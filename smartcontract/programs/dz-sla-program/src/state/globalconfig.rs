use borsh::{BorshDeserialize, BorshSerialize};
use solana_program::pubkey::Pubkey;

use super::accounttype::AccountType;
use crate::{bytereader::ByteReader, types::NetworkV4};

#[derive(BorshSerialize, BorshDeserialize, Debug, PartialEq, Clone)]
pub struct GlobalConfig {
    pub account_type: AccountType,          // 1
    pub owner: Pubkey,                      // 32
    pub local_asn: u32,                     // 4
    pub remote_asn: u32,                    // 4
    pub tunnel_tunnel_block: NetworkV4,     // 5
    pub user_tunnel_block: NetworkV4,       // 5
}

impl From<&[u8]> for GlobalConfig {
    fn from(data: &[u8]) -> Self {
        let mut parser = ByteReader::new(data);

        Self {
            account_type: parser.read_enum(),
            owner: parser.read_pubkey(),
            local_asn: parser.read_u32(),
            remote_asn: parser.read_u32(),
            tunnel_tunnel_block: parser.read_networkv4(),
            user_tunnel_block: parser.read_networkv4(),
        }
    }
}

impl GlobalConfig {
    pub fn size(&self) -> usize {
        1 + 32 + 4 + 4 + 5 + 5
    }
}
