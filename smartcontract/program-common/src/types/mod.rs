pub mod network_v4;
pub mod network_v4_list;
pub mod parse_utils;

pub type NetworkV4 = network_v4::NetworkV4;
pub type NetworkV4List = network_v4_list::NetworkV4List;
