#![allow(unexpected_cfgs)]

mod helper;
mod entrypoint;
mod bytereader;

pub mod instructions;
pub mod processors;
pub mod state;
pub mod error;
pub mod seeds;
pub mod pda;
pub mod types;
pub mod addresses;