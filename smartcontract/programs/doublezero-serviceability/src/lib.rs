#![allow(unexpected_cfgs)]

mod bytereader;
#[cfg(any(not(feature = "no-entrypoint"), test))]
mod entrypoint;
mod globalstate;
mod helper;

pub mod addresses;
pub mod error;
pub mod instructions;
pub mod pda;
pub mod processors;
pub mod seeds;
pub mod state;
pub mod types;
