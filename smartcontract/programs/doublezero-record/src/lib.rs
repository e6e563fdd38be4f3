//! Record program
#![deny(missing_docs)]

mod entrypoint;
pub mod error;
pub mod instruction;
pub mod processor;
pub mod state;

solana_program::declare_id!("dzrecxigtaZQ3gPmt2X5mDkYigaruFR1rHCqztFTvx7");
