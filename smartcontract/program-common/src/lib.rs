//! Common helpers for various SVM programs.

pub mod compat_deserialize;
pub mod create_account;
pub mod resize_account;
pub mod serializer;
pub mod types;
pub mod validate_account_code;

pub use compat_deserialize::compat_deserialize;
pub use create_account::try_create_account;
pub use validate_account_code::validate_account_code;
