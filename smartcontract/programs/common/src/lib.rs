//! Common helpers for various SVM programs.

pub mod close_account;
pub mod create_account;
pub mod resize_account;
pub mod serializer;
pub mod types;
pub mod validate_account_code;
pub mod validate_iface;
pub mod write_existing_account;
pub mod write_new_account;

pub use close_account::close_account;
pub use create_account::try_create_account;
pub use validate_account_code::validate_account_code;
pub use validate_iface::validate_iface;
pub use write_existing_account::write_existing_account;
pub use write_new_account::write_new_account;
