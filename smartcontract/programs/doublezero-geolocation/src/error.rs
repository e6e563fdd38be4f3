use solana_program::program_error::ProgramError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Clone)]
#[repr(u32)]
pub enum GeolocationError {
    #[error("Invalid account type")]
    InvalidAccountType = 1,
    #[error("Not allowed")]
    NotAllowed = 2,
    #[error("Invalid code length (max 32 bytes)")]
    InvalidCodeLength = 4,
    #[error("Invalid IP address: not publicly routable")]
    InvalidIpAddress = 5,
    #[error("Maximum parent devices reached")]
    MaxParentDevicesReached = 6,
    #[error("Parent device not found")]
    ParentDeviceNotFound = 8,
    #[error("Invalid serviceability program ID")]
    InvalidServiceabilityProgramId = 11,
    #[error("Invalid account code")]
    InvalidAccountCode = 12,
    #[error("Parent device already exists")]
    ParentDeviceAlreadyExists = 13,
    #[error("Reference count is not zero")]
    ReferenceCountNotZero = 15,
    #[error("Unauthorized: payer is not the upgrade authority")]
    UnauthorizedInitializer = 17,
    #[error("min_compatible_version cannot exceed version")]
    InvalidMinCompatibleVersion = 18,
}

impl From<GeolocationError> for ProgramError {
    fn from(e: GeolocationError) -> Self {
        ProgramError::Custom(e as u32)
    }
}

pub trait Validate {
    fn validate(&self) -> Result<(), GeolocationError>;
}
