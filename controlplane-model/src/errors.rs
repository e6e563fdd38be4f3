use solana_sdk::pubkey::Pubkey;
use thiserror::Error as ThisError;

/// A dropped device-latency sample bucket, identified the same way it's keyed
/// in the submitter's in-memory buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BucketKey {
    pub origin: Pubkey,
    pub target: Pubkey,
    pub link: Pubkey,
    pub epoch: u64,
}

#[derive(ThisError, Debug)]
pub enum Error {
    #[error("device {0} not found")]
    NotFound(Pubkey),

    #[error("device {0} has pathologies: {1:?}")]
    FailedPrecondition(Pubkey, Vec<crate::model::Pathology>),

    #[error("failed to render config for device {0}: {1}")]
    Aborted(Pubkey, String),

    #[error("internal error: {0}")]
    Internal(String),

    #[error("ledger request failed: {0}")]
    LedgerTransient(String),

    #[error("submission failed, will retry: {0}")]
    SubmitTransient(String),

    #[error("submission failed permanently for bucket {0:?}: {1}")]
    SubmitFatalForBatch(BucketKey, String),
}

pub type Result<T> = std::result::Result<T, Error>;
