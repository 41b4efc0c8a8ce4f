#[derive(Debug, thiserror::Error)]
pub enum WalletError {
    #[error("nwc error: {0}")]
    Nwc(#[from] nwc::error::Error),

    #[error("wallet request timed out after {0}s")]
    Timeout(u64),
}
