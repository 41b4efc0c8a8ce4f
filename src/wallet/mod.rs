use crate::model::{CreateInvoiceRequest, CreateInvoiceResult};
use async_trait::async_trait;

pub mod error;
pub mod nwc;

#[cfg(test)]
use mockall::automock;

use self::error::WalletError;

/// A wallet service that can mint BOLT11 invoices on our behalf.
///
/// Exactly one outbound round trip per call, no retries. Failures are
/// surfaced to the caller as a single [`WalletError`]; the HTTP layer does
/// not distinguish between its variants.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait Wallet: Send + Sync {
    async fn create_invoice(
        &self,
        request: CreateInvoiceRequest,
    ) -> Result<CreateInvoiceResult, WalletError>;
}
