use serde::{Deserialize, Serialize};

/// Query parameters of the donation page. The amount is kept as raw text so
/// that unparseable values can be rejected with a proper error message
/// instead of a framework-generated rejection.
#[derive(Debug, Deserialize)]
pub struct DonateQuery {
    pub amount: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateInvoiceRequest {
    /// invoice amount in millisatoshis
    pub amount_msat: u64,
    pub description: String,
    /// invoice expiry in seconds
    pub expiry_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateInvoiceResult {
    /// BOLT11 payment request, treated as opaque text
    pub payment_request: String,
}
