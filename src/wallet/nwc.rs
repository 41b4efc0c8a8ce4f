use std::fmt::{self, Formatter};
use std::str::FromStr;
use std::time::Duration;

use async_trait::async_trait;
use clap::Parser;
use nostr::nips::nip47::{self, MakeInvoiceRequest, NostrWalletConnectURI};
use nwc::NWC;

use crate::model::{CreateInvoiceRequest, CreateInvoiceResult};

use super::error::WalletError;
use super::Wallet;

/// A parsed `nostr+walletconnect://` connection URI.
///
/// The URI carries the wallet-service secret, so `Debug` and `Display` are
/// redacted. It must never show up in logs or responses.
#[derive(Clone)]
pub struct WalletConnectUri(NostrWalletConnectURI);

impl WalletConnectUri {
    pub fn uri(&self) -> &NostrWalletConnectURI {
        &self.0
    }
}

impl FromStr for WalletConnectUri {
    type Err = nip47::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(NostrWalletConnectURI::parse(s)?))
    }
}

impl fmt::Debug for WalletConnectUri {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "nostr+walletconnect://<redacted>")
    }
}

impl fmt::Display for WalletConnectUri {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "nostr+walletconnect://<redacted>")
    }
}

#[derive(Debug, Clone, Parser)]
pub struct NwcWalletSettings {
    #[clap(long, env = "NWC_URI")]
    pub nwc_uri: WalletConnectUri,

    #[clap(long, default_value_t = 30, env = "DONATE_WALLET_TIMEOUT_SECS")]
    pub wallet_timeout_secs: u64,
}

impl fmt::Display for NwcWalletSettings {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "nwc_uri: {}, wallet_timeout_secs: {}",
            self.nwc_uri, self.wallet_timeout_secs
        )
    }
}

/// Wallet backend speaking Nostr Wallet Connect (NIP-47).
pub struct NwcWallet {
    nwc: NWC,
    timeout: Duration,
}

impl NwcWallet {
    pub fn new(settings: &NwcWalletSettings) -> Self {
        Self {
            nwc: NWC::new(settings.nwc_uri.uri().clone()),
            timeout: Duration::from_secs(settings.wallet_timeout_secs),
        }
    }
}

#[async_trait]
impl Wallet for NwcWallet {
    async fn create_invoice(
        &self,
        request: CreateInvoiceRequest,
    ) -> Result<CreateInvoiceResult, WalletError> {
        let params = MakeInvoiceRequest {
            amount: request.amount_msat,
            description: Some(request.description),
            description_hash: None,
            expiry: Some(request.expiry_secs),
        };

        let response = tokio::time::timeout(self.timeout, self.nwc.make_invoice(params))
            .await
            .map_err(|_| WalletError::Timeout(self.timeout.as_secs()))??;

        Ok(CreateInvoiceResult {
            payment_request: response.invoice,
        })
    }
}
