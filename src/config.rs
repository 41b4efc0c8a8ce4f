use std::net::SocketAddr;

use clap::Parser;

use crate::wallet::nwc::NwcWalletSettings;

#[derive(Parser, Debug)]
pub struct Opts {
    #[clap(flatten)]
    pub wallet: NwcWalletSettings,

    #[clap(flatten)]
    pub server: ServerConfig,

    #[clap(flatten)]
    pub donation: DonationConfig,
}

#[derive(Debug, Clone, Parser)]
pub struct ServerConfig {
    #[clap(long, default_value = "[::]:8000", env = "DONATE_HOST_PORT")]
    pub host_port: SocketAddr,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host_port: "[::]:8000".parse().expect("invalid host port"),
        }
    }
}

#[derive(Debug, Clone, Parser)]
pub struct DonationConfig {
    /// amount in sats used when the request carries no `amount` parameter
    #[clap(long, default_value_t = 1000, env = "DONATE_DEFAULT_AMOUNT")]
    pub default_amount_sat: u64,

    #[clap(long, default_value = "Donation via NWC", env = "DONATE_DESCRIPTION")]
    pub description: String,

    #[clap(long, default_value_t = 900, env = "DONATE_INVOICE_EXPIRY_SECS")]
    pub expiry_secs: u64,
}

impl Default for DonationConfig {
    fn default() -> Self {
        Self {
            default_amount_sat: 1000,
            description: "Donation via NWC".to_owned(),
            expiry_secs: 900,
        }
    }
}
