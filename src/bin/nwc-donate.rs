use std::sync::Arc;

use clap::Parser;
use nwcdonate::config::Opts;
use nwcdonate::server::{run_server, AppState};
use nwcdonate::wallet::nwc::NwcWallet;

#[tokio::main]
pub async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let opts = Opts::parse();
    let wallet = NwcWallet::new(&opts.wallet);

    let state = AppState::new(Arc::new(wallet), opts.donation);
    run_server(state, opts.server).await
}
