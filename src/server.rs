use std::sync::Arc;

use axum::http::Method;
use axum::routing::get;
use axum::Router;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;
use tracing_subscriber::prelude::__tracing_subscriber_SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use crate::config::{DonationConfig, ServerConfig};
use crate::routes::get_donate;
use crate::wallet::Wallet;

/// Immutable per-process state, cloned into every request handler.
#[derive(Clone)]
pub struct AppState {
    pub wallet: Arc<dyn Wallet + Send + Sync>,
    pub config: DonationConfig,
}

impl AppState {
    pub fn new(wallet: Arc<dyn Wallet + Send + Sync>, config: DonationConfig) -> Self {
        Self { wallet, config }
    }
}

pub async fn run_server(state: AppState, server_config: ServerConfig) -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    info!("listening on: {}", server_config.host_port);
    info!("default amount: {} sat", state.config.default_amount_sat);
    info!("invoice description: {}", state.config.description);
    info!("invoice expiry: {}s", state.config.expiry_secs);

    let listener = tokio::net::TcpListener::bind(&server_config.host_port).await?;

    axum::serve(
        listener,
        app(state)
            .layer(
                CorsLayer::new()
                    .allow_origin(Any)
                    .allow_methods([Method::GET]),
            )
            .into_make_service(),
    )
    .await?;

    Ok(())
}

fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(get_donate))
        .route("/donate", get(get_donate))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use http_body_util::BodyExt;
    use pretty_assertions::assert_eq;
    use tower::ServiceExt;

    use crate::{
        config::DonationConfig,
        model::CreateInvoiceResult,
        server::{app, AppState},
        wallet::{error::WalletError, MockWallet},
    };

    fn create_app(wallet: MockWallet) -> axum::Router {
        app(AppState::new(Arc::new(wallet), DonationConfig::default()))
    }

    async fn body_text(response: axum::response::Response) -> anyhow::Result<String> {
        let bytes = response.into_body().collect().await?.to_bytes();
        Ok(String::from_utf8(bytes.to_vec())?)
    }

    #[tokio::test]
    async fn test_donate_with_amount() -> anyhow::Result<()> {
        let mut wallet = MockWallet::new();
        wallet
            .expect_create_invoice()
            .withf(|request| request.amount_msat == 500_000)
            .times(1)
            .returning(|_| {
                Ok(CreateInvoiceResult {
                    payment_request: "lnbc5u1pexample".to_owned(),
                })
            });

        let response = create_app(wallet)
            .oneshot(Request::builder().uri("/donate?amount=500").body(Body::empty())?)
            .await?;

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_text(response).await?;
        assert!(body.contains("lnbc5u1pexample"));
        assert!(body.contains("data:image/png;base64,"));
        Ok(())
    }

    #[tokio::test]
    async fn test_donate_without_amount_uses_default() -> anyhow::Result<()> {
        let mut wallet = MockWallet::new();
        wallet
            .expect_create_invoice()
            .withf(|request| {
                request.amount_msat == 1_000_000
                    && request.description == "Donation via NWC"
                    && request.expiry_secs == 900
            })
            .times(1)
            .returning(|_| {
                Ok(CreateInvoiceResult {
                    payment_request: "lnbc10u1pexample".to_owned(),
                })
            });

        let response = create_app(wallet)
            .oneshot(Request::builder().uri("/donate").body(Body::empty())?)
            .await?;

        assert_eq!(response.status(), StatusCode::OK);
        Ok(())
    }

    #[tokio::test]
    async fn test_root_route_serves_donation_page() -> anyhow::Result<()> {
        let mut wallet = MockWallet::new();
        wallet.expect_create_invoice().times(1).returning(|_| {
            Ok(CreateInvoiceResult {
                payment_request: "lnbc10u1pexample".to_owned(),
            })
        });

        let response = create_app(wallet)
            .oneshot(Request::builder().uri("/").body(Body::empty())?)
            .await?;

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_text(response).await?;
        assert!(body.contains("lnbc10u1pexample"));
        Ok(())
    }

    #[tokio::test]
    async fn test_donate_with_zero_amount() -> anyhow::Result<()> {
        let mut wallet = MockWallet::new();
        wallet.expect_create_invoice().times(0);

        let response = create_app(wallet)
            .oneshot(Request::builder().uri("/donate?amount=0").body(Body::empty())?)
            .await?;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_text(response).await?;
        assert!(body.contains("Invalid amount"));
        Ok(())
    }

    #[tokio::test]
    async fn test_donate_with_non_numeric_amount() -> anyhow::Result<()> {
        let mut wallet = MockWallet::new();
        wallet.expect_create_invoice().times(0);

        let response = create_app(wallet)
            .oneshot(
                Request::builder()
                    .uri("/donate?amount=abc")
                    .body(Body::empty())?,
            )
            .await?;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_text(response).await?;
        assert!(body.contains("Invalid amount"));
        Ok(())
    }

    #[tokio::test]
    async fn test_donate_with_negative_amount() -> anyhow::Result<()> {
        let mut wallet = MockWallet::new();
        wallet.expect_create_invoice().times(0);

        let response = create_app(wallet)
            .oneshot(
                Request::builder()
                    .uri("/donate?amount=-5")
                    .body(Body::empty())?,
            )
            .await?;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        Ok(())
    }

    #[tokio::test]
    async fn test_donate_wallet_failure() -> anyhow::Result<()> {
        let mut wallet = MockWallet::new();
        wallet
            .expect_create_invoice()
            .times(1)
            .returning(|_| Err(WalletError::Timeout(30)));

        let response = create_app(wallet)
            .oneshot(
                Request::builder()
                    .uri("/donate?amount=100")
                    .body(Body::empty())?,
            )
            .await?;

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        let body = body_text(response).await?;
        assert_eq!(body, "invoice creation failed");
        Ok(())
    }
}
