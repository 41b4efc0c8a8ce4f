use askama::Template;
use axum::extract::{Query, State};
use axum::response::Html;
use base64::engine::general_purpose;
use base64::Engine as _;
use tracing::instrument;

use crate::error::DonateError;
use crate::model::{CreateInvoiceRequest, DonateQuery};
use crate::qr;
use crate::server::AppState;

#[derive(Template)]
#[template(path = "donate.html")]
struct DonatePage<'a> {
    sats: u64,
    description: &'a str,
    expiry_secs: u64,
    invoice: &'a str,
    qr_b64: String,
}

/// Serves the donation page: mints a fresh invoice over NWC for the
/// requested amount and renders it as text and a scannable QR code.
#[instrument(name = "get_donate", skip(state), err)]
pub async fn get_donate(
    State(state): State<AppState>,
    Query(query): Query<DonateQuery>,
) -> Result<Html<String>, DonateError> {
    let sats = match query.amount {
        Some(raw) => raw
            .parse::<u64>()
            .ok()
            .filter(|sats| *sats >= 1)
            .ok_or(DonateError::InvalidAmount)?,
        None => state.config.default_amount_sat,
    };
    let amount_msat = sats.checked_mul(1_000).ok_or(DonateError::InvalidAmount)?;

    let invoice = state
        .wallet
        .create_invoice(CreateInvoiceRequest {
            amount_msat,
            description: state.config.description.clone(),
            expiry_secs: state.config.expiry_secs,
        })
        .await?;

    let png = qr::encode_png(&invoice.payment_request)?;

    let page = DonatePage {
        sats,
        description: &state.config.description,
        expiry_secs: state.config.expiry_secs,
        invoice: &invoice.payment_request,
        qr_b64: general_purpose::STANDARD.encode(&png),
    };
    Ok(Html(page.render()?))
}
