use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Json,
};
use serde::Serialize;

use crate::handlers::csv_data::read_error;
use crate::models::{Category, SolanaPaySupport, WalletViewModel};
use crate::search::WalletFilter;
use crate::AppState;

type ApiError = (StatusCode, Json<serde_json::Value>);

#[derive(Serialize)]
pub struct WalletListResponse {
    pub wallets: Vec<WalletViewModel>,
    pub total: usize,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletStatsResponse {
    pub total: usize,
    pub browser: usize,
    pub mobile: usize,
    pub desktop: usize,
    pub hardware: usize,
    pub other: usize,
    pub solana_pay: usize,
}

async fn load_wallets(state: &AppState) -> Result<Vec<WalletViewModel>, ApiError> {
    let rows = state.store.list().await.map_err(read_error)?;
    Ok(rows.iter().filter_map(WalletViewModel::from_row).collect())
}

/// GET /api/wallets - mapped view models reduced by the active filters.
pub async fn list_wallets(
    State(state): State<AppState>,
    Query(filter): Query<WalletFilter>,
) -> Result<Json<WalletListResponse>, ApiError> {
    let wallets: Vec<WalletViewModel> = load_wallets(&state)
        .await?
        .into_iter()
        .filter(|wallet| filter.matches(wallet))
        .collect();
    let total = wallets.len();
    Ok(Json(WalletListResponse { wallets, total }))
}

/// GET /api/wallets/stats - the dashboard header counters.
pub async fn wallet_stats(
    State(state): State<AppState>,
) -> Result<Json<WalletStatsResponse>, ApiError> {
    let wallets = load_wallets(&state).await?;
    let count = |category: Category| {
        wallets
            .iter()
            .filter(|wallet| wallet.category == category)
            .count()
    };
    Ok(Json(WalletStatsResponse {
        total: wallets.len(),
        browser: count(Category::Browser),
        mobile: count(Category::Mobile),
        desktop: count(Category::Desktop),
        hardware: count(Category::Hardware),
        other: count(Category::Other),
        solana_pay: wallets
            .iter()
            .filter(|wallet| wallet.solana_pay_qr == SolanaPaySupport::Yes)
            .count(),
    }))
}
