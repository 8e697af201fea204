use crate::{error::AppError, AppState};
use axum::{
    extract::{Path, Query, State},
    Json,
};
use core_types::{Fund, FundId, Transaction};
use ledger::{CancelOutcome, HistoryOrder, SubscribeOutcome, WalletSnapshot};
use serde::Deserialize;

/// Request body for the subscribe/unsubscribe endpoints.
#[derive(Debug, Deserialize)]
pub struct FundActionRequest {
    pub fund_id: FundId,
}

#[derive(Debug, Deserialize)]
pub struct HistoryParams {
    /// `newest` (default) or `oldest`.
    #[serde(default)]
    pub order: HistoryOrder,
}

/// # GET /api/funds
pub async fn get_funds(State(state): State<AppState>) -> Json<Vec<Fund>> {
    Json(state.ledger.list_funds())
}

/// # GET /api/funds/:fund_id
pub async fn get_fund(
    Path(fund_id): Path<FundId>,
    State(state): State<AppState>,
) -> Result<Json<Fund>, AppError> {
    let fund = state
        .ledger
        .find_fund(fund_id)
        .ok_or_else(|| AppError::NotFound(format!("fund {} does not exist", fund_id)))?;
    Ok(Json(fund))
}

/// # GET /api/wallet
/// The balance and active subscriptions at a single consistent point.
pub async fn get_wallet(State(state): State<AppState>) -> Json<WalletSnapshot> {
    Json(state.ledger.snapshot().await)
}

/// # POST /api/funds/subscribe
pub async fn subscribe(
    State(state): State<AppState>,
    Json(request): Json<FundActionRequest>,
) -> Result<Json<SubscribeOutcome>, AppError> {
    let outcome = state.ledger.subscribe(request.fund_id).await?;
    Ok(Json(outcome))
}

/// # POST /api/funds/unsubscribe
pub async fn unsubscribe(
    State(state): State<AppState>,
    Json(request): Json<FundActionRequest>,
) -> Result<Json<CancelOutcome>, AppError> {
    let outcome = state.ledger.unsubscribe(request.fund_id).await?;
    Ok(Json(outcome))
}

/// # GET /api/transactions?order=newest|oldest
pub async fn get_transactions(
    State(state): State<AppState>,
    Query(params): Query<HistoryParams>,
) -> Json<Vec<Transaction>> {
    Json(state.ledger.history(params.order).await)
}
