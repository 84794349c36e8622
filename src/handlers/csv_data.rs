use axum::{extract::State, http::StatusCode, response::Json};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::store::{NewWalletRequest, NormalizedRecord, RawRow, StoreError};
use crate::AppState;

type ApiError = (StatusCode, Json<serde_json::Value>);

#[derive(Serialize)]
pub struct CsvDataResponse {
    pub data: Vec<RawRow>,
}

#[derive(Serialize)]
pub struct AddWalletResponse {
    pub success: bool,
    pub message: String,
    pub data: NormalizedRecord,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteWalletRequest {
    pub wallet_address: Option<String>,
}

#[derive(Serialize)]
pub struct DeleteWalletResponse {
    pub success: bool,
    pub message: String,
}

/// GET /api/csv-data - the raw parsed rows, in file order.
pub async fn get_csv_data(
    State(state): State<AppState>,
) -> Result<Json<CsvDataResponse>, ApiError> {
    match state.store.list().await {
        Ok(data) => Ok(Json(CsvDataResponse { data })),
        Err(e) => Err(read_error(e)),
    }
}

/// Parse-shape problems are the client's data being malformed (400);
/// anything else reading the file is a server-side failure (500).
pub(crate) fn read_error(e: StoreError) -> ApiError {
    match e {
        StoreError::Parse { details } => (
            StatusCode::BAD_REQUEST,
            Json(json!({"error": "CSV parsing error", "details": details})),
        ),
        other => {
            tracing::error!("Error reading CSV data: {:?}", other);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": "File not found or read error", "message": other.to_string()})),
            )
        }
    }
}

/// POST /api/csv-data - validate, dedupe on wallet address, append, rewrite.
pub async fn add_wallet(
    State(state): State<AppState>,
    Json(payload): Json<NewWalletRequest>,
) -> Result<Json<AddWalletResponse>, ApiError> {
    match state.store.append(payload).await {
        Ok(record) => Ok(Json(AddWalletResponse {
            success: true,
            message: "Wallet data added successfully".to_string(),
            data: record,
        })),
        Err(StoreError::Validation(msg)) => {
            Err((StatusCode::BAD_REQUEST, Json(json!({"error": msg}))))
        }
        Err(StoreError::Conflict(msg)) => Err((StatusCode::CONFLICT, Json(json!({"error": msg})))),
        Err(e) => {
            tracing::error!("Error adding wallet data: {:?}", e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": "Failed to add wallet data", "message": e.to_string()})),
            ))
        }
    }
}

/// DELETE /api/csv-data - remove by wallet address.
pub async fn delete_wallet(
    State(state): State<AppState>,
    Json(payload): Json<DeleteWalletRequest>,
) -> Result<Json<DeleteWalletResponse>, ApiError> {
    let address = payload.wallet_address.unwrap_or_default();
    match state.store.remove(&address).await {
        Ok(()) => Ok(Json(DeleteWalletResponse {
            success: true,
            message: "Wallet data deleted successfully".to_string(),
        })),
        Err(StoreError::Validation(msg)) => {
            Err((StatusCode::BAD_REQUEST, Json(json!({"error": msg}))))
        }
        Err(StoreError::NotFound(msg)) => Err((StatusCode::NOT_FOUND, Json(json!({"error": msg})))),
        Err(e) => {
            tracing::error!("Error deleting wallet data: {:?}", e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": "Failed to delete wallet data", "message": e.to_string()})),
            ))
        }
    }
}
