use axum::extract::State;

use crate::application::{
    auth::UserContext,
    http::{
        inventory::validators::ImportReceiptRequest,
        server::{
            api_entities::{
                api_error::{ApiError, ValidateJson},
                response::Response,
            },
            app_state::AppState,
        },
    },
};
use larder_core::domain::inventory::{
    entities::Ingredient,
    ports::InventoryService,
    value_objects::{ImportReceiptInput, ReceiptInputType},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ImportReceiptResponse {
    pub imported: Vec<Ingredient>,
    pub count: usize,
}

#[utoipa::path(
    post,
    path = "/import",
    tag = "inventory",
    summary = "Import ingredients from receipt text",
    description = "Runs the AI receipt parser over raw receipt text; valid records become owned ingredients with derived expiry dates",
    request_body = ImportReceiptRequest,
    responses(
        (status = 201, body = ImportReceiptResponse),
        (status = 502, description = "Receipt parser unavailable or unparsable")
    )
)]
pub async fn import_receipt(
    State(state): State<AppState>,
    user: UserContext,
    ValidateJson(payload): ValidateJson<ImportReceiptRequest>,
) -> Result<Response<ImportReceiptResponse>, ApiError> {
    let imported = state
        .service
        .import_receipt(ImportReceiptInput {
            user_id: user.user_id,
            input_type: ReceiptInputType::Text,
            receipt_text: Some(payload.receipt_text),
            image_data: None,
        })
        .await
        .map_err(ApiError::from)?;

    let count = imported.len();
    Ok(Response::Created(ImportReceiptResponse { imported, count }))
}
