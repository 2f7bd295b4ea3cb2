use axum::extract::State;
use base64::{Engine, engine::general_purpose};

use crate::application::{
    auth::UserContext,
    http::{
        inventory::validators::ImportReceiptImageRequest,
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
pub struct ImportReceiptImageResponse {
    pub imported: Vec<Ingredient>,
    pub count: usize,
}

#[utoipa::path(
    post,
    path = "/import/image",
    tag = "inventory",
    summary = "Import ingredients from a receipt photo",
    request_body = ImportReceiptImageRequest,
    responses(
        (status = 201, body = ImportReceiptImageResponse),
        (status = 502, description = "Receipt parser unavailable or unparsable")
    )
)]
pub async fn import_receipt_image(
    State(state): State<AppState>,
    user: UserContext,
    ValidateJson(payload): ValidateJson<ImportReceiptImageRequest>,
) -> Result<Response<ImportReceiptImageResponse>, ApiError> {
    let image_data = general_purpose::STANDARD
        .decode(payload.image_data.as_bytes())
        .map_err(|_| ApiError::BadRequest("image_data is not valid base64".to_string()))?;

    let imported = state
        .service
        .import_receipt(ImportReceiptInput {
            user_id: user.user_id,
            input_type: ReceiptInputType::Image,
            receipt_text: None,
            image_data: Some(image_data),
        })
        .await
        .map_err(ApiError::from)?;

    let count = imported.len();
    Ok(Response::Created(ImportReceiptImageResponse {
        imported,
        count,
    }))
}
