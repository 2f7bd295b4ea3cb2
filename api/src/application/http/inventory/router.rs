use super::handlers::{
    create_ingredient::{__path_create_ingredient, create_ingredient},
    delete_ingredient::{__path_delete_ingredient, delete_ingredient},
    get_ingredient::{__path_get_ingredient, get_ingredient},
    import_receipt::{__path_import_receipt, import_receipt},
    import_receipt_image::{__path_import_receipt_image, import_receipt_image},
    list_ingredients::{__path_list_ingredients, list_ingredients},
    update_ingredient::{__path_update_ingredient, update_ingredient},
};
use crate::application::http::server::app_state::AppState;
use axum::{
    Router,
    routing::{delete, get, post, put},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(
    list_ingredients,
    create_ingredient,
    get_ingredient,
    update_ingredient,
    delete_ingredient,
    import_receipt,
    import_receipt_image
))]
pub struct InventoryApiDoc;

pub fn inventory_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/inventory", state.args.server.root_path),
            get(list_ingredients),
        )
        .route(
            &format!("{}/inventory", state.args.server.root_path),
            post(create_ingredient),
        )
        .route(
            &format!("{}/inventory/import", state.args.server.root_path),
            post(import_receipt),
        )
        .route(
            &format!("{}/inventory/import/image", state.args.server.root_path),
            post(import_receipt_image),
        )
        .route(
            &format!("{}/inventory/{{ingredient_id}}", state.args.server.root_path),
            get(get_ingredient),
        )
        .route(
            &format!("{}/inventory/{{ingredient_id}}", state.args.server.root_path),
            put(update_ingredient),
        )
        .route(
            &format!("{}/inventory/{{ingredient_id}}", state.args.server.root_path),
            delete(delete_ingredient),
        )
}
