use super::handlers::{
    get_preference::{__path_get_preference, get_preference},
    run_expiry_scan::{__path_run_expiry_scan, run_expiry_scan},
    update_preference::{__path_update_preference, update_preference},
};
use crate::application::http::server::app_state::AppState;
use axum::{
    Router,
    routing::{get, post, put},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_preference, update_preference, run_expiry_scan))]
pub struct NotificationApiDoc;

pub fn notification_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/notifications/preference", state.args.server.root_path),
            get(get_preference),
        )
        .route(
            &format!("{}/notifications/preference", state.args.server.root_path),
            put(update_preference),
        )
        .route(
            &format!("{}/notifications/scan", state.args.server.root_path),
            post(run_expiry_scan),
        )
}
