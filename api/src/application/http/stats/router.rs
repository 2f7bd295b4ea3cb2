use super::handlers::get_summary::{__path_get_summary, get_summary};
use crate::application::http::server::app_state::AppState;
use axum::{Router, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_summary))]
pub struct StatsApiDoc;

pub fn stats_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/stats/summary", state.args.server.root_path),
        get(get_summary),
    )
}
