use crate::application::http::{
    health::router::HealthApiDoc, inventory::router::InventoryApiDoc,
    notification::router::NotificationApiDoc, recipe::router::RecipeApiDoc,
    stats::router::StatsApiDoc,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Larder API"
    ),
    nest(
        (path = "/inventory", api = InventoryApiDoc),
        (path = "/stats", api = StatsApiDoc),
        (path = "/recipes", api = RecipeApiDoc),
        (path = "/notifications", api = NotificationApiDoc),
        (path = "/health", api = HealthApiDoc),
    )
)]
pub struct ApiDoc;
