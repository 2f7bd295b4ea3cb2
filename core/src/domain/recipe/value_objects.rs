use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct SuggestRecipesInput {
    pub user_id: Uuid,
    pub limit: Option<u32>,
    pub dietary: Vec<String>,
}

#[derive(Debug, Clone, Default)]
pub struct CookbookInput {
    pub query: Option<String>,
    pub limit: Option<u32>,
}
