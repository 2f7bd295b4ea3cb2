pub mod create_ingredient;
pub mod delete_ingredient;
pub mod get_ingredient;
pub mod import_receipt;
pub mod import_receipt_image;
pub mod list_ingredients;
pub mod update_ingredient;
