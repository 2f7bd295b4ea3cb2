pub mod get_preference;
pub mod run_expiry_scan;
pub mod update_preference;
