pub mod get_summary;
