pub mod preference_repository;
