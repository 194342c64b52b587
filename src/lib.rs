pub mod config;
pub mod listings;
pub mod models;
pub mod sources;
