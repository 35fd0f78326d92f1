pub mod api;
pub mod betting;
pub mod config;
pub mod data;
pub mod error;
pub mod models;
