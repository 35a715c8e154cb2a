pub mod api;
pub mod components;
pub mod models;
pub mod utils;
