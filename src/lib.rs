pub mod aggregate;
pub mod api;
pub mod cli;
pub mod collector;
pub mod config;
pub mod errors;
pub mod models;
pub mod pipeline;
pub mod reporting;
pub mod upstream;
