pub mod app;
pub mod chat;
pub mod config;
pub mod defaults;
pub mod languages;
pub mod models;
