pub mod api_docs;
pub mod app;
pub mod auth_token;
pub mod bootstrap;
pub mod circles;
pub mod config;
pub mod entities;
pub mod extractor;
pub mod gamification;
pub mod middleware;
pub mod repositories;
pub mod routes;
pub mod static_service;
pub mod utils;
pub mod wellness;
