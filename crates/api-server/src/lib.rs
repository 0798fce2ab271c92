//! # Thoughts API Server
//!
//! HTTP surface, configuration, and database pooling for the thoughts
//! sharing platform. Business handlers are placeholders; the settings
//! record and the bounded connection pool are the load-bearing parts.

pub mod config;
pub mod database;
pub mod handlers;
pub mod routes;
pub mod state;
pub mod utils;
