//! Vision+ Medical Imaging System server library
//!
//! This library exposes modules for testing and external use.
//! The main binary is in `src/main.rs`.

pub mod api;
pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod openapi;
pub mod router;
pub mod services;
pub mod state;

pub use router::create_router;
