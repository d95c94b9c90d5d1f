//! API module
//!
//! Contains the HTTP request handlers

pub mod resources;
pub mod system;

/// OpenAPI tag for the system endpoints
pub const SYSTEM_TAG: &str = "System";

/// OpenAPI tag for the resource endpoints
pub const RESOURCES_TAG: &str = "Resources";
