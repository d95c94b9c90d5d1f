//! Service layer
//!
//! Filesystem logic kept apart from the HTTP handlers so it can be tested
//! without a router.

pub mod resources;

pub use resources::ResourceDirectory;
