//! Backend services.
//!
//! # Services
//!
//! - [`generate`] - PDF upload and health check against the generation service

pub mod generate;

pub use generate::*;
