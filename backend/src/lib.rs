//! Health Metrics Backend Library
//!
//! Service layer around the shared metrics engine: data access, the
//! metrics service, configuration and the CLI surface.

pub mod cli;
pub mod config;
pub mod error;
pub mod repositories;
pub mod services;

pub use error::{ServiceError, ServiceResult};
