//! Common utilities shared across all services.
//!
//! This crate provides:
//! - Unified application error handling and its HTTP mapping
//! - Configuration structures

pub mod config;
pub mod error;

pub use config::*;
pub use error::{AppError, AppResult, OptionExt};
