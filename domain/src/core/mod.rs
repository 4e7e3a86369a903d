//! Core domain concepts shared across all subdomains.
//!
//! - [`model::Model`]: hosted language models (Gemini family or custom)
//! - [`field::Field`]: the professional field a run targets
//! - [`error::DomainError`]: domain-level errors

pub mod error;
pub mod field;
pub mod model;
pub mod string;
