//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into use-case level APIs.
//! - Keep HTTP and CLI layers decoupled from storage details.

pub mod record_service;
pub mod vehicle_service;
