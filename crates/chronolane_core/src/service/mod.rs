//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate normalization, allocation and model assembly.
//! - Keep presentation collaborators decoupled from pipeline details.

pub mod timeline_service;
