//! Core library for crewkit.
//!
//! This crate provides the estimation and validation logic used by the
//! `crewkit` CLI and any downstream consumers.
//!
//! # Modules
//!
//! - [`estimate`] - Token, cost, and time projections for team workflows
//! - [`validate`] - Context-file checklist validation
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```
//! use crewkit_core::estimate::{self, EstimateConfig};
//!
//! let report = estimate::estimate(&EstimateConfig::default());
//! assert_eq!(report.team_size, 3);
//! assert_eq!(report.phases.len(), 4);
//! ```
#![deny(unsafe_code)]

pub mod error;

pub mod estimate;

pub mod validate;

pub use error::{ValidateError, ValidateResult};

pub use estimate::{EstimateConfig, EstimateReport, Phase, ProjectSize};

pub use validate::ValidationReport;
