#![allow(clippy::doc_markdown)] // Allow technical terms like PostgreSQL, SQLx in docs
#![allow(clippy::missing_errors_doc)] // Allow public functions without # Errors sections
#![allow(clippy::must_use_candidate)] // Allow methods without must_use when context is clear

//! # Survey Core Rust
//!
//! Survey lifecycle management with ownership-scoped persistence.
//!
//! ## Overview
//!
//! Surveys belong to exactly one user. Only the owner can see, edit, delete,
//! run or pause a survey; for everyone else it does not exist. A survey moves
//! through `draft` -> `ready` (running) -> `paused`, and each lifecycle
//! operation reports either success or a specific failure kind that a web
//! layer can turn into a message and a redirect.
//!
//! ## Module Organization
//!
//! - [`models`] - Survey records and payloads
//! - [`validation`] - Payload validation with field-level errors
//! - [`state_machine`] - Survey statuses and the pure transition function
//! - [`store`] - Ownership-scoped persistence (in-memory and PostgreSQL)
//! - [`lifecycle`] - Create/edit/update/delete/run/pause orchestration
//! - [`presentation`] - Flash notices and redirect targets for outcomes
//! - [`config`] - Layered configuration
//! - [`logging`] - Structured logging setup
//! - [`error`] - Structured error handling
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use survey_core::lifecycle::SurveyLifecycle;
//! use survey_core::models::SurveyPayload;
//! use survey_core::store::InMemorySurveyStore;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let lifecycle = SurveyLifecycle::new(InMemorySurveyStore::new());
//!
//! let survey = lifecycle
//!     .create(42, &SurveyPayload::new("Customer feedback", None))
//!     .await?;
//! let status = lifecycle.run(&survey.uuid.to_string(), 42).await?;
//! println!("survey {} is now {status}", survey.uuid);
//! # Ok(())
//! # }
//! ```
//!
//! ## Testing
//!
//! ```bash
//! cargo test --lib    # Unit tests
//! cargo test          # All tests; PostgreSQL tests are ignored by default
//! ```

pub mod config;
pub mod constants;
pub mod error;
pub mod lifecycle;
pub mod logging;
pub mod models;
pub mod presentation;
pub mod state_machine;
pub mod store;
pub mod validation;

pub use config::{ConfigurationError, DatabaseConfig, LifecycleConfig, SurveyConfig};
pub use error::{LifecycleOutcome, Result, SurveyError};
pub use lifecycle::SurveyLifecycle;
pub use models::{NewSurvey, Survey, SurveyPayload};
pub use state_machine::{SurveyEvent, SurveyStatus, TransitionError};
pub use store::{InMemorySurveyStore, StoreError, SurveyStore};
#[cfg(feature = "postgres")]
pub use store::PgSurveyStore;
