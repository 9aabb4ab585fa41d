//! Runtime orchestration and lifecycle management.
//!
//! This module contains the infrastructure for running the confirmation flow:
//!
//! - **Actor lifecycle management**: Starting and shutting down the router
//! - **Wiring**: Handing the router client to the view
//! - **Observability setup**: Initializing tracing and logging
//!
//! # Main Components
//!
//! - [`ConfirmationApp`] - The orchestrator that owns the router task and view
//! - [`setup_tracing`] - Initializes the tracing/logging infrastructure

pub mod confirmation_app;
pub mod tracing;

pub use confirmation_app::*;
pub use tracing::*;
