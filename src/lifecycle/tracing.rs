//! # Observability & Tracing
//!
//! This module provides the tracing infrastructure for the confirmation flow.
//!
//! ## Overview
//!
//! The [`setup_tracing`] function initializes structured logging with the
//! `tracing` crate. The format is compact and hides the crate/module prefix
//! (`with_target(false)`) to keep log lines short.
//!
//! - **Structured logging** with `tracing` crate
//! - **Configurable log levels** via `RUST_LOG` environment variable
//! - **Compact format** optimized for development
//!
//! ## What Gets Traced
//!
//! - **Router Lifecycle**: Startup, each transition, and shutdown
//! - **View Activity**: Render passes (with identifier presence) and
//!   trigger dispatch
//! - **Rejections**: Unknown routes, logged at warn with the offending path
//!
//! ## Usage Examples
//!
//! ```bash
//! # Compact logs (default)
//! RUST_LOG=info cargo test
//!
//! # Show trigger/render details
//! RUST_LOG=debug cargo test
//! ```
//!
//! ## Flow Trace Example
//!
//! **With `RUST_LOG=debug`**, a confirmation round trip looks like:
//!
//! ```text
//! INFO Router started routes=3
//! DEBUG Requesting navigation with state path=/order-confirmation has_state=true
//! DEBUG Navigate path=/order-confirmation
//! INFO Navigated path=/order-confirmation
//! DEBUG Rendering confirmation order_id_present=true
//! DEBUG View Orders pressed
//! DEBUG Requesting navigation path=/orders
//! INFO Navigated path=/orders
//! INFO Router shutdown
//! ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // Don't show module paths
        .compact()
        .init();
}
