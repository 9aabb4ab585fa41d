#![doc(html_logo_url = "https://www.rust-lang.org/logos/rust-logo-128x128.png")]
#![doc(html_favicon_url = "https://www.rust-lang.org/favicon.ico")]
//! # COD Confirmation
//!
//! > **The Cash-on-Delivery order confirmation view, as a testable Rust component.**
//!
//! This crate models the screen a shopper sees immediately after placing a
//! COD order: acknowledge success, show the order identifier when one is
//! available, give delivery-readiness guidance, and offer two navigation
//! actions (view orders, continue shopping).
//!
//! ## 🏗️ Design Philosophy
//!
//! The interesting behavior is tiny and entirely about *inputs* and
//! *outbound commands*, so the crate is built to make both explicit:
//!
//! - **Explicit context, no ambient globals**: the router hands the view a
//!   read-only [`NavigationContext`](navigation::NavigationContext) on
//!   activation. The view never reaches into a global location.
//! - **A sum type for "maybe an id"**: the resolver returns
//!   [`ResolvedOrderId`](resolver::ResolvedOrderId)
//!   (`Present | Absent`), so the "no id" render path is a first-class,
//!   testable branch rather than a truthiness check.
//! - **Fire-and-forget navigation**: the view holds an injected
//!   [`RouterClient`](router::RouterClient) with a single non-blocking
//!   `navigate_to`. It never awaits completion; what happens next is the
//!   router's concern. Tests substitute a recording client and assert the
//!   requested paths.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Input ([`navigation`])
//! The read-only [`NavigationContext`](navigation::NavigationContext):
//! optional entry state (with an optional order id and arbitrary extras)
//! plus the raw query string.
//!
//! ### 2. The Core Logic ([`resolver`])
//! A pure function from context to identifier. State id is authoritative;
//! otherwise the query string is split on `=` and segment index 1 is taken.
//! Absence is a normal outcome, never an error.
//!
//! ### 3. The View ([`view`])
//! [`ConfirmationView`](view::ConfirmationView) derives a
//! [`ConfirmationScreen`](view::ConfirmationScreen) render model per pass
//! (resolver invoked exactly once) and owns the two triggers.
//!
//! ### 4. The Collaborator ([`router`])
//! The router actor owns and mutates the current location; views only send
//! it requests. See [`router::mock`] for testing views without it.
//!
//! ### 5. The Wiring ([`lifecycle`])
//! [`ConfirmationApp`](lifecycle::ConfirmationApp) spawns the router, wires
//! the view, and shuts down by closing channels.
//!
//! ## 🚀 Quick Start
//!
//! ### Running Tests
//!
//! ```bash
//! # Run with info logs
//! RUST_LOG=info cargo test
//! ```

pub mod lifecycle;
pub mod navigation;
pub mod resolver;
pub mod router;
pub mod view;
