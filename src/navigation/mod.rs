//! Navigation input model: the read-only context a view receives on activation.
//!
//! # Architecture Note
//! Rather than letting the view reach into an implicitly-scoped global location,
//! the router hands every activation an explicit [`NavigationContext`]. The view
//! (and the resolver) only ever *read* it; the router is the sole writer. This
//! keeps the resolver a pure function and makes the view testable with nothing
//! but a hand-built context.

use serde::{Deserialize, Serialize};

/// Structured state attached to a navigation entry by the initiating call.
///
/// Only `order_id` is recognized by this crate; callers may attach anything
/// else, and those fields are carried along untouched in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EntryState {
    /// Identifier of the order that was just placed, if the initiating
    /// navigation call attached one.
    #[serde(rename = "orderId", default, skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,

    /// Any additional fields the initiating call attached. Arbitrary shape.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl EntryState {
    /// Creates an entry state carrying just an order identifier.
    pub fn with_order_id(order_id: impl Into<String>) -> Self {
        Self {
            order_id: Some(order_id.into()),
            extra: serde_json::Map::new(),
        }
    }
}

/// The read-only input the router attaches to the current navigation entry.
///
/// Both fields are optional: a view activated without entry state and with an
/// empty location query receives `None` for both, and that is a normal,
/// fully-supported input.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NavigationContext {
    /// Structured state from the initiating navigation call, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<EntryState>,

    /// Raw query portion of the current location (`"?key=value"` when
    /// present, typically empty or absent otherwise).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

impl NavigationContext {
    /// Context with neither entry state nor a query string.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Context carrying only entry state.
    pub fn with_state(state: EntryState) -> Self {
        Self {
            state: Some(state),
            search: None,
        }
    }

    /// Context carrying only a raw query string.
    pub fn with_search(search: impl Into<String>) -> Self {
        Self {
            state: None,
            search: Some(search.into()),
        }
    }
}
