//! Order identifier resolution.
//!
//! The resolver is a pure function from [`NavigationContext`] to
//! [`ResolvedOrderId`]. It never errors: every input combination, including a
//! missing state, a missing query string, or a malformed query string,
//! degrades to [`ResolvedOrderId::Absent`], which is a normal terminal
//! outcome rather than a failure.

use crate::navigation::NavigationContext;

/// The display-ready order identifier derived from navigation inputs.
///
/// # Architecture Note
/// This is a deliberate sum type instead of a bare `Option<String>` so the
/// "no id" path is a first-class branch the view (and tests) match on, not a
/// truthiness check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedOrderId {
    /// An identifier was found. May be empty when the query fallback matched
    /// an empty segment; the view treats empty as nothing to display.
    Present(String),
    /// Neither navigation input yielded an identifier.
    Absent,
}

impl ResolvedOrderId {
    /// Returns the identifier when present and non-empty.
    ///
    /// This is the view's display contract: a resolved-but-empty identifier
    /// is not worth an "Order ID" line.
    pub fn display_id(&self) -> Option<&str> {
        match self {
            ResolvedOrderId::Present(id) if !id.is_empty() => Some(id),
            _ => None,
        }
    }

    pub fn is_present(&self) -> bool {
        matches!(self, ResolvedOrderId::Present(_))
    }
}

/// Derives the order identifier from the current navigation context.
///
/// Resolution order:
/// 1. `state.order_id`, when present and non-empty, is authoritative and the
///    query string is never consulted.
/// 2. Otherwise a non-empty `search` is split on `'='` and segment index 1 is
///    taken as the identifier. Fewer than two segments means no identifier.
/// 3. Otherwise the result is [`ResolvedOrderId::Absent`].
///
/// The fallback is positional, not keyed: `"?order=ABC"` and `"?id=ABC"` both
/// yield `"ABC"`, and a multi-parameter string like `"?a=1&b=2"` yields
/// `"1&b"` (everything between the first and second `'='`). That fragility is
/// the intended contract for this rule and is asserted by tests; do not
/// silently replace it with keyed query parsing.
pub fn resolve_order_id(ctx: &NavigationContext) -> ResolvedOrderId {
    if let Some(state) = &ctx.state {
        if let Some(id) = &state.order_id {
            if !id.is_empty() {
                return ResolvedOrderId::Present(id.clone());
            }
        }
    }

    if let Some(search) = &ctx.search {
        if !search.is_empty() {
            let mut segments = search.split('=');
            segments.next();
            if let Some(second) = segments.next() {
                return ResolvedOrderId::Present(second.to_string());
            }
        }
    }

    ResolvedOrderId::Absent
}
