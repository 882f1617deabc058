#![deny(missing_docs)]

//! # Route Normalization
//!
//! Folds the non-standard `search` verb of a Path Item into `post`.

use crate::oas::models::{HttpMethod, SEARCH};
use serde_json::{Map, Value};

/// What happened to a route's `search` slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchAction {
    /// `search` moved to `post`, keeping its position among the route's fields.
    Renamed,
    /// `search` removed because `post` already exists.
    Dropped,
}

/// Reconciles a route's `search` operation with its `post` operation.
///
/// Returns `None` when the route has no `search` slot.
pub fn normalize_search_operation(route: &mut Map<String, Value>) -> Option<SearchAction> {
    if !route.contains_key(SEARCH) {
        return None;
    }

    let post = HttpMethod::Post.as_str();
    if route.contains_key(post) {
        route.shift_remove(SEARCH);
        return Some(SearchAction::Dropped);
    }

    *route = std::mem::take(route)
        .into_iter()
        .map(|(key, value)| {
            if key == SEARCH {
                (post.to_string(), value)
            } else {
                (key, value)
            }
        })
        .collect();
    Some(SearchAction::Renamed)
}
