#![deny(missing_docs)]

//! # OpenAPI Normalization
//!
//! Document-level pass: for every route, fold `search` into `post`, then merge
//! the route-scoped parameters into each standard operation and collapse
//! duplicates. The input document is never mutated.

use crate::oas::models::{HttpMethod, PARAMETERS, PATHS, SEARCH};
use crate::oas::params::deduplicate;
use crate::oas::routes::{normalize_search_operation, SearchAction};
use crate::report::{ReportEvent, Reporter};
use serde_json::{Map, Value};

/// Returns a normalized deep copy of `doc`.
///
/// Routes are processed in declaration order. Route-scoped parameter lists are
/// left in place; each standard operation receives the deduplicated merge of
/// route and operation parameters, and loses its `parameters` field entirely
/// when that merge is empty. A document without `paths` is returned unchanged.
pub fn process_document(doc: &Value, reporter: &mut dyn Reporter) -> Value {
    let mut out = doc.clone();

    if let Some(paths) = out.get_mut(PATHS).and_then(Value::as_object_mut) {
        for (route_path, item) in paths.iter_mut() {
            let Some(route) = item.as_object_mut() else {
                continue;
            };
            normalize_route(route_path, route, reporter);
        }
    }

    out
}

fn normalize_route(route_path: &str, route: &mut Map<String, Value>, reporter: &mut dyn Reporter) {
    match normalize_search_operation(route) {
        Some(SearchAction::Renamed) => reporter.report(ReportEvent::SearchRenamed {
            route: route_path.to_string(),
        }),
        Some(SearchAction::Dropped) => reporter.report(ReportEvent::SearchDropped {
            route: route_path.to_string(),
        }),
        None => {}
    }

    let shared = parameter_list(route.get(PARAMETERS));

    for method in HttpMethod::ALL {
        let Some(operation) = route
            .get_mut(method.as_str())
            .and_then(Value::as_object_mut)
        else {
            continue;
        };

        let mut merged = shared.clone();
        merged.extend(parameter_list(operation.get(PARAMETERS)));
        let deduped = deduplicate(merged);

        tracing::trace!(
            route = route_path,
            method = %method,
            count = deduped.len(),
            "merged parameters"
        );

        if deduped.is_empty() {
            operation.shift_remove(PARAMETERS);
        } else {
            operation.insert(PARAMETERS.to_string(), Value::Array(deduped));
        }
    }
}

fn parameter_list(value: Option<&Value>) -> Vec<Value> {
    value
        .and_then(Value::as_array)
        .cloned()
        .unwrap_or_default()
}

/// Counts the operation-level parameter entries of a document.
///
/// Every standard verb and any leftover `search` slot is counted; route-scoped
/// lists are not.
pub fn count_operation_parameters(doc: &Value) -> usize {
    let Some(paths) = doc.get(PATHS).and_then(Value::as_object) else {
        return 0;
    };

    paths
        .values()
        .filter_map(Value::as_object)
        .flat_map(|route| {
            HttpMethod::ALL
                .into_iter()
                .map(HttpMethod::as_str)
                .chain(std::iter::once(SEARCH))
                .filter_map(move |verb| route.get(verb))
        })
        .map(|operation| {
            operation
                .get(PARAMETERS)
                .and_then(Value::as_array)
                .map_or(0, Vec::len)
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_document_without_paths_is_unchanged() {
        let doc = json!({ "openapi": "3.1.0", "info": { "title": "T", "version": "1" } });
        let mut events: Vec<ReportEvent> = Vec::new();
        assert_eq!(process_document(&doc, &mut events), doc);
        assert!(events.is_empty());
    }

    #[test]
    fn test_route_parameters_are_merged_into_operations() {
        let doc = json!({
            "paths": {
                "/items/{id}": {
                    "parameters": [ { "in": "path", "name": "id", "required": true } ],
                    "get": { "responses": {} },
                    "delete": {
                        "parameters": [ { "in": "header", "name": "If-Match" } ]
                    }
                }
            }
        });

        let out = process_document(&doc, &mut Vec::<ReportEvent>::new());
        let route = &out["paths"]["/items/{id}"];

        assert_eq!(
            route["get"]["parameters"],
            json!([ { "in": "path", "name": "id", "required": true } ])
        );
        assert_eq!(
            route["delete"]["parameters"],
            json!([
                { "in": "path", "name": "id", "required": true },
                { "in": "header", "name": "If-Match" }
            ])
        );
        assert_eq!(route["parameters"], doc["paths"]["/items/{id}"]["parameters"]);
    }

    #[test]
    fn test_empty_parameter_list_is_removed() {
        let doc = json!({
            "paths": { "/health": { "get": { "parameters": [], "responses": {} } } }
        });
        let out = process_document(&doc, &mut Vec::<ReportEvent>::new());
        assert!(out["paths"]["/health"]["get"].get("parameters").is_none());
    }

    #[test]
    fn test_non_object_entries_are_skipped() {
        let doc = json!({
            "paths": {
                "/odd": "not a path item",
                "/also": { "get": null, "x-extension": [1, 2] }
            }
        });
        let out = process_document(&doc, &mut Vec::<ReportEvent>::new());
        assert_eq!(out, doc);
    }

    #[test]
    fn test_search_rename_is_reported() {
        let doc = json!({
            "paths": {
                "/a": { "search": {} },
                "/b": { "post": {}, "search": {} }
            }
        });
        let mut events: Vec<ReportEvent> = Vec::new();
        process_document(&doc, &mut events);
        assert_eq!(
            events,
            vec![
                ReportEvent::SearchRenamed { route: "/a".into() },
                ReportEvent::SearchDropped { route: "/b".into() },
            ]
        );
    }

    #[test]
    fn test_renamed_search_gets_route_parameters() {
        let doc = json!({
            "paths": {
                "/find": {
                    "parameters": [ { "in": "query", "name": "q" } ],
                    "search": {
                        "parameters": [ { "in": "query", "name": "q", "description": "Term" } ]
                    }
                }
            }
        });
        let out = process_document(&doc, &mut Vec::<ReportEvent>::new());
        assert_eq!(
            out["paths"]["/find"]["post"]["parameters"],
            json!([ { "in": "query", "name": "q", "description": "Term" } ])
        );
    }

    #[test]
    fn test_count_operation_parameters() {
        let doc = json!({
            "paths": {
                "/a": {
                    "parameters": [ { "in": "query", "name": "skip-me" } ],
                    "get": { "parameters": [ {}, {} ] },
                    "search": { "parameters": [ {} ] },
                    "x-meta": { "parameters": [ {} ] }
                },
                "/b": { "put": {} }
            }
        });
        assert_eq!(count_operation_parameters(&doc), 3);
        assert_eq!(count_operation_parameters(&json!({})), 0);
    }
}
