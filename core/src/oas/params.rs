#![deny(missing_docs)]

//! # Parameter Deduplication
//!
//! Collapses redundant parameter declarations into one canonical entry per
//! [`IdentityKey`]. When two declarations share a key, [`prefer`] picks the more
//! complete one; the survivor keeps the position of the first occurrence.

use crate::oas::models::IdentityKey;
use crate::oas::ref_utils::{component_name, is_reference, reference_token};
use indexmap::IndexMap;
use serde_json::Value;

/// Which side of a pairwise comparison is retained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preference {
    /// The parameter seen first.
    Existing,
    /// The parameter seen later.
    Candidate,
}

/// The rule of the preference ladder that decided a comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreferenceRule {
    /// A reference beats an inline declaration.
    Reference,
    /// More top-level fields in `schema` wins.
    SchemaFields,
    /// A non-empty `description` wins.
    Description,
    /// More top-level fields overall wins.
    TopLevelFields,
    /// Nothing distinguished them; the first-seen parameter stays.
    FirstSeen,
}

/// Outcome of [`prefer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decision {
    /// The retained side.
    pub winner: Preference,
    /// The rule that decided.
    pub rule: PreferenceRule,
}

impl Decision {
    fn by(rule: PreferenceRule, candidate_wins: bool) -> Self {
        let winner = if candidate_wins {
            Preference::Candidate
        } else {
            Preference::Existing
        };
        Decision { winner, rule }
    }
}

/// Computes the identity key of a parameter.
///
/// References key on their `$ref` token, inline declarations on `(in, name)`.
/// An inline declaration with neither `in` nor `name` also keys on its schema
/// fingerprint.
pub fn identity_key(param: &Value) -> IdentityKey {
    if let Some(token) = reference_token(param) {
        return IdentityKey::Reference(token.to_string());
    }

    let location = param.get("in").and_then(Value::as_str);
    let name = param.get("name").and_then(Value::as_str);
    match (location, name) {
        (None, None) => IdentityKey::Degenerate {
            location: String::new(),
            name: String::new(),
            fingerprint: schema_fingerprint(param.get("schema")),
        },
        (location, name) => IdentityKey::Inline {
            location: location.unwrap_or_default().to_string(),
            name: name.unwrap_or_default().to_string(),
        },
    }
}

/// Decides which of two same-identity parameters to keep.
///
/// Rules are tried in order and the first one that distinguishes the pair wins:
/// reference form, schema field count, non-empty description, overall field
/// count, then first-seen.
pub fn prefer(existing: &Value, candidate: &Value) -> Decision {
    let (existing_ref, candidate_ref) = (is_reference(existing), is_reference(candidate));
    if existing_ref != candidate_ref {
        return Decision::by(PreferenceRule::Reference, candidate_ref);
    }

    let (existing_schema, candidate_schema) =
        (schema_field_count(existing), schema_field_count(candidate));
    if existing_schema != candidate_schema {
        return Decision::by(
            PreferenceRule::SchemaFields,
            candidate_schema > existing_schema,
        );
    }

    let (existing_desc, candidate_desc) = (has_description(existing), has_description(candidate));
    if existing_desc != candidate_desc {
        return Decision::by(PreferenceRule::Description, candidate_desc);
    }

    let (existing_fields, candidate_fields) = (field_count(existing), field_count(candidate));
    if existing_fields != candidate_fields {
        return Decision::by(
            PreferenceRule::TopLevelFields,
            candidate_fields > existing_fields,
        );
    }

    Decision::by(PreferenceRule::FirstSeen, false)
}

/// Removes duplicate parameters, keeping one per identity in first-seen order.
///
/// Callers pass the route-scoped parameters followed by the operation-scoped
/// ones.
pub fn deduplicate(parameters: Vec<Value>) -> Vec<Value> {
    let mut positions: IndexMap<IdentityKey, usize> = IndexMap::new();
    let mut output: Vec<Value> = Vec::with_capacity(parameters.len());

    for candidate in parameters {
        let key = identity_key(&candidate);
        match positions.get(&key) {
            None => {
                positions.insert(key, output.len());
                output.push(candidate);
            }
            Some(&index) => {
                let decision = prefer(&output[index], &candidate);
                tracing::debug!(
                    key = %key,
                    component = ?component_of(&key),
                    rule = ?decision.rule,
                    winner = ?decision.winner,
                    "collapsed duplicate parameter"
                );
                if decision.winner == Preference::Candidate {
                    output[index] = candidate;
                }
            }
        }
    }

    output
}

fn component_of(key: &IdentityKey) -> Option<String> {
    match key {
        IdentityKey::Reference(token) => component_name(token, "parameters"),
        _ => None,
    }
}

fn schema_field_count(param: &Value) -> usize {
    param
        .get("schema")
        .and_then(Value::as_object)
        .map_or(0, |schema| schema.len())
}

fn has_description(param: &Value) -> bool {
    param
        .get("description")
        .and_then(Value::as_str)
        .is_some_and(|d| !d.is_empty())
}

fn field_count(param: &Value) -> usize {
    param.as_object().map_or(0, |fields| fields.len())
}

fn schema_fingerprint(schema: Option<&Value>) -> String {
    match schema {
        None => String::new(),
        Some(schema) => match reference_token(schema) {
            Some(token) => token.to_string(),
            None => canonical_json(schema),
        },
    }
}

/// Serializes with object keys sorted at every depth, so that key order does
/// not affect the fingerprint.
fn canonical_json(value: &Value) -> String {
    let mut out = String::new();
    write_canonical(value, &mut out);
    out
}

fn write_canonical(value: &Value, out: &mut String) {
    match value {
        Value::Object(map) => {
            let mut entries: Vec<(&String, &Value)> = map.iter().collect();
            entries.sort_by(|a, b| a.0.cmp(b.0));
            out.push('{');
            for (i, (key, v)) in entries.into_iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                out.push_str(&Value::String(key.clone()).to_string());
                out.push(':');
                write_canonical(v, out);
            }
            out.push('}');
        }
        Value::Array(items) => {
            out.push('[');
            for (i, v) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_canonical(v, out);
            }
            out.push(']');
        }
        scalar => out.push_str(&scalar.to_string()),
    }
}
