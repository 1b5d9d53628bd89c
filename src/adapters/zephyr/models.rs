//! Boundary mapping from Zephyr ZAPI wire records to typed entities.
//!
//! The remote API is loosely typed: collection payloads arrive either as a
//! JSON array or as an object keyed by record id (with stray scalar
//! bookkeeping entries such as `recordsCount`), ids may be strings or
//! numbers, and text fields are frequently absent. All of that tolerance
//! lives here so the aggregation pipeline only ever sees well-formed
//! entities; a record without a usable id is rejected as malformed.

use serde_json::Value;

use crate::domain::errors::{EngineError, EngineResult};
use crate::domain::models::{Cycle, Execution, Project, Version};

/// Flatten a collection payload into its individual records.
///
/// Arrays are taken as-is. For objects, each object-valued entry becomes a
/// record; when the record lacks an `id` field the map key is used as the
/// id (the cycle endpoint keys records by id). Scalar entries and any
/// other payload shape yield nothing.
pub(super) fn collection_records(payload: Value) -> Vec<Value> {
    match payload {
        Value::Array(items) => items,
        Value::Object(map) => map
            .into_iter()
            .filter_map(|(key, value)| match value {
                Value::Object(mut record) => {
                    record
                        .entry("id".to_string())
                        .or_insert_with(|| Value::String(key));
                    Some(Value::Object(record))
                }
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    }
}

/// Unwrap the execution endpoint's payload.
///
/// The endpoint wraps its records in `{ "executions": [...] }` alongside
/// paging fields; bare arrays are accepted too.
pub(super) fn execution_records(payload: Value) -> Vec<Value> {
    match payload {
        Value::Object(mut map) => match map.remove("executions") {
            Some(Value::Array(items)) => items,
            _ => collection_records(Value::Object(map)),
        },
        other => collection_records(other),
    }
}

/// Read a field as text, accepting JSON strings and numbers.
fn field_string(record: &Value, key: &str) -> Option<String> {
    match record.get(key)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Read the first present of several aliased text fields, defaulting to
/// the empty string.
fn field_text(record: &Value, keys: &[&str]) -> String {
    keys.iter()
        .find_map(|key| field_string(record, key))
        .unwrap_or_default()
}

/// Read the record's id, trying the given keys in order.
fn required_id(record: &Value, keys: &[&str], entity: &str) -> EngineResult<String> {
    keys.iter()
        .find_map(|key| field_string(record, key))
        .ok_or_else(|| EngineError::MalformedEntity(format!("{entity} record has no id: {record}")))
}

/// Map one wire record to a [`Project`].
pub(super) fn project_from_record(record: &Value) -> EngineResult<Project> {
    Ok(Project {
        id: required_id(record, &["id"], "project")?,
        key: field_text(record, &["key"]),
        name: field_text(record, &["name"]),
        description: field_text(record, &["description"]),
    })
}

/// Map one wire record to a [`Version`].
///
/// Version boards report the id under `id` or `value` depending on the
/// endpoint generation.
pub(super) fn version_from_record(record: &Value) -> EngineResult<Version> {
    Ok(Version {
        id: required_id(record, &["id", "value"], "version")?,
        name: field_text(record, &["name", "label"]),
        description: field_text(record, &["description"]),
    })
}

/// Map one wire record to a [`Cycle`].
pub(super) fn cycle_from_record(record: &Value) -> EngineResult<Cycle> {
    Ok(Cycle {
        id: required_id(record, &["id"], "cycle")?,
        name: field_text(record, &["name"]),
        description: field_text(record, &["description"]),
    })
}

/// Map one wire record to an [`Execution`].
///
/// An absent or null `executionStatus` stays `None`; the classifier treats
/// it as unexecuted.
pub(super) fn execution_from_record(record: &Value) -> EngineResult<Execution> {
    Ok(Execution {
        id: required_id(record, &["id"], "execution")?,
        name: field_text(record, &["testCaseName"]),
        description: field_text(record, &["testCaseDescription"]),
        status: field_string(record, "executionStatus"),
    })
}
