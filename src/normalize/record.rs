//! Record-field scheme rewrite, applied before a record is persisted.

use crate::normalize::url::set_url_scheme;
use crate::scheme::Scheme;
use serde_json::{Map, Value};

/// Rewrites the scheme of the URL stored under `field` in `record`.
///
/// Returns the record unchanged when the field is absent, empty, or not a
/// string; only that one field changes otherwise. Takes and returns the map
/// by value like the host's pre-persistence filters do, so no shared state is
/// mutated.
pub fn set_record_field_scheme(
    mut record: Map<String, Value>,
    field: &str,
    target: Scheme,
) -> Map<String, Value> {
    if let Some(Value::String(value)) = record.get_mut(field) {
        if !value.is_empty() {
            *value = set_url_scheme(value, target);
        }
    }
    record
}
