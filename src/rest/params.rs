//! Query filters and payload helpers shared by the capability traits.

use serde_json::Value;

use crate::clients::InvalidHttpRequestError;

/// The value of one filter: a single string or a sequence of strings.
///
/// Sequences expand to one query parameter per element
/// (`order_ids=A&order_ids=B`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FilterValue {
    /// A single value.
    Single(String),
    /// A sequence of values sent as repeated parameters.
    Many(Vec<String>),
}

impl From<&str> for FilterValue {
    fn from(value: &str) -> Self {
        Self::Single(value.to_string())
    }
}

impl From<String> for FilterValue {
    fn from(value: String) -> Self {
        Self::Single(value)
    }
}

impl<S: Into<String>> From<Vec<S>> for FilterValue {
    fn from(values: Vec<S>) -> Self {
        Self::Many(values.into_iter().map(Into::into).collect())
    }
}

impl<S: Into<String>, const N: usize> From<[S; N]> for FilterValue {
    fn from(values: [S; N]) -> Self {
        Self::Many(values.into_iter().map(Into::into).collect())
    }
}

/// Query filters for [`Listable::fetch_list`](crate::rest::Listable::fetch_list).
///
/// An ordered mapping of parameter name to [`FilterValue`]. Setting a key
/// twice replaces the earlier value in place.
///
/// # Example
///
/// ```rust
/// use mirakl_api::rest::Filters;
///
/// let filters = Filters::new()
///     .set("order_state_codes", "SHIPPING")
///     .set("order_ids", ["O1", "O2"]);
///
/// assert_eq!(
///     filters.to_query(),
///     vec![
///         ("order_state_codes".to_string(), "SHIPPING".to_string()),
///         ("order_ids".to_string(), "O1".to_string()),
///         ("order_ids".to_string(), "O2".to_string()),
///     ]
/// );
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Filters {
    entries: Vec<(String, FilterValue)>,
}

impl Filters {
    /// Creates an empty filter set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a filter, replacing any previous value for the same key.
    #[must_use]
    pub fn set(mut self, key: impl Into<String>, value: impl Into<FilterValue>) -> Self {
        let key = key.into();
        let value = value.into();

        match self.entries.iter_mut().find(|(existing, _)| *existing == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
        self
    }

    /// Returns the value set for `key`, if any.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&FilterValue> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, value)| value)
    }

    /// Returns `true` if no filter is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Flattens the filters into query pairs, expanding sequences.
    #[must_use]
    pub fn to_query(&self) -> Vec<(String, String)> {
        let mut query = Vec::with_capacity(self.entries.len());
        for (key, value) in &self.entries {
            match value {
                FilterValue::Single(value) => query.push((key.clone(), value.clone())),
                FilterValue::Many(values) => {
                    query.extend(values.iter().map(|value| (key.clone(), value.clone())));
                }
            }
        }
        query
    }
}

impl<K, V> FromIterator<(K, V)> for Filters
where
    K: Into<String>,
    V: Into<FilterValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::new(), |filters, (key, value)| filters.set(key, value))
    }
}

/// Reads the identifier carried by an item's own `id` field.
///
/// Strings are used as-is and integers are rendered in decimal. Anything
/// else, including an empty string or a zero, counts as no identifier.
pub(crate) fn item_identifier(item: &Value) -> Option<String> {
    match item.get("id")? {
        Value::String(id) if !id.is_empty() => Some(id.clone()),
        Value::Number(id) if id.as_i64() == Some(0) => None,
        Value::Number(id) if id.is_i64() || id.is_u64() => Some(id.to_string()),
        _ => None,
    }
}

/// Flattens a JSON object into multipart text fields.
///
/// Strings are sent verbatim, other scalars and nested objects as their JSON
/// text, arrays as one field per element, and nulls are skipped.
pub(crate) fn form_fields(item: &Value) -> Result<Vec<(String, String)>, InvalidHttpRequestError> {
    let Value::Object(map) = item else {
        return Err(InvalidHttpRequestError::FormDataNotAnObject {
            kind: json_kind(item),
        });
    };

    let mut fields = Vec::with_capacity(map.len());
    for (name, value) in map {
        match value {
            Value::Null => {}
            Value::Array(values) => fields.extend(
                values
                    .iter()
                    .filter_map(form_value)
                    .map(|value| (name.clone(), value)),
            ),
            other => fields.extend(form_value(other).map(|value| (name.clone(), value))),
        }
    }
    Ok(fields)
}

fn form_value(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(value) => Some(value.clone()),
        other => Some(other.to_string()),
    }
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_filters_expand_sequences_to_repeated_keys() {
        let filters = Filters::new()
            .set("status", "SHIPPED")
            .set("order_ids", vec!["A", "B"]);

        assert_eq!(
            filters.to_query(),
            vec![
                ("status".to_string(), "SHIPPED".to_string()),
                ("order_ids".to_string(), "A".to_string()),
                ("order_ids".to_string(), "B".to_string()),
            ]
        );
    }

    #[test]
    fn test_filters_set_replaces_in_place() {
        let filters = Filters::new()
            .set("max", "10")
            .set("offset", "0")
            .set("max", "100");

        assert_eq!(filters.get("max"), Some(&FilterValue::from("100")));
        assert_eq!(filters.to_query()[0], ("max".to_string(), "100".to_string()));
        assert_eq!(filters.to_query().len(), 2);
    }

    #[test]
    fn test_filters_from_iterator() {
        let filters: Filters = [("paginate", "false"), ("sort", "dateCreated")]
            .into_iter()
            .collect();

        assert!(!filters.is_empty());
        assert_eq!(filters.to_query().len(), 2);
    }

    #[test]
    fn test_empty_sequence_produces_no_parameter() {
        let filters = Filters::new().set("order_ids", Vec::<String>::new());
        assert!(filters.to_query().is_empty());
    }

    #[test]
    fn test_item_identifier_reads_string_and_integer_ids() {
        assert_eq!(item_identifier(&json!({"id": "X"})), Some("X".to_string()));
        assert_eq!(item_identifier(&json!({"id": 42})), Some("42".to_string()));
        assert_eq!(item_identifier(&json!({"id": -7})), Some("-7".to_string()));
        assert_eq!(item_identifier(&json!({"id": "0"})), Some("0".to_string()));
    }

    #[test]
    fn test_item_identifier_ignores_missing_or_empty_ids() {
        assert_eq!(item_identifier(&json!({"v": 1})), None);
        assert_eq!(item_identifier(&json!({"id": ""})), None);
        assert_eq!(item_identifier(&json!({"id": null})), None);
        assert_eq!(item_identifier(&json!({"id": 0})), None);
        assert_eq!(item_identifier(&json!([1, 2])), None);
    }

    #[test]
    fn test_form_fields_flatten_object() {
        let fields = form_fields(&json!({
            "import_mode": "NORMAL",
            "with_products": false,
            "tags": ["a", "b"],
            "comment": null
        }))
        .unwrap();

        assert!(fields.contains(&("import_mode".to_string(), "NORMAL".to_string())));
        assert!(fields.contains(&("with_products".to_string(), "false".to_string())));
        assert!(fields.contains(&("tags".to_string(), "a".to_string())));
        assert!(fields.contains(&("tags".to_string(), "b".to_string())));
        assert!(!fields.iter().any(|(name, _)| name == "comment"));
    }

    #[test]
    fn test_form_fields_reject_non_objects() {
        let result = form_fields(&json!("just a string"));
        assert_eq!(
            result,
            Err(InvalidHttpRequestError::FormDataNotAnObject { kind: "a string" })
        );
    }
}
