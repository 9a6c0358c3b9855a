use std::cmp::Ordering;
use std::fmt::Display;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::DatabaseError;

/// Top-level document collections.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Collection {
    Players,
    Formations,
    Themes,
    /// Idempotency sentinels.
    Markers,
}

impl Collection {
    pub fn name(&self) -> &'static str {
        match self {
            Collection::Players => "players",
            Collection::Formations => "formations",
            Collection::Themes => "themes",
            Collection::Markers => "markers",
        }
    }
}

impl Display for Collection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Condition {
    /// Field equals value, compared as a whole for arrays and objects. A
    /// `Null` value also matches a missing field. Values of different JSON
    /// kinds never match, so `true` does not equal `1`.
    Eq(String, Value),
    /// Inclusive range on both ends.
    Between(String, Value, Value),
}

impl Condition {
    pub fn field(&self) -> &str {
        match self {
            Condition::Eq(field, _) | Condition::Between(field, _, _) => field,
        }
    }

    pub fn matches(&self, document: &Value) -> bool {
        let actual = document.get(self.field()).unwrap_or(&Value::Null);
        match self {
            Condition::Eq(_, expected) => compare_values(actual, expected) == Some(Ordering::Equal),
            Condition::Between(_, low, high) => {
                matches!(
                    compare_values(actual, low),
                    Some(Ordering::Greater | Ordering::Equal)
                ) && matches!(
                    compare_values(actual, high),
                    Some(Ordering::Less | Ordering::Equal)
                )
            }
        }
    }
}

/// A conjunction of conditions over top-level document fields. The empty
/// filter matches every document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filter {
    conditions: Vec<Condition>,
}

impl Filter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn by_id(id: &str) -> Self {
        Self::new().eq("id", id)
    }

    pub fn eq(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.conditions.push(Condition::Eq(field.into(), value.into()));
        self
    }

    pub fn between(
        mut self,
        field: impl Into<String>,
        low: impl Into<Value>,
        high: impl Into<Value>,
    ) -> Self {
        self.conditions
            .push(Condition::Between(field.into(), low.into(), high.into()));
        self
    }

    pub fn conditions(&self) -> &[Condition] {
        &self.conditions
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    pub fn matches(&self, document: &Value) -> bool {
        self.conditions.iter().all(|c| c.matches(document))
    }

    /// Rejects field names the stores cannot address and range bounds that
    /// are not scalars.
    pub fn validate(&self) -> Result<(), DatabaseError> {
        for condition in &self.conditions {
            validate_field(condition.field())?;
            match condition {
                Condition::Eq(_, _) => {}
                Condition::Between(_, low, high) => {
                    validate_scalar(low)?;
                    validate_scalar(high)?;
                }
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Sort {
    pub field: String,
    pub descending: bool,
}

impl Sort {
    pub fn ascending(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            descending: false,
        }
    }

    pub fn descending(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            descending: true,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FindOptions {
    pub sort: Option<Sort>,
    pub limit: Option<usize>,
}

impl FindOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sort(mut self, sort: Sort) -> Self {
        self.sort = Some(sort);
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }
}

pub(crate) fn validate_field(field: &str) -> Result<(), DatabaseError> {
    let valid = !field.is_empty()
        && field
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_');
    if valid {
        Ok(())
    } else {
        Err(DatabaseError::InvalidField(field.to_string()))
    }
}

fn validate_scalar(value: &Value) -> Result<(), DatabaseError> {
    match value {
        Value::Array(_) | Value::Object(_) => Err(DatabaseError::UnsupportedValue(value.to_string())),
        _ => Ok(()),
    }
}

/// Orders two JSON scalars of the same kind; `None` when they are not
/// comparable. Null only equals null. Arrays and objects are only ever
/// equal, never ordered.
pub(crate) fn compare_values(left: &Value, right: &Value) -> Option<Ordering> {
    match (left, right) {
        (Value::Array(_), Value::Array(_)) | (Value::Object(_), Value::Object(_)) => {
            (left == right).then_some(Ordering::Equal)
        }
        (Value::Null, Value::Null) => Some(Ordering::Equal),
        (Value::Bool(l), Value::Bool(r)) => Some(l.cmp(r)),
        (Value::String(l), Value::String(r)) => Some(l.cmp(r)),
        (Value::Number(l), Value::Number(r)) => match (l.as_i64(), r.as_i64()) {
            (Some(l), Some(r)) => Some(l.cmp(&r)),
            _ => l.as_f64()?.partial_cmp(&r.as_f64()?),
        },
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_filter_matches_everything() {
        let filter = Filter::new();
        assert!(filter.is_empty());
        assert!(filter.matches(&json!({"id": "a"})));
        assert!(filter.matches(&json!({})));
    }

    #[test]
    fn test_eq_requires_every_condition() {
        let filter = Filter::new().eq("club", "AC Milan").eq("era", "1990s");
        assert!(filter.matches(&json!({"club": "AC Milan", "era": "1990s"})));
        assert!(!filter.matches(&json!({"club": "AC Milan", "era": "1980s"})));
        assert!(!filter.matches(&json!({"era": "1990s"})));
    }

    #[test]
    fn test_eq_on_booleans_and_numbers() {
        assert!(Filter::new().eq("is_daily", true).matches(&json!({"is_daily": true})));
        assert!(!Filter::new().eq("is_daily", true).matches(&json!({"is_daily": false})));
        assert!(Filter::new().eq("votes", 3).matches(&json!({"votes": 3})));
        assert!(!Filter::new().eq("votes", "3").matches(&json!({"votes": 3})));
    }

    #[test]
    fn test_null_matches_missing_field() {
        let filter = Filter::new().eq("description", Value::Null);
        assert!(filter.matches(&json!({})));
        assert!(!filter.matches(&json!({"description": ""})));
    }

    #[test]
    fn test_between_is_inclusive() {
        let filter = Filter::new().between("date", "2024-01-01", "2024-01-31");
        assert!(filter.matches(&json!({"date": "2024-01-01"})));
        assert!(filter.matches(&json!({"date": "2024-01-31"})));
        assert!(!filter.matches(&json!({"date": "2024-02-01"})));
        assert!(!filter.matches(&json!({"date": 20240115})));
    }

    #[test]
    fn test_validate_rejects_odd_fields_and_composite_bounds() {
        assert!(Filter::new().eq("club", "x").validate().is_ok());
        assert!(Filter::new().eq("achievements", json!(["a"])).validate().is_ok());
        assert!(matches!(
            Filter::new().eq("club') OR 1=1 --", "x").validate(),
            Err(DatabaseError::InvalidField(_))
        ));
        assert!(matches!(
            Filter::new().between("achievements", json!(["a"]), json!(["z"])).validate(),
            Err(DatabaseError::UnsupportedValue(_))
        ));
    }

    #[test]
    fn test_eq_on_whole_arrays_and_objects() {
        let filter = Filter::new().eq("achievements", json!(["World Cup 2010", "Euro 2012"]));
        assert!(filter.matches(&json!({"achievements": ["World Cup 2010", "Euro 2012"]})));
        assert!(!filter.matches(&json!({"achievements": ["World Cup 2010"]})));
        assert!(!filter.matches(&json!({"achievements": "World Cup 2010"})));

        let nested = Filter::new().eq("meta", json!({"a": 1}));
        assert!(nested.matches(&json!({"meta": {"a": 1}})));
        assert!(!nested.matches(&json!({"meta": {"a": 2}})));
    }

    #[test]
    fn test_kinds_never_cross_match() {
        assert!(!Filter::new().eq("is_daily", true).matches(&json!({"is_daily": 1})));
        assert!(!Filter::new().eq("votes", 1).matches(&json!({"votes": true})));
    }
}
