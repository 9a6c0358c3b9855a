use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{new_id, timestamp};

/// A named context for building formations.
///
/// `filter_criteria` maps a player attribute to the value it must equal,
/// e.g. `{"club": "Barcelona"}`. An empty map admits every player.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub filter_criteria: BTreeMap<String, Value>,
    pub is_daily: bool,
    #[serde(with = "timestamp")]
    pub date: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewTheme {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub filter_criteria: BTreeMap<String, Value>,
    #[serde(default = "default_is_daily")]
    pub is_daily: bool,
}

fn default_is_daily() -> bool {
    true
}

impl Theme {
    pub fn new(new_theme: NewTheme) -> Self {
        Self::new_at(new_theme, timestamp::now())
    }

    pub fn new_at(new_theme: NewTheme, date: DateTime<Utc>) -> Self {
        Self {
            id: new_id(),
            name: new_theme.name,
            description: new_theme.description,
            filter_criteria: new_theme.filter_criteria,
            is_daily: new_theme.is_daily,
            date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_daily_defaults_to_true() {
        let payload: NewTheme = serde_json::from_value(serde_json::json!({
            "name": "Test Theme",
            "description": "Theme for testing",
            "filter_criteria": {"club": "Test FC"}
        }))
        .unwrap();
        assert!(payload.is_daily);

        let theme = Theme::new(payload);
        assert_eq!(
            theme.filter_criteria.get("club"),
            Some(&Value::String("Test FC".to_string()))
        );
    }
}
