//! Builds store filters from optional query parameters.
//!
//! A parameter that is absent or empty adds no constraint. Values are not
//! checked against any enumeration, so an unknown position simply matches
//! nothing.

use std::collections::BTreeMap;

use database::Filter;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerFilter {
    pub position: Option<String>,
    pub club: Option<String>,
    pub era: Option<String>,
}

impl PlayerFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn position(mut self, position: impl Into<String>) -> Self {
        self.position = Some(position.into());
        self
    }

    pub fn club(mut self, club: impl Into<String>) -> Self {
        self.club = Some(club.into());
        self
    }

    pub fn era(mut self, era: impl Into<String>) -> Self {
        self.era = Some(era.into());
        self
    }

    pub fn to_filter(&self) -> Filter {
        [
            ("position", &self.position),
            ("club", &self.club),
            ("era", &self.era),
        ]
        .into_iter()
        .fold(Filter::new(), |filter, (field, value)| match present(value) {
            Some(value) => filter.eq(field, value),
            None => filter,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormationFilter {
    pub theme: Option<String>,
}

impl FormationFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn theme(mut self, theme: impl Into<String>) -> Self {
        self.theme = Some(theme.into());
        self
    }

    pub fn to_filter(&self) -> Filter {
        match present(&self.theme) {
            Some(theme) => Filter::new().eq("theme", theme),
            None => Filter::new(),
        }
    }
}

/// Equality conditions for every entry of a theme's filter criteria.
/// Arrays and objects are compared as whole values.
///
/// `None` when a criterion names a field no stored document can carry (for
/// example `image-url`); such a theme admits no players.
pub fn criteria_filter(criteria: &BTreeMap<String, Value>) -> Option<Filter> {
    let filter = criteria
        .iter()
        .fold(Filter::new(), |filter, (field, value)| {
            filter.eq(field.as_str(), value.clone())
        });
    filter.validate().is_ok().then_some(filter)
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use database::Condition;
    use serde_json::json;

    #[test]
    fn test_no_parameters_means_no_constraints() {
        assert!(PlayerFilter::new().to_filter().is_empty());
        assert!(FormationFilter::new().to_filter().is_empty());
    }

    #[test]
    fn test_empty_parameters_are_ignored() {
        let filter = PlayerFilter::new().club("").era("1990s").to_filter();
        assert_eq!(
            filter.conditions(),
            &[Condition::Eq("era".to_string(), json!("1990s"))]
        );
        assert!(FormationFilter::new().theme("").to_filter().is_empty());
    }

    #[test]
    fn test_all_player_parameters() {
        let filter = PlayerFilter::new()
            .position("CB")
            .club("AC Milan")
            .era("1980s")
            .to_filter();
        assert_eq!(filter.conditions().len(), 3);
        assert!(filter.matches(&json!({"position": "CB", "club": "AC Milan", "era": "1980s"})));
        assert!(!filter.matches(&json!({"position": "LB", "club": "AC Milan", "era": "1980s"})));
    }

    #[test]
    fn test_unknown_position_is_passed_through() {
        let filter = PlayerFilter::new().position("SW").to_filter();
        assert_eq!(
            filter.conditions(),
            &[Condition::Eq("position".to_string(), json!("SW"))]
        );
    }

    #[test]
    fn test_criteria_become_equality_conditions() {
        let criteria: BTreeMap<String, Value> =
            serde_json::from_value(json!({"club": "Barcelona", "country": "Spain"})).unwrap();
        let filter = criteria_filter(&criteria).unwrap();
        assert!(filter.matches(&json!({"club": "Barcelona", "country": "Spain"})));
        assert!(!filter.matches(&json!({"club": "Barcelona", "country": "Brazil"})));
        assert!(criteria_filter(&BTreeMap::new()).unwrap().is_empty());
    }

    #[test]
    fn test_list_criteria_compare_whole_lists() {
        let criteria: BTreeMap<String, Value> =
            serde_json::from_value(json!({"achievements": ["World Cup 2010"]})).unwrap();
        let filter = criteria_filter(&criteria).unwrap();
        assert!(filter.matches(&json!({"achievements": ["World Cup 2010"]})));
        assert!(!filter.matches(&json!({"achievements": ["World Cup 2010", "Euro 2012"]})));
    }

    #[test]
    fn test_unaddressable_criteria_admit_nothing() {
        let criteria: BTreeMap<String, Value> =
            serde_json::from_value(json!({"club": "Barcelona", "image-url": "x"})).unwrap();
        assert!(criteria_filter(&criteria).is_none());
    }
}
