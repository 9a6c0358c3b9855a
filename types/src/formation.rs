use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{new_id, timestamp};

/// A player reference placed in a labelled slot. The referenced player is
/// not required to exist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormationSlot {
    pub player_id: String,
    /// e.g. "GK", "CB1".
    pub position_slot: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Formation {
    pub id: String,
    pub user_name: String,
    /// e.g. "4-3-3".
    pub formation_name: String,
    /// Matched against theme names; not a reference.
    pub theme: String,
    pub players: Vec<FormationSlot>,
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
    /// Only ever incremented, one vote at a time.
    pub votes: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewFormation {
    pub user_name: String,
    pub formation_name: String,
    pub theme: String,
    pub players: Vec<FormationSlot>,
}

impl Formation {
    pub fn new(new_formation: NewFormation) -> Self {
        Self {
            id: new_id(),
            user_name: new_formation.user_name,
            formation_name: new_formation.formation_name,
            theme: new_formation.theme,
            players: new_formation.players,
            created_at: timestamp::now(),
            votes: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_formation_starts_without_votes() {
        let formation = Formation::new(NewFormation {
            user_name: "tester".to_string(),
            formation_name: "4-3-3".to_string(),
            theme: "Test Theme".to_string(),
            players: vec![FormationSlot {
                player_id: "missing".to_string(),
                position_slot: "GK".to_string(),
            }],
        });

        assert_eq!(formation.votes, 0);
        assert_eq!(formation.players.len(), 1);
        assert!(formation.created_at <= timestamp::now());

        let json = serde_json::to_value(&formation).unwrap();
        assert_eq!(json["votes"], 0);
        assert!(json["created_at"].as_str().unwrap().ends_with('Z'));
    }
}
