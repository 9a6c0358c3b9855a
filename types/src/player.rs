use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::new_id;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    GK,
    CB,
    LB,
    RB,
    CM,
    DM,
    AM,
    LW,
    RW,
    ST,
}

impl Position {
    pub const ALL: [Position; 10] = [
        Position::GK,
        Position::CB,
        Position::LB,
        Position::RB,
        Position::CM,
        Position::DM,
        Position::AM,
        Position::LW,
        Position::RW,
        Position::ST,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Position::GK => "GK",
            Position::CB => "CB",
            Position::LB => "LB",
            Position::RB => "RB",
            Position::CM => "CM",
            Position::DM => "DM",
            Position::AM => "AM",
            Position::LW => "LW",
            Position::RW => "RW",
            Position::ST => "ST",
        }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A catalog entry. Never mutated once stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: String,
    pub name: String,
    pub position: Position,
    pub club: String,
    pub country: String,
    /// Conventionally 1-100.
    pub rating: i32,
    pub image_url: String,
    #[serde(default)]
    pub achievements: Vec<String>,
    /// Usually a decade label such as "1990s".
    pub era: String,
    #[serde(default)]
    pub description: String,
}

/// Creation payload for a [`Player`]; the id is assigned on creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewPlayer {
    pub name: String,
    pub position: Position,
    pub club: String,
    pub country: String,
    pub rating: i32,
    pub image_url: String,
    #[serde(default)]
    pub achievements: Vec<String>,
    pub era: String,
    #[serde(default)]
    pub description: String,
}

impl Player {
    pub fn new(new_player: NewPlayer) -> Self {
        let NewPlayer {
            name,
            position,
            club,
            country,
            rating,
            image_url,
            achievements,
            era,
            description,
        } = new_player;
        Self {
            id: new_id(),
            name,
            position,
            club,
            country,
            rating,
            image_url,
            achievements,
            era,
            description,
        }
    }
}

impl From<NewPlayer> for Player {
    fn from(new_player: NewPlayer) -> Self {
        Player::new(new_player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload() -> NewPlayer {
        NewPlayer {
            name: "Test Player".to_string(),
            position: Position::ST,
            club: "Test FC".to_string(),
            country: "Testland".to_string(),
            rating: 85,
            image_url: "https://example.com/test.jpg".to_string(),
            achievements: vec!["Test Cup 2023".to_string()],
            era: "2020s".to_string(),
            description: String::new(),
        }
    }

    #[test]
    fn test_new_players_get_distinct_ids() {
        let first = Player::new(payload());
        let second = Player::new(payload());
        assert!(!first.id.is_empty());
        assert_ne!(first.id, second.id);
        assert_eq!(first.club, "Test FC");
    }

    #[test]
    fn test_position_serializes_as_code() {
        let json = serde_json::to_value(Position::GK).unwrap();
        assert_eq!(json, serde_json::json!("GK"));
        for position in Position::ALL {
            assert_eq!(
                serde_json::to_value(position).unwrap(),
                serde_json::json!(position.as_str())
            );
        }
    }

    #[test]
    fn test_payload_defaults() {
        let payload: NewPlayer = serde_json::from_value(serde_json::json!({
            "name": "Keeper",
            "position": "GK",
            "club": "Somewhere",
            "country": "Nowhere",
            "rating": 70,
            "image_url": "",
            "era": "1980s"
        }))
        .unwrap();
        assert!(payload.achievements.is_empty());
        assert_eq!(payload.description, "");
    }

    #[test]
    fn test_unknown_position_is_rejected() {
        let result = serde_json::from_value::<Position>(serde_json::json!("SW"));
        assert!(result.is_err());
    }
}
