pub mod formation;
pub mod player;
pub mod theme;
pub mod timestamp;

pub use formation::{Formation, FormationSlot, NewFormation};
pub use player::{NewPlayer, Player, Position};
pub use theme::{NewTheme, Theme};

/// Generates a fresh opaque identifier for a new record.
pub fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
