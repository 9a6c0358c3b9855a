//! Player catalog, formations, daily themes and votes over a
//! [`DocumentStore`](database::DocumentStore).
//!
//! Every operation takes the store explicitly; nothing here caches or locks.

mod documents;
pub mod daily_theme;
pub mod error;
pub mod filters;
pub mod formations;
pub mod players;
pub mod reference_data;
pub mod seed;
pub mod settings;
pub mod themes;
pub mod votes;

pub use daily_theme::{get_or_create_daily_theme, resolve_daily_theme_at, DailyTheme};
pub use error::CatalogError;
pub use filters::{FormationFilter, PlayerFilter};
pub use formations::{create_formation, get_formation, list_formations};
pub use players::{create_player, get_player, list_players, players_for_theme};
pub use seed::{seed_if_empty, SeedOutcome};
pub use settings::Settings;
pub use themes::{create_theme, get_theme, list_themes};
pub use votes::{increment_vote, VoteOutcome};
