use database::{Collection, DatabaseError, DocumentStore, Filter};
use serde_json::json;
use types::{timestamp, Player, Theme};

use crate::documents::to_documents;
use crate::reference_data::{reference_players, reference_themes};
use crate::CatalogError;

/// Sentinel id in the markers collection written alongside the reference data.
pub const SEED_MARKER_ID: &str = "reference-data";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    Seeded { players: usize, themes: usize },
    AlreadySeeded,
}

/// Writes the reference players and themes unless any player exists.
///
/// The seed marker, players and themes go to the store as one batch, so a
/// failed write leaves nothing behind and the next call seeds again. Callers
/// that pass the emptiness check together all try the batch; the marker id
/// lets exactly one of them land.
pub async fn seed_if_empty(store: &dyn DocumentStore) -> Result<SeedOutcome, CatalogError> {
    let existing = store.count(Collection::Players, &Filter::new()).await?;
    if existing > 0 {
        log::info!("Catalog already holds {existing} players, skipping seed");
        return Ok(SeedOutcome::AlreadySeeded);
    }

    let marker = json!({
        "id": SEED_MARKER_ID,
        "created_at": timestamp::to_document_string(&timestamp::now()),
    });
    let players: Vec<Player> = reference_players().into_iter().map(Player::new).collect();
    let themes: Vec<Theme> = reference_themes().into_iter().map(Theme::new).collect();

    let batch = vec![
        (Collection::Markers, vec![marker]),
        (Collection::Players, to_documents(&players)?),
        (Collection::Themes, to_documents(&themes)?),
    ];
    match store.insert_batch(&batch).await {
        Ok(()) => {}
        Err(DatabaseError::DuplicateId { collection, .. })
            if collection == Collection::Markers.name() =>
        {
            log::info!("Seed already written by another caller");
            return Ok(SeedOutcome::AlreadySeeded);
        }
        Err(e) => {
            log::warn!("Seeding failed, nothing was written: {e}");
            return Err(e.into());
        }
    }

    log::info!(
        "Seeded {} players and {} themes",
        players.len(),
        themes.len()
    );
    Ok(SeedOutcome::Seeded {
        players: players.len(),
        themes: themes.len(),
    })
}
