use database::{Collection, DocumentStore, Filter, FindOptions};
use types::{NewPlayer, Player, Theme};

use crate::documents::{from_document, from_documents, to_document};
use crate::filters::{criteria_filter, PlayerFilter};
use crate::CatalogError;

pub const PLAYER_LIST_LIMIT: usize = 1000;

pub async fn create_player(
    store: &dyn DocumentStore,
    new_player: NewPlayer,
) -> Result<Player, CatalogError> {
    let player = Player::new(new_player);
    store
        .insert_one(Collection::Players, &to_document(&player)?)
        .await?;
    Ok(player)
}

pub async fn get_player(
    store: &dyn DocumentStore,
    player_id: &str,
) -> Result<Option<Player>, CatalogError> {
    store
        .find_one(Collection::Players, &Filter::by_id(player_id))
        .await?
        .map(from_document)
        .transpose()
}

pub async fn list_players(
    store: &dyn DocumentStore,
    filter: &PlayerFilter,
) -> Result<Vec<Player>, CatalogError> {
    find_players(store, &filter.to_filter()).await
}

/// Players admitted by the theme's filter criteria.
pub async fn players_for_theme(
    store: &dyn DocumentStore,
    theme: &Theme,
) -> Result<Vec<Player>, CatalogError> {
    match criteria_filter(&theme.filter_criteria) {
        Some(filter) => find_players(store, &filter).await,
        None => {
            log::debug!("Theme {} has criteria no player can match", theme.id);
            Ok(Vec::new())
        }
    }
}

async fn find_players(
    store: &dyn DocumentStore,
    filter: &Filter,
) -> Result<Vec<Player>, CatalogError> {
    let documents = store
        .find_many(
            Collection::Players,
            filter,
            &FindOptions::new().limit(PLAYER_LIST_LIMIT),
        )
        .await?;
    from_documents(documents)
}
