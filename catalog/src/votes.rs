use database::{Collection, DocumentStore, Filter};

use crate::CatalogError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoteOutcome {
    Recorded,
    NotFound,
}

/// Adds exactly one vote to the formation. The increment happens inside the
/// store, so concurrent votes on the same formation are never lost.
pub async fn increment_vote(
    store: &dyn DocumentStore,
    formation_id: &str,
) -> Result<VoteOutcome, CatalogError> {
    let matched = store
        .atomic_increment(Collection::Formations, &Filter::by_id(formation_id), "votes", 1)
        .await?;

    if matched == 0 {
        log::debug!("Vote for unknown formation {formation_id}");
        Ok(VoteOutcome::NotFound)
    } else {
        log::debug!("Vote recorded for formation {formation_id}");
        Ok(VoteOutcome::Recorded)
    }
}
