use database::{Collection, DocumentStore, Filter, FindOptions, Sort};
use types::{Formation, NewFormation};

use crate::documents::{from_document, from_documents, to_document};
use crate::filters::FormationFilter;
use crate::CatalogError;

pub const FORMATION_LIST_LIMIT: usize = 100;

pub async fn create_formation(
    store: &dyn DocumentStore,
    new_formation: NewFormation,
) -> Result<Formation, CatalogError> {
    let formation = Formation::new(new_formation);
    store
        .insert_one(Collection::Formations, &to_document(&formation)?)
        .await?;
    log::debug!("Created formation {} ({})", formation.id, formation.theme);
    Ok(formation)
}

pub async fn get_formation(
    store: &dyn DocumentStore,
    formation_id: &str,
) -> Result<Option<Formation>, CatalogError> {
    store
        .find_one(Collection::Formations, &Filter::by_id(formation_id))
        .await?
        .map(from_document)
        .transpose()
}

/// Most-voted first.
pub async fn list_formations(
    store: &dyn DocumentStore,
    filter: &FormationFilter,
) -> Result<Vec<Formation>, CatalogError> {
    let options = FindOptions::new()
        .sort(Sort::descending("votes"))
        .limit(FORMATION_LIST_LIMIT);
    let documents = store
        .find_many(Collection::Formations, &filter.to_filter(), &options)
        .await?;
    from_documents(documents)
}
