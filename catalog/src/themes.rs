use database::{Collection, DocumentStore, Filter, FindOptions, Sort};
use types::{NewTheme, Theme};

use crate::documents::{from_document, from_documents, to_document};
use crate::CatalogError;

pub const THEME_LIST_LIMIT: usize = 100;

pub async fn create_theme(
    store: &dyn DocumentStore,
    new_theme: NewTheme,
) -> Result<Theme, CatalogError> {
    let theme = Theme::new(new_theme);
    store
        .insert_one(Collection::Themes, &to_document(&theme)?)
        .await?;
    Ok(theme)
}

pub async fn get_theme(
    store: &dyn DocumentStore,
    theme_id: &str,
) -> Result<Option<Theme>, CatalogError> {
    store
        .find_one(Collection::Themes, &Filter::by_id(theme_id))
        .await?
        .map(from_document)
        .transpose()
}

/// Newest first.
pub async fn list_themes(store: &dyn DocumentStore) -> Result<Vec<Theme>, CatalogError> {
    let options = FindOptions::new()
        .sort(Sort::descending("date"))
        .limit(THEME_LIST_LIMIT);
    let documents = store
        .find_many(Collection::Themes, &Filter::new(), &options)
        .await?;
    from_documents(documents)
}
