//! Resolves the single theme of the day, creating a default one on the
//! first request of each UTC calendar day.
//!
//! The day is the inclusive window `00:00:00.000000` to `23:59:59.999999`.
//! Stored timestamps have microsecond resolution, so no stored instant falls
//! between the end of one window and the start of the next.
//!
//! The default theme's id is derived from the calendar day and written with
//! insert-if-absent. Concurrent first callers therefore agree on one theme:
//! the caller whose insert lands reports `CreatedDefault`, the rest re-read
//! it and report `Found`.

use chrono::{DateTime, NaiveDate, SubsecRound, Utc};
use database::{Collection, DocumentStore, Filter};
use types::{timestamp, Theme};
use uuid::Uuid;

use crate::documents::{from_document, to_document};
use crate::CatalogError;

pub const DEFAULT_THEME_NAME: &str = "Leyendas del Fútbol Mundial";
pub const DEFAULT_THEME_DESCRIPTION: &str =
    "Arma tu once ideal con las más grandes leyendas de la historia del fútbol";

#[derive(Debug, Clone, PartialEq)]
pub enum DailyTheme {
    Found(Theme),
    CreatedDefault(Theme),
}

impl DailyTheme {
    pub fn theme(&self) -> &Theme {
        match self {
            DailyTheme::Found(theme) | DailyTheme::CreatedDefault(theme) => theme,
        }
    }

    pub fn into_theme(self) -> Theme {
        match self {
            DailyTheme::Found(theme) | DailyTheme::CreatedDefault(theme) => theme,
        }
    }

    pub fn was_created(&self) -> bool {
        matches!(self, DailyTheme::CreatedDefault(_))
    }
}

pub async fn get_or_create_daily_theme(
    store: &dyn DocumentStore,
) -> Result<DailyTheme, CatalogError> {
    resolve_daily_theme_at(store, Utc::now()).await
}

pub async fn resolve_daily_theme_at(
    store: &dyn DocumentStore,
    now: DateTime<Utc>,
) -> Result<DailyTheme, CatalogError> {
    let now = now.trunc_subsecs(6);

    if let Some(document) = store
        .find_one(Collection::Themes, &daily_filter(&now))
        .await?
    {
        return Ok(DailyTheme::Found(from_document(document)?));
    }

    let theme = default_daily_theme(now);
    if store
        .insert_if_absent(Collection::Themes, &to_document(&theme)?)
        .await?
    {
        log::info!("Created default daily theme {} for {}", theme.id, now.date_naive());
        return Ok(DailyTheme::CreatedDefault(theme));
    }

    // Another caller created today's default between our read and insert.
    let document = store
        .find_one(Collection::Themes, &Filter::by_id(&theme.id))
        .await?
        .ok_or_else(|| CatalogError::Vanished {
            collection: Collection::Themes,
            id: theme.id.clone(),
        })?;
    Ok(DailyTheme::Found(from_document(document)?))
}

/// Daily themes dated within `now`'s UTC calendar day.
pub fn daily_filter(now: &DateTime<Utc>) -> Filter {
    let (start, end) = timestamp::day_bounds(now);
    Filter::new().eq("is_daily", true).between(
        "date",
        timestamp::to_document_string(&start),
        timestamp::to_document_string(&end),
    )
}

pub fn default_theme_id(day: NaiveDate) -> String {
    let name = format!("daily-theme:{}", day.format("%Y-%m-%d"));
    Uuid::new_v5(&Uuid::NAMESPACE_OID, name.as_bytes()).to_string()
}

fn default_daily_theme(now: DateTime<Utc>) -> Theme {
    Theme {
        id: default_theme_id(now.date_naive()),
        name: DEFAULT_THEME_NAME.to_string(),
        description: DEFAULT_THEME_DESCRIPTION.to_string(),
        filter_criteria: Default::default(),
        is_daily: true,
        date: now,
    }
}
