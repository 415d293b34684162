//! Portfolio storage
//!
//! Content is stored as one JSON document per portfolio; theme options are
//! kept as an append-only history. Option payloads are normalised into a
//! single JSON object on the way in, so readers see one canonical shape.

use serde::Serialize;
use serde_json::{Map, Value};
use sqlx::sqlite::SqlitePool;
use thiserror::Error;
use tracing::{debug, warn};

use crate::portfolio::Portfolio;
use crate::slug::{slugify, validate_slug, SlugError};
use crate::theme::options::{decode_payload, OptionsPatch, PayloadError};

/// Storage errors
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("portfolio not found: {0}")]
    NotFound(String),

    #[error("slug already in use: {0}")]
    SlugExists(String),

    #[error("invalid slug: {0}")]
    InvalidSlug(#[from] SlugError),

    #[error("invalid theme options: {0}")]
    InvalidOptions(#[from] PayloadError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Listing entry
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PortfolioListItem {
    pub id: String,
    pub slug: String,
    pub name: String,
    pub updated_at: String,
}

/// Portfolio persistence service
#[derive(Clone)]
pub struct PortfolioStore {
    pool: SqlitePool,
}

impl PortfolioStore {
    /// Create a new portfolio store
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a portfolio, assigning an id and slug when missing
    pub async fn create(&self, portfolio: &Portfolio) -> Result<Portfolio, StoreError> {
        let mut stored = portfolio.clone();
        if stored.id.is_empty() {
            stored.id = uuid::Uuid::new_v4().to_string();
        }
        stored.slug = if stored.slug.is_empty() {
            match validate_slug(&slugify(&stored.content.name)) {
                Ok(slug) if !self.slug_taken(&slug).await? => slug,
                _ => stored.id.clone(),
            }
        } else {
            validate_slug(&stored.slug)?
        };
        if self.slug_taken(&stored.slug).await? {
            return Err(StoreError::SlugExists(stored.slug));
        }

        // Normalise every options entry before anything is written
        let payloads = stored
            .options
            .iter()
            .map(|raw| decode_payload(raw).map(Value::Object))
            .collect::<Result<Vec<_>, _>>()?;
        stored.options = payloads;

        let body = Self::body_json(&stored)?;
        let now = chrono::Utc::now().to_rfc3339();

        let mut tx = self.pool.begin().await?;
        sqlx::query(
            "INSERT INTO portfolios (id, slug, body, created_at, updated_at) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(&stored.id)
        .bind(&stored.slug)
        .bind(&body)
        .bind(&now)
        .bind(&now)
        .execute(&mut *tx)
        .await?;

        for payload in &stored.options {
            sqlx::query(
                "INSERT INTO portfolio_options (portfolio_id, payload, created_at) VALUES (?, ?, ?)",
            )
            .bind(&stored.id)
            .bind(payload.to_string())
            .bind(&now)
            .execute(&mut *tx)
            .await?;
        }
        tx.commit().await?;

        debug!("Created portfolio {} ({})", stored.id, stored.slug);
        Ok(stored)
    }

    /// Load a portfolio with its options history
    pub async fn get(&self, id: &str) -> Result<Option<Portfolio>, StoreError> {
        let row: Option<(String, String, String)> =
            sqlx::query_as("SELECT id, slug, body FROM portfolios WHERE id = ?")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;
        match row {
            Some(row) => Ok(Some(self.hydrate(row).await?)),
            None => Ok(None),
        }
    }

    /// Load a portfolio by its public slug
    pub async fn get_by_slug(&self, slug: &str) -> Result<Option<Portfolio>, StoreError> {
        let row: Option<(String, String, String)> =
            sqlx::query_as("SELECT id, slug, body FROM portfolios WHERE slug = ?")
                .bind(slug.to_lowercase())
                .fetch_optional(&self.pool)
                .await?;
        match row {
            Some(row) => Ok(Some(self.hydrate(row).await?)),
            None => Ok(None),
        }
    }

    /// Load by id, falling back to slug
    pub async fn find(&self, id_or_slug: &str) -> Result<Option<Portfolio>, StoreError> {
        match self.get(id_or_slug).await? {
            Some(portfolio) => Ok(Some(portfolio)),
            None => self.get_by_slug(id_or_slug).await,
        }
    }

    /// List all portfolios, most recently updated first
    pub async fn list(&self) -> Result<Vec<PortfolioListItem>, StoreError> {
        let rows: Vec<(String, String, String, String)> = sqlx::query_as(
            "SELECT id, slug, body, updated_at FROM portfolios ORDER BY updated_at DESC, id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|(id, slug, body, updated_at)| {
                let name = serde_json::from_str::<Value>(&body)
                    .ok()
                    .and_then(|v| v["content"]["name"].as_str().map(str::to_string))
                    .unwrap_or_default();
                PortfolioListItem {
                    id,
                    slug,
                    name,
                    updated_at,
                }
            })
            .collect())
    }

    /// The most recent options object (empty when none were stored)
    pub async fn current_options(&self, id: &str) -> Result<Map<String, Value>, StoreError> {
        let row: Option<(String,)> = sqlx::query_as(
            "SELECT payload FROM portfolio_options WHERE portfolio_id = ? ORDER BY id DESC LIMIT 1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row
            .and_then(|(payload,)| Self::decode_stored(&payload).as_object().cloned())
            .unwrap_or_default())
    }

    /// Append a raw options payload after normalising it
    pub async fn append_options(
        &self,
        id: &str,
        raw: &Value,
    ) -> Result<Map<String, Value>, StoreError> {
        let object = decode_payload(raw)?;
        self.insert_options(id, &object).await?;
        Ok(object)
    }

    /// Merge a partial update over the current options and store the result
    pub async fn update_options(
        &self,
        id: &str,
        patch: &OptionsPatch,
    ) -> Result<Map<String, Value>, StoreError> {
        let mut object = self.current_options(id).await?;
        patch.merge_into(&mut object);
        self.insert_options(id, &object).await?;
        Ok(object)
    }

    /// Delete a portfolio and its options history
    pub async fn delete(&self, id: &str) -> Result<bool, StoreError> {
        let mut tx = self.pool.begin().await?;
        sqlx::query("DELETE FROM portfolio_options WHERE portfolio_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        let result = sqlx::query("DELETE FROM portfolios WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;
        Ok(result.rows_affected() > 0)
    }

    async fn insert_options(
        &self,
        id: &str,
        object: &Map<String, Value>,
    ) -> Result<(), StoreError> {
        let now = chrono::Utc::now().to_rfc3339();
        let payload = serde_json::to_string(object)?;

        let updated = sqlx::query("UPDATE portfolios SET updated_at = ? WHERE id = ?")
            .bind(&now)
            .bind(id)
            .execute(&self.pool)
            .await?;
        if updated.rows_affected() == 0 {
            return Err(StoreError::NotFound(id.to_string()));
        }

        sqlx::query(
            "INSERT INTO portfolio_options (portfolio_id, payload, created_at) VALUES (?, ?, ?)",
        )
        .bind(id)
        .bind(&payload)
        .bind(&now)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn slug_taken(&self, slug: &str) -> Result<bool, StoreError> {
        let row: Option<(i32,)> = sqlx::query_as("SELECT 1 FROM portfolios WHERE slug = ?")
            .bind(slug)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.is_some())
    }

    async fn hydrate(
        &self,
        (id, slug, body): (String, String, String),
    ) -> Result<Portfolio, StoreError> {
        let mut portfolio: Portfolio = serde_json::from_str(&body)?;
        portfolio.id = id;
        portfolio.slug = slug;

        let rows: Vec<(String,)> = sqlx::query_as(
            "SELECT payload FROM portfolio_options WHERE portfolio_id = ? ORDER BY id",
        )
        .bind(&portfolio.id)
        .fetch_all(&self.pool)
        .await?;
        portfolio.options = rows
            .iter()
            .map(|(payload,)| Self::decode_stored(payload))
            .collect();

        Ok(portfolio)
    }

    /// Rows written before normalisation may hold anything; undecodable ones
    /// are passed through as strings for the resolver to reject.
    fn decode_stored(payload: &str) -> Value {
        match serde_json::from_str::<Value>(payload)
            .map_err(PayloadError::from)
            .and_then(|v| decode_payload(&v))
        {
            Ok(object) => Value::Object(object),
            Err(e) => {
                warn!("Stored theme options unreadable: {}", e);
                Value::String(payload.to_string())
            }
        }
    }

    fn body_json(portfolio: &Portfolio) -> Result<String, serde_json::Error> {
        let mut body = serde_json::to_value(portfolio)?;
        if let Some(object) = body.as_object_mut() {
            object.remove("id");
            object.remove("slug");
            object.remove("options");
        }
        serde_json::to_string(&body)
    }
}
