//! Database initialization module
//!
//! Provides one-time database setup for the folio_init tool.

use std::path::Path;

use anyhow::{anyhow, bail, Result};
use tracing::info;

use crate::db::{Database, PortfolioStore};
use crate::portfolio::Portfolio;

/// Initialize a new portfolio database
///
/// # Arguments
/// * `path` - Path to the SQLite database file (must not exist)
/// * `portfolios` - Portfolios to import; their options entries are normalised
///
/// # Errors
/// * Database file already exists
/// * A portfolio is rejected by the store (bad slug, malformed options)
pub async fn init_database(path: &Path, portfolios: &[Portfolio]) -> Result<Vec<Portfolio>> {
    // Fail if database already exists
    if path.exists() {
        bail!(
            "Database file already exists: {}. Remove it first or use a different path.",
            path.display()
        );
    }

    let db_path = path
        .to_str()
        .ok_or_else(|| anyhow!("Database path is not valid UTF-8: {}", path.display()))?;

    info!("Creating new database at {}", path.display());

    // Create the database (runs migrations)
    let db = Database::new(Some(db_path)).await?;
    let store = PortfolioStore::new(db.pool().clone());

    let mut created = Vec::with_capacity(portfolios.len());
    for portfolio in portfolios {
        let stored = store.create(portfolio).await.map_err(|e| {
            anyhow!(
                "Failed to import portfolio '{}': {}",
                portfolio.content.name,
                e
            )
        })?;
        info!("  {} -> {}", stored.slug, stored.id);
        created.push(stored);
    }

    info!("Database initialization complete");
    Ok(created)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    fn sample(name: &str) -> Portfolio {
        serde_json::from_value(json!({
            "content": {"name": name},
            "options": ["{\"themeId\":\"elegant\"}"]
        }))
        .unwrap()
    }

    #[tokio::test]
    async fn test_init_database_creates_new() {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("test.db");

        init_database(&db_path, &[]).await.unwrap();

        assert!(db_path.exists());
    }

    #[tokio::test]
    async fn test_init_database_fails_if_exists() {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("test.db");

        init_database(&db_path, &[]).await.unwrap();

        let result = init_database(&db_path, &[]).await;
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("already exists"));
    }

    #[tokio::test]
    async fn test_init_database_imports_portfolios() {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("test.db");

        let created = init_database(&db_path, &[sample("Ada Lovelace"), sample("Grace Hopper")])
            .await
            .unwrap();
        assert_eq!(created.len(), 2);

        let db = Database::new(db_path.to_str()).await.unwrap();
        let store = PortfolioStore::new(db.pool().clone());
        let ada = store.get_by_slug("ada-lovelace").await.unwrap().unwrap();
        assert_eq!(ada.options, vec![json!({"themeId": "elegant"})]);
    }

    #[tokio::test]
    async fn test_init_database_rejects_bad_options() {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("test.db");

        let mut bad = sample("Ada Lovelace");
        bad.options = vec![json!(42)];
        let result = init_database(&db_path, &[bad]).await;
        assert!(result.unwrap_err().to_string().contains("Ada Lovelace"));
    }
}
