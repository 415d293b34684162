//! Common test utilities - FolioTest harness for end-to-end testing

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use folio::{Config, Server};
use reqwest::Client;
use serde_json::Value;
use tokio::task::JoinHandle;

/// Test harness that spawns a real folio server on a random port
pub struct FolioTest {
    pub addr: SocketAddr,
    pub client: Client,
    server: Arc<Server>,
    _handle: JoinHandle<()>,
}

impl FolioTest {
    /// Start a new test server instance
    pub async fn start() -> Result<Self> {
        Self::start_with(Config::default()).await
    }

    /// Start with a custom config; the bind address is always replaced
    pub async fn start_with(mut config: Config) -> Result<Self> {
        // Find a random available port
        let listener = std::net::TcpListener::bind("127.0.0.1:0")?;
        let addr = listener.local_addr()?;
        drop(listener);

        config.bind_addr = addr;
        config.db_path = None; // In-memory for tests

        let server = Arc::new(Server::new(config).await?);
        let server_clone = server.clone();

        // Spawn the server in a background task
        let handle = tokio::spawn(async move {
            if let Err(e) = server_clone.run().await {
                eprintln!("Server error: {}", e);
            }
        });

        let client = Client::builder().timeout(Duration::from_secs(5)).build()?;

        // Poll until server is ready (max 2 seconds)
        let mut ready = false;
        for _ in 0..20 {
            tokio::time::sleep(Duration::from_millis(100)).await;
            if client
                .get(format!("http://{}/health", addr))
                .send()
                .await
                .is_ok()
            {
                ready = true;
                break;
            }
        }

        if !ready {
            panic!("Server failed to start within 2 seconds");
        }

        Ok(Self {
            addr,
            client,
            server,
            _handle: handle,
        })
    }

    /// Get the base URL for the server
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> Result<reqwest::Response> {
        Ok(self
            .client
            .get(format!("{}{}", self.base_url(), path))
            .send()
            .await?)
    }

    /// Make a POST request with JSON body
    pub async fn post<T: serde::Serialize + ?Sized>(
        &self,
        path: &str,
        body: &T,
    ) -> Result<reqwest::Response> {
        Ok(self
            .client
            .post(format!("{}{}", self.base_url(), path))
            .json(body)
            .send()
            .await?)
    }

    /// Make a PATCH request with JSON body
    pub async fn patch<T: serde::Serialize + ?Sized>(
        &self,
        path: &str,
        body: &T,
    ) -> Result<reqwest::Response> {
        Ok(self
            .client
            .patch(format!("{}{}", self.base_url(), path))
            .json(body)
            .send()
            .await?)
    }

    /// Get direct access to the database for test setup/assertions
    pub fn db(&self) -> Arc<folio::db::Database> {
        self.server.db()
    }

    /// Shutdown the server gracefully
    pub fn shutdown(&self) {
        self.server.shutdown();
    }

    /// Create a portfolio through the API and return its stored form
    pub async fn create_portfolio(&self, body: &Value) -> Result<Value> {
        let resp = self.post("/portfolios", body).await?;
        anyhow::ensure!(
            resp.status() == 201,
            "create portfolio failed: {}",
            resp.status()
        );
        Ok(resp.json().await?)
    }

    /// Insert a raw options row, bypassing payload normalisation
    pub async fn insert_raw_options(&self, portfolio_id: &str, payload: &str) -> Result<()> {
        sqlx::query("INSERT INTO portfolio_options (portfolio_id, payload) VALUES (?, ?)")
            .bind(portfolio_id)
            .bind(payload)
            .execute(self.db().pool())
            .await?;
        Ok(())
    }
}

impl Drop for FolioTest {
    fn drop(&mut self) {
        self.shutdown();
    }
}

/// A portfolio body with every content section filled
pub fn sample_portfolio(name: &str) -> Value {
    serde_json::json!({
        "content": {
            "name": name,
            "headline": "Software Engineer",
            "bio": "Builds compilers and writes about them.",
            "email": "hello@example.com",
            "location": "Berlin"
        },
        "experiences": [
            {"company": "Acme", "role": "Engineer", "startDate": "2019", "endDate": "2023", "description": "Shipped things."}
        ],
        "educations": [
            {"school": "TU Berlin", "degree": "MSc", "field": "Computer Science", "startDate": "2014", "endDate": "2016"}
        ],
        "skills": [
            {"name": "Rust", "level": 90, "category": "Languages"},
            {"name": "SQL", "level": 70}
        ],
        "projects": [
            {"title": "Parser", "description": "A fast parser", "url": "https://example.com/parser", "tags": ["rust"]}
        ],
        "socials": [
            {"platform": "GitHub", "url": "https://github.com/example"}
        ]
    })
}
