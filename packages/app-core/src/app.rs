//! Composition root for the application core.

use std::sync::Arc;

use anyhow::{Context, Result};
use docstore::PgDocumentStore;
use tracing::info;

use crate::config::Config;
use crate::domains::events::EventRepository;
use crate::domains::signup::SignupFlow;
use crate::kernel::{AccountsClient, AppDeps};

/// The assembled application core handed to the UI shell.
pub struct AppCore {
    pub events: EventRepository,
    pub signup: SignupFlow,
}

impl AppCore {
    /// Connect the production dependencies and assemble the core.
    pub async fn from_config(config: &Config) -> Result<Self> {
        info!("Connecting to document store");
        let store = PgDocumentStore::connect(&config.database_url, config.database_max_connections)
            .await
            .context("Failed to connect to database")?;
        store
            .migrate()
            .await
            .context("Failed to run migrations")?;

        let accounts = AccountsClient::new(
            config.accounts_api_url.clone(),
            config.accounts_api_key.clone(),
        );

        Ok(Self::with_deps(AppDeps::new(
            Arc::new(store),
            Arc::new(accounts),
        )))
    }

    /// Assemble the core over injected dependencies (tests, local dev).
    pub fn with_deps(deps: AppDeps) -> Self {
        Self {
            events: EventRepository::new(deps.store),
            signup: SignupFlow::new(deps.accounts),
        }
    }
}
