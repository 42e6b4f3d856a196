use thiserror::Error;
use tracing::{error, info};

use crate::clients::CatalogClient;
use crate::config::{CatalogConfig, TableConfig};
use crate::framework::{QueryActor, QueryClient};
use crate::store::{seed, MemoryStore, RecordStore, SqliteStore, StoreError};
use crate::table::TableController;
use crate::transport::Router;

#[derive(Debug, Error)]
pub enum SystemError {
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("Actor task failed: {0}")]
    ActorTask(#[from] tokio::task::JoinError),
}

/// The running catalog: one query actor and the clients in front of it.
///
/// # Example
///
/// ```ignore
/// let system = CatalogSystem::from_config(&CatalogConfig::from_env()?)?;
///
/// let mut table = system.table();
/// table.initial_load();
/// table.pump().await;
///
/// drop(table);
/// system.shutdown().await?;
/// ```
pub struct CatalogSystem {
    /// Raw actor handle, below the transport.
    pub query_client: QueryClient,

    /// Procedure-name entry point.
    pub router: Router,

    /// Typed client over the router.
    pub catalog_client: CatalogClient,

    table_config: TableConfig,
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl CatalogSystem {
    /// Spawns a query actor over `store`.
    pub fn new<S: RecordStore>(store: S, buffer_size: usize, table_config: TableConfig) -> Self {
        let (actor, query_client) = QueryActor::new(store, buffer_size);
        let handle = tokio::spawn(actor.run());

        let router = Router::new(query_client.clone());
        let catalog_client = CatalogClient::new(router.clone());

        Self {
            query_client,
            router,
            catalog_client,
            table_config,
            handles: vec![handle],
        }
    }

    /// Opens the configured store, seeds it when empty, and starts the actor.
    pub fn from_config(config: &CatalogConfig) -> Result<Self, SystemError> {
        let system = match &config.db_path {
            Some(path) => {
                let mut store = SqliteStore::open(path)?;
                seed_if_empty(&mut store, config.seed_products)?;
                info!(path = %path.display(), "Serving sqlite store");
                Self::new(store, config.channel_buffer, config.table)
            }
            None => {
                let mut store = MemoryStore::new();
                seed_if_empty(&mut store, config.seed_products)?;
                info!("Serving in-memory store");
                Self::new(store, config.channel_buffer, config.table)
            }
        };
        Ok(system)
    }

    /// A fresh table over the typed client, not yet loaded.
    pub fn table(&self) -> TableController<CatalogClient> {
        TableController::new(self.catalog_client.clone(), self.table_config)
    }

    /// Drops every client held here and waits for the actor to drain.
    ///
    /// Tables hold their own client clone; drop them first or this waits for them.
    pub async fn shutdown(self) -> Result<(), SystemError> {
        info!("Shutting down system...");

        drop(self.catalog_client);
        drop(self.router);
        drop(self.query_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!(error = %e, "Actor task failed");
                return Err(e.into());
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}

fn seed_if_empty<S: RecordStore>(store: &mut S, count: usize) -> Result<(), StoreError> {
    if store.product_count()? == 0 {
        seed::populate(store, count, chrono::Utc::now())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ListParams;

    #[tokio::test]
    async fn test_from_config_seeds_memory_store() {
        let config = CatalogConfig {
            seed_products: 15,
            ..CatalogConfig::default()
        };
        let system = CatalogSystem::from_config(&config).unwrap();

        let page = system.catalog_client.list_products(ListParams::new(100, 0)).await.unwrap();
        assert_eq!(page.len(), 15);
        assert!(system.catalog_client.latest_stats().await.unwrap().is_some());

        system.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_sqlite_store_is_seeded_once() {
        let dir = tempfile::tempdir().unwrap();
        let config = CatalogConfig {
            db_path: Some(dir.path().join("catalog.db")),
            seed_products: 7,
            ..CatalogConfig::default()
        };

        let first = CatalogSystem::from_config(&config).unwrap();
        first.shutdown().await.unwrap();

        let second = CatalogSystem::from_config(&config).unwrap();
        let page = second.catalog_client.list_products(ListParams::new(100, 0)).await.unwrap();
        assert_eq!(page.len(), 7);
        second.shutdown().await.unwrap();
    }
}
