//! # Core Query Framework
//!
//! This module defines the request/response channel between clients and the query actor.
//!
//! ## Key Types
//!
//! - [`QueryRequest`]: The messages a client can send. Every variant is a read.
//! - [`QueryActor`]: The actor that owns the record store and answers requests.
//! - [`QueryClient`]: The cloneable handle for talking to the actor.
//! - [`FrameworkError`]: Channel failures plus store errors surfaced through them.

use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, warn};

use crate::model::{ListParams, Product, ProductStats};
use crate::query_actor::QueryService;
use crate::store::{RecordStore, StoreError};

// =============================================================================
// 1. THE MESSAGES & ERRORS
// =============================================================================

/// Errors that can occur between a client and the query actor.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

/// Type alias for the one-shot response channel used by the actor.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Message type sent to the query actor.
///
/// There are no write variants: the only way rows enter a store is seeding before the
/// actor starts, so nothing on this channel can mutate the catalog.
#[derive(Debug)]
pub enum QueryRequest {
    ListProducts {
        params: ListParams,
        respond_to: Response<Vec<Product>>,
    },
    LatestStats {
        respond_to: Response<Option<ProductStats>>,
    },
    HealthCheck {
        respond_to: Response<&'static str>,
    },
}

// =============================================================================
// 2. THE ACTOR SERVER
// =============================================================================

/// The actor that owns a record store and serves queries against it.
///
/// # Architecture Note
/// This struct is the "Server" half. It owns the store and the receiver end of the
/// channel and processes messages *sequentially*, so the store needs no `Mutex` and
/// a non-`Sync` handle such as a sqlite connection is fine.
pub struct QueryActor<S: RecordStore> {
    receiver: mpsc::Receiver<QueryRequest>,
    service: QueryService<S>,
}

impl<S: RecordStore> QueryActor<S> {
    /// Creates the actor and its client.
    ///
    /// `buffer_size` is the mailbox capacity; when it is full, client calls wait.
    pub fn new(store: S, buffer_size: usize) -> (Self, QueryClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            service: QueryService::new(store),
        };
        (actor, QueryClient::new(sender))
    }

    /// Runs the event loop until every client has been dropped.
    pub async fn run(mut self) {
        let store_type = std::any::type_name::<S>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(store_type, "Query actor started");

        let mut served: u64 = 0;
        while let Some(msg) = self.receiver.recv().await {
            served += 1;
            match msg {
                QueryRequest::ListProducts { params, respond_to } => {
                    debug!(limit = params.limit, offset = params.offset, "ListProducts");
                    let result = self.service.list_products(params).map_err(FrameworkError::from);
                    if let Err(e) = &result {
                        warn!(error = %e, "ListProducts failed");
                    }
                    let _ = respond_to.send(result);
                }
                QueryRequest::LatestStats { respond_to } => {
                    let result = self.service.latest_stats().map_err(FrameworkError::from);
                    match &result {
                        Ok(stats) => debug!(found = stats.is_some(), "LatestStats"),
                        Err(e) => warn!(error = %e, "LatestStats failed"),
                    }
                    let _ = respond_to.send(result);
                }
                QueryRequest::HealthCheck { respond_to } => {
                    debug!("HealthCheck");
                    let _ = respond_to.send(Ok(self.service.health_check()));
                }
            }
        }

        info!(store_type, served, "Shutdown");
    }
}

// =============================================================================
// 3. THE CLIENT
// =============================================================================

/// A cheap, cloneable handle for sending queries to a [`QueryActor`].
#[derive(Clone)]
pub struct QueryClient {
    sender: mpsc::Sender<QueryRequest>,
}

impl QueryClient {
    pub fn new(sender: mpsc::Sender<QueryRequest>) -> Self {
        Self { sender }
    }

    pub async fn list_products(&self, params: ListParams) -> Result<Vec<Product>, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(QueryRequest::ListProducts { params, respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn latest_stats(&self) -> Result<Option<ProductStats>, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(QueryRequest::LatestStats { respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn health_check(&self) -> Result<&'static str, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(QueryRequest::HealthCheck { respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }
}

// =============================================================================
// 4. EXAMPLE USAGE (Test)
// =============================================================================
