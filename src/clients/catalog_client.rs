//! # Catalog Client
//!
//! Typed access to the catalog through the [`Router`]. Every call goes over the
//! same JSON boundary an external caller would use, so validation and
//! serialization are exercised on each request.

use async_trait::async_trait;
use serde_json::json;
use tracing::{debug, instrument};

use crate::clients::{ClientError, PageSource};
use crate::framework::QueryClient;
use crate::model::{ListParams, Product, ProductStats, StatsEnvelope};
use crate::transport::{Procedure, Router};

/// Client for the catalog procedures.
#[derive(Clone)]
pub struct CatalogClient {
    router: Router,
}

impl CatalogClient {
    pub fn new(router: Router) -> Self {
        Self { router }
    }

    /// Builds a router over `client` and wraps it.
    pub fn from_query_client(client: QueryClient) -> Self {
        Self::new(Router::new(client))
    }

    #[instrument(skip(self))]
    pub async fn list_products(&self, params: ListParams) -> Result<Vec<Product>, ClientError> {
        debug!("Sending request");
        let input = json!({ "limit": params.limit, "offset": params.offset });
        let value = self
            .router
            .dispatch(Procedure::GetAllProducts, Some(input))
            .await?;
        Ok(serde_json::from_value(value)?)
    }

    #[instrument(skip(self))]
    pub async fn latest_stats(&self) -> Result<Option<ProductStats>, ClientError> {
        debug!("Sending request");
        let value = self
            .router
            .dispatch(Procedure::GetLatestProductStats, None)
            .await?;
        let envelope: StatsEnvelope = serde_json::from_value(value)?;
        Ok(envelope.stats)
    }

    #[instrument(skip(self))]
    pub async fn health_check(&self) -> Result<String, ClientError> {
        debug!("Sending request");
        let value = self.router.dispatch(Procedure::HealthCheck, None).await?;
        Ok(serde_json::from_value(value)?)
    }
}

#[async_trait]
impl PageSource for CatalogClient {
    async fn fetch_page(&self, params: ListParams) -> Result<Vec<Product>, ClientError> {
        self.list_products(params).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::{create_mock_client, expect_latest_stats, expect_list_products};
    use crate::framework::FrameworkError;
    use crate::store::seed;
    use crate::transport::TransportError;
    use chrono::Utc;

    #[tokio::test]
    async fn test_list_products_round_trips_through_json() {
        let (client, mut receiver) = create_mock_client(10);
        let catalog = CatalogClient::from_query_client(client);

        let list_task = tokio::spawn(async move { catalog.list_products(ListParams::new(50, 100)).await });

        let (params, responder) = expect_list_products(&mut receiver)
            .await
            .expect("Expected ListProducts request");
        assert_eq!(params, ListParams::new(50, 100));
        let rows = seed::demo_products(3);
        responder.send(Ok(rows.clone())).unwrap();

        let result = list_task.await.unwrap().unwrap();
        assert_eq!(result, rows);
    }

    #[tokio::test]
    async fn test_latest_stats_unwraps_envelope() {
        let (client, mut receiver) = create_mock_client(10);
        let catalog = CatalogClient::from_query_client(client);

        let stats_task = tokio::spawn(async move { catalog.latest_stats().await });

        let responder = expect_latest_stats(&mut receiver)
            .await
            .expect("Expected LatestStats request");
        let snapshot = seed::aggregate_stats(&seed::demo_products(5), 1, Utc::now());
        responder.send(Ok(Some(snapshot.clone()))).unwrap();

        let result = stats_task.await.unwrap().unwrap();
        assert_eq!(result, Some(snapshot));
    }

    #[tokio::test]
    async fn test_framework_errors_surface_as_transport_errors() {
        let (client, mut receiver) = create_mock_client(10);
        let catalog = CatalogClient::from_query_client(client);

        let list_task = tokio::spawn(async move { catalog.fetch_page(ListParams::new(10, 0)).await });

        let (_, responder) = expect_list_products(&mut receiver).await.unwrap();
        responder.send(Err(FrameworkError::ActorDropped)).unwrap();

        let result = list_task.await.unwrap();
        assert!(matches!(
            result,
            Err(ClientError::Transport(TransportError::Framework(FrameworkError::ActorDropped)))
        ));
    }
}
