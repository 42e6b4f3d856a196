//! # Transport Layer
//!
//! Exposes the query service by procedure name with JSON in and JSON out.
//!
//! | Procedure               | Input                    | Output                     |
//! |-------------------------|--------------------------|----------------------------|
//! | `healthCheck`           | none                     | `"OK"`                     |
//! | `getAllProducts`        | `{limit?, offset?}`      | `[Product, ...]`           |
//! | `getLatestProductStats` | none                     | `{"stats": Stats \| null}` |
//!
//! Input validation happens here and nowhere else: a negative, fractional or
//! out-of-range `limit`/`offset`, or an unknown field, is a
//! [`TransportError::Validation`] and never reaches the actor.

pub mod error;

pub use error::TransportError;

use std::fmt::Display;
use std::str::FromStr;

use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, instrument, warn};

use crate::framework::QueryClient;
use crate::model::{ListParams, StatsEnvelope, DEFAULT_LIMIT};

/// The procedures reachable through the transport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Procedure {
    HealthCheck,
    GetAllProducts,
    GetLatestProductStats,
}

impl Procedure {
    pub fn name(&self) -> &'static str {
        match self {
            Procedure::HealthCheck => "healthCheck",
            Procedure::GetAllProducts => "getAllProducts",
            Procedure::GetLatestProductStats => "getLatestProductStats",
        }
    }
}

impl Display for Procedure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Procedure {
    type Err = TransportError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "healthCheck" => Ok(Procedure::HealthCheck),
            "getAllProducts" => Ok(Procedure::GetAllProducts),
            "getLatestProductStats" => Ok(Procedure::GetLatestProductStats),
            other => Err(TransportError::UnknownProcedure(other.to_string())),
        }
    }
}

/// Raw `{limit?, offset?}` input, before range checks.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ProductsInput {
    limit: Option<i64>,
    offset: Option<i64>,
}

/// Validates the optional input object of `getAllProducts`.
///
/// `None` and JSON `null` both mean "use the defaults" (`limit = 20`, `offset = 0`).
pub fn parse_products_input(input: Option<Value>) -> Result<ListParams, TransportError> {
    let raw = match input {
        None | Some(Value::Null) => ProductsInput::default(),
        // serde would also read a struct from a sequence, so only objects get that far
        Some(value @ Value::Object(_)) => serde_json::from_value::<ProductsInput>(value)
            .map_err(|e| TransportError::Validation(e.to_string()))?,
        Some(_) => return Err(TransportError::Validation("input must be an object".to_string())),
    };

    let limit = match raw.limit {
        None => DEFAULT_LIMIT,
        Some(limit) => u32::try_from(limit)
            .map_err(|_| TransportError::Validation(format!("limit must be between 0 and {}, got {limit}", u32::MAX)))?,
    };
    let offset = match raw.offset {
        None => 0,
        Some(offset) => u64::try_from(offset)
            .map_err(|_| TransportError::Validation(format!("offset must be non-negative, got {offset}")))?,
    };

    Ok(ListParams { limit, offset })
}

/// Dispatches named procedures to the query actor.
#[derive(Clone)]
pub struct Router {
    client: QueryClient,
}

impl Router {
    pub fn new(client: QueryClient) -> Self {
        Self { client }
    }

    /// Calls `procedure` by name.
    pub async fn call(&self, procedure: &str, input: Option<Value>) -> Result<Value, TransportError> {
        let procedure = procedure.parse::<Procedure>().inspect_err(|e| {
            warn!(error = %e, "Rejected call");
        })?;
        self.dispatch(procedure, input).await
    }

    /// Calls an already-resolved procedure.
    #[instrument(skip(self, input), fields(procedure = %procedure))]
    pub async fn dispatch(&self, procedure: Procedure, input: Option<Value>) -> Result<Value, TransportError> {
        match procedure {
            Procedure::HealthCheck => {
                let status = self.client.health_check().await?;
                Ok(Value::String(status.to_string()))
            }
            Procedure::GetAllProducts => {
                let params = parse_products_input(input).inspect_err(|e| {
                    warn!(error = %e, "Rejected input");
                })?;
                debug!(limit = params.limit, offset = params.offset, "Dispatching");
                let products = self.client.list_products(params).await?;
                Ok(serde_json::to_value(products)?)
            }
            Procedure::GetLatestProductStats => {
                let stats = self.client.latest_stats().await?;
                Ok(serde_json::to_value(StatsEnvelope { stats })?)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::MockClient;
    use crate::store::seed;
    use serde_json::json;

    #[test]
    fn test_defaults_when_input_missing() {
        assert_eq!(parse_products_input(None).unwrap(), ListParams::new(20, 0));
        assert_eq!(parse_products_input(Some(Value::Null)).unwrap(), ListParams::new(20, 0));
        assert_eq!(parse_products_input(Some(json!({}))).unwrap(), ListParams::new(20, 0));
        assert_eq!(
            parse_products_input(Some(json!({"limit": 50}))).unwrap(),
            ListParams::new(50, 0)
        );
    }

    #[test]
    fn test_rejects_malformed_input() {
        for bad in [
            json!({"limit": -1}),
            json!({"offset": -5}),
            json!({"limit": 1.5}),
            json!({"limit": "10"}),
            json!({"cursor": "abc"}),
            json!([1, 2]),
            json!({"limit": 5_000_000_000_i64}),
        ] {
            let result = parse_products_input(Some(bad.clone()));
            assert!(
                matches!(result, Err(TransportError::Validation(_))),
                "expected validation error for {bad}"
            );
        }
    }

    #[test]
    fn test_positional_input_is_not_read_as_fields() {
        for bad in [json!([0, 7]), json!([]), json!(5), json!("limit=5"), json!(true)] {
            match parse_products_input(Some(bad.clone())) {
                Err(TransportError::Validation(msg)) => assert_eq!(msg, "input must be an object"),
                other => panic!("expected validation error for {bad}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_procedure_names_round_trip() {
        for procedure in [
            Procedure::HealthCheck,
            Procedure::GetAllProducts,
            Procedure::GetLatestProductStats,
        ] {
            assert_eq!(procedure.name().parse::<Procedure>().unwrap(), procedure);
        }
    }

    #[tokio::test]
    async fn test_router_dispatches_to_actor() {
        let mut mock = MockClient::new();
        mock.expect_health_check().return_ok();
        mock.expect_list_products()
            .with_params(ListParams::new(2, 4))
            .return_ok(seed::demo_products(2));
        mock.expect_latest_stats().return_ok(None);
        let router = Router::new(mock.client());

        assert_eq!(router.call("healthCheck", None).await.unwrap(), json!("OK"));

        let products = router
            .call("getAllProducts", Some(json!({"limit": 2, "offset": 4})))
            .await
            .unwrap();
        assert_eq!(products.as_array().unwrap().len(), 2);

        let stats = router.call("getLatestProductStats", None).await.unwrap();
        assert_eq!(stats, json!({"stats": null}));

        mock.verify();
    }

    #[tokio::test]
    async fn test_invalid_calls_never_reach_actor() {
        let mock = MockClient::new();
        let router = Router::new(mock.client());

        let unknown = router.call("deleteProduct", None).await;
        assert!(matches!(unknown, Err(TransportError::UnknownProcedure(_))));

        let negative = router
            .call("getAllProducts", Some(json!({"offset": -1})))
            .await;
        assert!(matches!(negative, Err(TransportError::Validation(_))));

        let positional = router.call("getAllProducts", Some(json!([0, 7]))).await;
        assert!(matches!(positional, Err(TransportError::Validation(_))));

        assert_eq!(mock.received(), 0);
    }
}
