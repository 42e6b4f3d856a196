//! # Mock Framework
//!
//! Utilities for testing code that sits on top of a [`QueryClient`] without a real actor.
//!
//! Two styles are available:
//!
//! - [`create_mock_client`] hands back the raw receiver. Tests pull requests off it with
//!   [`expect_list_products`] and friends and answer them whenever they like, which is how
//!   a request is held "in flight" while the test pokes at the caller.
//! - [`MockClient`] answers from a queue of expectations set up front with a fluent API.

use crate::framework::{FrameworkError, QueryClient, QueryRequest, Response};
use crate::model::{ListParams, Product, ProductStats};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// Represents an expected request to the mock client.
enum Expectation {
    ListProducts {
        params: Option<ListParams>,
        response: Result<Vec<Product>, FrameworkError>,
    },
    LatestStats {
        response: Result<Option<ProductStats>, FrameworkError>,
    },
    HealthCheck {
        response: Result<&'static str, FrameworkError>,
    },
}

type Expectations = Arc<Mutex<VecDeque<Expectation>>>;

/// A mock client with expectation tracking for fluent testing.
///
/// # Example
/// ```ignore
/// let mut mock = MockClient::new();
/// mock.expect_list_products().with_params(ListParams::new(50, 0)).return_ok(rows);
/// mock.expect_latest_stats().return_ok(None);
///
/// let client = mock.client();
/// // Use client in tests...
/// mock.verify(); // Ensures all expectations were met
/// ```
pub struct MockClient {
    client: QueryClient,
    expectations: Expectations,
    received: Arc<Mutex<usize>>,
    _handle: tokio::task::JoinHandle<()>,
}

impl MockClient {
    /// Creates a new mock client with no expectations.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<QueryRequest>(100);
        let expectations: Expectations = Arc::new(Mutex::new(VecDeque::new()));
        let received = Arc::new(Mutex::new(0usize));
        let expectations_clone = expectations.clone();
        let received_clone = received.clone();

        // Spawn background task to handle requests
        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                *received_clone.lock().unwrap() += 1;
                let expectation = expectations_clone.lock().unwrap().pop_front();

                match (request, expectation) {
                    (
                        QueryRequest::ListProducts { params, respond_to },
                        Some(Expectation::ListProducts { params: expected, response }),
                    ) => {
                        if let Some(expected) = expected {
                            assert_eq!(params, expected, "ListProducts called with unexpected params");
                        }
                        let _ = respond_to.send(response);
                    }
                    (QueryRequest::LatestStats { respond_to }, Some(Expectation::LatestStats { response })) => {
                        let _ = respond_to.send(response);
                    }
                    (QueryRequest::HealthCheck { respond_to }, Some(Expectation::HealthCheck { response })) => {
                        let _ = respond_to.send(response);
                    }
                    _ => {
                        panic!("Unexpected request or expectation mismatch");
                    }
                }
            }
        });

        Self {
            client: QueryClient::new(sender),
            expectations,
            received,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> QueryClient {
        self.client.clone()
    }

    /// Expects a `list_products` request.
    pub fn expect_list_products(&mut self) -> ListProductsExpectationBuilder {
        ListProductsExpectationBuilder {
            params: None,
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a `latest_stats` request.
    pub fn expect_latest_stats(&mut self) -> LatestStatsExpectationBuilder {
        LatestStatsExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a `health_check` request.
    pub fn expect_health_check(&mut self) -> HealthCheckExpectationBuilder {
        HealthCheckExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Number of requests the mock has received so far.
    pub fn received(&self) -> usize {
        *self.received.lock().unwrap()
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let exps = self.expectations.lock().unwrap();
        if !exps.is_empty() {
            panic!("Not all expectations were met. {} remaining", exps.len());
        }
    }
}

impl Default for MockClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for `list_products` expectations.
pub struct ListProductsExpectationBuilder {
    params: Option<ListParams>,
    expectations: Expectations,
}

impl ListProductsExpectationBuilder {
    /// Asserts the request carries exactly these params.
    pub fn with_params(mut self, params: ListParams) -> Self {
        self.params = Some(params);
        self
    }

    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, products: Vec<Product>) {
        self.expectations.lock().unwrap().push_back(Expectation::ListProducts {
            params: self.params,
            response: Ok(products),
        });
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: FrameworkError) {
        self.expectations.lock().unwrap().push_back(Expectation::ListProducts {
            params: self.params,
            response: Err(error),
        });
    }
}

/// Builder for `latest_stats` expectations.
pub struct LatestStatsExpectationBuilder {
    expectations: Expectations,
}

impl LatestStatsExpectationBuilder {
    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, stats: Option<ProductStats>) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::LatestStats { response: Ok(stats) });
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: FrameworkError) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::LatestStats { response: Err(error) });
    }
}

/// Builder for `health_check` expectations.
pub struct HealthCheckExpectationBuilder {
    expectations: Expectations,
}

impl HealthCheckExpectationBuilder {
    pub fn return_ok(self) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::HealthCheck { response: Ok("OK") });
    }
}

// =============================================================================
// MANUAL HELPERS
// =============================================================================

/// Creates a client and the receiver its requests arrive on.
///
/// # Testing Strategy
/// Nothing answers the requests until the test does. That makes it possible to
/// observe the caller while a request is still pending, and to count exactly how many
/// requests were issued.
pub fn create_mock_client(buffer_size: usize) -> (QueryClient, mpsc::Receiver<QueryRequest>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (QueryClient::new(sender), receiver)
}

/// Helper to verify that the next message is a ListProducts request
pub async fn expect_list_products(
    receiver: &mut mpsc::Receiver<QueryRequest>,
) -> Option<(ListParams, Response<Vec<Product>>)> {
    match receiver.recv().await {
        Some(QueryRequest::ListProducts { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a LatestStats request
pub async fn expect_latest_stats(
    receiver: &mut mpsc::Receiver<QueryRequest>,
) -> Option<Response<Option<ProductStats>>> {
    match receiver.recv().await {
        Some(QueryRequest::LatestStats { respond_to }) => Some(respond_to),
        _ => None,
    }
}
