use tokio::sync::oneshot;
use tracing::{debug, info, info_span, warn, Instrument};

use crate::clients::{ClientError, PageSource};
use crate::config::TableConfig;
use crate::model::{ListParams, Product};
use crate::table::virtualizer::{self, VirtualItem, VisibleRange};
use crate::table::TableError;

/// Height of the marker placed after the last loaded row.
pub const SENTINEL_HEIGHT: f64 = 16.0;

/// Which load a pending fetch belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchKind {
    Initial,
    NextPage,
}

/// What [`TableController::pump`] did with a finished fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    Loaded {
        page_len: usize,
        total_loaded: usize,
        has_more: bool,
    },
    /// The controller was unmounted before the fetch finished.
    Discarded,
}

type FetchOutcome = Result<Vec<Product>, ClientError>;

struct InFlight {
    kind: FetchKind,
    offset: u64,
    receiver: oneshot::Receiver<FetchOutcome>,
}

/// Owns the loaded pages of the product table and decides when to fetch more.
///
/// Fetches run on their own tasks. Their outcomes come back over a oneshot and are
/// only applied by [`pump`](Self::pump), so every state change happens on the task
/// that owns the controller. At most one fetch is in flight at a time.
pub struct TableController<S: PageSource> {
    source: S,
    config: TableConfig,
    pages: Vec<Vec<Product>>,
    has_more: bool,
    mounted: bool,
    initial_loaded: bool,
    in_flight: Option<InFlight>,
    scroll_offset: f64,
    last_error: Option<String>,
}

impl<S: PageSource> TableController<S> {
    pub fn new(source: S, config: TableConfig) -> Self {
        Self {
            source,
            config,
            pages: Vec::new(),
            has_more: false,
            mounted: true,
            initial_loaded: false,
            in_flight: None,
            scroll_offset: 0.0,
            last_error: None,
        }
    }

    /// Requests the first page. Returns `false` if it is already loaded or pending.
    pub fn initial_load(&mut self) -> bool {
        if !self.mounted || self.initial_loaded || self.in_flight.is_some() {
            return false;
        }
        self.spawn_fetch(FetchKind::Initial, 0);
        true
    }

    /// Requests the page after everything loaded so far.
    ///
    /// A no-op returning `false` while any fetch is pending or when the last page
    /// came back short.
    pub fn fetch_next_page(&mut self) -> bool {
        if !self.mounted || self.in_flight.is_some() || !self.has_more {
            return false;
        }
        let offset = self.loaded_count() as u64;
        self.spawn_fetch(FetchKind::NextPage, offset);
        true
    }

    pub fn on_sentinel_visible(&mut self) -> bool {
        self.fetch_next_page()
    }

    /// Moves the viewport, and asks for the next page if the sentinel scrolled into view.
    pub fn on_scroll(&mut self, scroll_offset: f64) -> bool {
        self.scroll_offset = if scroll_offset.is_nan() { 0.0 } else { scroll_offset.max(0.0) };
        self.sentinel_visible() && self.on_sentinel_visible()
    }

    /// Whether the sentinel intersects the current viewport.
    pub fn sentinel_visible(&self) -> bool {
        let top = self.loaded_count() as f64 * self.config.row_height;
        let bottom = top + SENTINEL_HEIGHT;
        let view_top = self.scroll_offset;
        let view_bottom = view_top + self.config.viewport_height;
        top < view_bottom && bottom > view_top
    }

    /// Waits for the pending fetch and applies its outcome.
    ///
    /// Returns `None` when nothing is in flight. Dropping the returned future
    /// before it resolves leaves the fetch pending.
    pub async fn pump(&mut self) -> Option<Result<Completion, TableError>> {
        let in_flight = self.in_flight.as_mut()?;
        let (kind, offset) = (in_flight.kind, in_flight.offset);
        let outcome = (&mut in_flight.receiver).await;
        self.in_flight = None;

        Some(self.apply(kind, offset, outcome))
    }

    /// Tears the controller down. Fetches still running finish, but their outcomes are dropped.
    pub fn unmount(&mut self) {
        if self.mounted {
            debug!(pending = self.in_flight.is_some(), "Table unmounted");
        }
        self.mounted = false;
    }

    fn spawn_fetch(&mut self, kind: FetchKind, offset: u64) {
        let (tx, rx) = oneshot::channel();
        let params = ListParams::new(self.config.page_size, offset);
        let source = self.source.clone();

        self.in_flight = Some(InFlight {
            kind,
            offset,
            receiver: rx,
        });
        debug!(?kind, offset, limit = params.limit, "Fetching page");

        let span = info_span!("fetch_page", offset, limit = params.limit);
        tokio::spawn(
            async move {
                let outcome = source.fetch_page(params).await;
                // receiver gone means the controller was dropped
                let _ = tx.send(outcome);
            }
            .instrument(span),
        );
    }

    fn apply(
        &mut self,
        kind: FetchKind,
        offset: u64,
        outcome: Result<FetchOutcome, oneshot::error::RecvError>,
    ) -> Result<Completion, TableError> {
        if !self.mounted {
            debug!(?kind, offset, "Discarding outcome after unmount");
            return Ok(Completion::Discarded);
        }

        match outcome {
            Ok(Ok(page)) => {
                let page_len = page.len();
                self.has_more = page_len > 0 && page_len == self.config.page_size as usize;
                self.pages.push(page);
                self.initial_loaded = true;
                self.last_error = None;

                let total_loaded = self.loaded_count();
                info!(?kind, offset, page_len, total_loaded, has_more = self.has_more, "Page loaded");
                Ok(Completion::Loaded {
                    page_len,
                    total_loaded,
                    has_more: self.has_more,
                })
            }
            Ok(Err(source)) => {
                warn!(?kind, offset, error = %source, "Fetch failed");
                self.last_error = Some(source.to_string());
                Err(TableError::Fetch { offset, source })
            }
            Err(_) => {
                warn!(?kind, offset, "Fetch task ended without an outcome");
                self.last_error = Some(TableError::FetchAborted.to_string());
                Err(TableError::FetchAborted)
            }
        }
    }

    // =========================================================================
    // Read-only view
    // =========================================================================

    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    pub fn pages(&self) -> &[Vec<Product>] {
        &self.pages
    }

    /// All loaded products, in fetch order.
    pub fn products(&self) -> impl Iterator<Item = &Product> {
        self.pages.iter().flatten()
    }

    pub fn loaded_count(&self) -> usize {
        self.pages.iter().map(Vec::len).sum()
    }

    pub fn has_more(&self) -> bool {
        self.has_more
    }

    /// True while the first page is pending.
    pub fn is_loading(&self) -> bool {
        matches!(&self.in_flight, Some(f) if f.kind == FetchKind::Initial)
    }

    /// True while a page after the first is pending.
    pub fn is_fetching_next(&self) -> bool {
        matches!(&self.in_flight, Some(f) if f.kind == FetchKind::NextPage)
    }

    pub fn is_initial_loaded(&self) -> bool {
        self.initial_loaded
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Message of the most recent failed fetch, cleared by the next success.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn scroll_offset(&self) -> f64 {
        self.scroll_offset
    }

    pub fn visible_range(&self) -> Option<VisibleRange> {
        virtualizer::visible_range(
            self.scroll_offset,
            self.config.viewport_height,
            self.config.row_height,
            self.config.overscan,
            self.loaded_count(),
        )
    }

    pub fn virtual_items(&self) -> Vec<VirtualItem> {
        self.visible_range()
            .map(|range| virtualizer::virtual_items(range, self.config.row_height))
            .unwrap_or_default()
    }

    pub fn total_size(&self) -> f64 {
        virtualizer::total_size(self.loaded_count(), self.config.row_height)
    }
}
