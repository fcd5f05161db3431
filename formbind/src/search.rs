//! Async search sessions with stale-response discarding.
//!
//! Searchable controls consume an async collaborator:
//! `search(query) -> future of choices`. The session is the explicit
//! `idle -> loading -> ready | failed` machine around that call. Each
//! `begin` bumps a generation counter; a response resolving against an
//! older generation is discarded, so rapid typing can never paint stale
//! results over newer ones. Retries belong to the caller.

use std::fmt;
use std::future::Future;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

use serde::{Deserialize, Serialize};

/// One selectable search result, in the `{label, value}` shape the
/// search collaborator returns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    pub label: String,
    pub value: String,
}

impl Choice {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Where a search session currently stands.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SearchPhase {
    /// No search issued yet.
    #[default]
    Idle,
    /// A request is in flight; hosts show the loading indicator.
    Loading,
    /// Results arrived.
    Ready(Vec<Choice>),
    /// The request failed; hosts show the inline error message next to
    /// an empty list. The rest of the UI stays interactive.
    Failed(String),
}

impl SearchPhase {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    /// The visible choices; empty unless results arrived.
    pub fn choices(&self) -> &[Choice] {
        match self {
            Self::Ready(choices) => choices,
            _ => &[],
        }
    }

    /// The inline error message, if the last request failed.
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// Ticket identifying one issued search request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchTicket {
    generation: u64,
}

/// Internal state for a search session.
#[derive(Debug, Default)]
struct SearchInner {
    phase: SearchPhase,
    query: String,
}

/// State machine for a searchable control's async collaborator.
pub struct SearchSession {
    inner: Arc<RwLock<SearchInner>>,
    generation: Arc<AtomicU64>,
    dirty: Arc<AtomicBool>,
}

impl SearchSession {
    /// Create an idle session.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(SearchInner::default())),
            generation: Arc::new(AtomicU64::new(0)),
            dirty: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Current phase.
    pub fn phase(&self) -> SearchPhase {
        self.inner
            .read()
            .map(|g| g.phase.clone())
            .unwrap_or_default()
    }

    /// The query of the most recent `begin`.
    pub fn query(&self) -> String {
        self.inner
            .read()
            .map(|g| g.query.clone())
            .unwrap_or_default()
    }

    /// Begin a new search, superseding any in-flight request. The
    /// session goes to loading; the returned ticket must accompany the
    /// eventual result.
    pub fn begin(&self, query: impl Into<String>) -> SearchTicket {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        if let Ok(mut guard) = self.inner.write() {
            guard.phase = SearchPhase::Loading;
            guard.query = query.into();
            self.dirty.store(true, Ordering::SeqCst);
        }
        SearchTicket { generation }
    }

    /// Whether a ticket still belongs to the in-flight request.
    pub fn is_current(&self, ticket: SearchTicket) -> bool {
        ticket.generation == self.generation.load(Ordering::SeqCst)
    }

    /// Apply a result for the given ticket. A superseded ticket is
    /// discarded and the session state stays untouched; returns whether
    /// the result was applied.
    pub fn resolve(&self, ticket: SearchTicket, result: Result<Vec<Choice>, String>) -> bool {
        if !self.is_current(ticket) {
            log::debug!(
                "discarding stale search response (generation {})",
                ticket.generation
            );
            return false;
        }
        if let Ok(mut guard) = self.inner.write() {
            guard.phase = match result {
                Ok(choices) => SearchPhase::Ready(choices),
                Err(message) => SearchPhase::Failed(message),
            };
            self.dirty.store(true, Ordering::SeqCst);
        }
        true
    }

    /// Abandon any in-flight request and return to idle.
    pub fn cancel(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut guard) = self.inner.write() {
            guard.phase = SearchPhase::Idle;
            guard.query.clear();
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Drive one search round trip with the ticket discipline. The
    /// collaborator's failure is caught and surfaced inline; it never
    /// propagates. Returns whether the response was applied (a
    /// superseded one is not).
    pub async fn run<F, Fut, E>(&self, query: impl Into<String>, search: F) -> bool
    where
        F: FnOnce(String) -> Fut,
        Fut: Future<Output = Result<Vec<Choice>, E>>,
        E: fmt::Display,
    {
        let query = query.into();
        let ticket = self.begin(query.clone());
        let result = search(query).await.map_err(|err| err.to_string());
        self.resolve(ticket, result)
    }

    // -------------------------------------------------------------------------
    // Dirty tracking
    // -------------------------------------------------------------------------

    /// Check if the session state has changed.
    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    /// Clear the dirty flag.
    pub fn clear_dirty(&self) {
        self.dirty.store(false, Ordering::SeqCst)
    }
}

impl fmt::Debug for SearchSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchSession")
            .field("generation", &self.generation.load(Ordering::SeqCst))
            .field("phase", &self.phase())
            .finish()
    }
}

impl Default for SearchSession {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for SearchSession {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            generation: Arc::clone(&self.generation),
            dirty: Arc::clone(&self.dirty),
        }
    }
}
