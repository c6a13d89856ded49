//! Keeps the search text input in sync with the list page URL.

use async_trait::async_trait;
use log::debug;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;
use tokio::sync::Mutex as AsyncMutex;
use tokio::task::JoinHandle;
use tokio::time::sleep;

/// Name of the query-string parameter carrying the search text.
pub const SEARCH_PARAM: &str = "search";

/// Capability to push a new URL onto the navigation history
#[async_trait]
pub trait Navigator: Send + Sync {
    /// Navigate to `path` with the already-encoded `query` string.
    async fn navigate(&self, path: &str, query: &str);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchStatus {
    /// No navigation outstanding
    Idle,
    /// A navigation derived from the latest query has not completed yet
    Pending,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchState {
    pub query: String,
    pub status: SearchStatus,
}

/// Query string for `query`, form-encoded. An empty query still yields
/// `search=`.
pub fn search_query_string(query: &str) -> String {
    url::form_urlencoded::Serializer::new(String::new())
        .append_pair(SEARCH_PARAM, query)
        .finish()
}

/// Full navigation target, `path?search=...`.
pub fn navigation_target(path: &str, query: &str) -> String {
    format!("{path}?{}", search_query_string(query))
}

/// Search input state machine.
///
/// Every input schedules exactly one navigation and supersedes the one
/// before it: the older task is aborted, and a generation check stops it
/// from navigating if it already got past the debounce delay. The check and
/// the navigation run under one lock, so a navigation that already started
/// always completes before a newer one begins.
pub struct SearchController<N: Navigator + 'static> {
    navigator: Arc<N>,
    path: String,
    debounce: Duration,
    state: Arc<Mutex<SearchState>>,
    generation: Arc<AtomicU64>,
    navigating: Arc<AsyncMutex<()>>,
    pending: Option<JoinHandle<()>>,
}

impl<N: Navigator + 'static> SearchController<N> {
    pub fn new(navigator: Arc<N>, path: impl Into<String>) -> Self {
        Self {
            navigator,
            path: path.into(),
            debounce: Duration::ZERO,
            state: Arc::new(Mutex::new(SearchState {
                query: String::new(),
                status: SearchStatus::Idle,
            })),
            generation: Arc::new(AtomicU64::new(0)),
            navigating: Arc::new(AsyncMutex::new(())),
            pending: None,
        }
    }

    /// Wait `debounce` after the last input before navigating.
    pub fn with_debounce(mut self, debounce: Duration) -> Self {
        self.debounce = debounce;
        self
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn state(&self) -> SearchState {
        self.state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Record new input text and schedule its navigation.
    ///
    /// Must be called from within a tokio runtime.
    pub fn on_input(&mut self, text: impl Into<String>) {
        let text = text.into();
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        if let Some(stale) = self.pending.take() {
            stale.abort();
        }

        {
            let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
            state.query = text.clone();
            state.status = SearchStatus::Pending;
        }

        let query = search_query_string(&text);
        debug!("Scheduling navigation to {}?{}", self.path, query);

        let navigator = Arc::clone(&self.navigator);
        let latest = Arc::clone(&self.generation);
        let navigating = Arc::clone(&self.navigating);
        let state = Arc::clone(&self.state);
        let path = self.path.clone();
        let debounce = self.debounce;

        self.pending = Some(tokio::spawn(async move {
            if !debounce.is_zero() {
                sleep(debounce).await;
            }

            let _navigating = navigating.lock().await;
            if latest.load(Ordering::SeqCst) != generation {
                debug!("Dropping superseded navigation to {}?{}", path, query);
                return;
            }

            navigator.navigate(&path, &query).await;

            if latest.load(Ordering::SeqCst) == generation {
                state
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner)
                    .status = SearchStatus::Idle;
            }
        }));
    }

    /// Wait for the outstanding navigation, if any, to finish.
    pub async fn settle(&mut self) {
        if let Some(pending) = self.pending.take() {
            // A cancelled task has nothing left to apply
            let _ = pending.await;
        }
    }
}

impl<N: Navigator + 'static> Drop for SearchController<N> {
    fn drop(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct RecordingNavigator {
        calls: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl Navigator for RecordingNavigator {
        async fn navigate(&self, path: &str, query: &str) {
            self.calls.lock().unwrap().push(format!("{path}?{query}"));
        }
    }

    #[test]
    fn test_navigation_target() {
        assert_eq!(navigation_target("/meals", "app"), "/meals?search=app");
        assert_eq!(navigation_target("/meals", ""), "/meals?search=");
        assert_eq!(
            navigation_target("/meals", "mac & cheese"),
            "/meals?search=mac+%26+cheese"
        );
    }

    #[tokio::test]
    async fn test_input_moves_through_pending_to_idle() {
        let navigator = Arc::new(RecordingNavigator {
            calls: Mutex::new(Vec::new()),
        });
        let mut controller = SearchController::new(navigator.clone(), "/meals");
        assert_eq!(controller.state().status, SearchStatus::Idle);

        controller.on_input("soup");
        assert_eq!(
            controller.state(),
            SearchState {
                query: "soup".to_string(),
                status: SearchStatus::Pending,
            }
        );

        controller.settle().await;
        assert_eq!(controller.state().status, SearchStatus::Idle);
        assert_eq!(*navigator.calls.lock().unwrap(), vec!["/meals?search=soup"]);
    }
}
