//! Load state of a data-backed widget and the generation guard that keeps
//! late responses from overwriting newer ones.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::shared::api_utils::ApiError;

/// `Idle -> Loading -> (Success | Error)`, back to `Loading` on every
/// input change.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LoadState<T> {
    #[default]
    Idle,
    Loading,
    Success(T),
    Error(ApiError),
}

impl<T> LoadState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            LoadState::Success(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&ApiError> {
        match self {
            LoadState::Error(e) => Some(e),
            _ => None,
        }
    }

    pub fn from_result(result: Result<T, ApiError>) -> Self {
        match result {
            Ok(data) => LoadState::Success(data),
            Err(e) => LoadState::Error(e),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> LoadState<U> {
        match self {
            LoadState::Idle => LoadState::Idle,
            LoadState::Loading => LoadState::Loading,
            LoadState::Success(data) => LoadState::Success(f(data)),
            LoadState::Error(e) => LoadState::Error(e),
        }
    }
}

/// Monotonic request counter shared by one widget.
#[derive(Debug, Clone, Default)]
pub struct GenerationCounter(Arc<AtomicU64>);

/// Issued per request; only the most recent ticket is current.
#[derive(Debug, Clone)]
pub struct RequestTicket {
    generation: u64,
    counter: GenerationCounter,
}

impl GenerationCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_ticket(&self) -> RequestTicket {
        let generation = self.0.fetch_add(1, Ordering::SeqCst) + 1;
        RequestTicket {
            generation,
            counter: self.clone(),
        }
    }

    /// Makes every outstanding ticket stale. Called when the owning
    /// component unmounts.
    pub fn invalidate(&self) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }

    pub fn current(&self) -> u64 {
        self.0.load(Ordering::SeqCst)
    }
}

impl RequestTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_current(&self) -> bool {
        self.counter.current() == self.generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_newer_ticket_makes_older_stale() {
        let counter = GenerationCounter::new();
        let first = counter.next_ticket();
        assert!(first.is_current());

        let second = counter.next_ticket();
        assert!(!first.is_current());
        assert!(second.is_current());
        assert!(second.generation() > first.generation());
    }

    #[test]
    fn test_invalidate_discards_in_flight_request() {
        let counter = GenerationCounter::new();
        let ticket = counter.next_ticket();
        counter.clone().invalidate();
        assert!(!ticket.is_current());
    }

    #[test]
    fn test_load_state_accessors() {
        let loading: LoadState<Vec<u32>> = LoadState::Loading;
        assert!(loading.is_loading());
        assert_eq!(loading.data(), None);

        let ok = LoadState::from_result(Ok::<_, ApiError>(vec![1, 2]));
        assert_eq!(ok.data(), Some(&vec![1, 2]));
        assert_eq!(ok.clone().map(|v| v.len()), LoadState::Success(2));

        let err: LoadState<Vec<u32>> = LoadState::from_result(Err(ApiError::Forbidden));
        assert_eq!(err.error(), Some(&ApiError::Forbidden));
        assert!(!err.is_loading());
        assert_eq!(LoadState::<u8>::default(), LoadState::Idle);
    }
}
