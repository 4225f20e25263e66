//! Mock Search Gateway for testing.
//!
//! Scripted results are consumed in order; the queries received are recorded
//! for verification. With an empty script, every call answers an empty list.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::ports::{SearchError, SearchGateway, SearchQuery};

/// A scripted outcome for one search call.
#[derive(Debug)]
pub enum MockSearchOutcome {
    Results(Vec<String>),
    Error(SearchError),
}

/// Configurable mock implementation of the SearchGateway port.
#[derive(Debug, Clone, Default)]
pub struct MockSearchGateway {
    outcomes: Arc<Mutex<VecDeque<MockSearchOutcome>>>,
    calls: Arc<Mutex<Vec<SearchQuery>>>,
}

impl MockSearchGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a successful result list.
    pub fn with_results(self, results: Vec<&str>) -> Self {
        self.outcomes
            .lock()
            .unwrap()
            .push_back(MockSearchOutcome::Results(
                results.into_iter().map(String::from).collect(),
            ));
        self
    }

    /// Queues an error outcome.
    pub fn with_error(self, error: SearchError) -> Self {
        self.outcomes
            .lock()
            .unwrap()
            .push_back(MockSearchOutcome::Error(error));
        self
    }

    /// Number of searches performed.
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// All queries received, in order.
    pub fn queries(&self) -> Vec<SearchQuery> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl SearchGateway for MockSearchGateway {
    async fn search(&self, query: SearchQuery) -> Result<Vec<String>, SearchError> {
        self.calls.lock().unwrap().push(query);

        match self.outcomes.lock().unwrap().pop_front() {
            Some(MockSearchOutcome::Results(results)) => Ok(results),
            Some(MockSearchOutcome::Error(error)) => Err(error),
            None => Ok(Vec::new()),
        }
    }
}
