//! Mock structured generator for handler and router tests.

use async_trait::async_trait;
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::ports::{GenerationError, StructuredGenerator, StructuredRequest};

/// Returns queued results in order, then empty arrays.
#[derive(Debug, Clone, Default)]
pub struct MockStructuredGenerator {
    results: Arc<Mutex<VecDeque<Result<Vec<Value>, GenerationError>>>>,
    calls: Arc<Mutex<Vec<StructuredRequest>>>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl MockStructuredGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_items(self, items: Vec<Value>) -> Self {
        lock(&self.results).push_back(Ok(items));
        self
    }

    pub fn with_error(self, error: GenerationError) -> Self {
        lock(&self.results).push_back(Err(error));
        self
    }

    pub fn call_count(&self) -> usize {
        lock(&self.calls).len()
    }

    pub fn get_calls(&self) -> Vec<StructuredRequest> {
        lock(&self.calls).clone()
    }
}

#[async_trait]
impl StructuredGenerator for MockStructuredGenerator {
    async fn generate(&self, request: StructuredRequest) -> Result<Vec<Value>, GenerationError> {
        lock(&self.calls).push(request);
        lock(&self.results).pop_front().unwrap_or_else(|| Ok(Vec::new()))
    }
}
