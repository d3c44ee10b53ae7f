//! Mock thread/run client for testing the polling generator.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::ports::{
    AssistantThreads, RunId, RunState, RunStatus, ThreadError, ThreadId, ThreadMessage,
};

/// Scripted assistant threads.
///
/// Run statuses are served in order; the last one repeats. Without a
/// script every run completes on the first poll.
#[derive(Debug, Clone, Default)]
pub struct MockAssistantThreads {
    statuses: Arc<Mutex<VecDeque<RunState>>>,
    messages: Vec<ThreadMessage>,
    failure: Option<ThreadError>,
    log: Arc<Mutex<CallLog>>,
}

#[derive(Debug, Default)]
struct CallLog {
    posted: Vec<String>,
    assistants: Vec<String>,
    polls: usize,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl MockAssistantThreads {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_statuses(self, statuses: Vec<RunState>) -> Self {
        *lock(&self.statuses) = statuses.into();
        self
    }

    /// Messages returned by `list_messages`, newest first.
    pub fn with_messages(mut self, messages: Vec<ThreadMessage>) -> Self {
        self.messages = messages;
        self
    }

    /// Makes thread creation fail.
    pub fn failing_with(mut self, error: ThreadError) -> Self {
        self.failure = Some(error);
        self
    }

    pub fn posted_messages(&self) -> Vec<String> {
        lock(&self.log).posted.clone()
    }

    pub fn started_assistants(&self) -> Vec<String> {
        lock(&self.log).assistants.clone()
    }

    pub fn status_polls(&self) -> usize {
        lock(&self.log).polls
    }
}

#[async_trait]
impl AssistantThreads for MockAssistantThreads {
    async fn create_thread(&self) -> Result<ThreadId, ThreadError> {
        match &self.failure {
            Some(err) => Err(err.clone()),
            None => Ok(ThreadId::new("thread_mock")),
        }
    }

    async fn post_message(&self, _thread: &ThreadId, content: &str) -> Result<(), ThreadError> {
        lock(&self.log).posted.push(content.to_string());
        Ok(())
    }

    async fn start_run(&self, _thread: &ThreadId, assistant_id: &str) -> Result<RunId, ThreadError> {
        lock(&self.log).assistants.push(assistant_id.to_string());
        Ok(RunId::new("run_mock"))
    }

    async fn run_status(&self, _thread: &ThreadId, _run: &RunId) -> Result<RunState, ThreadError> {
        lock(&self.log).polls += 1;
        let mut statuses = lock(&self.statuses);
        let state = if statuses.len() > 1 {
            statuses.pop_front()
        } else {
            statuses.front().cloned()
        };
        Ok(state.unwrap_or_else(|| RunState::new(RunStatus::Completed)))
    }

    async fn list_messages(&self, _thread: &ThreadId) -> Result<Vec<ThreadMessage>, ThreadError> {
        Ok(self.messages.clone())
    }
}
