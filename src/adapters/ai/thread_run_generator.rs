//! Structured generation through the assistant thread/run protocol.
//!
//! Flow: create thread, post instruction, start a run against the
//! assistant for the generation kind, poll until terminal, read the newest
//! assistant text and extract the first JSON array from it.

use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::{sleep, Instant};

use crate::domain::generation::extract_json_array;
use crate::ports::{
    AssistantThreads, GenerationError, GenerationKind, MessageRole, RunId, RunState,
    StructuredGenerator, StructuredRequest, ThreadId,
};

/// How often and how long to poll a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollPolicy {
    pub interval: Duration,
    pub max_wait: Duration,
}

impl PollPolicy {
    pub fn new(interval: Duration, max_wait: Duration) -> Self {
        Self { interval, max_wait }
    }
}

impl Default for PollPolicy {
    fn default() -> Self {
        Self::new(Duration::from_secs(1), Duration::from_secs(180))
    }
}

/// Assistant identities per generation kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssistantIds {
    pub itinerary: String,
    pub checklist: String,
}

impl AssistantIds {
    pub fn for_kind(&self, kind: GenerationKind) -> &str {
        match kind {
            GenerationKind::Itinerary => &self.itinerary,
            GenerationKind::Checklist => &self.checklist,
        }
    }
}

/// Generator backed by preconfigured assistants.
pub struct ThreadRunStructuredGenerator {
    threads: Arc<dyn AssistantThreads>,
    assistants: AssistantIds,
    poll: PollPolicy,
}

impl ThreadRunStructuredGenerator {
    pub fn new(threads: Arc<dyn AssistantThreads>, assistants: AssistantIds, poll: PollPolicy) -> Self {
        Self {
            threads,
            assistants,
            poll,
        }
    }

    /// Polls until the run is terminal or the wait budget is spent.
    async fn wait_for_run(&self, thread: &ThreadId, run: &RunId) -> Result<RunState, GenerationError> {
        let started = Instant::now();
        loop {
            sleep(self.poll.interval).await;
            let state = self.threads.run_status(thread, run).await?;
            tracing::debug!(thread = %thread, run = %run, status = %state.status, "polled run");

            if state.status.is_terminal() {
                return Ok(state);
            }
            if started.elapsed() >= self.poll.max_wait {
                return Err(GenerationError::Timeout {
                    waited_secs: self.poll.max_wait.as_secs(),
                });
            }
        }
    }
}

#[async_trait]
impl StructuredGenerator for ThreadRunStructuredGenerator {
    async fn generate(&self, request: StructuredRequest) -> Result<Vec<Value>, GenerationError> {
        let assistant_id = self.assistants.for_kind(request.kind);

        let thread = self.threads.create_thread().await?;
        self.threads.post_message(&thread, &request.instruction).await?;
        let run = self.threads.start_run(&thread, assistant_id).await?;
        tracing::info!(kind = %request.kind, thread = %thread, run = %run, "assistant run started");

        let state = self.wait_for_run(&thread, &run).await.map_err(|e| {
            tracing::error!(kind = %request.kind, thread = %thread, error = %e, "assistant run did not complete");
            e
        })?;
        if !state.status.is_completed() {
            let message = state
                .last_error
                .unwrap_or_else(|| "unknown error".to_string());
            tracing::error!(kind = %request.kind, status = %state.status, %message, "assistant run failed");
            return Err(GenerationError::run_failed(state.status.as_str(), message));
        }

        let messages = self.threads.list_messages(&thread).await?;
        let reply = messages
            .into_iter()
            .filter(|m| m.role == MessageRole::Assistant)
            .find_map(|m| m.text)
            .filter(|text| !text.trim().is_empty())
            .ok_or(GenerationError::EmptyReply)?;

        extract_json_array(&reply).map_err(|e| {
            tracing::warn!(kind = %request.kind, error = %e, "assistant reply has no usable JSON array");
            GenerationError::InvalidFormat(e)
        })
    }
}
