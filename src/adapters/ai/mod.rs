//! AI Adapters.
//!
//! ## Available Adapters
//!
//! - `OpenAIProvider` - OpenAI chat completions
//! - `OpenAIAssistantsClient` - OpenAI Assistants v2 threads and runs
//! - `CompletionStructuredGenerator` - Structured output via one JSON-mode completion
//! - `ThreadRunStructuredGenerator` - Structured output via an assistant run with bounded polling
//! - `MockAIProvider`, `MockAssistantThreads`, `MockStructuredGenerator` - Test doubles

mod completion_generator;
mod mock_assistant_threads;
mod mock_provider;
mod mock_structured_generator;
mod openai_assistants;
mod openai_provider;
mod thread_run_generator;

pub use completion_generator::CompletionStructuredGenerator;
pub use mock_assistant_threads::MockAssistantThreads;
pub use mock_provider::{MockAIProvider, MockResponse};
pub use mock_structured_generator::MockStructuredGenerator;
pub use openai_assistants::OpenAIAssistantsClient;
pub use openai_provider::{OpenAIConfig, OpenAIProvider};
pub use thread_run_generator::{AssistantIds, PollPolicy, ThreadRunStructuredGenerator};
