//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the application handlers and the outside world. Adapters implement them.
//!
//! ## AI Ports
//!
//! - `AIProvider` - One-shot chat completions
//! - `StructuredGenerator` - Instruction in, parsed JSON array out
//! - `AssistantThreads` - Thread/run protocol used by one generator strategy
//!
//! ## Store Ports
//!
//! - `DestinationCatalog`, `ExchangeRateRepository`, `ItineraryRepository`,
//!   `ChecklistRepository`, `ChatHistoryRepository`, `UserRepository`

mod ai_provider;
mod assistant_threads;
mod chat_history_repository;
mod checklist_repository;
mod destination_catalog;
mod exchange_rate_repository;
mod itinerary_repository;
mod structured_generator;
mod user_repository;

pub use ai_provider::{
    AIError, AIProvider, CompletionRequest, CompletionResponse, FinishReason, Message,
    MessageRole, ProviderInfo, TokenUsage,
};
pub use assistant_threads::{
    AssistantThreads, RunId, RunState, RunStatus, ThreadError, ThreadId, ThreadMessage,
};
pub use chat_history_repository::ChatHistoryRepository;
pub use checklist_repository::ChecklistRepository;
pub use destination_catalog::DestinationCatalog;
pub use exchange_rate_repository::ExchangeRateRepository;
pub use itinerary_repository::ItineraryRepository;
pub use structured_generator::{
    GenerationError, GenerationKind, StructuredGenerator, StructuredRequest,
};
pub use user_repository::UserRepository;
