//! HTTP handlers for chat, itinerary and checklist generation.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use super::dto::{ChatRequest, ChatResponse, ChecklistParams, ItineraryParams};
use crate::adapters::http::common::{invalid_request, rejected_body, ErrorResponse};
use crate::adapters::http::state::TravelAppState;
use crate::application::handlers::chat::{SendChatMessageCommand, SendChatMessageError};
use crate::application::handlers::checklist::GenerateChecklistError;
use crate::application::handlers::itinerary::GenerateItineraryError;
use crate::domain::foundation::ErrorCode;
use crate::ports::GenerationError;

const CHAT_FAILED: &str = "Erro ao processar sua mensagem. Por favor, tente novamente.";
const ITINERARY_FAILED: &str = "Erro ao gerar o roteiro. Por favor, tente novamente.";
const ITINERARY_UNREADABLE: &str =
    "Não foi possível interpretar o roteiro gerado. Por favor, tente novamente.";
const CHECKLIST_FAILED: &str = "Erro ao gerar a lista de itens. Por favor, tente novamente.";
const CHECKLIST_UNREADABLE: &str =
    "Não foi possível interpretar a lista de itens gerada. Por favor, tente novamente.";

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/chat - Ask the travel guide
pub async fn send_chat_message(
    State(state): State<TravelAppState>,
    body: Result<Json<ChatRequest>, JsonRejection>,
) -> Response {
    let Json(req) = match body {
        Ok(body) => body,
        Err(rejection) => return rejected_body(rejection),
    };

    let cmd = SendChatMessageCommand::new(state.current_user, req.message);
    match state.send_chat_message_handler().handle(cmd).await {
        Ok(response) => (StatusCode::OK, Json(ChatResponse { response })).into_response(),
        Err(SendChatMessageError::Validation(e)) => invalid_request(&e),
        Err(e) => {
            tracing::error!(error = %e, "chat request failed");
            ErrorResponse::new(ErrorCode::AIProviderError, CHAT_FAILED)
                .with_status(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// POST /api/itinerary - Generate a day-by-day itinerary
pub async fn generate_itinerary(
    State(state): State<TravelAppState>,
    body: Result<Json<ItineraryParams>, JsonRejection>,
) -> Response {
    let Json(params) = match body {
        Ok(body) => body,
        Err(rejection) => return rejected_body(rejection),
    };

    let cmd = params.into_command(state.current_user);
    match state.generate_itinerary_handler().handle(cmd).await {
        Ok(days) => (StatusCode::OK, Json(days)).into_response(),
        Err(GenerateItineraryError::Validation(e)) => invalid_request(&e),
        Err(GenerateItineraryError::Generation(e)) => {
            generation_failure(&e, ITINERARY_FAILED, ITINERARY_UNREADABLE)
        }
        Err(GenerateItineraryError::RepositoryError(msg)) => {
            tracing::error!(error = %msg, "failed to record itinerary");
            ErrorResponse::internal(ITINERARY_FAILED)
                .with_status(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// POST /api/checklist - Generate a packing checklist
pub async fn generate_checklist(
    State(state): State<TravelAppState>,
    body: Result<Json<ChecklistParams>, JsonRejection>,
) -> Response {
    let Json(params) = match body {
        Ok(body) => body,
        Err(rejection) => return rejected_body(rejection),
    };

    let cmd = params.into_command(state.current_user);
    match state.generate_checklist_handler().handle(cmd).await {
        Ok(items) => (StatusCode::OK, Json(items)).into_response(),
        Err(GenerateChecklistError::Validation(e)) => invalid_request(&e),
        Err(GenerateChecklistError::Generation(e)) => {
            generation_failure(&e, CHECKLIST_FAILED, CHECKLIST_UNREADABLE)
        }
        Err(GenerateChecklistError::RepositoryError(msg)) => {
            tracing::error!(error = %msg, "failed to record checklist");
            ErrorResponse::internal(CHECKLIST_FAILED)
                .with_status(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

/// Separates "the service failed" from "the model answered with garbage".
fn generation_failure(error: &GenerationError, failed: &str, unreadable: &str) -> Response {
    let body = if error.is_reply_problem() {
        ErrorResponse::new(ErrorCode::InvalidAIResponse, unreadable)
    } else {
        ErrorResponse::new(ErrorCode::AIProviderError, failed)
    };
    body.with_status(StatusCode::INTERNAL_SERVER_ERROR)
}
