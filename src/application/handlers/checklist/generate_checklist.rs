//! GenerateChecklist command handler.

use std::sync::Arc;
use thiserror::Error;

use crate::domain::checklist::{
    checklist_instruction, reconcile_confirmed, ChecklistItem, ChecklistRequest, NewChecklist,
    CHECKLIST_SYSTEM_PROMPT,
};
use crate::domain::foundation::{DomainError, UserId, ValidationError};
use crate::domain::generation::decode_records;
use crate::ports::{
    ChecklistRepository, GenerationError, GenerationKind, StructuredGenerator, StructuredRequest,
};

/// Command to generate a packing checklist.
#[derive(Debug, Clone)]
pub struct GenerateChecklistCommand {
    pub user_id: UserId,
    pub destination: String,
    pub climate: String,
    pub duration: i64,
    pub trip_type: String,
    pub confirmed_items: Vec<String>,
}

/// Errors that can occur when generating a checklist.
#[derive(Debug, Clone, Error)]
pub enum GenerateChecklistError {
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Generation failed: {0}")]
    Generation(#[from] GenerationError),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<DomainError> for GenerateChecklistError {
    fn from(err: DomainError) -> Self {
        GenerateChecklistError::RepositoryError(err.to_string())
    }
}

/// Handler for GenerateChecklist commands.
pub struct GenerateChecklistHandler {
    generator: Arc<dyn StructuredGenerator>,
    checklists: Arc<dyn ChecklistRepository>,
}

impl GenerateChecklistHandler {
    pub fn new(
        generator: Arc<dyn StructuredGenerator>,
        checklists: Arc<dyn ChecklistRepository>,
    ) -> Self {
        Self {
            generator,
            checklists,
        }
    }

    /// Generates the items and forces confirmed ones to checked.
    pub async fn handle(
        &self,
        cmd: GenerateChecklistCommand,
    ) -> Result<Vec<ChecklistItem>, GenerateChecklistError> {
        let request = ChecklistRequest::new(
            cmd.destination,
            cmd.climate,
            cmd.duration,
            cmd.trip_type,
            cmd.confirmed_items,
        )?;

        tracing::info!(
            destination = %request.destination,
            duration = request.duration,
            confirmed = request.confirmed_items.len(),
            "generating checklist"
        );

        let values = self
            .generator
            .generate(StructuredRequest::new(
                GenerationKind::Checklist,
                CHECKLIST_SYSTEM_PROMPT,
                checklist_instruction(&request),
            ))
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "checklist generation failed");
                e
            })?;
        let mut items: Vec<ChecklistItem> = decode_records(values).map_err(|e| {
            tracing::error!(error = %e, "checklist reply did not match the item schema");
            GenerationError::from(e)
        })?;
        reconcile_confirmed(&mut items, &request.confirmed_items);

        self.checklists
            .create(NewChecklist {
                user_id: cmd.user_id,
                request,
                items: items.clone(),
            })
            .await?;

        Ok(items)
    }
}
