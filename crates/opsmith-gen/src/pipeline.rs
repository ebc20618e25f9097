use opsmith_core::{GeneratedPlaybook, GenerationRequest, ParsedTask, Structure};
use tracing::{debug, info};

use crate::backend::TextBackend;
use crate::error::GenError;
use crate::response::{parse_multi_file_response, parse_task_response};

/// Generate a playbook through the external text service.
///
/// Exactly one outstanding request per call; no retry, no coalescing, no
/// timeout of its own. Dropping the returned future abandons the attempt
/// and discards the eventual result.
pub async fn generate_playbook(
    backend: &dyn TextBackend,
    req: &GenerationRequest,
) -> Result<GeneratedPlaybook, GenError> {
    let prompt = opsmith_prompts::playbook_prompt(req);
    info!(
        backend = backend.name(),
        model = backend.model_hint().unwrap_or("-"),
        structure = %req.structure,
        tasks = req.tasks.len(),
        "requesting playbook generation"
    );

    let content = backend
        .generate(&prompt)
        .await
        .map_err(|e| GenError::Backend(e.to_string()))?;
    debug!(bytes = content.len(), "received generation response");

    match req.structure {
        Structure::Single => Ok(GeneratedPlaybook::Single(content.trim().to_string())),
        Structure::Multi => {
            let files = parse_multi_file_response(&content)?;
            info!(files = files.len(), "parsed multi-file response");
            Ok(GeneratedPlaybook::Multi(files))
        }
    }
}

/// Ask the text service to break a requirement into tasks and parse its
/// JSON reply. Alternative to the local rule-based extractor.
pub async fn generate_tasks(
    backend: &dyn TextBackend,
    description: &str,
) -> Result<Vec<ParsedTask>, GenError> {
    let prompt = opsmith_prompts::task_generation_prompt(description);
    info!(backend = backend.name(), "requesting task generation");

    let response = backend
        .generate(&prompt)
        .await
        .map_err(|e| GenError::Backend(e.to_string()))?;
    let tasks = parse_task_response(&response)?;
    info!(tasks = tasks.len(), "parsed generated tasks");
    Ok(tasks)
}
