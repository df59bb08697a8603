use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    routing::post,
    Json, Router,
};
use cosmos_core::{
    resolve_prompt, sanitize, ChatRequest, ChatResponse, CosmosError, ErrorBody,
    GenerationConfig, ResolvedPrompt,
};
use tracing::{error, info, info_span, warn, Instrument};
use uuid::Uuid;

use super::{AppState, InnerAppState};

const GENERATION_FAILED: &str = "Failed to generate response";

pub fn routes() -> Router<AppState> {
    Router::new().route("/chat", post(chat))
}

async fn chat(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, (StatusCode, Json<ErrorBody>)> {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            warn!("unreadable chat body: {rejection}");
            ChatRequest::default()
        }
    };
    let raw = request.validated_prompt().map_err(to_error)?;

    let resolved = resolve_prompt(raw);
    let span = info_span!("chat", request_id = %Uuid::new_v4(), mode = %resolved.mode);

    respond(&state, resolved)
        .instrument(span)
        .await
        .map(|response| Json(ChatResponse { response }))
        .map_err(to_error)
}

/// Load the mode's template, call the generator once, clean the reply.
async fn respond(state: &InnerAppState, resolved: ResolvedPrompt<'_>) -> Result<String, CosmosError> {
    let instructions = state.loader.load(resolved.mode);
    let config = GenerationConfig::for_mode(resolved.mode);
    info!(
        generator = state.generator.name(),
        instruction_bytes = instructions.len(),
        "forwarding prompt"
    );

    let text = state
        .generator
        .generate(resolved.prompt, &instructions, &config)
        .await
        .map_err(|e| {
            error!("generation failed: {e}");
            CosmosError::Generation(e.to_string())
        })?;

    let response = sanitize(&text, resolved.mode);
    info!(raw_len = text.len(), cleaned_len = response.len(), "response ready");
    Ok(response)
}

fn to_error(e: CosmosError) -> (StatusCode, Json<ErrorBody>) {
    match e {
        CosmosError::InvalidInput(msg) => (StatusCode::BAD_REQUEST, Json(ErrorBody::new(msg))),
        CosmosError::Generation(details) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorBody::new(GENERATION_FAILED).with_details(details)),
        ),
    }
}
