//! Chat RPC handlers.
//!
//! All three chat operations share one endpoint path and are addressed by
//! procedure name, mirroring the RPC surface the web client speaks:
//! - POST /api/v1/rpc/chat.list        -> [Message, ...]
//! - POST /api/v1/rpc/chat.sendMessage -> { success, reply }
//! - POST /api/v1/rpc/chat.clearChat   -> { success, error? }

use axum::Json;
use axum::body::Bytes;
use axum::extract::{Path, State};
use serde::Deserialize;
use serde_json::Value;

use banter_core::chat::RequestContext;

use crate::http::error::AppError;
use crate::state::AppState;

/// Input for `chat.sendMessage`.
#[derive(Debug, Deserialize)]
pub struct SendMessageInput {
    pub text: String,
}

/// POST /api/v1/rpc/{procedure} - dispatch one RPC call by name.
pub async fn dispatch(
    State(state): State<AppState>,
    Path(procedure): Path<String>,
    body: Bytes,
) -> Result<Json<Value>, AppError> {
    // No auth is wired in; every request runs anonymously.
    let ctx = RequestContext::anonymous();

    match procedure.as_str() {
        "chat.list" => {
            let messages = state.chat_service.list().await;
            Ok(Json(serde_json::to_value(messages).unwrap()))
        }

        "chat.sendMessage" => {
            let input: SendMessageInput = serde_json::from_slice(&body)
                .map_err(|e| AppError::BadInput(format!("invalid input: {e}")))?;

            let outcome = state.chat_service.send(&ctx, &input.text).await?;
            Ok(Json(serde_json::to_value(outcome).unwrap()))
        }

        "chat.clearChat" => {
            let outcome = state.chat_service.clear().await;
            Ok(Json(serde_json::to_value(outcome).unwrap()))
        }

        _ => Err(AppError::UnknownProcedure(procedure)),
    }
}
