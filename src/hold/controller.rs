use axum::{
    extract::{Path, State},
    response::Json,
};
use serde_json::{Value};
use crate::checkout::controller::build_service;
use crate::core::command::Command;
use crate::core::controller::{AppState, json_to_server_error, ServerError};
use crate::hold::command::cancel_hold_book_cmd::{CancelHoldBookCommand, CancelHoldBookCommandRequest, CancelHoldBookCommandResponse};
use crate::hold::command::queue_position_cmd::{QueuePositionCommand, QueuePositionCommandRequest, QueuePositionCommandResponse};
use crate::hold::command::waiting_line_cmd::{WaitingLineCommand, WaitingLineCommandRequest, WaitingLineCommandResponse};

pub(crate) async fn cancel_hold_book(
    State(state): State<AppState>,
    json: Json<Value>) -> Result<Json<CancelHoldBookCommandResponse>, ServerError> {
    let req: CancelHoldBookCommandRequest = serde_json::from_value(json.0).map_err(json_to_server_error)?;
    let svc = build_service(state).await;
    let res = CancelHoldBookCommand::new(svc).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn queue_position(
    State(state): State<AppState>,
    json: Json<Value>) -> Result<Json<QueuePositionCommandResponse>, ServerError> {
    let req: QueuePositionCommandRequest = serde_json::from_value(json.0).map_err(json_to_server_error)?;
    let svc = build_service(state).await;
    let res = QueuePositionCommand::new(svc).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn waiting_line(
    State(state): State<AppState>,
    Path(title): Path<String>) -> Result<Json<WaitingLineCommandResponse>, ServerError> {
    let req = WaitingLineCommandRequest { title };
    let svc = build_service(state).await;
    let res = WaitingLineCommand::new(svc).execute(req).await?;
    Ok(Json(res))
}
