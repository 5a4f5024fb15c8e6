use axum::{
    extract::{Path, State},
    response::Json,
};
use serde_json::{Value};
use crate::catalog::factory::create_catalog_service;
use crate::core::command::Command;
use crate::core::controller::{AppState, json_to_server_error, ServerError};
use crate::patrons::command::add_patron_cmd::{AddPatronCommand, AddPatronCommandRequest, AddPatronCommandResponse};
use crate::patrons::command::get_patron_cmd::{GetPatronCommand, GetPatronCommandRequest, GetPatronCommandResponse};
use crate::patrons::command::patron_stats_cmd::{PatronStatsCommand, PatronStatsCommandResponse};
use crate::patrons::domain::PatronService;
use crate::patrons::factory;

fn build_service(state: &AppState) -> Box<dyn PatronService> {
    factory::create_patron_service(&state.config, state.store.clone())
}

pub(crate) async fn add_patron(
    State(state): State<AppState>,
    json: Json<Value>) -> Result<Json<AddPatronCommandResponse>, ServerError> {
    let req: AddPatronCommandRequest = serde_json::from_value(json.0).map_err(json_to_server_error)?;
    let svc = build_service(&state);
    let res = AddPatronCommand::new(svc).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn find_patron_by_id(
    State(state): State<AppState>,
    Path(requester_id): Path<String>) -> Result<Json<GetPatronCommandResponse>, ServerError> {
    let req = GetPatronCommandRequest { requester_id };
    let svc = build_service(&state);
    let catalog_svc = create_catalog_service(&state.config, state.store.clone()).await;
    let res = GetPatronCommand::new(svc, catalog_svc).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn patron_stats(
    State(state): State<AppState>) -> Result<Json<PatronStatsCommandResponse>, ServerError> {
    let svc = build_service(&state);
    let res = PatronStatsCommand::new(svc).execute(()).await?;
    Ok(Json(res))
}
