use std::collections::HashMap;
use axum::{
    extract::{Path, Query, State},
    response::Json,
};
use serde_json::{Value};
use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest, AddBookCommandResponse};
use crate::catalog::command::get_book_cmd::{GetBookCommand, GetBookCommandRequest, GetBookCommandResponse};
use crate::catalog::command::inventory_cmd::{InventoryCommand, InventoryCommandResponse};
use crate::catalog::command::list_copies_cmd::{ListCopiesCommand, ListCopiesCommandRequest, ListCopiesCommandResponse};
use crate::catalog::command::search_books_cmd::{SearchBooksCommand, SearchBooksCommandRequest, SearchBooksCommandResponse};
use crate::catalog::domain::CatalogService;
use crate::catalog::factory;
use crate::checkout::controller as checkout_controller;
use crate::core::command::Command;
use crate::core::controller::{AppState, json_to_server_error, ServerError};

async fn build_service(state: AppState) -> Box<dyn CatalogService> {
    factory::create_catalog_service(&state.config, state.store).await
}

pub(crate) async fn add_book(
    State(state): State<AppState>,
    json: Json<Value>) -> Result<Json<AddBookCommandResponse>, ServerError> {
    let req: AddBookCommandRequest = serde_json::from_value(json.0).map_err(json_to_server_error)?;
    let svc = build_service(state).await;
    let res = AddBookCommand::new(svc).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn find_book_by_title(
    State(state): State<AppState>,
    Path(title): Path<String>) -> Result<Json<GetBookCommandResponse>, ServerError> {
    let req = GetBookCommandRequest { title };
    let svc = build_service(state).await;
    let res = GetBookCommand::new(svc).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn inventory(
    State(state): State<AppState>) -> Result<Json<InventoryCommandResponse>, ServerError> {
    let checkout_svc = checkout_controller::build_service(state.clone()).await;
    let svc = build_service(state).await;
    let res = InventoryCommand::new(svc, checkout_svc).execute(()).await?;
    Ok(Json(res))
}

pub(crate) async fn search_books(
    State(state): State<AppState>,
    Path(query): Path<String>) -> Result<Json<SearchBooksCommandResponse>, ServerError> {
    let req = SearchBooksCommandRequest { query };
    let svc = build_service(state).await;
    let res = SearchBooksCommand::new(svc).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn list_copies(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>) -> Result<Json<ListCopiesCommandResponse>, ServerError> {
    let req = ListCopiesCommandRequest::from_params(params, state.config.page_size);
    let svc = build_service(state).await;
    let res = ListCopiesCommand::new(svc).execute(req).await?;
    Ok(Json(res))
}
