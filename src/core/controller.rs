use axum::http::StatusCode;
use axum::{
    routing::{get, post},
    Router,
};
use crate::catalog::controller::{add_book, find_book_by_title, inventory, list_copies, search_books};
use crate::checkout::controller::{checkout_book, return_book};
use crate::core::command::CommandError;
use crate::core::domain::Configuration;
use crate::core::repository::LibraryStore;
use crate::hold::controller::{cancel_hold_book, queue_position, waiting_line};
use crate::patrons::controller::{add_patron, find_patron_by_id, patron_stats};

#[derive(Clone)]
pub struct AppState {
    pub(crate) config: Configuration,
    pub(crate) store: LibraryStore,
}

impl AppState {
    pub fn new(config: Configuration, store: LibraryStore) -> AppState {
        AppState {
            config,
            store,
        }
    }
}

pub(crate) type ServerError = (StatusCode, String);

pub fn json_to_server_error(err: serde_json::Error) -> ServerError {
    (StatusCode::BAD_REQUEST, format!("{}", err))
}

impl From<CommandError> for ServerError {
    fn from(err: CommandError) -> Self {
        match err {
            CommandError::DuplicateKey { .. } => {
                (StatusCode::CONFLICT, format!("{:?}", err))
            }
            CommandError::NotFound { .. } => {
                (StatusCode::NOT_FOUND, format!("{:?}", err))
            }
            CommandError::Conflict { .. } => {
                (StatusCode::CONFLICT, format!("{:?}", err))
            }
            CommandError::Runtime { .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, format!("{:?}", err))
            }
            CommandError::Serialization { .. } => {
                (StatusCode::BAD_REQUEST, format!("{:?}", err))
            }
            CommandError::Validation { .. } => {
                (StatusCode::BAD_REQUEST, format!("{:?}", err))
            }
        }
    }
}

// build_router wires every lending endpoint over one shared state
pub fn build_router(state: AppState) -> Router<(), lambda_http::Body> {
    Router::new()
        .route("/catalog", post(add_book).get(inventory))
        .route("/catalog/copies", get(list_copies))
        .route("/catalog/:title", get(find_book_by_title))
        .route("/catalog/search/:query", get(search_books))
        .route("/patrons", post(add_patron))
        .route("/patrons/stats", get(patron_stats))
        .route("/patrons/:id", get(find_patron_by_id))
        .route("/checkout", post(checkout_book))
        .route("/checkout/return", post(return_book))
        .route("/hold/cancel", post(cancel_hold_book))
        .route("/hold/position", post(queue_position))
        .route("/hold/:title", get(waiting_line))
        .with_state(state)
}
