use std::collections::HashMap;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookCopyDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};
use crate::core::library::PaginatedResult;

pub(crate) struct ListCopiesCommand {
    catalog_service: Box<dyn CatalogService>,
}

impl ListCopiesCommand {
    pub(crate) fn new(catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ListCopiesCommandRequest {
    predicate: HashMap<String, String>,
    page: Option<String>,
    page_size: usize,
}

impl ListCopiesCommandRequest {
    // from_params treats every query parameter but `page` as a predicate
    pub fn from_params(mut params: HashMap<String, String>, page_size: usize) -> Self {
        let page = params.remove("page");
        Self {
            predicate: params,
            page,
            page_size,
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct ListCopiesCommandResponse {
    copies: PaginatedResult<BookCopyDto>,
}

#[async_trait]
impl Command<ListCopiesCommandRequest, ListCopiesCommandResponse> for ListCopiesCommand {
    async fn execute(&self, req: ListCopiesCommandRequest) -> Result<ListCopiesCommandResponse, CommandError> {
        let copies = self.catalog_service.query(&req.predicate, req.page.as_deref(), req.page_size).await?;
        Ok(ListCopiesCommandResponse { copies })
    }
}
