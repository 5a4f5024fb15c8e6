use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::{BookCopyDto, TitleSummaryDto};
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub(crate) struct GetBookCommand {
    catalog_service: Box<dyn CatalogService>,
}

impl GetBookCommand {
    pub(crate) fn new(catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct GetBookCommandRequest {
    pub(crate) title: String,
}

impl GetBookCommandRequest {
    pub fn new(title: String) -> Self {
        Self {
            title,
        }
    }
}


#[derive(Debug, Serialize)]
pub(crate) struct GetBookCommandResponse {
    summary: TitleSummaryDto,
    copies: Vec<BookCopyDto>,
}

#[async_trait]
impl Command<GetBookCommandRequest, GetBookCommandResponse> for GetBookCommand {
    async fn execute(&self, req: GetBookCommandRequest) -> Result<GetBookCommandResponse, CommandError> {
        let summary = self.catalog_service.summary_of(req.title.as_str()).await?;
        let copies = self.catalog_service.copies_of(req.title.as_str()).await?;
        Ok(GetBookCommandResponse { summary, copies })
    }
}
