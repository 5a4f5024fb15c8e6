use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookCopyDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub(crate) struct AddBookCommand {
    catalog_service: Box<dyn CatalogService>,
}

impl AddBookCommand {
    pub(crate) fn new(catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct AddBookCommandRequest {
    pub catalog_id: String,
    pub copy_number: u32,
    pub title: String,
    pub author: String,
}

impl AddBookCommandRequest {
    pub fn new(catalog_id: &str, copy_number: u32, title: &str, author: &str) -> Self {
        Self {
            catalog_id: catalog_id.to_string(),
            copy_number,
            title: title.to_string(),
            author: author.to_string(),
        }
    }

    pub fn build_copy(&self) -> BookCopyDto {
        BookCopyDto::new(self.catalog_id.as_str(), self.copy_number, self.title.as_str(), self.author.as_str())
    }
}


#[derive(Debug, Serialize)]
pub(crate) struct AddBookCommandResponse {
    pub copy: BookCopyDto,
}

impl AddBookCommandResponse {
    pub fn new(copy: BookCopyDto) -> Self {
        Self {
            copy,
        }
    }
}

#[async_trait]
impl Command<AddBookCommandRequest, AddBookCommandResponse> for AddBookCommand {
    async fn execute(&self, req: AddBookCommandRequest) -> Result<AddBookCommandResponse, CommandError> {
        self.catalog_service.add_copy(&req.build_copy())
            .await.map_err(CommandError::from).map(AddBookCommandResponse::new)
    }
}
