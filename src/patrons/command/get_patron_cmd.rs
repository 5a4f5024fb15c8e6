use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookCopyDto;
use crate::catalog::domain::CatalogService;
use crate::patrons::dto::RequesterDto;
use crate::core::command::{Command, CommandError};
use crate::patrons::domain::PatronService;

pub(crate) struct GetPatronCommand {
    patron_service: Box<dyn PatronService>,
    catalog_service: Box<dyn CatalogService>,
}

impl GetPatronCommand {
    pub(crate) fn new(patron_service: Box<dyn PatronService>, catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            patron_service,
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct GetPatronCommandRequest {
    pub requester_id: String,
}

impl GetPatronCommandRequest {
    pub fn new(requester_id: String) -> Self {
        Self {
            requester_id,
        }
    }
}


#[derive(Debug, Serialize)]
pub(crate) struct GetPatronCommandResponse {
    patron: RequesterDto,
    loans: Vec<BookCopyDto>,
}

#[async_trait]
impl Command<GetPatronCommandRequest, GetPatronCommandResponse> for GetPatronCommand {
    async fn execute(&self, req: GetPatronCommandRequest) -> Result<GetPatronCommandResponse, CommandError> {
        let patron = self.patron_service.find(req.requester_id.as_str()).await?;
        let loans = self.catalog_service.loans_of(req.requester_id.as_str()).await?;
        Ok(GetPatronCommandResponse { patron, loans })
    }
}
