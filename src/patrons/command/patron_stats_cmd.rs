use async_trait::async_trait;
use serde::Serialize;
use crate::core::command::{Command, CommandError};
use crate::patrons::domain::PatronService;
use crate::patrons::dto::DirectoryStatsDto;

pub(crate) struct PatronStatsCommand {
    patron_service: Box<dyn PatronService>,
}

impl PatronStatsCommand {
    pub(crate) fn new(patron_service: Box<dyn PatronService>) -> Self {
        Self {
            patron_service,
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct PatronStatsCommandResponse {
    stats: DirectoryStatsDto,
}

#[async_trait]
impl Command<(), PatronStatsCommandResponse> for PatronStatsCommand {
    async fn execute(&self, _req: ()) -> Result<PatronStatsCommandResponse, CommandError> {
        self.patron_service.stats()
            .await.map_err(CommandError::from).map(|stats| PatronStatsCommandResponse { stats })
    }
}
