use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::checkout::domain::CheckoutService;
use crate::core::command::{Command, CommandError};

pub(crate) struct QueuePositionCommand {
    checkout_service: Box<dyn CheckoutService>,
}

impl QueuePositionCommand {
    pub(crate) fn new(checkout_service: Box<dyn CheckoutService>) -> Self {
        Self {
            checkout_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct QueuePositionCommandRequest {
    requester_id: String,
    title: String,
}

impl QueuePositionCommandRequest {
    pub fn new(requester_id: String, title: String) -> Self {
        Self {
            requester_id,
            title,
        }
    }
}


#[derive(Debug, Serialize)]
pub(crate) struct QueuePositionCommandResponse {
    title: String,
    requester_id: String,
    position: i64,
}

#[async_trait]
impl Command<QueuePositionCommandRequest, QueuePositionCommandResponse> for QueuePositionCommand {
    async fn execute(&self, req: QueuePositionCommandRequest) -> Result<QueuePositionCommandResponse, CommandError> {
        let position = self.checkout_service.queue_position(req.title.as_str(), req.requester_id.as_str()).await?;
        Ok(QueuePositionCommandResponse { title: req.title, requester_id: req.requester_id, position })
    }
}
