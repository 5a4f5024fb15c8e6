use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::checkout::domain::CheckoutService;
use crate::core::command::{Command, CommandError};
use crate::hold::dto::WaitRequestDto;

pub(crate) struct WaitingLineCommand {
    checkout_service: Box<dyn CheckoutService>,
}

impl WaitingLineCommand {
    pub(crate) fn new(checkout_service: Box<dyn CheckoutService>) -> Self {
        Self {
            checkout_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct WaitingLineCommandRequest {
    pub(crate) title: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct WaitingLineCommandResponse {
    title: String,
    requests: Vec<WaitRequestDto>,
}

#[async_trait]
impl Command<WaitingLineCommandRequest, WaitingLineCommandResponse> for WaitingLineCommand {
    async fn execute(&self, req: WaitingLineCommandRequest) -> Result<WaitingLineCommandResponse, CommandError> {
        let requests = self.checkout_service.waiting_line(req.title.as_str()).await?;
        Ok(WaitingLineCommandResponse { title: req.title, requests })
    }
}
