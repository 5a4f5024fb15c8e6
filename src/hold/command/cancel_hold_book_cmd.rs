use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::checkout::domain::CheckoutService;
use crate::core::command::{Command, CommandError};

pub(crate) struct CancelHoldBookCommand {
    checkout_service: Box<dyn CheckoutService>,
}

impl CancelHoldBookCommand {
    pub(crate) fn new(checkout_service: Box<dyn CheckoutService>) -> Self {
        Self {
            checkout_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct CancelHoldBookCommandRequest {
    requester_id: String,
    title: String,
}

impl CancelHoldBookCommandRequest {
    pub fn new(requester_id: String, title: String) -> Self {
        Self {
            requester_id,
            title,
        }
    }
}


#[derive(Debug, Serialize)]
pub(crate) struct CancelHoldBookCommandResponse {
    title: String,
    requester_id: String,
    cancelled: bool,
}

#[async_trait]
impl Command<CancelHoldBookCommandRequest, CancelHoldBookCommandResponse> for CancelHoldBookCommand {
    async fn execute(&self, req: CancelHoldBookCommandRequest) -> Result<CancelHoldBookCommandResponse, CommandError> {
        let cancelled = self.checkout_service.cancel_request(req.title.as_str(), req.requester_id.as_str()).await?;
        Ok(CancelHoldBookCommandResponse { title: req.title, requester_id: req.requester_id, cancelled })
    }
}
